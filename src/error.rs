//! Error types for tournament input handling.
//!
//! Engine-internal contract violations (out-of-range matrix indices) are
//! programming errors and panic; only data-level problems — malformed
//! tournament text — surface as recoverable errors.

use thiserror::Error;

/// Errors produced while parsing tournament text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input contained no non-blank lines.
    #[error("input is empty")]
    Empty,

    /// The first non-blank line was not a single item count.
    #[error("invalid item count: {0:?}")]
    InvalidSize(String),

    /// A weight token could not be parsed as a real number.
    #[error("invalid weight {token:?} on line {line}")]
    InvalidWeight { line: usize, token: String },

    /// A sparse-format item index referenced an item outside the tournament.
    #[error("index {index} out of range for tournament of size {size} on line {line}")]
    IndexOutOfRange {
        line: usize,
        index: usize,
        size: usize,
    },

    /// The body matched neither the dense nor the sparse layout.
    #[error("expected {expected} dense weights or `i j weight` triples, found {found} values")]
    MalformedBody { expected: usize, found: usize },
}
