//! Text formats for tournament data.
//!
//! Two layouts share a common header line holding the item count `n`:
//!
//! - **Dense**: `n` further lines, each with `n` whitespace-separated reals;
//!   row `i` holds the weights from item `i`.
//! - **Sparse**: lines of `i j weight` triples, accumulated additively into
//!   `weight[i][j]` (repeated pairs sum).
//!
//! The layout is detected from the body: exactly `n * n` values is dense,
//! otherwise all-triple lines are sparse. When both readings are possible
//! (only at `n = 3`) the dense reading wins.

use super::Tournament;
use crate::error::ParseError;

/// Parses tournament text in either the dense or the sparse format.
pub fn parse_tournament(input: &str) -> Result<Tournament, ParseError> {
    let mut rows: Vec<(usize, Vec<&str>)> = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if !tokens.is_empty() {
            rows.push((idx + 1, tokens));
        }
    }

    let Some((_, size_tokens)) = rows.first() else {
        return Err(ParseError::Empty);
    };
    if size_tokens.len() != 1 {
        return Err(ParseError::InvalidSize(size_tokens.join(" ")));
    }
    let size: usize = size_tokens[0]
        .parse()
        .map_err(|_| ParseError::InvalidSize(size_tokens[0].to_string()))?;

    let body = &rows[1..];
    let total: usize = body.iter().map(|(_, tokens)| tokens.len()).sum();

    let mut tournament = Tournament::new(size);

    if total == size * size {
        parse_dense(&mut tournament, body)?;
    } else if body.iter().all(|(_, tokens)| tokens.len() == 3) {
        parse_sparse(&mut tournament, body)?;
    } else {
        return Err(ParseError::MalformedBody {
            expected: size * size,
            found: total,
        });
    }

    Ok(tournament)
}

fn parse_dense(tournament: &mut Tournament, body: &[(usize, Vec<&str>)]) -> Result<(), ParseError> {
    let size = tournament.size();
    let mut position = 0usize;
    for (line, tokens) in body {
        for token in tokens {
            let weight: f64 = token.parse().map_err(|_| ParseError::InvalidWeight {
                line: *line,
                token: token.to_string(),
            })?;
            tournament.set(position / size, position % size, weight);
            position += 1;
        }
    }
    Ok(())
}

fn parse_sparse(tournament: &mut Tournament, body: &[(usize, Vec<&str>)]) -> Result<(), ParseError> {
    let size = tournament.size();
    for (line, tokens) in body {
        let i = parse_index(tokens[0], *line, size)?;
        let j = parse_index(tokens[1], *line, size)?;
        let weight: f64 = tokens[2].parse().map_err(|_| ParseError::InvalidWeight {
            line: *line,
            token: tokens[2].to_string(),
        })?;
        tournament.add(i, j, weight);
    }
    Ok(())
}

fn parse_index(token: &str, line: usize, size: usize) -> Result<usize, ParseError> {
    let index: usize = token.parse().map_err(|_| ParseError::InvalidWeight {
        line,
        token: token.to_string(),
    })?;
    if index >= size {
        return Err(ParseError::IndexOutOfRange { line, index, size });
    }
    Ok(index)
}
