//! Pipeline configuration.
//!
//! [`OrderingConfig`] holds the parameters of the full optimization run.

/// Configuration for [`optimal_ordering`](super::optimal_ordering).
///
/// # Defaults
///
/// ```
/// use fas_rank::OrderingConfig;
///
/// let config = OrderingConfig::default();
/// assert_eq!(config.population_size, 500);
/// assert_eq!(config.generations, 1000);
/// assert_eq!(config.exact_threshold, 15);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use fas_rank::OrderingConfig;
///
/// let config = OrderingConfig::default()
///     .with_population_size(200)
///     .with_generations(400)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct OrderingConfig {
    /// Number of candidate orderings held by the population phase.
    pub population_size: usize,

    /// Generation budget of the population phase.
    pub generations: usize,

    /// Largest item count solved exactly instead of heuristically.
    ///
    /// The exact solver explores subsets exhaustively; values much above 15
    /// make it intractable.
    pub exact_threshold: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            population_size: 500,
            generations: 1000,
            exact_threshold: 15,
            seed: None,
        }
    }
}

impl OrderingConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the exact-solve size threshold.
    pub fn with_exact_threshold(mut self, n: usize) -> Self {
        self.exact_threshold = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.exact_threshold == 0 {
            return Err("exact_threshold must be at least 1".into());
        }
        if self.exact_threshold > 20 {
            return Err("exact_threshold above 20 makes exhaustive solving intractable".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OrderingConfig::default();
        assert_eq!(config.population_size, 500);
        assert_eq!(config.generations, 1000);
        assert_eq!(config.exact_threshold, 15);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = OrderingConfig::default()
            .with_population_size(50)
            .with_generations(100)
            .with_exact_threshold(10)
            .with_seed(7);
        assert_eq!(config.population_size, 50);
        assert_eq!(config.generations, 100);
        assert_eq!(config.exact_threshold, 10);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_rejects_tiny_population() {
        assert!(OrderingConfig::default()
            .with_population_size(1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_bad_thresholds() {
        assert!(OrderingConfig::default()
            .with_exact_threshold(0)
            .validate()
            .is_err());
        assert!(OrderingConfig::default()
            .with_exact_threshold(25)
            .validate()
            .is_err());
    }
}
