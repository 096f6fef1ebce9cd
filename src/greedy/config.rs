//! Greedy matcher configuration.

/// Configuration for the greedy matcher.
///
/// # Examples
///
/// ```
/// use u_revmatch::greedy::GreedyConfig;
///
/// let config = GreedyConfig::default()
///     .with_iterations(200)
///     .with_seed(7);
/// assert_eq!(config.iterations, 200);
/// assert!(!config.diversify);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyConfig {
    /// Maximum number of trials.
    pub iterations: usize,
    /// Reshuffle after successful trials too and keep the best of all of
    /// them. When `false`, the loop stops at the first successful trial.
    pub diversify: bool,
    /// Random seed for the reshuffles (None for random).
    pub seed: Option<u64>,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            iterations: 5000,
            diversify: false,
            seed: None,
        }
    }
}

impl GreedyConfig {
    /// Sets the maximum number of trials.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_diversify(mut self, diversify: bool) -> Self {
        self.diversify = diversify;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        Ok(())
    }
}
