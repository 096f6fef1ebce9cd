//! Branch-and-bound configuration.

use crate::greedy::GreedyConfig;

/// Configuration for the branch-and-bound search.
///
/// # Defaults
///
/// ```
/// use u_revmatch::bnb::BnbConfig;
///
/// let config = BnbConfig::default();
/// assert!(config.return_first_solution);
/// assert!(config.lower_bound.is_none());
/// assert_eq!(config.frontier_capacity, 0);
/// assert!(!config.relax_upper_bound);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_revmatch::bnb::BnbConfig;
///
/// // Exhaustive search warm-started from an explicit score.
/// let config = BnbConfig::default()
///     .with_return_first_solution(false)
///     .with_lower_bound(1.5)
///     .with_time_limit_ms(30_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbConfig {
    /// Stop at the first leaf that improves the incumbent.
    ///
    /// When `false`, the frontier is drained and the best leaf is returned.
    pub return_first_solution: bool,

    /// Initial incumbent score.
    ///
    /// `None` runs the greedy matcher first and uses its result (or a
    /// constant estimate when greedy fails).
    pub lower_bound: Option<f64>,

    /// Maximum frontier size; 0 means unbounded. A positive value turns the
    /// search into a beam search.
    pub frontier_capacity: usize,

    /// Use the unconstrained (looser, cheaper) upper bound.
    pub relax_upper_bound: bool,

    /// Greedy settings used when `lower_bound` is `None`.
    pub greedy: GreedyConfig,

    /// Optional wall-clock limit in milliseconds.
    ///
    /// Checked between greedy trials and between loop iterations; the best
    /// incumbent found so far is returned when it triggers.
    pub time_limit_ms: Option<u64>,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            return_first_solution: true,
            lower_bound: None,
            frontier_capacity: 0,
            relax_upper_bound: false,
            greedy: GreedyConfig::default(),
            time_limit_ms: None,
        }
    }
}

impl BnbConfig {
    pub fn with_return_first_solution(mut self, first: bool) -> Self {
        self.return_first_solution = first;
        self
    }

    /// Sets an explicit initial incumbent score (skips greedy).
    pub fn with_lower_bound(mut self, lower_bound: f64) -> Self {
        self.lower_bound = Some(lower_bound);
        self
    }

    /// Sets the frontier capacity (0 = unbounded).
    pub fn with_frontier_capacity(mut self, capacity: usize) -> Self {
        self.frontier_capacity = capacity;
        self
    }

    pub fn with_relax_upper_bound(mut self, relax: bool) -> Self {
        self.relax_upper_bound = relax;
        self
    }

    pub fn with_greedy(mut self, greedy: GreedyConfig) -> Self {
        self.greedy = greedy;
        self
    }

    /// Sets the wall-clock limit.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        match self.lower_bound {
            Some(lb) if !lb.is_finite() => {
                return Err(format!("lower_bound must be finite, got {lb}"));
            }
            Some(_) => {}
            None => self.greedy.validate()?,
        }
        Ok(())
    }
}
