//! Beam search configuration.

use crate::bnb::BnbConfig;

/// Configuration for beam search.
///
/// # Examples
///
/// ```
/// use u_revmatch::beam::BeamConfig;
///
/// let config = BeamConfig::new(32).with_return_first_solution(false);
/// let bnb = config.to_bnb_config();
/// assert_eq!(bnb.frontier_capacity, 32);
/// assert_eq!(bnb.lower_bound, Some(0.0));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeamConfig {
    /// Beam width: maximum number of live partial assignments.
    pub beam_size: usize,
    /// Stop at the first improving leaf.
    pub return_first_solution: bool,
    /// Use the unconstrained upper bound.
    pub relax_upper_bound: bool,
    /// Optional wall-clock limit in milliseconds.
    pub time_limit_ms: Option<u64>,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            beam_size: 10,
            return_first_solution: true,
            relax_upper_bound: false,
            time_limit_ms: None,
        }
    }
}

impl BeamConfig {
    /// Creates a configuration with the given beam width.
    pub fn new(beam_size: usize) -> Self {
        Self {
            beam_size,
            ..Self::default()
        }
    }

    pub fn with_beam_size(mut self, beam_size: usize) -> Self {
        self.beam_size = beam_size;
        self
    }

    pub fn with_return_first_solution(mut self, first: bool) -> Self {
        self.return_first_solution = first;
        self
    }

    pub fn with_relax_upper_bound(mut self, relax: bool) -> Self {
        self.relax_upper_bound = relax;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.beam_size == 0 {
            return Err("beam_size must be at least 1".into());
        }
        Ok(())
    }

    /// Branch-and-bound settings equivalent to this beam: zero lower bound
    /// (no greedy warm start) and a frontier capped at the beam width.
    pub fn to_bnb_config(&self) -> BnbConfig {
        let mut config = BnbConfig::default()
            .with_lower_bound(0.0)
            .with_frontier_capacity(self.beam_size)
            .with_return_first_solution(self.return_first_solution)
            .with_relax_upper_bound(self.relax_upper_bound);
        config.time_limit_ms = self.time_limit_ms;
        config
    }
}
