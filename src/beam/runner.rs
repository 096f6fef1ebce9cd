//! Beam search execution.

use super::config::BeamConfig;
use crate::bnb::{BnbResult, BnbRunner, SearchObserver, TracingObserver};
use crate::constraints::ConstraintSet;
use crate::error::{MatchError, Result};
use crate::instance::MatchInstance;
use crate::scoring::ScoreTable;

/// Beam search runner.
///
/// Delegates to [`BnbRunner`] with the settings from
/// [`BeamConfig::to_bnb_config`].
pub struct BeamRunner;

impl BeamRunner {
    /// Runs beam search, reporting progress through `tracing`.
    pub fn run(
        instance: &MatchInstance,
        constraints: &ConstraintSet,
        config: &BeamConfig,
    ) -> Result<BnbResult> {
        let table = ScoreTable::build(instance)?;
        Self::run_with_table(instance, constraints, &table, config, &mut TracingObserver)
    }

    /// Runs beam search on a precomputed table.
    pub fn run_with_table(
        instance: &MatchInstance,
        constraints: &ConstraintSet,
        table: &ScoreTable,
        config: &BeamConfig,
        observer: &mut dyn SearchObserver,
    ) -> Result<BnbResult> {
        config.validate().map_err(MatchError::InvalidConfig)?;
        BnbRunner::run_with_table(
            instance,
            constraints,
            table,
            &config.to_bnb_config(),
            observer,
            None,
        )
    }
}
