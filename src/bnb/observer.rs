//! Progress reporting hooks.

use tracing::{debug, info, warn};

use super::runner::BnbResult;
use super::types::{IncumbentSource, SearchStats};

/// Receives progress events from a branch-and-bound run.
///
/// All methods default to no-ops; the search never depends on them.
pub trait SearchObserver {
    /// Called once before the loop with the initial incumbent score.
    fn on_start(&mut self, _incumbent: f64, _source: IncumbentSource) {}

    /// A branch was offered to the frontier.
    fn on_explored(&mut self, _stats: &SearchStats) {}

    /// A branch was cut by the bound.
    fn on_pruned(&mut self, _stats: &SearchStats) {}

    /// A leaf improved the incumbent.
    fn on_incumbent(&mut self, _score: f64, _stats: &SearchStats) {}

    /// Called once with the final result.
    fn on_finish(&mut self, _result: &BnbResult) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Observer that reports through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_start(&mut self, incumbent: f64, source: IncumbentSource) {
        match source {
            IncumbentSource::LowerBound => info!(incumbent, "lower bound provided"),
            IncumbentSource::Greedy => info!(incumbent, "using greedy solution as lower bound"),
            IncumbentSource::Heuristic => info!(
                incumbent,
                "no greedy solution exists, using the constant similarity heuristic"
            ),
        }
    }

    fn on_incumbent(&mut self, score: f64, stats: &SearchStats) {
        debug!(
            score,
            explored = stats.explored,
            pruned = stats.pruned,
            "new incumbent"
        );
    }

    fn on_finish(&mut self, result: &BnbResult) {
        let stats = &result.stats;
        if result.is_solution_found() {
            info!(
                score = result.score,
                termination = ?result.termination,
                explored = stats.explored,
                pruned = stats.pruned,
                elapsed_ms = stats.elapsed_ms,
                "branch and bound finished"
            );
        } else {
            warn!(
                termination = ?result.termination,
                explored = stats.explored,
                pruned = stats.pruned,
                "no solution can be found; try relaxing the constraints and reviewing the data"
            );
        }
    }
}
