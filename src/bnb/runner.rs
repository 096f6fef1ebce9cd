//! Branch-and-bound execution engine.
//!
//! # Algorithm
//!
//! 1. Build the score table and establish the incumbent score (explicit
//!    lower bound, greedy result, or a constant estimate)
//! 2. Seed the frontier with the empty assignment at priority 0
//! 3. Pop the entry with the lowest priority (highest accumulated score):
//!    a. Leaf (feasible and complete): replace the incumbent if strictly
//!       better; stop here when returning the first improvement
//!    b. Otherwise branch on the first incomplete paper, one candidate per
//!       reviewer, dropping infeasible candidates
//!    c. Prune candidates whose upper bound does not beat the incumbent;
//!       push the rest keyed by their negated accumulated score
//! 4. Stop when the frontier is empty (or on time limit / cancellation)
//!
//! Priorities are negated scores: the frontier is a min-structure while the
//! objective is maximized.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::bound::upper_bound;
use super::config::BnbConfig;
use super::observer::{SearchObserver, TracingObserver};
use super::types::{IncumbentSource, SearchStats, Termination};
use crate::constraints::ConstraintSet;
use crate::error::{MatchError, Result};
use crate::frontier::{BoundedFrontier, PushOutcome};
use crate::greedy::GreedyRunner;
use crate::instance::{Assignment, MatchInstance};
use crate::scoring::ScoreTable;

/// Similarity assumed for every review slot when greedy finds nothing.
pub const FALLBACK_SIMILARITY: f64 = 0.4;

/// Result of a branch-and-bound (or beam search) run.
#[derive(Debug, Clone)]
pub struct BnbResult {
    /// Best assignment found; `None` when no solution exists.
    pub assignment: Option<Assignment>,
    /// Score of `assignment`, or `-1.0` when there is none.
    pub score: f64,
    /// Why the loop stopped.
    pub termination: Termination,
    /// Origin of the initial incumbent.
    pub incumbent_source: IncumbentSource,
    /// Search counters.
    pub stats: SearchStats,
}

impl BnbResult {
    /// Whether an assignment was found.
    pub fn is_solution_found(&self) -> bool {
        self.assignment.is_some()
    }
}

/// Branch-and-bound runner.
pub struct BnbRunner;

impl BnbRunner {
    /// Runs the search, reporting progress through `tracing`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_revmatch::bnb::{BnbConfig, BnbRunner};
    /// use u_revmatch::constraints::ConstraintSet;
    /// use u_revmatch::instance::{MatchInstance, Paper, Reviewer};
    ///
    /// let instance = MatchInstance::new(
    ///     vec![Paper::new("P1", vec![1.0, 0.0]), Paper::new("P2", vec![0.0, 1.0])],
    ///     vec![
    ///         Reviewer::new("R1", "UA", vec![vec![1.0, 0.1]]),
    ///         Reviewer::new("R2", "UB", vec![vec![0.1, 1.0]]),
    ///     ],
    ///     1,
    /// )
    /// .unwrap();
    ///
    /// let config = BnbConfig::default().with_return_first_solution(false);
    /// let result = BnbRunner::run(&instance, &ConstraintSet::all(), &config).unwrap();
    /// assert!(result.is_solution_found());
    /// ```
    pub fn run(
        instance: &MatchInstance,
        constraints: &ConstraintSet,
        config: &BnbConfig,
    ) -> Result<BnbResult> {
        Self::run_with_cancel(instance, constraints, config, None)
    }

    /// Runs the search with an optional cancellation flag.
    ///
    /// The flag is checked before every greedy trial and every frontier pop;
    /// when raised the best incumbent found so far is returned.
    pub fn run_with_cancel(
        instance: &MatchInstance,
        constraints: &ConstraintSet,
        config: &BnbConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<BnbResult> {
        let table = ScoreTable::build(instance)?;
        Self::run_with_table(
            instance,
            constraints,
            &table,
            config,
            &mut TracingObserver,
            cancel.as_deref(),
        )
    }

    /// Runs the search, reporting progress to `observer` instead of
    /// `tracing`.
    pub fn run_with_observer(
        instance: &MatchInstance,
        constraints: &ConstraintSet,
        config: &BnbConfig,
        observer: &mut dyn SearchObserver,
    ) -> Result<BnbResult> {
        let table = ScoreTable::build(instance)?;
        Self::run_with_table(instance, constraints, &table, config, observer, None)
    }

    /// Runs the search on a precomputed table with an explicit observer.
    ///
    /// The time limit and the cancel flag also cover the greedy warm start.
    ///
    /// # Errors
    ///
    /// Only setup failures: [`MatchError::InvalidConfig`] and
    /// [`MatchError::InvalidInstance`] (table shape). Finding no solution
    /// yields `Ok` with `assignment == None` and `score == -1.0`.
    pub fn run_with_table(
        instance: &MatchInstance,
        constraints: &ConstraintSet,
        table: &ScoreTable,
        config: &BnbConfig,
        observer: &mut dyn SearchObserver,
        cancel: Option<&AtomicBool>,
    ) -> Result<BnbResult> {
        config.validate().map_err(MatchError::InvalidConfig)?;
        table.check_shape(instance)?;

        let paper_count = instance.paper_count();
        let per_paper = instance.reviewers_per_paper();

        let start = Instant::now();
        let deadline = config
            .time_limit_ms
            .map(|ms| start + Duration::from_millis(ms));

        let (mut best, mut best_score, incumbent_source) = match config.lower_bound {
            Some(lb) => (None, lb, IncumbentSource::LowerBound),
            None => {
                let greedy = GreedyRunner::run_until(
                    instance,
                    constraints,
                    table,
                    &config.greedy,
                    cancel,
                    deadline,
                )?;
                if greedy.is_solution_found() {
                    (Some(greedy.assignment), greedy.score, IncumbentSource::Greedy)
                } else {
                    let estimate = (paper_count * per_paper) as f64 * FALLBACK_SIMILARITY;
                    (None, estimate, IncumbentSource::Heuristic)
                }
            }
        };
        observer.on_start(best_score, incumbent_source);

        let mut stats = SearchStats::default();
        let mut frontier = BoundedFrontier::new(config.frontier_capacity);
        frontier.push(0.0, Assignment::new());
        let mut termination = Termination::Exhausted;

        loop {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                termination = Termination::Cancelled;
                break;
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                termination = Termination::TimeLimit;
                break;
            }

            let Some(entry) = frontier.pop() else {
                break;
            };
            let node = entry.item;
            let node_score = -entry.priority;

            if node.is_complete(paper_count, per_paper) && constraints.is_feasible(instance, &node)
            {
                stats.leaves += 1;
                if node_score > best_score {
                    best_score = node_score;
                    best = Some(node);
                    stats.improvements += 1;
                    observer.on_incumbent(best_score, &stats);
                    if config.return_first_solution {
                        termination = Termination::FirstImprovement;
                        break;
                    }
                }
                continue;
            }

            let Some(paper) = node.first_incomplete(paper_count, per_paper) else {
                continue;
            };
            stats.expanded += 1;

            for reviewer in 0..instance.reviewer_count() {
                let mut candidate = node.with_reviewer(paper, reviewer);
                if !constraints.is_feasible(instance, &candidate) {
                    continue;
                }

                let score = table.assignment_score(&candidate);
                let bound = upper_bound(
                    instance,
                    constraints,
                    table,
                    &mut candidate,
                    score,
                    config.relax_upper_bound,
                );
                if bound <= best_score {
                    stats.pruned += 1;
                    observer.on_pruned(&stats);
                    continue;
                }

                match frontier.push(-score, candidate) {
                    PushOutcome::Inserted => {}
                    PushOutcome::Replaced | PushOutcome::Rejected => stats.discarded += 1,
                }
                stats.explored += 1;
                observer.on_explored(&stats);
            }
        }

        stats.elapsed_ms = start.elapsed().as_millis() as u64;

        let result = match best {
            Some(assignment) => BnbResult {
                assignment: Some(assignment),
                score: best_score,
                termination,
                incumbent_source,
                stats,
            },
            None => BnbResult {
                assignment: None,
                score: -1.0,
                termination,
                incumbent_source,
                stats,
            },
        };
        observer.on_finish(&result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnb::NoopObserver;
    use crate::constraints::Constraint;
    use crate::greedy::GreedyConfig;
    use crate::instance::{fixtures, Paper, Reviewer};

    fn run(
        instance: &MatchInstance,
        constraints: &ConstraintSet,
        table: &ScoreTable,
        config: &BnbConfig,
    ) -> BnbResult {
        BnbRunner::run_with_table(instance, constraints, table, config, &mut NoopObserver, None)
            .unwrap()
    }

    #[derive(Default)]
    struct Counting {
        started: usize,
        explored: usize,
        pruned: usize,
        incumbents: usize,
        finished: usize,
    }

    impl SearchObserver for Counting {
        fn on_start(&mut self, _incumbent: f64, _source: IncumbentSource) {
            self.started += 1;
        }
        fn on_explored(&mut self, _stats: &SearchStats) {
            self.explored += 1;
        }
        fn on_pruned(&mut self, _stats: &SearchStats) {
            self.pruned += 1;
        }
        fn on_incumbent(&mut self, _score: f64, _stats: &SearchStats) {
            self.incumbents += 1;
        }
        fn on_finish(&mut self, _result: &BnbResult) {
            self.finished += 1;
        }
    }

    /// Best feasible complete assignment by enumeration of reviewer pairs.
    fn brute_force_pairs(instance: &MatchInstance, constraints: &ConstraintSet, table: &ScoreTable) -> f64 {
        assert_eq!(instance.reviewers_per_paper(), 2);
        let n = instance.reviewer_count();
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();

        let mut best = f64::NEG_INFINITY;
        let mut choice = vec![0usize; instance.paper_count()];
        loop {
            let mut a = Assignment::new();
            for (paper, &c) in choice.iter().enumerate() {
                a.push(paper, pairs[c].0);
                a.push(paper, pairs[c].1);
            }
            if constraints.is_feasible(instance, &a) {
                best = best.max(table.assignment_score(&a));
            }

            // Odometer increment.
            let mut k = 0;
            loop {
                if k == choice.len() {
                    return best;
                }
                choice[k] += 1;
                if choice[k] < pairs.len() {
                    break;
                }
                choice[k] = 0;
                k += 1;
            }
        }
    }

    /// Greedy takes A for P1 and strands P2 with B; the optimum swaps them.
    fn greedy_trap() -> (MatchInstance, ScoreTable) {
        let instance = MatchInstance::new(
            vec![Paper::new("P1", vec![1.0]), Paper::new("P2", vec![1.0])],
            vec![
                Reviewer::new("A", "IA", vec![vec![1.0]]),
                Reviewer::new("B", "IB", vec![vec![1.0]]),
            ],
            1,
        )
        .unwrap();
        let table = ScoreTable::from_rows(vec![vec![0.9, 0.8], vec![0.85, 0.1]]).unwrap();
        (instance, table)
    }

    #[test]
    fn test_exhaustive_two_by_three() {
        let (instance, table) = fixtures::two_by_three();
        let config = BnbConfig::default()
            .with_return_first_solution(false)
            .with_greedy(GreedyConfig::default().with_seed(1));
        let result = run(&instance, &ConstraintSet::none(), &table, &config);

        let assignment = result.assignment.unwrap();
        assert_eq!(assignment.reviewers_of(0), &[0]);
        assert_eq!(assignment.reviewers_of(1), &[1]);
        assert!((result.score - 1.7).abs() < 1e-12);
        assert_eq!(result.termination, Termination::Exhausted);
        assert_eq!(result.incumbent_source, IncumbentSource::Greedy);
    }

    #[test]
    fn test_search_from_zero_lower_bound() {
        let (instance, table) = fixtures::two_by_three();
        for first in [true, false] {
            let config = BnbConfig::default()
                .with_return_first_solution(first)
                .with_lower_bound(0.0);
            let result = run(&instance, &ConstraintSet::none(), &table, &config);

            let assignment = result.assignment.unwrap();
            assert_eq!(assignment.reviewers_of(0), &[0]);
            assert_eq!(assignment.reviewers_of(1), &[1]);
            assert!((result.score - 1.7).abs() < 1e-12);
            assert!(result.stats.improvements >= 1);
        }
    }

    #[test]
    fn test_first_solution_terminates_early() {
        let (instance, table) = fixtures::two_by_three();
        let config = BnbConfig::default().with_lower_bound(0.0);
        let result = run(&instance, &ConstraintSet::none(), &table, &config);
        assert_eq!(result.termination, Termination::FirstImprovement);
        assert_eq!(result.stats.leaves, 1);
    }

    #[test]
    fn test_pruning_keeps_the_optimum() {
        let (instance, table) = greedy_trap();
        let constraints = ConstraintSet::all();

        let greedy = GreedyRunner::run_with_table(
            &instance,
            &constraints,
            &table,
            &GreedyConfig::default().with_seed(1),
        )
        .unwrap();
        assert!((greedy.score - 1.0).abs() < 1e-12);

        for relax in [false, true] {
            let config = BnbConfig::default()
                .with_return_first_solution(false)
                .with_relax_upper_bound(relax)
                .with_greedy(GreedyConfig::default().with_seed(1));
            let result = run(&instance, &constraints, &table, &config);

            let assignment = result.assignment.unwrap();
            assert_eq!(assignment.reviewers_of(0), &[1]);
            assert_eq!(assignment.reviewers_of(1), &[0]);
            assert!((result.score - 1.65).abs() < 1e-12);
            assert!(result.stats.pruned > 0);
        }
    }

    #[test]
    fn test_matches_brute_force_on_conference() {
        let instance = fixtures::conference();
        let table = ScoreTable::build(&instance).unwrap();
        let constraints = ConstraintSet::all();
        let optimum = brute_force_pairs(&instance, &constraints, &table);

        for relax in [false, true] {
            let config = BnbConfig::default()
                .with_return_first_solution(false)
                .with_relax_upper_bound(relax)
                .with_greedy(GreedyConfig::default().with_seed(4));
            let result = run(&instance, &constraints, &table, &config);

            let assignment = result.assignment.unwrap();
            assert!(constraints.is_feasible(&instance, &assignment));
            assert!(assignment.is_complete(instance.paper_count(), 2));
            assert!(
                (result.score - optimum).abs() < 1e-9,
                "relax={relax}: got {}, optimum {optimum}",
                result.score
            );
            assert!((table.assignment_score(&assignment) - result.score).abs() < 1e-9);
        }
    }

    #[test]
    fn test_never_worse_than_greedy() {
        let instance = fixtures::uniform_instance(3, 5, 2);
        let table = ScoreTable::build(&instance).unwrap();
        let constraints = ConstraintSet::all();
        let greedy_config = GreedyConfig::default().with_seed(8);

        let greedy =
            GreedyRunner::run_with_table(&instance, &constraints, &table, &greedy_config).unwrap();
        let config = BnbConfig::default()
            .with_return_first_solution(false)
            .with_greedy(greedy_config);
        let result = run(&instance, &constraints, &table, &config);

        assert!(greedy.is_solution_found());
        assert!(result.score >= greedy.score - 1e-12);
    }

    #[test]
    fn test_no_solution_sentinel() {
        let instance = fixtures::infeasible();
        let table = ScoreTable::build(&instance).unwrap();

        let config = BnbConfig::default().with_greedy(GreedyConfig::default().with_iterations(3));
        let result = run(&instance, &ConstraintSet::all(), &table, &config);
        assert!(result.assignment.is_none());
        assert_eq!(result.score, -1.0);
        assert_eq!(result.incumbent_source, IncumbentSource::Heuristic);
        assert_eq!(result.termination, Termination::Exhausted);

        let config = BnbConfig::default().with_lower_bound(0.0);
        let result = run(&instance, &ConstraintSet::all(), &table, &config);
        assert!(!result.is_solution_found());
        assert_eq!(result.score, -1.0);
    }

    #[test]
    fn test_repeated_reviewer_is_not_pruned() {
        // Without unique_reviewers, A three times is optimal (2.7). A bound
        // that assumed distinct reviewers would cap the A-branch at 2.3 and
        // prune it against the 2.5 lower bound.
        let instance = fixtures::uniform_instance(1, 3, 3);
        let table = ScoreTable::from_rows(vec![vec![0.9, 0.5, 0.1]]).unwrap();
        let config = BnbConfig::default()
            .with_return_first_solution(false)
            .with_lower_bound(2.5);
        let result = run(&instance, &ConstraintSet::none(), &table, &config);

        assert_eq!(result.assignment.unwrap().reviewers_of(0), &[0, 0, 0]);
        assert!((result.score - 2.7).abs() < 1e-9);
    }

    #[test]
    fn test_output_respects_target_count() {
        let instance = fixtures::conference();
        let constraints = ConstraintSet::new([
            Constraint::ReviewerUnderload,
            Constraint::UniqueReviewers,
            Constraint::ReviewerNotAuthor,
        ]);
        let result = BnbRunner::run(&instance, &constraints, &BnbConfig::default().with_lower_bound(0.0)).unwrap();

        let assignment = result.assignment.unwrap();
        for paper in 0..instance.paper_count() {
            assert_eq!(assignment.reviewers_of(paper).len(), instance.reviewers_per_paper());
        }
        assert!(constraints.is_feasible(&instance, &assignment));
    }

    #[test]
    fn test_cancel_before_start_skips_greedy() {
        let instance = fixtures::conference();
        let table = ScoreTable::build(&instance).unwrap();
        let cancel = AtomicBool::new(true);
        let config = BnbConfig::default().with_greedy(GreedyConfig::default().with_seed(2));

        let result = BnbRunner::run_with_table(
            &instance,
            &ConstraintSet::all(),
            &table,
            &config,
            &mut NoopObserver,
            Some(&cancel),
        )
        .unwrap();

        // Greedy never ran a trial, so there is no incumbent assignment.
        assert_eq!(result.termination, Termination::Cancelled);
        assert_eq!(result.stats.expanded, 0);
        assert_eq!(result.incumbent_source, IncumbentSource::Heuristic);
        assert!(!result.is_solution_found());
        assert_eq!(result.score, -1.0);
    }

    #[test]
    fn test_cancel_keeps_explicit_lower_bound_search_empty() {
        let (instance, table) = fixtures::two_by_three();
        let cancel = AtomicBool::new(true);
        let result = BnbRunner::run_with_table(
            &instance,
            &ConstraintSet::none(),
            &table,
            &BnbConfig::default().with_lower_bound(0.0),
            &mut NoopObserver,
            Some(&cancel),
        )
        .unwrap();

        assert_eq!(result.termination, Termination::Cancelled);
        assert_eq!(result.incumbent_source, IncumbentSource::LowerBound);
        assert!(!result.is_solution_found());
    }

    #[test]
    fn test_time_limit_covers_greedy_warm_start() {
        // Greedy can never succeed here; with a zero limit it must not burn
        // through its iterations before the search checks the clock.
        let instance = fixtures::infeasible();
        let table = ScoreTable::build(&instance).unwrap();
        let config = BnbConfig::default()
            .with_greedy(GreedyConfig::default().with_iterations(1_000_000).with_seed(4))
            .with_time_limit_ms(0);
        let result = run(&instance, &ConstraintSet::all(), &table, &config);

        assert_eq!(result.termination, Termination::TimeLimit);
        assert_eq!(result.incumbent_source, IncumbentSource::Heuristic);
        assert!(!result.is_solution_found());
        assert_eq!(result.stats.expanded, 0);
    }

    #[test]
    fn test_time_limit_zero_stops_immediately() {
        let (instance, table) = fixtures::two_by_three();
        let config = BnbConfig::default()
            .with_lower_bound(0.0)
            .with_time_limit_ms(0);
        let result = run(&instance, &ConstraintSet::none(), &table, &config);

        assert_eq!(result.termination, Termination::TimeLimit);
        assert!(result.assignment.is_none());
        assert_eq!(result.score, -1.0);
    }

    #[test]
    fn test_observer_sees_every_event() {
        let (instance, table) = fixtures::two_by_three();
        let config = BnbConfig::default()
            .with_return_first_solution(false)
            .with_lower_bound(0.0);
        let mut observer = Counting::default();
        let result = BnbRunner::run_with_table(
            &instance,
            &ConstraintSet::none(),
            &table,
            &config,
            &mut observer,
            None,
        )
        .unwrap();

        assert_eq!(observer.started, 1);
        assert_eq!(observer.finished, 1);
        assert_eq!(observer.explored, result.stats.explored);
        assert_eq!(observer.pruned, result.stats.pruned);
        assert_eq!(observer.incumbents, result.stats.improvements);
    }

    #[test]
    fn test_run_with_observer_builds_the_table() {
        let instance = fixtures::conference();
        let constraints = ConstraintSet::all();
        let config = BnbConfig::default()
            .with_return_first_solution(false)
            .with_greedy(GreedyConfig::default().with_seed(6));
        let mut observer = Counting::default();

        let result =
            BnbRunner::run_with_observer(&instance, &constraints, &config, &mut observer).unwrap();

        assert_eq!(observer.started, 1);
        assert_eq!(observer.finished, 1);
        assert_eq!(observer.explored, result.stats.explored);
        assert_eq!(observer.pruned, result.stats.pruned);
        assert_eq!(observer.incumbents, result.stats.improvements);
        let assignment = result.assignment.unwrap();
        assert!(constraints.is_feasible(&instance, &assignment));
        assert!(assignment.is_complete(instance.paper_count(), instance.reviewers_per_paper()));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let (instance, table) = fixtures::two_by_three();
        let err = BnbRunner::run_with_table(
            &instance,
            &ConstraintSet::none(),
            &table,
            &BnbConfig::default().with_lower_bound(f64::NAN),
            &mut NoopObserver,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, MatchError::InvalidConfig(_)));
    }
}
