//! Greedy execution loop.
//!
//! # Algorithm
//!
//! 1. For each paper (working order), test every reviewer (working order)
//!    alone on the paper against the whole assignment; keep the feasible ones
//! 2. Fail the trial if fewer than the target count are feasible
//! 3. Append the best-scoring candidates one by one, re-checking feasibility,
//!    until the paper is full (or fail the trial)
//! 4. On failure, reshuffle both working orders and retry; keep the best
//!    successful trial
//!
//! Candidates with equal scores are taken in reviewer-name order, so ties
//! never depend on the working order.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info, trace, warn};

use super::config::GreedyConfig;
use crate::constraints::ConstraintSet;
use crate::error::{MatchError, Result};
use crate::instance::{Assignment, MatchInstance};
use crate::scoring::ScoreTable;

/// Result of a greedy run.
#[derive(Debug, Clone)]
pub struct GreedyResult {
    /// Best assignment found; empty when no trial succeeded.
    pub assignment: Assignment,
    /// Total score of `assignment` (0.0 when empty).
    pub score: f64,
    /// Trials executed.
    pub trials: usize,
    /// Trials that produced a complete assignment.
    pub successful_trials: usize,
    /// Whether the loop was cut short by the cancel flag or a deadline.
    pub cancelled: bool,
}

impl GreedyResult {
    /// Whether a complete assignment was found.
    pub fn is_solution_found(&self) -> bool {
        self.successful_trials > 0
    }
}

/// Runs one greedy construction over the given working orders.
fn greedy_trial(
    instance: &MatchInstance,
    constraints: &ConstraintSet,
    table: &ScoreTable,
    paper_order: &[usize],
    reviewer_order: &[usize],
) -> Result<Assignment> {
    let per_paper = instance.reviewers_per_paper();
    let mut assignment = Assignment::new();

    for &paper in paper_order {
        let mut candidates: Vec<(usize, f64)> = Vec::new();
        for &reviewer in reviewer_order {
            assignment.push(paper, reviewer);
            if constraints.is_feasible(instance, &assignment) {
                candidates.push((reviewer, table.score(paper, reviewer)));
            }
            assignment.pop(paper);
        }

        if candidates.len() < per_paper {
            return Err(MatchError::InsufficientFeasibleReviewers {
                paper: instance.paper(paper).title.clone(),
                found: candidates.len(),
                required: per_paper,
            });
        }

        candidates.sort_by(|a, b| {
            b.1.total_cmp(&a.1).then_with(|| {
                instance
                    .reviewer(a.0)
                    .full_name
                    .cmp(&instance.reviewer(b.0).full_name)
            })
        });

        let mut placed = 0;
        for &(reviewer, _) in &candidates {
            if placed == per_paper {
                break;
            }
            assignment.push(paper, reviewer);
            if constraints.is_feasible(instance, &assignment) {
                placed += 1;
            } else {
                assignment.pop(paper);
            }
        }

        if placed < per_paper {
            return Err(MatchError::InsufficientFeasibleReviewers {
                paper: instance.paper(paper).title.clone(),
                found: placed,
                required: per_paper,
            });
        }
    }

    Ok(assignment)
}

/// Executes the greedy matcher.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Builds the score table and runs the greedy matcher.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_revmatch::constraints::ConstraintSet;
    /// use u_revmatch::greedy::{GreedyConfig, GreedyRunner};
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
    /// let result = GreedyRunner::run(
    ///     &instance,
    ///     &ConstraintSet::all(),
    ///     &GreedyConfig::default().with_seed(1),
    /// )
    /// .unwrap();
    /// assert!(result.is_solution_found());
    /// assert_eq!(result.assignment.reviewers_of(0), &[0]);
    /// ```
    pub fn run(
        instance: &MatchInstance,
        constraints: &ConstraintSet,
        config: &GreedyConfig,
    ) -> Result<GreedyResult> {
        Self::run_with_cancel(instance, constraints, config, None)
    }

    /// Runs the greedy matcher with an optional cancellation flag.
    ///
    /// The flag is checked before every trial; when raised the best
    /// assignment found so far is returned with `cancelled` set.
    pub fn run_with_cancel(
        instance: &MatchInstance,
        constraints: &ConstraintSet,
        config: &GreedyConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GreedyResult> {
        let table = ScoreTable::build(instance)?;
        Self::run_until(instance, constraints, &table, config, cancel.as_deref(), None)
    }

    /// Runs the greedy matcher on a precomputed score table.
    ///
    /// # Errors
    ///
    /// [`MatchError::InvalidConfig`] for an invalid configuration and
    /// [`MatchError::InvalidInstance`] when the table does not fit the
    /// instance. Failing to find an assignment is not an error: the result
    /// then holds an empty assignment with score `0.0`.
    pub fn run_with_table(
        instance: &MatchInstance,
        constraints: &ConstraintSet,
        table: &ScoreTable,
        config: &GreedyConfig,
    ) -> Result<GreedyResult> {
        Self::run_until(instance, constraints, table, config, None, None)
    }

    /// Trial loop that also stops on `cancel` or once `deadline` has passed.
    pub(crate) fn run_until(
        instance: &MatchInstance,
        constraints: &ConstraintSet,
        table: &ScoreTable,
        config: &GreedyConfig,
        cancel: Option<&AtomicBool>,
        deadline: Option<Instant>,
    ) -> Result<GreedyResult> {
        config.validate().map_err(MatchError::InvalidConfig)?;
        table.check_shape(instance)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Working copies; the instance order is never touched.
        let mut paper_order: Vec<usize> = (0..instance.paper_count()).collect();
        let mut reviewer_order: Vec<usize> = (0..instance.reviewer_count()).collect();

        let mut best: Option<(Assignment, f64)> = None;
        let mut trials = 0;
        let mut successful_trials = 0;
        let mut cancelled = false;

        for _ in 0..config.iterations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
                || deadline.is_some_and(|d| Instant::now() >= d)
            {
                cancelled = true;
                break;
            }
            trials += 1;
            match greedy_trial(instance, constraints, table, &paper_order, &reviewer_order) {
                Ok(assignment) => {
                    successful_trials += 1;
                    let score = table.assignment_score(&assignment);
                    debug!(trial = trials, score, "greedy trial succeeded");
                    if best.as_ref().is_none_or(|(_, s)| score > *s) {
                        best = Some((assignment, score));
                    }
                    // Same order, same outcome: only continue when diversifying.
                    if !config.diversify {
                        break;
                    }
                }
                Err(err) => {
                    trace!(trial = trials, %err, "greedy trial failed");
                }
            }
            paper_order.shuffle(&mut rng);
            reviewer_order.shuffle(&mut rng);
        }

        match best {
            Some((assignment, score)) => Ok(GreedyResult {
                assignment,
                score,
                trials,
                successful_trials,
                cancelled,
            }),
            None if cancelled => {
                info!(trials, "greedy stopped before finding a solution");
                Ok(GreedyResult {
                    assignment: Assignment::new(),
                    score: 0.0,
                    trials,
                    successful_trials,
                    cancelled,
                })
            }
            None => {
                warn!(
                    iterations = config.iterations,
                    "no greedy solution found; try relaxing the constraints"
                );
                Ok(GreedyResult {
                    assignment: Assignment::new(),
                    score: 0.0,
                    trials,
                    successful_trials,
                    cancelled,
                })
            }
        }
    }
}
