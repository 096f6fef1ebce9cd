//! Admissible upper bounds for partial assignments.
//!
//! The bound of a candidate is its accumulated score plus, for every
//! incomplete paper, the best score its remaining slots could still add.
//! Constraints are monotone (a feasible completion stays feasible when
//! reviewers are removed), so every reviewer of any feasible completion is
//! individually feasible against the candidate; summing the best such
//! reviewers never underestimates.

use crate::constraints::{Constraint, ConstraintSet};
use crate::instance::{Assignment, MatchInstance};
use crate::scoring::ScoreTable;

/// Best additional score for `missing` slots ignoring constraints.
fn relaxed_fill(ranked: &[(usize, f64)], missing: usize, repeats: bool) -> f64 {
    if repeats {
        return ranked.first().map_or(0.0, |&(_, s)| s * missing as f64);
    }
    ranked.iter().take(missing).map(|&(_, s)| s).sum()
}

/// Best additional score for `missing` slots of `paper`, counting only
/// reviewers that keep `candidate` feasible on their own.
///
/// `candidate` is restored before returning.
fn constrained_fill(
    instance: &MatchInstance,
    constraints: &ConstraintSet,
    ranked: &[(usize, f64)],
    candidate: &mut Assignment,
    paper: usize,
    missing: usize,
    repeats: bool,
) -> f64 {
    let mut fill = 0.0;
    let mut added = 0;
    for &(reviewer, score) in ranked {
        candidate.push(paper, reviewer);
        let feasible = constraints.is_feasible(instance, candidate);
        candidate.pop(paper);

        if feasible {
            if repeats {
                return score * missing as f64;
            }
            fill += score;
            added += 1;
            if added >= missing {
                break;
            }
        }
    }
    fill
}

/// Upper bound on the score of any complete, feasible extension of
/// `candidate`.
///
/// With `relax` the remaining slots are filled from the unfiltered ranking
/// (cheaper, looser); otherwise each reviewer is checked against the
/// constraints first (tighter, one feasibility test per probed reviewer).
/// Without [`Constraint::UniqueReviewers`] a paper may hold the same reviewer
/// more than once, so remaining slots are filled with the best single score.
pub(crate) fn upper_bound(
    instance: &MatchInstance,
    constraints: &ConstraintSet,
    table: &ScoreTable,
    candidate: &mut Assignment,
    accumulated: f64,
    relax: bool,
) -> f64 {
    let per_paper = instance.reviewers_per_paper();
    let repeats = !constraints.contains(Constraint::UniqueReviewers);

    let mut bound = accumulated;
    for paper in 0..instance.paper_count() {
        let missing = per_paper.saturating_sub(candidate.reviewers_of(paper).len());
        if missing == 0 {
            continue;
        }
        let ranked = table.ranked(paper);
        bound += if relax {
            relaxed_fill(ranked, missing, repeats)
        } else {
            constrained_fill(instance, constraints, ranked, candidate, paper, missing, repeats)
        };
    }
    bound
}
