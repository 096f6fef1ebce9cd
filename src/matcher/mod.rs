//! Algorithm selection by name.
//!
//! [`Matcher`] is a closed set of algorithms. Names are resolved once at the
//! boundary; everything behind it dispatches on the enum.

use std::str::FromStr;

use crate::beam::{BeamConfig, BeamRunner};
use crate::bnb::{BnbConfig, BnbResult, BnbRunner};
use crate::constraints::ConstraintSet;
use crate::error::{MatchError, Result};
use crate::greedy::{GreedyConfig, GreedyResult, GreedyRunner};
use crate::instance::{Assignment, MatchInstance};

/// A matching algorithm with its configuration.
///
/// # Examples
///
/// ```
/// use u_revmatch::matcher::Matcher;
///
/// let matcher: Matcher = "beam_search".parse().unwrap();
/// assert_eq!(matcher.name(), "beam_search");
/// assert!("hungarian".parse::<Matcher>().is_err());
/// ```
#[derive(Debug, Clone)]
pub enum Matcher {
    Greedy(GreedyConfig),
    BranchAndBound(BnbConfig),
    BeamSearch(BeamConfig),
}

/// Algorithm-independent outcome of [`Matcher::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// The assignment, when one was found.
    pub assignment: Option<Assignment>,
    /// Its total score; `0.0` for a failed greedy run, `-1.0` for a failed
    /// search.
    pub score: f64,
}

impl MatchOutcome {
    pub fn is_solution_found(&self) -> bool {
        self.assignment.is_some()
    }
}

impl From<GreedyResult> for MatchOutcome {
    fn from(result: GreedyResult) -> Self {
        let found = result.is_solution_found();
        Self {
            assignment: found.then_some(result.assignment),
            score: result.score,
        }
    }
}

impl From<BnbResult> for MatchOutcome {
    fn from(result: BnbResult) -> Self {
        Self {
            assignment: result.assignment,
            score: result.score,
        }
    }
}

impl Matcher {
    /// Names accepted by [`Matcher::from_str`].
    pub const NAMES: [&'static str; 3] = ["greedy", "branch_and_bound", "beam_search"];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Greedy(_) => "greedy",
            Self::BranchAndBound(_) => "branch_and_bound",
            Self::BeamSearch(_) => "beam_search",
        }
    }

    /// Runs the selected algorithm.
    pub fn run(&self, instance: &MatchInstance, constraints: &ConstraintSet) -> Result<MatchOutcome> {
        Ok(match self {
            Self::Greedy(config) => GreedyRunner::run(instance, constraints, config)?.into(),
            Self::BranchAndBound(config) => BnbRunner::run(instance, constraints, config)?.into(),
            Self::BeamSearch(config) => BeamRunner::run(instance, constraints, config)?.into(),
        })
    }
}

impl FromStr for Matcher {
    type Err = MatchError;

    /// Resolves a name to a matcher with default settings.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "greedy" => Ok(Self::Greedy(GreedyConfig::default())),
            "branch_and_bound" => Ok(Self::BranchAndBound(BnbConfig::default())),
            "beam_search" => Ok(Self::BeamSearch(BeamConfig::default())),
            other => Err(MatchError::UnknownMatcher(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::fixtures;

    #[test]
    fn test_names_resolve() {
        for name in Matcher::NAMES {
            assert_eq!(name.parse::<Matcher>().unwrap().name(), name);
        }
        assert_eq!(
            "simplex".parse::<Matcher>().unwrap_err(),
            MatchError::UnknownMatcher("simplex".into())
        );
    }

    #[test]
    fn test_every_matcher_returns_a_feasible_assignment() {
        let instance = fixtures::conference();
        let constraints = ConstraintSet::all();
        let matchers = [
            Matcher::Greedy(GreedyConfig::default().with_seed(1)),
            Matcher::BranchAndBound(
                BnbConfig::default().with_greedy(GreedyConfig::default().with_seed(1)),
            ),
            Matcher::BeamSearch(BeamConfig::new(50)),
        ];

        for matcher in matchers {
            let outcome = matcher.run(&instance, &constraints).unwrap();
            let assignment = outcome
                .assignment
                .unwrap_or_else(|| panic!("{} found nothing", matcher.name()));
            assert!(constraints.is_feasible(&instance, &assignment));
            assert!(assignment.is_complete(instance.paper_count(), instance.reviewers_per_paper()));
            assert!(outcome.score > 0.0);
        }
    }

    #[test]
    fn test_failed_greedy_maps_to_no_assignment() {
        let instance = fixtures::infeasible();
        let outcome = Matcher::Greedy(GreedyConfig::default().with_iterations(1))
            .run(&instance, &ConstraintSet::all())
            .unwrap();
        assert!(!outcome.is_solution_found());
        assert_eq!(outcome.score, 0.0);

        let outcome = Matcher::BeamSearch(BeamConfig::new(4))
            .run(&instance, &ConstraintSet::all())
            .unwrap();
        assert!(!outcome.is_solution_found());
        assert_eq!(outcome.score, -1.0);
    }
}
