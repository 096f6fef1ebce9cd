//! The closed family of feasibility predicates.

use std::fmt;
use std::str::FromStr;

use crate::error::{MatchError, Result};
use crate::instance::{Assignment, MatchInstance};

/// A feasibility rule over a (possibly partial) assignment.
///
/// Every predicate inspects the whole assignment, not only the most recent
/// addition: some rules (per-paper uniqueness, reviewer load) only fail in
/// aggregate. All predicates are monotone: removing reviewers from a feasible
/// assignment keeps it feasible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constraint {
    /// No reviewer appears more often than the target reviewer count.
    ReviewerUnderload,
    /// No reviewer is an author of a paper they review.
    ReviewerNotAuthor,
    /// A reviewer appears at most once per paper.
    UniqueReviewers,
    /// The reviewers of a paper come from pairwise distinct institutions.
    ReviewersFromDifferentInstitutions,
    /// No reviewer belongs to one of the paper's institutions.
    ReviewersNotAuthorsInstitutions,
}

/// Whether every paper and reviewer index exists in `instance`.
fn in_bounds(instance: &MatchInstance, assignment: &Assignment) -> bool {
    assignment.iter().all(|(p, reviewers)| {
        p < instance.paper_count() && reviewers.iter().all(|&r| r < instance.reviewer_count())
    })
}

fn has_repeat<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, item)| items[..i].contains(item))
}

impl Constraint {
    /// Every predicate, in declaration order.
    pub const ALL: [Constraint; 5] = [
        Constraint::ReviewerUnderload,
        Constraint::ReviewerNotAuthor,
        Constraint::UniqueReviewers,
        Constraint::ReviewersFromDifferentInstitutions,
        Constraint::ReviewersNotAuthorsInstitutions,
    ];

    /// Snake-case name used for selection by name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReviewerUnderload => "reviewer_underload",
            Self::ReviewerNotAuthor => "reviewer_not_author",
            Self::UniqueReviewers => "unique_reviewers",
            Self::ReviewersFromDifferentInstitutions => "reviewers_from_different_institutions",
            Self::ReviewersNotAuthorsInstitutions => "reviewers_not_authors_institutions",
        }
    }

    /// Whether the rule holds for the entire `assignment`.
    ///
    /// An assignment referencing a paper or reviewer outside `instance`
    /// satisfies no rule.
    pub fn holds(&self, instance: &MatchInstance, assignment: &Assignment) -> bool {
        if !in_bounds(instance, assignment) {
            return false;
        }
        match self {
            Self::ReviewerUnderload => {
                let mut load = vec![0usize; instance.reviewer_count()];
                for (_, reviewers) in assignment.iter() {
                    for &r in reviewers {
                        load[r] += 1;
                        if load[r] > instance.reviewers_per_paper() {
                            return false;
                        }
                    }
                }
                true
            }
            Self::ReviewerNotAuthor => assignment.iter().all(|(p, reviewers)| {
                let authors = &instance.paper(p).authors;
                reviewers
                    .iter()
                    .all(|&r| !authors.contains(&instance.reviewer(r).full_name))
            }),
            Self::UniqueReviewers => assignment.iter().all(|(_, reviewers)| !has_repeat(reviewers)),
            Self::ReviewersFromDifferentInstitutions => assignment.iter().all(|(_, reviewers)| {
                let institutions: Vec<&str> = reviewers
                    .iter()
                    .map(|&r| instance.reviewer(r).institution.as_str())
                    .collect();
                !has_repeat(&institutions)
            }),
            Self::ReviewersNotAuthorsInstitutions => assignment.iter().all(|(p, reviewers)| {
                let institutions = &instance.paper(p).institutions;
                reviewers
                    .iter()
                    .all(|&r| !institutions.contains(&instance.reviewer(r).institution))
            }),
        }
    }
}

impl FromStr for Constraint {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        Constraint::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| MatchError::UnknownConstraint(s.to_string()))
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
