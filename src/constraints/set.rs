//! Active constraint set.

use super::predicates::Constraint;
use crate::error::Result;
use crate::instance::{Assignment, MatchInstance};

/// The predicates active for one run.
///
/// # Examples
///
/// ```
/// use u_revmatch::constraints::{Constraint, ConstraintSet};
///
/// let set = ConstraintSet::from_names(["unique_reviewers", "reviewer_underload"]).unwrap();
/// assert!(set.contains(Constraint::UniqueReviewers));
/// assert!(ConstraintSet::from_names(["bogus"]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// Builds a set from explicit predicates, ignoring repeats.
    pub fn new(constraints: impl IntoIterator<Item = Constraint>) -> Self {
        let mut set = Vec::new();
        for c in constraints {
            if !set.contains(&c) {
                set.push(c);
            }
        }
        Self { constraints: set }
    }

    /// Every predicate active.
    pub fn all() -> Self {
        Self::new(Constraint::ALL)
    }

    /// No predicate active: every assignment is feasible.
    pub fn none() -> Self {
        Self::default()
    }

    /// Resolves predicate names.
    ///
    /// # Errors
    ///
    /// [`crate::MatchError::UnknownConstraint`] for the first name that does
    /// not resolve.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let constraints = names
            .into_iter()
            .map(|n| n.as_ref().parse::<Constraint>())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(constraints))
    }

    pub fn contains(&self, constraint: Constraint) -> bool {
        self.constraints.contains(&constraint)
    }

    pub fn iter(&self) -> impl Iterator<Item = Constraint> + '_ {
        self.constraints.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Logical AND of every active predicate over the whole assignment.
    ///
    /// Indices outside `instance` make any non-empty set infeasible.
    pub fn is_feasible(&self, instance: &MatchInstance, assignment: &Assignment) -> bool {
        self.constraints
            .iter()
            .all(|c| c.holds(instance, assignment))
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<T: IntoIterator<Item = Constraint>>(iter: T) -> Self {
        Self::new(iter)
    }
}
