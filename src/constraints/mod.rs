//! Feasibility constraints.
//!
//! A small, closed family of predicates over assignments. Names are resolved
//! to [`Constraint`] variants at the boundary; the matchers only ever see a
//! [`ConstraintSet`].

mod predicates;
mod set;

pub use predicates::Constraint;
pub use set::ConstraintSet;
