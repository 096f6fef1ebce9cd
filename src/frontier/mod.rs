//! Bounded priority frontier used by branch-and-bound and beam search.

mod bounded;

pub use bounded::{BoundedFrontier, FrontierEntry, PushOutcome};
