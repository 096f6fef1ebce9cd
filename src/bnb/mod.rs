//! Branch-and-Bound search.
//!
//! Explores partial assignments one reviewer at a time, always extending the
//! first incomplete paper. Each candidate gets an admissible upper bound;
//! candidates that cannot beat the incumbent are pruned. By default the
//! search returns the first leaf that improves the incumbent; with
//! `return_first_solution = false` it drains the frontier and returns the
//! optimum.
//!
//! A capped frontier turns the same engine into beam search (see
//! [`crate::beam`]).
//!
//! # References
//!
//! - Land, A. H. & Doig, A. G. (1960). "An Automatic Method of Solving
//!   Discrete Programming Problems", *Econometrica* 28(3), 497-520.

mod bound;
mod config;
mod observer;
mod runner;
mod types;

pub use config::BnbConfig;
pub use observer::{NoopObserver, SearchObserver, TracingObserver};
pub use runner::{BnbResult, BnbRunner, FALLBACK_SIMILARITY};
pub use types::{IncumbentSource, SearchStats, Termination};
