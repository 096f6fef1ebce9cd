//! Greedy matcher.
//!
//! Fills each paper independently with its best feasible reviewers. A single
//! pass can paint itself into a corner (an early paper takes the only
//! reviewer a later paper could use), so the pass is retried with randomly
//! permuted paper and reviewer orders.

mod config;
mod runner;

pub use config::GreedyConfig;
pub use runner::{GreedyResult, GreedyRunner};
