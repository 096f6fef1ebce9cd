//! Beam search.
//!
//! Not a separate algorithm: branch-and-bound with a zero lower bound and a
//! frontier capped at the beam width. Once the beam is full, weaker partial
//! assignments are silently dropped, trading optimality for bounded memory
//! and time.

mod config;
mod runner;

pub use config::BeamConfig;
pub use runner::BeamRunner;
