//! Constraint-aware reviewer-to-paper matching.
//!
//! Assigns a fixed number of reviewers to every paper, maximizing the total
//! similarity between reviewer expertise and paper content while respecting
//! hard feasibility rules (conflicts of interest, reviewer load, institution
//! diversity).
//!
//! - **Scoring**: cosine similarity between embeddings, precomputed into a
//!   rank-sorted [`scoring::ScoreTable`].
//! - **Constraints**: a closed family of predicates over whole assignments.
//! - **Greedy**: per-paper best feasible reviewers with randomized restarts.
//! - **Branch-and-Bound**: best-first search over partial assignments with
//!   admissible upper bounds, optionally warm-started by greedy.
//! - **Beam Search**: branch-and-bound with a capped frontier.
//!
//! # Example
//!
//! ```
//! use u_revmatch::constraints::ConstraintSet;
//! use u_revmatch::instance::{MatchInstance, Paper, Reviewer};
//! use u_revmatch::matcher::Matcher;
//!
//! let instance = MatchInstance::new(
//!     vec![
//!         Paper::new("Sparse Attention", vec![0.9, 0.1]).with_institutions(["UA"]),
//!         Paper::new("Graph Kernels", vec![0.1, 0.9]).with_institutions(["UB"]),
//!     ],
//!     vec![
//!         Reviewer::new("Ada", "UB", vec![vec![1.0, 0.0]]),
//!         Reviewer::new("Grace", "UA", vec![vec![0.0, 1.0]]),
//!         Reviewer::new("Alan", "UC", vec![vec![0.5, 0.5]]),
//!     ],
//!     1,
//! )
//! .unwrap();
//!
//! let matcher: Matcher = "branch_and_bound".parse().unwrap();
//! let outcome = matcher.run(&instance, &ConstraintSet::all()).unwrap();
//! let named = outcome.assignment.unwrap().to_named(&instance);
//! assert_eq!(named["Sparse Attention"], vec!["Ada".to_string()]);
//! assert_eq!(named["Graph Kernels"], vec!["Grace".to_string()]);
//! ```
//!
//! # Logging
//!
//! Progress and outcomes are emitted through `tracing`; install a subscriber
//! to see them.

pub mod beam;
pub mod bnb;
pub mod constraints;
pub mod error;
pub mod frontier;
pub mod greedy;
pub mod instance;
pub mod matcher;
pub mod scoring;

pub use error::{MatchError, Result};
