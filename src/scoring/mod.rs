//! Reviewer/paper similarity scoring.
//!
//! Scores are cosine similarities between a paper embedding and a
//! reviewer's embeddings, reduced with an [`Aggregation`]. The
//! [`ScoreTable`] precomputes every pair once so the matchers only read it.

mod similarity;
mod table;

pub use similarity::{similarity, Aggregation};
pub use table::ScoreTable;
