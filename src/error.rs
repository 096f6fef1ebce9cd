//! Setup-time errors.
//!
//! Search failures (no greedy solution, no feasible branch-and-bound leaf)
//! are not errors: they are reported through the result types. Only
//! misconfiguration and malformed inputs end up here.

/// Errors raised while preparing or configuring a matching run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchError {
    /// Unknown similarity aggregation token (expected `max` or `mean`).
    #[error("invalid aggregation method '{0}': choose 'max' or 'mean'")]
    InvalidAggregation(String),

    /// Constraint name that does not resolve to a predicate.
    #[error("unknown constraint: {0}")]
    UnknownConstraint(String),

    /// Matcher name that does not resolve to an algorithm.
    #[error("{0} matcher is not implemented")]
    UnknownMatcher(String),

    /// A greedy trial could not fill the quota of one paper.
    ///
    /// Recovered inside the greedy retry loop; never returned by a runner.
    #[error(
        "there are not {required} reviewers to make a feasible solution for paper '{paper}' \
         (found {found})"
    )]
    InsufficientFeasibleReviewers {
        /// Title of the paper that could not be filled.
        paper: String,
        /// Number of feasible reviewers found.
        found: usize,
        /// Target reviewer count.
        required: usize,
    },

    /// Paper or reviewer collections are malformed.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// A runner configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Embedding vectors of different dimensions were compared.
    #[error("embedding dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Dimension of the paper embedding.
        expected: usize,
        /// Dimension of the offending reviewer embedding.
        got: usize,
    },

    /// A reviewer has no embedding vectors.
    #[error("reviewer has no embeddings")]
    EmptyEmbeddings,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatchError>;
