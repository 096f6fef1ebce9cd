//! Embedding similarity.

use std::fmt;
use std::str::FromStr;

use crate::error::{MatchError, Result};

/// How the per-embedding similarities of one reviewer are reduced to a
/// single score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Aggregation {
    /// Best-matching past work.
    #[default]
    Max,
    /// Average over all past works.
    Mean,
}

impl FromStr for Aggregation {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "max" => Ok(Self::Max),
            "mean" => Ok(Self::Mean),
            other => Err(MatchError::InvalidAggregation(other.to_string())),
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Max => f.write_str("max"),
            Self::Mean => f.write_str("mean"),
        }
    }
}

fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity between a reviewer's embeddings and a paper embedding.
///
/// Every vector is normalized to unit length, each reviewer vector is dotted
/// with the paper vector and the resulting column is reduced with
/// `aggregation`. A zero vector has similarity `0.0` to anything.
///
/// # Errors
///
/// - [`MatchError::EmptyEmbeddings`] if `reviewer_embeddings` is empty.
/// - [`MatchError::DimensionMismatch`] if a reviewer vector and the paper
///   vector differ in length.
///
/// # Examples
///
/// ```
/// use u_revmatch::scoring::{similarity, Aggregation};
///
/// let reviewer = vec![vec![1.0, 0.0], vec![0.0, 2.0]];
/// let paper = [3.0, 0.0];
/// let max = similarity(&reviewer, &paper, Aggregation::Max).unwrap();
/// let mean = similarity(&reviewer, &paper, Aggregation::Mean).unwrap();
/// assert!((max - 1.0).abs() < 1e-12);
/// assert!((mean - 0.5).abs() < 1e-12);
/// ```
pub fn similarity(
    reviewer_embeddings: &[Vec<f64>],
    paper_embedding: &[f64],
    aggregation: Aggregation,
) -> Result<f64> {
    if reviewer_embeddings.is_empty() {
        return Err(MatchError::EmptyEmbeddings);
    }

    let paper_norm = norm(paper_embedding);
    let mut sims = Vec::with_capacity(reviewer_embeddings.len());
    for embedding in reviewer_embeddings {
        if embedding.len() != paper_embedding.len() {
            return Err(MatchError::DimensionMismatch {
                expected: paper_embedding.len(),
                got: embedding.len(),
            });
        }
        let denom = norm(embedding) * paper_norm;
        if denom == 0.0 {
            sims.push(0.0);
            continue;
        }
        let dot: f64 = embedding
            .iter()
            .zip(paper_embedding)
            .map(|(a, b)| a * b)
            .sum();
        sims.push(dot / denom);
    }

    Ok(match aggregation {
        Aggregation::Max => sims.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        Aggregation::Mean => sims.iter().sum::<f64>() / sims.len() as f64,
    })
}
