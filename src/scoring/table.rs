//! Precomputed reviewer/paper score table.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::similarity::{similarity, Aggregation};
use crate::error::{MatchError, Result};
use crate::instance::{Assignment, MatchInstance, Paper, Reviewer};

/// Similarity of every reviewer to every paper.
///
/// Each paper row is available both as a dense lookup ([`ScoreTable::score`])
/// and ranked by descending score ([`ScoreTable::ranked`]); ties keep the
/// reviewer collection order. Built once per run and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    scores: Vec<Vec<f64>>,
    ranked: Vec<Vec<(usize, f64)>>,
}

fn score_row(paper: &Paper, reviewers: &[Reviewer]) -> Result<Vec<f64>> {
    reviewers
        .iter()
        .map(|r| similarity(&r.embeddings, &paper.embedding, Aggregation::Max))
        .collect()
}

fn rank(row: &[f64]) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = row.iter().copied().enumerate().collect();
    // Stable sort keeps collection order among equal scores.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

impl ScoreTable {
    /// Computes `similarity(reviewer, paper, Max)` for all pairs.
    ///
    /// With the `parallel` feature, paper rows are computed with rayon.
    pub fn build(instance: &MatchInstance) -> Result<Self> {
        let reviewers = instance.reviewers();

        #[cfg(feature = "parallel")]
        let scores: Vec<Vec<f64>> = instance
            .papers()
            .par_iter()
            .map(|p| score_row(p, reviewers))
            .collect::<Result<Vec<_>>>()?;

        #[cfg(not(feature = "parallel"))]
        let scores: Vec<Vec<f64>> = instance
            .papers()
            .iter()
            .map(|p| score_row(p, reviewers))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_dense(scores))
    }

    /// Builds a table from explicit scores, `rows[paper][reviewer]`.
    ///
    /// # Errors
    ///
    /// [`MatchError::InvalidInstance`] if the rows are empty, ragged or
    /// contain NaN.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(MatchError::InvalidInstance("empty score table".into()));
        }
        if rows.iter().any(|r| r.len() != width) {
            return Err(MatchError::InvalidInstance("ragged score table".into()));
        }
        if rows.iter().flatten().any(|s| s.is_nan()) {
            return Err(MatchError::InvalidInstance("NaN in score table".into()));
        }
        Ok(Self::from_dense(rows))
    }

    fn from_dense(scores: Vec<Vec<f64>>) -> Self {
        let ranked = scores.iter().map(|row| rank(row)).collect();
        Self { scores, ranked }
    }

    pub fn paper_count(&self) -> usize {
        self.scores.len()
    }

    pub fn reviewer_count(&self) -> usize {
        self.scores.first().map(Vec::len).unwrap_or(0)
    }

    /// Score of `reviewer` for `paper`.
    pub fn score(&self, paper: usize, reviewer: usize) -> f64 {
        self.scores[paper][reviewer]
    }

    /// `(reviewer, score)` pairs of `paper`, best first.
    pub fn ranked(&self, paper: usize) -> &[(usize, f64)] {
        &self.ranked[paper]
    }

    /// Sum of the scores of every (paper, reviewer) pair in `assignment`.
    pub fn assignment_score(&self, assignment: &Assignment) -> f64 {
        assignment
            .iter()
            .map(|(p, rs)| rs.iter().map(|&r| self.score(p, r)).sum::<f64>())
            .sum()
    }

    /// Whether the table dimensions match `instance`.
    pub(crate) fn check_shape(&self, instance: &MatchInstance) -> Result<()> {
        if self.paper_count() != instance.paper_count()
            || self.reviewer_count() != instance.reviewer_count()
        {
            return Err(MatchError::InvalidInstance(format!(
                "score table is {}x{}, instance is {}x{}",
                self.paper_count(),
                self.reviewer_count(),
                instance.paper_count(),
                instance.reviewer_count()
            )));
        }
        Ok(())
    }
}
