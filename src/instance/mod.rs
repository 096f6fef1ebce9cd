//! Matching inputs: papers, reviewers and the target reviewer count.
//!
//! A [`MatchInstance`] is validated once at construction and read-only
//! afterwards. Collection order is significant: it is the iteration order
//! used by every matcher (first incomplete paper, candidate order, greedy
//! working order).

mod assignment;
mod records;

#[cfg(test)]
pub(crate) mod fixtures;

pub use assignment::Assignment;
pub use records::{Paper, Reviewer};

use std::collections::HashMap;

use crate::error::{MatchError, Result};

/// Papers, reviewers and how many reviewers each paper needs.
///
/// # Examples
///
/// ```
/// use u_revmatch::instance::{MatchInstance, Paper, Reviewer};
///
/// let instance = MatchInstance::new(
///     vec![Paper::new("P1", vec![1.0, 0.0])],
///     vec![
///         Reviewer::new("R1", "UA", vec![vec![1.0, 0.0]]),
///         Reviewer::new("R2", "UB", vec![vec![0.0, 1.0]]),
///     ],
///     1,
/// )
/// .unwrap();
/// assert_eq!(instance.paper_count(), 1);
/// assert_eq!(instance.reviewer_index_of("R2"), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct MatchInstance {
    papers: Vec<Paper>,
    reviewers: Vec<Reviewer>,
    reviewers_per_paper: usize,
    paper_index: HashMap<String, usize>,
    reviewer_index: HashMap<String, usize>,
}

impl MatchInstance {
    /// Validates and indexes the collections.
    ///
    /// # Errors
    ///
    /// - [`MatchError::InvalidInstance`] for empty collections, a zero target
    ///   count or duplicate identifiers.
    /// - [`MatchError::EmptyEmbeddings`] when a paper or reviewer has no
    ///   embedding data.
    /// - [`MatchError::DimensionMismatch`] when embeddings disagree in length.
    pub fn new(
        papers: Vec<Paper>,
        reviewers: Vec<Reviewer>,
        reviewers_per_paper: usize,
    ) -> Result<Self> {
        if papers.is_empty() {
            return Err(MatchError::InvalidInstance("no papers".into()));
        }
        if reviewers.is_empty() {
            return Err(MatchError::InvalidInstance("no reviewers".into()));
        }
        if reviewers_per_paper == 0 {
            return Err(MatchError::InvalidInstance(
                "reviewers_per_paper must be positive".into(),
            ));
        }

        let mut paper_index = HashMap::with_capacity(papers.len());
        for (i, paper) in papers.iter().enumerate() {
            if paper_index.insert(paper.title.clone(), i).is_some() {
                return Err(MatchError::InvalidInstance(format!(
                    "duplicate paper title: {}",
                    paper.title
                )));
            }
        }

        let mut reviewer_index = HashMap::with_capacity(reviewers.len());
        for (i, reviewer) in reviewers.iter().enumerate() {
            if reviewer_index.insert(reviewer.full_name.clone(), i).is_some() {
                return Err(MatchError::InvalidInstance(format!(
                    "duplicate reviewer name: {}",
                    reviewer.full_name
                )));
            }
        }

        let dim = papers[0].embedding.len();
        if dim == 0 {
            return Err(MatchError::EmptyEmbeddings);
        }
        for paper in &papers {
            if paper.embedding.len() != dim {
                return Err(MatchError::DimensionMismatch {
                    expected: dim,
                    got: paper.embedding.len(),
                });
            }
        }
        for reviewer in &reviewers {
            if reviewer.embeddings.is_empty() {
                return Err(MatchError::EmptyEmbeddings);
            }
            if let Some(bad) = reviewer.embeddings.iter().find(|e| e.len() != dim) {
                return Err(MatchError::DimensionMismatch {
                    expected: dim,
                    got: bad.len(),
                });
            }
        }

        Ok(Self {
            papers,
            reviewers,
            reviewers_per_paper,
            paper_index,
            reviewer_index,
        })
    }

    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    pub fn reviewers(&self) -> &[Reviewer] {
        &self.reviewers
    }

    /// Paper at collection position `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn paper(&self, index: usize) -> &Paper {
        &self.papers[index]
    }

    /// Reviewer at collection position `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn reviewer(&self, index: usize) -> &Reviewer {
        &self.reviewers[index]
    }

    pub fn paper_count(&self) -> usize {
        self.papers.len()
    }

    pub fn reviewer_count(&self) -> usize {
        self.reviewers.len()
    }

    /// Target number of reviewers per paper.
    pub fn reviewers_per_paper(&self) -> usize {
        self.reviewers_per_paper
    }

    pub fn paper_index_of(&self, title: &str) -> Option<usize> {
        self.paper_index.get(title).copied()
    }

    pub fn reviewer_index_of(&self, full_name: &str) -> Option<usize> {
        self.reviewer_index.get(full_name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reviewer(name: &str) -> Reviewer {
        Reviewer::new(name, "X", vec![vec![1.0, 0.0]])
    }

    #[test]
    fn test_indexing() {
        let instance = MatchInstance::new(
            vec![Paper::new("P1", vec![1.0, 0.0]), Paper::new("P2", vec![0.0, 1.0])],
            vec![reviewer("A"), reviewer("B")],
            1,
        )
        .unwrap();

        assert_eq!(instance.paper_index_of("P2"), Some(1));
        assert_eq!(instance.reviewer_index_of("A"), Some(0));
        assert_eq!(instance.reviewer_index_of("Z"), None);
        assert_eq!(instance.reviewers_per_paper(), 1);
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = MatchInstance::new(
            vec![Paper::new("P1", vec![1.0, 0.0])],
            vec![reviewer("A"), reviewer("A")],
            1,
        )
        .unwrap_err();
        assert!(matches!(err, MatchError::InvalidInstance(_)));
    }

    #[test]
    fn test_rejects_zero_target() {
        let err = MatchInstance::new(
            vec![Paper::new("P1", vec![1.0, 0.0])],
            vec![reviewer("A")],
            0,
        )
        .unwrap_err();
        assert!(matches!(err, MatchError::InvalidInstance(_)));
    }

    #[test]
    fn test_rejects_dimension_mismatch() {
        let err = MatchInstance::new(
            vec![Paper::new("P1", vec![1.0, 0.0])],
            vec![Reviewer::new("A", "X", vec![vec![1.0, 0.0, 0.0]])],
            1,
        )
        .unwrap_err();
        assert_eq!(
            err,
            MatchError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn test_rejects_reviewer_without_embeddings() {
        let err = MatchInstance::new(
            vec![Paper::new("P1", vec![1.0])],
            vec![Reviewer::new("A", "X", vec![])],
            1,
        )
        .unwrap_err();
        assert_eq!(err, MatchError::EmptyEmbeddings);
    }

    #[test]
    fn test_named_assignment_and_validation() {
        let instance = MatchInstance::new(
            vec![Paper::new("P1", vec![1.0, 0.0])],
            vec![reviewer("A"), reviewer("B")],
            1,
        )
        .unwrap();

        let a = Assignment::new().with_reviewer(0, 1);
        let named = a.to_named(&instance);
        assert_eq!(named["P1"], vec!["B".to_string()]);
        assert!(a.validate(&instance).is_ok());

        let over = a.with_reviewer(0, 0);
        assert!(over.validate(&instance).is_err());

        let unknown = Assignment::new().with_reviewer(0, 9);
        assert!(unknown.validate(&instance).is_err());
    }
}
