//! Assignment value object.

use std::collections::BTreeMap;

use super::MatchInstance;
use crate::error::{MatchError, Result};

/// Reviewers assigned to papers.
///
/// Papers and reviewers are addressed by their position in the owning
/// [`MatchInstance`]. A paper without an entry is unstarted; entries never
/// hold an empty list.
///
/// Branching never mutates a shared assignment: [`Assignment::with_reviewer`]
/// returns an independent copy, so sibling candidates cannot observe each
/// other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    papers: BTreeMap<usize, Vec<usize>>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no reviewer is assigned at all.
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Number of started papers.
    pub fn started_papers(&self) -> usize {
        self.papers.len()
    }

    /// Total number of (paper, reviewer) pairs.
    pub fn total_reviews(&self) -> usize {
        self.papers.values().map(Vec::len).sum()
    }

    /// Reviewers of `paper` (empty slice when unstarted).
    pub fn reviewers_of(&self, paper: usize) -> &[usize] {
        self.papers.get(&paper).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates `(paper, reviewers)` in ascending paper index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.papers.iter().map(|(&p, rs)| (p, rs.as_slice()))
    }

    /// Returns a copy with `reviewer` appended to `paper`.
    pub fn with_reviewer(&self, paper: usize, reviewer: usize) -> Self {
        let mut next = self.clone();
        next.push(paper, reviewer);
        next
    }

    /// Appends `reviewer` to `paper` in place.
    pub fn push(&mut self, paper: usize, reviewer: usize) {
        self.papers.entry(paper).or_default().push(reviewer);
    }

    /// Removes the last reviewer of `paper`, dropping the entry when it
    /// becomes empty.
    pub fn pop(&mut self, paper: usize) -> Option<usize> {
        let reviewers = self.papers.get_mut(&paper)?;
        let last = reviewers.pop();
        if reviewers.is_empty() {
            self.papers.remove(&paper);
        }
        last
    }

    /// Whether `paper` holds at least `reviewers_per_paper` reviewers.
    pub fn is_paper_complete(&self, paper: usize, reviewers_per_paper: usize) -> bool {
        self.reviewers_of(paper).len() >= reviewers_per_paper
    }

    /// Whether all `paper_count` papers hold exactly `reviewers_per_paper`
    /// reviewers.
    pub fn is_complete(&self, paper_count: usize, reviewers_per_paper: usize) -> bool {
        self.papers.len() == paper_count
            && self
                .papers
                .values()
                .all(|rs| rs.len() == reviewers_per_paper)
    }

    /// First paper in collection order that is unstarted or partial.
    pub fn first_incomplete(&self, paper_count: usize, reviewers_per_paper: usize) -> Option<usize> {
        (0..paper_count).find(|&p| !self.is_paper_complete(p, reviewers_per_paper))
    }

    /// Renders the assignment with titles and reviewer names.
    pub fn to_named(&self, instance: &MatchInstance) -> BTreeMap<String, Vec<String>> {
        self.papers
            .iter()
            .map(|(&p, rs)| {
                let names = rs
                    .iter()
                    .map(|&r| instance.reviewer(r).full_name.clone())
                    .collect();
                (instance.paper(p).title.clone(), names)
            })
            .collect()
    }

    /// Checks index bounds and the per-paper reviewer cap.
    pub fn validate(&self, instance: &MatchInstance) -> Result<()> {
        for (&p, reviewers) in &self.papers {
            if p >= instance.paper_count() {
                return Err(MatchError::InvalidInstance(format!(
                    "assignment references unknown paper index {p}"
                )));
            }
            if reviewers.len() > instance.reviewers_per_paper() {
                return Err(MatchError::InvalidInstance(format!(
                    "paper '{}' has {} reviewers, more than {}",
                    instance.paper(p).title,
                    reviewers.len(),
                    instance.reviewers_per_paper()
                )));
            }
            if let Some(&r) = reviewers.iter().find(|&&r| r >= instance.reviewer_count()) {
                return Err(MatchError::InvalidInstance(format!(
                    "assignment references unknown reviewer index {r}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_reviewer_leaves_parent_untouched() {
        let parent = Assignment::new().with_reviewer(0, 1);
        let child_a = parent.with_reviewer(0, 2);
        let child_b = parent.with_reviewer(1, 2);

        assert_eq!(parent.reviewers_of(0), &[1]);
        assert_eq!(child_a.reviewers_of(0), &[1, 2]);
        assert_eq!(child_b.reviewers_of(0), &[1]);
        assert_eq!(child_b.reviewers_of(1), &[2]);
    }

    #[test]
    fn test_pop_drops_empty_entry() {
        let mut a = Assignment::new();
        a.push(3, 7);
        assert_eq!(a.started_papers(), 1);
        assert_eq!(a.pop(3), Some(7));
        assert!(a.is_empty());
        assert_eq!(a.pop(3), None);
    }

    #[test]
    fn test_completeness() {
        let mut a = Assignment::new();
        assert!(!a.is_complete(2, 1));
        assert_eq!(a.first_incomplete(2, 1), Some(0));

        a.push(0, 0);
        assert_eq!(a.first_incomplete(2, 1), Some(1));
        assert!(!a.is_complete(2, 1));

        a.push(1, 2);
        assert!(a.is_complete(2, 1));
        assert_eq!(a.first_incomplete(2, 1), None);
        assert_eq!(a.total_reviews(), 2);
    }

    #[test]
    fn test_partial_paper_is_first_incomplete() {
        let a = Assignment::new().with_reviewer(0, 0).with_reviewer(1, 1);
        assert_eq!(a.first_incomplete(2, 2), Some(0));
    }
}
