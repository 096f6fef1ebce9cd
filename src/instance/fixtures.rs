//! Shared test instances.

use super::{MatchInstance, Paper, Reviewer};
use crate::scoring::ScoreTable;

/// `papers` x `reviewers` instance with distinct institutions and no
/// authors; embeddings are spread on a circle so scores differ.
pub(crate) fn uniform_instance(papers: usize, reviewers: usize, per_paper: usize) -> MatchInstance {
    let papers = (0..papers)
        .map(|i| {
            let t = i as f64 * 0.9;
            Paper::new(format!("paper-{i}"), vec![t.cos(), t.sin(), 0.3])
        })
        .collect();
    let reviewers = (0..reviewers)
        .map(|j| {
            let t = j as f64 * 0.7 + 0.1;
            Reviewer::new(
                format!("reviewer-{j}"),
                format!("inst-{j}"),
                vec![vec![t.cos(), t.sin(), (j % 3) as f64 * 0.2]],
            )
        })
        .collect();
    MatchInstance::new(papers, reviewers, per_paper).unwrap()
}

/// Two papers, reviewers A/B/C, one reviewer per paper, with the table
///
/// ```text
/// paper1: A 0.9, B 0.5, C 0.1
/// paper2: A 0.2, B 0.8, C 0.3
/// ```
pub(crate) fn two_by_three() -> (MatchInstance, ScoreTable) {
    let instance = MatchInstance::new(
        vec![
            Paper::new("paper1", vec![1.0]),
            Paper::new("paper2", vec![1.0]),
        ],
        vec![
            Reviewer::new("A", "IA", vec![vec![1.0]]),
            Reviewer::new("B", "IB", vec![vec![1.0]]),
            Reviewer::new("C", "IC", vec![vec![1.0]]),
        ],
        1,
    )
    .unwrap();
    let table = ScoreTable::from_rows(vec![vec![0.9, 0.5, 0.1], vec![0.2, 0.8, 0.3]]).unwrap();
    (instance, table)
}

/// Three papers, six reviewers, two reviewers per paper, with author and
/// institution conflicts.
///
/// | paper | authors | institutions |
/// |---|---|---|
/// | Graph Kernels | Alice | UA |
/// | Sparse Attention | Bob | UB |
/// | Causal Bandits | Carol | UC |
///
/// Reviewers: Alice (UA), Bob (UB), Carol (UC), Dan (UA), Eve (UD),
/// Frank (UB).
pub(crate) fn conference() -> MatchInstance {
    let papers = vec![
        Paper::new("Graph Kernels", vec![1.0, 0.2, 0.0])
            .with_authors(["Alice"])
            .with_institutions(["UA"])
            .with_countries(["ES"]),
        Paper::new("Sparse Attention", vec![0.1, 1.0, 0.3])
            .with_authors(["Bob"])
            .with_institutions(["UB"])
            .with_countries(["PT"]),
        Paper::new("Causal Bandits", vec![0.2, 0.1, 1.0])
            .with_authors(["Carol"])
            .with_institutions(["UC"])
            .with_countries(["FR"]),
    ];
    let reviewers = vec![
        Reviewer::new("Alice", "UA", vec![vec![1.0, 0.1, 0.0]]),
        Reviewer::new("Bob", "UB", vec![vec![0.0, 1.0, 0.2], vec![0.9, 0.1, 0.0]]),
        Reviewer::new("Carol", "UC", vec![vec![0.1, 0.0, 1.0]]),
        Reviewer::new("Dan", "UA", vec![vec![0.8, 0.5, 0.1]]),
        Reviewer::new("Eve", "UD", vec![vec![0.3, 0.9, 0.4]]),
        Reviewer::new("Frank", "UB", vec![vec![0.5, 0.2, 0.8]]),
    ];
    MatchInstance::new(papers, reviewers, 2).unwrap()
}

/// Every reviewer belongs to the institution of the single paper, so no
/// assignment satisfies `reviewers_not_authors_institutions`.
pub(crate) fn infeasible() -> MatchInstance {
    let papers = vec![Paper::new("Closed Shop", vec![1.0, 0.0]).with_institutions(["UX"])];
    let reviewers = vec![
        Reviewer::new("R1", "UX", vec![vec![1.0, 0.0]]),
        Reviewer::new("R2", "UX", vec![vec![0.0, 1.0]]),
    ];
    MatchInstance::new(papers, reviewers, 1).unwrap()
}
