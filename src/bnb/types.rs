//! Branch-and-bound outcome types.

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// A leaf improved the incumbent and `return_first_solution` was set.
    FirstImprovement,
    /// The frontier ran empty.
    Exhausted,
    /// The configured wall-clock limit was reached.
    TimeLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Where the initial incumbent score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IncumbentSource {
    /// An explicit lower bound (no incumbent assignment).
    LowerBound,
    /// A successful greedy run (its assignment is the incumbent).
    Greedy,
    /// Greedy failed; a constant similarity estimate is used as the score.
    Heuristic,
}

/// Search counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes that were branched.
    pub expanded: usize,
    /// Feasible branches whose bound beat the incumbent (offered to the
    /// frontier).
    pub explored: usize,
    /// Feasible branches cut by the bound.
    pub pruned: usize,
    /// Entries dropped by a full frontier (rejected or evicted).
    pub discarded: usize,
    /// Leaves popped from the frontier.
    pub leaves: usize,
    /// Leaves that improved the incumbent.
    pub improvements: usize,
    /// Wall-clock time in milliseconds, greedy warm start included.
    pub elapsed_ms: u64,
}
