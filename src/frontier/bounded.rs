//! Priority frontier with optional capacity.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Result of [`BoundedFrontier::push`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The entry was added without displacing anything.
    Inserted,
    /// The frontier was full; the worst entry was evicted for this one.
    Replaced,
    /// The frontier was full and the entry was not better than the worst.
    Rejected,
}

/// An entry removed from the frontier.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierEntry<T> {
    /// Priority (lower is explored first).
    pub priority: f64,
    /// The stored payload.
    pub item: T,
}

/// Ordering key: priority first, then insertion sequence.
///
/// Payloads are never compared, so two entries with equal priority are
/// ordered by arrival.
#[derive(Debug, Clone, Copy)]
struct Key {
    priority: f64,
    seq: u64,
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Min-priority container, optionally capped.
///
/// With `capacity == 0` the frontier is unbounded. Otherwise, once full, a
/// new entry is admitted only if its priority is strictly lower than the
/// current worst, which is evicted. This is the beam: the frontier never
/// holds more than `capacity` entries.
///
/// # Examples
///
/// ```
/// use u_revmatch::frontier::{BoundedFrontier, PushOutcome};
///
/// let mut frontier = BoundedFrontier::new(2);
/// assert_eq!(frontier.push(-1.0, "a"), PushOutcome::Inserted);
/// assert_eq!(frontier.push(-3.0, "b"), PushOutcome::Inserted);
/// assert_eq!(frontier.push(-2.0, "c"), PushOutcome::Replaced); // evicts "a"
/// assert_eq!(frontier.push(0.0, "d"), PushOutcome::Rejected);
///
/// assert_eq!(frontier.pop().unwrap().item, "b");
/// assert_eq!(frontier.pop().unwrap().item, "c");
/// assert!(frontier.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BoundedFrontier<T> {
    entries: BTreeMap<Key, T>,
    capacity: usize,
    next_seq: u64,
}

impl<T> BoundedFrontier<T> {
    /// Creates a frontier holding at most `capacity` entries (0 = unbounded).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            capacity,
            next_seq: 0,
        }
    }

    /// Creates an unbounded frontier.
    pub fn unbounded() -> Self {
        Self::new(0)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_bounded(&self) -> bool {
        self.capacity > 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowest priority currently stored.
    pub fn best_priority(&self) -> Option<f64> {
        self.entries.first_key_value().map(|(k, _)| k.priority)
    }

    /// Highest priority currently stored.
    pub fn worst_priority(&self) -> Option<f64> {
        self.entries.last_key_value().map(|(k, _)| k.priority)
    }

    /// Offers an entry to the frontier.
    pub fn push(&mut self, priority: f64, item: T) -> PushOutcome {
        debug_assert!(!priority.is_nan(), "frontier priority must not be NaN");

        let mut outcome = PushOutcome::Inserted;
        if self.is_bounded() && self.entries.len() >= self.capacity {
            match self.worst_priority() {
                Some(worst) if priority < worst => {
                    self.entries.pop_last();
                    outcome = PushOutcome::Replaced;
                }
                _ => return PushOutcome::Rejected,
            }
        }

        let key = Key {
            priority,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.entries.insert(key, item);
        outcome
    }

    /// Removes and returns the lowest-priority entry.
    pub fn pop(&mut self) -> Option<FrontierEntry<T>> {
        self.entries
            .pop_first()
            .map(|(key, item)| FrontierEntry {
                priority: key.priority,
                item,
            })
    }
}
