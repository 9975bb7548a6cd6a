/*!
 * Immutable State Snapshot
 * The composite value protected by every cell variant
 */

use std::sync::Arc;

/// Entry value whose occurrences the counter tracks by default
pub const DEFAULT_SENTINEL: &str = "apple";

/// Immutable snapshot of the tracked state
///
/// A `State` is never mutated after it is published: writers build a
/// successor with [`State::with_entry`] and swap the whole value in. Entries
/// are stored as `Arc<str>` so building a successor clones pointers, not
/// string bytes.
///
/// # Invariant
///
/// `matching_count` equals the number of entries equal to the cell's
/// sentinel, in every snapshot a reader can ever observe.
#[derive(Debug, Clone, Default)]
pub struct State {
    entries: Vec<Arc<str>>,
    matching_count: usize,
}

impl State {
    /// Entries in publication order
    #[inline]
    pub fn entries(&self) -> &[Arc<str>] {
        &self.entries
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entry has been published yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of sentinel-valued entries, as tracked at publish time
    #[inline]
    pub fn matching_count(&self) -> usize {
        self.matching_count
    }

    /// Build the successor snapshot: append `value`, bump the counter if it
    /// equals `sentinel`
    ///
    /// # Performance
    /// O(n) in the number of entries (pointer clones only). The receiver is
    /// untouched; the successor is a fresh value ready to publish.
    pub fn with_entry(&self, value: &str, sentinel: &str) -> State {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend(self.entries.iter().cloned());
        entries.push(Arc::from(value));

        State {
            entries,
            matching_count: self.matching_count + usize::from(value == sentinel),
        }
    }

    /// Recount sentinel occurrences from the entries themselves
    ///
    /// Used to verify that the tracked counter agrees with the data; a
    /// mismatch means a reader observed a torn snapshot.
    pub fn recount(&self, sentinel: &str) -> usize {
        self.entries.iter().filter(|e| &***e == sentinel).count()
    }

    /// True if the tracked counter agrees with a recount
    #[inline]
    pub fn is_consistent(&self, sentinel: &str) -> bool {
        self.matching_count == self.recount(sentinel)
    }
}
