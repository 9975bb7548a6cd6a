/*!
 * Lock-Based Cell
 * Reader/writer lock around the snapshot slot; the baseline design
 */

use crate::state::{State, DEFAULT_SENTINEL};
use crate::traits::StateCell;
use parking_lot::RwLock;
use std::sync::Arc;

/// Lock-based snapshot cell
///
/// # Performance
///
/// - **Reads**: shared lock, contend with writers
/// - **Writes**: exclusive lock, totally ordered
/// - **Best for**: correctness baseline; workloads where contention is rare
///
/// Writers serialize on the exclusive lock; readers run concurrently with
/// each other but never with a writer. The slot holds an `Arc` that is only
/// ever replaced under the lock, never edited in place, so a reader's clone
/// is always a fully-formed snapshot.
pub struct LockedCell {
    state: RwLock<Arc<State>>,
    sentinel: Box<str>,
}

impl LockedCell {
    /// Create an empty cell tracking the default sentinel
    #[inline]
    pub fn new() -> Self {
        Self::with_sentinel(DEFAULT_SENTINEL)
    }

    /// Create an empty cell tracking a custom sentinel value
    pub fn with_sentinel(sentinel: &str) -> Self {
        Self {
            state: RwLock::new(Arc::new(State::default())),
            sentinel: Box::from(sentinel),
        }
    }

    /// Append an entry under the exclusive lock
    pub fn add_entry(&self, value: &str) {
        let mut slot = self.state.write();
        let next = slot.with_entry(value, &self.sentinel);
        *slot = Arc::new(next);
    }

    /// Copy the current snapshot under the shared lock
    #[inline]
    pub fn snapshot(&self) -> Arc<State> {
        Arc::clone(&self.state.read())
    }
}

impl Default for LockedCell {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCell for LockedCell {
    #[inline]
    fn add_entry(&self, value: &str) {
        LockedCell::add_entry(self, value)
    }

    #[inline]
    fn snapshot(&self) -> Arc<State> {
        LockedCell::snapshot(self)
    }
}
