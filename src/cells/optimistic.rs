/*!
 * Optimistic CAS Cell
 * Single atomic slot with an unbounded load/copy/CAS retry loop
 */

use crate::state::{State, DEFAULT_SENTINEL};
use crate::traits::StateCell;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Lock-free snapshot cell
///
/// # Performance
///
/// - **Reads**: single atomic load, never block, O(1)
/// - **Writes**: clone-modify-CAS; unbounded retries under contention
/// - **Best for**: read-heavy workloads with few concurrent writers
///
/// Every successful publish is derived from a single causally-prior
/// snapshot, and publishes are totally ordered by CAS success order. There
/// is no fairness guarantee among writers: under sustained write contention
/// the retry loop can in principle spin arbitrarily long. Use
/// [`HybridCell`](crate::HybridCell) when that matters.
pub struct OptimisticCell {
    slot: ArcSwap<State>,
    sentinel: Box<str>,
}

impl OptimisticCell {
    /// Create an empty cell tracking the default sentinel
    #[inline]
    pub fn new() -> Self {
        Self::with_sentinel(DEFAULT_SENTINEL)
    }

    /// Create an empty cell tracking a custom sentinel value
    pub fn with_sentinel(sentinel: &str) -> Self {
        Self {
            slot: ArcSwap::from_pointee(State::default()),
            sentinel: Box::from(sentinel),
        }
    }

    /// Append an entry via clone-modify-CAS, retrying until the publish wins
    pub fn add_entry(&self, value: &str) {
        loop {
            let cur = self.slot.load();
            let next = Arc::new(cur.with_entry(value, &self.sentinel));
            let prev = self.slot.compare_and_swap(&*cur, next);
            if Arc::ptr_eq(&*prev, &*cur) {
                return;
            }
            // Lost the race; rebuild from the winner's snapshot
        }
    }

    /// Load the current snapshot (lock-free)
    #[inline(always)]
    pub fn snapshot(&self) -> Arc<State> {
        self.slot.load_full()
    }
}

impl Default for OptimisticCell {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCell for OptimisticCell {
    #[inline]
    fn add_entry(&self, value: &str) {
        OptimisticCell::add_entry(self, value)
    }

    #[inline]
    fn snapshot(&self) -> Arc<State> {
        OptimisticCell::snapshot(self)
    }
}
