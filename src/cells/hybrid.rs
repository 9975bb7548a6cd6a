/*!
 * Hybrid Cell
 * Bounded optimistic CAS with one-shot escalation to an exclusive lock
 *
 * # Design
 *
 * The pure optimistic cell degrades under heavy write contention: its retry
 * loop has no bound. This cell keeps the lock-free read path and the
 * lock-free low-contention write path, but caps the optimistic phase at a
 * configured number of CAS attempts and then arbitrates through an exclusive
 * lock, so worst-case writer latency is bounded.
 *
 * A writer attempt moves through exactly two phases:
 *
 * **Optimistic** (shared lock, up to N attempts):
 * 1. Acquire the writer lock in shared mode (only blocks while some writer
 *    holds it exclusively)
 * 2. Load the slot, build the successor, attempt the CAS
 * 3. On success, done; on failure, release and retry
 *
 * **Escalated** (exclusive lock, at most once per call):
 * 1. Acquire the writer lock exclusively
 * 2. Re-load the slot; the value read before escalation is stale by now
 * 3. Build the successor from the fresh value and store it unconditionally;
 *    no CAS needed, the exclusive lock excludes every other writer
 *
 * Escalation is never sticky: the next `add_entry` call starts optimistic
 * again.
 *
 * # Memory layout
 *
 * The atomic slot and the lock are padded onto separate cache lines. Both
 * fields are hammered by different writers at once; letting the lock's
 * bookkeeping share a line with the slot measurably degrades throughput
 * under write contention. This is a performance property only; correctness
 * does not depend on it.
 */

use crate::config::HybridConfig;
use crate::state::{State, DEFAULT_SENTINEL};
use crate::traits::StateCell;
use arc_swap::ArcSwap;
use crossbeam_utils::CachePadded;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::trace;

/// Snapshot cell with bounded optimistic writes and lock fallback
///
/// # Performance
///
/// - **Reads**: single atomic load, identical to [`OptimisticCell`](crate::OptimisticCell)
/// - **Writes**: at most N failed CAS attempts plus one lock acquisition
/// - **Best for**: the production default; read-side scalability of pure CAS
///   without its unbounded-retry failure mode
#[repr(C, align(64))]
pub struct HybridCell {
    /// Current snapshot; read lock-free by `snapshot`
    slot: CachePadded<ArcSwap<State>>,
    /// Writer arbitration only; readers never touch it
    writer_lock: CachePadded<RwLock<()>>,
    stats: CellCounters,
    config: HybridConfig,
    sentinel: Box<str>,
}

/// Lock-free instrumentation counters
///
/// All updates use relaxed ordering; values are for observation, not
/// synchronization.
#[derive(Default)]
struct CellCounters {
    optimistic_commits: AtomicU64,
    cas_failures: AtomicU64,
    escalations: AtomicU64,
    max_optimistic_attempts: AtomicU32,
}

/// Point-in-time view of a [`HybridCell`]'s write-path counters
///
/// Counter values may lag each other slightly under concurrent updates;
/// each individual value is accurate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HybridStats {
    /// Writes that committed during the optimistic phase
    pub optimistic_commits: u64,
    /// CAS attempts that lost to a concurrent writer
    pub cas_failures: u64,
    /// Writes that exhausted the retry budget and took the exclusive lock
    pub escalations: u64,
    /// High-water mark of optimistic attempts in a single call
    pub max_optimistic_attempts: u32,
}

impl HybridCell {
    /// Create an empty cell with the default retry budget and sentinel
    #[inline]
    pub fn new() -> Self {
        Self::with_config(HybridConfig::default())
    }

    /// Create an empty cell with an explicit retry budget
    pub fn with_config(config: HybridConfig) -> Self {
        Self::with_config_and_sentinel(config, DEFAULT_SENTINEL)
    }

    /// Create an empty cell with an explicit retry budget and sentinel
    pub fn with_config_and_sentinel(config: HybridConfig, sentinel: &str) -> Self {
        Self {
            slot: CachePadded::new(ArcSwap::from_pointee(State::default())),
            writer_lock: CachePadded::new(RwLock::new(())),
            stats: CellCounters::default(),
            config,
            sentinel: Box::from(sentinel),
        }
    }

    /// Append an entry: bounded CAS attempts, then lock escalation
    pub fn add_entry(&self, value: &str) {
        for attempt in 1..=self.config.max_optimistic_retries {
            let shared = self.writer_lock.read();
            let cur = self.slot.load();
            let next = Arc::new(cur.with_entry(value, &self.sentinel));
            let prev = self.slot.compare_and_swap(&*cur, next);
            let committed = Arc::ptr_eq(&*prev, &*cur);
            drop(shared);

            if committed {
                self.stats.optimistic_commits.fetch_add(1, Ordering::Relaxed);
                self.stats
                    .max_optimistic_attempts
                    .fetch_max(attempt, Ordering::Relaxed);
                return;
            }
            self.stats.cas_failures.fetch_add(1, Ordering::Relaxed);
        }

        // Retry budget exhausted: exclude all writers and publish directly.
        let _exclusive = self.writer_lock.write();
        // Must re-load here; the last value seen during the optimistic phase
        // may be many publishes old.
        let cur = self.slot.load_full();
        self.slot
            .store(Arc::new(cur.with_entry(value, &self.sentinel)));
        self.stats.escalations.fetch_add(1, Ordering::Relaxed);
        trace!(
            budget = self.config.max_optimistic_retries,
            "writer escalated to exclusive lock"
        );
    }

    /// Load the current snapshot (lock-free)
    #[inline(always)]
    pub fn snapshot(&self) -> Arc<State> {
        self.slot.load_full()
    }

    /// Snapshot of the write-path counters
    pub fn stats(&self) -> HybridStats {
        HybridStats {
            optimistic_commits: self.stats.optimistic_commits.load(Ordering::Relaxed),
            cas_failures: self.stats.cas_failures.load(Ordering::Relaxed),
            escalations: self.stats.escalations.load(Ordering::Relaxed),
            max_optimistic_attempts: self
                .stats
                .max_optimistic_attempts
                .load(Ordering::Relaxed),
        }
    }

    /// Configured retry budget
    #[inline]
    pub fn config(&self) -> HybridConfig {
        self.config
    }
}

impl Default for HybridCell {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCell for HybridCell {
    #[inline]
    fn add_entry(&self, value: &str) {
        HybridCell::add_entry(self, value)
    }

    #[inline]
    fn snapshot(&self) -> Arc<State> {
        HybridCell::snapshot(self)
    }
}
