/*!
 * Concurrent State Cells
 *
 * Three containers for a composite, multi-field snapshot value that must
 * stay internally consistent under many simultaneous readers and writers:
 * an ordered sequence of string entries plus a counter of entries matching a
 * sentinel value. A reader must never observe a snapshot whose counter
 * disagrees with its entries.
 *
 * # Variants
 *
 * | Cell | Reads | Writes |
 * |------|-------|--------|
 * | [`LockedCell`] | shared lock | exclusive lock, totally ordered |
 * | [`OptimisticCell`] | lock-free | CAS loop, unbounded retries |
 * | [`HybridCell`] | lock-free | CAS bounded by a retry budget, then lock escalation |
 *
 * All variants publish whole immutable [`State`] values and hand out
 * `Arc<State>` snapshots; the internal value is replaced, never edited in
 * place, so per-field consistency holds for every observable snapshot.
 *
 * # Example
 *
 * ```
 * use state_cell::{HybridCell, StateCell};
 *
 * let cell = HybridCell::new();
 * cell.add_entry("apple");
 * cell.add_entry("pear");
 *
 * let state = cell.snapshot();
 * assert_eq!(state.len(), 2);
 * assert_eq!(state.matching_count(), 1);
 * ```
 */

#![warn(missing_docs)]

mod cells;
pub mod config;
pub mod state;
pub mod traits;

// Re-export for convenience
pub use cells::{HybridCell, HybridStats, LockedCell, OptimisticCell};
pub use config::HybridConfig;
pub use state::{State, DEFAULT_SENTINEL};
pub use traits::StateCell;
