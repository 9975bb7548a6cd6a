/*!
 * Cell Variants
 *
 * Three containers for the same snapshot contract:
 * - LockedCell: reader/writer lock, the reference-correct baseline
 * - OptimisticCell: pure CAS, lock-free reads and writes, unbounded retries
 * - HybridCell: bounded CAS with lock escalation, lock-free reads
 */

mod hybrid;
mod locked;
mod optimistic;

// Re-export public API
pub use hybrid::{HybridCell, HybridStats};
pub use locked::LockedCell;
pub use optimistic::OptimisticCell;
