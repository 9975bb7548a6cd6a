/*!
 * Cell Contract
 * The shared read/write surface implemented by every cell variant
 */

use crate::state::State;
use std::sync::Arc;

/// Concurrent container for an immutable [`State`] snapshot
///
/// All variants share the same contract:
/// - `add_entry` is a total function: it never fails and always results in
///   exactly one published state transition.
/// - `snapshot` returns a fully-formed, internally consistent snapshot.
///   The `Arc` gives the caller value semantics: the container never mutates
///   a published `State` in place.
///
/// Implementations differ only in how they trade read latency, write latency,
/// and contention behavior.
pub trait StateCell: Send + Sync {
    /// Append an entry, adjusting the sentinel counter atomically with it
    fn add_entry(&self, value: &str);

    /// Current snapshot; never a state under construction
    fn snapshot(&self) -> Arc<State>;
}
