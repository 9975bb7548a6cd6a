/*!
 * Hybrid Cell Configuration
 * Runtime tuning for the bounded optimistic phase
 */

/// Configuration for [`HybridCell`](crate::HybridCell)
///
/// The retry bound is an empirical tuning constant, not a correctness
/// requirement: any value (including zero) yields a correct cell, only the
/// contention profile changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HybridConfig {
    /// Optimistic CAS attempts before escalating to the exclusive lock
    pub max_optimistic_retries: u32,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            max_optimistic_retries: 3,
        }
    }
}

impl HybridConfig {
    /// Configuration with an explicit retry bound
    pub const fn with_retries(max_optimistic_retries: u32) -> Self {
        Self {
            max_optimistic_retries,
        }
    }

    /// Configuration for write-heavy workloads (escalate quickly)
    pub const fn contended() -> Self {
        Self {
            max_optimistic_retries: 1,
        }
    }

    /// Configuration for read-mostly workloads (CAS almost always wins)
    pub const fn read_mostly() -> Self {
        Self {
            max_optimistic_retries: 8,
        }
    }
}
