/*!
 * Snapshot Consistency Tests
 *
 * Sequential contract checks shared by all three cell variants, plus a
 * property test for the counter invariant
 */

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use state_cell::{
    HybridCell, HybridConfig, LockedCell, OptimisticCell, StateCell, DEFAULT_SENTINEL,
};

/// N sequential sentinel appends must yield exactly N entries and a counter
/// of N, on any variant
fn check_sequential_fill<C: StateCell + Default>() {
    let cell = C::default();
    for _ in 0..100 {
        cell.add_entry(DEFAULT_SENTINEL);
    }

    let state = cell.snapshot();
    assert_eq!(state.len(), 100);
    assert_eq!(state.matching_count(), 100);
    assert!(state.entries().iter().all(|e| &**e == DEFAULT_SENTINEL));
}

fn check_mixed_values<C: StateCell + Default>() {
    let cell = C::default();
    for i in 0..60 {
        if i % 3 == 0 {
            cell.add_entry("apple");
        } else {
            cell.add_entry("pear");
        }
    }

    let state = cell.snapshot();
    assert_eq!(state.len(), 60);
    assert_eq!(state.matching_count(), 20);
    assert!(state.is_consistent(DEFAULT_SENTINEL));
}

/// A snapshot handed to a caller must not change when the cell moves on
fn check_snapshot_isolation<C: StateCell + Default>() {
    let cell = C::default();
    cell.add_entry("apple");

    let before = cell.snapshot();
    cell.add_entry("apple");
    cell.add_entry("pear");

    assert_eq!(before.len(), 1);
    assert_eq!(before.matching_count(), 1);

    let after = cell.snapshot();
    assert_eq!(after.len(), 3);
    assert_eq!(after.matching_count(), 2);
}

#[test]
fn test_sequential_fill_locked() {
    check_sequential_fill::<LockedCell>();
}

#[test]
fn test_sequential_fill_optimistic() {
    check_sequential_fill::<OptimisticCell>();
}

#[test]
fn test_sequential_fill_hybrid() {
    check_sequential_fill::<HybridCell>();
}

#[test]
fn test_mixed_values_locked() {
    check_mixed_values::<LockedCell>();
}

#[test]
fn test_mixed_values_optimistic() {
    check_mixed_values::<OptimisticCell>();
}

#[test]
fn test_mixed_values_hybrid() {
    check_mixed_values::<HybridCell>();
}

#[test]
fn test_snapshot_isolation_locked() {
    check_snapshot_isolation::<LockedCell>();
}

#[test]
fn test_snapshot_isolation_optimistic() {
    check_snapshot_isolation::<OptimisticCell>();
}

#[test]
fn test_snapshot_isolation_hybrid() {
    check_snapshot_isolation::<HybridCell>();
}

#[test]
fn test_hybrid_zero_budget_matches_contract() {
    // Every write escalates, yet the observable contract is unchanged
    let cell = HybridCell::with_config(HybridConfig::with_retries(0));
    for _ in 0..100 {
        cell.add_entry(DEFAULT_SENTINEL);
    }

    let state = cell.snapshot();
    assert_eq!(state.len(), 100);
    assert_eq!(state.matching_count(), 100);
    assert_eq!(cell.stats().escalations, 100);
}

proptest! {
    /// Counter invariant holds for any append sequence, on every variant
    #[test]
    fn prop_counter_matches_recount(
        entries in proptest::collection::vec(
            prop_oneof![Just("apple"), Just("pear"), Just("plum"), Just("kiwi")],
            0..200,
        )
    ) {
        let locked = LockedCell::new();
        let optimistic = OptimisticCell::new();
        let hybrid = HybridCell::new();
        let cells: [&dyn StateCell; 3] = [&locked, &optimistic, &hybrid];

        for value in &entries {
            for cell in &cells {
                cell.add_entry(value);
            }
        }

        let expected: usize = entries.iter().filter(|e| **e == "apple").count();
        for cell in &cells {
            let state = cell.snapshot();
            prop_assert_eq!(state.len(), entries.len());
            prop_assert_eq!(state.matching_count(), expected);
            prop_assert!(state.is_consistent(DEFAULT_SENTINEL));

            // Publication order matches append order under sequential use
            for (got, want) in state.entries().iter().zip(entries.iter()) {
                prop_assert_eq!(&**got, *want);
            }
        }
    }
}
