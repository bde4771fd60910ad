//! Conformance instantiation and policy-specific tests for the discarding
//! variant (`DiscardingList<T>`).

use brimful::{Discard, DiscardingList, OverflowPolicy, PushOutcome};

use crate::common::seq_items;
use crate::contract;

const GRID: &[(usize, usize)] = &[
    (10, 100),
    (10, 1000),
    (1, 100),
    (100, 10),
    (100, 1000),
    (2, 100),
    (2, 1000),
];

// =============================================================================
// SHARED CONTRACT
// =============================================================================

#[test]
fn contract_push_within_capacity() {
    contract::push_within_capacity_appends::<Discard>();
}

#[test]
fn contract_policy_identifier() {
    contract::policy_reported::<Discard>(OverflowPolicy::Discard);
}

#[test]
fn contract_get_out_of_range() {
    contract::get_past_len_is_out_of_range::<Discard>();
}

#[test]
fn contract_zero_capacity() {
    contract::zero_capacity_is_invalid::<Discard>();
}

#[test]
fn contract_empty_container() {
    contract::empty_container_behavior::<Discard>();
}

#[test]
fn contract_single_item_enumeration() {
    contract::single_item_enumeration::<Discard>();
}

#[test]
fn contract_preseed_matches_sequential() {
    contract::preseed_matches_sequential::<Discard>();
}

#[test]
fn contract_clear() {
    contract::clear_empties_and_preserves_capacity::<Discard>();
}

#[test]
fn contract_remove_shifts() {
    contract::remove_first_occurrence_shifts::<Discard>();
}

#[test]
fn contract_pop_front() {
    contract::pop_front_removes_oldest::<Discard>();
}

#[test]
fn contract_to_vec() {
    contract::to_vec_matches_iteration::<Discard>();
}

#[test]
fn contract_capacity_constant() {
    contract::capacity_reported_constant::<Discard>();
}

#[test]
fn contract_index_operator() {
    contract::index_operator_matches_get::<Discard>();
}

// =============================================================================
// POLICY-SPECIFIC
// =============================================================================

#[test]
fn third_push_is_discarded() {
    let mut list = DiscardingList::<String>::new(2).unwrap();

    list.push("a".to_string()).unwrap();
    assert_eq!(list.len(), 1);
    list.push("b".to_string()).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0).unwrap(), "a");
    assert_eq!(list.get(1).unwrap(), "b");

    // The third item is dropped; the push still reports success.
    let outcome = list.push("c".to_string()).unwrap();
    assert_eq!(outcome, PushOutcome::Discarded("c".to_string()));
    assert!(!list.contains(&"c".to_string()));
    assert_eq!(list.len(), 2);
    assert_eq!(list.to_vec(), vec!["a", "b"]);
}

#[test]
fn saturated_pushes_are_observable_noops() {
    let mut list = DiscardingList::<String>::from_iter_bounded(3, seq_items(3)).unwrap();
    let snapshot = list.to_vec();

    for item in seq_items(20).into_iter().skip(3) {
        let outcome = list.push(item.clone()).unwrap();
        assert!(!outcome.is_stored());
        assert_eq!(outcome.displaced(), Some(item.clone()));
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_vec(), snapshot);
        assert!(!list.contains(&item));
    }
}

#[test]
fn saturation_grid() {
    for &(capacity, insertions) in GRID {
        let mut list = DiscardingList::<String>::new(capacity).unwrap();
        let mut inserted = Vec::new();

        for item in seq_items(insertions) {
            assert!(!list.contains(&item));
            inserted.push(item.clone());
            list.push(item).unwrap();

            // The retained window is the leading `capacity` insertions.
            for (index, expected) in inserted.iter().take(capacity).enumerate() {
                assert!(list.contains(expected));
                assert_eq!(list.get(index).unwrap(), expected);
            }
            // Everything past the window was discarded.
            for discarded in inserted.iter().skip(capacity) {
                assert!(!list.contains(discarded));
            }
        }
    }
}

#[test]
fn discard_frees_up_after_removal() {
    let mut list = DiscardingList::<String>::from_iter_bounded(2, seq_items(2)).unwrap();

    // Full, so this push is dropped.
    list.push("x".to_string()).unwrap();
    assert!(!list.contains(&"x".to_string()));

    // After making room, pushes store again.
    assert_eq!(list.pop_front().as_deref(), Some("0"));
    let outcome = list.push("x".to_string()).unwrap();
    assert_eq!(outcome, PushOutcome::Stored);
    assert_eq!(list.to_vec(), vec!["1", "x"]);
}

#[test]
fn preseed_keeps_leading_window() {
    let list = DiscardingList::<String>::from_iter_bounded(
        2,
        ["x", "y", "z"].map(String::from),
    )
    .unwrap();
    assert_eq!(list.to_vec(), vec!["x", "y"]);
    assert!(!list.contains(&"z".to_string()));
}
