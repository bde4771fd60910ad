//! Conformance instantiation and policy-specific tests for the rejecting
//! variant (`BoundedList<T>`).

use brimful::{BoundedList, ListError, OverflowPolicy, PushOutcome, Reject};

use crate::common::seq_items;
use crate::contract;

/// (capacity, insertions) pairs covering saturation from both directions.
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
    contract::push_within_capacity_appends::<Reject>();
}

#[test]
fn contract_policy_identifier() {
    contract::policy_reported::<Reject>(OverflowPolicy::Reject);
}

#[test]
fn contract_get_out_of_range() {
    contract::get_past_len_is_out_of_range::<Reject>();
}

#[test]
fn contract_zero_capacity() {
    contract::zero_capacity_is_invalid::<Reject>();
}

#[test]
fn contract_empty_container() {
    contract::empty_container_behavior::<Reject>();
}

#[test]
fn contract_single_item_enumeration() {
    contract::single_item_enumeration::<Reject>();
}

#[test]
fn contract_preseed_matches_sequential() {
    contract::preseed_matches_sequential::<Reject>();
}

#[test]
fn contract_clear() {
    contract::clear_empties_and_preserves_capacity::<Reject>();
}

#[test]
fn contract_remove_shifts() {
    contract::remove_first_occurrence_shifts::<Reject>();
}

#[test]
fn contract_pop_front() {
    contract::pop_front_removes_oldest::<Reject>();
}

#[test]
fn contract_to_vec() {
    contract::to_vec_matches_iteration::<Reject>();
}

#[test]
fn contract_capacity_constant() {
    contract::capacity_reported_constant::<Reject>();
}

#[test]
fn contract_index_operator() {
    contract::index_operator_matches_get::<Reject>();
}

// =============================================================================
// POLICY-SPECIFIC
// =============================================================================

#[test]
fn push_at_capacity_fails_and_returns_item() {
    let mut list = BoundedList::<String>::new(1).unwrap();
    list.push("a".to_string()).unwrap();
    assert_eq!(list.len(), 1);
    assert!(list.contains(&"a".to_string()));
    assert_eq!(list.get(0).unwrap(), "a");

    // Adding an additional item exceeds capacity and results in an error.
    let error = list.push("b".to_string()).unwrap_err();
    assert_eq!(
        error,
        ListError::CapacityExceeded {
            item: "b".to_string(),
            capacity: 1,
        }
    );
    assert_eq!(error.into_item().as_deref(), Some("b"));
}

#[test]
fn failed_push_leaves_container_unchanged() {
    let mut list = BoundedList::<String>::new(2).unwrap();
    list.push("a".to_string()).unwrap();
    list.push("b".to_string()).unwrap();

    assert!(list.push("c".to_string()).is_err());

    assert_eq!(list.len(), 2);
    assert_eq!(list.to_vec(), vec!["a", "b"]);
    assert!(list.contains(&"a".to_string()));
    assert!(list.contains(&"b".to_string()));
    assert!(!list.contains(&"c".to_string()));
    // Still full, so the next push fails identically.
    assert!(list.push("c".to_string()).is_err());
}

#[test]
fn saturation_grid() {
    for &(capacity, insertions) in GRID {
        let mut list = BoundedList::<String>::new(capacity).unwrap();
        let mut inserted = Vec::new();

        for item in seq_items(insertions) {
            assert!(!list.contains(&item));
            inserted.push(item.clone());

            match list.push(item.clone()) {
                Ok(outcome) => {
                    assert_eq!(outcome, PushOutcome::Stored);
                    assert!(list.contains(&item));
                    assert!(list.len() <= list.capacity());
                }
                Err(error) => {
                    // A rejection only ever happens at capacity, and carries
                    // the element back.
                    assert_eq!(list.len(), list.capacity());
                    assert_eq!(error.into_item(), Some(item));
                }
            }

            // The retained window is the leading `capacity` insertions.
            for (index, expected) in inserted.iter().take(capacity).enumerate() {
                assert!(list.contains(expected));
                assert_eq!(list.get(index).unwrap(), expected);
            }
            // Everything past the window was rejected.
            for rejected in inserted.iter().skip(capacity) {
                assert!(!list.contains(rejected));
            }
        }
    }
}

#[test]
fn preseed_overlong_fails_with_first_rejected_item() {
    let error =
        BoundedList::<String>::from_iter_bounded(2, seq_items(4)).unwrap_err();
    assert_eq!(
        error,
        ListError::CapacityExceeded {
            item: "2".to_string(),
            capacity: 2,
        }
    );
}

#[test]
fn preseed_exactly_at_capacity_fills() {
    let list = BoundedList::<String>::from_iter_bounded(3, seq_items(3)).unwrap();
    assert!(list.is_full());
    assert_eq!(list.to_vec(), vec!["0", "1", "2"]);
}

#[test]
fn oldest_element_is_permanent() {
    let mut list = BoundedList::<String>::new(3).unwrap();
    for item in seq_items(3) {
        list.push(item).unwrap();
    }
    for item in seq_items(10) {
        let _ = list.push(item);
        // Index 0 is the first-ever inserted element for the container's
        // entire lifetime.
        assert_eq!(list.get(0).unwrap(), "0");
    }
}
