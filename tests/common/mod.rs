//! Shared test utilities and fixtures.

#![allow(dead_code)]

use brimful::{BoundedList, OverflowStrategy};

// Re-export canonical test utilities from brimful::testing
pub use brimful::testing::{seq_items, PolicyModel};

/// Snapshot of the retained elements in logical order.
pub fn logical_items<T: Clone, P: OverflowStrategy>(list: &BoundedList<T, P>) -> Vec<T> {
    list.to_vec()
}

/// Builds a container and pushes `values` in order, ignoring policy outcomes.
pub fn drive<P: OverflowStrategy>(capacity: usize, values: &[&str]) -> BoundedList<String, P> {
    let mut list = BoundedList::<String, P>::new(capacity).expect("capacity is non-zero");
    for value in values {
        let _ = list.push((*value).to_string());
    }
    list
}
