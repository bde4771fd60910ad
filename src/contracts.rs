//! Runtime contracts for the container invariants.
//!
//! This module provides debug-mode assertions that verify the properties the
//! containers promise. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Run after every mutating operation, not just in tests
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                   |
//! |----------------------------|--------------------------------------------|
//! | `check_capacity_invariant` | `len <= capacity` after every operation    |
//! | `check_index_contiguity`   | `get(i)` defined exactly for `i in [0,len)`|

use crate::list::{BoundedList, Discard, OverflowStrategy, Overwrite, Reject};
use crate::types::OverflowPolicy;

/// Static assertion that each strategy marker reports its own discriminator.
/// This is evaluated at compile time - if it fails, the crate won't build.
const _: () = {
    assert!(matches!(
        <Reject as OverflowStrategy>::POLICY,
        OverflowPolicy::Reject
    ));
    assert!(matches!(
        <Overwrite as OverflowStrategy>::POLICY,
        OverflowPolicy::Overwrite
    ));
    assert!(matches!(
        <Discard as OverflowStrategy>::POLICY,
        OverflowPolicy::Discard
    ));
};

/// Check that the element count never exceeds the fixed capacity.
///
/// # Panics (debug builds only)
/// Panics if `len > capacity`.
#[inline]
pub fn check_capacity_invariant(len: usize, capacity: usize) {
    debug_assert!(
        len <= capacity,
        "Contract violation: len {} > capacity {}",
        len,
        capacity
    );
}

/// Check that logical indices are contiguous.
///
/// `get(i)` must succeed for every `i < len` and fail for `i == len`. Runs a
/// linear scan, so it is debug-only like the rest of this module.
///
/// # Panics (debug builds only)
/// Panics if any index in `[0, len)` is undefined or `len` itself is defined.
#[inline]
pub fn check_index_contiguity<T, P: OverflowStrategy>(list: &BoundedList<T, P>) {
    if cfg!(debug_assertions) {
        for index in 0..list.len() {
            debug_assert!(
                list.get(index).is_ok(),
                "Contract violation: index {} < len {} but get failed",
                index,
                list.len()
            );
        }
        debug_assert!(
            list.get(list.len()).is_err(),
            "Contract violation: get({}) succeeded past len",
            list.len()
        );
    }
}
