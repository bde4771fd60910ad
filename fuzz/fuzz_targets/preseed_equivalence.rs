// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for pre-seeded construction.
//!
//! Constructing from a sequence must be indistinguishable from constructing
//! empty and pushing each element in order, for every policy, errors
//! included.

#![no_main]

use arbitrary::Arbitrary;
use brimful::{BoundedList, Discard, ListError, OverflowStrategy, Overwrite, Reject};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Scenario {
    capacity_seed: u8,
    values: Vec<u8>,
}

fuzz_target!(|scenario: Scenario| {
    let capacity = usize::from(scenario.capacity_seed % 16) + 1;
    check::<Reject>(capacity, &scenario.values);
    check::<Overwrite>(capacity, &scenario.values);
    check::<Discard>(capacity, &scenario.values);
});

fn check<P: OverflowStrategy>(capacity: usize, values: &[u8]) {
    let preseeded = BoundedList::<u8, P>::from_iter_bounded(capacity, values.iter().copied());

    let sequential: Result<BoundedList<u8, P>, ListError<u8>> = (|| {
        let mut list = BoundedList::<u8, P>::new(capacity)?;
        for &value in values {
            list.push(value)?;
        }
        Ok(list)
    })();

    match (preseeded, sequential) {
        (Ok(a), Ok(b)) => assert_eq!(a, b, "pre-seeded contents diverged"),
        (Err(a), Err(b)) => assert_eq!(a, b, "pre-seeded error diverged"),
        (a, b) => panic!(
            "construction paths diverged: preseeded ok={} sequential ok={}",
            a.is_ok(),
            b.is_ok()
        ),
    }
}
