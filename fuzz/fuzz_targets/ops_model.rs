// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the overflow-policy state machines.
//!
//! Drives a real container and the naive `PolicyModel` reference with the
//! same operation sequence, once per policy. Any divergence in observable
//! state, or any capacity-invariant violation, is a crash.

#![no_main]

use arbitrary::Arbitrary;
use brimful::testing::PolicyModel;
use brimful::{BoundedList, Discard, ListError, OverflowStrategy, Overwrite, Reject};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Op {
    Push(u8),
    PopFront,
    Remove(u8),
    Clear,
}

#[derive(Arbitrary, Debug)]
struct Scenario {
    capacity_seed: u8,
    ops: Vec<Op>,
}

fuzz_target!(|scenario: Scenario| {
    // Keep capacities small so the overflow paths dominate.
    let capacity = usize::from(scenario.capacity_seed % 16) + 1;
    drive::<Reject>(capacity, &scenario.ops);
    drive::<Overwrite>(capacity, &scenario.ops);
    drive::<Discard>(capacity, &scenario.ops);
});

fn drive<P: OverflowStrategy>(capacity: usize, ops: &[Op]) {
    let mut list = BoundedList::<u8, P>::new(capacity).expect("capacity is non-zero");
    let mut model = PolicyModel::new(capacity, P::POLICY);

    for op in ops {
        match op {
            Op::Push(value) => {
                let was_full = list.is_full();
                let result = list.push(*value);
                model.push(*value);

                // Only the rejecting policy may fail, only when full, and
                // the error must hand the element back.
                match result {
                    Ok(_) => {}
                    Err(ListError::CapacityExceeded { item, .. }) => {
                        assert!(was_full, "rejection below capacity");
                        assert_eq!(item, *value, "rejected element was not returned");
                    }
                    Err(other) => panic!("unexpected push error: {}", other),
                }
            }
            Op::PopFront => {
                assert_eq!(list.pop_front(), model.pop_front());
            }
            Op::Remove(value) => {
                assert_eq!(list.remove(value), model.remove(value));
            }
            Op::Clear => {
                list.clear();
                model.clear();
            }
        }

        assert!(list.len() <= capacity, "capacity invariant violated");
        assert_eq!(list.len(), model.len(), "length diverged from model");
        assert!(
            list.iter().eq(model.iter()),
            "contents diverged from model"
        );
    }
}
