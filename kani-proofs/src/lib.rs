// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the ring index arithmetic.
//!
//! This standalone crate extracts the logical-to-physical index mapping that
//! every container operation depends on and proves it correct with Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **In bounds**: the physical index never leaves `[0, slots)`
//! 2. **No overflow**: the mapping arithmetic cannot overflow for any
//!    allocatable slot count
//! 3. **Injective**: distinct logical positions map to distinct slots
//! 4. **Head advance**: consuming the front wraps exactly at the slab end

/// Largest slot count the proofs range over. Allocations of `Option<T>`
/// slots can never exceed `isize::MAX` bytes, so `usize::MAX / 2` covers
/// every reachable capacity with room to spare.
pub const MAX_SLOTS: usize = usize::MAX / 2;

// ============================================================================
// RING ARITHMETIC (copied from src/ring.rs)
// ============================================================================

/// Maps a logical position onto its physical slot.
///
/// Callers maintain `head < slots` and `logical < slots`.
pub fn physical_index(head: usize, logical: usize, slots: usize) -> usize {
    (head + logical) % slots
}

/// Advances the head past a consumed front element.
pub fn advance_head(head: usize, slots: usize) -> usize {
    (head + 1) % slots
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify the mapping stays in bounds and never overflows.
    #[kani::proof]
    fn verify_physical_index_in_bounds() {
        let slots: usize = kani::any();
        let head: usize = kani::any();
        let logical: usize = kani::any();
        kani::assume(slots >= 1 && slots <= MAX_SLOTS);
        kani::assume(head < slots);
        kani::assume(logical < slots);

        // This must not overflow or panic
        let index = physical_index(head, logical, slots);

        kani::assert(index < slots, "physical index must stay within the slab");
    }

    /// Verify distinct logical positions occupy distinct slots.
    #[kani::proof]
    fn verify_physical_index_injective() {
        let slots: usize = kani::any();
        let head: usize = kani::any();
        let first: usize = kani::any();
        let second: usize = kani::any();
        kani::assume(slots >= 1 && slots <= MAX_SLOTS);
        kani::assume(head < slots);
        kani::assume(first < slots);
        kani::assume(second < slots);
        kani::assume(first != second);

        kani::assert(
            physical_index(head, first, slots) != physical_index(head, second, slots),
            "two logical positions must never share a slot",
        );
    }

    /// Verify head advancement wraps exactly at the slab end.
    #[kani::proof]
    fn verify_advance_head_wraps() {
        let slots: usize = kani::any();
        let head: usize = kani::any();
        kani::assume(slots >= 1 && slots <= MAX_SLOTS);
        kani::assume(head < slots);

        let next = advance_head(head, slots);

        kani::assert(next < slots, "advanced head must stay within the slab");
        if head + 1 == slots {
            kani::assert(next == 0, "head must wrap to zero at the slab end");
        } else {
            kani::assert(next == head + 1, "head must advance by exactly one");
        }
    }

    /// Verify that after an eviction (advance) the old logical position 1
    /// becomes the new logical position 0.
    #[kani::proof]
    fn verify_eviction_renumbers_by_one() {
        let slots: usize = kani::any();
        let head: usize = kani::any();
        let logical: usize = kani::any();
        kani::assume(slots >= 1 && slots <= MAX_SLOTS);
        kani::assume(head < slots);
        kani::assume(logical >= 1 && logical < slots);

        let before = physical_index(head, logical, slots);
        let after = physical_index(advance_head(head, slots), logical - 1, slots);

        kani::assert(
            before == after,
            "evicting the front must shift every logical index down by one",
        );
    }
}
