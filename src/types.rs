// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a bounded container.
//!
//! These types define the vocabulary shared by every container variant: which
//! overflow policy a container enforces, how capacities are validated, what a
//! push did with its element, and the two ways an operation can fail.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Capacity**: always at least 1. `Capacity::new(0)` is unrepresentable,
//!   so a constructed container always has room for at least one element.
//!
//! - **ListError::CapacityExceeded**: carries the rejected element back to the
//!   caller. A failed push never consumes or drops data.
//!
//! - **PushOutcome**: `Evicted` and `Discarded` hand displaced elements back
//!   instead of dropping them, so callers can observe exactly what a policy
//!   removed.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// OVERFLOW POLICY
// =============================================================================

/// Policy describing how a container handles an insertion past capacity.
///
/// Fixed per concrete container type; readable at runtime through
/// [`BoundedList::overflow_policy`](crate::BoundedList::overflow_policy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Reject the new element with [`ListError::CapacityExceeded`].
    Reject,
    /// Evict the oldest retained element to make room for the new one.
    Overwrite,
    /// Silently drop the new element and keep the container unchanged.
    Discard,
}

impl OverflowPolicy {
    /// Short lowercase name, stable across versions.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            OverflowPolicy::Reject => "reject",
            OverflowPolicy::Overwrite => "overwrite",
            OverflowPolicy::Discard => "discard",
        }
    }
}

// =============================================================================
// NEWTYPES: Validated capacity
// =============================================================================

/// A validated, non-zero slot count.
///
/// Use `Capacity::new()` for runtime-validated construction. A zero capacity
/// has no answer to "what does push do", so it is rejected here once rather
/// than checked on every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Capacity(usize);

impl Capacity {
    /// Create a new capacity, validating it's at least 1.
    #[inline]
    pub fn new(slots: usize) -> Option<Self> {
        if slots == 0 {
            None
        } else {
            Some(Capacity(slots))
        }
    }

    /// Get the underlying slot count.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Serialize for Capacity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Capacity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slots = usize::deserialize(deserializer)?;
        Capacity::new(slots).ok_or_else(|| serde::de::Error::custom("capacity must be at least 1"))
    }
}

// =============================================================================
// PUSH OUTCOME
// =============================================================================

/// Outcome produced by a successful push.
///
/// Reports what the overflow policy did with the element, including any
/// element it displaced to make room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PushOutcome<T> {
    /// The element was appended without any side effects.
    Stored,
    /// The push succeeded after evicting the oldest element, returned here.
    Evicted(T),
    /// The container was full and the offered element was dropped, returned
    /// here instead of being silently destroyed.
    Discarded(T),
}

impl<T> PushOutcome<T> {
    /// Whether the pushed element was retained by the container.
    #[inline]
    pub fn is_stored(&self) -> bool {
        !matches!(self, PushOutcome::Discarded(_))
    }

    /// Extracts the element the policy displaced, if any.
    ///
    /// `Evicted` yields the old element that was removed; `Discarded` yields
    /// the new element that was never inserted.
    pub fn displaced(self) -> Option<T> {
        match self {
            PushOutcome::Stored => None,
            PushOutcome::Evicted(item) | PushOutcome::Discarded(item) => Some(item),
        }
    }
}

impl<T> From<&PushOutcome<T>> for &'static str {
    fn from(outcome: &PushOutcome<T>) -> Self {
        match outcome {
            PushOutcome::Stored => "stored",
            PushOutcome::Evicted(_) => "evicted",
            PushOutcome::Discarded(_) => "discarded",
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Error type for bounded container operations.
///
/// Variants that reject an element on failure preserve it so the caller can
/// recover it with [`ListError::into_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError<T> {
    /// A container was constructed with capacity zero.
    InvalidCapacity,
    /// A push would exceed capacity under the `Reject` policy. Contains the
    /// element that was attempted to be added.
    CapacityExceeded {
        /// The rejected element, unchanged.
        item: T,
        /// The fixed capacity of the container that rejected it.
        capacity: usize,
    },
    /// An indexed read was outside `[0, len)`.
    IndexOutOfRange {
        /// The requested logical index.
        index: usize,
        /// The number of retained elements at the time of the call.
        len: usize,
    },
}

impl<T> ListError<T> {
    /// Extracts the element carried by variants that preserve it on failure.
    #[must_use]
    pub fn into_item(self) -> Option<T> {
        match self {
            ListError::CapacityExceeded { item, .. } => Some(item),
            ListError::InvalidCapacity | ListError::IndexOutOfRange { .. } => None,
        }
    }
}

impl<T> fmt::Display for ListError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::InvalidCapacity => {
                write!(f, "capacity must be at least 1")
            }
            ListError::CapacityExceeded { capacity, .. } => {
                write!(f, "push would exceed capacity {}", capacity)
            }
            ListError::IndexOutOfRange { index, len } => {
                write!(f, "index {} >= len {}", index, len)
            }
        }
    }
}

impl<T: fmt::Debug> std::error::Error for ListError<T> {}
