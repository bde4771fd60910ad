// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The bounded container and its overflow strategies.
//!
//! One generic type, [`BoundedList<T, P>`], owns all index management; what
//! happens when a push meets a full container is delegated to the strategy
//! parameter `P`. The three strategies are:
//!
//! | Marker      | Alias                | Full-container push                  |
//! |-------------|----------------------|--------------------------------------|
//! | [`Reject`]  | `BoundedList<T>`     | fails with `CapacityExceeded`        |
//! | [`Overwrite`]| [`RingBuffer<T>`]   | evicts the oldest, indices shift down|
//! | [`Discard`] | [`DiscardingList<T>`]| drops the new element, reports success|
//!
//! The strategy trait is sealed: the contract is exactly these three
//! behaviors, and downstream code can rely on that when matching on
//! [`OverflowPolicy`].

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::contracts;
use crate::ring::RingStorage;
use crate::types::{Capacity, ListError, OverflowPolicy, PushOutcome};

mod sealed {
    use crate::ring::RingStorage;
    use crate::types::{ListError, PushOutcome};

    /// Behavior hook invoked when a push meets a full container.
    ///
    /// The storage handed in is full; implementations either refuse the
    /// element, make room for it, or drop it. They must leave the capacity
    /// invariant intact.
    pub trait Sealed {
        fn push_full<T>(
            storage: &mut RingStorage<T>,
            item: T,
        ) -> Result<PushOutcome<T>, ListError<T>>;
    }
}

/// An overflow strategy a [`BoundedList`] can be parameterized with.
///
/// This trait is sealed; [`Reject`], [`Overwrite`], and [`Discard`] are the
/// only implementations.
pub trait OverflowStrategy: sealed::Sealed {
    /// The policy discriminator this strategy reports at runtime.
    const POLICY: OverflowPolicy;
}

/// Strategy that fails a push into a full container.
///
/// The rejected element travels back inside the error; the container is left
/// completely untouched by the failed call.
#[derive(Debug)]
pub enum Reject {}

/// Strategy that evicts the oldest element to admit a new one.
///
/// Eviction shifts every remaining logical index down by one; the evicted
/// element is handed back in [`PushOutcome::Evicted`].
#[derive(Debug)]
pub enum Overwrite {}

/// Strategy that drops the new element when the container is full.
///
/// The push still reports success; the dropped element is handed back in
/// [`PushOutcome::Discarded`].
#[derive(Debug)]
pub enum Discard {}

impl sealed::Sealed for Reject {
    fn push_full<T>(
        storage: &mut RingStorage<T>,
        item: T,
    ) -> Result<PushOutcome<T>, ListError<T>> {
        Err(ListError::CapacityExceeded {
            item,
            capacity: storage.capacity(),
        })
    }
}

impl sealed::Sealed for Overwrite {
    fn push_full<T>(
        storage: &mut RingStorage<T>,
        item: T,
    ) -> Result<PushOutcome<T>, ListError<T>> {
        match storage.pop_front() {
            Some(oldest) => {
                storage.push_back(item);
                Ok(PushOutcome::Evicted(oldest))
            }
            // A full storage has at least one element (capacity >= 1), so
            // this arm is unreachable; keep the append correct regardless.
            None => {
                storage.push_back(item);
                Ok(PushOutcome::Stored)
            }
        }
    }
}

impl sealed::Sealed for Discard {
    fn push_full<T>(
        _storage: &mut RingStorage<T>,
        item: T,
    ) -> Result<PushOutcome<T>, ListError<T>> {
        Ok(PushOutcome::Discarded(item))
    }
}

impl OverflowStrategy for Reject {
    const POLICY: OverflowPolicy = OverflowPolicy::Reject;
}

impl OverflowStrategy for Overwrite {
    const POLICY: OverflowPolicy = OverflowPolicy::Overwrite;
}

impl OverflowStrategy for Discard {
    const POLICY: OverflowPolicy = OverflowPolicy::Discard;
}

/// A fixed-capacity, index-addressable sequence container.
///
/// Logical index 0 is always the oldest retained element; indices are
/// contiguous and renumber automatically when the oldest element leaves.
/// The capacity is fixed at construction and `len() <= capacity()` holds
/// after every operation, whatever the strategy does.
///
/// The default strategy rejects overflowing pushes; see [`RingBuffer`] and
/// [`DiscardingList`] for the other two.
///
/// ```
/// use brimful::{BoundedList, ListError, Reject};
///
/// let mut list: BoundedList<&str, Reject> = BoundedList::new(2)?;
/// list.push("a")?;
/// list.push("b")?;
/// let err = list.push("c").unwrap_err();
/// assert!(matches!(err, ListError::CapacityExceeded { item: "c", .. }));
/// assert_eq!(list.get(0)?, &"a");
/// # Ok::<(), ListError<&'static str>>(())
/// ```
pub struct BoundedList<T, P: OverflowStrategy = Reject> {
    storage: RingStorage<T>,
    _policy: PhantomData<P>,
}

/// Bounded container that evicts the oldest element on overflow.
pub type RingBuffer<T> = BoundedList<T, Overwrite>;

/// Bounded container that silently drops new elements on overflow.
pub type DiscardingList<T> = BoundedList<T, Discard>;

impl<T, P: OverflowStrategy> BoundedList<T, P> {
    /// The policy discriminator for this concrete type.
    pub const POLICY: OverflowPolicy = P::POLICY;

    /// Creates an empty container, validating the capacity.
    ///
    /// Returns [`ListError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ListError<T>> {
        match Capacity::new(capacity) {
            Some(validated) => Ok(Self::with_capacity(validated)),
            None => Err(ListError::InvalidCapacity),
        }
    }

    /// Creates an empty container from an already-validated capacity.
    pub fn with_capacity(capacity: Capacity) -> Self {
        BoundedList {
            storage: RingStorage::with_capacity(capacity),
            _policy: PhantomData,
        }
    }

    /// Creates a container pre-seeded from a sequence.
    ///
    /// Equivalent to constructing empty and pushing each source element in
    /// order under this container's own policy: `Reject` fails on an
    /// over-long source, `Overwrite` retains the trailing `capacity`
    /// elements, `Discard` retains the leading `capacity` elements.
    pub fn from_iter_bounded<I>(capacity: usize, items: I) -> Result<Self, ListError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new(capacity)?;
        for item in items {
            list.push(item)?;
        }
        Ok(list)
    }

    /// Fixed maximum element count, constant for the container's lifetime.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Current number of retained elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.storage.is_full()
    }

    /// The overflow policy this container enforces.
    #[inline]
    pub fn overflow_policy(&self) -> OverflowPolicy {
        P::POLICY
    }

    /// Appends an element, delegating to the overflow strategy when full.
    ///
    /// On success the outcome reports whether the element was stored and
    /// which element, if any, was displaced. Only the `Reject` strategy has
    /// an error path, and a failed push leaves the container unchanged.
    pub fn push(&mut self, item: T) -> Result<PushOutcome<T>, ListError<T>> {
        let outcome = if self.storage.is_full() {
            P::push_full(&mut self.storage, item)?
        } else {
            self.storage.push_back(item);
            PushOutcome::Stored
        };
        contracts::check_capacity_invariant(self.len(), self.capacity());
        Ok(outcome)
    }

    /// Borrows the element at a logical index.
    ///
    /// Fails with [`ListError::IndexOutOfRange`] when `index >= len()`;
    /// never mutates.
    pub fn get(&self, index: usize) -> Result<&T, ListError<T>> {
        let len = self.len();
        self.storage
            .get(index)
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Mutably borrows the element at a logical index.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError<T>> {
        let len = self.len();
        self.storage
            .get_mut(index)
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Borrows the oldest retained element.
    pub fn first(&self) -> Option<&T> {
        self.storage.get(0)
    }

    /// Borrows the newest retained element.
    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|last| self.storage.get(last))
    }

    /// Removes and returns the oldest element; later indices shift down.
    pub fn pop_front(&mut self) -> Option<T> {
        let popped = self.storage.pop_front();
        contracts::check_index_contiguity(self);
        popped
    }

    /// Drops all elements. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Whether any retained element equals `item`.
    ///
    /// Elements that were evicted, discarded, or rejected report `false`
    /// immediately after the operation that excluded them.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == item)
    }

    /// Logical index of the first retained element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == item)
    }

    /// Removes the first retained element equal to `item`, shifting later
    /// indices down by one. Returns whether anything was removed.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            Some(index) => {
                let _ = self.storage.remove(index);
                contracts::check_index_contiguity(self);
                true
            }
            None => false,
        }
    }

    /// Iterates retained elements in logical order (oldest first).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            storage: &self.storage,
            front: 0,
            back: self.len(),
        }
    }

    /// Copies retained elements into a `Vec` in logical order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug, P: OverflowStrategy> fmt::Debug for BoundedList<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Items<'a, T, P: OverflowStrategy>(&'a BoundedList<T, P>);

        impl<T: fmt::Debug, P: OverflowStrategy> fmt::Debug for Items<'_, T, P> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("BoundedList")
            .field("policy", &P::POLICY)
            .field("capacity", &self.capacity())
            .field("items", &Items(self))
            .finish()
    }
}

impl<T: Clone, P: OverflowStrategy> Clone for BoundedList<T, P> {
    fn clone(&self) -> Self {
        BoundedList {
            storage: self.storage.clone(),
            _policy: PhantomData,
        }
    }
}

/// Containers are equal when both their capacity and their retained elements
/// (in logical order) are equal. Capacity participates because two containers
/// with different capacities diverge on the very next overflowing push.
impl<T: PartialEq, P: OverflowStrategy> PartialEq for BoundedList<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity()
            && self.len() == other.len()
            && self.iter().eq(other.iter())
    }
}

impl<T: Eq, P: OverflowStrategy> Eq for BoundedList<T, P> {}

/// Panicking indexed access, mirroring slice indexing.
///
/// Use [`BoundedList::get`] for the fallible twin.
impl<T, P: OverflowStrategy> Index<usize> for BoundedList<T, P> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(_) => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index
            ),
        }
    }
}

impl<T, P: OverflowStrategy> IndexMut<usize> for BoundedList<T, P> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Ok(item) => item,
            Err(_) => panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

// =============================================================================
// ITERATION
// =============================================================================

/// Borrowing iterator over a [`BoundedList`] in logical order.
pub struct Iter<'a, T> {
    storage: &'a RingStorage<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.storage.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.storage.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            storage: self.storage,
            front: self.front,
            back: self.back,
        }
    }
}

/// Consuming iterator over a [`BoundedList`], draining in logical order.
pub struct IntoIter<T> {
    storage: RingStorage<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.storage.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.storage.len(), Some(self.storage.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.storage.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T, P: OverflowStrategy> IntoIterator for &'a BoundedList<T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, P: OverflowStrategy> IntoIterator for BoundedList<T, P> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            storage: self.storage,
        }
    }
}

// =============================================================================
// SERDE
// =============================================================================

/// Serialized as `{ "capacity": usize, "items": [T, ...] }` with items in
/// logical order. Deserialization re-runs the bounded construction path, so
/// untrusted input is subject to the same policy semantics as pushes.
impl<T: Serialize, P: OverflowStrategy> Serialize for BoundedList<T, P> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        struct Items<'a, T, P: OverflowStrategy>(&'a BoundedList<T, P>);

        impl<T: Serialize, P: OverflowStrategy> Serialize for Items<'_, T, P> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_seq(self.0.iter())
            }
        }

        let mut state = serializer.serialize_struct("BoundedList", 2)?;
        state.serialize_field("capacity", &self.capacity())?;
        state.serialize_field("items", &Items(self))?;
        state.end()
    }
}

impl<'de, T: Deserialize<'de>, P: OverflowStrategy> Deserialize<'de> for BoundedList<T, P> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename = "BoundedList")]
        struct ListRepr<T> {
            capacity: usize,
            items: Vec<T>,
        }

        let repr = ListRepr::<T>::deserialize(deserializer)?;
        BoundedList::from_iter_bounded(repr.capacity, repr.items)
            .map_err(serde::de::Error::custom)
    }
}
