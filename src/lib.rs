//! Fixed-capacity sequence containers with pluggable overflow policies.
//!
//! This crate provides one bounded container with three overflow behaviors:
//! reject the new element, overwrite the oldest, or discard the newest.
//! All variants share the same index management and differ only in what a
//! push does when the container is full.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   types.rs  │────▶│   ring.rs    │────▶│     list.rs      │
//! │ (Capacity,  │     │ (RingStorage,│     │ (BoundedList<T,P>│
//! │  ListError) │     │  head+len)   │     │  Reject/Overwrite│
//! └─────────────┘     └──────────────┘     │  /Discard)       │
//!        │                   │             └──────────────────┘
//!        ▼                   ▼                      ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                      contracts.rs                        │
//! │   (capacity + index-contiguity checks, debug builds)     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Variants
//!
//! | Type               | On push into a full container                     |
//! |--------------------|---------------------------------------------------|
//! | `BoundedList<T>`   | fails with `CapacityExceeded`, state unchanged    |
//! | `RingBuffer<T>`    | evicts logical index 0, later indices shift down  |
//! | `DiscardingList<T>`| drops the new element, reports success            |
//!
//! Logical index 0 is always the oldest retained element. Indices are
//! contiguous in `[0, len)` and `len <= capacity` holds after every
//! operation, whichever variant you pick.
//!
//! # Usage
//!
//! ```
//! use brimful::{PushOutcome, RingBuffer};
//!
//! let mut recent = RingBuffer::new(2)?;
//! recent.push("a")?;
//! recent.push("b")?;
//! assert_eq!(recent.push("c")?, PushOutcome::Evicted("a"));
//! assert_eq!(recent.to_vec(), ["b", "c"]);
//! # Ok::<(), brimful::ListError<&'static str>>(())
//! ```

// Module declarations
pub mod contracts;
mod list;
mod ring;
#[doc(hidden)]
pub mod testing;
mod types;

// Re-exports for public API
pub use list::{
    BoundedList, Discard, DiscardingList, IntoIter, Iter, OverflowStrategy, Overwrite, Reject,
    RingBuffer,
};
pub use types::{Capacity, ListError, OverflowPolicy, PushOutcome};
