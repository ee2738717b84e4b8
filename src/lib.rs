// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `simple-vector`
//!
//! A `no_std` growable vector built on top of a single-owner heap buffer
//! handle, **with no `unsafe` code**.
//!
//! The crate has two layers:
//!
//! - [`ArrayPtr<T>`]: the sole owner of one heap-allocated contiguous block
//!   of `T`. It can be moved but never duplicated, and frees its block
//!   exactly once.
//! - [`SimpleVector<T>`]: a growable sequence that stores `len` live elements
//!   inside an [`ArrayPtr`] of `capacity` slots and provides amortized `O(1)`
//!   append, random access, insertion and erasure at arbitrary positions, and
//!   capacity management.
//!
//! A third, tiny type, [`Reserve`], is a one-shot request used to build an
//! empty vector with a given capacity (see [`reserve`]).
//!
//! ## Growth policy
//!
//! When a [`SimpleVector::push_back`] or [`SimpleVector::insert`] finds the
//! vector full, the capacity becomes `1` if it was `0`, and doubles otherwise:
//! `0 → 1 → 2 → 4 → 8 → …`. [`SimpleVector::resize`] grows to
//! `max(new_len, 2 * capacity)`, and [`SimpleVector::reserve`] allocates exactly
//! what was asked for.
//!
//! Each reallocation is logged at `trace` level through the [`log`] facade.
//!
//! ## Storage model
//!
//! The crate is `#![forbid(unsafe_code)]`, so every slot of the backing block
//! always holds an initialized `T`:
//!
//! - slots `[0, len)` are the live elements;
//! - slots `[len, capacity)` hold `T::default()` and are never exposed through
//!   slices, iteration, comparison or hashing.
//!
//! Operations that allocate slots therefore require `T: Default`. Removing
//! an element (pop, erase, truncate, clear, shrinking resize) replaces its slot
//! with a default value, so the removed element is dropped immediately.
//!
//! ## Contract violations vs. recoverable errors
//!
//! - [`SimpleVector::at`] / [`SimpleVector::at_mut`] are the only fallible
//!   accessors: they return [`Error::OutOfRange`] carrying the bad index.
//! - [`SimpleVector::pop_back`] on an empty vector, [`SimpleVector::insert`]
//!   with `index > len` and [`SimpleVector::erase`] with `index >= len` are
//!   caller bugs and **panic**, in every build profile.
//! - [`SimpleVector::get`] / [`SimpleVector::get_mut`] skip the `len` check in
//!   release builds (it is a `debug_assert!`). They stay memory-safe: an index
//!   in `[len, capacity)` yields a logically-absent default slot, and an index
//!   past `capacity` panics.
//!
//! ## Iterator invalidation
//!
//! Rust borrows make stale references impossible, but cursors (plain `usize`
//! positions returned by `insert`/`erase`) are invalidated by any later
//! insertion or erasure before them.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `SimpleVector<T>`.
//!   - Serializes the live elements as a sequence; deserializing requires
//!     `T: Deserialize<'de> + Default`.
//!
//! ## Example
//!
//! ```rust
//! use simple_vector::{SimpleVector, reserve};
//!
//! let mut v: SimpleVector<i32> = SimpleVector::new();
//! v.push_back(1);
//! v.push_back(3);
//! v.insert(1, 2);
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert_eq!(v.capacity(), 4);
//!
//! assert!(v.at(3).is_err());
//!
//! let r: SimpleVector<u8> = reserve(16).into();
//! assert!(r.is_empty());
//! assert_eq!(r.capacity(), 16);
//! ```
//!
//! The buffer handle cannot be duplicated:
//!
//! ```compile_fail
//! use simple_vector::ArrayPtr;
//!
//! let a: ArrayPtr<u8> = ArrayPtr::allocate(4);
//! let b = a.clone();
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod array_ptr;
mod error;
mod index;
mod iter;
mod reserve;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use array_ptr::ArrayPtr;
pub use error::Error;
pub use iter::IntoIter;
pub use reserve::{Reserve, reserve};
pub use vec::SimpleVector;
