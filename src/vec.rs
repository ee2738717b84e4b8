// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `SimpleVector` type and its inherent API.
//!
//! `SimpleVector<T>` is a growable vector whose storage is a single
//! [`ArrayPtr`]. It tracks a logical length inside the allocated capacity
//! and reallocates geometrically when it runs out of room.
//!
//! Operations are split across submodules by concern: construction
//! (`new`, `from`), appending (`push`), positional edits (`insert`, `erase`)
//! and capacity management (`resize`).

mod erase;
mod from;
mod insert;
mod new;
mod push;
mod resize;

// Crate imports
use crate::{array_ptr::ArrayPtr, error::Error};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A growable, heap-allocated vector built on [`ArrayPtr`].
///
/// # Layout and invariants
///
/// `SimpleVector<T>` maintains:
///
/// - a buffer handle owning exactly `capacity` slots (none when `capacity == 0`);
/// - a logical length `len` with `0 <= len <= capacity`.
///
/// Only `buf[..len]` is visible through slices, iteration, comparison, hashing
/// and `Debug`. Slots `buf[len..capacity]` hold `T::default()`.
///
/// # Complexity characteristics
///
/// - [`len`], [`capacity`], [`is_empty`], [`swap`](SimpleVector::swap): `O(1)`.
/// - [`push_back`]: amortized `O(1)`; the capacity doubles when full.
/// - [`insert`], [`erase`]: `O(len)`.
/// - [`reserve`], [`resize`]: `O(new capacity)` when they reallocate.
///
/// Reallocation moves elements with slice swaps; nothing is cloned.
///
/// # Element and trait bounds
///
/// - Queries, views, comparison and iteration work for any `T`.
/// - Anything that allocates slots or removes elements requires `T: Default`
///   (removed slots are refilled with defaults).
/// - [`Clone`], [`from_elem`](SimpleVector::from_elem) and
///   [`extend_from_slice`](SimpleVector::extend_from_slice) also need `T: Clone`.
/// - The type implements `Deref<Target = [T]>`, `Borrow<[T]>`, `AsRef<[T]>` and
///   `AsMut<[T]>`, so the live prefix can be used wherever a slice is expected.
///
/// # Examples
///
/// ```rust
/// use simple_vector::SimpleVector;
///
/// let mut v = SimpleVector::from([10, 20, 30]);
/// let at = v.erase(1);
/// assert_eq!(v[at], 30);
/// assert_eq!(v.as_slice(), &[10, 30]);
///
/// v.resize(4);
/// assert_eq!(v.as_slice(), &[10, 30, 0, 0]);
/// assert_eq!(v.capacity(), 6);
/// ```
///
/// [`len`]: SimpleVector::len
/// [`capacity`]: SimpleVector::capacity
/// [`is_empty`]: SimpleVector::is_empty
/// [`push_back`]: SimpleVector::push_back
/// [`insert`]: SimpleVector::insert
/// [`erase`]: SimpleVector::erase
/// [`reserve`]: SimpleVector::reserve
/// [`resize`]: SimpleVector::resize
pub struct SimpleVector<T> {
    pub(crate) buf: ArrayPtr<T>,
    pub(crate) len: usize,
    pub(crate) capacity: usize,
}

impl<T> SimpleVector<T> {
    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](SimpleVector::len).
    #[inline]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live elements `[0, len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf.as_slice()[..self.len]
    }

    /// The live elements `[0, len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buf.as_mut_slice()[..len]
    }

    /// Returns the element at `index` without checking it against `len` in
    /// release builds.
    ///
    /// `index >= len` is a contract violation: debug builds panic on it. In
    /// release builds an index in `[len, capacity)` returns a logically-absent
    /// slot (a default value) and an index `>= capacity` panics.
    #[inline]
    pub fn get(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "index {index} out of range for length {}",
            self.len
        );
        &self.buf[index]
    }

    /// Mutable counterpart of [`get`](SimpleVector::get), with the same contract.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "index {index} out of range for length {}",
            self.len
        );
        &mut self.buf[index]
    }

    /// Returns the element at `index`, or [`Error::OutOfRange`] if `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Mutable counterpart of [`at`](SimpleVector::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns `true` if the vector contains `x` (linear search on the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    /// Exchanges length, capacity and buffer with `other` in `O(1)`.
    ///
    /// This shadows the slice method `swap(a, b)`; use
    /// `as_mut_slice().swap(a, b)` to swap two elements.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        core::mem::swap(&mut self.len, &mut other.len);
        core::mem::swap(&mut self.capacity, &mut other.capacity);
    }
}

impl<T: Default> SimpleVector<T> {
    /// Drops every element; `len` becomes `0` and the capacity is kept.
    ///
    /// This is a reset, not a secure wipe: slots are overwritten with
    /// `T::default()`, which runs each element's destructor.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleVector")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for SimpleVector<T> {}
impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

/// Deep copy: a new buffer of the same capacity holding clones of the live
/// elements.
impl<T: Clone + Default> Clone for SimpleVector<T> {
    fn clone(&self) -> Self {
        let mut buf = ArrayPtr::allocate(self.capacity);
        buf.as_mut_slice()[..self.len].clone_from_slice(self.as_slice());
        Self {
            buf,
            len: self.len,
            capacity: self.capacity,
        }
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for SimpleVector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for SimpleVector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
