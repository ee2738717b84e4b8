// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `ArrayPtr` single-owner buffer handle.
//!
//! `ArrayPtr<T>` owns at most one heap-allocated block of `T`. It has no
//! `Clone` or `Copy` impl, so two handles can never own the same block; the
//! block moves with the handle and is freed exactly once, when the owning
//! handle is dropped.
//!
//! The handle knows nothing about which slots are "live". That bookkeeping
//! belongs to [`SimpleVector`](crate::SimpleVector).

// Crate imports
use alloc::boxed::Box;

// Core imports
use core::{
    fmt,
    ops::{Index, IndexMut},
};

/// Exclusive owner of a heap-allocated contiguous block of `T`.
///
/// The empty handle owns nothing and performs no allocation. A zero-length
/// allocation request produces the same empty state, so an owning handle
/// always holds at least one slot.
///
/// # Ownership transfer
///
/// - Moving an `ArrayPtr` moves its block; the old binding is statically
///   unusable afterwards.
/// - [`take`](ArrayPtr::take) moves the block into a new handle and leaves the
///   source empty, for cases where the source must stay usable.
/// - Assigning over a handle (`a = b`) drops `a`'s block first, then takes
///   `b`'s. Safe Rust cannot alias `a` and `b`, so self-assignment never frees
///   a block that is still in use.
/// - [`release`](ArrayPtr::release) gives the block back to the caller. The
///   returned `Box` is freed when dropped; leaking it (e.g. `Box::leak`) is the
///   caller's choice.
///
/// # Examples
///
/// ```rust
/// use simple_vector::ArrayPtr;
///
/// let mut a: ArrayPtr<i32> = ArrayPtr::allocate(3);
/// a[1] = 7;
/// assert_eq!(a.as_slice(), &[0, 7, 0]);
///
/// let mut b = ArrayPtr::new();
/// a.swap(&mut b);
/// assert!(!a.is_owning());
/// assert_eq!(b[1], 7);
/// ```
pub struct ArrayPtr<T> {
    raw: Option<Box<[T]>>,
}

impl<T> ArrayPtr<T> {
    /// Creates a handle that owns nothing.
    #[inline]
    pub const fn new() -> Self {
        Self { raw: None }
    }

    /// Allocates a block of `count` slots, each set to `T::default()`.
    ///
    /// `count == 0` returns the empty handle without calling the allocator.
    pub fn allocate(count: usize) -> Self
    where
        T: Default,
    {
        if count == 0 {
            return Self::new();
        }
        let mut block = alloc::vec::Vec::with_capacity(count);
        block.resize_with(count, T::default);
        Self {
            raw: Some(block.into_boxed_slice()),
        }
    }

    /// Takes ownership of a block allocated elsewhere.
    ///
    /// A zero-length block is dropped and the empty handle is returned.
    #[inline]
    pub fn adopt(block: Box<[T]>) -> Self {
        if block.is_empty() {
            return Self::new();
        }
        Self { raw: Some(block) }
    }

    /// Returns `true` if this handle currently owns a block.
    #[inline]
    pub fn is_owning(&self) -> bool {
        self.raw.is_some()
    }

    /// Read-only view of the owned block, without transferring ownership.
    #[inline]
    pub fn raw(&self) -> Option<&[T]> {
        self.raw.as_deref()
    }

    /// Address of the first slot, or null for the empty handle.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        match &self.raw {
            Some(block) => block.as_ptr(),
            None => core::ptr::null(),
        }
    }

    /// Number of slots in the owned block (`0` when empty).
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.as_ref().map_or(0, |block| block.len())
    }

    /// Returns `true` if the handle owns no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All slots of the block as a slice (empty for the empty handle).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.raw.as_deref().unwrap_or(&[])
    }

    /// All slots of the block as a mutable slice (empty for the empty handle).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.raw.as_deref_mut().unwrap_or(&mut [])
    }

    /// Gives up ownership of the block and returns it; the handle becomes empty.
    #[inline]
    #[must_use = "dropping the released block frees it; keep the handle if that is intended"]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.raw.take()
    }

    /// Exchanges blocks with `other` in `O(1)`, without allocating.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.raw, &mut other.raw);
    }

    /// Moves the block into a new handle, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            raw: self.raw.take(),
        }
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayPtr")
            .field("slots", &self.as_slice())
            .finish()
    }
}

/// Slot access; panics if `index` is outside the owned block.
impl<T> Index<usize> for ArrayPtr<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for ArrayPtr<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}
