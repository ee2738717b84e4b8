// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array_ptr::ArrayPtr, reserve::Reserve, vec::SimpleVector};

impl<T> SimpleVector<T> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: ArrayPtr::new(),
            len: 0,
            capacity: 0,
        }
    }
}

impl<T: Default> SimpleVector<T> {
    /// Constructs a vector of `len` default values (`capacity == len`).
    pub fn with_len(len: usize) -> Self {
        Self {
            buf: ArrayPtr::allocate(len),
            len,
            capacity: len,
        }
    }

    /// Constructs an empty vector with exactly `capacity` allocated slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: ArrayPtr::allocate(capacity),
            len: 0,
            capacity,
        }
    }

    /// Constructs a vector of `len` clones of `value` (`capacity == len`).
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut v = Self::with_len(len);
        v.as_mut_slice().fill(value);
        v
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds an empty vector with the requested capacity.
impl<T: Default> From<Reserve> for SimpleVector<T> {
    fn from(request: Reserve) -> Self {
        Self::with_capacity(request.capacity())
    }
}
