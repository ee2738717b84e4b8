// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array_ptr::ArrayPtr, vec::SimpleVector};

impl<T: Default> SimpleVector<T> {
    /// Capacity after one growth step: `1` from empty, doubled otherwise.
    #[inline]
    pub(crate) fn next_capacity(&self) -> usize {
        if self.capacity == 0 {
            1
        } else {
            self.capacity * 2
        }
    }

    /// Moves the live elements into a fresh buffer of `new_capacity` slots.
    ///
    /// The new buffer is fully built before the old one is touched, so a
    /// panic in `T::default()` leaves `self` unchanged. Moving the elements
    /// is a slice swap and cannot panic.
    pub(crate) fn realloc(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        log::trace!(
            "SimpleVector realloc: capacity {} -> {} (len {})",
            self.capacity,
            new_capacity,
            self.len
        );
        let len = self.len;
        let mut fresh = ArrayPtr::allocate(new_capacity);
        fresh.as_mut_slice()[..len].swap_with_slice(&mut self.buf.as_mut_slice()[..len]);
        self.buf.swap(&mut fresh);
        self.capacity = new_capacity;
        // `fresh` now owns the old block and frees it here.
    }

    /// Ensures `capacity >= new_capacity`, reallocating to exactly
    /// `new_capacity` if needed. `len` is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity {
            self.realloc(new_capacity);
        }
    }

    /// Sets `len` to `new_len`.
    ///
    /// - Growing past `capacity` reallocates to `max(new_len, 2 * capacity)`.
    /// - Slots in `[old_len, new_len)` hold `T::default()`.
    /// - Shrinking drops the elements in `[new_len, old_len)`.
    pub fn resize(&mut self, new_len: usize) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        if new_len > self.capacity {
            self.realloc(new_len.max(self.capacity * 2));
        }
        let len = self.len;
        self.buf.as_mut_slice()[len..new_len].fill_with(T::default);
        self.len = new_len;
    }

    /// Shortens the vector to `new_len` if `new_len < len`, dropping the
    /// removed elements; otherwise a no-op.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let len = self.len;
        self.buf.as_mut_slice()[new_len..len].fill_with(T::default);
        self.len = new_len;
    }
}
