// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array_ptr::ArrayPtr, vec::SimpleVector};

impl<T: Default> SimpleVector<T> {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot right, and
    /// returns `index` (the position of the inserted element).
    ///
    /// When the vector is full the capacity grows as in
    /// [`push_back`](SimpleVector::push_back), and the prefix, the new value
    /// and the suffix are moved straight into their final slots of the new
    /// buffer.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        let len = self.len;
        assert!(
            index <= len,
            "insert position {index} out of range for length {len}"
        );

        if len == self.capacity {
            let new_capacity = self.next_capacity();
            log::trace!(
                "SimpleVector insert realloc: capacity {} -> {}",
                self.capacity,
                new_capacity
            );
            let mut fresh = ArrayPtr::allocate(new_capacity);
            let dst = fresh.as_mut_slice();
            let src = self.buf.as_mut_slice();
            dst[..index].swap_with_slice(&mut src[..index]);
            dst[index] = value;
            dst[index + 1..=len].swap_with_slice(&mut src[index..len]);
            self.buf.swap(&mut fresh);
            self.capacity = new_capacity;
        } else {
            // Shift right: [index..len) -> [index+1..len+1)
            let slots = self.buf.as_mut_slice();
            slots[len] = value;
            slots[index..=len].rotate_right(1);
        }

        self.len = len + 1;
        index
    }
}
