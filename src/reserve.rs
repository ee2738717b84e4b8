// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reservation requests: build an empty vector with pre-allocated capacity.
//!
//! ```rust
//! use simple_vector::{SimpleVector, reserve};
//!
//! let v = SimpleVector::<String>::from(reserve(8));
//! assert_eq!(v.len(), 0);
//! assert_eq!(v.capacity(), 8);
//! ```

/// A one-shot request for a [`SimpleVector`](crate::SimpleVector) with
/// `capacity` pre-allocated slots and no live elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reserve {
    capacity: usize,
}

impl Reserve {
    /// Creates a request for `capacity` slots.
    #[inline]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`Reserve::new`].
#[inline]
pub const fn reserve(capacity: usize) -> Reserve {
    Reserve::new(capacity)
}
