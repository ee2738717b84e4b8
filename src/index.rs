// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`SimpleVector`](crate::SimpleVector).
//!
//! `Index` and `IndexMut` accept anything a slice does (`usize` and every
//! range form) and behave exactly like slice indexing over the live prefix
//! `[0..len)`: out-of-bounds access panics, in every build profile. Use
//! [`SimpleVector::at`](crate::SimpleVector::at) for a recoverable check.

// Crate imports
use crate::vec::SimpleVector;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVector<T> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
