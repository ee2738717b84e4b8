// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`SimpleVector`](crate::SimpleVector).
//!
//! - `IntoIter<T>` yields the live elements by value and supports
//!   `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//! - `&SimpleVector` and `&mut SimpleVector` iterate as slices.

// Crate imports
use crate::vec::SimpleVector;
use alloc::vec::Vec;

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `SimpleVector::into_iter()`.
///
/// Takes over the vector's buffer; the unused tail slots are dropped up front.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n)
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> Self::IntoIter {
        let mut items: Vec<T> = self.buf.release().map(|block| block.into_vec()).unwrap_or_default();
        items.truncate(self.len);
        IntoIter {
            inner: items.into_iter(),
        }
    }
}
