// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array_ptr::ArrayPtr, vec::SimpleVector};
use alloc::vec::Vec;

/// Adopts the vector's allocation after shrinking it to fit, so
/// `capacity == len`.
impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(v: Vec<T>) -> Self {
        let len = v.len();
        Self {
            buf: ArrayPtr::adopt(v.into_boxed_slice()),
            len,
            capacity: len,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(items: [T; N]) -> Self {
        Vec::from(items).into()
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(items: &[T]) -> Self {
        items.to_vec().into()
    }
}

/// Collects exactly the yielded items; `capacity == len`.
impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<T>>().into()
    }
}

/// Appends each item with [`SimpleVector::push_back`], so the usual doubling
/// growth applies.
impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Clone + Default + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item.clone());
        }
    }
}

impl<T: Clone + Default> SimpleVector<T> {
    /// Appends clones of every element of `src`, in order.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) {
        for item in src {
            self.push_back(item.clone());
        }
    }
}
