// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T: Default> SimpleVector<T> {
    /// Removes the element at `index`, shifting `[index + 1, len)` one slot
    /// left, and returns `index`.
    ///
    /// The returned position holds the element that followed the erased one,
    /// or equals `len` when the last element was erased.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn erase(&mut self, index: usize) -> usize {
        let len = self.len;
        assert!(
            index < len,
            "erase position {index} out of range for length {len}"
        );
        drop(self.take_at(index));
        index
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left. Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        Some(self.take_at(index))
    }

    fn take_at(&mut self, index: usize) -> T {
        let len = self.len;
        // Shift left: [index+1..len) -> [index..len-1); the removed element
        // ends up in slot len-1.
        let slots = self.buf.as_mut_slice();
        slots[index..len].rotate_left(1);
        self.len = len - 1;
        core::mem::take(&mut slots[len - 1])
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::SimpleVector;

    #[test]
    fn test_erase_front_and_middle() {
        let mut v = SimpleVector::from(['a', 'b', 'c']);
        assert_eq!(v.erase(0), 0);
        assert_eq!(v.as_slice(), &['b', 'c']);

        let mut v = SimpleVector::from(['a', 'b', 'c']);
        let next = v.erase(1);
        assert_eq!(v.as_slice(), &['a', 'c']);
        assert_eq!(v[next], 'c');
    }

    #[test]
    fn test_erase_last_returns_end() {
        let mut v = SimpleVector::from([1, 2, 3]);
        let pos = v.erase(2);
        assert_eq!(pos, v.len());
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    #[should_panic(expected = "erase position 3 out of range for length 3")]
    fn test_erase_at_end_panics() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.erase(3);
    }

    #[test]
    #[should_panic(expected = "erase position 0 out of range for length 0")]
    fn test_erase_on_empty_panics() {
        let mut v: SimpleVector<i32> = SimpleVector::new();
        v.erase(0);
    }

    #[test]
    fn test_remove_returns_element() {
        let mut v = SimpleVector::from([10, 20, 30, 40]);
        assert_eq!(v.remove(1), Some(20));
        assert_eq!(v.as_slice(), &[10, 30, 40]);
        assert_eq!(v.remove(3), None);
        assert_eq!(v.remove(2), Some(40));
        assert_eq!(v.as_slice(), &[10, 30]);
    }

    #[test]
    fn test_erase_drops_element_immediately() {
        use std::rc::Rc;

        let kept = Rc::new(1);
        let erased = Rc::new(2);
        let mut v = SimpleVector::from([Some(Rc::clone(&erased)), Some(Rc::clone(&kept))]);
        v.erase(0);
        assert_eq!(Rc::strong_count(&erased), 1);
        assert_eq!(Rc::strong_count(&kept), 2);
        assert_eq!(v[0].as_deref(), Some(&1));
    }
}
