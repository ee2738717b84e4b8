// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T: Default> SimpleVector<T> {
    /// Appends `value`, growing first if `len == capacity`.
    ///
    /// Growth goes to capacity `1` from an empty vector, and doubles otherwise.
    /// Existing elements are moved into the new buffer, never cloned.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity {
            self.realloc(self.next_capacity());
        }
        let len = self.len;
        self.buf[len] = value;
        self.len = len + 1;
    }

    /// Removes and drops the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn pop_back(&mut self) {
        assert!(!self.is_empty(), "pop_back on an empty SimpleVector");
        drop(self.pop());
    }

    /// Removes the last element and returns it, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(core::mem::take(&mut self.buf[self.len]))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::SimpleVector;
    use alloc::vec::Vec;

    #[test]
    fn test_push_back_doubles_capacity() {
        let mut v: SimpleVector<i32> = SimpleVector::new();
        let mut caps = Vec::new();
        for i in 0..9 {
            v.push_back(i);
            caps.push(v.capacity());
            assert_eq!(v.len() as i32, i + 1);
        }
        assert_eq!(caps, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_push_back_moves_non_copy_values() {
        use alloc::string::String;

        let mut v: SimpleVector<String> = SimpleVector::new();
        v.push_back(String::from("one"));
        v.push_back(String::from("two"));
        v.push_back(String::from("three"));
        assert_eq!(v.as_slice(), &["one", "two", "three"]);
    }

    #[test]
    fn test_pop_returns_in_reverse() {
        let mut v = SimpleVector::from([1, 2]);
        assert_eq!(v.pop(), Some(2));
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.pop(), None);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_pop_back_removes_last() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.pop_back();
        assert_eq!(v.as_slice(), &[1, 2]);
        v.push_back(9);
        assert_eq!(v.as_slice(), &[1, 2, 9]);
    }

    #[test]
    #[should_panic(expected = "pop_back on an empty SimpleVector")]
    fn test_pop_back_on_empty_panics() {
        let mut v: SimpleVector<i32> = SimpleVector::new();
        v.pop_back();
    }

    #[test]
    fn test_pop_drops_element_immediately() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        let mut v: SimpleVector<Option<Rc<()>>> = SimpleVector::new();
        v.push_back(Some(Rc::clone(&tracker)));
        v.pop_back();
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
