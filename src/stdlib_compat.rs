//! Standard library compatibility layer
//!
//! Lets [`MinMaxHeap`] slot in where a `std::collections::BinaryHeap` would be
//! collected into, extended, or iterated.
//!
//! # Differences from BinaryHeap
//!
//! - **Both ends**: `BinaryHeap` only exposes its maximum. A min-max heap
//!   exposes the minimum and the maximum, so no `std::cmp::Reverse` wrapper is
//!   needed for min-first consumption.
//! - **Construction order**: collecting or converting inserts the elements one
//!   at a time in iteration order. The resulting storage order depends on that
//!   order; the extremes do not.
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heap::min_max::MinMaxHeap;
//!
//! let mut heap: MinMaxHeap<i32> = vec![5, 3, 7].into();
//! heap.extend([1, 9]);
//!
//! assert_eq!(heap.min(), Ok(&1));
//! assert_eq!(heap.max(), Ok(&9));
//!
//! let mut items: Vec<i32> = heap.into_iter().collect();
//! items.sort();
//! assert_eq!(items, vec![1, 3, 5, 7, 9]);
//! ```

use crate::min_max::MinMaxHeap;

impl<T: Ord> FromIterator<T> for MinMaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MinMaxHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> From<Vec<T>> for MinMaxHeap<T> {
    /// Builds a heap by inserting the vector's elements front to back.
    fn from(items: Vec<T>) -> Self {
        let mut heap = MinMaxHeap::with_capacity(items.len());
        heap.extend(items);
        heap
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for MinMaxHeap<T> {
    fn from(items: [T; N]) -> Self {
        let mut heap = MinMaxHeap::with_capacity(N);
        heap.extend(items);
        heap
    }
}

impl<T: Ord> From<MinMaxHeap<T>> for Vec<T> {
    /// Returns the elements in storage order.
    fn from(heap: MinMaxHeap<T>) -> Self {
        heap.into_vec()
    }
}

impl<T: Ord> Extend<T> for MinMaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Ord + Copy + 'a> Extend<&'a T> for MinMaxHeap<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord> IntoIterator for MinMaxHeap<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consumes the heap, yielding elements in storage order.
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a MinMaxHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
