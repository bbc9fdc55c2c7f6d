//! Min-Max Heap implementation
//!
//! A double-ended priority queue stored as an implicit binary tree in a single
//! `Vec`. Levels alternate between *min* levels, whose slots are no greater than
//! anything below them, and *max* levels, whose slots are no smaller. The root
//! therefore holds the minimum and one of its two children holds the maximum.
//!
//! Restoring the ordering walks two levels at a time: a new element climbs its
//! grandparent chain after at most one swap with its parent, and a refilled slot
//! sinks through its grandchildren.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `push`       | O(log n)   |
//! | `min`, `max` | O(1)       |
//! | `delete_min` | O(log n)   |
//! | `delete_max` | O(log n)   |
//! | `clear`      | O(n) drop  |
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heap::min_max::MinMaxHeap;
//!
//! let mut heap: MinMaxHeap<i32> = [2, 1, 6, 7, 1, 3].into_iter().collect();
//!
//! assert_eq!(heap.min(), Ok(&1));
//! assert_eq!(heap.max(), Ok(&7));
//! assert_eq!(heap.delete_max(), Ok(7));
//! assert_eq!(heap.max(), Ok(&6));
//! assert_eq!(heap.delete_min(), Ok(1));
//! assert_eq!(heap.len(), 4);
//! ```

use crate::level::{self, Level};
use crate::traits::{DoubleEndedHeap, Heap, HeapError};

/// A min-max heap
///
/// Elements are their own priority and are compared with [`Ord`]. Duplicates
/// are allowed.
///
/// The accessors come in two flavours: [`min`](Self::min), [`max`](Self::max),
/// [`delete_min`](Self::delete_min) and [`delete_max`](Self::delete_max)
/// return [`HeapError::EmptyContainer`] on an empty heap, while the `peek_*` and
/// `pop_*` methods return `None`.
#[derive(Debug, Clone)]
pub struct MinMaxHeap<T> {
    /// Slots of the implicit tree in level order
    data: Vec<T>,
}

impl<T: Ord> MinMaxHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Shrinks the backing storage as close to `len()` as the allocator allows.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Inserts an element.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.bubble_up(self.data.len() - 1);
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty.
    pub fn min(&self) -> Result<&T, HeapError> {
        self.peek_min().ok_or(HeapError::EmptyContainer)
    }

    /// Returns the largest element.
    ///
    /// When both children of the root compare equal the left one is reported.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty.
    pub fn max(&self) -> Result<&T, HeapError> {
        self.peek_max().ok_or(HeapError::EmptyContainer)
    }

    /// Removes and returns the smallest element.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty.
    pub fn delete_min(&mut self) -> Result<T, HeapError> {
        self.pop_min().ok_or(HeapError::EmptyContainer)
    }

    /// Removes and returns the largest element.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty.
    pub fn delete_max(&mut self) -> Result<T, HeapError> {
        self.pop_max().ok_or(HeapError::EmptyContainer)
    }

    /// Returns the smallest element, or `None` if the heap is empty.
    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the largest element, or `None` if the heap is empty.
    pub fn peek_max(&self) -> Option<&T> {
        self.max_index().map(|index| &self.data[index])
    }

    /// Removes and returns the smallest element, or `None` if the heap is empty.
    pub fn pop_min(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        Some(self.delete_at(0))
    }

    /// Removes and returns the largest element, or `None` if the heap is empty.
    pub fn pop_max(&mut self) -> Option<T> {
        let index = self.max_index()?;
        Some(self.delete_at(index))
    }

    /// Iterates over the elements in storage order, which is not sorted.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Copies the elements out in storage order.
    ///
    /// The returned vector is independent of the heap.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Consumes the heap, returning its elements in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in ascending order.
    ///
    /// # Time Complexity
    /// O(n log n)
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop_min() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks the min-max ordering across every slot.
    ///
    /// Each slot on a min level must be no greater than its children and
    /// grandchildren, and each slot on a max level no smaller. Runs in O(n).
    pub fn is_valid(&self) -> bool {
        let len = self.data.len();
        (0..len).all(|index| {
            let level = Level::of(index);
            level::descendants(index)
                .iter()
                .take_while(|&&d| d < len)
                .all(|&d| !self.beats(level, d, index))
        })
    }

    /// Slot holding the maximum: the root alone, else the larger root child.
    fn max_index(&self) -> Option<usize> {
        match self.data.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ if self.data[2] > self.data[1] => Some(2),
            _ => Some(1),
        }
    }

    /// Returns true if the element at `a` belongs above the element at `b`
    /// under the ordering of `level`.
    #[inline]
    fn beats(&self, level: Level, a: usize, b: usize) -> bool {
        match level {
            Level::Min => self.data[a] < self.data[b],
            Level::Max => self.data[a] > self.data[b],
        }
    }

    /// Removes the element at `index`, refilling the slot from the end.
    fn delete_at(&mut self, index: usize) -> T {
        let removed = self.data.swap_remove(index);
        if index < self.data.len() {
            self.push_down(index);
        }
        removed
    }

    /// Restores the ordering after a new element lands at `index`.
    fn bubble_up(&mut self, index: usize) {
        if index == 0 {
            return;
        }

        let parent = level::parent(index);
        let level = Level::of(index);

        // An element that belongs on the parent's level crosses over once and
        // from then on only meets ancestors of that level.
        if self.beats(level.flip(), index, parent) {
            self.data.swap(index, parent);
            self.bubble_up_levels(parent, level.flip());
        } else {
            self.bubble_up_levels(index, level);
        }
    }

    /// Climbs the grandparent chain from `index` while the element beats its
    /// grandparent under `level`.
    fn bubble_up_levels(&mut self, mut index: usize, level: Level) {
        while index > 2 {
            let grandparent = level::grandparent(index);
            if self.beats(level, index, grandparent) {
                self.data.swap(index, grandparent);
                index = grandparent;
            } else {
                break;
            }
        }
    }

    /// Restores the ordering after the slot at `index` was refilled.
    fn push_down(&mut self, mut index: usize) {
        // Descending two levels at a time never changes the parity.
        let level = Level::of(index);
        let len = self.data.len();

        while level::first_child(index) < len {
            let extreme = self.extreme_descendant(index, level);

            if !self.beats(level, extreme, index) {
                break;
            }
            self.data.swap(extreme, index);

            if !level::is_grandchild(index, extreme) {
                // A child has no grandchildren of `index` below it.
                break;
            }

            let parent = level::parent(extreme);
            if self.beats(level.flip(), extreme, parent) {
                self.data.swap(extreme, parent);
            }
            index = extreme;
        }
    }

    /// Finds the child or grandchild of `index` that ranks first under
    /// `level`. The first of several equal candidates wins.
    fn extreme_descendant(&self, index: usize, level: Level) -> usize {
        let candidates = level::descendants(index);
        let mut best = candidates[0];
        for &candidate in &candidates[1..] {
            if candidate >= self.data.len() {
                break;
            }
            if self.beats(level, candidate, best) {
                best = candidate;
            }
        }
        best
    }
}

impl<T: Ord> Heap<T> for MinMaxHeap<T> {
    fn new() -> Self {
        MinMaxHeap::new()
    }

    fn is_empty(&self) -> bool {
        MinMaxHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        MinMaxHeap::len(self)
    }

    fn push(&mut self, item: T) {
        MinMaxHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        self.peek_min()
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_min()
    }
}

impl<T: Ord> DoubleEndedHeap<T> for MinMaxHeap<T> {
    fn peek_max(&self) -> Option<&T> {
        MinMaxHeap::peek_max(self)
    }

    fn pop_max(&mut self) -> Option<T> {
        MinMaxHeap::pop_max(self)
    }
}

impl<T: Ord> Default for MinMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
