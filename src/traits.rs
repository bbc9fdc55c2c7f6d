//! Common traits for double-ended heap data structures
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Heap`]: Base trait for a min-oriented heap, shaped like Rust's standard heap API
//! - [`DoubleEndedHeap`]: Extended trait adding access to the maximum as well
//!
//! Both traits report emptiness with `Option`. The inherent methods on
//! [`MinMaxHeap`](crate::min_max::MinMaxHeap) that mirror them (`min`, `max`,
//! `delete_min`, `delete_max`) report it with [`HeapError`] instead.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation needs at least one element but the heap is empty
    EmptyContainer,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyContainer => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap`, which is a max-heap, the base trait is min-oriented.
/// The element itself is its own priority.
///
/// # Example
///
/// ```rust
/// use rust_minmax_heap::Heap;
/// use rust_minmax_heap::min_max::MinMaxHeap;
///
/// let mut heap = MinMaxHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(Heap::peek(&heap), Some(&1));
/// assert_eq!(Heap::pop(&mut heap), Some(1));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}

/// Extended heap trait giving access to both ends
///
/// # Example
///
/// ```rust
/// use rust_minmax_heap::{DoubleEndedHeap, Heap};
/// use rust_minmax_heap::min_max::MinMaxHeap;
///
/// let mut heap: MinMaxHeap<i32> = Heap::new();
/// Heap::push(&mut heap, 4);
/// Heap::push(&mut heap, 9);
/// Heap::push(&mut heap, 1);
///
/// assert_eq!(heap.peek_max(), Some(&9));
/// assert_eq!(heap.pop_max(), Some(9));
/// assert_eq!(heap.peek_max(), Some(&4));
/// ```
pub trait DoubleEndedHeap<T: Ord>: Heap<T> {
    /// Returns the maximum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_max(&self) -> Option<&T>;

    /// Removes and returns the maximum element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop_max(&mut self) -> Option<T>;
}
