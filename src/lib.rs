//! Min-Max Heap for Rust
//!
//! This crate provides a double-ended priority queue: a container that hands out
//! both its smallest and its largest element efficiently. It is a min-max heap,
//! an implicit binary tree kept in one contiguous `Vec` whose levels alternate
//! between minimum order and maximum order.
//!
//! # Features
//!
//! - **O(1)** access to the minimum and the maximum
//! - **O(log n)** insert, delete-min and delete-max
//! - No per-node allocation and no stored tree edges: parent, child and level
//!   are all derived from the slot index
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heap::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::from(vec![2, 1, 6, 7, 1, 3]);
//!
//! assert_eq!(heap.delete_max(), Ok(7));
//! assert_eq!(heap.max(), Ok(&6));
//! assert_eq!(heap.min(), Ok(&1));
//!
//! let mut ascending = Vec::new();
//! while let Ok(value) = heap.delete_min() {
//!     ascending.push(value);
//! }
//! assert_eq!(ascending, vec![1, 1, 2, 3, 6]);
//! ```

pub mod level;
pub mod min_max;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use min_max::MinMaxHeap;
pub use traits::{DoubleEndedHeap, Heap, HeapError};
