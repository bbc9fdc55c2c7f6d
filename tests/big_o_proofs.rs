//! Big-O complexity proofs for min-max heap operations
//!
//! Empirically verifies the complexity bounds of the min-max heap with the
//! `big-o-test` crate.
//!
//! ## Testing Strategy
//!
//! We use `test_algorithm` to measure batch operations. For batch operations:
//! - O(1) per-element operations appear as O(n) for n operations
//! - O(log n) operations appear as O(n log n) for n operations
//!
//! Note: These are empirical tests, not formal proofs. They detect significant
//! deviations from expected behavior but may not catch subtle issues with
//! specific input patterns.

use big_o_test::{test_algorithm, BigOAlgorithmComplexity};
use rust_minmax_heap::MinMaxHeap;

use ctor::ctor;
use parking_lot::RwLock;
use std::sync::Arc;

/// Sets up the ENV, affecting the Rust's test runner
#[ctor]
fn setup_env() {
    // timings are only meaningful when tests run one at a time
    std::env::set_var("RUST_TEST_THREADS", "1");
}

/// Pushes `0..n` in descending order so every insert climbs to the root level
fn fill(heap: &mut MinMaxHeap<i32>, n: i32) {
    for i in (0..n).rev() {
        heap.push(i);
    }
}

#[test]
fn test_min_max_push_batch() {
    let heap = Arc::new(RwLock::new(MinMaxHeap::new()));

    test_algorithm(
        "MinMaxHeap push batch",
        3,
        || {
            *heap.write() = MinMaxHeap::new();
        },
        1000,
        || {
            fill(&mut heap.write(), 1000);
            42
        },
        2000,
        || {
            fill(&mut heap.write(), 2000);
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}

#[test]
fn test_min_max_delete_min_batch() {
    let heap = Arc::new(RwLock::new(MinMaxHeap::new()));

    test_algorithm(
        "MinMaxHeap delete_min batch",
        3,
        || {
            *heap.write() = MinMaxHeap::new();
        },
        1000,
        || {
            let mut h = heap.write();
            fill(&mut h, 1000);
            for _ in 0..1000 {
                assert!(
                    h.delete_min().is_ok(),
                    "delete_min() must succeed after pushing elements"
                );
            }
            42
        },
        2000,
        || {
            let mut h = heap.write();
            fill(&mut h, 2000);
            for _ in 0..2000 {
                assert!(
                    h.delete_min().is_ok(),
                    "delete_min() must succeed after pushing elements"
                );
            }
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}

#[test]
fn test_min_max_delete_max_batch() {
    let heap = Arc::new(RwLock::new(MinMaxHeap::new()));

    test_algorithm(
        "MinMaxHeap delete_max batch",
        3,
        || {
            *heap.write() = MinMaxHeap::new();
        },
        1000,
        || {
            let mut h = heap.write();
            fill(&mut h, 1000);
            for _ in 0..1000 {
                assert!(
                    h.delete_max().is_ok(),
                    "delete_max() must succeed after pushing elements"
                );
            }
            42
        },
        2000,
        || {
            let mut h = heap.write();
            fill(&mut h, 2000);
            for _ in 0..2000 {
                assert!(
                    h.delete_max().is_ok(),
                    "delete_max() must succeed after pushing elements"
                );
            }
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}
