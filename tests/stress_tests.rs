//! Extreme stress tests that push the heap to its limits
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use rust_minmax_heap::{DoubleEndedHeap, MinMaxHeap};

/// Deterministic pseudo-random sequence for reproducible workloads
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state >> 33
    }
}

/// Test massive numbers of inserts and removals from the bottom
fn test_massive_ascending<H: DoubleEndedHeap<i32>>() {
    let mut heap = H::new();

    for i in 0..10_000 {
        heap.push(i);
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Some(i));
    }
    assert!(heap.is_empty());
}

/// Test massive numbers of inserts and removals from the top
fn test_massive_descending<H: DoubleEndedHeap<i32>>() {
    let mut heap = H::new();

    for i in 0..10_000 {
        heap.push(i);
    }

    for i in (0..10_000).rev() {
        assert_eq!(heap.pop_max(), Some(i));
    }
    assert!(heap.is_empty());
}

/// Test alternating insert and removal at both ends
fn test_alternating_ops<H: DoubleEndedHeap<i32>>() {
    let mut heap = H::new();

    for i in 0..2_000 {
        heap.push(i * 2);
        heap.push(-(i * 2 + 1));
        heap.push(i);

        if i % 2 == 0 {
            assert!(heap.pop().is_some());
        } else {
            assert!(heap.pop_max().is_some());
        }
    }

    assert_eq!(heap.len(), 4_000);
    let mut last = i32::MIN;
    while let Some(v) = heap.pop() {
        assert!(v >= last);
        last = v;
    }
}

/// Test squeezing from both ends toward the median
fn test_squeeze_to_median<H: DoubleEndedHeap<i32>>() {
    let mut heap = H::new();
    let mut rng = Lcg::new(0x5eed);
    let mut values: Vec<i32> = (0..5_001).map(|_| (rng.next() % 100_000) as i32).collect();

    for &v in &values {
        heap.push(v);
    }
    values.sort();

    while heap.len() > 1 {
        assert!(heap.pop().is_some());
        assert!(heap.pop_max().is_some());
    }
    assert_eq!(heap.peek(), Some(&values[2_500]));
    assert_eq!(heap.peek_max(), Some(&values[2_500]));
}

#[test]
fn test_min_max_massive_ascending() {
    test_massive_ascending::<MinMaxHeap<i32>>();
}

#[test]
fn test_min_max_massive_descending() {
    test_massive_descending::<MinMaxHeap<i32>>();
}

#[test]
fn test_min_max_alternating_ops() {
    test_alternating_ops::<MinMaxHeap<i32>>();
}

#[test]
fn test_min_max_squeeze_to_median() {
    test_squeeze_to_median::<MinMaxHeap<i32>>();
}

#[test]
fn test_min_max_random_workload_keeps_ordering() {
    let mut heap = MinMaxHeap::new();
    let mut rng = Lcg::new(42);

    for round in 0..20_000u64 {
        match rng.next() % 5 {
            0 | 1 | 2 => heap.push(rng.next() % 1_000),
            3 => {
                let _ = heap.delete_min();
            }
            _ => {
                let _ = heap.delete_max();
            }
        }

        if round % 1_000 == 0 {
            assert!(heap.is_valid(), "ordering broken at round {round}");
        }
    }
    assert!(heap.is_valid());
}
