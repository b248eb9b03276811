//! Edge case tests for contract violations
//!
//! These tests target the failure paths:
//! - Empty heap edge cases
//! - Out-of-range positional access
//! - Use before a comparator is installed
//! - Single element edge cases
//! - Malformed comparators

use rust_comparator_heap::ordering::MinFirst;
use rust_comparator_heap::{BinaryHeap, HeapError};

// ============================================================================
// Empty Heap
// ============================================================================

#[test]
#[should_panic(expected = "heap is empty")]
fn test_pop_empty_panics() {
    let mut heap: BinaryHeap<i32, MinFirst> = BinaryHeap::with_comparator(MinFirst);
    heap.pop();
}

#[test]
fn test_try_pop_empty() {
    let mut heap: BinaryHeap<i32, MinFirst> = BinaryHeap::with_comparator(MinFirst);
    assert_eq!(heap.try_pop(), Err(HeapError::Empty));
    assert_eq!(heap.size(), 0);
}

#[test]
fn test_pop_until_empty_then_fail() {
    let mut heap = BinaryHeap::new();
    heap.prepare([2, 1], MinFirst);
    assert_eq!(heap.pop(), 1);
    assert_eq!(heap.pop(), 2);
    assert_eq!(heap.try_pop(), Err(HeapError::Empty));

    // Still usable afterwards
    heap.push(5);
    assert_eq!(heap.pop(), 5);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_get_on_empty_panics() {
    let heap: BinaryHeap<i32, MinFirst> = BinaryHeap::with_comparator(MinFirst);
    heap.get(0);
}

// ============================================================================
// Out-of-range Index
// ============================================================================

#[test]
#[should_panic(expected = "index 3 is out of bounds for heap of size 3")]
fn test_get_out_of_range_panics() {
    let mut heap = BinaryHeap::new();
    heap.prepare([1, 2, 3], MinFirst);
    heap.get(3);
}

#[test]
#[should_panic(expected = "index 10 is out of bounds")]
fn test_update_out_of_range_panics() {
    let mut heap = BinaryHeap::new();
    heap.prepare([1, 2, 3], MinFirst);
    heap.update(10, 0);
}

#[test]
fn test_try_update_out_of_range_does_not_mutate() {
    let mut heap = BinaryHeap::new();
    heap.prepare([4, 1, 3, 2], MinFirst);
    let before: Vec<i32> = (0..heap.size()).map(|i| heap.get(i)).collect();

    assert_eq!(
        heap.try_update(4, -100),
        Err(HeapError::IndexOutOfBounds { index: 4, len: 4 })
    );

    let after: Vec<i32> = (0..heap.size()).map(|i| heap.get(i)).collect();
    assert_eq!(before, after);
}

#[test]
fn test_try_get() {
    let mut heap = BinaryHeap::new();
    heap.prepare([9, 7], MinFirst);
    assert_eq!(heap.try_get(0), Ok(&7));
    assert_eq!(heap.try_get(1), Ok(&9));
    assert_eq!(
        heap.try_get(2),
        Err(HeapError::IndexOutOfBounds { index: 2, len: 2 })
    );
}

// ============================================================================
// Unprepared Heap
// ============================================================================

#[test]
#[should_panic(expected = "prepare")]
fn test_push_unprepared_panics() {
    let mut heap: BinaryHeap<i32, MinFirst> = BinaryHeap::new();
    heap.push(1);
}

#[test]
#[should_panic(expected = "prepare")]
fn test_pop_unprepared_panics() {
    let mut heap: BinaryHeap<i32, MinFirst> = BinaryHeap::default();
    heap.pop();
}

#[test]
fn test_unprepared_reads_are_harmless() {
    let heap: BinaryHeap<i32, MinFirst> = BinaryHeap::new();
    assert_eq!(heap.size(), 0);
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), None);
    assert!(!heap.is_prepared());
}

// ============================================================================
// Single Element
// ============================================================================

#[test]
fn test_single_element_update() {
    let mut heap = BinaryHeap::new();
    heap.prepare([10], MinFirst);
    assert_eq!(heap.update(0, -10), 10);
    assert_eq!(heap.get(0), -10);
    assert_eq!(heap.pop(), -10);
    assert!(heap.is_empty());
}

#[test]
fn test_two_elements_update_last() {
    let mut heap = BinaryHeap::new();
    heap.prepare([1, 2], MinFirst);
    heap.update(1, 0);
    assert_eq!(heap.get(0), 0);
    assert_eq!(heap.get(1), 1);
}

// ============================================================================
// Extreme Values
// ============================================================================

#[test]
fn test_extreme_values() {
    let mut heap = BinaryHeap::new();
    heap.prepare([0, i64::MAX, i64::MIN, -1, 1], MinFirst);
    assert_eq!(heap.pop(), i64::MIN);
    heap.update(0, i64::MAX);
    assert!(heap.is_valid());
    assert_eq!(heap.pop(), 0);
    assert_eq!(heap.pop(), 1);
    assert_eq!(heap.pop(), i64::MAX);
    assert_eq!(heap.pop(), i64::MAX);
}

// ============================================================================
// Malformed Comparator
// ============================================================================

#[test]
fn test_inconsistent_comparator_is_memory_safe() {
    // Claims every child should become the parent.
    let contrary = |_: &i32, _: &i32| 1;
    let mut heap = BinaryHeap::new();
    heap.prepare(0..50, contrary);
    let replaced = heap.update(10, 99);
    heap.push(-1);

    let mut popped = Vec::new();
    while let Ok(v) = heap.try_pop() {
        popped.push(v);
    }
    assert_eq!(popped.len(), 51);
    popped.sort();
    let mut expected: Vec<i32> = (0..50).filter(|v| *v != replaced).collect();
    expected.extend([99, -1]);
    expected.sort();
    assert_eq!(popped, expected);
}
