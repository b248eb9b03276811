//! Comparator-Ordered Binary Heap for Rust
//!
//! This crate provides an array-backed binary heap whose order is defined by a
//! caller-supplied comparator rather than by `Ord` on the element type, and
//! which supports overwriting any element in place with re-heapification.
//!
//! # Features
//!
//! - **[`BinaryHeap`](binary::BinaryHeap)**: O(log n) push, pop and update; O(1) indexed access
//! - **[`Comparator`]**: three-way signal strategy; any `Fn(&T, &T) -> i32` qualifies
//! - **[`ordering`]**: stock comparators (min, max, by key, from `Ordering`)
//! - **[`StdHeap`](stdlib_compat::StdHeap)**: `Option`-returning min-heap shaped like the standard library's
//!
//! # Example
//!
//! ```rust
//! use rust_comparator_heap::binary::BinaryHeap;
//! use rust_comparator_heap::ordering::MinFirst;
//!
//! let mut heap = BinaryHeap::new();
//! heap.prepare([16, 5, 6, 8, 10, 0, 2], MinFirst);
//! heap.update(3, -7);
//! assert_eq!(heap.pop(), -7);
//! assert_eq!(heap.pop(), 0);
//! ```

pub mod binary;
pub mod ordering;
pub mod sift;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use binary::BinaryHeap;
pub use traits::{Comparator, HeapError};
