//! Standard library compatibility layer
//!
//! Provides an `Option`-returning facade shaped like `std::collections::BinaryHeap`
//! on top of [`BinaryHeap`] with the [`MinFirst`] comparator.
//!
//! # Differences from `std::collections::BinaryHeap`
//!
//! - **Min-heap vs Max-heap**: This is a min-heap, while `BinaryHeap` is a max-heap.
//!   Use `std::cmp::Reverse<T>` to get max-heap behavior.
//! - **In-place update**: [`StdHeap::update`] rewrites the element at a heap index.
//!
//! # Example
//!
//! ```rust
//! use rust_comparator_heap::stdlib_compat::StdHeap;
//!
//! // Use like std::collections::BinaryHeap
//! let mut heap = StdHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&3)); // min-heap, unlike BinaryHeap's max-heap
//! assert_eq!(heap.pop(), Some(3));
//! ```

use crate::binary::BinaryHeap;
use crate::ordering::MinFirst;
use crate::traits::HeapError;

/// A min-heap with the calling conventions of `std::collections::BinaryHeap`
///
/// Empty-heap conditions surface as `None` rather than panics.
#[derive(Debug, Clone)]
pub struct StdHeap<T: Ord> {
    heap: BinaryHeap<T, MinFirst>,
}

impl<T: Ord> StdHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::with_comparator(MinFirst),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: T) {
        self.heap.push(item)
    }

    /// Returns a reference to the smallest item without removing it
    ///
    /// This is equivalent to `BinaryHeap::peek`, but returns the minimum (not maximum).
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Removes and returns the smallest item
    ///
    /// This is equivalent to `BinaryHeap::pop`, but returns the minimum (not maximum).
    pub fn pop(&mut self) -> Option<T> {
        self.heap.try_pop().ok()
    }

    /// Replaces the item at heap index `index`, returning the old item
    ///
    /// # Errors
    /// Returns `HeapError::IndexOutOfBounds` if `index >= self.len()`.
    pub fn update(&mut self, index: usize, item: T) -> Result<T, HeapError> {
        self.heap.try_update(index, item)
    }

    /// Consumes the wrapper, returning the underlying comparator heap
    pub fn into_inner(self) -> BinaryHeap<T, MinFirst> {
        self.heap
    }
}

impl<T: Ord> Default for StdHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for StdHeap<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Ord> FromIterator<T> for StdHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = BinaryHeap::new();
        heap.prepare(iter, MinFirst);
        Self { heap }
    }
}

impl<T: Ord> Extend<T> for StdHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.heap.push(item);
        }
    }
}
