//! Binary heap ordered by a caller-supplied comparator
//!
//! [`BinaryHeap`] keeps its elements in a dense vector laid out as a complete
//! binary tree. The ordering is not fixed by a trait bound on `T`; it comes
//! from a [`Comparator`] installed with [`prepare`](BinaryHeap::prepare) and
//! kept for the life of the heap.
//!
//! Besides the usual push/pop, any element can be overwritten in place with
//! [`update`](BinaryHeap::update), which repairs the heap from that slot in
//! whichever direction the new value needs to travel.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `prepare` | O(n log n) |
//! | `push`    | O(log n) amortized |
//! | `pop`     | O(log n)   |
//! | `update`  | O(log n)   |
//! | `get`     | O(1)       |
//! | `size`    | O(1)       |
//!
//! # Contract
//!
//! Positional access out of range, popping an empty heap, and mutating a heap
//! that has no comparator are programming errors. The plain methods panic on
//! them; the `try_*` methods return a [`HeapError`] instead. Either way the
//! check happens before anything is modified.
//!
//! # Example
//!
//! ```rust
//! use rust_comparator_heap::binary::BinaryHeap;
//!
//! let smaller_first = |parent: &i32, child: &i32| if parent <= child { -1 } else { 1 };
//!
//! let mut heap = BinaryHeap::new();
//! heap.prepare([16, 5, 6, 8, 10, 0, 2], smaller_first);
//! assert_eq!(heap.get(0), 0);
//!
//! heap.push(-1);
//! assert_eq!(heap.get(0), -1);
//!
//! heap.update(0, 4);
//! assert_eq!(heap.pop(), 0);
//! assert_eq!(heap.size(), 7);
//! ```

use crate::sift::{self, sift_down, sift_up};
use crate::traits::{Comparator, HeapError};
use log::{debug, trace};
use std::fmt;

/// An array-backed binary heap parameterized over its ordering strategy
///
/// The element at index 0 is the root: the element every other element
/// defers to under the comparator.
#[derive(Clone)]
pub struct BinaryHeap<T, C> {
    /// Implicit tree: parent of `i` is `(i - 1) / 2`, children `2i + 1` and `2i + 2`
    data: Vec<T>,
    /// `None` until `prepare` (or `with_comparator`) installs one
    compare: Option<C>,
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Creates an empty heap with no comparator
    ///
    /// Call [`prepare`](Self::prepare) before pushing.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            compare: None,
        }
    }

    /// Creates an empty heap that orders its elements with `compare`
    pub fn with_comparator(compare: C) -> Self {
        Self {
            data: Vec::new(),
            compare: Some(compare),
        }
    }

    /// Installs `compare` and bulk-loads `input`
    ///
    /// Elements are appended one at a time in input order, each followed by a
    /// sift-up, so the build costs O(n log n). Elements already in the heap
    /// are rebuilt under the new comparator before `input` is added.
    ///
    /// The comparator is installed before any element moves. If `input`
    /// panics, the elements loaded so far remain and form a valid heap under
    /// `compare`.
    pub fn prepare<I>(&mut self, input: I, compare: C)
    where
        I: IntoIterator<Item = T>,
    {
        let compare = &*self.compare.insert(compare);
        for index in 1..self.data.len() {
            sift_up(&mut self.data, compare, index);
        }

        let input = input.into_iter();
        self.data.reserve(input.size_hint().0);
        for value in input {
            let last = self.data.len();
            self.data.push(value);
            sift_up(&mut self.data, compare, last);
        }

        debug!("prepared binary heap with {} elements", self.data.len());
    }

    /// Returns true once a comparator has been installed
    pub fn is_prepared(&self) -> bool {
        self.compare.is_some()
    }

    /// Returns the number of elements in the heap
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts `value` and restores the heap property
    ///
    /// # Panics
    /// Panics if the heap has no comparator.
    pub fn push(&mut self, value: T) {
        if let Err(err) = self.try_push(value) {
            panic!("push: {}", err);
        }
    }

    /// Inserts `value`, or reports that the heap has no comparator
    ///
    /// # Errors
    /// Returns `HeapError::Unprepared` without inserting.
    pub fn try_push(&mut self, value: T) -> Result<(), HeapError> {
        let compare = self.compare.as_ref().ok_or(HeapError::Unprepared)?;
        let last = self.data.len();
        self.data.push(value);
        sift_up(&mut self.data, compare, last);
        Ok(())
    }

    /// Removes and returns the root
    ///
    /// # Panics
    /// Panics if the heap is empty or has no comparator.
    pub fn pop(&mut self) -> T {
        match self.try_pop() {
            Ok(value) => value,
            Err(err) => panic!("pop: {}", err),
        }
    }

    /// Removes and returns the root, or reports why it cannot
    ///
    /// The last element takes the root's slot and sifts down.
    ///
    /// # Errors
    /// `HeapError::Unprepared` if there is no comparator, `HeapError::Empty`
    /// if there is nothing to pop.
    pub fn try_pop(&mut self) -> Result<T, HeapError> {
        let compare = self.compare.as_ref().ok_or(HeapError::Unprepared)?;
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        let root = self.data.swap_remove(0);
        if self.data.len() > 1 {
            sift_down(&mut self.data, compare, 0);
        }
        Ok(root)
    }

    /// Overwrites the element at `index` and returns the value it replaced
    ///
    /// # Panics
    /// Panics if `index >= self.size()` or the heap has no comparator.
    pub fn update(&mut self, index: usize, value: T) -> T {
        match self.try_update(index, value) {
            Ok(previous) => previous,
            Err(err) => panic!("update: {}", err),
        }
    }

    /// Overwrites the element at `index`, then sifts it up or down
    ///
    /// Exactly one direction runs: up when the new value should displace its
    /// parent, otherwise down (which stops at once if nothing moved).
    ///
    /// # Errors
    /// `HeapError::Unprepared` or `HeapError::IndexOutOfBounds`; the heap is
    /// left untouched in both cases.
    pub fn try_update(&mut self, index: usize, value: T) -> Result<T, HeapError> {
        let compare = self.compare.as_ref().ok_or(HeapError::Unprepared)?;
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(HeapError::IndexOutOfBounds { index, len })?;
        let previous = std::mem::replace(slot, value);

        if index > 0 && !compare.keeps_parent(&self.data[sift::parent(index)], &self.data[index]) {
            trace!("update at {} sifts up", index);
            sift_up(&mut self.data, compare, index);
        } else {
            trace!("update at {} sifts down", index);
            sift_down(&mut self.data, compare, index);
        }
        Ok(previous)
    }

    /// Returns a copy of the element at `index`; `get(0)` is the root
    ///
    /// # Panics
    /// Panics if `index >= self.size()`.
    pub fn get(&self, index: usize) -> T
    where
        T: Clone,
    {
        match self.try_get(index) {
            Ok(value) => value.clone(),
            Err(err) => panic!("get: {}", err),
        }
    }

    /// Returns a reference to the element at `index`
    ///
    /// # Errors
    /// Returns `HeapError::IndexOutOfBounds` if there is no such element.
    pub fn try_get(&self, index: usize) -> Result<&T, HeapError> {
        self.data.get(index).ok_or(HeapError::IndexOutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    /// Returns a reference to the root without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns true if every parent keeps its children under the comparator
    ///
    /// A heap without a comparator is valid only when empty.
    pub fn is_valid(&self) -> bool {
        match &self.compare {
            Some(compare) => sift::is_heap(&self.data, compare),
            None => self.data.is_empty(),
        }
    }
}

impl<T, C: Comparator<T>> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .field("prepared", &self.compare.is_some())
            .finish()
    }
}
