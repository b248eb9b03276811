//! Ready-made comparators
//!
//! These cover the common cases so callers do not have to hand-write the
//! three-way signal:
//!
//! - [`MinFirst`]: smallest element at the root
//! - [`MaxFirst`]: largest element at the root
//! - [`ByKey`]: smallest derived key at the root
//! - [`FromOrdering`]: adapts a `std::cmp::Ordering` function
//!
//! All of them keep the existing parent on ties.
//!
//! # Example
//!
//! ```rust
//! use rust_comparator_heap::binary::BinaryHeap;
//! use rust_comparator_heap::ordering::MaxFirst;
//!
//! let mut heap = BinaryHeap::new();
//! heap.prepare([3, 9, 1], MaxFirst);
//! assert_eq!(heap.pop(), 9);
//! ```

use crate::traits::Comparator;
use std::cmp::Ordering;

/// Maps an ordering of `(parent, child)` onto the comparator signal
#[inline]
fn signal(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Min-heap order for any `Ord` type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord> Comparator<T> for MinFirst {
    #[inline]
    fn compare(&self, parent: &T, child: &T) -> i32 {
        signal(parent.cmp(child))
    }
}

/// Max-heap order for any `Ord` type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord> Comparator<T> for MaxFirst {
    #[inline]
    fn compare(&self, parent: &T, child: &T) -> i32 {
        signal(child.cmp(parent))
    }
}

/// Min-heap order on a key extracted from each element
///
/// ```rust
/// use rust_comparator_heap::binary::BinaryHeap;
/// use rust_comparator_heap::ordering::ByKey;
///
/// let mut heap = BinaryHeap::new();
/// heap.prepare(["ccc", "a", "bb"], ByKey(|s: &&str| s.len()));
/// assert_eq!(heap.get(0), "a");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, parent: &T, child: &T) -> i32 {
        signal((self.0)(parent).cmp(&(self.0)(child)))
    }
}

/// Adapts a `Fn(&T, &T) -> Ordering`, where `Less` means "belongs nearer the root"
///
/// ```rust
/// use rust_comparator_heap::binary::BinaryHeap;
/// use rust_comparator_heap::ordering::FromOrdering;
///
/// let mut heap = BinaryHeap::new();
/// heap.prepare([1.5_f64, -0.5, 2.0], FromOrdering(|a: &f64, b: &f64| a.total_cmp(b)));
/// assert_eq!(heap.pop(), -0.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FromOrdering<F>(pub F);

impl<T, F> Comparator<T> for FromOrdering<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, parent: &T, child: &T) -> i32 {
        signal((self.0)(parent, child))
    }
}
