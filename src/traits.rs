//! Common traits for comparator-ordered heaps
//!
//! - [`Comparator`]: the ordering strategy a heap is parameterized over
//! - [`HeapError`]: contract violations reported by the checked (`try_*`) operations
//!
//! A comparator answers one question: given a candidate parent and a
//! candidate child, may the parent stay where it is? The answer is encoded as
//! a three-way `i32` signal so that ties are explicit:
//!
//! | `compare(parent, child)` | Meaning |
//! |--------------------------|---------|
//! | `<= 0` | `parent` is correctly the parent (ties keep it) |
//! | `> 0`  | `child` should become the parent |

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap has no comparator yet; call `prepare` first
    Unprepared,
    /// The heap holds no elements
    Empty,
    /// The index does not name an element of the heap
    IndexOutOfBounds {
        /// Requested position
        index: usize,
        /// Number of elements at the time of the call
        len: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Unprepared => {
                write!(f, "heap has no comparator (prepare was never called)")
            }
            HeapError::Empty => write!(f, "heap is empty"),
            HeapError::IndexOutOfBounds { index, len } => {
                write!(
                    f,
                    "index {} is out of bounds for heap of size {}",
                    index, len
                )
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Ordering strategy for a heap
///
/// Implementations must describe a consistent (acyclic) order; the heap does
/// not validate this. A malformed comparator yields an unspecified element
/// order but never memory unsafety.
///
/// Any `Fn(&T, &T) -> i32` is a comparator:
///
/// ```rust
/// use rust_comparator_heap::Comparator;
///
/// let smaller_first = |parent: &i32, child: &i32| if parent <= child { -1 } else { 1 };
/// assert!(smaller_first.keeps_parent(&1, &2));
/// assert!(smaller_first.keeps_parent(&2, &2));
/// assert!(!smaller_first.keeps_parent(&3, &2));
/// ```
pub trait Comparator<T> {
    /// Three-way signal: `<= 0` keeps `parent` above `child`, `> 0` swaps them
    fn compare(&self, parent: &T, child: &T) -> i32;

    /// Returns true if `parent` may stay above `child`
    ///
    /// Equal elements keep the first argument as parent.
    #[inline]
    fn keeps_parent(&self, parent: &T, child: &T) -> bool {
        self.compare(parent, child) <= 0
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> i32,
{
    #[inline]
    fn compare(&self, parent: &T, child: &T) -> i32 {
        self(parent, child)
    }
}
