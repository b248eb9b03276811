//! Heap repair walks over an implicit binary tree
//!
//! The tree lives in a slice: the parent of index `i` is `(i - 1) / 2` and its
//! children are `2i + 1` and `2i + 2`. Both walks only ever swap a node with
//! its parent or one of its children, so each runs in O(log n).

use crate::traits::Comparator;

#[inline]
pub(crate) fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Moves the element at `index` toward the root until its parent keeps it
pub(crate) fn sift_up<T, C: Comparator<T>>(data: &mut [T], compare: &C, mut index: usize) {
    while index > 0 {
        let parent = parent(index);
        if compare.keeps_parent(&data[parent], &data[index]) {
            break;
        }
        data.swap(parent, index);
        index = parent;
    }
}

/// Moves the element at `index` toward the leaves until it keeps its preferred child
///
/// With two children the left one is preferred unless the comparator says the
/// right one should be parent of the left.
pub(crate) fn sift_down<T, C: Comparator<T>>(data: &mut [T], compare: &C, mut index: usize) {
    let len = data.len();
    loop {
        let left = left_child(index);
        if left >= len {
            break;
        }
        let right = left + 1;
        let mut preferred = left;
        if right < len && !compare.keeps_parent(&data[left], &data[right]) {
            preferred = right;
        }
        if compare.keeps_parent(&data[index], &data[preferred]) {
            break;
        }
        data.swap(index, preferred);
        index = preferred;
    }
}

/// Returns true if every parent in `data` keeps both of its children
pub fn is_heap<T, C: Comparator<T>>(data: &[T], compare: &C) -> bool {
    (1..data.len()).all(|child| compare.keeps_parent(&data[parent(child)], &data[child]))
}
