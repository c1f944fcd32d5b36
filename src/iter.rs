//! Iterators over a [`PairingHeap`]
//!
//! - [`Iter`]: borrows every element in arbitrary (pre-order) order
//! - [`IntoIter`]: consumes the heap, yielding elements in priority order
//! - [`DrainSorted`]: empties the heap in priority order through `&mut`

use std::iter::FusedIterator;

use crate::compare::Comparator;
use crate::pairing::{Node, PairingHeap};

/// Borrowing iterator in arbitrary order
///
/// Acquire through [`PairingHeap::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        // Reversed so the first child is visited next
        self.stack.extend(node.children.iter().rev());
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Owning iterator yielding elements in priority order
///
/// Acquire through `IntoIterator` on [`PairingHeap`]. Each step is a `pop`,
/// so a full traversal costs O(n log n).
pub struct IntoIter<T, C> {
    heap: PairingHeap<T, C>,
}

impl<T, C> IntoIter<T, C> {
    pub(crate) fn new(heap: PairingHeap<T, C>) -> Self {
        Self { heap }
    }
}

impl<T, C: Comparator<T>> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for IntoIter<T, C> {}

impl<T, C: Comparator<T>> FusedIterator for IntoIter<T, C> {}

/// Draining iterator yielding elements in priority order
///
/// Acquire through [`PairingHeap::drain_sorted`]. Whatever is left when the
/// iterator is dropped is cleared from the heap.
pub struct DrainSorted<'a, T, C> {
    heap: &'a mut PairingHeap<T, C>,
}

impl<'a, T, C> DrainSorted<'a, T, C> {
    pub(crate) fn new(heap: &'a mut PairingHeap<T, C>) -> Self {
        Self { heap }
    }
}

impl<'a, T, C> Drop for DrainSorted<'a, T, C> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}

impl<'a, T, C: Comparator<T>> Iterator for DrainSorted<'a, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<'a, T, C: Comparator<T>> ExactSizeIterator for DrainSorted<'a, T, C> {}

impl<'a, T, C: Comparator<T>> FusedIterator for DrainSorted<'a, T, C> {}
