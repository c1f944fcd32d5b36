//! Common traits for heap data structures
//!
//! This module provides the trait surface generic code can be written against:
//!
//! - [`Heap`]: push, peek, pop and the size counter
//! - [`MergeableHeap`]: melding two heaps of the same type
//!
//! Unlike `std::collections::BinaryHeap`, the heaps here are min-heaps under
//! their comparator: `peek` and `pop` return the element that compares smallest.

use thiserror::Error;

/// Structural problem found by [`PairingHeap::check_invariants`](crate::PairingHeap::check_invariants)
///
/// Operations never return this; it only exists for diagnostics and tests.
/// Seeing it means the comparator broke its contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// A child compares strictly smaller than its parent
    #[error("heap order violated: child at depth {depth} is smaller than its parent")]
    HeapOrderViolated {
        /// Depth of the offending child (the root is depth 0)
        depth: usize,
    },
    /// The recorded length disagrees with the number of nodes in the tree
    #[error("length mismatch: recorded {recorded}, counted {counted} nodes")]
    LengthMismatch {
        /// Value of the size counter
        recorded: usize,
        /// Nodes actually reachable from the root
        counted: usize,
    },
}

/// Base trait for priority queues
///
/// # Example
///
/// ```rust
/// use phpq::{Heap, MinHeap};
///
/// fn drain_all<H: Heap<u32>>(heap: &mut H) -> Vec<u32> {
///     std::iter::from_fn(|| heap.pop()).collect()
/// }
///
/// let mut heap = MinHeap::new();
/// Heap::push(&mut heap, 3);
/// Heap::push(&mut heap, 1);
/// assert_eq!(drain_all(&mut heap), vec![1, 3]);
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element, returning the new length
    ///
    /// # Time Complexity
    /// O(1) for the pairing heap.
    fn push(&mut self, item: T) -> usize;

    /// Returns the highest-priority element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the highest-priority element
    ///
    /// # Time Complexity
    /// O(log n) amortized for the pairing heap.
    fn pop(&mut self) -> Option<T>;
}

/// Heaps that support melding another heap of the same type into themselves
pub trait MergeableHeap<T>: Heap<T> {
    /// Moves every element of `other` into `self`, leaving `other` empty
    ///
    /// # Time Complexity
    /// O(1) for the pairing heap.
    fn merge(&mut self, other: &mut Self);
}
