//! Standard library compatibility layer
//!
//! Type aliases and conversions for code moving over from
//! `std::collections::BinaryHeap`.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: [`MinHeap`] pops the smallest element first, while
//!   `BinaryHeap` pops the largest. [`MaxHeap`] matches `BinaryHeap`'s order.
//! - `push` returns the new length instead of `()`.
//!
//! # Example
//!
//! ```rust
//! use phpq::{MaxHeap, MinHeap};
//! use std::collections::BinaryHeap;
//!
//! let std_heap = BinaryHeap::from(vec![5, 3, 7]);
//! let mut max: MaxHeap<i32> = MaxHeap::from(std_heap);
//! assert_eq!(max.pop(), Some(7));
//!
//! let mut min = MinHeap::from(vec![5, 3, 7]);
//! assert_eq!(min.pop(), Some(3));
//! ```

use std::collections::BinaryHeap;

use crate::compare::{Comparator, NaturalOrder, Reversed};
use crate::pairing::PairingHeap;

/// Pops the smallest element first
pub type MinHeap<T> = PairingHeap<T, NaturalOrder>;

/// Pops the largest element first, like `BinaryHeap`
pub type MaxHeap<T> = PairingHeap<T, Reversed<NaturalOrder>>;

impl<T: Ord> PairingHeap<T, Reversed<NaturalOrder>> {
    /// Creates an empty max-heap ordered by `T`'s `Ord` implementation
    pub fn new_max() -> Self {
        Self::with_comparator(Reversed(NaturalOrder))
    }
}

impl<T, C: Comparator<T> + Default> From<Vec<T>> for PairingHeap<T, C> {
    /// Builds the heap in O(n)
    fn from(items: Vec<T>) -> Self {
        Self::from_vec_with(items, C::default())
    }
}

impl<T, C: Comparator<T> + Default, const N: usize> From<[T; N]> for PairingHeap<T, C> {
    fn from(items: [T; N]) -> Self {
        Self::from_vec_with(Vec::from(items), C::default())
    }
}

impl<T: Ord, C: Comparator<T> + Default> From<BinaryHeap<T>> for PairingHeap<T, C> {
    fn from(heap: BinaryHeap<T>) -> Self {
        Self::from_vec_with(heap.into_vec(), C::default())
    }
}
