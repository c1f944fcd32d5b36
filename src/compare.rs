//! Comparators for ordering heap elements
//!
//! A [`PairingHeap`](crate::PairingHeap) never inspects its elements; every
//! ordering decision goes through a [`Comparator`]. The smallest element under
//! the comparator is the one `peek` and `pop` return.
//!
//! Any closure or function of type `Fn(&T, &T) -> Ordering` is a comparator.
//! The named types in this module cover the common cases without a closure
//! type appearing in signatures:
//!
//! - [`NaturalOrder`]: `T::cmp`, giving a min-heap
//! - [`Reversed`]: flips another comparator, e.g. a max-heap from `NaturalOrder`
//! - [`ByKey`]: compares a projected `Ord` key
//!
//! # Contract
//!
//! A comparator must describe a strict weak ordering and must give the same
//! answer for the same pair every time. The heap does not check this. A
//! comparator that breaks the contract leaves the pop order unspecified, but
//! never causes memory unsafety.
//!
//! # Example
//!
//! ```rust
//! use phpq::{ByKey, PairingHeap, Reversed};
//!
//! struct Job { name: &'static str, priority: u8 }
//!
//! let mut jobs = PairingHeap::with_comparator(Reversed(ByKey(|j: &Job| j.priority)));
//! jobs.push(Job { name: "low", priority: 1 });
//! jobs.push(Job { name: "high", priority: 9 });
//! assert_eq!(jobs.pop().map(|j| j.name), Some("high"));
//! ```

use std::cmp::Ordering;

/// Three-way comparison used to order heap elements
pub trait Comparator<T: ?Sized> {
    /// Compares two elements
    ///
    /// `Ordering::Less` means `a` has higher priority (is popped first).
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their `Ord` implementation (smallest first)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reverses the wrapped comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Orders elements by a key extracted with the wrapped function
///
/// The key is recomputed on every comparison, so the projection should be cheap.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}
