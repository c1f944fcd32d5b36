//! Pairing Heap Priority Queue for Rust
//!
//! This crate provides a generic priority queue backed by a pairing heap: a
//! self-adjusting multiway tree with cheap insertion and logarithmic amortized
//! deletion. The ordering is supplied by the caller as a comparator, so any
//! element type can be queued without implementing `Ord`.
//!
//! # Features
//!
//! - **O(1)** `push` (worst case) and `peek`
//! - **O(log n)** amortized `pop`, using the classic two-pass pairing strategy
//! - **O(1)** `append` of two heaps
//! - Custom comparators: closures, [`NaturalOrder`], [`Reversed`], [`ByKey`]
//!
//! # Example
//!
//! ```rust
//! use phpq::PairingHeap;
//!
//! let mut queue = PairingHeap::with_comparator(|a: &(char, u32), b: &(char, u32)| a.1.cmp(&b.1));
//! queue.push(('A', 3));
//! queue.push(('B', 1));
//! queue.push(('C', 2));
//!
//! assert_eq!(queue.len(), 3);
//! assert_eq!(queue.pop().map(|(key, _)| key), Some('B'));
//! assert_eq!(queue.pop().map(|(key, _)| key), Some('C'));
//! assert_eq!(queue.pop().map(|(key, _)| key), Some('A'));
//! assert_eq!(queue.pop(), None);
//! ```
//!
//! # Cargo features
//!
//! - `tracing`: emit `tracing` events from `pop`, `append` and bulk construction.

#[macro_use]
mod macros;

pub mod compare;
pub mod iter;
pub mod pairing;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use compare::{ByKey, Comparator, NaturalOrder, Reversed};
pub use pairing::PairingHeap;
pub use stdlib_compat::{MaxHeap, MinHeap};
pub use traits::{Heap, InvariantError, MergeableHeap};
