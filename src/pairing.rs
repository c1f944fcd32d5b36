//! Pairing Heap implementation
//!
//! A pairing heap is a heap-ordered multiway tree with:
//! - O(1) insert and merge
//! - O(1) find-min
//! - O(log n) amortized delete-min
//!
//! The heap is always either empty or a single root node. Inserting merges a
//! singleton node with the root; deleting the root collapses its children back
//! into one tree with the two-pass pairing strategy (pair left to right, then
//! fold right to left), which is what gives the logarithmic amortized bound.
//!
//! Nodes own their children directly (`Vec<Node<T>>`), so there is no unsafe
//! code and no reference counting. Teardown and cloning walk the tree with an
//! explicit stack, so degenerate shapes (for example the chain produced by
//! pushing in descending order) never exhaust the call stack.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::compare::{Comparator, NaturalOrder};
use crate::iter::{DrainSorted, IntoIter, Iter};
use crate::traits::{Heap, InvariantError, MergeableHeap};

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) children: Vec<Node<T>>,
}

impl<T> Node<T> {
    fn leaf(element: T) -> Self {
        Node {
            element,
            children: Vec::new(),
        }
    }

    /// Copies the tree rooted here without recursing per level
    fn deep_clone(&self) -> Option<Self>
    where
        T: Clone,
    {
        fn shell<T: Clone>(node: &Node<T>) -> Node<T> {
            Node {
                element: node.element.clone(),
                children: Vec::with_capacity(node.children.len()),
            }
        }

        // Each frame pairs a source node with its copy; the copy's child count
        // doubles as the index of the next source child to visit.
        let mut stack = vec![(self, shell(self))];
        let mut finished = None;

        while let Some(&(src, ref dst)) = stack.last() {
            if let Some(child) = src.children.get(dst.children.len()) {
                stack.push((child, shell(child)));
                continue;
            }

            if let Some((_, done)) = stack.pop() {
                match stack.last_mut() {
                    Some((_, parent)) => parent.children.push(done),
                    None => finished = Some(done),
                }
            }
        }

        finished
    }
}

/// Drops a tree level by level instead of recursively
fn dismantle<T>(root: Node<T>) {
    let mut stack = vec![root];
    while let Some(mut node) = stack.pop() {
        stack.append(&mut node.children);
    }
}

/// Merges two heap-ordered trees in O(1)
///
/// The loser becomes the last child of the winner. `a` wins unless it compares
/// strictly greater than `b`, so ties go to the first argument.
fn merge_pair<T, C>(mut a: Node<T>, mut b: Node<T>, cmp: &C) -> Node<T>
where
    C: Comparator<T> + ?Sized,
{
    if cmp.compare(&a.element, &b.element) == Ordering::Greater {
        b.children.push(a);
        b
    } else {
        a.children.push(b);
        a
    }
}

/// First pass: merge neighbours left to right; an odd last node passes through
fn pair_up<T, C>(nodes: Vec<Node<T>>, cmp: &C) -> Vec<Node<T>>
where
    C: Comparator<T> + ?Sized,
{
    let mut pairs = Vec::with_capacity((nodes.len() + 1) / 2);
    let mut nodes = nodes.into_iter();

    while let Some(first) = nodes.next() {
        match nodes.next() {
            Some(second) => pairs.push(merge_pair(first, second, cmp)),
            None => pairs.push(first),
        }
    }

    pairs
}

/// Collapses the children of a deleted root into a single tree
///
/// Two-pass pairing: pair neighbours left to right, then fold the pairs from
/// the right end leftward, with the accumulator as the first argument.
fn merge_pairs<T, C>(mut children: Vec<Node<T>>, cmp: &C) -> Option<Node<T>>
where
    C: Comparator<T> + ?Sized,
{
    if children.len() <= 1 {
        return children.pop();
    }

    let mut pairs = pair_up(children, cmp);
    let mut root = pairs.pop()?;
    while let Some(left) = pairs.pop() {
        root = merge_pair(root, left, cmp);
    }

    Some(root)
}

/// Pairing Heap priority queue
///
/// Elements are ordered by the comparator `C`; `peek` and `pop` return the
/// element that compares smallest. With the default [`NaturalOrder`] this is a
/// min-heap over `T: Ord`.
///
/// Among elements that compare equal, the one pushed first is the one `peek`
/// returns (until the next `pop`). No further stability is promised.
///
/// # Time Complexity
///
/// | Operation                          | Complexity           |
/// |------------------------------------|----------------------|
/// | [`push`](Self::push)               | O(1)                 |
/// | [`peek`](Self::peek)               | O(1)                 |
/// | [`pop`](Self::pop)                 | O(log n) amortized   |
/// | [`append`](Self::append)           | O(1)                 |
/// | [`from_vec_with`](Self::from_vec_with) | O(n)             |
///
/// # Example
///
/// ```rust
/// use phpq::PairingHeap;
///
/// let mut heap = PairingHeap::new();
/// assert_eq!(heap.push_all([5, 1, 8, 3]), 4);
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.len(), 3);
/// assert_eq!(heap.into_sorted_vec(), vec![3, 5, 8]);
/// ```
pub struct PairingHeap<T, C = NaturalOrder> {
    root: Option<Node<T>>,
    len: usize,
    cmp: C,
}

impl<T: Ord> PairingHeap<T> {
    /// Creates an empty min-heap ordered by `T`'s `Ord` implementation
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> PairingHeap<T, C> {
    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the highest-priority element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.root.as_ref().map(|root| &root.element)
    }

    /// Returns the comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns an iterator over all elements in arbitrary order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_ref(), self.len)
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            dismantle(root);
        }
        self.len = 0;
    }
}

impl<T, C: Comparator<T>> PairingHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    ///
    /// `cmp` must describe a strict weak ordering and stay consistent for the
    /// lifetime of the heap; otherwise the pop order is unspecified.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Builds a heap from a batch of elements in O(n)
    ///
    /// Neighbouring elements are paired and the pairs folded left to right,
    /// so the earliest of several smallest elements ends up at the root, just
    /// as it would after pushing the batch one element at a time.
    pub fn from_vec_with(items: Vec<T>, cmp: C) -> Self {
        let len = items.len();
        let leaves = items.into_iter().map(Node::leaf).collect();

        let mut pairs = pair_up(leaves, &cmp).into_iter();
        let root = pairs
            .next()
            .map(|first| pairs.fold(first, |acc, node| merge_pair(acc, node, &cmp)));

        heap_event!(debug, len, "built pairing heap from batch");
        Self { root, len, cmp }
    }

    /// Inserts an element, returning the new length
    ///
    /// An element equal to the current root does not replace it.
    pub fn push(&mut self, item: T) -> usize {
        let node = Node::leaf(item);
        self.root = Some(match self.root.take() {
            Some(root) => merge_pair(root, node, &self.cmp),
            None => node,
        });
        self.len += 1;
        self.len
    }

    /// Inserts every element of `items` in order, returning the new length
    ///
    /// Equivalent to calling [`push`](Self::push) once per element.
    pub fn push_all<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.push(item);
        }
        self.len
    }

    /// Removes and returns the highest-priority element
    pub fn pop(&mut self) -> Option<T> {
        let Node { element, children } = self.root.take()?;
        heap_event!(trace, fan_out = children.len(), remaining = self.len - 1, "pop");

        self.root = merge_pairs(children, &self.cmp);
        self.len -= 1;
        Some(element)
    }

    /// Moves all elements of `other` into `self` in O(1), leaving `other` empty
    ///
    /// The merged heap keeps `self`'s comparator. On a tie between the two
    /// roots, `self`'s root stays on top.
    pub fn append(&mut self, other: &mut Self) {
        let moved = mem::take(&mut other.len);
        self.root = match (self.root.take(), other.root.take()) {
            (Some(a), Some(b)) => Some(merge_pair(a, b, &self.cmp)),
            (a, b) => a.or(b),
        };
        self.len += moved;
        heap_event!(debug, moved, len = self.len, "appended pairing heap");
    }

    /// Returns a draining iterator yielding elements in priority order
    ///
    /// Elements not consumed when the iterator is dropped are removed anyway.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted::new(self)
    }

    /// Consumes the heap, returning its elements in priority order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Verifies the heap-order invariant and the size counter
    ///
    /// Walks the whole tree, so this is O(n). A well-behaved comparator never
    /// produces an error; this is meant for tests and debugging.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut counted = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root.iter().map(|root| (root, 0)).collect();

        while let Some((node, depth)) = stack.pop() {
            counted += 1;
            for child in &node.children {
                if self.cmp.compare(&child.element, &node.element) == Ordering::Less {
                    return Err(InvariantError::HeapOrderViolated { depth: depth + 1 });
                }
                stack.push((child, depth + 1));
            }
        }

        if counted != self.len {
            return Err(InvariantError::LengthMismatch {
                recorded: self.len,
                counted,
            });
        }
        Ok(())
    }
}

impl<T, C> Drop for PairingHeap<T, C> {
    fn drop(&mut self) {
        if let Some(root) = self.root.take() {
            dismantle(root);
        }
    }
}

impl<T: Clone, C: Clone> Clone for PairingHeap<T, C> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.as_ref().and_then(Node::deep_clone),
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PairingHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairingHeap")
            .field("len", &self.len)
            .field("peek", &self.peek())
            .finish()
    }
}

impl<T, C: Comparator<T> + Default> Default for PairingHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T>> Heap<T> for PairingHeap<T, C> {
    fn is_empty(&self) -> bool {
        PairingHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        PairingHeap::len(self)
    }

    fn push(&mut self, item: T) -> usize {
        PairingHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        PairingHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        PairingHeap::pop(self)
    }
}

impl<T, C: Comparator<T>> MergeableHeap<T> for PairingHeap<T, C> {
    fn merge(&mut self, other: &mut Self) {
        self.append(other);
    }
}

impl<T, C: Comparator<T>> Extend<T> for PairingHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T: Ord> FromIterator<T> for PairingHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with(iter.into_iter().collect(), NaturalOrder)
    }
}

impl<T, C: Comparator<T>> IntoIterator for PairingHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;

    /// Yields the elements in priority order
    fn into_iter(self) -> IntoIter<T, C> {
        IntoIter::new(self)
    }
}

impl<'a, T, C> IntoIterator for &'a PairingHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
