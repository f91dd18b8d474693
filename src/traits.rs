//! Common traits for priority queues
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`PriorityQueue`]: Base trait mirroring the `BinaryHeap` API (min-first)
//! - [`IndexedPriorityQueue`]: Extended trait adding lookup, removal and
//!   priority updates addressed by value
//!
//! Unlike heaps that store `(priority, item)` pairs, these queues order the
//! elements themselves. Wrap elements in `std::cmp::Reverse` for max-first
//! behaviour, or in a tuple such as `(cost, node)` to carry a payload.

use crate::error::Result;

/// Base trait for priority queue data structures
///
/// # Example
///
/// ```rust
/// use indexed_heap::PriorityQueue;
/// use indexed_heap::IndexedBinaryHeap;
///
/// let mut heap = IndexedBinaryHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(PriorityQueue::peek(&heap), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait PriorityQueue<T: Ord> {
    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    fn push(&mut self, item: T);

    /// Returns the smallest element without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these queues are min-first.
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the smallest element
    fn pop(&mut self) -> Option<T>;
}

/// Extended priority queue trait with value-addressed operations
///
/// Values act as their own handles: any value equal to a stored element
/// identifies one occurrence of it. When a value occurs more than once the
/// occurrence in the lowest array slot is chosen, so the choice is
/// deterministic for a given sequence of operations.
///
/// # Example
///
/// ```rust
/// use indexed_heap::{IndexedBinaryHeap, IndexedPriorityQueue, PriorityQueue};
///
/// let mut heap = IndexedBinaryHeap::from_vec(vec![10, 20, 30]);
/// heap.update_priority(&30, 5).unwrap();
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(IndexedPriorityQueue::remove(&mut heap, &20), Ok(20));
/// ```
pub trait IndexedPriorityQueue<T: Ord>: PriorityQueue<T> {
    /// Returns true if some element equal to `item` is stored
    ///
    /// # Time Complexity
    /// O(1) expected
    fn contains(&self, item: &T) -> bool;

    /// Removes one occurrence of `item`
    ///
    /// # Errors
    /// Returns [`HeapError::NotFound`](crate::HeapError::NotFound) if `item`
    /// is not stored.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove(&mut self, item: &T) -> Result<T>;

    /// Replaces one occurrence of `item` with `new_item`, returning the old value
    ///
    /// The new value may order either before or after the old one.
    ///
    /// # Errors
    /// Returns [`HeapError::NotFound`](crate::HeapError::NotFound) if `item`
    /// is not stored.
    ///
    /// # Time Complexity
    /// O(log n)
    fn update_priority(&mut self, item: &T, new_item: T) -> Result<T>;
}
