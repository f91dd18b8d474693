//! Indexed Binary Heap implementation
//!
//! A binary min-heap stored in a vector, paired with a [`PositionIndex`] that
//! maps every stored value to the slots holding it. The index turns the O(n)
//! scan a plain binary heap needs for `contains`, `remove` and priority
//! updates into a hash lookup followed by an O(log n) repair.
//!
//! Elements are their own priorities and may repeat. Each array slot is a
//! distinct occurrence; value-addressed operations act on the occurrence in
//! the lowest slot.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity        |
//! |-------------------|-------------------|
//! | `insert`          | O(log n) amortized|
//! | `poll`            | O(log n)          |
//! | `peek`            | O(1)              |
//! | `contains`        | O(1) expected     |
//! | `remove`          | O(log n)          |
//! | `remove_at`       | O(log n)          |
//! | `update_priority` | O(log n)          |
//! | `from_vec`        | O(n)              |
//! | `from_collection` | O(n log n)        |
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::IndexedBinaryHeap;
//!
//! let mut heap = IndexedBinaryHeap::new();
//! heap.insert(5);
//! heap.insert(3);
//! heap.insert(8);
//!
//! assert_eq!(heap.peek(), Ok(&3));
//! assert!(heap.contains(&8));
//!
//! heap.update_priority(&8, 1).unwrap();
//! assert_eq!(heap.poll(), Ok(1));
//! assert_eq!(heap.remove(&5), Ok(5));
//! assert_eq!(heap.poll(), Ok(3));
//! assert!(heap.poll().is_err());
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use log::trace;
use rustc_hash::FxBuildHasher;

use crate::error::{HeapError, Result};
use crate::position_index::PositionIndex;
use crate::traits::{IndexedPriorityQueue, PriorityQueue};

/// A binary min-heap with a value-to-position index
///
/// `T` supplies the ordering through `Ord`; its `Hash`/`Eq` must agree with
/// that ordering. `S` is the hasher used by the position index and defaults
/// to FxHash.
#[derive(Clone)]
pub struct IndexedBinaryHeap<T, S = FxBuildHasher> {
    /// Complete binary tree in level order
    data: Vec<T>,
    positions: PositionIndex<T, S>,
}

impl<T> IndexedBinaryHeap<T>
where
    T: Ord + Hash + Clone,
{
    /// Creates an empty heap
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty heap with room for at least `capacity` elements
    ///
    /// A capacity of zero is rounded up to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher)
    }

    /// Builds a heap from `elements` in O(n) using bottom-up heapify
    ///
    /// ```rust
    /// use indexed_heap::IndexedBinaryHeap;
    ///
    /// let heap = IndexedBinaryHeap::from_vec(vec![4, 4, 1, 1, 2]);
    /// assert_eq!(heap.count(&1), 2);
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 1, 2, 4, 4]);
    /// ```
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_vec_with_hasher(elements, FxBuildHasher)
    }

    /// Builds a heap by inserting each element in turn, O(n log n)
    ///
    /// The result drains in the same order as [`from_vec`](Self::from_vec)
    /// over the same multiset, although the internal layout may differ.
    pub fn from_collection<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let elements = elements.into_iter();
        let mut heap = Self::with_capacity(elements.size_hint().0);
        heap.extend(elements);
        heap
    }
}

impl<T, S> IndexedBinaryHeap<T, S>
where
    T: Ord + Hash + Clone,
    S: BuildHasher,
{
    /// Creates an empty heap whose position index uses `hasher`
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(1, hasher)
    }

    /// Creates an empty heap with the given capacity and index hasher
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            data: Vec::with_capacity(capacity.max(1)),
            positions: PositionIndex::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Heapifies `elements` using `hasher` for the position index
    pub fn from_vec_with_hasher(elements: Vec<T>, hasher: S) -> Self {
        let mut positions = PositionIndex::with_capacity_and_hasher(elements.len(), hasher);
        for (slot, value) in elements.iter().enumerate() {
            positions.insert(value.clone(), slot);
        }

        let mut heap = Self {
            data: elements,
            positions,
        };
        heap.heapify();
        heap
    }

    /// Returns the hasher used by the position index
    pub fn hasher(&self) -> &S {
        self.positions.hasher()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the smallest element
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Returns true if some slot holds a value equal to `value`
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains(value)
    }

    /// Returns the number of occurrences of `value`
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.count(value)
    }

    /// Returns the lowest array slot holding `value`
    ///
    /// Slots are positions in [`as_slice`](Self::as_slice) and can be passed
    /// to [`remove_at`](Self::remove_at) or [`update_at`](Self::update_at).
    pub fn position<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.first(value)
    }

    /// Inserts an element
    pub fn insert(&mut self, value: T) {
        let slot = self.data.len();
        if slot == self.data.capacity() {
            trace!("indexed heap growing past {} slots", slot);
        }
        self.positions.insert(value.clone(), slot);
        self.data.push(value);
        self.swim(slot);
    }

    /// Removes and returns the smallest element
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn poll(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        self.remove_at(0)
    }

    /// Removes and returns the element in array slot `index`
    ///
    /// # Errors
    /// [`HeapError::InvalidArgument`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.data.len();
        if index >= len {
            return Err(HeapError::InvalidArgument { index, len });
        }

        let last = len - 1;
        // The last element takes over `index`
        let removed = self.data.swap_remove(index);
        self.positions.remove(&removed, index);

        if index != last {
            self.positions.relocate(&self.data[index], last, index);
            if self.sink(index) == index {
                self.swim(index);
            }
        }

        Ok(removed)
    }

    /// Removes one occurrence of `value`, the one in the lowest slot
    ///
    /// # Errors
    /// [`HeapError::NotFound`] if no slot holds `value`.
    pub fn remove<Q>(&mut self, value: &Q) -> Result<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.positions.first(value).ok_or(HeapError::NotFound)?;
        self.remove_at(slot)
    }

    /// Replaces the element in slot `index` with `new_value`, returning the old one
    ///
    /// # Errors
    /// [`HeapError::InvalidArgument`] if `index >= len()`.
    pub fn update_at(&mut self, index: usize, new_value: T) -> Result<T> {
        let len = self.data.len();
        if index >= len {
            return Err(HeapError::InvalidArgument { index, len });
        }

        self.positions.remove(&self.data[index], index);
        self.positions.insert(new_value.clone(), index);
        let old = std::mem::replace(&mut self.data[index], new_value);

        // The heap was valid before, so at most one direction moves
        if self.sink(index) == index {
            self.swim(index);
        }

        Ok(old)
    }

    /// Replaces one occurrence of `value` with `new_value`, returning the old one
    ///
    /// # Errors
    /// [`HeapError::NotFound`] if no slot holds `value`.
    pub fn update_priority<Q>(&mut self, value: &Q, new_value: T) -> Result<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.positions.first(value).ok_or(HeapError::NotFound)?;
        self.update_at(slot, new_value)
    }

    /// Removes every element, keeping the allocated capacity
    pub fn clear(&mut self) {
        trace!("clearing indexed heap of {} elements", self.data.len());
        self.data.clear();
        self.positions.clear();
    }

    /// Releases unused capacity, keeping room for at least one element
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to(1);
        self.positions.shrink_to_fit();
    }

    /// Iterates over the elements in array order, which is not sorted
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the underlying array in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning the array in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning the elements in ascending order
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut data = self.data;
        data.sort();
        data
    }

    /// Removes the elements in ascending order
    ///
    /// Elements not consumed by the iterator are removed when it is dropped.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, S> {
        DrainSorted { heap: self }
    }

    /// Checks the heap-order property and the consistency of the position index
    ///
    /// Runs in O(n). Every public operation preserves both, so this only
    /// returns false if `T`'s `Ord` and `Eq`/`Hash` disagree or a stored
    /// element was mutated through interior mutability.
    pub fn is_valid(&self) -> bool {
        let ordered = (1..self.data.len()).all(|i| self.data[(i - 1) / 2] <= self.data[i]);
        let indexed = self
            .data
            .iter()
            .enumerate()
            .all(|(slot, value)| self.positions.slots_of(value).binary_search(&slot).is_ok());

        ordered && indexed && self.positions.slot_count() == self.data.len()
    }

    fn heapify(&mut self) {
        trace!("heapifying {} elements", self.data.len());
        for slot in (0..self.data.len() / 2).rev() {
            self.sink(slot);
        }
    }

    /// Exchanges two slots, keeping the position index in step
    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.data.swap(i, j);
        // Equal values share one slot set that already lists both slots
        if self.data[i] != self.data[j] {
            self.positions.relocate(&self.data[i], j, i);
            self.positions.relocate(&self.data[j], i, j);
        }
    }

    /// Move element at index up to maintain heap property, returning where it stopped
    fn swim(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] < self.data[parent] {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Move element at index down to maintain heap property, returning where it stopped
    fn sink(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            if left >= len {
                break;
            }

            let smallest = if right < len && self.data[right] < self.data[left] {
                right
            } else {
                left
            };

            if self.data[smallest] < self.data[index] {
                self.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
        index
    }
}

impl<T, S> PriorityQueue<T> for IndexedBinaryHeap<T, S>
where
    T: Ord + Hash + Clone,
    S: BuildHasher,
{
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        self.poll().ok()
    }
}

impl<T, S> IndexedPriorityQueue<T> for IndexedBinaryHeap<T, S>
where
    T: Ord + Hash + Clone,
    S: BuildHasher,
{
    fn contains(&self, item: &T) -> bool {
        self.positions.contains(item)
    }

    fn remove(&mut self, item: &T) -> Result<T> {
        IndexedBinaryHeap::remove(self, item)
    }

    fn update_priority(&mut self, item: &T, new_item: T) -> Result<T> {
        IndexedBinaryHeap::update_priority(self, item, new_item)
    }
}

impl<T, S> Default for IndexedBinaryHeap<T, S>
where
    T: Ord + Hash + Clone,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: fmt::Debug, S> fmt::Debug for IndexedBinaryHeap<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedBinaryHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T, S> From<Vec<T>> for IndexedBinaryHeap<T, S>
where
    T: Ord + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec_with_hasher(elements, S::default())
    }
}

impl<T, S> FromIterator<T> for IndexedBinaryHeap<T, S>
where
    T: Ord + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, S> Extend<T> for IndexedBinaryHeap<T, S>
where
    T: Ord + Hash + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, S> IntoIterator for &'a IndexedBinaryHeap<T, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T, S> IntoIterator for IndexedBinaryHeap<T, S> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields the elements in array order
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Draining iterator returned by [`IndexedBinaryHeap::drain_sorted`]
pub struct DrainSorted<'a, T, S>
where
    T: Ord + Hash + Clone,
    S: BuildHasher,
{
    heap: &'a mut IndexedBinaryHeap<T, S>,
}

impl<T, S> Iterator for DrainSorted<'_, T, S>
where
    T: Ord + Hash + Clone,
    S: BuildHasher,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.poll().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, S> ExactSizeIterator for DrainSorted<'_, T, S>
where
    T: Ord + Hash + Clone,
    S: BuildHasher,
{
}

impl<T, S> FusedIterator for DrainSorted<'_, T, S>
where
    T: Ord + Hash + Clone,
    S: BuildHasher,
{
}

impl<T, S> Drop for DrainSorted<'_, T, S>
where
    T: Ord + Hash + Clone,
    S: BuildHasher,
{
    fn drop(&mut self) {
        self.heap.clear();
    }
}
