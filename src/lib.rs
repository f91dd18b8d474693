//! Indexed Priority Queue for Rust
//!
//! This crate provides a binary min-heap augmented with a value-to-position
//! index. The index lets the heap find any stored value in O(1) expected time,
//! which turns arbitrary removal and priority updates into O(log n)
//! operations instead of the O(n) scan a plain binary heap requires.
//!
//! # Features
//!
//! - **Indexed Binary Heap**: O(log n) insert, poll, remove-by-value and update-priority;
//!   O(1) peek and contains; O(n) bulk construction via heapify
//! - **Duplicates**: equal values may be stored any number of times; each occurrence is
//!   tracked separately
//! - **Breadth-first search**: a small level-order search over a generic node trait
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::IndexedBinaryHeap;
//!
//! let mut heap = IndexedBinaryHeap::from_vec(vec![5, 3, 8, 1, 9, 2]);
//! heap.update_priority(&9, 0).unwrap();
//! heap.remove(&3).unwrap();
//!
//! assert_eq!(heap.into_sorted_vec(), vec![0, 1, 2, 5, 8]);
//! ```

pub mod error;
pub mod indexed_binary;
mod position_index;
pub mod search;
pub mod traits;

// Re-export the main types for convenience
pub use error::{HeapError, Result};
pub use indexed_binary::IndexedBinaryHeap;
pub use traits::{IndexedPriorityQueue, PriorityQueue};
