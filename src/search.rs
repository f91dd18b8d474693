//! Breadth-first search over a generic node abstraction
//!
//! The node type describes the graph implicitly: each node exposes a value
//! and produces its neighbours on demand. Visited bookkeeping lives in a
//! hash set owned by the search, so nodes need no mutable "visited" flag and
//! the same graph can be searched any number of times.
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::search::{breadth_first_search, GraphNode};
//!
//! // A node in the infinite binary tree rooted at 1
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! struct TreeNode(u32);
//!
//! impl GraphNode for TreeNode {
//!     type Value = u32;
//!
//!     fn value(&self) -> &u32 {
//!         &self.0
//!     }
//!
//!     fn neighbors(&self) -> Vec<Self> {
//!         if self.0 < 64 {
//!             vec![TreeNode(self.0 * 2), TreeNode(self.0 * 2 + 1)]
//!         } else {
//!             vec![]
//!         }
//!     }
//! }
//!
//! assert_eq!(breadth_first_search(&TreeNode(1), &11), Some(TreeNode(11)));
//! assert_eq!(breadth_first_search(&TreeNode(1), &500), None);
//! ```

use std::collections::VecDeque;
use std::hash::Hash;

use log::{debug, trace};
use rustc_hash::FxHashSet;

/// Trait for nodes in a searchable graph.
///
/// Node identity comes from `Eq + Hash`: two nodes that compare equal are
/// the same vertex and are visited once.
pub trait GraphNode: Clone + Eq + Hash {
    /// The payload matched against the search key
    type Value: PartialEq;

    /// Returns the value carried by this node
    fn value(&self) -> &Self::Value;

    /// Returns the nodes adjacent to this one
    fn neighbors(&self) -> Vec<Self>;
}

/// Finds the first node, in breadth-first order from `start`, whose value equals `target`.
///
/// `start` itself is checked first. Every reachable node is discovered at
/// most once, so the search runs in O(V + E).
///
/// # Returns
/// - `Some(node)` for the first match in level order
/// - `None` if every reachable node has been examined without a match
pub fn breadth_first_search<N: GraphNode>(start: &N, target: &N::Value) -> Option<N> {
    if start.value() == target {
        debug!("breadth-first search matched the start node");
        return Some(start.clone());
    }

    let mut visited: FxHashSet<N> = FxHashSet::default();
    let mut queue = VecDeque::new();
    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(node) = queue.pop_front() {
        for neighbor in node.neighbors() {
            if visited.contains(&neighbor) {
                continue;
            }
            if neighbor.value() == target {
                debug!(
                    "breadth-first search matched after visiting {} nodes",
                    visited.len()
                );
                return Some(neighbor);
            }
            visited.insert(neighbor.clone());
            queue.push_back(neighbor);
        }
        trace!("breadth-first frontier holds {} nodes", queue.len());
    }

    debug!(
        "breadth-first search exhausted {} nodes without a match",
        visited.len()
    );
    None
}

/// Returns every node reachable from `start`, in breadth-first order.
///
/// The first element is always `start`.
pub fn breadth_first_order<N: GraphNode>(start: &N) -> Vec<N> {
    let mut visited: FxHashSet<N> = FxHashSet::default();
    let mut queue = VecDeque::new();
    let mut order = Vec::new();
    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(node) = queue.pop_front() {
        for neighbor in node.neighbors() {
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor);
            }
        }
        order.push(node);
    }

    trace!("breadth-first order visited {} nodes", order.len());
    order
}
