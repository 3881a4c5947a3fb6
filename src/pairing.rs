//! Pairing Heap implementation
//!
//! A pairing heap is a single heap-ordered multi-way tree with:
//! - O(1) amortized insert
//! - O(log n) amortized extract_min
//! - o(log n) amortized decrease_key (in fact, better than log n in practice)
//!
//! The pairing heap is simpler than Fibonacci heaps while still providing
//! excellent amortized performance for decrease_key operations.
//!
//! Children of a node form a list through `child`/`sibling` links, with a
//! `prev` back-pointer (parent for a first child, left sibling otherwise) so a
//! node can be spliced out in O(1). Every node carries an insertion sequence
//! number that breaks key ties, which makes equal-key extraction order
//! reproducible.
//!
//! # Example
//!
//! ```rust
//! use graph_heaps::pairing::PairingHeap;
//! use graph_heaps::PriorityQueue;
//!
//! let mut heap = PairingHeap::new(2);
//! heap.insert(5, 0);
//! heap.insert(5, 1);
//! heap.decrease_key(1, 1);
//! assert_eq!(heap.extract_min(), Some((1, 1)));
//! assert_eq!(heap.extract_min(), Some((5, 0)));
//! ```

use crate::storage::{NodeKey, ValueIndex};
use crate::traits::{HeapKind, Key, PriorityQueue, Value};
use rustc_hash::FxHashSet;
use slotmap::SlotMap;

#[derive(Debug, Clone)]
struct Node {
    key: Key,
    value: Value,
    seq: u64,
    child: Option<NodeKey>,
    sibling: Option<NodeKey>,
    prev: Option<NodeKey>,
}

/// Pairing Heap
#[derive(Debug, Clone)]
pub struct PairingHeap {
    nodes: SlotMap<NodeKey, Node>,
    root: Option<NodeKey>,
    handles: ValueIndex<NodeKey>,
    next_seq: u64,
    op_count: u64,
}

impl PairingHeap {
    /// Creates an empty heap that tracks values in `[0, max_vertices)`
    pub fn new(max_vertices: usize) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
            handles: ValueIndex::new(max_vertices),
            next_seq: 0,
            op_count: 0,
        }
    }

    /// Number of children of the root
    pub fn root_degree(&self) -> usize {
        let mut degree = 0;
        let mut current = self.root.and_then(|r| self.nodes[r].child);
        while let Some(node) = current {
            degree += 1;
            current = self.nodes[node].sibling;
        }
        degree
    }

    /// Orders by key, then by insertion sequence
    #[inline]
    fn precedes(&self, a: NodeKey, b: NodeKey) -> bool {
        let (a, b) = (&self.nodes[a], &self.nodes[b]);
        (a.key, a.seq) < (b.key, b.seq)
    }

    /// Merges two roots, making the loser the leftmost child of the winner
    ///
    /// Both arguments must be detached roots (no sibling, no prev).
    fn merge(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        if a == b {
            return a;
        }
        let (winner, loser) = if self.precedes(a, b) { (a, b) } else { (b, a) };

        let first_child = self.nodes[winner].child;
        self.nodes[loser].sibling = first_child;
        if let Some(child) = first_child {
            self.nodes[child].prev = Some(loser);
        }
        self.nodes[winner].child = Some(loser);
        self.nodes[loser].prev = Some(winner);
        winner
    }

    /// Collapses a sibling list into a single tree
    ///
    /// Pass one merges adjacent pairs left to right; pass two folds the
    /// results right to left.
    fn two_pass_merge(&mut self, first: NodeKey) -> NodeKey {
        let mut trees = Vec::new();
        let mut seen = FxHashSet::default();
        let mut current = Some(first);
        while let Some(node) = current {
            // A revisited node means the sibling chain is corrupt
            if !seen.insert(node) {
                break;
            }
            trees.push(node);
            current = self.nodes[node].sibling;
        }

        // Detach everything first so no merge overwrites a link still to be read
        for &node in &trees {
            self.nodes[node].sibling = None;
            self.nodes[node].prev = None;
        }

        let mut paired = Vec::with_capacity(trees.len().div_ceil(2));
        for pair in trees.chunks(2) {
            match *pair {
                [a, b] => paired.push(self.merge(a, b)),
                [a] => paired.push(a),
                _ => unreachable!(),
            }
        }

        let mut result = paired.pop().unwrap_or(first);
        while let Some(tree) = paired.pop() {
            result = self.merge(tree, result);
        }
        result
    }

    /// Splices a non-root node out of its parent's child list
    fn detach(&mut self, node: NodeKey) {
        let Some(prev) = self.nodes[node].prev else {
            return;
        };
        let sibling = self.nodes[node].sibling;
        if self.nodes[prev].child == Some(node) {
            self.nodes[prev].child = sibling;
        } else {
            self.nodes[prev].sibling = sibling;
        }
        if let Some(sibling) = sibling {
            self.nodes[sibling].prev = Some(prev);
        }
        self.nodes[node].sibling = None;
        self.nodes[node].prev = None;
    }
}

impl PriorityQueue for PairingHeap {
    fn insert(&mut self, key: Key, value: Value) {
        let node = self.nodes.insert(Node {
            key,
            value,
            seq: self.next_seq,
            child: None,
            sibling: None,
            prev: None,
        });
        self.next_seq += 1;
        self.handles.set(value, node);

        self.root = Some(match self.root {
            Some(root) => self.merge(root, node),
            None => node,
        });
        self.op_count += 1;
    }

    fn extract_min(&mut self) -> Option<(Key, Value)> {
        let root = self.root?;
        let node = self.nodes.remove(root)?;
        self.handles.clear(node.value);

        self.root = node.child.map(|first| self.two_pass_merge(first));
        self.op_count += 1;
        Some((node.key, node.value))
    }

    fn decrease_key(&mut self, value: Value, new_key: Key) {
        let Some(node) = self.handles.get(value) else {
            return;
        };
        if new_key >= self.nodes[node].key {
            return;
        }

        self.nodes[node].key = new_key;
        self.op_count += 1;

        let Some(root) = self.root else {
            return;
        };
        if root == node {
            return;
        }
        self.detach(node);
        self.root = Some(self.merge(node, root));
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn peek(&self) -> Option<(Key, Value)> {
        self.root.map(|root| (self.nodes[root].key, self.nodes[root].value))
    }

    fn contains(&self, value: Value) -> bool {
        self.handles.contains(value)
    }

    fn operation_count(&self) -> u64 {
        self.op_count
    }

    fn kind(&self) -> HeapKind {
        HeapKind::Pairing
    }
}
