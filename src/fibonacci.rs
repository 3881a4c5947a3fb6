//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a data structure for priority queue operations with:
//! - O(1) amortized insert and decrease_key
//! - O(log n) amortized extract_min
//!
//! The structure consists of a collection of heap-ordered trees. Roots are linked
//! in a circular doubly linked list, and so are the children of every node. The
//! heap maintains the key of the minimum root.
//!
//! Nodes live in a slot-map arena and refer to each other by [`NodeKey`], so the
//! rings are index arithmetic rather than raw pointers.
//!
//! # Example
//!
//! ```rust
//! use graph_heaps::fibonacci::FibonacciHeap;
//! use graph_heaps::PriorityQueue;
//!
//! let mut heap = FibonacciHeap::new(2);
//! heap.insert(5, 0);
//! heap.insert(7, 1);
//! heap.decrease_key(1, 1);
//! assert_eq!(heap.peek(), Some((1, 1)));
//! ```

use crate::storage::{NodeKey, ValueIndex};
use crate::traits::{HeapKind, Key, PriorityQueue, Value};
use slotmap::SlotMap;
use smallvec::SmallVec;

#[derive(Debug, Clone)]
struct Node {
    key: Key,
    value: Value,
    degree: usize,
    /// Lost a child since it last became a child itself
    marked: bool,
    parent: Option<NodeKey>,
    child: Option<NodeKey>,
    left: NodeKey,
    right: NodeKey,
}

/// Fibonacci Heap
#[derive(Debug, Clone)]
pub struct FibonacciHeap {
    nodes: SlotMap<NodeKey, Node>,
    min: Option<NodeKey>,
    handles: ValueIndex<NodeKey>,
    op_count: u64,
}

impl FibonacciHeap {
    /// Creates an empty heap that tracks values in `[0, max_vertices)`
    pub fn new(max_vertices: usize) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            min: None,
            handles: ValueIndex::new(max_vertices),
            op_count: 0,
        }
    }

    /// Number of trees in the root list
    pub fn root_count(&self) -> usize {
        self.min.map_or(0, |min| self.ring(min).len())
    }

    /// Collects a sibling ring starting at `start`
    fn ring(&self, start: NodeKey) -> Vec<NodeKey> {
        let mut members = vec![start];
        let mut current = self.nodes[start].right;
        while current != start {
            members.push(current);
            current = self.nodes[current].right;
        }
        members
    }

    /// Unlinks `node` from whatever ring it is in, leaving its own links stale
    fn remove_from_ring(&mut self, node: NodeKey) {
        let Node { left, right, .. } = self.nodes[node];
        self.nodes[left].right = right;
        self.nodes[right].left = left;
    }

    /// Splices `node` into the root list, right of the minimum
    ///
    /// Does not move the minimum; callers compare keys themselves.
    fn add_to_root_list(&mut self, node: NodeKey) {
        self.nodes[node].parent = None;
        let Some(min) = self.min else {
            self.nodes[node].left = node;
            self.nodes[node].right = node;
            self.min = Some(node);
            return;
        };
        let min_right = self.nodes[min].right;
        self.nodes[node].left = min;
        self.nodes[node].right = min_right;
        self.nodes[min_right].left = node;
        self.nodes[min].right = node;
    }

    /// Links root `y` as a child of root `x`
    fn link(&mut self, y: NodeKey, x: NodeKey) {
        self.remove_from_ring(y);
        match self.nodes[x].child {
            Some(child) => {
                let child_right = self.nodes[child].right;
                self.nodes[y].left = child;
                self.nodes[y].right = child_right;
                self.nodes[child_right].left = y;
                self.nodes[child].right = y;
            }
            None => {
                self.nodes[x].child = Some(y);
                self.nodes[y].left = y;
                self.nodes[y].right = y;
            }
        }
        self.nodes[y].parent = Some(x);
        self.nodes[y].marked = false;
        self.nodes[x].degree += 1;
    }

    /// Merges roots of equal degree until all root degrees are distinct
    fn consolidate(&mut self) {
        let Some(start) = self.min else {
            return;
        };
        let n = self.nodes.len();
        let initial = 2 * ((n + 1) as f64).log2() as usize + 2;
        let mut by_degree: SmallVec<[Option<NodeKey>; 64]> = SmallVec::from_elem(None, initial);

        for root in self.ring(start) {
            let mut x = root;
            let mut d = self.nodes[x].degree;
            loop {
                if d >= by_degree.len() {
                    let grown = by_degree.len() * 2 + 1;
                    by_degree.resize(grown, None);
                }
                let Some(mut y) = by_degree[d].take() else {
                    break;
                };
                if self.nodes[x].key > self.nodes[y].key {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                d += 1;
            }
            if d >= by_degree.len() {
                let grown = by_degree.len() * 2 + 1;
                by_degree.resize(grown, None);
            }
            by_degree[d] = Some(x);
        }

        // Rebuild the root list and find the new min
        self.min = None;
        for root in by_degree.into_iter().flatten() {
            let smaller = match self.min {
                Some(min) => self.nodes[root].key < self.nodes[min].key,
                None => false,
            };
            self.add_to_root_list(root);
            if smaller {
                self.min = Some(root);
            }
        }
    }

    /// Cuts `x` from its parent `y` and moves it to the root list
    fn cut(&mut self, x: NodeKey, y: NodeKey) {
        if self.nodes[x].right == x {
            self.nodes[y].child = None;
        } else {
            self.remove_from_ring(x);
            if self.nodes[y].child == Some(x) {
                self.nodes[y].child = Some(self.nodes[x].right);
            }
        }
        self.nodes[y].degree -= 1;
        self.add_to_root_list(x);
        self.nodes[x].marked = false;
    }

    /// Walks up from `y`, cutting marked ancestors until an unmarked one is marked
    ///
    /// Roots are never marked. Bounded by tree height, with no recursion.
    fn cascading_cut(&mut self, mut y: NodeKey) {
        while let Some(z) = self.nodes[y].parent {
            if !self.nodes[y].marked {
                self.nodes[y].marked = true;
                return;
            }
            self.cut(y, z);
            y = z;
        }
    }
}

impl PriorityQueue for FibonacciHeap {
    fn insert(&mut self, key: Key, value: Value) {
        let node = self.nodes.insert_with_key(|k| Node {
            key,
            value,
            degree: 0,
            marked: false,
            parent: None,
            child: None,
            left: k,
            right: k,
        });
        self.handles.set(value, node);

        let smaller = match self.min {
            Some(min) => key < self.nodes[min].key,
            None => false,
        };
        self.add_to_root_list(node);
        if smaller {
            self.min = Some(node);
        }
        self.op_count += 1;
    }

    fn extract_min(&mut self) -> Option<(Key, Value)> {
        let min = self.min?;

        // Promote children to the root list
        if let Some(child) = self.nodes[min].child.take() {
            for c in self.ring(child) {
                self.add_to_root_list(c);
                self.nodes[c].marked = false;
            }
        }

        if self.nodes[min].right == min {
            self.min = None;
        } else {
            self.remove_from_ring(min);
            self.min = Some(self.nodes[min].right);
            self.consolidate();
        }

        let node = self.nodes.remove(min)?;
        self.handles.clear(node.value);
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
        if let Some(parent) = self.nodes[node].parent {
            if new_key < self.nodes[parent].key {
                self.cut(node, parent);
                self.cascading_cut(parent);
            }
        }
        if let Some(min) = self.min {
            if new_key < self.nodes[min].key {
                self.min = Some(node);
            }
        }
        self.op_count += 1;
    }

    fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn peek(&self) -> Option<(Key, Value)> {
        self.min.map(|min| (self.nodes[min].key, self.nodes[min].value))
    }

    fn contains(&self, value: Value) -> bool {
        self.handles.contains(value)
    }

    fn operation_count(&self) -> u64 {
        self.op_count
    }

    fn kind(&self) -> HeapKind {
        HeapKind::Fibonacci
    }
}
