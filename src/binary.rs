//! Binary Heap implementation
//!
//! A binary min-heap stored in a vector and viewed as a complete binary tree:
//! the parent of index `i` is `(i - 1) / 2`, its children are `2i + 1` and
//! `2i + 2`. A position index maps every value to its current slot, so
//! `decrease_key` is a lookup followed by a sift-up.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `extract_min`  | O(log n)   |
//! | `decrease_key` | O(log n)   |
//! | `peek`         | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use graph_heaps::binary::BinaryHeap;
//! use graph_heaps::PriorityQueue;
//!
//! let mut heap = BinaryHeap::new(3);
//! heap.insert(3, 0);
//! heap.insert(1, 1);
//! heap.insert(2, 2);
//!
//! heap.decrease_key(0, 0);
//! assert_eq!(heap.extract_min(), Some((0, 0)));
//! assert_eq!(heap.extract_min(), Some((1, 1)));
//! assert_eq!(heap.extract_min(), Some((2, 2)));
//! assert_eq!(heap.extract_min(), None);
//! ```

use crate::storage::ValueIndex;
use crate::traits::{HeapKind, Key, PriorityQueue, Value};

/// A binary min-heap with a value → slot position index
#[derive(Debug, Clone)]
pub struct BinaryHeap {
    /// The heap data stored as a vector of (key, value) pairs
    data: Vec<(Key, Value)>,
    /// Current slot in `data` of every present value
    position: ValueIndex<usize>,
    op_count: u64,
}

impl BinaryHeap {
    /// Creates an empty heap that tracks values in `[0, max_vertices)`
    pub fn new(max_vertices: usize) -> Self {
        Self {
            data: Vec::new(),
            position: ValueIndex::new(max_vertices),
            op_count: 0,
        }
    }

    /// Swaps two slots and keeps the position index in step
    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.position.set(self.data[a].1, a);
        self.position.set(self.data[b].1, b);
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[parent].0 <= self.data[index].0 {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left].0 < self.data[smallest].0 {
                smallest = left;
            }
            if right < len && self.data[right].0 < self.data[smallest].0 {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }
}

impl PriorityQueue for BinaryHeap {
    fn insert(&mut self, key: Key, value: Value) {
        let index = self.data.len();
        self.data.push((key, value));
        self.position.set(value, index);
        self.sift_up(index);
        self.op_count += 1;
    }

    fn extract_min(&mut self) -> Option<(Key, Value)> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let (key, value) = self.data.pop()?;
        self.position.clear(value);

        if let Some(&(_, moved)) = self.data.first() {
            self.position.set(moved, 0);
            self.sift_down(0);
        }

        self.op_count += 1;
        Some((key, value))
    }

    fn decrease_key(&mut self, value: Value, new_key: Key) {
        let Some(index) = self.position.get(value) else {
            return;
        };
        if new_key >= self.data[index].0 {
            return;
        }
        self.data[index].0 = new_key;
        // A lowered key can only move towards the root
        self.sift_up(index);
        self.op_count += 1;
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn peek(&self) -> Option<(Key, Value)> {
        self.data.first().copied()
    }

    fn contains(&self, value: Value) -> bool {
        self.position.contains(value)
    }

    fn operation_count(&self) -> u64 {
        self.op_count
    }

    fn kind(&self) -> HeapKind {
        HeapKind::Binary
    }
}
