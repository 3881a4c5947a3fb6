//! Node storage shared by the heap implementations
//!
//! This module provides the two pieces of bookkeeping every heap needs:
//!
//! - [`NodeKey`]: arena key for linked heap nodes. The Fibonacci and pairing
//!   heaps keep their nodes in a `SlotMap<NodeKey, _>`, so links are plain
//!   `Copy` keys instead of pointers, and reclaimed slots are reused through
//!   the slot map's free list.
//! - [`ValueIndex`]: the value → node table that makes `decrease_key(value, _)`
//!   an O(1) lookup.
//!
//! # Design
//!
//! A node is created by `SlotMap::insert` and destroyed only by
//! `SlotMap::remove` during extract-min; whatever is still stored when the
//! heap is dropped goes with the arena. Generational keys make a stale key
//! fail loudly on indexing instead of aliasing a reused slot.

use crate::traits::Value;
use slotmap::new_key_type;

new_key_type! {
    /// Key of a node stored in a heap's arena
    pub struct NodeKey;
}

/// Fixed-capacity mapping from dense values to the node currently holding them
///
/// The table is sized once, to the maximum number of vertices the heap was
/// built for. Values outside `[0, capacity)` are ignored by every method:
/// `get` returns `None` and `set`/`clear` do nothing.
///
/// # Example
///
/// ```rust
/// use graph_heaps::storage::ValueIndex;
///
/// let mut index: ValueIndex<usize> = ValueIndex::new(2);
/// index.set(1, 42);
/// index.set(9, 7); // out of range: ignored
/// assert_eq!(index.get(1), Some(42));
/// assert_eq!(index.get(9), None);
/// ```
#[derive(Debug, Clone)]
pub struct ValueIndex<K> {
    slots: Vec<Option<K>>,
}

impl<K: Copy> ValueIndex<K> {
    /// Creates an empty table for values in `[0, capacity)`
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Number of values this table can track
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the entry for `value`, if present and in range
    #[inline]
    pub fn get(&self, value: Value) -> Option<K> {
        self.slots.get(value).copied().flatten()
    }

    /// Records `entry` for `value`
    #[inline]
    pub fn set(&mut self, value: Value, entry: K) {
        if let Some(slot) = self.slots.get_mut(value) {
            *slot = Some(entry);
        }
    }

    /// Forgets `value`, returning its previous entry
    #[inline]
    pub fn clear(&mut self, value: Value) -> Option<K> {
        self.slots.get_mut(value).and_then(Option::take)
    }

    /// Returns true if `value` has an entry
    #[inline]
    pub fn contains(&self, value: Value) -> bool {
        self.get(value).is_some()
    }

    /// Number of values with an entry
    pub fn count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
