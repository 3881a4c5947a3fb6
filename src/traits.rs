//! Common traits for the priority queues driving graph search
//!
//! This module defines the single capability the graph algorithms depend on:
//!
//! - [`PriorityQueue`]: insert / extract-min / decrease-key over integer keys,
//!   where the value doubles as a dense handle in `[0, max_vertices)`
//! - [`HeapKind`]: selects one of the three implementations at construction time
//!
//! Because values are dense vertex ids, no handle type is needed: every heap
//! keeps a value → node table so that `decrease_key(value, key)` can find the
//! live node without scanning.
//!
//! # Example
//!
//! ```rust
//! use graph_heaps::{new_heap, HeapKind, PriorityQueue};
//!
//! let mut heap = new_heap(HeapKind::Pairing, 4);
//! heap.insert(5, 0);
//! heap.insert(3, 1);
//! heap.decrease_key(0, 1);
//! assert_eq!(heap.extract_min(), Some((1, 0)));
//! assert_eq!(heap.operation_count(), 4);
//! ```

use crate::binary::BinaryHeap;
use crate::error::Error;
use crate::fibonacci::FibonacciHeap;
use crate::pairing::PairingHeap;
use std::fmt;
use std::str::FromStr;

/// Priority of a heap entry
pub type Key = i64;

/// Payload of a heap entry; also the dense handle used by `decrease_key`
pub type Value = usize;

/// Priority queue contract shared by every heap in this crate
///
/// # Preconditions
///
/// `insert` must not be called with a value that is already present. The
/// heaps do not defend against it; the algorithms in
/// [`algorithms`](crate::algorithms) never do it.
///
/// # Operation counter
///
/// [`operation_count`](PriorityQueue::operation_count) grows by one for every
/// insert, every extraction that returns `Some`, and every `decrease_key` that
/// actually lowers a present key. It is never reset.
pub trait PriorityQueue {
    /// Inserts `value` with priority `key`
    ///
    /// # Time Complexity
    /// O(log n) for the binary heap, O(1) amortized for Fibonacci and pairing heaps.
    fn insert(&mut self, key: Key, value: Value);

    /// Removes and returns the entry with the minimum key
    ///
    /// Returns `None` when the heap is empty. Among entries sharing the minimum
    /// key the choice is implementation-defined but deterministic.
    ///
    /// # Time Complexity
    /// O(log n), amortized for Fibonacci and pairing heaps.
    fn extract_min(&mut self) -> Option<(Key, Value)>;

    /// Lowers the key of `value` to `new_key`
    ///
    /// A silent no-op when `value` is absent or `new_key` is not strictly
    /// smaller than its current key.
    ///
    /// # Time Complexity
    /// - Binary heap: O(log n)
    /// - Fibonacci heap: O(1) amortized
    /// - Pairing heap: o(log n) amortized
    fn decrease_key(&mut self, value: Value, new_key: Key);

    /// Returns true if the heap holds no entries
    fn is_empty(&self) -> bool;

    /// Returns the number of entries in the heap
    fn len(&self) -> usize;

    /// Returns the entry `extract_min` would return, without removing it
    fn peek(&self) -> Option<(Key, Value)>;

    /// Returns true if `value` is currently present in the heap
    fn contains(&self, value: Value) -> bool;

    /// Number of effective operations since construction
    fn operation_count(&self) -> u64;

    /// Which implementation this is
    fn kind(&self) -> HeapKind;
}

impl<Q: PriorityQueue + ?Sized> PriorityQueue for Box<Q> {
    fn insert(&mut self, key: Key, value: Value) {
        (**self).insert(key, value)
    }

    fn extract_min(&mut self) -> Option<(Key, Value)> {
        (**self).extract_min()
    }

    fn decrease_key(&mut self, value: Value, new_key: Key) {
        (**self).decrease_key(value, new_key)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn peek(&self) -> Option<(Key, Value)> {
        (**self).peek()
    }

    fn contains(&self, value: Value) -> bool {
        (**self).contains(value)
    }

    fn operation_count(&self) -> u64 {
        (**self).operation_count()
    }

    fn kind(&self) -> HeapKind {
        (**self).kind()
    }
}

/// The heap implementations available through [`new_heap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapKind {
    /// Array-backed binary heap with a position index
    Binary,
    /// Fibonacci heap with lazy consolidation and cascading cuts
    Fibonacci,
    /// Pairing heap with two-pass merging
    Pairing,
}

impl HeapKind {
    /// Every kind, in benchmark order
    pub const ALL: [HeapKind; 3] = [HeapKind::Binary, HeapKind::Pairing, HeapKind::Fibonacci];

    /// Builds an empty heap of this kind able to track values in `[0, max_vertices)`
    pub fn build(self, max_vertices: usize) -> Box<dyn PriorityQueue> {
        match self {
            HeapKind::Binary => Box::new(BinaryHeap::new(max_vertices)),
            HeapKind::Fibonacci => Box::new(FibonacciHeap::new(max_vertices)),
            HeapKind::Pairing => Box::new(PairingHeap::new(max_vertices)),
        }
    }

    /// Human-readable name, as used in benchmark output
    pub fn name(self) -> &'static str {
        match self {
            HeapKind::Binary => "Binary",
            HeapKind::Fibonacci => "Fibonacci",
            HeapKind::Pairing => "Pairing",
        }
    }
}

impl fmt::Display for HeapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeapKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" => Ok(HeapKind::Binary),
            "fibonacci" | "fib" => Ok(HeapKind::Fibonacci),
            "pairing" => Ok(HeapKind::Pairing),
            _ => Err(Error::UnknownHeapKind(s.to_string())),
        }
    }
}

/// Creates an empty heap of the given kind
///
/// Values outside `[0, max_vertices)` can still be inserted and extracted,
/// but `decrease_key` and `contains` ignore them.
pub fn new_heap(kind: HeapKind, max_vertices: usize) -> Box<dyn PriorityQueue> {
    kind.build(max_vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip_through_name() {
        for kind in HeapKind::ALL {
            assert_eq!(kind.to_string().parse::<HeapKind>().unwrap(), kind);
        }
        assert_eq!("FIB".parse::<HeapKind>().unwrap(), HeapKind::Fibonacci);
    }

    #[test]
    fn test_benchmark_order() {
        assert_eq!(
            HeapKind::ALL,
            [HeapKind::Binary, HeapKind::Pairing, HeapKind::Fibonacci]
        );
    }

    #[test]
    fn test_unknown_kind() {
        let err = "radix".parse::<HeapKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownHeapKind(ref s) if s == "radix"));
    }

    #[test]
    fn test_factory_reports_kind() {
        for kind in HeapKind::ALL {
            let heap = new_heap(kind, 8);
            assert_eq!(heap.kind(), kind);
            assert!(heap.is_empty());
            assert_eq!(heap.operation_count(), 0);
        }
    }

    #[test]
    fn test_boxed_heap_forwards() {
        let mut heap: Box<dyn PriorityQueue> = new_heap(HeapKind::Binary, 2);
        heap.insert(4, 1);
        assert!(heap.contains(1));
        assert_eq!(heap.peek(), Some((4, 1)));
        assert_eq!(heap.len(), 1);
    }
}
