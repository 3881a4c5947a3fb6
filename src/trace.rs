//! Extraction tracing for comparing heap implementations
//!
//! [`TracingQueue`] wraps any [`PriorityQueue`] and records every successful
//! extraction. Running Prim through two traced heaps on the same graph and
//! comparing the sequences pinpoints the first extraction where the heaps
//! disagree, which is where a tie-breaking or bookkeeping bug shows up.
//!
//! # Example
//!
//! ```rust
//! use graph_heaps::trace::{compare_traces, trace_prim};
//! use graph_heaps::{Graph, HeapKind, new_heap};
//!
//! let mut graph = Graph::new(3);
//! graph.add_undirected_edge(0, 1, 1).unwrap();
//! graph.add_undirected_edge(1, 2, 1).unwrap();
//!
//! let binary = trace_prim(&graph, 0, &mut new_heap(HeapKind::Binary, 3)).unwrap();
//! let pairing = trace_prim(&graph, 0, &mut new_heap(HeapKind::Pairing, 3)).unwrap();
//! let comparison = compare_traces(&binary, &pairing);
//! assert!(comparison.totals_match());
//! assert_eq!(comparison.first_divergence, None);
//! ```

use crate::algorithms::prim;
use crate::error::Result;
use crate::graph::{Graph, Weight};
use crate::traits::{HeapKind, Key, PriorityQueue, Value};
use std::fmt;

/// A priority queue that records every `(key, value)` it hands out
#[derive(Debug)]
pub struct TracingQueue<'a, Q: PriorityQueue + ?Sized> {
    inner: &'a mut Q,
    extracted: Vec<(Key, Value)>,
}

impl<'a, Q: PriorityQueue + ?Sized> TracingQueue<'a, Q> {
    /// Wraps `inner`; all calls are forwarded to it
    pub fn new(inner: &'a mut Q) -> Self {
        Self {
            inner,
            extracted: Vec::new(),
        }
    }

    /// Extractions recorded so far, in order
    pub fn extracted(&self) -> &[(Key, Value)] {
        &self.extracted
    }

    /// Releases the wrapped queue and returns the recorded extractions
    pub fn into_extracted(self) -> Vec<(Key, Value)> {
        self.extracted
    }
}

impl<Q: PriorityQueue + ?Sized> PriorityQueue for TracingQueue<'_, Q> {
    fn insert(&mut self, key: Key, value: Value) {
        self.inner.insert(key, value)
    }

    fn extract_min(&mut self) -> Option<(Key, Value)> {
        let entry = self.inner.extract_min()?;
        self.extracted.push(entry);
        Some(entry)
    }

    fn decrease_key(&mut self, value: Value, new_key: Key) {
        self.inner.decrease_key(value, new_key)
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn peek(&self) -> Option<(Key, Value)> {
        self.inner.peek()
    }

    fn contains(&self, value: Value) -> bool {
        self.inner.contains(value)
    }

    fn operation_count(&self) -> u64 {
        self.inner.operation_count()
    }

    fn kind(&self) -> HeapKind {
        self.inner.kind()
    }
}

/// Prim run together with its extraction sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimTrace {
    pub kind: HeapKind,
    pub extracted: Vec<(Key, Value)>,
    pub total_weight: Weight,
    pub operations: u64,
}

impl PrimTrace {
    /// Extractions of an already settled vertex (always zero for a correct run)
    pub fn duplicate_extractions(&self) -> usize {
        let mut seen = rustc_hash::FxHashSet::default();
        self.extracted
            .iter()
            .filter(|(_, value)| !seen.insert(*value))
            .count()
    }
}

/// Runs Prim from `start` through a [`TracingQueue`]
pub fn trace_prim<Q>(graph: &Graph, start: Value, heap: &mut Q) -> Result<PrimTrace>
where
    Q: PriorityQueue + ?Sized,
{
    let kind = heap.kind();
    let mut traced = TracingQueue::new(heap);
    let tree = prim(graph, start, &mut traced)?;
    let operations = traced.operation_count();
    Ok(PrimTrace {
        kind,
        extracted: traced.into_extracted(),
        total_weight: tree.total_weight,
        operations,
    })
}

/// Outcome of comparing two traces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceComparison {
    pub left: HeapKind,
    pub right: HeapKind,
    pub left_total: Weight,
    pub right_total: Weight,
    /// First index at which the sequences differ, including a length mismatch
    pub first_divergence: Option<usize>,
    /// Entries at `first_divergence`, when both sides have one
    pub divergent_entries: Option<((Key, Value), (Key, Value))>,
}

impl TraceComparison {
    pub fn totals_match(&self) -> bool {
        self.left_total == self.right_total
    }

    pub fn sequences_match(&self) -> bool {
        self.first_divergence.is_none()
    }
}

impl fmt::Display for TraceComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} total={} {} total={}",
            self.left, self.left_total, self.right, self.right_total
        )?;
        match (self.totals_match(), self.first_divergence) {
            (true, None) => write!(f, " OK"),
            (true, Some(index)) => write!(f, " OK (sequence diff at {index})"),
            (false, Some(index)) => write!(f, " TOTAL MISMATCH (first diff at {index})"),
            (false, None) => write!(f, " TOTAL MISMATCH"),
        }?;
        if let Some(((lk, lv), (rk, rv))) = self.divergent_entries {
            write!(
                f,
                ": {}({lk},{lv}) {}({rk},{rv})",
                self.left, self.right
            )?;
        }
        Ok(())
    }
}

/// Compares two Prim traces entry by entry
pub fn compare_traces(left: &PrimTrace, right: &PrimTrace) -> TraceComparison {
    let common = left.extracted.len().min(right.extracted.len());
    let first_divergence = (0..common)
        .find(|&i| left.extracted[i] != right.extracted[i])
        .or_else(|| (left.extracted.len() != right.extracted.len()).then_some(common));
    let divergent_entries = first_divergence.and_then(|i| {
        Some((*left.extracted.get(i)?, *right.extracted.get(i)?))
    });

    TraceComparison {
        left: left.kind,
        right: right.kind,
        left_total: left.total_weight,
        right_total: right.total_weight,
        first_divergence,
        divergent_entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::new_heap;

    fn trace(kind: HeapKind, extracted: Vec<(Key, Value)>, total_weight: Weight) -> PrimTrace {
        PrimTrace {
            kind,
            extracted,
            total_weight,
            operations: 0,
        }
    }

    #[test]
    fn test_tracing_queue_records_extractions() {
        let mut heap = new_heap(HeapKind::Binary, 3);
        let mut traced = TracingQueue::new(&mut heap);
        traced.insert(2, 0);
        traced.insert(1, 1);
        traced.decrease_key(0, 0);
        assert_eq!(traced.extract_min(), Some((0, 0)));
        assert_eq!(traced.extract_min(), Some((1, 1)));
        assert_eq!(traced.extract_min(), None);
        assert_eq!(traced.extracted(), &[(0, 0), (1, 1)]);
        assert_eq!(traced.operation_count(), 5);
    }

    #[test]
    fn test_compare_identical() {
        let a = trace(HeapKind::Binary, vec![(0, 0), (1, 2)], 1);
        let b = trace(HeapKind::Pairing, vec![(0, 0), (1, 2)], 1);
        let cmp = compare_traces(&a, &b);
        assert!(cmp.totals_match());
        assert!(cmp.sequences_match());
        assert_eq!(cmp.to_string(), "Binary total=1 Pairing total=1 OK");
    }

    #[test]
    fn test_compare_reports_first_difference() {
        let a = trace(HeapKind::Binary, vec![(0, 0), (1, 2), (1, 1)], 2);
        let b = trace(HeapKind::Pairing, vec![(0, 0), (1, 1), (1, 2)], 2);
        let cmp = compare_traces(&a, &b);
        assert_eq!(cmp.first_divergence, Some(1));
        assert_eq!(cmp.divergent_entries, Some(((1, 2), (1, 1))));
        assert!(cmp.totals_match());
    }

    #[test]
    fn test_compare_length_mismatch() {
        let a = trace(HeapKind::Binary, vec![(0, 0), (3, 1)], 3);
        let b = trace(HeapKind::Fibonacci, vec![(0, 0)], 0);
        let cmp = compare_traces(&a, &b);
        assert_eq!(cmp.first_divergence, Some(1));
        assert_eq!(cmp.divergent_entries, None);
        assert!(cmp.to_string().contains("TOTAL MISMATCH"));
    }

    #[test]
    fn test_trace_prim_has_no_duplicates() {
        let mut graph = Graph::new(4);
        graph.add_undirected_edge(0, 1, 3).unwrap();
        graph.add_undirected_edge(0, 2, 1).unwrap();
        graph.add_undirected_edge(2, 1, 1).unwrap();
        graph.add_undirected_edge(1, 3, 2).unwrap();

        for kind in HeapKind::ALL {
            let result = trace_prim(&graph, 0, &mut new_heap(kind, 4)).unwrap();
            assert_eq!(result.kind, kind);
            assert_eq!(result.extracted.len(), 4);
            assert_eq!(result.duplicate_extractions(), 0);
            assert_eq!(result.total_weight, 4);
            assert_eq!(result.extracted[0], (0, 0));
        }
    }
}
