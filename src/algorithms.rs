//! Dijkstra's shortest paths and Prim's minimum spanning tree over any [`PriorityQueue`]
//!
//! Both algorithms are the same best-first search and differ only in the key
//! a vertex is offered through an edge:
//!
//! - Dijkstra: `dist[u] + w`, the length of the path through `u`
//! - Prim: `w`, the weight of the edge connecting the vertex to the tree
//!
//! The heap is only ever driven through the trait, so the result does not
//! depend on which implementation is plugged in (up to equal-weight ties in
//! Prim's choice of tree edges).
//!
//! # Design
//!
//! A vertex is inserted the first time it is reached and lowered with
//! `decrease_key` afterwards; an `in_queue` flag tracks which case applies,
//! so no value is ever inserted twice. Extracted vertices are settled and
//! never relaxed again.
//!
//! # Example
//!
//! ```rust
//! use graph_heaps::{dijkstra, prim, Graph, HeapKind, new_heap};
//!
//! let mut graph = Graph::new(3);
//! graph.add_undirected_edge(0, 1, 2).unwrap();
//! graph.add_undirected_edge(1, 2, 2).unwrap();
//! graph.add_undirected_edge(0, 2, 5).unwrap();
//!
//! let mut heap = new_heap(HeapKind::Fibonacci, graph.vertex_count());
//! let paths = dijkstra(&graph, 0, &mut heap).unwrap();
//! assert_eq!(paths.distances, vec![Some(0), Some(2), Some(4)]);
//! assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
//!
//! let mut heap = new_heap(HeapKind::Pairing, graph.vertex_count());
//! let tree = prim(&graph, 0, &mut heap).unwrap();
//! assert_eq!(tree.total_weight, 4);
//! ```

use crate::error::Result;
use crate::graph::{Graph, Weight};
use crate::traits::{Key, PriorityQueue, Value};
use log::{debug, trace, warn};

/// Result of a single-source shortest path run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    /// Source vertex
    pub source: Value,
    /// Distance from the source, `None` if unreachable
    pub distances: Vec<Option<Key>>,
    /// Predecessor on a shortest path, `None` for the source and unreachable vertices
    pub predecessors: Vec<Option<Value>>,
}

impl ShortestPaths {
    /// Distance to `target`, `None` if unreachable or out of range
    pub fn distance(&self, target: Value) -> Option<Key> {
        self.distances.get(target).copied().flatten()
    }

    /// Vertices of a shortest path from the source to `target`, both inclusive
    pub fn path_to(&self, target: Value) -> Option<Vec<Value>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
            if path.len() > self.predecessors.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Result of a Prim run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    /// Vertex the tree was grown from
    pub root: Value,
    /// Weight of the edge connecting each vertex to the tree; `Some(0)` for the root
    pub min_edge: Vec<Option<Weight>>,
    /// Tree neighbour each vertex was connected through
    pub parent: Vec<Option<Value>>,
    /// Sum of the chosen edge weights
    pub total_weight: Weight,
}

impl SpanningTree {
    /// Chosen tree edges as `(parent, child, weight)`, ordered by child
    pub fn edges(&self) -> Vec<(Value, Value, Weight)> {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| {
                let parent = (*parent)?;
                let weight = self.min_edge[child]?;
                Some((parent, child, weight))
            })
            .collect()
    }

    /// Returns true if every vertex was reached from the root
    pub fn spans_all(&self) -> bool {
        self.min_edge.iter().all(Option::is_some)
    }
}

/// Best-known keys, tree parents and the sum of extracted keys
struct Search {
    best: Vec<Option<Key>>,
    parent: Vec<Option<Value>>,
    extracted_sum: Key,
}

/// Best-first search from `start`, offering `offer(key_of_u, w)` to each neighbour
///
/// An offer of `None` (the candidate key is not representable) leaves the
/// neighbour's current best untouched.
fn best_first<Q, F>(graph: &Graph, start: Value, heap: &mut Q, offer: F) -> Result<Search>
where
    Q: PriorityQueue + ?Sized,
    F: Fn(Key, Weight) -> Option<Key>,
{
    graph.check_vertex(start)?;
    if !heap.is_empty() {
        warn!(
            "{} heap passed to graph search already holds {} entries",
            heap.kind(),
            heap.len()
        );
    }

    let n = graph.vertex_count();
    let mut best = vec![None; n];
    let mut parent = vec![None; n];
    let mut in_queue = vec![false; n];
    let mut settled = vec![false; n];
    let mut extracted_sum: Key = 0;

    best[start] = Some(0);
    heap.insert(0, start);
    in_queue[start] = true;

    while let Some((key, u)) = heap.extract_min() {
        if u >= n {
            continue;
        }
        in_queue[u] = false;
        if settled[u] {
            continue;
        }
        settled[u] = true;
        extracted_sum = extracted_sum.saturating_add(key);
        trace!("settled vertex {u} with key {key}");

        for edge in graph.neighbors(u) {
            let v = edge.target;
            if settled[v] {
                continue;
            }
            let Some(candidate) = offer(key, edge.weight) else {
                continue;
            };
            if best[v].map_or(true, |current| candidate < current) {
                best[v] = Some(candidate);
                parent[v] = Some(u);
                if in_queue[v] {
                    heap.decrease_key(v, candidate);
                } else {
                    heap.insert(candidate, v);
                    in_queue[v] = true;
                }
            }
        }
    }

    Ok(Search {
        best,
        parent,
        extracted_sum,
    })
}

/// Runs Dijkstra's algorithm from `start`
///
/// The heap should be empty and able to track values in
/// `[0, graph.vertex_count())`; on return it is empty again and its
/// operation counter reflects the run.
///
/// A path whose length would overflow [`Key`] is never relaxed, so a vertex
/// reachable only through such paths is reported unreachable.
///
/// # Errors
/// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if `start` is not a vertex.
pub fn dijkstra<Q>(graph: &Graph, start: Value, heap: &mut Q) -> Result<ShortestPaths>
where
    Q: PriorityQueue + ?Sized,
{
    debug!(
        "dijkstra: start={} vertices={} edges={} heap={}",
        start,
        graph.vertex_count(),
        graph.edge_count(),
        heap.kind()
    );
    let ops_before = heap.operation_count();

    let search = best_first(graph, start, heap, |dist, weight| dist.checked_add(weight))?;

    debug!(
        "dijkstra: reached {} vertices in {} heap operations",
        search.best.iter().filter(|d| d.is_some()).count(),
        heap.operation_count() - ops_before
    );
    Ok(ShortestPaths {
        source: start,
        distances: search.best,
        predecessors: search.parent,
    })
}

/// Runs Prim's algorithm from `start`
///
/// Only the component containing `start` is spanned; vertices outside it keep
/// `None` in [`SpanningTree::min_edge`]. Each vertex's edge weight is added to
/// the total at the moment the vertex is extracted; the total saturates at
/// `Weight::MAX` instead of overflowing.
///
/// # Errors
/// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if `start` is not a vertex.
pub fn prim<Q>(graph: &Graph, start: Value, heap: &mut Q) -> Result<SpanningTree>
where
    Q: PriorityQueue + ?Sized,
{
    debug!(
        "prim: start={} vertices={} edges={} heap={}",
        start,
        graph.vertex_count(),
        graph.edge_count(),
        heap.kind()
    );
    let ops_before = heap.operation_count();

    let search = best_first(graph, start, heap, |_, weight| Some(weight))?;

    debug!(
        "prim: total weight {} in {} heap operations",
        search.extracted_sum,
        heap.operation_count() - ops_before
    );
    Ok(SpanningTree {
        root: start,
        min_edge: search.best,
        parent: search.parent,
        total_weight: search.extracted_sum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::BinaryHeap;
    use crate::error::Error;
    use crate::traits::{new_heap, HeapKind};

    fn line(n: usize) -> Graph {
        let mut graph = Graph::new(n);
        for v in 1..n {
            graph.add_undirected_edge(v - 1, v, v as Weight).unwrap();
        }
        graph
    }

    #[test]
    fn test_dijkstra_on_line() {
        let graph = line(5);
        let mut heap = BinaryHeap::new(5);
        let paths = dijkstra(&graph, 0, &mut heap).unwrap();
        assert_eq!(
            paths.distances,
            vec![Some(0), Some(1), Some(3), Some(6), Some(10)]
        );
        assert_eq!(paths.path_to(4), Some(vec![0, 1, 2, 3, 4]));
        assert_eq!(paths.path_to(0), Some(vec![0]));
        assert!(heap.is_empty());
        // 5 inserts and 5 extractions, no decreases on a line
        assert_eq!(heap.operation_count(), 10);
    }

    #[test]
    fn test_decrease_key_path_is_taken() {
        // 0 -> 2 directly costs 10, through 1 only 3
        let mut graph = Graph::new(3);
        graph.add_directed_edge(0, 2, 10).unwrap();
        graph.add_directed_edge(0, 1, 1).unwrap();
        graph.add_directed_edge(1, 2, 2).unwrap();

        for kind in HeapKind::ALL {
            let mut heap = new_heap(kind, 3);
            let paths = dijkstra(&graph, 0, &mut heap).unwrap();
            assert_eq!(paths.distance(2), Some(3), "{kind}");
            assert_eq!(paths.predecessors[2], Some(1), "{kind}");
            // 3 inserts + 3 extractions + 1 decrease
            assert_eq!(heap.operation_count(), 7, "{kind}");
        }
    }

    #[test]
    fn test_unreachable_vertices() {
        let mut graph = Graph::new(4);
        graph.add_directed_edge(0, 1, 1).unwrap();
        graph.add_directed_edge(3, 0, 1).unwrap();

        let mut heap = new_heap(HeapKind::Pairing, 4);
        let paths = dijkstra(&graph, 0, &mut heap).unwrap();
        assert_eq!(paths.distances, vec![Some(0), Some(1), None, None]);
        assert_eq!(paths.path_to(3), None);
        assert_eq!(paths.path_to(9), None);

        let mut heap = new_heap(HeapKind::Pairing, 4);
        let tree = prim(&graph, 0, &mut heap).unwrap();
        assert!(!tree.spans_all());
        assert_eq!(tree.total_weight, 1);
    }

    #[test]
    fn test_prim_edges() {
        let graph = line(4);
        let mut heap = new_heap(HeapKind::Fibonacci, 4);
        let tree = prim(&graph, 0, &mut heap).unwrap();
        assert_eq!(tree.edges(), vec![(0, 1, 1), (1, 2, 2), (2, 3, 3)]);
        assert_eq!(tree.min_edge[0], Some(0));
        assert_eq!(tree.total_weight, 6);
        assert!(tree.spans_all());
    }

    #[test]
    fn test_invalid_start() {
        let graph = line(2);
        let mut heap = new_heap(HeapKind::Binary, 2);
        let err = dijkstra(&graph, 2, &mut heap).unwrap_err();
        assert!(matches!(err, Error::InvalidVertex { vertex: 2, .. }));
        assert!(prim(&graph, 7, &mut heap).is_err());
        // Nothing touched the heap
        assert_eq!(heap.operation_count(), 0);
    }

    #[test]
    fn test_self_loops_and_parallel_edges() {
        let mut graph = Graph::new(2);
        graph.add_undirected_edge(0, 0, 1).unwrap();
        graph.add_undirected_edge(0, 1, 9).unwrap();
        graph.add_undirected_edge(0, 1, 4).unwrap();

        for kind in HeapKind::ALL {
            let mut heap = new_heap(kind, 2);
            assert_eq!(dijkstra(&graph, 1, &mut heap).unwrap().distance(0), Some(4));
            let mut heap = new_heap(kind, 2);
            assert_eq!(prim(&graph, 0, &mut heap).unwrap().total_weight, 4);
        }
    }
}
