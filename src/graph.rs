//! Weighted adjacency-list graph
//!
//! Vertex ids are the dense range `[0, vertex_count)`. Edges are appended at
//! construction time and never removed; an undirected edge is stored as two
//! directed entries, one in each endpoint's list.
//!
//! Weights are not validated. Dijkstra and Prim assume non-negative weights;
//! negative ones produce unspecified results.
//!
//! # Example
//!
//! ```rust
//! use graph_heaps::Graph;
//!
//! let mut graph = Graph::new(3);
//! graph.add_undirected_edge(0, 1, 4).unwrap();
//! graph.add_directed_edge(1, 2, 1).unwrap();
//! assert_eq!(graph.edge_count(), 3);
//! assert!(graph.add_directed_edge(0, 3, 1).is_err());
//! ```

use crate::error::{Error, Result};
use crate::traits::Value;

/// Edge weight
pub type Weight = i64;

/// An outgoing edge stored in a vertex's adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: Value,
    pub weight: Weight,
}

/// Adjacency-list graph over dense vertex ids
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored directed entries (an undirected edge counts twice)
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns true if `vertex` is a valid id
    pub fn has_vertex(&self, vertex: Value) -> bool {
        vertex < self.adjacency.len()
    }

    /// Outgoing edges of `vertex`; empty for an out-of-range id
    pub fn neighbors(&self, vertex: Value) -> &[Edge] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn check_vertex(&self, vertex: Value) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Adds the directed edge `from -> to`
    pub fn add_directed_edge(&mut self, from: Value, to: Value, weight: Weight) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adjacency[from].push(Edge { target: to, weight });
        Ok(())
    }

    /// Adds `u -> v` and `v -> u` with the same weight
    pub fn add_undirected_edge(&mut self, u: Value, v: Value, weight: Weight) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adjacency[u].push(Edge { target: v, weight });
        self.adjacency[v].push(Edge { target: u, weight });
        Ok(())
    }
}
