//! Random undirected graph generators for benchmarks and tests
//!
//! Both generators draw endpoints uniformly, skip self-loops, may produce
//! parallel edges, and give every edge a weight uniform in `1..=100`. The
//! random source is always passed in, so a seeded generator reproduces the
//! same graph.
//!
//! # Example
//!
//! ```rust
//! use graph_heaps::generators::sparse_graph;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let a = sparse_graph(100, 5, &mut StdRng::seed_from_u64(42));
//! let b = sparse_graph(100, 5, &mut StdRng::seed_from_u64(42));
//! assert_eq!(a.edge_count(), b.edge_count());
//! ```

use crate::graph::{Graph, Weight};
use rand::Rng;

/// Smallest generated edge weight
pub const MIN_WEIGHT: Weight = 1;
/// Largest generated edge weight
pub const MAX_WEIGHT: Weight = 100;

/// Draws `attempts` random undirected edges, skipping self-loops
fn fill_random<R: Rng + ?Sized>(graph: &mut Graph, attempts: u64, rng: &mut R) {
    let n = graph.vertex_count();
    if n < 2 {
        return;
    }
    for _ in 0..attempts {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let weight = rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT);
        // Both endpoints are drawn below n
        let _ = graph.add_undirected_edge(u, v, weight);
    }
}

/// Sparse graph: `vertex_count * edge_multiplier` edge attempts
pub fn sparse_graph<R: Rng + ?Sized>(vertex_count: usize, edge_multiplier: usize, rng: &mut R) -> Graph {
    let mut graph = Graph::new(vertex_count);
    let attempts = (vertex_count as u64).saturating_mul(edge_multiplier as u64);
    fill_random(&mut graph, attempts, rng);
    graph
}

/// Dense graph: `edge_fraction` of the `n(n-1)/2` possible edges as attempts
pub fn dense_graph<R: Rng + ?Sized>(vertex_count: usize, edge_fraction: f64, rng: &mut R) -> Graph {
    let mut graph = Graph::new(vertex_count);
    let n = vertex_count as u64;
    let max_edges = n * n.saturating_sub(1) / 2;
    let attempts = (max_edges as f64 * edge_fraction.clamp(0.0, 1.0)) as u64;
    fill_random(&mut graph, attempts, rng);
    graph
}
