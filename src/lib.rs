//! Priority queues with `decrease_key`, and the graph algorithms they drive
//!
//! This crate provides three interchangeable heaps behind one
//! [`PriorityQueue`] trait, plus Dijkstra's shortest paths and Prim's minimum
//! spanning tree written against that trait:
//!
//! - **Binary Heap**: array-backed with a position index; O(log n) insert, delete-min and decrease_key
//! - **Fibonacci Heap**: O(1) amortized insert and decrease_key; O(log n) amortized delete-min
//! - **Pairing Heap**: O(1) insert; O(log n) amortized delete-min; o(log n) amortized decrease_key
//!
//! Keys are `i64` priorities and values are dense vertex ids in
//! `[0, max_vertices)`, which double as handles for `decrease_key`.
//!
//! The [`harness`] module and the `heap_bench` binary time every algorithm
//! with every heap on seeded random graphs and report heap operation counts.
//!
//! # Example
//!
//! ```rust
//! use graph_heaps::{dijkstra, new_heap, Graph, HeapKind, PriorityQueue};
//!
//! let mut graph = Graph::new(3);
//! graph.add_undirected_edge(0, 1, 4).unwrap();
//! graph.add_undirected_edge(1, 2, 1).unwrap();
//!
//! for kind in HeapKind::ALL {
//!     let mut heap = new_heap(kind, graph.vertex_count());
//!     let paths = dijkstra(&graph, 0, &mut heap).unwrap();
//!     assert_eq!(paths.distance(2), Some(5));
//!     assert!(heap.is_empty());
//! }
//! ```

pub mod algorithms;
pub mod binary;
pub mod error;
pub mod fibonacci;
pub mod generators;
pub mod graph;
pub mod harness;
pub mod pairing;
pub mod storage;
pub mod trace;
pub mod traits;

// Re-export the main API for convenience
pub use algorithms::{dijkstra, prim, ShortestPaths, SpanningTree};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Weight};
pub use traits::{new_heap, HeapKind, Key, PriorityQueue, Value};
