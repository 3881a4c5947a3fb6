//! Benchmark harness: generate graphs, run every algorithm with every heap
//!
//! For each configured size the harness builds one sparse and one dense graph
//! from a single seeded RNG, then runs Dijkstra and Prim with each
//! [`HeapKind`] in [`HeapKind::ALL`] order (Binary, Pairing, Fibonacci),
//! timing the run and reading the heap's operation counter.
//! Results that disagree across heaps (Dijkstra distances, Prim totals) are
//! logged and counted, since they can only come from a heap bug.
//!
//! # Example
//!
//! ```rust
//! use graph_heaps::harness::{run, BenchConfig};
//!
//! let config = BenchConfig::default().with_sizes(vec![20]).with_seed(7);
//! let report = run(&config).unwrap();
//! // 2 densities x 2 algorithms x 3 heaps
//! assert_eq!(report.records.len(), 12);
//! assert_eq!(report.mismatches, 0);
//! ```

use crate::algorithms::{dijkstra, prim};
use crate::error::Result;
use crate::generators::{dense_graph, sparse_graph};
use crate::graph::Graph;
use crate::trace::{compare_traces, trace_prim, TraceComparison};
use crate::traits::{new_heap, HeapKind, Value};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

/// CSV header matching [`BenchRecord`]'s `Display` output
pub const CSV_HEADER: &str = "Algo,HeapType,GraphType,GraphSize,TimeMS,Ops";

/// Benchmark parameters
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Vertex counts to benchmark
    pub sizes: Vec<usize>,
    /// Seed for graph generation
    pub seed: u64,
    /// Sparse graphs get `size * sparse_edge_multiplier` edge attempts
    pub sparse_edge_multiplier: usize,
    /// Dense graphs get this fraction of all possible edges as attempts
    pub dense_edge_fraction: f64,
    /// Source vertex for both algorithms
    pub start_vertex: Value,
    /// Also compare Prim extraction traces across heaps
    pub trace: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![50, 100, 200, 1000, 5000],
            seed: 42,
            sparse_edge_multiplier: 5,
            dense_edge_fraction: 0.15,
            start_vertex: 0,
            trace: false,
        }
    }
}

impl BenchConfig {
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_sparse_edge_multiplier(mut self, multiplier: usize) -> Self {
        self.sparse_edge_multiplier = multiplier;
        self
    }

    pub fn with_dense_edge_fraction(mut self, fraction: f64) -> Self {
        self.dense_edge_fraction = fraction;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

/// Graph algorithm under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    Prim,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::Prim => "Prim",
        })
    }
}

/// Kind of generated graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Density {
    Sparse,
    Dense,
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Density::Sparse => "sparse",
            Density::Dense => "dense",
        })
    }
}

/// One timed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchRecord {
    pub algorithm: Algorithm,
    pub heap: HeapKind,
    pub density: Density,
    pub size: usize,
    pub elapsed: Duration,
    pub operations: u64,
}

impl fmt::Display for BenchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.algorithm,
            self.heap,
            self.density,
            self.size,
            self.elapsed.as_millis(),
            self.operations
        )
    }
}

/// Everything a harness run produced
#[derive(Debug, Clone, Default)]
pub struct BenchReport {
    pub records: Vec<BenchRecord>,
    /// Experiments whose results differed across heaps
    pub mismatches: usize,
    /// Prim trace comparisons against the binary heap, when enabled
    pub traces: Vec<(Density, usize, TraceComparison)>,
}

impl BenchReport {
    /// Writes the header and one CSV row per record
    pub fn write_csv<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "{CSV_HEADER}")?;
        for record in &self.records {
            writeln!(out, "{record}")?;
        }
        out.flush()?;
        Ok(())
    }
}

fn run_dijkstra(
    graph: &Graph,
    density: Density,
    config: &BenchConfig,
    report: &mut BenchReport,
) -> Result<()> {
    let size = graph.vertex_count();
    let mut reference = None;
    for kind in HeapKind::ALL {
        let mut heap = new_heap(kind, size);
        let started = Instant::now();
        let paths = dijkstra(graph, config.start_vertex, &mut heap)?;
        let elapsed = started.elapsed();

        report.records.push(BenchRecord {
            algorithm: Algorithm::Dijkstra,
            heap: kind,
            density,
            size,
            elapsed,
            operations: heap.operation_count(),
        });

        if let Some((first, distances)) = &reference {
            if *distances != paths.distances {
                warn!("Dijkstra distances differ between {first} and {kind} on {density} graph N={size}");
                report.mismatches += 1;
            }
        } else {
            reference = Some((kind, paths.distances));
        }
    }
    Ok(())
}

fn run_prim(
    graph: &Graph,
    density: Density,
    config: &BenchConfig,
    report: &mut BenchReport,
) -> Result<()> {
    let size = graph.vertex_count();
    let mut totals = Vec::with_capacity(HeapKind::ALL.len());
    for kind in HeapKind::ALL {
        let mut heap = new_heap(kind, size);
        let started = Instant::now();
        let tree = prim(graph, config.start_vertex, &mut heap)?;
        let elapsed = started.elapsed();

        report.records.push(BenchRecord {
            algorithm: Algorithm::Prim,
            heap: kind,
            density,
            size,
            elapsed,
            operations: heap.operation_count(),
        });
        totals.push((kind, tree.total_weight));
    }

    if totals.windows(2).any(|w| w[0].1 != w[1].1) {
        warn!("Prim total weight differs on {density} graph N={size}: {totals:?}");
        report.mismatches += 1;
    }
    Ok(())
}

fn run_traces(graph: &Graph, density: Density, config: &BenchConfig, report: &mut BenchReport) -> Result<()> {
    let size = graph.vertex_count();
    let baseline = trace_prim(graph, config.start_vertex, &mut new_heap(HeapKind::Binary, size))?;
    for kind in [HeapKind::Pairing, HeapKind::Fibonacci] {
        let other = trace_prim(graph, config.start_vertex, &mut new_heap(kind, size))?;
        let comparison = compare_traces(&baseline, &other);
        if !comparison.totals_match() {
            warn!("[{density} N={size}] {comparison}");
        }
        report.traces.push((density, size, comparison));
    }
    Ok(())
}

/// Runs the full benchmark matrix described by `config`
///
/// # Errors
/// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) when the start
/// vertex does not exist in a generated graph.
pub fn run(config: &BenchConfig) -> Result<BenchReport> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut report = BenchReport::default();

    for &size in &config.sizes {
        let sparse = sparse_graph(size, config.sparse_edge_multiplier, &mut rng);
        let dense = dense_graph(size, config.dense_edge_fraction, &mut rng);
        info!(
            "N={}: sparse graph with {} edges, dense graph with {} edges",
            size,
            sparse.edge_count() / 2,
            dense.edge_count() / 2
        );

        run_dijkstra(&sparse, Density::Sparse, config, &mut report)?;
        run_dijkstra(&dense, Density::Dense, config, &mut report)?;
        run_prim(&sparse, Density::Sparse, config, &mut report)?;
        run_prim(&dense, Density::Dense, config, &mut report)?;

        if config.trace {
            run_traces(&sparse, Density::Sparse, config, &mut report)?;
            run_traces(&dense, Density::Dense, config, &mut report)?;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_record_csv_row() {
        let record = BenchRecord {
            algorithm: Algorithm::Prim,
            heap: HeapKind::Pairing,
            density: Density::Dense,
            size: 100,
            elapsed: Duration::from_millis(12),
            operations: 345,
        };
        assert_eq!(record.to_string(), "Prim,Pairing,dense,100,12,345");
    }

    #[test]
    fn test_run_small_matrix() {
        let config = BenchConfig::default().with_sizes(vec![10, 30]).with_trace(true);
        let report = run(&config).unwrap();
        assert_eq!(report.records.len(), 24);
        assert_eq!(report.mismatches, 0);
        // Two comparisons per graph, two graphs per size
        assert_eq!(report.traces.len(), 8);
        assert!(report.traces.iter().all(|(_, _, cmp)| cmp.totals_match()));
        assert!(report.records.iter().all(|r| r.operations > 0));
    }

    #[test]
    fn test_rows_follow_heap_order() {
        let report = run(&BenchConfig::default().with_sizes(vec![8])).unwrap();
        let heaps: Vec<HeapKind> = report.records.iter().take(3).map(|r| r.heap).collect();
        assert_eq!(heaps, vec![HeapKind::Binary, HeapKind::Pairing, HeapKind::Fibonacci]);
        assert!(report.records[..6].iter().all(|r| r.algorithm == Algorithm::Dijkstra));
    }

    #[test]
    fn test_write_csv() {
        let report = run(&BenchConfig::default().with_sizes(vec![5])).unwrap();
        let mut out = Vec::new();
        report.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(lines.count(), 12);
    }

    #[test]
    fn test_empty_size_rejects_start_vertex() {
        let err = run(&BenchConfig::default().with_sizes(vec![0])).unwrap_err();
        assert!(matches!(err, Error::InvalidVertex { vertex: 0, vertex_count: 0 }));
    }

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.sizes, vec![50, 100, 200, 1000, 5000]);
        assert_eq!(config.seed, 42);
        assert_eq!(config.sparse_edge_multiplier, 5);
        assert!(!config.trace);
    }
}
