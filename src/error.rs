//! Error types for graph construction, heap selection and the benchmark harness
//!
//! Heap operations never fail: an empty extraction is `None`, and an
//! ineffective `decrease_key` is a no-op. Errors only surface at the
//! boundaries where a caller hands us something we cannot index.

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid vertex id {vertex} (graph has {vertex_count} vertices)")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("unknown heap kind: {0}")]
    UnknownHeapKind(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
