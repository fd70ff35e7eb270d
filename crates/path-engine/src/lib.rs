//! PCE Path Engine
//!
//! Computes least-cost paths between PNFs over a topology rebuilt from
//! context memory on every invocation, honoring domain-crossing edge
//! permission, and optionally a structurally distinct backup path to an
//! alternate destination. Exposes both a typed API ([`PathRequest`] /
//! [`PathResult`]) and the flat parameter-map entry points the workflow
//! engine calls ([`compute_path`] / [`compute_paths`]).

pub mod engine;
pub mod error;
pub mod graph;
pub mod registry;
pub mod search;

#[cfg(test)]
mod tests;

pub use engine::{
    compute, compute_path, compute_paths, PathRequest, PathResult, PathStatus,
};
pub use error::PathEngineError;
pub use graph::DirectedGraph;
pub use registry::{ComputePath, ComputePaths, OperationRegistry, PathOperation};
pub use search::{shortest_path, PathConstraints};

/// Result type for path-engine operations
pub type Result<T> = std::result::Result<T, PathEngineError>;
