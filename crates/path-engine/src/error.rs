//! Error types for path computation

use thiserror::Error;

use pce_ctx_memory::ContextError;
use pce_topo_types::TopologyError;

/// The single error surface of the path engine. Every internal failure is
/// wrapped here with its cause preserved; an absent path is reported through
/// [`crate::PathStatus::NotFound`], never as an error.
#[derive(Debug, Error)]
pub enum PathEngineError {
    #[error("Missing required parameter: {name}")]
    MissingParameter { name: String },

    #[error("Context error: {0}")]
    Context(#[from] ContextError),

    #[error("Topology error: {0}")]
    Topology(#[from] TopologyError),
}
