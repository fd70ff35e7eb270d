//! Error types for context-memory access

use thiserror::Error;

/// Errors raised while decoding indexed records or parsing a properties
/// file into a context.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Missing required field: {key}")]
    MissingField { key: String },

    #[error("Invalid list length in {key}: {value}")]
    InvalidLength { key: String, value: String },

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}
