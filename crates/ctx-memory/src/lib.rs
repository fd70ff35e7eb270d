//! PCE Context Memory
//!
//! The flat string key/value store used by the calling workflow engine to
//! pass parameters and receive results, plus the indexed-record codec that
//! flattens typed records into `<prefix>[i].<field>` keys and back. The
//! codec owns this serialization boundary so the path engine never touches
//! raw context keys.

pub mod codec;
pub mod error;
pub mod memory;

pub use codec::{read_link_records, read_pnf_records, write_solutions, SolutionKind};
pub use error::ContextError;
pub use memory::{ContextMemory, InMemoryContext};

/// Result type for context-memory operations
pub type Result<T> = std::result::Result<T, ContextError>;
