//! PCE Topology Types
//!
//! Graph primitives and the transport-network domain model: physical network
//! functions (PNFs), their named interfaces, the physical links connecting
//! them, and the validated [`Topology`] built from flat interchange records.

pub mod error;
pub mod graph;
pub mod interface;
pub mod link;
pub mod pnf;
pub mod records;
pub mod topology;

pub use error::TopologyError;
pub use graph::{Edge, Vertex};
pub use interface::{PInterface, PInterfaceName};
pub use link::{Link, LinkType, LogicalLink};
pub use pnf::Pnf;
pub use records::{LinkRecord, PathHop, PnfRecord};
pub use topology::Topology;

/// Result type for topology operations
pub type Result<T> = std::result::Result<T, TopologyError>;
