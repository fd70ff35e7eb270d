//! Error types for topology model construction

use thiserror::Error;

/// Errors raised while building a [`crate::Topology`] from interchange
/// records. Any error aborts the whole construction; no partial topology is
/// ever returned.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("Link {link}: missing required field {field}")]
    MissingField { link: String, field: String },

    #[error("Unknown link type: {value}")]
    UnknownLinkType { value: String },

    #[error("Link {link}: interface name {name} does not resolve to a PNF")]
    UnparsableInterface { link: String, name: String },

    #[error("Link {link}: endpoint PNF {pnf} is not declared in the topology")]
    DanglingEndpoint { link: String, pnf: String },

    #[error("Duplicate PNF: {name}")]
    DuplicatePnf { name: String },
}
