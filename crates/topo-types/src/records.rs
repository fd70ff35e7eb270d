//! Interchange records
//!
//! Plain data exchanged with the context-memory collaborator. The flattening
//! into indexed string keys is owned by the context-memory crate; these
//! records are the typed form on this side of that boundary.

use serde::{Deserialize, Serialize};

/// One PNF entry read from context memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PnfRecord {
    pub pnf_name: String,
}

/// One link entry read from context memory.
///
/// `src_interface`/`dst_interface` are required for OTN and ETH links;
/// DUMMY links instead name their endpoint PNFs directly via
/// `src_pnf`/`dst_pnf`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub link_type: String,
    pub link_name: String,
    pub src_interface: Option<String>,
    pub dst_interface: Option<String>,
    pub src_pnf: Option<String>,
    pub dst_pnf: Option<String>,
}

/// One hop of a computed path, written back to context memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathHop {
    pub original_link: String,
    pub src_pnf: String,
    pub dst_pnf: String,
    pub src_interface: Option<String>,
    pub dst_interface: Option<String>,
    pub inner_domain: bool,
}
