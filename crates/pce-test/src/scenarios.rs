//! Fixture topologies
//!
//! The two-domain sample mirrors the upstream reference data: provider-10
//! and provider-20 networks joined by two disjoint cross-domain links, so a
//! backup request must route over the crossing the primary path left
//! unused.
//!
//! ```text
//!   a1 -- a2 ==== b1 -- b2
//!    \           /   \
//!     a3 =======      b3
//! ```

use std::collections::HashMap;

use pce_ctx_memory::{ContextMemory, InMemoryContext};
use pce_path_engine::engine::{
    PARAM_BACKUP_DST_NODE, PARAM_DST_NODE, PARAM_LINKS_PREFIX, PARAM_PNFS_PREFIX,
    PARAM_REQUIRE_BACKUP, PARAM_RESPONSE_PREFIX, PARAM_SRC_NODE,
};

pub const RESPONSE_PREFIX: &str = "prefix";

/// Sample source node (provider-10 domain).
pub fn src_node() -> String {
    node(10, "10.1.1.1")
}

/// Sample destination node (provider-20 domain).
pub fn dst_node() -> String {
    node(20, "10.2.1.2")
}

/// Sample backup destination node (provider-20 domain).
pub fn backup_dst_node() -> String {
    node(20, "10.2.1.3")
}

/// The crossing the primary path takes in the sample topology.
pub fn primary_cross_link() -> String {
    link_name(10, "10.1.1.2", 8)
}

/// The crossing left for the backup path in the sample topology.
pub fn backup_cross_link() -> String {
    link_name(10, "10.1.1.3", 8)
}

fn network(provider: u32) -> String {
    format!("networkId-providerId-{}-clientId-0-topologyId-1", provider)
}

fn node(provider: u32, ip: &str) -> String {
    format!("{}-nodeId-{}", network(provider), ip)
}

fn itf(provider: u32, ip: &str, ltp: u32) -> String {
    format!("{}-ltpId-{}", node(provider, ip), ltp)
}

fn link_name(provider: u32, ip: &str, ltp: u32) -> String {
    format!("{}-linkId-{}-{}", network(provider), ip, ltp)
}

fn set_pnfs(ctx: &mut InMemoryContext, names: &[String]) {
    for (index, name) in names.iter().enumerate() {
        ctx.set(&format!("pnfs[{}].pnf-name", index), name);
    }
}

/// Write both direction records of one physical link under a shared name.
fn set_bidirectional_link(
    ctx: &mut InMemoryContext,
    index: &mut usize,
    name: &str,
    src: &str,
    dst: &str,
) {
    for (src, dst) in [(src, dst), (dst, src)] {
        ctx.set(&format!("links[{}].link-type", index), "OTN");
        ctx.set(&format!("links[{}].link-name", index), name);
        ctx.set(&format!("links[{}].src-interface", index), src);
        ctx.set(&format!("links[{}].dst-interface", index), dst);
        *index += 1;
    }
}

/// The two-domain sample topology with two disjoint crossings.
pub fn two_domain_context() -> InMemoryContext {
    let mut ctx = InMemoryContext::new();
    set_pnfs(
        &mut ctx,
        &[
            node(10, "10.1.1.1"),
            node(10, "10.1.1.2"),
            node(10, "10.1.1.3"),
            node(20, "10.2.1.1"),
            node(20, "10.2.1.2"),
            node(20, "10.2.1.3"),
        ],
    );
    let mut index = 0;
    set_bidirectional_link(
        &mut ctx,
        &mut index,
        &link_name(10, "10.1.1.1", 2),
        &itf(10, "10.1.1.1", 2),
        &itf(10, "10.1.1.2", 2),
    );
    set_bidirectional_link(
        &mut ctx,
        &mut index,
        &link_name(10, "10.1.1.1", 3),
        &itf(10, "10.1.1.1", 3),
        &itf(10, "10.1.1.3", 3),
    );
    set_bidirectional_link(
        &mut ctx,
        &mut index,
        &primary_cross_link(),
        &itf(10, "10.1.1.2", 8),
        &itf(20, "10.2.1.1", 8),
    );
    set_bidirectional_link(
        &mut ctx,
        &mut index,
        &backup_cross_link(),
        &itf(10, "10.1.1.3", 8),
        &itf(20, "10.2.1.1", 9),
    );
    set_bidirectional_link(
        &mut ctx,
        &mut index,
        &link_name(20, "10.2.1.1", 2),
        &itf(20, "10.2.1.1", 2),
        &itf(20, "10.2.1.2", 2),
    );
    set_bidirectional_link(
        &mut ctx,
        &mut index,
        &link_name(20, "10.2.1.1", 3),
        &itf(20, "10.2.1.1", 3),
        &itf(20, "10.2.1.3", 3),
    );
    ctx
}

/// Two PNFs with no connecting records at all.
pub fn no_path_context() -> InMemoryContext {
    let mut ctx = InMemoryContext::new();
    set_pnfs(&mut ctx, &[node(10, "10.1.1.1"), node(20, "10.2.1.1")]);
    ctx
}

/// A single PNF, for the trivial src == dst case.
pub fn same_node_context() -> InMemoryContext {
    let mut ctx = InMemoryContext::new();
    set_pnfs(&mut ctx, &[node(10, "10.1.1.1")]);
    ctx
}

/// Mandatory parameter set for one computation.
pub fn base_params(src: &str, dst: &str) -> HashMap<String, String> {
    [
        (PARAM_PNFS_PREFIX, "pnfs"),
        (PARAM_LINKS_PREFIX, "links"),
        (PARAM_SRC_NODE, src),
        (PARAM_DST_NODE, dst),
        (PARAM_RESPONSE_PREFIX, RESPONSE_PREFIX),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}

/// Parameters for the primary-plus-backup variant.
pub fn backup_params(src: &str, dst: &str, backup_dst: &str) -> HashMap<String, String> {
    let mut params = base_params(src, dst);
    params.insert(PARAM_REQUIRE_BACKUP.to_string(), "true".to_string());
    params.insert(PARAM_BACKUP_DST_NODE.to_string(), backup_dst.to_string());
    params
}
