//! Path computation engine
//!
//! The typed core ([`PathRequest`] / [`PathResult`] / [`compute`]) and the
//! flat parameter-map entry points the workflow engine invokes
//! ([`compute_path`] / [`compute_paths`]). The entry points own parameter
//! validation, context decoding and result encoding; the core is pure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use pce_ctx_memory::{read_link_records, read_pnf_records, write_solutions, ContextMemory, SolutionKind};
use pce_topo_types::{LogicalLink, PathHop, Pnf, Topology};

use crate::error::PathEngineError;
use crate::graph::from_topology;
use crate::search::{shortest_path, PathConstraints};
use crate::Result;

pub const PARAM_PNFS_PREFIX: &str = "pnfs-pfx";
pub const PARAM_LINKS_PREFIX: &str = "links-pfx";
pub const PARAM_SRC_NODE: &str = "src-node";
pub const PARAM_DST_NODE: &str = "dst-node";
pub const PARAM_RESPONSE_PREFIX: &str = "response-pfx";
pub const PARAM_OUTPUT_END_TO_END: &str = "output-end-to-end-path";
pub const PARAM_REQUIRE_BACKUP: &str = "require-backuppath";
pub const PARAM_BACKUP_DST_NODE: &str = "dst-node-backup";

/// Terminal status consumed by the calling workflow engine for branch
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathStatus {
    Success,
    Failure,
    NotFound,
}

impl PathStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathStatus::Success => "success",
            PathStatus::Failure => "failure",
            PathStatus::NotFound => "not-found",
        }
    }
}

impl std::fmt::Display for PathStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One path computation, fully typed.
#[derive(Debug, Clone)]
pub struct PathRequest {
    pub topology: Topology,
    pub src: Pnf,
    pub dst: Pnf,
    /// Emit every hop including intra-domain segments; when false only
    /// cross-domain hop boundaries are reported.
    pub end_to_end: bool,
    pub backup_dst: Option<Pnf>,
}

/// Outcome of one computation. `primary`/`secondary` already reflect the
/// end-to-end hop filter of the request.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub status: PathStatus,
    pub primary: Vec<PathHop>,
    pub secondary: Vec<PathHop>,
}

/// Run the search over an already-validated topology.
///
/// Status mapping: no primary path yields `NotFound`; a found primary with a
/// requested but unsatisfiable backup yields `Failure` with the primary hops
/// kept and an empty secondary list; everything else is `Success`.
pub fn compute(request: &PathRequest) -> PathResult {
    let graph = from_topology(&request.topology);

    let primary_links = match shortest_path(
        &graph,
        &request.src,
        &request.dst,
        &PathConstraints::default(),
    ) {
        Some(links) => links,
        None => {
            log::debug!("no path from {} to {}", request.src, request.dst);
            return PathResult {
                status: PathStatus::NotFound,
                primary: Vec::new(),
                secondary: Vec::new(),
            };
        }
    };
    let primary = hops(&primary_links, request.end_to_end);

    let Some(backup_dst) = &request.backup_dst else {
        return PathResult {
            status: PathStatus::Success,
            primary,
            secondary: Vec::new(),
        };
    };

    let constraints = residual_constraints(&primary_links);
    match shortest_path(&graph, &request.src, backup_dst, &constraints) {
        Some(secondary_links) => PathResult {
            status: PathStatus::Success,
            primary,
            secondary: hops(&secondary_links, request.end_to_end),
        },
        None => {
            log::debug!("no backup path from {} to {}", request.src, backup_dst);
            PathResult {
                status: PathStatus::Failure,
                primary,
                secondary: Vec::new(),
            }
        }
    }
}

/// Residual restrictions for the backup search: every cross-domain hop of
/// the primary path excludes its physical link (removing both logical
/// directions) and commits its node pair for the permission checks.
fn residual_constraints(primary: &[LogicalLink]) -> PathConstraints {
    let mut constraints = PathConstraints::default();
    for edge in primary {
        if !edge.link().is_inner_domain() {
            constraints.excluded_links.insert(edge.link().clone());
            constraints
                .prior_crossings
                .push((edge.src().clone(), edge.dst().clone()));
        }
    }
    constraints
}

fn hops(links: &[LogicalLink], end_to_end: bool) -> Vec<PathHop> {
    links
        .iter()
        .filter(|edge| end_to_end || !edge.link().is_inner_domain())
        .map(|edge| {
            let (src_interface, dst_interface) = match edge.link().endpoints() {
                Some((src, dst)) => (
                    Some(src.name.raw().to_string()),
                    Some(dst.name.raw().to_string()),
                ),
                None => (None, None),
            };
            PathHop {
                original_link: edge.link().name().to_string(),
                src_pnf: edge.src().name().to_string(),
                dst_pnf: edge.dst().name().to_string(),
                src_interface,
                dst_interface,
                inner_domain: edge.link().is_inner_domain(),
            }
        })
        .collect()
}

fn required<'a>(params: &'a HashMap<String, String>, name: &str) -> Result<&'a str> {
    params
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| PathEngineError::MissingParameter {
            name: name.to_string(),
        })
}

/// Case-insensitive `"true"` is true; anything else, including absence, is
/// false. This is the boolean convention the workflow engine relies on.
fn flag(params: &HashMap<String, String>, name: &str) -> bool {
    params
        .get(name)
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Single-path entry point. Reads the topology from context memory, writes
/// the primary solution list under `response-pfx` and returns the status.
pub fn compute_path(
    params: &HashMap<String, String>,
    ctx: &mut dyn ContextMemory,
) -> Result<PathStatus> {
    run(params, ctx, false)
}

/// Two-path entry point. When `require-backuppath` is true,
/// `dst-node-backup` becomes mandatory and a secondary solution list is
/// written as well; otherwise this degrades to the single-path behavior.
pub fn compute_paths(
    params: &HashMap<String, String>,
    ctx: &mut dyn ContextMemory,
) -> Result<PathStatus> {
    run(params, ctx, true)
}

fn run(
    params: &HashMap<String, String>,
    ctx: &mut dyn ContextMemory,
    backup_variant: bool,
) -> Result<PathStatus> {
    let result = execute(params, ctx, backup_variant);
    if let Err(error) = &result {
        log::error!("path computation failed: {}", error);
    }
    result
}

fn execute(
    params: &HashMap<String, String>,
    ctx: &mut dyn ContextMemory,
    backup_variant: bool,
) -> Result<PathStatus> {
    let pnfs_prefix = required(params, PARAM_PNFS_PREFIX)?;
    let links_prefix = required(params, PARAM_LINKS_PREFIX)?;
    let src = required(params, PARAM_SRC_NODE)?;
    let dst = required(params, PARAM_DST_NODE)?;
    let response_prefix = required(params, PARAM_RESPONSE_PREFIX)?;
    let backup_dst = if backup_variant && flag(params, PARAM_REQUIRE_BACKUP) {
        Some(Pnf::new(required(params, PARAM_BACKUP_DST_NODE)?))
    } else {
        None
    };
    let end_to_end = flag(params, PARAM_OUTPUT_END_TO_END);

    log::debug!(
        "computing path {} -> {} (end-to-end: {}, backup: {:?})",
        src,
        dst,
        end_to_end,
        backup_dst.as_ref().map(Pnf::name)
    );

    let pnf_records = read_pnf_records(ctx, pnfs_prefix)?;
    let link_records = read_link_records(ctx, links_prefix)?;
    let topology = Topology::from_records(&pnf_records, &link_records)?;

    let request = PathRequest {
        topology,
        src: Pnf::new(src),
        dst: Pnf::new(dst),
        end_to_end,
        backup_dst: backup_dst.clone(),
    };
    let result = compute(&request);

    write_solutions(ctx, response_prefix, SolutionKind::Primary, &result.primary);
    if backup_dst.is_some() {
        write_solutions(ctx, response_prefix, SolutionKind::Secondary, &result.secondary);
    }

    log::debug!("path computation finished: {}", result.status);
    Ok(result.status)
}
