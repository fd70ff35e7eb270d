//! Shortest-path search
//!
//! Breadth-first search by hop count (links in this domain are uniformly
//! weighted) over the permitted-edge subgraph. Deterministic under a fixed
//! record order: edges are visited in the order the topology declared them.

use std::collections::{HashMap, HashSet, VecDeque};

use pce_topo_types::{Edge, Link, LogicalLink, Pnf};

use crate::graph::DirectedGraph;

/// Restrictions carried into one search invocation.
#[derive(Debug, Clone, Default)]
pub struct PathConstraints {
    /// Physical links whose logical edges (both directions) must not be
    /// taken. Keyed on link identity, not edge direction.
    pub excluded_links: HashSet<Link>,
    /// Cross-domain `(src, dst)` pairs committed by an earlier path; every
    /// candidate edge must be permitted against each of them.
    pub prior_crossings: Vec<(Pnf, Pnf)>,
}

/// Least-hop path from `src` to `dst`, or `None` when no permitted path
/// exists. `src == dst` short-circuits to the trivial zero-hop solution.
pub fn shortest_path(
    graph: &DirectedGraph<Pnf, LogicalLink>,
    src: &Pnf,
    dst: &Pnf,
    constraints: &PathConstraints,
) -> Option<Vec<LogicalLink>> {
    if !graph.contains(src) || !graph.contains(dst) {
        log::debug!("search endpoint not present in graph: {} -> {}", src, dst);
        return None;
    }
    if src == dst {
        return Some(Vec::new());
    }

    let mut visited: HashSet<Pnf> = HashSet::new();
    visited.insert(src.clone());
    let mut predecessors: HashMap<Pnf, LogicalLink> = HashMap::new();
    let mut queue: VecDeque<Pnf> = VecDeque::new();
    queue.push_back(src.clone());

    while let Some(node) = queue.pop_front() {
        for edge in graph.out_edges(&node) {
            let next = edge.dst();
            if visited.contains(next) {
                continue;
            }
            if constraints.excluded_links.contains(edge.link()) {
                continue;
            }
            if !crossings_permit(edge, &node, &predecessors, &constraints.prior_crossings) {
                continue;
            }
            predecessors.insert(next.clone(), edge.clone());
            if next == dst {
                return Some(reconstruct(dst, &predecessors));
            }
            visited.insert(next.clone());
            queue.push_back(next.clone());
        }
    }
    None
}

/// Evaluate the candidate edge against every committed crossing: the
/// cross-domain hops along its own partial path, walked from the predecessor
/// chain, plus any pairs carried over from a prior search. Evaluated fresh
/// per candidate; the permission predicate is never memoized.
fn crossings_permit(
    candidate: &LogicalLink,
    from: &Pnf,
    predecessors: &HashMap<Pnf, LogicalLink>,
    prior_crossings: &[(Pnf, Pnf)],
) -> bool {
    let mut cursor = from;
    while let Some(edge) = predecessors.get(cursor) {
        if !edge.link().is_inner_domain() && !candidate.is_permitted(edge.src(), edge.dst()) {
            return false;
        }
        cursor = edge.src();
    }
    prior_crossings
        .iter()
        .all(|(src, dst)| candidate.is_permitted(src, dst))
}

fn reconstruct(dst: &Pnf, predecessors: &HashMap<Pnf, LogicalLink>) -> Vec<LogicalLink> {
    let mut hops = Vec::new();
    let mut cursor = dst;
    while let Some(edge) = predecessors.get(cursor) {
        hops.push(edge.clone());
        cursor = edge.src();
    }
    hops.reverse();
    hops
}
