//! Directed graph adjacency
//!
//! Built once per invocation from a validated [`Topology`]; no interior
//! mutability, all search state stays method-local in the caller.

use std::collections::HashMap;

use pce_topo_types::{Edge, LogicalLink, Pnf, Topology, Vertex};

/// Adjacency-list graph over the generic vertex/edge contracts.
///
/// Vertices must be registered before their outgoing edges; dangling edges
/// are a model-construction error caught upstream, so an edge from an
/// unregistered vertex is dropped with a debug trace rather than inserted.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V: Vertex, E: Edge<V>> {
    adjacency: HashMap<V, Vec<E>>,
}

impl<V: Vertex, E: Edge<V>> DirectedGraph<V, E> {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    pub fn add_edge(&mut self, edge: E) {
        match self.adjacency.get_mut(edge.src()) {
            Some(edges) => edges.push(edge),
            None => log::debug!("dropping edge from unregistered vertex {:?}", edge.src()),
        }
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn out_edges(&self, vertex: &V) -> &[E] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl<V: Vertex, E: Edge<V>> Default for DirectedGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the traversal graph for one invocation.
pub fn from_topology(topology: &Topology) -> DirectedGraph<Pnf, LogicalLink> {
    let mut graph = DirectedGraph::new();
    for pnf in topology.pnfs() {
        graph.add_vertex(pnf.clone());
    }
    for link in topology.links() {
        graph.add_edge(link.clone());
    }
    graph
}
