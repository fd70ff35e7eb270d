//! Graph primitives
//!
//! Minimal contracts any topology element must satisfy to participate in
//! path search. Invalid topologies (dangling endpoint references) are
//! rejected at model-construction time, not here.

use std::fmt::Debug;
use std::hash::Hash;

/// Opaque graph node identity. Only value equality and hashing are required
/// so that a vertex can key node sets and adjacency maps.
pub trait Vertex: Clone + Eq + Hash + Debug {}

/// Directed relation between two vertices with a domain-crossing permission
/// rule.
pub trait Edge<V: Vertex> {
    fn src(&self) -> &V;

    fn dst(&self) -> &V;

    /// Whether this edge may be taken given an already-committed
    /// domain-crossing pair `(src, dst)`.
    ///
    /// The answer depends on the specific pair being tested, not on the edge
    /// alone, so the same edge can be valid in one path context and invalid
    /// in another. Callers must evaluate this per candidate and never
    /// memoize the result.
    fn is_permitted(&self, src: &V, dst: &V) -> bool;
}
