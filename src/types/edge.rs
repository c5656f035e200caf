//! The edge value type.

use serde::Serialize;

use super::Weight;

/// A directed relation from one vertex to another.
///
/// Generic over the label so the graph can hand out borrowed edges
/// (`Edge<&L>`) while the edge-list reader produces owned ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<L> {
    /// Origin vertex.
    pub from: L,
    /// Destination vertex.
    pub to: L,
    /// Edge weight.
    pub weight: Weight,
}

impl<L> Edge<L> {
    /// Create a new edge.
    pub fn new(from: L, to: L, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

impl<L: std::fmt::Display> std::fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}
