//! Vertex identity and adjacency record.

use indexmap::IndexMap;
use serde::Serialize;

use super::Weight;

/// Position of a vertex in its graph's registry.
///
/// Ids are assigned in order of first appearance and never change, since
/// vertices are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// A labelled vertex with its outgoing adjacency.
///
/// Neighbors are referenced by [`VertexId`] into the owning graph, so a
/// vertex never owns or borrows another vertex.
#[derive(Debug, Clone)]
pub struct Vertex<L> {
    label: L,
    /// Neighbor id -> edge weight, in neighbor insertion order.
    adjacency: IndexMap<VertexId, Weight>,
    in_degree: usize,
    out_degree: usize,
}

impl<L> Vertex<L> {
    /// Create a vertex with no neighbors and zero degrees.
    pub fn new(label: L) -> Self {
        Self {
            label,
            adjacency: IndexMap::new(),
            in_degree: 0,
            out_degree: 0,
        }
    }

    /// Insert or overwrite the edge to `other`, returning the previous weight.
    ///
    /// Degree counters are left alone; they depend on the graph's orientation
    /// and are maintained by the graph.
    pub fn set_neighbor(&mut self, other: VertexId, weight: Weight) -> Option<Weight> {
        self.adjacency.insert(other, weight)
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    /// Number of edge insertions ending at this vertex.
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    /// Number of edge insertions starting at this vertex.
    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    /// `in_degree + out_degree`.
    pub fn degree(&self) -> usize {
        self.in_degree + self.out_degree
    }

    /// Outgoing neighbors with their weights, in insertion order.
    pub fn neighbors(&self) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.adjacency.iter().map(|(&id, &w)| (id, w))
    }

    /// Weight of the edge to `other`, if there is one.
    pub fn weight_to(&self, other: VertexId) -> Option<Weight> {
        self.adjacency.get(&other).copied()
    }

    /// Number of distinct outgoing neighbors.
    pub fn neighbor_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Adjacency entry at `index` in insertion order.
    pub(crate) fn neighbor_at(&self, index: usize) -> Option<(VertexId, Weight)> {
        self.adjacency.get_index(index).map(|(&id, &w)| (id, w))
    }

    pub(crate) fn record_out(&mut self) {
        self.out_degree += 1;
    }

    pub(crate) fn record_in(&mut self) {
        self.in_degree += 1;
    }
}
