//! Fluent API for building Graph instances.

use crate::types::{Edge, GraphConfig, Label, Weight};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Edges are buffered and inserted in order by [`GraphBuilder::build`], so
/// the mode flags may be set after the edges.
pub struct GraphBuilder<L> {
    config: GraphConfig,
    edges: Vec<Edge<L>>,
}

impl<L: Label> GraphBuilder<L> {
    /// Create a builder for an undirected, unweighted graph.
    pub fn new() -> Self {
        Self {
            config: GraphConfig::default(),
            edges: Vec::new(),
        }
    }

    /// Create a builder with a specific config.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            edges: Vec::new(),
        }
    }

    /// Set whether edges are directed.
    pub fn oriented(mut self, oriented: bool) -> Self {
        self.config.oriented = oriented;
        self
    }

    /// Set whether edge weights are kept.
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.config.weighted = weighted;
        self
    }

    /// Add an edge.
    pub fn edge(mut self, from: L, to: L, weight: Weight) -> Self {
        self.edges.push(Edge::new(from, to, weight));
        self
    }

    /// Add several edges.
    pub fn edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<L>>,
    {
        self.edges.extend(edges);
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph<L> {
        Graph::from_edges(self.config, self.edges)
    }
}

impl<L: Label> Default for GraphBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}
