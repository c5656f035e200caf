//! Core graph structure — a label-keyed vertex registry with per-vertex adjacency.

use indexmap::map::Entry;
use indexmap::IndexMap;
use log::{debug, trace};
use serde::Serialize;

use crate::types::{Edge, GraphConfig, Label, Vertex, VertexId, Weight, UNIT_WEIGHT};

/// Summary counters for a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Number of distinct vertices.
    pub vertices: usize,
    /// Number of distinct edges (an undirected edge counts once).
    pub edges: usize,
    /// Number of `add_edge` calls.
    pub insertions: usize,
    /// Whether edges are directed.
    pub oriented: bool,
    /// Whether edges carry caller-supplied weights.
    pub weighted: bool,
}

/// An in-memory graph built from edge insertions.
///
/// Vertices live in an insertion-ordered registry and are addressed by their
/// position ([`VertexId`]); adjacency entries store ids rather than
/// references. Vertices are created implicitly by [`Graph::add_edge`] and are
/// never removed.
#[derive(Debug, Clone)]
pub struct Graph<L> {
    config: GraphConfig,
    /// Label -> vertex record. Position in the map is the vertex id.
    vertices: IndexMap<L, Vertex<L>>,
    /// Number of `add_edge` calls.
    insertions: usize,
}

impl<L: Label> Graph<L> {
    /// Create an empty graph.
    pub fn new(oriented: bool, weighted: bool) -> Self {
        Self::with_config(GraphConfig::new(oriented, weighted))
    }

    /// Create an empty graph from a config.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            vertices: IndexMap::new(),
            insertions: 0,
        }
    }

    /// Empty directed, weighted graph.
    pub fn directed() -> Self {
        Self::new(true, true)
    }

    /// Empty undirected, weighted graph.
    pub fn undirected() -> Self {
        Self::new(false, true)
    }

    /// Build a graph from a sequence of edges.
    pub fn from_edges<I>(config: GraphConfig, edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<L>>,
    {
        let mut graph = Self::with_config(config);
        graph.extend(edges);
        graph
    }

    /// Insert an edge, creating either endpoint if it does not exist yet.
    ///
    /// The weight is replaced by 1 when the graph is unweighted. Re-inserting
    /// an existing pair overwrites its weight but still bumps the degree
    /// counters: degrees count insertions, not distinct neighbors.
    pub fn add_edge(&mut self, from: L, to: L, weight: Weight) {
        let weight = if self.config.weighted {
            weight
        } else {
            UNIT_WEIGHT
        };
        trace!("add_edge {} -> {} ({})", from, to, weight);

        let from_id = self.intern(from);
        let to_id = self.intern(to);

        self.vertices[from_id.0].set_neighbor(to_id, weight);
        self.vertices[from_id.0].record_out();
        self.vertices[to_id.0].record_in();

        if !self.config.oriented {
            self.vertices[to_id.0].set_neighbor(from_id, weight);
            self.vertices[to_id.0].record_out();
            self.vertices[from_id.0].record_in();
        }

        self.insertions += 1;
    }

    /// Insert an edge with the default weight of 1.
    pub fn add_unweighted_edge(&mut self, from: L, to: L) {
        self.add_edge(from, to, UNIT_WEIGHT);
    }

    /// Look up a label, registering a fresh vertex the first time it is seen.
    fn intern(&mut self, label: L) -> VertexId {
        match self.vertices.entry(label) {
            Entry::Occupied(entry) => VertexId(entry.index()),
            Entry::Vacant(entry) => {
                let id = VertexId(entry.index());
                debug!("New vertex {} (id {})", entry.key(), id.0);
                let vertex = Vertex::new(entry.key().clone());
                entry.insert(vertex);
                id
            }
        }
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn is_oriented(&self) -> bool {
        self.config.oriented
    }

    pub fn is_weighted(&self) -> bool {
        self.config.weighted
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct edges. Each undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.vertices.values().map(Vertex::neighbor_count).sum();
        if self.config.oriented {
            return entries;
        }
        // A self-loop occupies a single adjacency entry; every other
        // undirected edge occupies two.
        let loops = self
            .vertices
            .values()
            .enumerate()
            .filter(|(i, v)| v.weight_to(VertexId(*i)).is_some())
            .count();
        (entries - loops) / 2 + loops
    }

    /// Number of `add_edge` calls so far.
    pub fn insertions(&self) -> usize {
        self.insertions
    }

    /// True if no edge has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, label: &L) -> bool {
        self.vertices.contains_key(label)
    }

    /// Get a vertex by label.
    pub fn vertex(&self, label: &L) -> Option<&Vertex<L>> {
        self.vertices.get(label)
    }

    /// Resolve a label to its id.
    pub fn vertex_id(&self, label: &L) -> Option<VertexId> {
        self.vertices.get_index_of(label).map(VertexId)
    }

    /// Get a vertex by id.
    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex<L>> {
        self.vertices.get_index(id.0).map(|(_, v)| v)
    }

    /// Vertex record for an id handed out by this graph.
    pub(crate) fn node(&self, id: VertexId) -> &Vertex<L> {
        &self.vertices[id.0]
    }

    /// All vertices in order of first appearance.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<L>> + '_ {
        self.vertices.values()
    }

    /// All labels in order of first appearance.
    pub fn labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.vertices.keys()
    }

    /// Outgoing neighbors of `label` with weights. Empty for unknown labels.
    pub fn neighbors<'a>(&'a self, label: &L) -> impl Iterator<Item = (&'a L, Weight)> + 'a {
        self.vertices
            .get(label)
            .into_iter()
            .flat_map(move |v| v.neighbors().map(move |(id, w)| (self.node(id).label(), w)))
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn weight(&self, from: &L, to: &L) -> Option<Weight> {
        let to_id = self.vertex_id(to)?;
        self.vertex(from)?.weight_to(to_id)
    }

    /// `(in_degree, out_degree)` of a vertex.
    pub fn degree(&self, label: &L) -> Option<(usize, usize)> {
        self.vertex(label).map(|v| (v.in_degree(), v.out_degree()))
    }

    /// Every distinct edge. Undirected edges are yielded once, from the
    /// endpoint that was registered first.
    pub fn edges(&self) -> impl Iterator<Item = Edge<&L>> + '_ {
        let oriented = self.config.oriented;
        self.vertices
            .values()
            .enumerate()
            .flat_map(move |(i, vertex)| {
                vertex
                    .neighbors()
                    .filter(move |(to, _)| oriented || to.0 >= i)
                    .map(move |(to, w)| Edge::new(vertex.label(), self.node(to).label(), w))
            })
    }

    /// Summary counters.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertices: self.vertex_count(),
            edges: self.edge_count(),
            insertions: self.insertions,
            oriented: self.config.oriented,
            weighted: self.config.weighted,
        }
    }
}

impl<L: Label> Default for Graph<L> {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl<L: Label> Extend<Edge<L>> for Graph<L> {
    fn extend<I: IntoIterator<Item = Edge<L>>>(&mut self, iter: I) {
        for edge in iter {
            self.add_edge(edge.from, edge.to, edge.weight);
        }
    }
}
