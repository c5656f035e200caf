//! graph-theory — in-memory graphs with shortest paths and hook-driven traversal.
//!
//! A [`Graph`] is built from edge insertions (directed or undirected,
//! weighted or not) and answers single-source and all-pairs shortest-distance
//! queries, plus a depth-first traversal that reports to caller-supplied
//! [`TraversalHooks`].

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    bfs, dijkstra, floyd_warshall, DfsOrder, DistanceMatrix, DistanceTable, Graph, GraphBuilder,
    GraphStats, TraversalHooks, Visited,
};
pub use types::{
    Edge, GraphConfig, GraphError, GraphResult, Label, Vertex, VertexId, Weight, UNIT_WEIGHT,
};
