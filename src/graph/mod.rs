//! In-memory graph operations — the core data structure and its algorithms.

pub mod adjacency_graph;
pub mod builder;
pub mod paths;
pub mod traversal;

pub use adjacency_graph::{Graph, GraphStats};
pub use builder::GraphBuilder;
pub use paths::{bfs, dijkstra, floyd_warshall, DistanceMatrix, DistanceTable};
pub use traversal::{DfsOrder, TraversalHooks, Visited};
