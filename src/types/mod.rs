//! All data types for the graph-theory library.

pub mod config;
pub mod edge;
pub mod error;
pub mod vertex;

use std::fmt::Display;
use std::hash::Hash;

pub use config::GraphConfig;
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use vertex::{Vertex, VertexId};

/// Edge weight. Unweighted graphs store 1 for every edge.
pub type Weight = i64;

/// Weight assigned to every edge of an unweighted graph.
pub const UNIT_WEIGHT: Weight = 1;

/// Anything usable as a vertex label.
///
/// `Display` is required so that errors can name the offending vertex.
pub trait Label: Clone + Eq + Hash + Display {}

impl<T: Clone + Eq + Hash + Display> Label for T {}
