//! Graph mode configuration.

use serde::Serialize;

/// Orientation and weighting mode of a graph. Fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphConfig {
    /// Edges are directed. When false every insertion also creates the reverse edge.
    pub oriented: bool,
    /// Edges carry caller-supplied weights. When false every weight is 1.
    pub weighted: bool,
}

impl GraphConfig {
    /// Create a config from both flags.
    pub fn new(oriented: bool, weighted: bool) -> Self {
        Self { oriented, weighted }
    }

    /// Short human-readable description, e.g. "directed, weighted".
    pub fn describe(&self) -> String {
        format!(
            "{}, {}",
            if self.oriented { "directed" } else { "undirected" },
            if self.weighted { "weighted" } else { "unweighted" }
        )
    }
}
