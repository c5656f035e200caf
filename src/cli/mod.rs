//! Command-line front end: edge-list input and command implementations.

pub mod commands;
pub mod input;

pub use input::{load_graph, parse_edge_list, read_graph};
