//! Edge-list reader.
//!
//! One edge per line, whitespace separated: `from to [weight]`. Blank lines
//! and lines starting with `#` are skipped. The weight column is required for
//! weighted graphs and ignored otherwise.

use std::io::Read;
use std::path::Path;

use crate::graph::Graph;
use crate::types::{Edge, GraphConfig, GraphError, GraphResult, Weight, UNIT_WEIGHT};

/// Parse an edge list into owned edges.
pub fn parse_edge_list(text: &str, weighted: bool) -> GraphResult<Vec<Edge<String>>> {
    let mut edges = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        edges.push(parse_line(line, index + 1, weighted)?);
    }

    Ok(edges)
}

fn parse_line(line: &str, line_no: usize, weighted: bool) -> GraphResult<Edge<String>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let parse_error = |reason: String| GraphError::Parse {
        line: line_no,
        reason,
    };

    match fields.as_slice() {
        [from, to] | [from, to, _] if !weighted => {
            Ok(Edge::new(from.to_string(), to.to_string(), UNIT_WEIGHT))
        }
        [_, _] => Err(parse_error("missing weight for weighted graph".to_string())),
        [from, to, weight] => {
            let weight: Weight = weight
                .parse()
                .map_err(|_| parse_error(format!("invalid weight '{}'", weight)))?;
            Ok(Edge::new(from.to_string(), to.to_string(), weight))
        }
        _ => Err(parse_error(format!(
            "expected 'from to [weight]', found {} fields",
            fields.len()
        ))),
    }
}

/// Read an edge list from `reader` and build a graph with `config`.
pub fn read_graph<R: Read>(mut reader: R, config: GraphConfig) -> GraphResult<Graph<String>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let edges = parse_edge_list(&text, config.weighted)?;
    log::debug!("Read {} edges ({})", edges.len(), config.describe());
    Ok(Graph::from_edges(config, edges))
}

/// Load a graph from a file path, or from stdin when the path is `-`.
pub fn load_graph(path: &Path, config: GraphConfig) -> GraphResult<Graph<String>> {
    if path.as_os_str() == "-" {
        read_graph(std::io::stdin().lock(), config)
    } else {
        read_graph(std::fs::File::open(path)?, config)
    }
}
