//! CLI command implementations.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use crate::graph::{DfsOrder, Graph};
use crate::types::{GraphConfig, GraphResult, Weight};

use super::input::load_graph;

/// Display vertex/edge counts and per-vertex degrees.
pub fn cmd_info(path: &Path, config: GraphConfig, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, config)?;
    let stats = graph.stats();

    if json {
        let degrees: Vec<serde_json::Value> = sorted_labels(&graph)
            .into_iter()
            .filter_map(|label| {
                graph.vertex(label).map(|v| {
                    serde_json::json!({
                        "vertex": label,
                        "in_degree": v.in_degree(),
                        "out_degree": v.out_degree(),
                    })
                })
            })
            .collect();
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "stats": stats,
            "degrees": degrees,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Mode: {}", config.describe());
        println!("Vertices: {}", stats.vertices);
        println!("Edges: {}", stats.edges);
        println!("Insertions: {}", stats.insertions);
        println!("Degrees (in/out):");
        for label in sorted_labels(&graph) {
            if let Some(v) = graph.vertex(label) {
                println!("  {}: {}/{}", label, v.in_degree(), v.out_degree());
            }
        }
    }
    Ok(())
}

/// Print single-source shortest distances.
pub fn cmd_shortest(path: &Path, config: GraphConfig, source: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, config)?;
    let distances = graph.shortest_path_from(&source.to_string())?;
    let rows = sorted_distances(&distances);

    if json {
        let map: serde_json::Map<String, serde_json::Value> = rows
            .iter()
            .map(|(label, d)| ((*label).clone(), serde_json::json!(d)))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "source": source,
                "distances": map,
            }))
            .unwrap_or_default()
        );
    } else if rows.is_empty() {
        println!("Vertex {} is not in the graph.", source);
    } else {
        println!("Shortest distances from {}:", source);
        for (label, d) in rows {
            println!("  {} {}", label, d);
        }
    }
    Ok(())
}

/// Print the all-pairs distance table.
pub fn cmd_all_pairs(path: &Path, config: GraphConfig, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, config)?;
    let table = graph.shortest_path_all_pairs()?;

    if json {
        let map: serde_json::Map<String, serde_json::Value> = sorted_labels(&graph)
            .into_iter()
            .filter_map(|label| {
                table.get(label).map(|row| {
                    let inner: serde_json::Map<String, serde_json::Value> = sorted_distances(row)
                        .into_iter()
                        .map(|(to, d)| (to.clone(), serde_json::json!(d)))
                        .collect();
                    (label.clone(), serde_json::Value::Object(inner))
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&map).unwrap_or_default()
        );
    } else {
        for label in sorted_labels(&graph) {
            match table.get(label) {
                Some(row) => {
                    let cells: Vec<String> = sorted_distances(row)
                        .into_iter()
                        .map(|(to, d)| format!("{}={}", to, d))
                        .collect();
                    println!("{}: {}", label, cells.join(" "));
                }
                None => println!("{}: (reaches nothing)", label),
            }
        }
    }
    Ok(())
}

/// Print the DFS orders and tree edges from a start vertex.
pub fn cmd_dfs(path: &Path, config: GraphConfig, start: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, config)?;
    let mut order = DfsOrder::new();
    graph.depth_first_traverse(&start.to_string(), &mut order)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "start": start,
                "preorder": order.preorder,
                "postorder": order.postorder,
                "tree_edges": order.tree_edges,
            }))
            .unwrap_or_default()
        );
    } else {
        println!("Pre-order: {}", order.preorder.join(" "));
        println!("Post-order: {}", order.postorder.join(" "));
        println!("Tree edges:");
        for edge in &order.tree_edges {
            println!("  {}", edge);
        }
    }
    Ok(())
}

/// Numeric labels sort numerically, everything else lexicographically.
fn compare_labels(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

fn sorted_labels(graph: &Graph<String>) -> Vec<&String> {
    let mut labels: Vec<&String> = graph.labels().collect();
    labels.sort_by(|a, b| compare_labels(a, b));
    labels
}

fn sorted_distances(distances: &HashMap<String, Weight>) -> Vec<(&String, Weight)> {
    let mut rows: Vec<(&String, Weight)> = distances.iter().map(|(k, &v)| (k, v)).collect();
    rows.sort_by(|a, b| compare_labels(a.0, b.0));
    rows
}
