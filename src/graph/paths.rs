//! Shortest-path algorithms: BFS (unweighted), Dijkstra (weighted) and
//! Floyd–Warshall (all pairs).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use log::{debug, warn};

use crate::types::{GraphError, GraphResult, Label, VertexId, Weight};

use super::Graph;

/// Per-vertex distances indexed by [`VertexId`]. `None` = unreachable.
pub type DistanceTable = Vec<Option<Weight>>;

/// Dense all-pairs matrix, `matrix[i][j]` = distance from vertex `i` to `j`.
pub type DistanceMatrix = Vec<Vec<Option<Weight>>>;

impl<L: Label> Graph<L> {
    /// Shortest distances from `source` to every reachable vertex.
    ///
    /// Weighted graphs use Dijkstra, unweighted graphs use BFS hop counts.
    /// An unknown source yields an empty map. Unreachable vertices are absent.
    pub fn shortest_path_from(&self, source: &L) -> GraphResult<HashMap<L, Weight>> {
        let Some(start) = self.vertex_id(source) else {
            warn!("Shortest path requested from unknown vertex {}", source);
            return Ok(HashMap::new());
        };

        let table = if self.is_weighted() {
            dijkstra(self, start)?
        } else {
            bfs(self, start)
        };

        Ok(table
            .into_iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|d| (self.node(VertexId(i)).label().clone(), d)))
            .collect())
    }

    /// Shortest distances between every ordered pair of distinct vertices.
    ///
    /// Unreachable pairs are absent, and so are vertices that reach nothing.
    /// O(V³) time and O(V²) space.
    pub fn shortest_path_all_pairs(&self) -> GraphResult<HashMap<L, HashMap<L, Weight>>> {
        let matrix = floyd_warshall(self)?;
        let mut result = HashMap::new();

        for (i, row) in matrix.into_iter().enumerate() {
            let targets: HashMap<L, Weight> = row
                .into_iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .filter_map(|(j, d)| d.map(|d| (self.node(VertexId(j)).label().clone(), d)))
                .collect();
            if !targets.is_empty() {
                result.insert(self.node(VertexId(i)).label().clone(), targets);
            }
        }

        Ok(result)
    }
}

/// Level-order hop counts from `start`. Each vertex is discovered once and
/// keeps the distance of its first-discovered path.
pub fn bfs<L: Label>(graph: &Graph<L>, start: VertexId) -> DistanceTable {
    let mut distances: DistanceTable = vec![None; graph.vertex_count()];
    let mut queue: VecDeque<(VertexId, Weight)> = VecDeque::new();

    distances[start.0] = Some(0);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for (neighbor, _) in graph.node(current).neighbors() {
            if distances[neighbor.0].is_some() {
                continue;
            }
            distances[neighbor.0] = Some(depth + 1);
            queue.push_back((neighbor, depth + 1));
        }
    }

    debug!(
        "BFS from {} reached {} vertices",
        graph.node(start).label(),
        distances.iter().flatten().count()
    );
    distances
}

/// Dijkstra's algorithm with a binary min-heap.
///
/// The heap may hold several entries for one vertex; only the one matching
/// the best recorded distance is expanded. Ties pop in `VertexId` order.
/// Fails with [`GraphError::InvalidWeight`] on the first negative edge it
/// relaxes, and with [`GraphError::DistanceOverflow`] when a reachable
/// vertex has no distance that fits in [`Weight`].
pub fn dijkstra<L: Label>(graph: &Graph<L>, start: VertexId) -> GraphResult<DistanceTable> {
    let mut distances: DistanceTable = vec![None; graph.vertex_count()];
    let mut overflowed = vec![false; graph.vertex_count()];
    let mut heap: BinaryHeap<Reverse<(Weight, VertexId)>> = BinaryHeap::new();

    distances[start.0] = Some(0);
    heap.push(Reverse((0, start)));

    while let Some(Reverse((distance, current))) = heap.pop() {
        // Stale entry: a shorter path was recorded after this was pushed.
        if matches!(distances[current.0], Some(best) if best < distance) {
            continue;
        }

        for (neighbor, weight) in graph.node(current).neighbors() {
            if weight < 0 {
                return Err(negative_weight(graph, current, neighbor, weight));
            }
            let Some(candidate) = distance.checked_add(weight) else {
                overflowed[neighbor.0] = true;
                continue;
            };
            if distances[neighbor.0].map_or(true, |known| candidate < known) {
                distances[neighbor.0] = Some(candidate);
                heap.push(Reverse((candidate, neighbor)));
            }
        }
    }

    // An overflowing sum only matters if no shorter path reached the vertex.
    if let Some(index) = (0..distances.len()).find(|&i| overflowed[i] && distances[i].is_none()) {
        return Err(distance_overflow(graph, start, VertexId(index)));
    }

    debug!(
        "Dijkstra from {} reached {} vertices",
        graph.node(start).label(),
        distances.iter().flatten().count()
    );
    Ok(distances)
}

/// Floyd–Warshall over the registry order.
///
/// Seeds each cell with the direct edge weight and the diagonal with 0.
/// Unreachable cells stay `None` and are never summed. A pair whose only
/// paths overflow [`Weight`] fails with [`GraphError::DistanceOverflow`].
pub fn floyd_warshall<L: Label>(graph: &Graph<L>) -> GraphResult<DistanceMatrix> {
    let n = graph.vertex_count();
    let mut dist: DistanceMatrix = vec![vec![None; n]; n];
    let mut overflowed = Vec::new();

    for (i, vertex) in graph.vertices().enumerate() {
        dist[i][i] = Some(0);
        for (j, weight) in vertex.neighbors() {
            if weight < 0 {
                return Err(negative_weight(graph, VertexId(i), j, weight));
            }
            let cell = &mut dist[i][j.0];
            if cell.map_or(true, |known| weight < known) {
                *cell = Some(weight);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = dist[i][k] else {
                continue;
            };
            for j in 0..n {
                let Some(kj) = dist[k][j] else {
                    continue;
                };
                match ik.checked_add(kj) {
                    Some(through) => {
                        if dist[i][j].map_or(true, |known| through < known) {
                            dist[i][j] = Some(through);
                        }
                    }
                    None if dist[i][j].is_none() => overflowed.push((i, j)),
                    None => {}
                }
            }
        }
    }

    if let Some(&(i, j)) = overflowed.iter().find(|&&(i, j)| dist[i][j].is_none()) {
        return Err(distance_overflow(graph, VertexId(i), VertexId(j)));
    }

    debug!("All-pairs shortest paths computed over {} vertices", n);
    Ok(dist)
}

fn negative_weight<L: Label>(
    graph: &Graph<L>,
    from: VertexId,
    to: VertexId,
    weight: Weight,
) -> GraphError {
    GraphError::InvalidWeight {
        from: graph.node(from).label().to_string(),
        to: graph.node(to).label().to_string(),
        weight,
    }
}

fn distance_overflow<L: Label>(graph: &Graph<L>, from: VertexId, to: VertexId) -> GraphError {
    GraphError::DistanceOverflow {
        from: graph.node(from).label().to_string(),
        to: graph.node(to).label().to_string(),
    }
}
