//! Hook-driven depth-first traversal.

use log::debug;

use crate::types::{Edge, GraphError, GraphResult, Label, VertexId, Weight};

use super::Graph;

/// Callbacks invoked by [`Graph::depth_first_traverse`].
///
/// Every method has an empty default, so implementors only override what
/// they need. For a vertex `v` the call sequence is:
///
/// 1. `on_enter(v)` once, before any neighbor is looked at;
/// 2. for each neighbor `u` not yet visited, in adjacency order:
///    `on_before_child(v, u)`, the full visit of `u`, `on_after_child(v, u)`;
/// 3. `on_exit(v)` once, after all neighbors.
#[allow(unused_variables)]
pub trait TraversalHooks<L> {
    fn on_enter(&mut self, vertex: &L, visited: &Visited<'_, L>) {}

    fn on_before_child(
        &mut self,
        vertex: &L,
        visited: &Visited<'_, L>,
        child: &L,
        weight: Weight,
    ) {
    }

    fn on_after_child(
        &mut self,
        vertex: &L,
        visited: &Visited<'_, L>,
        child: &L,
        weight: Weight,
    ) {
    }

    fn on_exit(&mut self, vertex: &L, visited: &Visited<'_, L>) {}
}

/// Read-only view of the vertices visited so far, in visiting order.
pub struct Visited<'g, L> {
    graph: &'g Graph<L>,
    marks: Vec<bool>,
    order: Vec<VertexId>,
}

impl<'g, L: Label> Visited<'g, L> {
    fn new(graph: &'g Graph<L>) -> Self {
        Self {
            graph,
            marks: vec![false; graph.vertex_count()],
            order: Vec::new(),
        }
    }

    fn mark(&mut self, id: VertexId) {
        self.marks[id.0] = true;
        self.order.push(id);
    }

    fn contains_id(&self, id: VertexId) -> bool {
        self.marks[id.0]
    }

    /// Whether `label` has already been entered.
    pub fn contains(&self, label: &L) -> bool {
        self.graph
            .vertex_id(label)
            .is_some_and(|id| self.contains_id(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visited labels in the order they were entered.
    pub fn iter(&self) -> impl Iterator<Item = &'g L> + '_ {
        let graph = self.graph;
        self.order.iter().map(move |&id| graph.node(id).label())
    }
}

/// One vertex on the DFS stack.
struct Frame {
    vertex: VertexId,
    /// Index of the next adjacency entry to look at.
    cursor: usize,
    /// Child being explored, owed an `on_after_child` when control returns.
    pending: Option<(VertexId, Weight)>,
}

impl<L: Label> Graph<L> {
    /// Depth-first walk from `start`, reporting progress to `hooks`.
    ///
    /// Only vertices reachable from `start` are entered, each exactly once.
    /// Fails with [`GraphError::VertexNotFound`] if `start` is not in the graph.
    ///
    /// The walk keeps its own frame stack on the heap, so path length is
    /// bounded by memory rather than by the thread stack.
    pub fn depth_first_traverse<H>(&self, start: &L, hooks: &mut H) -> GraphResult<()>
    where
        H: TraversalHooks<L> + ?Sized,
    {
        let start_id = self
            .vertex_id(start)
            .ok_or_else(|| GraphError::VertexNotFound(start.to_string()))?;

        let mut visited = Visited::new(self);
        let mut stack = vec![self.enter(start_id, &mut visited, hooks)];

        while let Some(frame) = stack.last_mut() {
            let vertex = self.node(frame.vertex);

            if let Some((child, weight)) = frame.pending.take() {
                let child_label = self.node(child).label();
                hooks.on_after_child(vertex.label(), &visited, child_label, weight);
            }

            let mut next = None;
            while let Some((child, weight)) = vertex.neighbor_at(frame.cursor) {
                frame.cursor += 1;
                if !visited.contains_id(child) {
                    next = Some((child, weight));
                    break;
                }
            }

            match next {
                Some((child, weight)) => {
                    frame.pending = Some((child, weight));
                    let child_label = self.node(child).label();
                    hooks.on_before_child(vertex.label(), &visited, child_label, weight);
                    let child_frame = self.enter(child, &mut visited, hooks);
                    stack.push(child_frame);
                }
                None => {
                    hooks.on_exit(vertex.label(), &visited);
                    stack.pop();
                }
            }
        }

        debug!("DFS from {} entered {} vertices", start, visited.len());
        Ok(())
    }

    fn enter<'g, H>(
        &'g self,
        id: VertexId,
        visited: &mut Visited<'g, L>,
        hooks: &mut H,
    ) -> Frame
    where
        H: TraversalHooks<L> + ?Sized,
    {
        visited.mark(id);
        hooks.on_enter(self.node(id).label(), visited);
        Frame {
            vertex: id,
            cursor: 0,
            pending: None,
        }
    }

    /// Labels reachable from `start` in depth-first pre-order.
    pub fn dfs_preorder(&self, start: &L) -> GraphResult<Vec<L>> {
        let mut order = DfsOrder::new();
        self.depth_first_traverse(start, &mut order)?;
        Ok(order.preorder)
    }
}

/// Hook set recording the classic DFS bookkeeping: pre-order, post-order
/// and the tree edges of the traversal.
#[derive(Debug, Clone)]
pub struct DfsOrder<L> {
    /// Vertices in the order they were entered.
    pub preorder: Vec<L>,
    /// Vertices in the order they were finished.
    pub postorder: Vec<L>,
    /// Edges along which a new vertex was discovered.
    pub tree_edges: Vec<Edge<L>>,
}

impl<L: Label> DfsOrder<L> {
    pub fn new() -> Self {
        Self {
            preorder: Vec::new(),
            postorder: Vec::new(),
            tree_edges: Vec::new(),
        }
    }

    /// Reverse post-order. For a directed acyclic graph this is a
    /// topological order of the reachable vertices.
    pub fn reverse_postorder(&self) -> Vec<L> {
        self.postorder.iter().rev().cloned().collect()
    }
}

impl<L: Label> Default for DfsOrder<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> TraversalHooks<L> for DfsOrder<L> {
    fn on_enter(&mut self, vertex: &L, _visited: &Visited<'_, L>) {
        self.preorder.push(vertex.clone());
    }

    fn on_before_child(
        &mut self,
        vertex: &L,
        _visited: &Visited<'_, L>,
        child: &L,
        weight: Weight,
    ) {
        self.tree_edges
            .push(Edge::new(vertex.clone(), child.clone(), weight));
    }

    fn on_exit(&mut self, vertex: &L, _visited: &Visited<'_, L>) {
        self.postorder.push(vertex.clone());
    }
}
