//! Fluent API for building Graph instances by insertion index.

use crate::types::{GraphError, GraphResult};

use super::Graph;

struct PendingEdge {
    from: usize,
    to: usize,
    label: Option<String>,
    weight: f64,
}

/// Fluent builder for constructing a [`Graph`].
///
/// Vertices are referred to by the index returned from [`vertex`]. In the
/// built graph a vertex's id equals that index, so
/// [`Graph::vertex_by_id`] recovers its handle.
///
/// [`vertex`]: GraphBuilder::vertex
pub struct GraphBuilder<V> {
    directed: bool,
    vertices: Vec<V>,
    edges: Vec<PendingEdge>,
}

impl<V> GraphBuilder<V> {
    /// Create a builder for an undirected graph.
    pub fn new() -> Self {
        Self {
            directed: false,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Choose directed or undirected.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Add a vertex, returning its index.
    pub fn vertex(&mut self, data: V) -> usize {
        self.vertices.push(data);
        self.vertices.len() - 1
    }

    /// Add an unlabeled edge with weight 0.
    pub fn edge(&mut self, from: usize, to: usize) -> &mut Self {
        self.labeled_edge(from, to, None, 0.0)
    }

    /// Add an unlabeled weighted edge.
    pub fn weighted_edge(&mut self, from: usize, to: usize, weight: f64) -> &mut Self {
        self.labeled_edge(from, to, None, weight)
    }

    /// Add an edge with an optional label.
    pub fn labeled_edge(
        &mut self,
        from: usize,
        to: usize,
        label: Option<&str>,
        weight: f64,
    ) -> &mut Self {
        self.edges.push(PendingEdge {
            from,
            to,
            label: label.map(str::to_owned),
            weight,
        });
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<V>> {
        let size = self.vertices.len();
        let mut graph = Graph::new(self.directed);
        let handles: Vec<_> = self
            .vertices
            .into_iter()
            .map(|data| graph.add_vertex(data))
            .collect();

        for edge in self.edges {
            let lookup = |index: usize| {
                handles
                    .get(index)
                    .copied()
                    .ok_or(GraphError::IndexOutOfRange { index, size })
            };
            let from = lookup(edge.from)?;
            let to = lookup(edge.to)?;
            graph.add_edge(from, to, edge.label, edge.weight)?;
        }
        Ok(graph)
    }
}

impl<V> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
