//! Serializable view of a graph for JSON output.

use serde::Serialize;

use crate::graph::Graph;
use crate::types::GraphResult;

/// One vertex in a [`GraphSnapshot`].
#[derive(Debug, Serialize)]
pub struct VertexRecord<'a, V> {
    pub id: u64,
    pub data: &'a V,
}

/// One edge record in a [`GraphSnapshot`], endpoints given by vertex id.
#[derive(Debug, Serialize)]
pub struct EdgeRecord<'a> {
    pub from: u64,
    pub to: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    pub weight: f64,
}

/// Borrowed, serializable view of a whole graph.
#[derive(Debug, Serialize)]
pub struct GraphSnapshot<'a, V> {
    pub directed: bool,
    pub vertices: Vec<VertexRecord<'a, V>>,
    pub edges: Vec<EdgeRecord<'a>>,
}

impl<'a, V: Serialize> GraphSnapshot<'a, V> {
    /// Capture vertices and edges in list order.
    pub fn from_graph(graph: &'a Graph<V>) -> Self {
        let vertices = graph
            .vertices()
            .filter_map(|v| graph.vertex(v))
            .map(|vertex| VertexRecord {
                id: vertex.id(),
                data: vertex.data(),
            })
            .collect();

        let edges = graph
            .edges()
            .filter_map(|e| graph.edge(e))
            .filter_map(|edge| {
                let from = graph.vertex(edge.from())?.id();
                let to = graph.vertex(edge.to())?.id();
                Some(EdgeRecord {
                    from,
                    to,
                    label: edge.label(),
                    weight: edge.weight(),
                })
            })
            .collect();

        Self {
            directed: graph.is_directed(),
            vertices,
            edges,
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> GraphResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
