//! Core graph structure: vertex and edge lists cross-referenced by handles.

use std::fmt;

use crate::list::PositionalList;
use crate::types::{EdgeHandle, GraphError, GraphResult, VertexHandle};

use super::edge::Edge;
use super::vertex::{Incidence, Vertex};

/// Edges created by one [`Graph::add_edge`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgePair {
    /// The `v1 -> v2` record.
    pub forward: EdgeHandle,
    /// The `v2 -> v1` record, present only in undirected graphs.
    pub mirror: Option<EdgeHandle>,
}

impl EdgePair {
    /// Both records, forward first.
    pub fn handles(&self) -> Vec<EdgeHandle> {
        std::iter::once(self.forward).chain(self.mirror).collect()
    }
}

/// An in-memory directed or undirected graph built on incidence lists.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | O(1) amortized | Appends to the vertex list |
/// | `add_edge` | O(1) amortized | Two records when undirected |
/// | `remove_edge` | O(1) | Three handle removals, no search |
/// | `remove_vertex` | O(degree) | Removes every incident edge first |
/// | `are_adjacent` | O(out-degree) | Scans one out-list |
pub struct Graph<V> {
    pub(crate) vertices: PositionalList<Vertex<V>>,
    pub(crate) edges: PositionalList<Edge>,
    directed: bool,
    next_id: u64,
}

impl<V> Graph<V> {
    /// Create an empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: PositionalList::new(),
            edges: PositionalList::new(),
            directed,
            next_id: 0,
        }
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edge records (two per undirected connection).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertex handles in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexHandle> + '_ {
        self.vertices.positions().map(|(pos, _)| VertexHandle(pos))
    }

    /// Edge handles in creation order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeHandle> + '_ {
        self.edges.positions().map(|(pos, _)| EdgeHandle(pos))
    }

    pub fn vertex(&self, v: VertexHandle) -> Option<&Vertex<V>> {
        self.vertices.get(v.0)
    }

    pub fn vertex_mut(&mut self, v: VertexHandle) -> Option<&mut Vertex<V>> {
        self.vertices.get_mut(v.0)
    }

    pub fn edge(&self, e: EdgeHandle) -> Option<&Edge> {
        self.edges.get(e.0)
    }

    pub fn edge_mut(&mut self, e: EdgeHandle) -> Option<&mut Edge> {
        self.edges.get_mut(e.0)
    }

    /// Payload of a vertex.
    pub fn data(&self, v: VertexHandle) -> Option<&V> {
        self.vertex(v).map(Vertex::data)
    }

    /// Find a vertex by id. Ids grow along the vertex list, so the scan
    /// stops at the first larger id.
    pub fn vertex_by_id(&self, id: u64) -> Option<VertexHandle> {
        self.vertices
            .positions()
            .take_while(|(_, vertex)| vertex.id() <= id)
            .find(|(_, vertex)| vertex.id() == id)
            .map(|(pos, _)| VertexHandle(pos))
    }

    /// Add a vertex carrying `data`, assigning the next id.
    pub fn add_vertex(&mut self, data: V) -> VertexHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.insert_vertex(data, id)
    }

    pub(crate) fn insert_vertex(&mut self, data: V, id: u64) -> VertexHandle {
        let handle = VertexHandle(self.vertices.push_back(Vertex::new(data, id)));
        log::debug!("added vertex {} as {}", id, handle);
        handle
    }

    /// Add an edge `v1 -> v2`. Undirected graphs also get the mirrored
    /// `v2 -> v1` record with the same label and weight.
    pub fn add_edge(
        &mut self,
        v1: VertexHandle,
        v2: VertexHandle,
        label: Option<String>,
        weight: f64,
    ) -> GraphResult<EdgePair> {
        if !weight.is_finite() {
            log::warn!("rejected edge {} -> {} with weight {}", v1, v2, weight);
            return Err(GraphError::InvalidWeight(weight));
        }
        self.require_vertex(v1)?;
        self.require_vertex(v2)?;

        let forward = self.insert_edge(v1, v2, label.clone(), weight)?;
        let mirror = if self.directed {
            None
        } else {
            Some(self.insert_edge(v2, v1, label, weight)?)
        };
        Ok(EdgePair { forward, mirror })
    }

    /// Add an unlabeled edge with weight 0.
    pub fn link(&mut self, v1: VertexHandle, v2: VertexHandle) -> GraphResult<EdgePair> {
        self.add_edge(v1, v2, None, 0.0)
    }

    /// Add an unlabeled weighted edge.
    pub fn link_weighted(
        &mut self,
        v1: VertexHandle,
        v2: VertexHandle,
        weight: f64,
    ) -> GraphResult<EdgePair> {
        self.add_edge(v1, v2, None, weight)
    }

    /// Create one directed record and register it in both incidence lists.
    pub(crate) fn insert_edge(
        &mut self,
        from: VertexHandle,
        to: VertexHandle,
        label: Option<String>,
        weight: f64,
    ) -> GraphResult<EdgeHandle> {
        self.require_vertex(from)?;
        self.require_vertex(to)?;

        let handle = EdgeHandle(self.edges.next_position());
        let out_position = self
            .vertex_mut(from)
            .ok_or(GraphError::VertexNotFound(from))?
            .add_incident_edge(Incidence::Out, handle);
        let in_position = self
            .vertex_mut(to)
            .ok_or(GraphError::VertexNotFound(to))?
            .add_incident_edge(Incidence::In, handle);

        let pos = self
            .edges
            .push_back(Edge::new(from, to, label, weight, out_position, in_position));
        debug_assert_eq!(pos, handle.0);
        log::debug!("added edge {} ({} -> {})", handle, from, to);
        Ok(handle)
    }

    /// Remove a vertex and every edge touching it; returns the payload.
    pub fn remove_vertex(&mut self, v: VertexHandle) -> GraphResult<V> {
        let vertex = self.vertex(v).ok_or(GraphError::VertexNotFound(v))?;
        let outgoing: Vec<EdgeHandle> = vertex.out_edges().copied().collect();

        for e in outgoing {
            let edge = self.edges.remove(e.0)?;
            // Self-loops are unregistered from v's own in-list here.
            self.vertex_mut(edge.to())
                .ok_or_else(|| dangling(e, edge.to()))?
                .remove_incident_edge(Incidence::In, edge.in_position)?;
        }

        let incoming: Vec<EdgeHandle> = self
            .vertex(v)
            .ok_or(GraphError::VertexNotFound(v))?
            .in_edges()
            .copied()
            .collect();
        for e in incoming {
            let edge = self.edges.remove(e.0)?;
            self.vertex_mut(edge.from())
                .ok_or_else(|| dangling(e, edge.from()))?
                .remove_incident_edge(Incidence::Out, edge.out_position)?;
        }

        let vertex = self.vertices.remove(v.0)?;
        log::debug!("removed vertex {} ({})", vertex.id(), v);
        Ok(vertex.into_data())
    }

    /// Remove a single edge record. The mirror of an undirected edge stays.
    pub fn remove_edge(&mut self, e: EdgeHandle) -> GraphResult<Edge> {
        let (from, to, out_position, in_position) = {
            let edge = self.edge(e).ok_or(GraphError::EdgeNotFound(e))?;
            (edge.from(), edge.to(), edge.out_position, edge.in_position)
        };
        if self.vertex(from).is_none() {
            return Err(dangling(e, from));
        }
        if self.vertex(to).is_none() {
            return Err(dangling(e, to));
        }

        self.vertex_mut(from)
            .ok_or_else(|| dangling(e, from))?
            .remove_incident_edge(Incidence::Out, out_position)?;
        self.vertex_mut(to)
            .ok_or_else(|| dangling(e, to))?
            .remove_incident_edge(Incidence::In, in_position)?;
        let edge = self.edges.remove(e.0)?;
        log::debug!("removed edge {} ({} -> {})", e, from, to);
        Ok(edge)
    }

    /// Opposite endpoints of `v`'s outgoing edges, in out-list order.
    /// Parallel edges yield duplicates.
    pub fn neighbors(&self, v: VertexHandle) -> GraphResult<Vec<VertexHandle>> {
        let vertex = self.vertex(v).ok_or(GraphError::VertexNotFound(v))?;
        vertex
            .out_edges()
            .map(|&e| {
                self.edge(e)
                    .and_then(|edge| edge.opposite(v))
                    .ok_or(GraphError::EdgeNotFound(e))
            })
            .collect()
    }

    /// Check every vertex/edge cross-reference against list membership.
    pub fn verify_incidence(&self) -> GraphResult<()> {
        let mut last_id = None;
        let mut out_total = 0usize;
        let mut in_total = 0usize;

        for (pos, vertex) in self.vertices.positions() {
            let v = VertexHandle(pos);
            if last_id.is_some_and(|last| vertex.id() <= last) {
                return Err(GraphError::Corrupt(format!(
                    "vertex id {} out of order",
                    vertex.id()
                )));
            }
            last_id = Some(vertex.id());
            out_total += vertex.out_degree();
            in_total += vertex.in_degree();

            for &e in vertex.out_edges() {
                match self.edge(e) {
                    Some(edge) if edge.from() == v => {}
                    _ => return Err(GraphError::Corrupt(format!("{v} lists foreign out edge {e}"))),
                }
            }
            for &e in vertex.in_edges() {
                match self.edge(e) {
                    Some(edge) if edge.to() == v => {}
                    _ => return Err(GraphError::Corrupt(format!("{v} lists foreign in edge {e}"))),
                }
            }
        }

        for (pos, edge) in self.edges.positions() {
            let e = EdgeHandle(pos);
            let from = self.vertex(edge.from()).ok_or_else(|| dangling(e, edge.from()))?;
            let to = self.vertex(edge.to()).ok_or_else(|| dangling(e, edge.to()))?;
            if from.incident_at(Incidence::Out, edge.out_position) != Some(e) {
                return Err(GraphError::Corrupt(format!("{e} out position mismatch")));
            }
            if to.incident_at(Incidence::In, edge.in_position) != Some(e) {
                return Err(GraphError::Corrupt(format!("{e} in position mismatch")));
            }
        }

        let edge_total = self.edges.len();
        if out_total != edge_total || in_total != edge_total {
            return Err(GraphError::Corrupt(format!(
                "{edge_total} edges but {out_total} out and {in_total} in entries"
            )));
        }
        Ok(())
    }

    pub(crate) fn require_vertex(&self, v: VertexHandle) -> GraphResult<&Vertex<V>> {
        self.vertex(v).ok_or(GraphError::VertexNotFound(v))
    }

    /// Binary search an id-sorted vertex snapshot.
    pub(crate) fn search_by_id(&self, sorted: &[VertexHandle], id: u64) -> Option<VertexHandle> {
        sorted
            .binary_search_by_key(&id, |&v| self.vertex(v).map_or(u64::MAX, Vertex::id))
            .ok()
            .map(|i| sorted[i])
    }
}

fn dangling(e: EdgeHandle, v: VertexHandle) -> GraphError {
    GraphError::Corrupt(format!("edge {e} references missing vertex {v}"))
}

impl<V: Clone> Clone for Graph<V> {
    /// Rebuild an independent graph with the same vertex ids, cloned
    /// payloads and the same edge records in edge-list order.
    fn clone(&self) -> Self {
        // insert_edge never mirrors, so each record is copied exactly once.
        let mut graph = Graph::new(self.directed);
        for vertex in self.vertices.iter() {
            graph.insert_vertex(vertex.data().clone(), vertex.id());
        }
        graph.next_id = self.next_id;

        let snapshot: Vec<VertexHandle> = graph.vertices().collect();
        for edge in self.edges.iter() {
            let ends = (
                self.vertex(edge.from()).map(Vertex::id),
                self.vertex(edge.to()).map(Vertex::id),
            );
            let (Some(from_id), Some(to_id)) = ends else {
                log::warn!("skipping dangling edge {} -> {} while cloning", edge.from(), edge.to());
                continue;
            };
            let (Some(v1), Some(v2)) = (
                graph.search_by_id(&snapshot, from_id),
                graph.search_by_id(&snapshot, to_id),
            ) else {
                continue;
            };
            if let Err(e) = graph.insert_edge(v1, v2, edge.label().map(str::to_owned), edge.weight()) {
                log::warn!("failed to clone edge {} -> {}: {}", from_id, to_id, e);
            }
        }

        graph
    }
}

impl<V: fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertices:")?;
        for vertex in self.vertices.iter() {
            write!(f, "<{}> ", vertex.data())?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "Edges:")?;
        for edge in self.edges.iter() {
            match edge.label() {
                Some(label) => writeln!(f, "({label})")?,
                None => {
                    let from = self.data(edge.from());
                    let to = self.data(edge.to());
                    match (from, to) {
                        (Some(from), Some(to)) => writeln!(f, "(<{from}>, <{to}>)")?,
                        _ => writeln!(f, "({}, {})", edge.from(), edge.to())?,
                    }
                }
            }
        }
        Ok(())
    }
}
