//! Vertex record: payload, id and the two incidence lists.

use crate::list::{Concat, Iter, Position, PositionalList};
use crate::types::{EdgeHandle, GraphResult};

/// Which incidence list of a vertex an edge is registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Incidence {
    Out,
    In,
}

/// A vertex of a [`Graph`](super::Graph).
///
/// Vertices are created by [`Graph::add_vertex`](super::Graph::add_vertex)
/// and only ever live inside the graph's vertex list.
#[derive(Debug)]
pub struct Vertex<V> {
    data: V,
    id: u64,
    out_edges: PositionalList<EdgeHandle>,
    in_edges: PositionalList<EdgeHandle>,
}

impl<V> Vertex<V> {
    pub(crate) fn new(data: V, id: u64) -> Self {
        Self {
            data,
            id,
            out_edges: PositionalList::new(),
            in_edges: PositionalList::new(),
        }
    }

    /// Unique id, strictly increasing in creation order.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn data(&self) -> &V {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut V {
        &mut self.data
    }

    /// Replace the payload, returning the old one.
    pub fn set_data(&mut self, data: V) -> V {
        std::mem::replace(&mut self.data, data)
    }

    pub(crate) fn into_data(self) -> V {
        self.data
    }

    /// Outgoing edges in insertion order.
    pub fn out_edges(&self) -> Iter<'_, EdgeHandle> {
        self.out_edges.iter()
    }

    /// Incoming edges in insertion order.
    pub fn in_edges(&self) -> Iter<'_, EdgeHandle> {
        self.in_edges.iter()
    }

    /// Outgoing then incoming edges, chained lazily.
    pub fn incident_edges(&self) -> Concat<'_, EdgeHandle> {
        self.out_edges.iter().concat(self.in_edges.iter())
    }

    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }

    pub fn in_degree(&self) -> usize {
        self.in_edges.len()
    }

    pub(crate) fn add_incident_edge(&mut self, side: Incidence, edge: EdgeHandle) -> Position {
        self.incidence_mut(side).push_back(edge)
    }

    pub(crate) fn remove_incident_edge(
        &mut self,
        side: Incidence,
        position: Position,
    ) -> GraphResult<EdgeHandle> {
        self.incidence_mut(side).remove(position)
    }

    pub(crate) fn incident_at(&self, side: Incidence, position: Position) -> Option<EdgeHandle> {
        match side {
            Incidence::Out => self.out_edges.get(position).copied(),
            Incidence::In => self.in_edges.get(position).copied(),
        }
    }

    fn incidence_mut(&mut self, side: Incidence) -> &mut PositionalList<EdgeHandle> {
        match side {
            Incidence::Out => &mut self.out_edges,
            Incidence::In => &mut self.in_edges,
        }
    }
}
