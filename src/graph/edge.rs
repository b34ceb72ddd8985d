//! Edge record: endpoints, label, weight and incidence positions.

use crate::list::Position;
use crate::types::{GraphError, GraphResult, VertexHandle};

/// A directed edge `from -> to` of a [`Graph`](super::Graph).
///
/// An undirected connection is stored as two independent `Edge` records,
/// one per direction.
#[derive(Debug, Clone)]
pub struct Edge {
    from: VertexHandle,
    to: VertexHandle,
    label: Option<String>,
    weight: f64,
    /// Slot of this edge in `from`'s out-list.
    pub(crate) out_position: Position,
    /// Slot of this edge in `to`'s in-list.
    pub(crate) in_position: Position,
}

impl Edge {
    pub(crate) fn new(
        from: VertexHandle,
        to: VertexHandle,
        label: Option<String>,
        weight: f64,
        out_position: Position,
        in_position: Position,
    ) -> Self {
        Self {
            from,
            to,
            label,
            weight,
            out_position,
            in_position,
        }
    }

    /// Origin vertex (v1).
    pub fn from(&self) -> VertexHandle {
        self.from
    }

    /// Destination vertex (v2).
    pub fn to(&self) -> VertexHandle {
        self.to
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Change the weight. Non-finite weights are rejected.
    pub fn set_weight(&mut self, weight: f64) -> GraphResult<()> {
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight(weight));
        }
        self.weight = weight;
        Ok(())
    }

    /// The endpoint that is not `v`, or `None` if `v` is neither endpoint.
    /// For a self-loop both endpoints are `v`.
    pub fn opposite(&self, v: VertexHandle) -> Option<VertexHandle> {
        if v == self.from {
            Some(self.to)
        } else if v == self.to {
            Some(self.from)
        } else {
            None
        }
    }
}
