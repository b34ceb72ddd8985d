//! Typed handles into a graph's vertex and edge lists.

use std::fmt;

use crate::list::Position;

/// Handle to a vertex: its position in the graph's vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexHandle(pub(crate) Position);

/// Handle to an edge: its position in the graph's edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeHandle(pub(crate) Position);

impl VertexHandle {
    /// The underlying list position.
    pub fn position(&self) -> Position {
        self.0
    }
}

impl EdgeHandle {
    /// The underlying list position.
    pub fn position(&self) -> Position {
        self.0
    }
}

impl fmt::Display for VertexHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v#{}", self.0.slot())
    }
}

impl fmt::Display for EdgeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e#{}", self.0.slot())
    }
}
