//! Traversal status values for vertices and edges.

use serde::Serialize;

/// Where a vertex stands during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VertexStatus {
    /// Not reached yet.
    #[default]
    Unvisited,
    /// Reached but not finished (queued, or on the DFS stack).
    Visiting,
    /// Finished.
    Visited,
}

/// Classification of an edge relative to the current spanning structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStatus {
    /// Not examined.
    #[default]
    Undiscovered,
    /// Tree edge (or current best edge for shortest paths).
    Discovered,
    /// Closes a cycle found by DFS.
    Back,
    /// Superseded by a shorter path.
    Forward,
    /// Reaches an already reached vertex outside the tree path.
    Cross,
}

impl EdgeStatus {
    /// Return a human-readable name for this status.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Undiscovered => "undiscovered",
            Self::Discovered => "discovered",
            Self::Back => "back",
            Self::Forward => "forward",
            Self::Cross => "cross",
        }
    }
}

impl std::fmt::Display for EdgeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
