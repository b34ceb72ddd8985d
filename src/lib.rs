//! Incidence-list graph library.
//!
//! Directed and undirected graphs whose vertices and edges reference each
//! other through stable list positions, giving O(1) edge insertion and
//! removal. On top of the structure sit BFS/DFS, cycle and connectivity
//! checks, Dijkstra shortest paths, transitive closure and cloning.

pub mod cli;
pub mod format;
pub mod graph;
pub mod list;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{GraphReader, GraphSnapshot, GraphWriter, ParsedGraph};
pub use graph::{Edge, EdgePair, Graph, GraphBuilder, ShortestPaths, Traversal, Vertex};
pub use list::{Position, PositionalList};
pub use types::{
    EdgeHandle, EdgeStatus, GraphError, GraphResult, VertexHandle, VertexStatus,
};
