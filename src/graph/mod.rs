//! In-memory graph: the core data structure and its algorithms.

pub mod builder;
pub mod closure;
pub mod edge;
pub mod incidence_graph;
pub mod shortest_path;
pub mod traversal;
pub mod vertex;

pub use builder::GraphBuilder;
pub use edge::Edge;
pub use incidence_graph::{EdgePair, Graph};
pub use shortest_path::ShortestPaths;
pub use traversal::Traversal;
pub use vertex::Vertex;
