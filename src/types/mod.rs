//! Shared data types: handles, traversal status values and errors.

pub mod error;
pub mod handle;
pub mod status;

pub use error::{GraphError, GraphResult};
pub use handle::{EdgeHandle, VertexHandle};
pub use status::{EdgeStatus, VertexStatus};
