//! Text description I/O and JSON snapshots.

pub mod reader;
pub mod snapshot;
pub mod writer;

pub use reader::{GraphReader, ParsedGraph};
pub use snapshot::{EdgeRecord, GraphSnapshot, VertexRecord};
pub use writer::GraphWriter;
