//! Writes graphs back out in the text description format.

use std::collections::HashMap;
use std::fmt::{Display, Write as _};
use std::path::Path;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, VertexHandle};

/// Writer for graph description files.
pub struct GraphWriter;

impl GraphWriter {
    /// Write `graph` to a file.
    pub fn write_to_file<V: Display>(graph: &Graph<V>, path: &Path) -> GraphResult<()> {
        std::fs::write(path, Self::write_to_string(graph)?)?;
        Ok(())
    }

    /// Render `graph` as a description. Vertex indices follow the vertex
    /// list. Undirected graphs write each mirrored pair once; a record whose
    /// mirror was removed is written on its own.
    ///
    /// Only output [`GraphReader`](super::GraphReader) reads back is
    /// produced: negative weights, line breaks in payloads or labels, and
    /// payloads or labels with surrounding whitespace (or empty labels) fail
    /// with [`GraphError::Unwritable`].
    pub fn write_to_string<V: Display>(graph: &Graph<V>) -> GraphResult<String> {
        let mut out = String::new();
        let mut index: HashMap<VertexHandle, usize> = HashMap::new();

        let _ = writeln!(out, "size = {}", graph.vertex_count());
        for (i, v) in graph.vertices().enumerate() {
            index.insert(v, i);
            if let Some(data) = graph.data(v) {
                let payload = data.to_string();
                check_text(&payload, || format!("payload of vertex {i}"))?;
                let _ = writeln!(out, "{i} = {payload}");
            }
        }
        out.push_str(";\n");

        // Unmatched records per (from, to, label, weight bits).
        let mut unmatched: HashMap<(usize, usize, Option<&str>, u64), usize> = HashMap::new();
        for e in graph.edges() {
            let Some(edge) = graph.edge(e) else { continue };
            let (Some(&from), Some(&to)) = (index.get(&edge.from()), index.get(&edge.to())) else {
                continue;
            };
            if edge.weight() < 0.0 {
                return Err(GraphError::Unwritable(format!(
                    "edge ({from}, {to}) has negative weight {}",
                    edge.weight()
                )));
            }
            if let Some(label) = edge.label() {
                check_text(label, || format!("label of edge ({from}, {to})"))?;
                if label.is_empty() {
                    return Err(GraphError::Unwritable(format!(
                        "label of edge ({from}, {to}) is empty"
                    )));
                }
            }
            let bits = edge.weight().to_bits();

            if !graph.is_directed() {
                let mirror = (to, from, edge.label(), bits);
                if let Some(count) = unmatched.get_mut(&mirror).filter(|c| **c > 0) {
                    *count -= 1;
                    continue;
                }
                *unmatched.entry((from, to, edge.label(), bits)).or_default() += 1;
            }

            if edge.weight() == 0.0 {
                let _ = write!(out, "({from}, {to})");
            } else {
                let _ = write!(out, "({from}, {to}, {})", edge.weight());
            }
            match edge.label() {
                Some(label) => {
                    let _ = writeln!(out, " = {label}");
                }
                None => out.push('\n'),
            }
        }
        out.push_str(";\n");
        Ok(out)
    }
}

/// Reject text the line grammar would split or trim.
fn check_text(text: &str, what: impl FnOnce() -> String) -> GraphResult<()> {
    if text.contains(['\n', '\r']) {
        return Err(GraphError::Unwritable(format!("{} contains a line break", what())));
    }
    if text.trim() != text {
        return Err(GraphError::Unwritable(format!(
            "{} has surrounding whitespace",
            what()
        )));
    }
    Ok(())
}
