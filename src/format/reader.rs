//! Reads text graph descriptions into an in-memory graph.
//!
//! ```text
//! size = 3
//! 0 = Montreal
//! // comment lines start with // or #
//! 1 = Boston
//! 2 = Ottawa
//! ;
//! (0, 1, 5.5) = highway
//! (1, 2)
//! ;
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, VertexHandle};

/// A graph read from a description, plus the handle of every declared index.
///
/// Only declared indices are stored, so the header size costs nothing up
/// front.
pub struct ParsedGraph {
    pub graph: Graph<String>,
    size: usize,
    index: HashMap<usize, VertexHandle>,
}

impl ParsedGraph {
    /// Handle of the vertex declared with `index`.
    pub fn vertex_at(&self, index: usize) -> Option<VertexHandle> {
        self.index.get(&index).copied()
    }

    /// Declared size from the header.
    pub fn declared_size(&self) -> usize {
        self.size
    }

    pub fn into_graph(self) -> Graph<String> {
        self.graph
    }
}

/// Reader for graph description files.
pub struct GraphReader;

impl GraphReader {
    /// Read a description file.
    pub fn read_from_file(path: &Path, directed: bool) -> GraphResult<ParsedGraph> {
        let text = std::fs::read_to_string(path)?;
        Self::read_from_str(&text, directed)
    }

    /// Read from any reader.
    pub fn read_from(reader: &mut impl Read, directed: bool) -> GraphResult<ParsedGraph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::read_from_str(&text, directed)
    }

    /// Parse a description held in memory.
    pub fn read_from_str(text: &str, directed: bool) -> GraphResult<ParsedGraph> {
        let last_line = text.lines().count();
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !is_skippable(line));

        let size = match lines.next() {
            Some((line_no, line)) => parse_header(line_no, line)?,
            None => return Err(format_error(last_line, "missing `size = N` header")),
        };

        let mut parsed = ParsedGraph {
            graph: Graph::new(directed),
            size,
            index: HashMap::new(),
        };

        // Vertex section.
        let mut terminated = false;
        for (line_no, line) in lines.by_ref() {
            if line == ";" {
                terminated = true;
                break;
            }
            let (index, payload) = parse_vertex(line_no, line, size)?;
            if parsed.index.contains_key(&index) {
                return Err(format_error(line_no, format!("vertex {index} declared twice")));
            }
            let handle = parsed.graph.add_vertex(payload.to_string());
            parsed.index.insert(index, handle);
        }
        if !terminated {
            return Err(format_error(last_line, "vertex section is missing its `;` terminator"));
        }

        // Edge section.
        terminated = false;
        for (line_no, line) in lines.by_ref() {
            if line == ";" {
                terminated = true;
                break;
            }
            let edge = parse_edge(line_no, line)?;
            let v1 = parsed
                .vertex_at(edge.from)
                .ok_or_else(|| undeclared(line_no, edge.from))?;
            let v2 = parsed
                .vertex_at(edge.to)
                .ok_or_else(|| undeclared(line_no, edge.to))?;
            parsed
                .graph
                .add_edge(v1, v2, edge.label, edge.weight)
                .map_err(|e| format_error(line_no, e.to_string()))?;
        }
        if !terminated {
            return Err(format_error(last_line, "edge section is missing its `;` terminator"));
        }

        if let Some((line_no, _)) = lines.next() {
            log::debug!("ignoring content after edge section from line {}", line_no);
        }
        log::debug!(
            "read {} vertices and {} edges",
            parsed.graph.vertex_count(),
            parsed.graph.edge_count()
        );
        Ok(parsed)
    }
}

struct EdgeLine {
    from: usize,
    to: usize,
    weight: f64,
    label: Option<String>,
}

fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with("//") || line.starts_with('#')
}

fn format_error(line: usize, reason: impl Into<String>) -> GraphError {
    GraphError::Format {
        line,
        reason: reason.into(),
    }
}

fn undeclared(line: usize, index: usize) -> GraphError {
    format_error(line, format!("vertex {index} was not declared"))
}

fn parse_header(line_no: usize, line: &str) -> GraphResult<usize> {
    let value = line
        .strip_prefix("size")
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or_else(|| format_error(line_no, "expected `size = N` header"))?;
    parse_index(line_no, value)
}

fn parse_index(line_no: usize, text: &str) -> GraphResult<usize> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format_error(line_no, format!("`{text}` is not an index")));
    }
    text.parse()
        .map_err(|_| format_error(line_no, format!("`{text}` is not an index")))
}

fn parse_vertex(line_no: usize, line: &str, size: usize) -> GraphResult<(usize, &str)> {
    let (index, payload) = line
        .split_once('=')
        .ok_or_else(|| format_error(line_no, "expected `index = payload`"))?;
    let index = parse_index(line_no, index)?;
    if index >= size {
        return Err(format_error(
            line_no,
            format!("vertex index {index} out of range for size {size}"),
        ));
    }
    Ok((index, payload.trim()))
}

fn parse_edge(line_no: usize, line: &str) -> GraphResult<EdgeLine> {
    let body = line
        .strip_prefix('(')
        .ok_or_else(|| format_error(line_no, "expected `(i, j[, weight])`"))?;
    let (tuple, rest) = body
        .split_once(')')
        .ok_or_else(|| format_error(line_no, "missing `)`"))?;

    let fields: Vec<&str> = tuple.split(',').collect();
    let (from, to, weight) = match fields.as_slice() {
        [from, to] => (*from, *to, None),
        [from, to, weight] => (*from, *to, Some(*weight)),
        _ => return Err(format_error(line_no, "expected 2 or 3 tuple fields")),
    };
    let weight = match weight {
        Some(text) => parse_weight(line_no, text)?,
        None => 0.0,
    };

    let rest = rest.trim();
    let label = if rest.is_empty() {
        None
    } else {
        let label = rest
            .strip_prefix('=')
            .ok_or_else(|| format_error(line_no, format!("unexpected `{rest}` after edge")))?
            .trim();
        (!label.is_empty()).then(|| label.to_string())
    };

    Ok(EdgeLine {
        from: parse_index(line_no, from)?,
        to: parse_index(line_no, to)?,
        weight,
        label,
    })
}

fn parse_weight(line_no: usize, text: &str) -> GraphResult<f64> {
    let text = text.trim();
    let valid = !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && text.bytes().filter(|&b| b == b'.').count() <= 1;
    if !valid {
        return Err(format_error(line_no, format!("`{text}` is not a weight")));
    }
    text.parse()
        .map_err(|_| format_error(line_no, format!("`{text}` is not a weight")))
}
