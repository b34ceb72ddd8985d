//! CLI command implementations.

use std::path::Path;

use crate::format::{GraphReader, GraphSnapshot, GraphWriter, ParsedGraph};
use crate::graph::{Graph, Traversal};
use crate::types::{EdgeHandle, GraphError, GraphResult, VertexHandle};

/// Level the binary logs at: debug with `--verbose`, warnings otherwise.
pub fn log_filter(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    }
}

/// Install the binary's logger on stderr. `RUST_LOG` directives still apply
/// on top of the chosen level.
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log_filter(verbose)).parse_default_env();
    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
}

fn load(path: &Path, directed: bool) -> GraphResult<ParsedGraph> {
    GraphReader::read_from_file(path, directed)
}

fn vertex_name(graph: &Graph<String>, v: VertexHandle) -> String {
    graph
        .data(v)
        .map(|data| format!("<{data}>"))
        .unwrap_or_else(|| v.to_string())
}

fn names(graph: &Graph<String>, order: &[VertexHandle]) -> Vec<String> {
    order.iter().map(|&v| vertex_name(graph, v)).collect()
}

fn payloads<'a>(graph: &'a Graph<String>, order: &[VertexHandle]) -> Vec<&'a str> {
    order
        .iter()
        .filter_map(|&v| graph.data(v).map(String::as_str))
        .collect()
}

/// Display counts and structural properties of a description file.
pub fn cmd_info(path: &Path, directed: bool, json: bool) -> GraphResult<()> {
    let graph = load(path, directed)?.into_graph();
    let connected = graph.is_connected();
    let components = graph.connected_components();
    let cyclic = graph.is_cyclic();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "directed": graph.is_directed(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "connected": connected,
            "components": components,
            "cyclic": cyclic,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("File: {}", path.display());
        println!("Directed: {}", graph.is_directed());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Connected: {}", connected);
        println!("Components: {}", components);
        println!("Cyclic: {}", cyclic);
    }
    Ok(())
}

/// Print the breadth-first visitation order.
pub fn cmd_bfs(path: &Path, directed: bool, json: bool) -> GraphResult<()> {
    let graph = load(path, directed)?.into_graph();
    let walk = graph.bfs();
    print_walk(&graph, "BFS", &walk, json)
}

/// Print the depth-first visitation order.
pub fn cmd_dfs(path: &Path, directed: bool, json: bool) -> GraphResult<()> {
    let graph = load(path, directed)?.into_graph();
    let walk = graph.dfs();
    print_walk(&graph, "DFS", &walk, json)
}

fn print_walk(graph: &Graph<String>, title: &str, walk: &Traversal, json: bool) -> GraphResult<()> {
    if json {
        let edges: Vec<serde_json::Value> = graph
            .edges()
            .filter_map(|e| {
                let mut value = edge_json(graph, e)?;
                value["status"] = serde_json::to_value(walk.status_of(e)).ok()?;
                Some(value)
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "order": payloads(graph, &walk.order),
                "trees": walk.components,
                "edges": edges,
            })
        );
    } else {
        println!("{}:", title);
        println!("{}", names(graph, &walk.order).join(" "));
    }
    Ok(())
}

/// Shortest path between two declared vertex indices.
pub fn cmd_path(path: &Path, directed: bool, from: usize, to: usize, json: bool) -> GraphResult<()> {
    let parsed = load(path, directed)?;
    let size = parsed.declared_size();
    let source = parsed
        .vertex_at(from)
        .ok_or(GraphError::IndexOutOfRange { index: from, size })?;
    let target = parsed
        .vertex_at(to)
        .ok_or(GraphError::IndexOutOfRange { index: to, size })?;

    let graph = parsed.into_graph();
    let paths = graph.dijkstra(source)?;
    let route = paths.path_to(target);
    let distance = paths.distance(target);

    if json {
        let hops: Vec<serde_json::Value> = route
            .iter()
            .filter_map(|&e| edge_json(&graph, e))
            .collect();
        let distance = distance.is_finite().then_some(distance);
        println!(
            "{}",
            serde_json::json!({ "from": from, "to": to, "distance": distance, "edges": hops })
        );
    } else if !distance.is_finite() {
        println!(
            "{} is unreachable from {}",
            vertex_name(&graph, target),
            vertex_name(&graph, source)
        );
    } else {
        println!("Distance: {}", distance);
        for &e in &route {
            if let Some(edge) = graph.edge(e) {
                println!(
                    "  {} -> {} ({})",
                    vertex_name(&graph, edge.from()),
                    vertex_name(&graph, edge.to()),
                    edge.weight()
                );
            }
        }
    }
    Ok(())
}

fn edge_json(graph: &Graph<String>, e: EdgeHandle) -> Option<serde_json::Value> {
    let edge = graph.edge(e)?;
    Some(serde_json::json!({
        "from": graph.data(edge.from())?,
        "to": graph.data(edge.to())?,
        "label": edge.label(),
        "weight": edge.weight(),
    }))
}

/// Clone the graph, apply transitive closure to the clone and print it.
pub fn cmd_closure(path: &Path, directed: bool, json: bool) -> GraphResult<()> {
    let graph = load(path, directed)?.into_graph();
    let mut closed = graph.clone();
    let added = closed.transitive_closure()?;

    if json {
        let snapshot = GraphSnapshot::from_graph(&closed);
        println!(
            "{}",
            serde_json::json!({ "added": added, "graph": snapshot })
        );
    } else {
        println!("Added {} edges", added);
        print!("{}", GraphWriter::write_to_string(&closed)?);
    }
    Ok(())
}

/// Full report: structure, traversals, properties, closure of a clone.
pub fn cmd_report(path: &Path, directed: bool) -> GraphResult<()> {
    let graph = load(path, directed)?.into_graph();

    println!("Print graph state\n");
    println!("{}", graph);
    println!("BFS:");
    println!("{}", names(&graph, &graph.bfs().order).join(" "));
    println!("\nDFS");
    println!("{}", names(&graph, &graph.dfs().order).join(" "));
    println!("\nIs connected: {}", graph.is_connected());
    println!("Is directed: {}", graph.is_directed());
    println!("Is cyclic: {}", graph.is_cyclic());
    println!(
        "Number of Connected components: {}",
        graph.connected_components()
    );

    println!("\nClone graph ... ");
    let mut cloned = graph.clone();
    println!("Apply Transitive closure to the cloned graph");
    cloned.transitive_closure()?;
    println!("Print state of the new graph\n");
    println!("{}", cloned);
    Ok(())
}

/// Export the graph as JSON.
pub fn cmd_export(path: &Path, directed: bool, pretty: bool) -> GraphResult<()> {
    let graph = load(path, directed)?.into_graph();
    println!("{}", GraphSnapshot::from_graph(&graph).to_json(pretty)?);
    Ok(())
}
