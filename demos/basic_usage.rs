//! Basic build -> traverse -> shortest path -> closure flow.

use incidence_graph::*;

fn main() -> GraphResult<()> {
    // A small road network
    let mut builder = GraphBuilder::new().directed(true);
    let montreal = builder.vertex("Montreal".to_string());
    let ottawa = builder.vertex("Ottawa".to_string());
    let toronto = builder.vertex("Toronto".to_string());
    let boston = builder.vertex("Boston".to_string());

    builder
        .labeled_edge(montreal, ottawa, Some("A-40"), 200.0)
        .labeled_edge(ottawa, toronto, Some("A-416"), 450.0)
        .weighted_edge(montreal, toronto, 540.0)
        .weighted_edge(montreal, boston, 500.0);

    let graph = builder.build()?;
    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    // Builder indices double as vertex ids
    let source = graph
        .vertex_by_id(montreal as u64)
        .ok_or(GraphError::IndexOutOfRange {
            index: montreal,
            size: graph.vertex_count(),
        })?;

    let order: Vec<&str> = graph
        .bfs()
        .order
        .iter()
        .filter_map(|&v| graph.data(v).map(String::as_str))
        .collect();
    println!("BFS: {}", order.join(" "));
    println!("Connected: {}", graph.is_connected());
    println!("Cyclic: {}", graph.is_cyclic());

    // Shortest distances from Montreal
    let paths = graph.dijkstra(source)?;
    for v in graph.vertices() {
        if let Some(city) = graph.data(v) {
            println!("  Montreal -> {}: {}", city, paths.distance(v));
        }
    }

    // Closure on a copy leaves the original untouched
    let mut closed = graph.clone();
    let added = closed.transitive_closure()?;
    println!(
        "Transitive closure added {} edges ({} -> {})",
        added,
        graph.edge_count(),
        closed.edge_count()
    );

    println!("{}", GraphWriter::write_to_string(&closed)?);
    Ok(())
}
