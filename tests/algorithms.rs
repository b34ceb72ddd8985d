//! Algorithm tests: shortest paths, adjacency, transitive closure, cloning.

use incidence_graph::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Edge triples keyed by vertex id, in edge-list order.
fn edge_triples<V>(graph: &Graph<V>) -> Vec<(u64, u64, Option<String>, f64)> {
    graph
        .edges()
        .map(|e| {
            let edge = graph.edge(e).unwrap();
            (
                graph.vertex(edge.from()).unwrap().id(),
                graph.vertex(edge.to()).unwrap().id(),
                edge.label().map(str::to_owned),
                edge.weight(),
            )
        })
        .collect()
}

fn vertex_pairs<V: Clone>(graph: &Graph<V>) -> Vec<(u64, V)> {
    graph
        .vertices()
        .map(|v| {
            let vertex = graph.vertex(v).unwrap();
            (vertex.id(), vertex.data().clone())
        })
        .collect()
}

/// Minimum path weight by Bellman-Ford relaxation, for cross-checking.
fn reference_distances(graph: &Graph<u32>, source: VertexHandle) -> Vec<f64> {
    let vs: Vec<VertexHandle> = graph.vertices().collect();
    let index = |v: VertexHandle| vs.iter().position(|&x| x == v).unwrap();
    let mut dist = vec![f64::INFINITY; vs.len()];
    dist[index(source)] = 0.0;
    for _ in 0..vs.len() {
        for e in graph.edges() {
            let edge = graph.edge(e).unwrap();
            let (from, to) = (index(edge.from()), index(edge.to()));
            if dist[from] + edge.weight() < dist[to] {
                dist[to] = dist[from] + edge.weight();
            }
        }
    }
    dist
}

// ==================== Shortest Path Tests ====================

#[test]
fn test_dijkstra_simple() {
    init_logger();
    let mut builder = GraphBuilder::new().directed(true);
    let a = builder.vertex("a");
    let b = builder.vertex("b");
    let c = builder.vertex("c");
    let d = builder.vertex("d");
    builder
        .weighted_edge(a, b, 1.0)
        .weighted_edge(b, c, 2.0)
        .weighted_edge(a, c, 5.0)
        .weighted_edge(c, d, 1.0);
    let graph = builder.build().unwrap();

    let va = graph.vertex_by_id(a as u64).unwrap();
    let vc = graph.vertex_by_id(c as u64).unwrap();
    let vd = graph.vertex_by_id(d as u64).unwrap();

    let paths = graph.dijkstra(va).unwrap();
    assert_eq!(paths.source(), va);
    assert_eq!(paths.distance(va), 0.0);
    assert!(approx(paths.distance(vc), 3.0));
    assert!(approx(paths.distance(vd), 4.0));
    assert!(paths.parent(va).is_none());

    let route = graph.shortest_path(va, vd).unwrap();
    let hops: Vec<&str> = route
        .iter()
        .map(|&e| *graph.data(graph.edge(e).unwrap().to()).unwrap())
        .collect();
    assert_eq!(hops, vec!["b", "c", "d"]);
}

#[test]
fn test_dijkstra_unreachable() {
    let mut graph = Graph::directed();
    let a = graph.add_vertex(0u32);
    let b = graph.add_vertex(1);
    let c = graph.add_vertex(2);
    graph.link_weighted(b, a, 1.0).unwrap();
    graph.link_weighted(a, c, 2.0).unwrap();

    let paths = graph.dijkstra(a).unwrap();
    assert!(paths.distance(b).is_infinite());
    assert!(!paths.is_reachable(b));
    assert!(paths.path_to(b).is_empty());
    assert!(paths.path_to(a).is_empty());
    assert!(graph.shortest_path(a, b).unwrap().is_empty());
    assert!(graph.shortest_path(a, a).unwrap().is_empty());
    assert_eq!(graph.shortest_path(a, c).unwrap().len(), 1);
}

#[test]
fn test_dijkstra_matches_reference() {
    let mut rng = StdRng::seed_from_u64(3);
    for directed in [true, false] {
        let mut graph = Graph::new(directed);
        let vs: Vec<VertexHandle> = (0..30u32).map(|i| graph.add_vertex(i)).collect();
        for _ in 0..90 {
            let a = vs[rng.gen_range(0..vs.len())];
            let b = vs[rng.gen_range(0..vs.len())];
            let w = rng.gen_range(0..20) as f64;
            graph.link_weighted(a, b, w).unwrap();
        }

        let source = vs[0];
        let paths = graph.dijkstra(source).unwrap();
        let expected = reference_distances(&graph, source);
        for (i, &v) in vs.iter().enumerate() {
            let got = paths.distance(v);
            if expected[i].is_infinite() {
                assert!(got.is_infinite());
            } else {
                assert!(approx(got, expected[i]), "vertex {i}: {got} vs {}", expected[i]);
                let total: f64 = paths
                    .path_to(v)
                    .iter()
                    .map(|&e| graph.edge(e).unwrap().weight())
                    .sum();
                assert!(approx(total, expected[i]));
            }
        }
    }
}

#[test]
fn test_dijkstra_marks_superseded_edge_forward() {
    let mut graph = Graph::directed();
    let s = graph.add_vertex(0u32);
    let a = graph.add_vertex(1);
    let t = graph.add_vertex(2);
    let direct = graph.link_weighted(s, t, 10.0).unwrap().forward;
    let first = graph.link_weighted(s, a, 1.0).unwrap().forward;
    let second = graph.link_weighted(a, t, 1.0).unwrap().forward;

    let paths = graph.dijkstra(s).unwrap();
    assert!(approx(paths.distance(t), 2.0));
    assert_eq!(paths.predecessor(t), Some(second));
    assert_eq!(paths.status_of(direct), EdgeStatus::Forward);
    assert_eq!(paths.status_of(first), EdgeStatus::Discovered);
    assert_eq!(paths.status_of(second), EdgeStatus::Discovered);
}

#[test]
fn test_dijkstra_rejects_negative_weight() {
    let mut graph = Graph::directed();
    let a = graph.add_vertex(0u32);
    let b = graph.add_vertex(1);
    graph.link_weighted(a, b, -1.0).unwrap();

    assert!(matches!(
        graph.dijkstra(a),
        Err(GraphError::NegativeWeight { .. })
    ));
    // Never reached from b, so no error.
    assert!(graph.dijkstra(b).is_ok());
}

#[test]
fn test_dijkstra_stale_source() {
    let mut graph = Graph::directed();
    let a = graph.add_vertex(0u32);
    graph.remove_vertex(a).unwrap();
    assert!(matches!(graph.dijkstra(a), Err(GraphError::VertexNotFound(_))));
}

// ==================== Adjacency Tests ====================

#[test]
fn test_are_adjacent_directed() {
    let mut graph = Graph::directed();
    let a = graph.add_vertex(0u32);
    let b = graph.add_vertex(1);
    graph.link(a, b).unwrap();
    assert!(graph.are_adjacent(a, b).unwrap());
    assert!(!graph.are_adjacent(b, a).unwrap());
}

#[test]
fn test_are_adjacent_undirected() {
    let mut graph = Graph::undirected();
    let hub = graph.add_vertex(0u32);
    let leaf = graph.add_vertex(1);
    let other = graph.add_vertex(2);
    graph.link(hub, leaf).unwrap();
    for i in 3..10 {
        let v = graph.add_vertex(i);
        graph.link(hub, v).unwrap();
    }
    assert!(graph.are_adjacent(hub, leaf).unwrap());
    assert!(graph.are_adjacent(leaf, hub).unwrap());
    assert!(!graph.are_adjacent(hub, other).unwrap());
    assert!(!graph.are_adjacent(leaf, other).unwrap());
}

// ==================== Transitive Closure Tests ====================

#[test]
fn test_transitive_closure_chain() {
    let mut graph = Graph::directed();
    let v1 = graph.add_vertex(1u32);
    let v2 = graph.add_vertex(2);
    let v3 = graph.add_vertex(3);
    graph.link(v1, v2).unwrap();
    graph.link(v2, v3).unwrap();

    assert_eq!(graph.transitive_closure().unwrap(), 1);
    assert!(graph.are_adjacent(v1, v3).unwrap());
    assert!(!graph.are_adjacent(v3, v1).unwrap());
    assert_eq!(graph.edge_count(), 3);

    assert_eq!(graph.transitive_closure().unwrap(), 0);
    assert_eq!(graph.edge_count(), 3);
    graph.verify_incidence().unwrap();
}

#[test]
fn test_transitive_closure_long_chain() {
    let mut graph = Graph::directed();
    let vs: Vec<VertexHandle> = (0..6u32).map(|i| graph.add_vertex(i)).collect();
    for w in vs.windows(2) {
        graph.link(w[0], w[1]).unwrap();
    }
    graph.transitive_closure().unwrap();
    for i in 0..vs.len() {
        for j in 0..vs.len() {
            assert_eq!(graph.are_adjacent(vs[i], vs[j]).unwrap(), i < j);
        }
    }
}

#[test]
fn test_transitive_closure_undirected() {
    let mut graph = Graph::undirected();
    let a = graph.add_vertex(0u32);
    let b = graph.add_vertex(1);
    let c = graph.add_vertex(2);
    graph.link(a, b).unwrap();
    graph.link(b, c).unwrap();

    graph.transitive_closure().unwrap();
    assert!(graph.are_adjacent(a, c).unwrap());
    assert!(graph.are_adjacent(c, a).unwrap());
    // Closure never adds self-loops.
    assert!(!graph.are_adjacent(a, a).unwrap());
    assert_eq!(graph.edge_count(), 6);
}

// ==================== Clone Tests ====================

#[test]
fn test_clone_preserves_structure() {
    let mut graph = Graph::undirected();
    let vs: Vec<VertexHandle> = (0..5u32).map(|i| graph.add_vertex(i * 10)).collect();
    graph.add_edge(vs[0], vs[1], Some("x".into()), 1.5).unwrap();
    graph.link(vs[1], vs[2]).unwrap();
    graph.link_weighted(vs[3], vs[4], 2.0).unwrap();
    graph.link(vs[4], vs[4]).unwrap();
    // Leaves an id gap.
    graph.remove_vertex(vs[2]).unwrap();

    let copy = graph.clone();
    assert_eq!(copy.is_directed(), graph.is_directed());
    assert_eq!(copy.vertex_count(), graph.vertex_count());
    assert_eq!(copy.edge_count(), graph.edge_count());
    assert_eq!(vertex_pairs(&copy), vertex_pairs(&graph));
    assert_eq!(edge_triples(&copy), edge_triples(&graph));
    copy.verify_incidence().unwrap();
}

#[test]
fn test_clone_is_independent() {
    let mut graph = Graph::directed();
    let a = graph.add_vertex(String::from("a"));
    let b = graph.add_vertex(String::from("b"));
    graph.link(a, b).unwrap();

    let mut copy = graph.clone();
    // Handles of the original do not resolve in the copy.
    assert!(copy.vertex(a).is_none());

    let ca = copy.vertex_by_id(0).unwrap();
    let cb = copy.vertex_by_id(1).unwrap();
    copy.link(cb, ca).unwrap();
    copy.vertex_mut(ca).unwrap().set_data(String::from("changed"));
    let added = copy.add_vertex(String::from("c"));

    assert_eq!(copy.vertex(added).unwrap().id(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.data(a).map(String::as_str), Some("a"));
    assert!(!graph.are_adjacent(b, a).unwrap());
}

#[test]
fn test_clone_then_closure_leaves_original() {
    let mut graph = Graph::directed();
    let vs: Vec<VertexHandle> = (0..4u32).map(|i| graph.add_vertex(i)).collect();
    for w in vs.windows(2) {
        graph.link(w[0], w[1]).unwrap();
    }
    let mut copy = graph.clone();
    assert_eq!(copy.transitive_closure().unwrap(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(copy.edge_count(), 6);
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_rejects_unknown_index() {
    let mut builder = GraphBuilder::new();
    let a = builder.vertex(1u32);
    builder.edge(a, 5);
    assert!(matches!(
        builder.build(),
        Err(GraphError::IndexOutOfRange { index: 5, size: 1 })
    ));
}

#[test]
fn test_builder_labels_and_mirrors() {
    let mut builder = GraphBuilder::new();
    let a = builder.vertex("a");
    let b = builder.vertex("b");
    builder.labeled_edge(a, b, Some("ab"), 2.0);
    let graph = builder.build().unwrap();

    assert!(!graph.is_directed());
    assert_eq!(graph.edge_count(), 2);
    for e in graph.edges() {
        let edge = graph.edge(e).unwrap();
        assert_eq!(edge.label(), Some("ab"));
        assert_eq!(edge.weight(), 2.0);
    }
}
