//! Whole-graph traversals (BFS, DFS, weak BFS) and the checks built on them.
//!
//! Every traversal starts from fresh per-call state: all vertices
//! unvisited, all edges undiscovered. Nothing is cached on the graph.

use std::collections::{HashMap, VecDeque};

use crate::list::Iter;
use crate::types::{EdgeHandle, EdgeStatus, VertexHandle, VertexStatus};

use super::vertex::Vertex;
use super::Graph;

/// Result of a whole-graph traversal.
#[derive(Debug, Clone, Default)]
pub struct Traversal {
    /// Every vertex exactly once, in visitation order.
    pub order: Vec<VertexHandle>,
    /// Number of traversal trees started (components for BFS and weak BFS).
    pub components: usize,
    /// Exactly one tree was needed.
    pub connected: bool,
    /// A cycle was detected. Only evaluated by [`Graph::dfs`].
    pub cyclic: bool,
    /// Final classification of every examined edge.
    pub edge_status: HashMap<EdgeHandle, EdgeStatus>,
    /// Index of the tree (1-based) each vertex was reached in.
    pub color: HashMap<VertexHandle, usize>,
}

impl Traversal {
    /// Status of `e`, `Undiscovered` if the traversal never examined it.
    pub fn status_of(&self, e: EdgeHandle) -> EdgeStatus {
        self.edge_status.get(&e).copied().unwrap_or_default()
    }

    /// Edges that ended with `status`.
    pub fn edges_with(&self, status: EdgeStatus) -> Vec<EdgeHandle> {
        let mut edges: Vec<EdgeHandle> = self
            .edge_status
            .iter()
            .filter(|(_, s)| **s == status)
            .map(|(e, _)| *e)
            .collect();
        edges.sort_unstable();
        edges
    }
}

#[derive(Default)]
struct WalkState {
    status: HashMap<VertexHandle, VertexStatus>,
}

impl WalkState {
    fn status(&self, v: VertexHandle) -> VertexStatus {
        self.status.get(&v).copied().unwrap_or_default()
    }

    fn set(&mut self, v: VertexHandle, status: VertexStatus) {
        self.status.insert(v, status);
    }
}

impl<V> Graph<V> {
    /// Breadth-first walk over every component, roots taken in vertex-list
    /// order. Tree edges end `Discovered`, other edges to already reached
    /// vertices `Cross`.
    pub fn bfs(&self) -> Traversal {
        let walk = self.breadth_first(Vertex::out_edges);
        log::debug!(
            "bfs visited {} vertices in {} trees",
            walk.order.len(),
            walk.components
        );
        walk
    }

    /// Breadth-first walk that ignores direction by following the
    /// concatenation of each vertex's out- and in-lists. Its component
    /// count is the weak component count of a directed graph.
    pub fn weak_bfs(&self) -> Traversal {
        self.breadth_first(Vertex::incident_edges)
    }

    fn breadth_first<'a, F, I>(&'a self, incident: F) -> Traversal
    where
        F: Fn(&'a Vertex<V>) -> I,
        I: Iterator<Item = &'a EdgeHandle>,
    {
        let mut state = WalkState::default();
        let mut walk = Traversal::default();

        for root in self.vertices() {
            if state.status(root) != VertexStatus::Unvisited {
                continue;
            }
            walk.components += 1;
            let color = walk.components;

            let mut queue = VecDeque::new();
            state.set(root, VertexStatus::Visiting);
            queue.push_back(root);

            while let Some(polled) = queue.pop_front() {
                walk.order.push(polled);
                walk.color.insert(polled, color);
                state.set(polled, VertexStatus::Visited);

                let Some(vertex) = self.vertex(polled) else {
                    continue;
                };
                for &e in incident(vertex) {
                    let Some(next) = self.edge(e).and_then(|edge| edge.opposite(polled)) else {
                        continue;
                    };
                    if state.status(next) == VertexStatus::Unvisited {
                        walk.edge_status.insert(e, EdgeStatus::Discovered);
                        state.set(next, VertexStatus::Visiting);
                        queue.push_back(next);
                    } else {
                        walk.edge_status.entry(e).or_insert(EdgeStatus::Cross);
                    }
                }
            }
        }

        walk.connected = walk.components == 1;
        walk
    }

    /// Depth-first walk over every component with an explicit stack.
    ///
    /// Besides the visitation order it counts traversal trees and detects
    /// cycles. Undirected: an edge reaching a finished vertex closes a cycle
    /// (the mirror of the tree edge only reaches the open parent). Directed:
    /// an edge reaching an open vertex of the same tree closes a cycle.
    /// Cycle-closing edges end `Back`, other non-tree edges `Cross`.
    pub fn dfs(&self) -> Traversal {
        let mut state = WalkState::default();
        let mut walk = Traversal::default();

        for root in self.vertices() {
            if state.status(root) == VertexStatus::Unvisited {
                walk.components += 1;
                self.dfs_tree(root, &mut state, &mut walk);
            }
        }

        walk.connected = walk.components == 1;
        log::debug!(
            "dfs visited {} vertices in {} trees, cyclic: {}",
            walk.order.len(),
            walk.components,
            walk.cyclic
        );
        walk
    }

    fn dfs_tree(&self, root: VertexHandle, state: &mut WalkState, walk: &mut Traversal) {
        let color = walk.components;
        let mut stack = Vec::new();

        stack.extend(self.enter(root, color, state, walk));

        loop {
            let (v, next_edge) = match stack.last_mut() {
                Some((v, edges)) => (*v, edges.next().copied()),
                None => break,
            };
            let Some(e) = next_edge else {
                state.set(v, VertexStatus::Visited);
                stack.pop();
                continue;
            };
            let Some(w) = self.edge(e).map(|edge| edge.to()) else {
                continue;
            };

            match state.status(w) {
                VertexStatus::Unvisited => {
                    walk.edge_status.insert(e, EdgeStatus::Discovered);
                    stack.extend(self.enter(w, color, state, walk));
                }
                status => {
                    let closes_cycle = if self.is_directed() {
                        status == VertexStatus::Visiting && walk.color.get(&w) == Some(&color)
                    } else {
                        status == VertexStatus::Visited
                    };
                    if closes_cycle {
                        walk.cyclic = true;
                    }
                    let class = if closes_cycle {
                        EdgeStatus::Back
                    } else {
                        EdgeStatus::Cross
                    };
                    walk.edge_status.entry(e).or_insert(class);
                }
            }
        }
    }

    fn enter<'a>(
        &'a self,
        v: VertexHandle,
        color: usize,
        state: &mut WalkState,
        walk: &mut Traversal,
    ) -> Option<(VertexHandle, Iter<'a, EdgeHandle>)> {
        state.set(v, VertexStatus::Visiting);
        walk.color.insert(v, color);
        walk.order.push(v);
        self.vertex(v).map(|vertex| (v, vertex.out_edges()))
    }

    /// True if the graph contains a cycle. Recomputed on every call.
    pub fn is_cyclic(&self) -> bool {
        self.dfs().cyclic
    }

    /// True if the graph has exactly one component. Directed graphs use
    /// weak connectivity. Recomputed on every call.
    pub fn is_connected(&self) -> bool {
        self.component_walk().connected
    }

    /// Number of components (weak components for directed graphs).
    pub fn connected_components(&self) -> usize {
        self.component_walk().components
    }

    fn component_walk(&self) -> Traversal {
        if self.is_directed() {
            self.weak_bfs()
        } else {
            self.dfs()
        }
    }
}
