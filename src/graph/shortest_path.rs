//! Single-source shortest paths (Dijkstra) over non-negative weights.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::types::{EdgeHandle, EdgeStatus, GraphError, GraphResult, VertexHandle, VertexStatus};

use super::Graph;

/// Priority-queue entry ordered by tentative distance, smallest first.
///
/// The heap has no decrease-key, so a vertex may sit in it several times;
/// entries whose distance no longer matches the vertex's best are stale.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    distance: f64,
    vertex: VertexHandle,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Shortest-path tree computed by [`Graph::dijkstra`].
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: VertexHandle,
    distances: HashMap<VertexHandle, f64>,
    parents: HashMap<VertexHandle, VertexHandle>,
    predecessors: HashMap<VertexHandle, EdgeHandle>,
    edge_status: HashMap<EdgeHandle, EdgeStatus>,
}

impl ShortestPaths {
    pub fn source(&self) -> VertexHandle {
        self.source
    }

    /// Total weight of the best path to `v`, `f64::INFINITY` if unreachable.
    pub fn distance(&self, v: VertexHandle) -> f64 {
        self.distances.get(&v).copied().unwrap_or(f64::INFINITY)
    }

    pub fn is_reachable(&self, v: VertexHandle) -> bool {
        self.distances.contains_key(&v)
    }

    /// Previous vertex on the best path to `v`. The source has none.
    pub fn parent(&self, v: VertexHandle) -> Option<VertexHandle> {
        self.parents.get(&v).copied()
    }

    /// Last edge of the best path to `v`.
    pub fn predecessor(&self, v: VertexHandle) -> Option<EdgeHandle> {
        self.predecessors.get(&v).copied()
    }

    /// `Discovered` for edges that were ever a best edge, `Forward` for
    /// those later superseded, `Undiscovered` otherwise.
    pub fn status_of(&self, e: EdgeHandle) -> EdgeStatus {
        self.edge_status.get(&e).copied().unwrap_or_default()
    }

    /// Edges from the source to `target` in path order. Empty when `target`
    /// is unreachable or is the source.
    pub fn path_to(&self, target: VertexHandle) -> Vec<EdgeHandle> {
        let mut path = Vec::new();
        let mut current = target;
        while let Some(edge) = self.predecessor(current) {
            path.push(edge);
            match self.parent(current) {
                Some(parent) => current = parent,
                None => break,
            }
        }
        path.reverse();
        path
    }
}

impl<V> Graph<V> {
    /// Shortest paths from `source` to every reachable vertex.
    ///
    /// Weights must be non-negative; meeting a negative weight aborts the
    /// run with [`GraphError::NegativeWeight`].
    pub fn dijkstra(&self, source: VertexHandle) -> GraphResult<ShortestPaths> {
        self.require_vertex(source)?;

        let mut status: HashMap<VertexHandle, VertexStatus> = HashMap::new();
        let mut paths = ShortestPaths {
            source,
            distances: HashMap::new(),
            parents: HashMap::new(),
            predecessors: HashMap::new(),
            edge_status: HashMap::new(),
        };

        let mut heap = BinaryHeap::new();
        paths.distances.insert(source, 0.0);
        status.insert(source, VertexStatus::Visiting);
        heap.push(QueueEntry {
            distance: 0.0,
            vertex: source,
        });

        let mut settled = 0usize;
        while let Some(QueueEntry { distance, vertex: polled }) = heap.pop() {
            if status.get(&polled) == Some(&VertexStatus::Visited)
                || distance > paths.distance(polled)
            {
                continue;
            }
            status.insert(polled, VertexStatus::Visited);
            settled += 1;

            let vertex = self.require_vertex(polled)?;
            for &e in vertex.out_edges() {
                let edge = self.edge(e).ok_or(GraphError::EdgeNotFound(e))?;
                if edge.weight() < 0.0 {
                    log::warn!("dijkstra aborted on negative weight edge {}", e);
                    return Err(GraphError::NegativeWeight {
                        edge: e,
                        weight: edge.weight(),
                    });
                }
                let target = edge.to();
                let cost = distance + edge.weight();

                let improves = match status.get(&target).copied().unwrap_or_default() {
                    VertexStatus::Unvisited => true,
                    VertexStatus::Visiting => cost < paths.distance(target),
                    VertexStatus::Visited => false,
                };
                if !improves {
                    continue;
                }

                if let Some(previous) = paths.predecessors.insert(target, e) {
                    paths.edge_status.insert(previous, EdgeStatus::Forward);
                }
                paths.edge_status.insert(e, EdgeStatus::Discovered);
                paths.distances.insert(target, cost);
                paths.parents.insert(target, polled);
                status.insert(target, VertexStatus::Visiting);
                heap.push(QueueEntry {
                    distance: cost,
                    vertex: target,
                });
            }
        }

        log::debug!("dijkstra from {} settled {} vertices", source, settled);
        Ok(paths)
    }

    /// Edges of a shortest path from `source` to `target`, in order.
    /// Empty when `target` is unreachable or equals `source`.
    pub fn shortest_path(
        &self,
        source: VertexHandle,
        target: VertexHandle,
    ) -> GraphResult<Vec<EdgeHandle>> {
        self.require_vertex(target)?;
        Ok(self.dijkstra(source)?.path_to(target))
    }
}
