//! Adjacency checks and transitive closure.

use crate::types::{GraphResult, VertexHandle};

use super::Graph;

impl<V> Graph<V> {
    /// True if an edge `v1 -> v2` exists. Undirected graphs scan whichever
    /// endpoint has the shorter out-list.
    pub fn are_adjacent(&self, v1: VertexHandle, v2: VertexHandle) -> GraphResult<bool> {
        self.require_vertex(v1)?;
        self.require_vertex(v2)?;
        Ok(self.adjacent(v1, v2))
    }

    fn adjacent(&self, v1: VertexHandle, v2: VertexHandle) -> bool {
        let degree = |v| self.vertex(v).map_or(0, |vertex| vertex.out_degree());
        let (from, to) = if !self.is_directed() && degree(v2) < degree(v1) {
            (v2, v1)
        } else {
            (v1, v2)
        };

        self.vertex(from).is_some_and(|vertex| {
            vertex
                .out_edges()
                .any(|&e| self.edge(e).is_some_and(|edge| edge.to() == to))
        })
    }

    /// Add `i -> j` whenever `i -> k -> j` exists and `i -> j` does not,
    /// for every pivot `k` over a snapshot of the vertex list.
    ///
    /// Adjacency checks see edges added earlier in the same run, so one call
    /// is a single relaxation pass rather than a matrix Floyd–Warshall.
    /// New edges carry no label and weight 0. Returns how many were added
    /// (undirected mirrors not counted separately).
    pub fn transitive_closure(&mut self) -> GraphResult<usize> {
        let snapshot: Vec<VertexHandle> = self.vertices().collect();
        let mut added = 0usize;

        for (k, &pivot) in snapshot.iter().enumerate() {
            for (i, &from) in snapshot.iter().enumerate() {
                if i == k || !self.adjacent(from, pivot) {
                    continue;
                }
                for (j, &to) in snapshot.iter().enumerate() {
                    if j == i || j == k {
                        continue;
                    }
                    if self.adjacent(pivot, to) && !self.adjacent(from, to) {
                        self.link(from, to)?;
                        added += 1;
                    }
                }
            }
        }

        log::debug!("transitive closure added {} edges", added);
        Ok(added)
    }
}
