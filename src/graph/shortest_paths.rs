//! All-pairs shortest paths (Floyd-Warshall) with successor matrix for path reconstruction.

use log::{debug, trace};

use super::*;

/// Dense `n x n` distance and next-hop matrices stored in row-major order.
///
/// Unreachable pairs are `None` in both matrices; they never take part in any arithmetic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths {
    size: usize,
    dist: Vec<Option<Cost>>,
    next: Vec<Option<Node>>,
}

impl ShortestPaths {
    /// Seeds the matrices with the cheapest direct input edge of each pair and relaxes
    /// over all intermediate nodes. Only the input edges are considered; duplicates
    /// inserted later never change a distance.
    ///
    /// A candidate whose length overflows [`Cost`] is discarded. As the total input cost
    /// of a [`TourGraph`] fits into [`Cost`], such a candidate is never a shortest path.
    pub fn floyd_warshall(graph: &TourGraph) -> Self {
        let n = graph.len();
        let mut paths = Self {
            size: n,
            dist: vec![None; n * n],
            next: vec![None; n * n],
        };

        for u in graph.vertices() {
            paths.set(u, u, Some(0), None);
        }

        for edge in graph.original_edges() {
            let (u, v) = (edge.u, edge.v);
            if paths.distance(u, v).is_none_or(|d| edge.cost < d) {
                paths.set(u, v, Some(edge.cost), Some(v));
                paths.set(v, u, Some(edge.cost), Some(u));
            }
        }

        let mut relaxations = 0usize;
        for k in graph.vertices() {
            for i in graph.vertices() {
                let Some(dist_ik) = paths.distance(i, k) else {
                    continue;
                };
                let next_ik = paths.next_hop(i, k);

                for j in graph.vertices() {
                    let Some(dist_kj) = paths.distance(k, j) else {
                        continue;
                    };

                    let Some(through_k) = dist_ik.checked_add(dist_kj) else {
                        continue;
                    };

                    if paths.distance(i, j).is_none_or(|d| through_k < d) {
                        paths.set(i, j, Some(through_k), next_ik);
                        relaxations += 1;
                    }
                }
            }
        }

        debug!("Floyd-Warshall on {n} nodes performed {relaxations} relaxations");
        paths
    }

    fn index(&self, u: Node, v: Node) -> usize {
        u as usize * self.size + v as usize
    }

    fn set(&mut self, u: Node, v: Node, dist: Option<Cost>, next: Option<Node>) {
        let idx = self.index(u, v);
        self.dist[idx] = dist;
        self.next[idx] = next;
    }

    /// Number of nodes covered by the matrices
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length of a shortest path from `u` to `v`, or `None` if `v` cannot be reached.
    ///
    /// # Panics
    ///
    /// Panics if either node is out of bounds.
    pub fn distance(&self, u: Node, v: Node) -> Option<Cost> {
        self.dist[self.index(u, v)]
    }

    /// First node after `u` on the recorded shortest path towards `v`
    pub fn next_hop(&self, u: Node, v: Node) -> Option<Node> {
        self.next[self.index(u, v)]
    }

    /// Nodes of the recorded shortest path from `u` to `v`, both included.
    /// Returns `None` if `v` cannot be reached from `u`.
    pub fn path(&self, u: Node, v: Node) -> Option<Vec<Node>> {
        self.distance(u, v)?;

        let mut path = vec![u];
        let mut current = u;
        while current != v {
            current = self.next_hop(current, v)?;
            trace!("path {u} -> {v}: hop to {current}");
            path.push(current);

            // every hop strictly shortens the remaining hop count; more hops than nodes means a cycle
            if path.len() > self.size {
                return None;
            }
        }

        Some(path)
    }

    /// Returns `true` if `distance(u, v) == distance(v, u)` for all pairs
    pub fn is_symmetric(&self) -> bool {
        (0..self.size as Node).all(|u| {
            (u + 1..self.size as Node).all(|v| self.distance(u, v) == self.distance(v, u))
        })
    }
}
