pub mod edge;
pub mod gnp;
pub mod shortest_paths;
pub mod tour_graph;

pub type Node = u32;
pub type NumNodes = Node;
pub type NumEdges = u64;
pub type Cost = u64;
pub type EdgeName = i64;

/// Index of a physical (undirected) edge within a [`TourGraph`]
pub type EdgeId = usize;

use std::ops::Range;

pub use edge::*;
pub use gnp::*;
pub use shortest_paths::*;
pub use tour_graph::*;

/// Hard bounds on the instance size. Inputs exceeding them are rejected rather than truncated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Limits {
    /// Vertex ids must be strictly below this value
    pub max_vertices: NumNodes,
    /// Upper bound on the number of odd-degree vertices the matcher accepts; the
    /// memo table of the matcher has up to `2^max_odd_vertices` entries
    pub max_odd_vertices: usize,
}

impl Limits {
    /// Largest odd-vertex bound we allow to be configured
    pub const ODD_VERTICES_CEILING: usize = 24;

    pub fn new(max_vertices: NumNodes, max_odd_vertices: usize) -> Self {
        Self {
            max_vertices,
            max_odd_vertices,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(50, 16)
    }
}

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all nodes. The range does not borrow self and hence
    /// may be used where additional mutable references of self are needed.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        self.vertices_range()
    }

    /// Returns true if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}
