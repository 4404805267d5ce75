//! The traversal multigraph: every input edge plus every edge inserted by the augmentation.
//!
//! Each physical edge is stored once and referenced from the adjacency lists of both
//! endpoints. The "traversed" state therefore lives on the physical edge and is shared
//! by both directions.

use std::borrow::Borrow;

use super::*;
use crate::errors::{InvariantCheck, PostmanError, Result};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PhysicalEdge {
    pub u: Node,
    pub v: Node,
    pub cost: Cost,
    pub label: EdgeLabel,
}

impl PhysicalEdge {
    /// Returns the endpoint opposite to `from`
    pub fn other(&self, from: Node) -> Node {
        debug_assert!(from == self.u || from == self.v);
        if from == self.u { self.v } else { self.u }
    }
}

/// One direction of a physical edge as seen from the adjacency list of its source
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TourEdge {
    pub to: Node,
    pub edge: EdgeId,
}

#[derive(Clone, Debug)]
pub struct TourGraph {
    limits: Limits,
    /// incident original edges per node; duplicates are not counted
    degrees: Vec<NumNodes>,
    adj: Vec<Vec<TourEdge>>,
    edges: Vec<PhysicalEdge>,
    traversed: Vec<bool>,
    number_of_duplicates: usize,
    original_cost: Cost,
}

impl TourGraph {
    /// Creates an empty graph; nodes are introduced by edges or [`TourGraph::include_node`]
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            degrees: Vec::new(),
            adj: Vec::new(),
            edges: Vec::new(),
            traversed: Vec::new(),
            number_of_duplicates: 0,
            original_cost: 0,
        }
    }

    pub fn from_records<I>(records: I, limits: Limits) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Borrow<EdgeRecord>,
    {
        let mut graph = Self::new(limits);
        for record in records {
            graph.add_edge(record.borrow())?;
        }
        Ok(graph)
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Makes sure node `u` exists, growing the node range to `0..=u` if needed.
    /// Fails if `u` exceeds the vertex capacity.
    pub fn include_node(&mut self, u: Node) -> Result<()> {
        raise_unless_in_range(u, self.limits)?;

        let required = u as usize + 1;
        if self.adj.len() < required {
            self.adj.resize_with(required, Vec::new);
            self.degrees.resize(required, 0);
        }
        Ok(())
    }

    /// Inserts an input edge, accounts for the degree of both endpoints and
    /// returns the id of the new physical edge.
    /// Fails if the sum of all input costs no longer fits into [`Cost`]; every simple path,
    /// and hence every shortest path, is then guaranteed to fit as well.
    pub fn add_edge(&mut self, record: &EdgeRecord) -> Result<EdgeId> {
        let original_cost = self
            .original_cost
            .checked_add(record.cost)
            .ok_or(PostmanError::CostOverflow)?;

        let id = self.insert(record.u, record.v, record.cost, record.label())?;
        self.degrees[record.u as usize] += 1;
        self.degrees[record.v as usize] += 1;
        self.original_cost = original_cost;
        Ok(id)
    }

    /// Inserts a copy of an existing connection between `u` and `v`; the copy is reported
    /// under the duplicate label and leaves the original degrees untouched.
    pub fn add_duplicate(&mut self, u: Node, v: Node, cost: Cost) -> Result<EdgeId> {
        let id = self.insert(u, v, cost, EdgeLabel::Duplicate)?;
        self.number_of_duplicates += 1;
        Ok(id)
    }

    fn insert(&mut self, u: Node, v: Node, cost: Cost, label: EdgeLabel) -> Result<EdgeId> {
        self.include_node(u)?;
        self.include_node(v)?;

        let id = self.edges.len();
        self.edges.push(PhysicalEdge { u, v, cost, label });
        self.traversed.push(false);

        self.adj[u as usize].push(TourEdge { to: v, edge: id });
        self.adj[v as usize].push(TourEdge { to: u, edge: id });

        Ok(id)
    }

    /// Number of original edges incident to `u` (a loop counts twice)
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.degrees[u as usize]
    }

    pub fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.degrees.iter().copied()
    }

    /// Number of traversal records at `u`, i.e. the degree including duplicates
    pub fn augmented_degree_of(&self, u: Node) -> usize {
        self.adj[u as usize].len()
    }

    /// Nodes with an odd number of incident original edges, in increasing order
    pub fn odd_vertices(&self) -> Vec<Node> {
        self.vertices()
            .filter(|&u| self.degree_of(u) % 2 == 1)
            .collect()
    }

    pub fn tour_edges_of(&self, u: Node) -> &[TourEdge] {
        &self.adj[u as usize]
    }

    pub fn edge(&self, id: EdgeId) -> &PhysicalEdge {
        &self.edges[id]
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &PhysicalEdge)> + '_ {
        self.edges.iter().enumerate()
    }

    /// Input edges, in input order
    pub fn original_edges(&self) -> impl Iterator<Item = &PhysicalEdge> + '_ {
        self.edges.iter().filter(|e| !e.label.is_duplicate())
    }

    pub fn number_of_duplicates(&self) -> usize {
        self.number_of_duplicates
    }

    /// Sum of the costs of all input edges
    pub fn original_cost(&self) -> Cost {
        self.original_cost
    }

    /// Sum of the costs of all edges including duplicates, or `None` on overflow
    pub fn total_cost(&self) -> Option<Cost> {
        self.edges
            .iter()
            .try_fold(0 as Cost, |sum, e| sum.checked_add(e.cost))
    }

    /// Whether every node has even degree once the duplicates are taken into account
    pub fn is_eulerian(&self) -> bool {
        self.is_correct().is_ok()
    }

    pub fn is_traversed(&self, id: EdgeId) -> bool {
        self.traversed[id]
    }

    /// Marks edge `id` as traversed in both directions; returns whether it was unused before.
    pub fn mark_traversed(&mut self, id: EdgeId) -> bool {
        !std::mem::replace(&mut self.traversed[id], true)
    }

    pub fn number_of_untraversed(&self) -> usize {
        self.traversed.iter().filter(|&&t| !t).count()
    }

    pub fn reset_traversal(&mut self) {
        self.traversed.fill(false);
    }
}

fn raise_unless_in_range(u: Node, limits: Limits) -> Result<()> {
    if u >= limits.max_vertices {
        return Err(PostmanError::VertexOutOfRange {
            vertex: u,
            max_vertices: limits.max_vertices,
        });
    }
    Ok(())
}

impl GraphNodeOrder for TourGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }
}

impl GraphEdgeOrder for TourGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl InvariantCheck<PostmanError> for TourGraph {
    fn is_correct(&self) -> Result<()> {
        match self
            .vertices()
            .find(|&u| self.augmented_degree_of(u) % 2 == 1)
        {
            Some(vertex) => Err(PostmanError::OddDegree {
                vertex,
                degree: self.augmented_degree_of(vertex),
            }),
            None => Ok(()),
        }
    }
}
