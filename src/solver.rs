//! End-to-end solution of the route inspection problem:
//!
//!  1. build the traversal multigraph and account degrees,
//!  2. compute all-pairs shortest paths,
//!  3. match the odd-degree nodes at minimum total distance,
//!  4. duplicate the shortest paths between matched nodes,
//!  5. walk the canonical Eulerian circuit of the augmented multigraph.
//!
//! # Example
//! ```
//! use postman::prelude::*;
//!
//! let instance = Instance {
//!     number_of_nodes: 3,
//!     edges: vec![EdgeRecord::new(0, 0, 1, 2), EdgeRecord::new(1, 1, 2, 3)],
//!     start: 0,
//! };
//!
//! let solution = RouteInspection::new(&instance).solve().unwrap();
//! assert_eq!(solution.cost, 10);
//! assert_eq!(solution.labels, [0, 1, 3, 3]);
//! ```

use log::{debug, info};

use crate::errors::{InvariantCheck, PostmanError, Result};
use crate::exact::{Matching, OddVertexMatcher};
use crate::graph::*;
use crate::tour::{EulerTour, Route, TieBreakOrder, augment};

/// A parsed input: the edges and the node the closed walk starts and ends at
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    /// Announced number of nodes; informational only
    pub number_of_nodes: u64,
    pub edges: Vec<EdgeRecord>,
    pub start: Node,
}

#[derive(Clone, Debug)]
pub struct Solution {
    /// Sum of all input edge costs plus the cost of the matching
    pub cost: Cost,
    /// Rendered edge names in traversal order
    pub labels: Vec<EdgeName>,
    pub route: Route,
    pub matching: Matching,
    /// Number of edges inserted by the augmentation
    pub duplicated_hops: usize,
    /// Augmented multigraph the route refers to
    pub graph: TourGraph,
}

impl Solution {
    /// Cost obtained by walking the route edge by edge
    pub fn route_cost(&self) -> Option<Cost> {
        self.route.cost(&self.graph)
    }
}

pub struct RouteInspection<'a> {
    instance: &'a Instance,
    order: TieBreakOrder,
    limits: Limits,
}

impl<'a> RouteInspection<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            order: TieBreakOrder::default(),
            limits: Limits::default(),
        }
    }

    pub fn with_order(mut self, order: TieBreakOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn solve(&self) -> Result<Solution> {
        let limits = self.limits;
        if limits.max_odd_vertices > Limits::ODD_VERTICES_CEILING {
            return Err(PostmanError::InvalidLimits(format!(
                "at most {} odd vertices are supported, requested {}",
                Limits::ODD_VERTICES_CEILING,
                limits.max_odd_vertices
            )));
        }

        let start = self.instance.start;
        let mut graph = TourGraph::from_records(&self.instance.edges, limits)?;
        graph.include_node(start)?;

        info!(
            "Read {} edges on {} nodes with total cost {}",
            graph.number_of_edges(),
            graph.number_of_nodes(),
            graph.original_cost()
        );
        if self.instance.number_of_nodes != graph.number_of_nodes() as u64 {
            debug!(
                "Header announced {} nodes; edges and start node span {}",
                self.instance.number_of_nodes,
                graph.number_of_nodes()
            );
        }

        let paths = ShortestPaths::floyd_warshall(&graph);

        let odd_vertices = graph.odd_vertices();
        info!("Found {} odd-degree vertices", odd_vertices.len());
        debug!("Odd-degree vertices: {odd_vertices:?}");

        let matching = OddVertexMatcher::new(odd_vertices, &paths, limits)?.solve()?;
        let cost = graph
            .original_cost()
            .checked_add(matching.cost)
            .ok_or(PostmanError::CostOverflow)?;

        let duplicated_hops = augment(&mut graph, &paths, &matching)?;
        graph.is_correct()?;

        let route = EulerTour::new(&mut graph, &self.order).run(start)?;

        debug_assert_eq!(Some(cost), route.cost(&graph));

        let labels = route
            .labels(&graph)
            .map(|label| self.order.render(label))
            .collect();

        info!(
            "Closed walk from {start} has cost {cost} and {} steps ({duplicated_hops} duplicated)",
            route.len()
        );

        Ok(Solution {
            cost,
            labels,
            route,
            matching,
            duplicated_hops,
            graph,
        })
    }
}
