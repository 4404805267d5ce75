//! Construction of one canonical Eulerian circuit (Hierholzer).
//!
//! Starting at a given node we repeatedly leave the node on top of the work stack via its
//! untraversed edge of highest priority. Once a node has no untraversed edges left, it is
//! popped and the edge we entered it with is appended to the route. This post-order emits
//! the circuit backwards, so the route is reversed at the end. The explicit stack emits the
//! same sequence as the recursive formulation without growing the call stack.

use std::cmp::Reverse;

use itertools::Itertools;
use log::{debug, trace};

use super::*;
use crate::errors::{PostmanError, Result};
use crate::graph::*;

/// Traversal of one physical edge in direction `from -> to`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Step {
    pub from: Node,
    pub to: Node,
    pub edge: EdgeId,
}

/// Sequence of steps in traversal order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    steps: Vec<Step>,
}

impl Route {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn labels<'a>(&'a self, graph: &'a TourGraph) -> impl Iterator<Item = EdgeLabel> + 'a {
        self.steps.iter().map(|s| graph.edge(s.edge).label)
    }

    /// Sum of the costs of the walked edges, or `None` on overflow; duplicates count with
    /// the cost of the connection they copy
    pub fn cost(&self, graph: &TourGraph) -> Option<Cost> {
        self.steps
            .iter()
            .try_fold(0 as Cost, |sum, s| sum.checked_add(graph.edge(s.edge).cost))
    }

    /// Returns true if consecutive steps connect, the walk starts and ends in `start`, and
    /// every step follows an edge between its endpoints
    pub fn is_closed_walk(&self, graph: &TourGraph, start: Node) -> bool {
        let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) else {
            return true;
        };

        first.from == start
            && last.to == start
            && self.steps.iter().tuple_windows().all(|(a, b)| a.to == b.from)
            && self.steps.iter().all(|s| {
                let edge = graph.edge(s.edge);
                (edge.u, edge.v) == (s.from, s.to) || (edge.v, edge.u) == (s.from, s.to)
            })
    }
}

pub struct EulerTour<'a> {
    graph: &'a mut TourGraph,
    priorities: Vec<Priority>,
}

impl<'a> EulerTour<'a> {
    pub fn new(graph: &'a mut TourGraph, order: &TieBreakOrder) -> Self {
        let priorities = graph
            .edges()
            .map(|(_, edge)| order.priority_of(edge.label))
            .collect();
        Self { graph, priorities }
    }

    /// First untraversed edge of maximum priority at `u`
    fn next_edge(&self, u: Node) -> Option<TourEdge> {
        self.graph
            .tour_edges_of(u)
            .iter()
            .filter(|e| !self.graph.is_traversed(e.edge))
            .min_by_key(|e| Reverse(self.priorities[e.edge]))
            .copied()
    }

    /// Walks the circuit starting and ending at `start`. Fails if some edge cannot be
    /// reached from `start`, which requires the graph to be disconnected.
    pub fn run(self, start: Node) -> Result<Route> {
        self.graph.reset_traversal();

        let mut steps = Vec::with_capacity(self.graph.number_of_edges() as usize);

        if start < self.graph.number_of_nodes() {
            let mut stack: Vec<(Node, Option<Step>)> = vec![(start, None)];

            while let Some(&(u, _)) = stack.last() {
                if let Some(TourEdge { to, edge }) = self.next_edge(u) {
                    self.graph.mark_traversed(edge);
                    trace!("Traverse edge {edge}: {u} -> {to}");
                    stack.push((to, Some(Step { from: u, to, edge })));
                } else if let Some((_, Some(step))) = stack.pop() {
                    steps.push(step);
                }
            }
        }

        let untraversed = self.graph.number_of_untraversed();
        if untraversed > 0 {
            return Err(PostmanError::Disconnected { start, untraversed });
        }

        steps.reverse();
        debug!("Eulerian circuit from {start} has {} steps", steps.len());

        Ok(Route { steps })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::exact::OddVertexMatcher;
    use rand::{Rng, SeedableRng};

    fn graph_from(edges: &[(EdgeName, Node, Node, Cost)]) -> TourGraph {
        TourGraph::from_records(edges.iter().map(|&e| EdgeRecord::from(e)), Limits::default())
            .unwrap()
    }

    fn names(route: &Route, graph: &TourGraph, order: &TieBreakOrder) -> Vec<EdgeName> {
        route.labels(graph).map(|l| order.render(l)).collect()
    }

    #[test]
    fn triangle() {
        let mut graph = graph_from(&[(0, 0, 1, 1), (1, 1, 2, 1), (2, 2, 0, 1)]);
        let order = TieBreakOrder::default();
        let route = EulerTour::new(&mut graph, &order).run(0).unwrap();

        assert_eq!(names(&route, &graph, &order), [0, 1, 2]);
        assert_eq!(
            route.steps(),
            [
                Step { from: 0, to: 1, edge: 0 },
                Step { from: 1, to: 2, edge: 1 },
                Step { from: 2, to: 0, edge: 2 }
            ]
        );
        assert!(route.is_closed_walk(&graph, 0));
        assert_eq!(route.cost(&graph), Some(3));
    }

    #[test]
    fn priority_selects_direction() {
        let mut graph = graph_from(&[(0, 0, 1, 1), (1, 1, 2, 1), (2, 2, 0, 1)]);
        let order = TieBreakOrder::new([2, 1, 0], 3);
        let route = EulerTour::new(&mut graph, &order).run(0).unwrap();

        assert_eq!(names(&route, &graph, &order), [2, 1, 0]);
        assert!(route.is_closed_walk(&graph, 0));
    }

    #[test]
    fn equal_priority_takes_first_inserted() {
        let mut graph = graph_from(&[(10, 0, 1, 1), (11, 1, 2, 1), (12, 2, 0, 1)]);
        let order = TieBreakOrder::unordered(3);
        let route = EulerTour::new(&mut graph, &order).run(0).unwrap();

        assert_eq!(names(&route, &graph, &order), [10, 11, 12]);
    }

    #[test]
    fn splices_sub_circuits() {
        // two triangles sharing node 0: {0, 1, 2} and {0, 3, 4}
        let mut graph = graph_from(&[
            (0, 1, 0, 1),
            (1, 1, 2, 1),
            (2, 2, 0, 1),
            (3, 0, 3, 1),
            (4, 3, 4, 1),
            (5, 4, 0, 1),
        ]);

        // starting at 1 and preferring edge 2 at node 0 closes the first triangle early;
        // the second triangle has to be spliced in at node 0
        let order = TieBreakOrder::new([0, 2, 1, 3, 4, 5], 9);
        let route = EulerTour::new(&mut graph, &order).run(1).unwrap();

        assert_eq!(names(&route, &graph, &order), [0, 3, 4, 5, 2, 1]);
        assert!(route.is_closed_walk(&graph, 1));
        assert_eq!(route.steps().first().map(|s| (s.from, s.to)), Some((1, 0)));
        assert_eq!(route.steps().last().map(|s| (s.from, s.to)), Some((2, 1)));
    }

    #[test]
    fn duplicates_are_deferred() {
        let mut graph = graph_from(&[(0, 0, 1, 2), (1, 1, 2, 3)]);
        graph.add_duplicate(0, 1, 2).unwrap();
        graph.add_duplicate(1, 2, 3).unwrap();

        let order = TieBreakOrder::default();
        let route = EulerTour::new(&mut graph, &order).run(0).unwrap();

        let labels = route.labels(&graph).collect_vec();
        assert_eq!(
            labels,
            [
                EdgeLabel::Named(0),
                EdgeLabel::Named(1),
                EdgeLabel::Duplicate,
                EdgeLabel::Duplicate
            ]
        );
        assert_eq!(names(&route, &graph, &order), [0, 1, 3, 3]);
        assert_eq!(route.cost(&graph), Some(10));
        assert!(route.is_closed_walk(&graph, 0));
    }

    #[test]
    fn self_loop_is_walked_once() {
        let mut graph = graph_from(&[(0, 0, 1, 1), (1, 1, 2, 1), (2, 2, 0, 1), (4, 1, 1, 7)]);
        let order = TieBreakOrder::default();
        let route = EulerTour::new(&mut graph, &order).run(0).unwrap();

        assert_eq!(names(&route, &graph, &order), [0, 4, 1, 2]);
        assert_eq!(route.steps()[1], Step { from: 1, to: 1, edge: 3 });
        assert!(route.is_closed_walk(&graph, 0));
        assert_eq!(route.cost(&graph), Some(10));
    }

    #[test]
    fn empty_graph() {
        let mut graph = TourGraph::new(Limits::default());
        let route = EulerTour::new(&mut graph, &TieBreakOrder::default())
            .run(0)
            .unwrap();
        assert!(route.is_empty());
        assert!(route.is_closed_walk(&graph, 0));
    }

    #[test]
    fn unreachable_edges() {
        // two disjoint triangles
        let mut graph = graph_from(&[
            (0, 0, 1, 1),
            (1, 1, 2, 1),
            (2, 2, 0, 1),
            (3, 3, 4, 1),
            (4, 4, 5, 1),
            (5, 5, 3, 1),
        ]);
        let err = EulerTour::new(&mut graph, &TieBreakOrder::default())
            .run(0)
            .unwrap_err();
        assert!(matches!(
            err,
            PostmanError::Disconnected {
                start: 0,
                untraversed: 3
            }
        ));

        // start beyond the last node of a non-empty graph
        let err = EulerTour::new(&mut graph, &TieBreakOrder::default())
            .run(7)
            .unwrap_err();
        assert!(matches!(err, PostmanError::Disconnected { untraversed: 6, .. }));
    }

    #[test]
    fn rerun_is_deterministic() {
        let mut graph = graph_from(&[(0, 0, 1, 1), (1, 1, 2, 1), (2, 2, 0, 1), (3, 0, 2, 4), (4, 2, 0, 4)]);
        let order = TieBreakOrder::default();
        let first = EulerTour::new(&mut graph, &order).run(2).unwrap();
        let second = EulerTour::new(&mut graph, &order).run(2).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn random_circuits() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(31337);
        for n in 1..30 {
            let records = random_connected_records(&mut rng, n, 0.2, 10);
            let mut graph = TourGraph::from_records(&records, Limits::default()).unwrap();
            graph.include_node(0).unwrap();

            let paths = ShortestPaths::floyd_warshall(&graph);
            let Ok(matcher) = OddVertexMatcher::new(graph.odd_vertices(), &paths, graph.limits())
            else {
                continue;
            };
            let matching = matcher.solve().unwrap();
            let hops = augment(&mut graph, &paths, &matching).unwrap();

            let start = rng.gen_range(0..graph.number_of_nodes());
            let order = TieBreakOrder::default();
            let route = EulerTour::new(&mut graph, &order).run(start).unwrap();

            assert_eq!(route.len(), records.len() + hops);
            assert!(route.is_closed_walk(&graph, start));
            assert_eq!(
                route.cost(&graph),
                Some(graph.original_cost() + matching.cost)
            );

            let used = route.steps().iter().map(|s| s.edge).sorted().collect_vec();
            assert_eq!(used, (0..graph.number_of_edges() as usize).collect_vec());
        }
    }
}
