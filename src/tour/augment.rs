use itertools::Itertools;
use log::{debug, trace};

use crate::errors::{PostmanError, Result};
use crate::exact::Matching;
use crate::graph::*;

/// Duplicates every hop of the recorded shortest path between each matched pair of odd nodes.
/// Both ends of a path flip parity while inner nodes gain two incidences; hence, once all
/// pairs are processed, every node has even degree.
///
/// Returns the number of duplicated hops.
pub fn augment(graph: &mut TourGraph, paths: &ShortestPaths, matching: &Matching) -> Result<usize> {
    let mut hops = 0;

    for &(u, v) in &matching.pairs {
        let path = paths.path(u, v).ok_or(PostmanError::Unreachable(u, v))?;
        trace!("Duplicating path {u} -> {v}: {path:?}");

        for (a, b) in path.into_iter().tuple_windows() {
            let cost = paths.distance(a, b).ok_or(PostmanError::Unreachable(a, b))?;
            graph.add_duplicate(a, b, cost)?;
            hops += 1;
        }
    }

    debug!(
        "Augmentation added {hops} duplicate edges for {} matched pairs",
        matching.len()
    );

    Ok(hops)
}
