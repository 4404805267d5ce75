use crate::graph::*;
use rand::Rng;

/// Generates a random connected instance on `n` nodes. A random spanning tree guarantees
/// connectivity; on top, each of the remaining `n(n-1)/2` node pairs receives an edge
/// independently with probability `p`. Edge names are consecutive from 0, costs are drawn
/// uniformly from `1..=max_cost`.
pub fn random_connected_records<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    p: f64,
    max_cost: Cost,
) -> Vec<EdgeRecord> {
    debug_assert!((0.0..=1.0).contains(&p));
    debug_assert!(max_cost > 0);

    let mut edges = Vec::new();

    for v in 1..n {
        let u = rng.gen_range(0..v);
        edges.push(Edge(u, v));
    }

    for u in 0..n {
        for v in u + 1..n {
            if rng.gen_bool(p) {
                edges.push(Edge(u, v));
            }
        }
    }

    edges
        .into_iter()
        .enumerate()
        .map(|(name, edge)| {
            let Edge(u, v) = if rng.gen_bool(0.5) { edge } else { edge.reverse() };
            EdgeRecord::new(name as EdgeName, u, v, rng.gen_range(1..=max_cost))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn generates_connected_graphs() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(1234);
        for n in 1..30 {
            let records = random_connected_records(&mut rng, n, 0.1, 9);
            assert!(records.len() >= n as usize - 1);
            assert!(records.iter().all(|r| r.u < n && r.v < n && !r.endpoints().is_loop()));
            assert!(records.iter().all(|r| (1..=9).contains(&r.cost)));

            let graph = TourGraph::from_records(&records, Limits::default()).unwrap();
            let paths = ShortestPaths::floyd_warshall(&graph);
            assert!(graph.vertices().all(|v| paths.distance(0, v).is_some()));
        }
    }
}
