use super::{
    graph::*,
    io::{InstanceReader, ReportWriter},
    solver::{Instance, RouteInspection},
};
use rand::Rng;

/// Random connected instance on `n` nodes with a random start node
pub fn random_instance(rng: &mut impl Rng, n: NumNodes, p: f64, max_cost: Cost) -> Instance {
    let edges = random_connected_records(rng, n, p, max_cost);
    Instance {
        number_of_nodes: n as u64,
        edges,
        start: rng.gen_range(0..n.max(1)),
    }
}

/// Reads an instance from `input`, solves it with the default configuration and returns the report
pub fn solve_to_string(input: &str) -> String {
    let instance = Instance::try_read_instance(input.as_bytes()).expect("Failed to read");
    let solution = RouteInspection::new(&instance)
        .solve()
        .expect("Failed to solve");

    let mut buffer: Vec<u8> = Vec::new();
    solution
        .try_write_report(&mut buffer)
        .expect("Failed to write");
    String::from_utf8(buffer).unwrap()
}
