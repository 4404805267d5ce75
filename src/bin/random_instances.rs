use std::path::PathBuf;

use ::log::{LevelFilter, info};
use postman::{log::build_logger_for_verbosity, prelude::*};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Writes random connected route inspection instances")]
struct Opt {
    /// Number of nodes
    #[structopt(short, long, default_value = "10")]
    nodes: NumNodes,

    /// Probability of each additional edge beyond a random spanning tree
    #[structopt(short, long, default_value = "0.2")]
    probability: f64,

    /// Edge costs are drawn from 1..=max_cost
    #[structopt(short = "c", long, default_value = "20")]
    max_cost: Cost,

    #[structopt(short, long, default_value = "1")]
    repeats: u32,

    #[structopt(short, long, default_value = "1234")]
    seed: u64,

    /// Directory to write `n<nodes>_m<edges>_<i>.in` files to; instances go to stdout if omitted
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Only keep instances whose odd-degree vertex count fits the default matching capacity
    #[structopt(short = "f", long)]
    feasible_only: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opt.verbose);

    anyhow::ensure!(
        (0.0..=1.0).contains(&opt.probability),
        "probability must be within [0, 1]"
    );
    anyhow::ensure!(opt.max_cost > 0, "max cost must be positive");
    anyhow::ensure!(opt.nodes > 0, "at least one node is required");

    let mut rng = Pcg64::seed_from_u64(opt.seed);
    let limits = Limits::default();

    let mut written = 0;
    while written < opt.repeats {
        let edges = random_connected_records(&mut rng, opt.nodes, opt.probability, opt.max_cost);
        let instance = Instance {
            number_of_nodes: opt.nodes as u64,
            edges,
            start: rng.gen_range(0..opt.nodes),
        };

        if opt.feasible_only {
            let graph = TourGraph::from_records(&instance.edges, limits)?;
            let odd = graph.odd_vertices().len();
            if odd > limits.max_odd_vertices {
                info!("Skip instance with {odd} odd-degree vertices");
                continue;
            }
        }

        if let Some(dir) = &opt.output {
            let filename = dir.join(format!(
                "n{:>03}_m{:>04}_{written:>03}.in",
                opt.nodes,
                instance.edges.len()
            ));
            instance.try_write_instance_file(&filename)?;
            println!("{}", filename.display());
        } else {
            instance.try_write_instance(std::io::stdout().lock())?;
        }

        written += 1;
    }

    Ok(())
}
