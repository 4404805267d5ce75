use std::{io::BufWriter, path::PathBuf};

use ::log::{LevelFilter, info};
use postman::{log::build_logger_for_verbosity, prelude::*};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Computes a minimum-cost closed walk covering every edge (route inspection)")]
struct Opts {
    /// Instance to solve; read from stdin if omitted
    #[structopt(short, long)]
    instance: Option<PathBuf>,

    /// File to write the report to; written to stdout if omitted
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Edge names to prefer when leaving a node, highest priority first
    #[structopt(long, default_value = "0,1,3,2")]
    prefer: TieBreakOrder,

    /// Name printed for edges inserted to make all degrees even
    #[structopt(long, default_value = "3")]
    duplicate_label: EdgeName,

    /// Vertex ids must be below this value
    #[structopt(long, default_value = "50")]
    max_vertices: NumNodes,

    /// Maximum number of odd-degree vertices accepted by the matching
    #[structopt(long, default_value = "16")]
    max_odd_vertices: usize,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn load_instance(path: &Option<PathBuf>) -> anyhow::Result<Instance> {
    if let Some(path) = path {
        Ok(Instance::try_read_instance_file(path)?)
    } else {
        let stdin = std::io::stdin().lock();
        Ok(Instance::try_read_instance(stdin)?)
    }
}

fn write_report(solution: &Solution, path: &Option<PathBuf>) -> anyhow::Result<()> {
    if let Some(path) = path {
        solution.try_write_report_file(path)?;
    } else {
        let writer = BufWriter::new(std::io::stdout().lock());
        solution.try_write_report(writer)?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let instance = load_instance(&opts.instance)?;
    info!(
        "Loaded instance with {} edges, start node {}",
        instance.edges.len(),
        instance.start
    );

    let order = opts.prefer.with_duplicate_label(opts.duplicate_label);
    let limits = Limits::new(opts.max_vertices, opts.max_odd_vertices);

    let solution = RouteInspection::new(&instance)
        .with_order(order)
        .with_limits(limits)
        .solve()?;

    write_report(&solution, &opts.output)?;

    Ok(())
}
