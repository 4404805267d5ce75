use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use itertools::Itertools;

use crate::solver::Solution;

/// Prints the total cost and the route, e.g.
///
/// ```text
/// Cost: 10
/// Route: 0, 1, 3, 3
/// ```
///
/// An empty route is printed as `Route:` without any trailing whitespace.
pub trait ReportWriter {
    fn try_write_report<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
    fn try_write_report_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error>;
}

impl ReportWriter for Solution {
    fn try_write_report<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        writeln!(writer, "Cost: {}", self.cost)?;
        writeln!(
            writer,
            "Route:{}",
            self.labels.iter().map(|l| format!(" {l}")).join(",")
        )?;
        writer.flush()
    }

    fn try_write_report_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_report(writer)
    }
}
