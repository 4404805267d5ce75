use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::solver::Instance;

/// Writes an instance in the format understood by [`super::InstanceReader`]
pub trait InstanceWriter {
    fn try_write_instance<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
    fn try_write_instance_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error>;
}

impl InstanceWriter for Instance {
    fn try_write_instance<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        writeln!(writer, "{} {}", self.number_of_nodes, self.edges.len())?;

        for edge in &self.edges {
            writeln!(writer, "{} {} {} {}", edge.name, edge.u, edge.v, edge.cost)?;
        }

        writeln!(writer, "{}", self.start)?;
        writer.flush()
    }

    fn try_write_instance_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_instance(writer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::InstanceReader;
    use crate::testing::random_instance;
    use rand::SeedableRng;

    #[test]
    fn hard_coded() {
        let instance = Instance {
            number_of_nodes: 3,
            edges: vec![(4, 0, 1, 2).into(), (-1, 2, 1, 0).into()],
            start: 2,
        };

        let mut buffer: Vec<u8> = Vec::new();
        instance.try_write_instance(&mut buffer).expect("Failed to write");
        assert_eq!(String::from_utf8(buffer).unwrap(), "3 2\n4 0 1 2\n-1 2 1 0\n2\n");
    }

    #[test]
    fn transcribe() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(1234);
        for n in 1..40 {
            let org = random_instance(&mut rng, n, 0.2, 100);

            let mut buffer: Vec<u8> = Vec::new();
            org.try_write_instance(&mut buffer).expect("Failed to write");

            let read = Instance::try_read_instance(buffer.as_slice()).expect("Failed to read");
            assert_eq!(org, read);
        }
    }
}
