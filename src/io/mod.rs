pub mod instance_reader;
pub use instance_reader::{InstanceReader, TokenReader};
pub mod instance_writer;
pub use instance_writer::InstanceWriter;

pub mod report_writer;
pub use report_writer::ReportWriter;
