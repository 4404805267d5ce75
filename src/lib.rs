pub mod errors;
pub mod exact;
pub mod graph;
pub mod io;
pub mod log;
pub mod solver;
pub mod tour;

pub mod prelude {
    pub use super::errors::{InvariantCheck, PostmanError};
    pub use super::exact::*;
    pub use super::graph::*;
    pub use super::io::*;
    pub use super::solver::*;
    pub use super::tour::*;
}

#[cfg(test)]
mod testing;
