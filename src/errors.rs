use std::error::Error;

use thiserror::Error;

use crate::graph::{Cost, Node, NumNodes};

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> std::result::Result<(), E>;
}

#[derive(Debug, Error)]
pub enum PostmanError {
    #[error("vertex {vertex} out of range; at most {max_vertices} vertices (ids 0..{max_vertices}) are supported")]
    VertexOutOfRange { vertex: Node, max_vertices: NumNodes },

    #[error("{count} odd-degree vertices exceed the matching capacity of {capacity}")]
    TooManyOddVertices { count: usize, capacity: usize },

    #[error("cannot perfectly match an odd number ({0}) of vertices")]
    UnevenOddVertexCount(usize),

    #[error("vertices {0} and {1} are not connected")]
    Unreachable(Node, Node),

    #[error("graph is disconnected; {untraversed} edge(s) cannot be reached from start vertex {start}")]
    Disconnected { start: Node, untraversed: usize },

    #[error("vertex {vertex} has odd degree {degree} after augmentation")]
    OddDegree { vertex: Node, degree: usize },

    #[error("total cost exceeds {}", Cost::MAX)]
    CostOverflow,

    #[error("invalid limits: {0}")]
    InvalidLimits(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PostmanError>;
