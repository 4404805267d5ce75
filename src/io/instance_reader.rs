//! Reader for instances given as whitespace separated integers:
//!
//! ```text
//! <number of nodes> <number of edges E>
//! <name> <u> <v> <cost>      (E times)
//! <start node>
//! ```
//!
//! Line breaks carry no meaning. The number of nodes is informational only; the node range
//! is derived from the edges and the start node.

use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
};

use crate::graph::{Cost, EdgeName, EdgeRecord, Node};
use crate::solver::Instance;

pub type Result<T> = std::io::Result<T>;

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

macro_rules! parse_next_value {
    ($tokens : expr, $name : expr) => {{
        let Some(token) = $tokens.next_token()? else {
            return Err(std::io::Error::new(
                ErrorKind::InvalidData,
                format!("Premature end of input when parsing {}.", $name),
            ));
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(std::io::Error::new(
                    ErrorKind::InvalidData,
                    format!(
                        "Invalid value {:?} in line {}. Cannot parse {}.",
                        token,
                        $tokens.line_number(),
                        $name
                    ),
                ));
            }
        }
    }};
}

pub trait InstanceReader: Sized {
    fn try_read_instance<R: BufRead>(reader: R) -> Result<Self>;
    fn try_read_instance_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

impl InstanceReader for Instance {
    fn try_read_instance<R: BufRead>(reader: R) -> Result<Self> {
        let mut tokens = TokenReader::new(reader);

        let number_of_nodes: u64 = parse_next_value!(tokens, "Header>Number of nodes");
        let number_of_edges: usize = parse_next_value!(tokens, "Header>Number of edges");

        let mut edges = Vec::with_capacity(number_of_edges.min(1 << 16));
        for i in 1..=number_of_edges {
            let name: EdgeName = parse_next_value!(tokens, format!("Edge {i}>Name"));
            let u: Node = parse_next_value!(tokens, format!("Edge {i}>First endpoint"));
            let v: Node = parse_next_value!(tokens, format!("Edge {i}>Second endpoint"));
            let cost: Cost = parse_next_value!(tokens, format!("Edge {i}>Cost"));
            edges.push(EdgeRecord::new(name, u, v, cost));
        }

        let start: Node = parse_next_value!(tokens, "Start node");

        let trailing = tokens.next_token()?;
        raise_error_unless!(
            trailing.is_none(),
            ErrorKind::InvalidData,
            format!(
                "Unexpected token {:?} in line {} after the start node",
                trailing.unwrap_or_default(),
                tokens.line_number()
            )
        );

        Ok(Instance {
            number_of_nodes,
            edges,
            start,
        })
    }

    fn try_read_instance_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_instance(buf_reader)
    }
}

/// Splits the input into whitespace separated tokens, keeping track of the current line
pub struct TokenReader<R> {
    lines: Lines<R>,
    pending: VecDeque<String>,
    line_number: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: VecDeque::new(),
            line_number: 0,
        }
    }

    /// Line of the most recently returned token (1-based)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            match self.lines.next() {
                None => return Ok(None),
                Some(line) => {
                    let line = line?;
                    self.line_number += 1;
                    self.pending
                        .extend(line.split_whitespace().map(String::from));
                }
            }
        }
    }
}
