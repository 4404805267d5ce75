//! Minimum-weight perfect matching of the odd-degree nodes via dynamic programming over subsets.
//!
//! The odd nodes form a complete graph weighted by shortest-path distance. A subset of them
//! is encoded as a bitmask over their positions in the odd-vertex list. To match a subset,
//! its lowest member (the pivot) is paired with every other member in increasing order and
//! the remainder is solved recursively. Ties between partners of equal total cost are
//! resolved in favour of the lowest partner index, both while computing the optimum and
//! while reconstructing the pairs.

use fxhash::FxHashMap;
use itertools::Itertools;
use log::{debug, info, trace};

use crate::errors::{PostmanError, Result};
use crate::graph::*;

pub type Mask = u32;

/// Perfect matching of the odd-degree nodes; pairs are listed in discovery order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Matching {
    pub cost: Cost,
    pub pairs: Vec<(Node, Node)>,
}

impl Matching {
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

pub struct OddVertexMatcher<'a> {
    odd_vertices: Vec<Node>,
    paths: &'a ShortestPaths,
    /// `None` marks a subset without any finite perfect matching
    memo: FxHashMap<Mask, Option<Cost>>,
    /// Set once a candidate sum did not fit into [`Cost`] and was discarded
    overflowed: bool,
}

impl<'a> OddVertexMatcher<'a> {
    /// Validates the odd-vertex set against the capacity before any table is allocated.
    pub fn new(odd_vertices: Vec<Node>, paths: &'a ShortestPaths, limits: Limits) -> Result<Self> {
        let capacity = limits.max_odd_vertices.min(Limits::ODD_VERTICES_CEILING);
        if odd_vertices.len() > capacity {
            return Err(PostmanError::TooManyOddVertices {
                count: odd_vertices.len(),
                capacity,
            });
        }

        if odd_vertices.len() % 2 == 1 {
            return Err(PostmanError::UnevenOddVertexCount(odd_vertices.len()));
        }

        Ok(Self {
            odd_vertices,
            paths,
            memo: FxHashMap::default(),
            overflowed: false,
        })
    }

    pub fn odd_vertices(&self) -> &[Node] {
        &self.odd_vertices
    }

    /// Mask containing all odd nodes
    pub fn full_mask(&self) -> Mask {
        ((1u64 << self.odd_vertices.len()) - 1) as Mask
    }

    /// Number of memoized subsets
    pub fn number_of_states(&self) -> usize {
        self.memo.len()
    }

    fn pair_distance(&self, pivot: usize, partner: usize) -> Option<Cost> {
        self.paths
            .distance(self.odd_vertices[pivot], self.odd_vertices[partner])
    }

    /// Cost of a minimum perfect matching of the subset `mask`, or `None` if every
    /// perfect matching of the subset contains an unreachable pair or exceeds [`Cost`].
    pub fn min_cost(&mut self, mask: Mask) -> Option<Cost> {
        if mask == 0 {
            return Some(0);
        }

        if let Some(&known) = self.memo.get(&mask) {
            return known;
        }

        let pivot = mask.trailing_zeros() as usize;
        let mut best: Option<Cost> = None;

        for partner in pivot + 1..self.odd_vertices.len() {
            if mask & (1 << partner) == 0 {
                continue;
            }

            let Some(distance) = self.pair_distance(pivot, partner) else {
                continue;
            };

            let remainder = mask ^ (1 << pivot) ^ (1 << partner);
            let Some(rest) = self.min_cost(remainder) else {
                continue;
            };

            let Some(candidate) = distance.checked_add(rest) else {
                self.overflowed = true;
                continue;
            };

            if best.is_none_or(|b| candidate < b) {
                best = Some(candidate);
            }
        }

        self.memo.insert(mask, best);
        best
    }

    /// Computes the optimal matching of all odd nodes and reconstructs its pairs.
    pub fn solve(mut self) -> Result<Matching> {
        if self.odd_vertices.is_empty() {
            debug!("No odd-degree vertices; nothing to match");
            return Ok(Matching::default());
        }

        let full = self.full_mask();
        let Some(cost) = self.min_cost(full) else {
            return Err(if self.overflowed {
                PostmanError::CostOverflow
            } else {
                self.unreachable_pair()
            });
        };

        let mut pairs = Vec::with_capacity(self.odd_vertices.len() / 2);
        let mut mask = full;
        while mask != 0 {
            let (partner, remainder) = self
                .optimal_partner(mask)
                .expect("memoized optimum must be reproducible");

            let pivot = mask.trailing_zeros() as usize;
            let pair = (self.odd_vertices[pivot], self.odd_vertices[partner]);
            trace!("Matched pair {:?}", pair);
            pairs.push(pair);
            mask = remainder;
        }

        info!(
            "Matched {} odd vertices into {} pairs with cost {cost} ({} subsets evaluated)",
            self.odd_vertices.len(),
            pairs.len(),
            self.number_of_states()
        );

        Ok(Matching { cost, pairs })
    }

    /// Scans the partners of the pivot of `mask` in the same order as [`Self::min_cost`]
    /// and returns the first one achieving the memoized optimum, together with the remaining subset.
    fn optimal_partner(&mut self, mask: Mask) -> Option<(usize, Mask)> {
        let target = self.min_cost(mask)?;
        let pivot = mask.trailing_zeros() as usize;

        for partner in pivot + 1..self.odd_vertices.len() {
            if mask & (1 << partner) == 0 {
                continue;
            }

            let remainder = mask ^ (1 << pivot) ^ (1 << partner);
            let Some(distance) = self.pair_distance(pivot, partner) else {
                continue;
            };

            let candidate = self
                .min_cost(remainder)
                .and_then(|rest| distance.checked_add(rest));
            if candidate == Some(target) {
                return Some((partner, remainder));
            }
        }

        None
    }

    fn unreachable_pair(&self) -> PostmanError {
        let (u, v) = self
            .odd_vertices
            .iter()
            .copied()
            .tuple_combinations()
            .find(|&(u, v)| self.paths.distance(u, v).is_none())
            .unwrap_or((self.odd_vertices[0], self.odd_vertices[0]));
        PostmanError::Unreachable(u, v)
    }
}
