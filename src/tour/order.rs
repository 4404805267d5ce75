//! Canonicalization of the Eulerian circuit.
//!
//! Many circuits realize the optimal cost. The tour constructor always leaves a node via
//! the untraversed edge of highest [`Priority`]; the priorities are derived from a
//! [`TieBreakOrder`] that ranks edge names explicitly:
//!
//!  - names listed in `preferred` rank by position, the first one highest,
//!  - all other names rank below every listed name (and are equal among each other),
//!  - duplicated edges rank below every input edge.
//!
//! Among edges of equal priority the one inserted first wins.

use std::str::FromStr;

use itertools::Itertools;

use crate::graph::*;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Priority(pub u32);

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TieBreakOrder {
    preferred: Vec<EdgeName>,
    duplicate_label: EdgeName,
}

impl TieBreakOrder {
    /// Order used when nothing else is configured: prefers edges 0, 1, 3, 2 and reports
    /// duplicated edges as 3.
    pub const DEFAULT_PREFERRED: [EdgeName; 4] = [0, 1, 3, 2];
    pub const DEFAULT_DUPLICATE_LABEL: EdgeName = 3;

    /// Names appearing more than once keep their first position.
    pub fn new(preferred: impl IntoIterator<Item = EdgeName>, duplicate_label: EdgeName) -> Self {
        Self {
            preferred: preferred.into_iter().unique().collect(),
            duplicate_label,
        }
    }

    /// Ranks all input edges equally; only duplicates are deferred
    pub fn unordered(duplicate_label: EdgeName) -> Self {
        Self::new([], duplicate_label)
    }

    pub fn preferred(&self) -> &[EdgeName] {
        &self.preferred
    }

    pub fn duplicate_label(&self) -> EdgeName {
        self.duplicate_label
    }

    pub fn with_duplicate_label(mut self, duplicate_label: EdgeName) -> Self {
        self.duplicate_label = duplicate_label;
        self
    }

    pub fn priority_of(&self, label: EdgeLabel) -> Priority {
        match label {
            EdgeLabel::Duplicate => Priority(0),
            EdgeLabel::Named(name) => match self.preferred.iter().position(|&p| p == name) {
                Some(pos) => Priority((self.preferred.len() - pos) as u32 + 1),
                None => Priority(1),
            },
        }
    }

    /// Name printed for an edge in the route
    pub fn render(&self, label: EdgeLabel) -> EdgeName {
        label.name().unwrap_or(self.duplicate_label)
    }
}

impl Default for TieBreakOrder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFERRED, Self::DEFAULT_DUPLICATE_LABEL)
    }
}

/// Parses a comma separated list of names, e.g. `"0,1,3,2"`; the duplicate label is the default one.
impl FromStr for TieBreakOrder {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let preferred: Vec<EdgeName> = s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::parse)
            .collect::<Result<_, _>>()?;
        Ok(Self::new(preferred, Self::DEFAULT_DUPLICATE_LABEL))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_order() {
        let order = TieBreakOrder::default();
        let p = |name| order.priority_of(EdgeLabel::Named(name));

        assert!(p(0) > p(1));
        assert!(p(1) > p(3));
        assert!(p(3) > p(2));
        assert!(p(2) > p(17));
        assert_eq!(p(17), p(-4));
        assert!(p(-4) > order.priority_of(EdgeLabel::Duplicate));
    }

    #[test]
    fn duplicates_rank_lowest() {
        for order in [
            TieBreakOrder::default(),
            TieBreakOrder::unordered(9),
            TieBreakOrder::new([5, 6], 0),
        ] {
            let lowest = order.priority_of(EdgeLabel::Duplicate);
            for name in -3..10 {
                assert!(order.priority_of(EdgeLabel::Named(name)) > lowest);
            }
        }
    }

    #[test]
    fn render() {
        let order = TieBreakOrder::default();
        assert_eq!(order.render(EdgeLabel::Named(7)), 7);
        assert_eq!(order.render(EdgeLabel::Duplicate), 3);
        assert_eq!(order.with_duplicate_label(-1).render(EdgeLabel::Duplicate), -1);
    }

    #[test]
    fn parse() {
        let order: TieBreakOrder = " 4, 2,4 ,-1".parse().unwrap();
        assert_eq!(order.preferred(), [4, 2, -1]);
        assert_eq!(order.duplicate_label(), TieBreakOrder::DEFAULT_DUPLICATE_LABEL);

        let empty: TieBreakOrder = "".parse().unwrap();
        assert!(empty.preferred().is_empty());

        assert!("1,x".parse::<TieBreakOrder>().is_err());
    }
}
