use super::*;

pub trait EdgeOps {
    fn is_loop(&self) -> bool;
    fn reverse(&self) -> Self;
}

/// Undirected pair of endpoints without any payload
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Edge(pub Node, pub Node);

/// One line of the input: a named, weighted, undirected edge. Names need not be unique.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct EdgeRecord {
    pub name: EdgeName,
    pub u: Node,
    pub v: Node,
    pub cost: Cost,
}

/// Label reported for a traversed edge. Edges inserted by the augmentation are not
/// attributed to the original edge they run parallel to.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum EdgeLabel {
    Named(EdgeName),
    Duplicate,
}

impl EdgeLabel {
    pub fn is_duplicate(&self) -> bool {
        *self == EdgeLabel::Duplicate
    }

    pub fn name(&self) -> Option<EdgeName> {
        match *self {
            EdgeLabel::Named(name) => Some(name),
            EdgeLabel::Duplicate => None,
        }
    }
}

impl EdgeRecord {
    pub fn new(name: EdgeName, u: Node, v: Node, cost: Cost) -> Self {
        Self { name, u, v, cost }
    }

    pub fn endpoints(&self) -> Edge {
        Edge(self.u, self.v)
    }

    pub fn label(&self) -> EdgeLabel {
        EdgeLabel::Named(self.name)
    }
}

impl EdgeOps for Edge {
    fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&EdgeRecord> for Edge {
    fn from(value: &EdgeRecord) -> Self {
        value.endpoints()
    }
}

impl From<(EdgeName, Node, Node, Cost)> for EdgeRecord {
    fn from(value: (EdgeName, Node, Node, Cost)) -> Self {
        EdgeRecord::new(value.0, value.1, value.2, value.3)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn edge_ops() {
        let e = Edge(3, 1);
        assert_eq!(e.reverse(), Edge(1, 3));
        assert!(!e.is_loop());
        assert!(Edge(2, 2).is_loop());
    }

    #[test]
    fn record_label() {
        let rec: EdgeRecord = (7, 0, 4, 12).into();
        assert_eq!(rec.label(), EdgeLabel::Named(7));
        assert_eq!(rec.label().name(), Some(7));
        assert_eq!(Edge::from(&rec), Edge(0, 4));
        assert!(EdgeLabel::Duplicate.is_duplicate());
        assert_eq!(EdgeLabel::Duplicate.name(), None);
    }
}
