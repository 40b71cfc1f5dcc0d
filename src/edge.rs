use std::fmt::{Debug, Display};

use crate::Vertex;

/// Edge weights are real-valued. The general graph representation accepts any
/// cost; the shortest-path engine additionally requires costs to be
/// non-negative (see [`Dijkstra`](crate::algo::Dijkstra)).
pub type Cost = f64;

/// Sentinel cost reported for vertices the shortest-path engine never reached.
pub const UNREACHED: Cost = -1.0;

/// A directed, weighted connection between two vertices.
///
/// An undirected edge is modelled as two directed edges with swapped endpoints
/// and equal cost. Note that `Edge` is only `PartialEq`: the `f64` cost rules
/// out `Eq`/`Hash`, so representations keep edges in sequence containers.
#[derive(Clone, PartialEq)]
pub struct Edge {
    source: Vertex,
    target: Vertex,
    cost: Cost,
}

impl Edge {
    /// Creates a directed edge from `source` to `target` with the given cost.
    pub fn new(source: Vertex, target: Vertex, cost: Cost) -> Self {
        Edge {
            source,
            target,
            cost,
        }
    }

    /// The vertex this edge starts from (its tail).
    pub fn source(&self) -> &Vertex {
        &self.source
    }

    /// The vertex this edge points to (its tip).
    pub fn target(&self) -> &Vertex {
        &self.target
    }

    /// The cost (weight) of this edge.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Returns the edge with its endpoints swapped, keeping the cost.
    pub fn reversed(&self) -> Self {
        Edge {
            source: self.target.clone(),
            target: self.source.clone(),
            cost: self.cost,
        }
    }

    /// Returns *true* if both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} -> {}, {})", self.source, self.target, self.cost)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(&str, &str, Cost)> for Edge {
    fn from(value: (&str, &str, Cost)) -> Self {
        Edge::new(value.0.into(), value.1.into(), value.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let edge = Edge::new("u".into(), "v".into(), 2.5);
        assert_eq!(edge.source().label(), "u");
        assert_eq!(edge.target().label(), "v");
        assert_eq!(edge.cost(), 2.5);
        assert!(!edge.is_loop());
    }

    #[test]
    fn reversing_swaps_endpoints() {
        let edge: Edge = ("u", "v", 1.0).into();
        let rev = edge.reversed();
        assert_eq!(rev.source(), edge.target());
        assert_eq!(rev.target(), edge.source());
        assert_eq!(rev.cost(), edge.cost());
        assert_eq!(rev.reversed(), edge);
    }

    #[test]
    fn loops() {
        assert!(Edge::from(("x", "x", 0.0)).is_loop());
        assert_eq!(format!("{}", Edge::from(("a", "b", 3.0))), "(a -> b, 3)");
    }
}
