use thiserror::Error;

use crate::Vertex;

/// Failures surfaced by graph construction and iteration.
///
/// Unreached vertices in shortest-path queries are *not* errors: they are
/// reported through sentinel values ([`UNREACHED`](crate::edge::UNREACHED)
/// cost, empty path). Likewise the heap treats insertion beyond capacity as a
/// silent no-op rather than a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A fixed-size representation rejected a vertex insertion beyond its
    /// declared maximum.
    #[error("graph capacity of {capacity} vertices exceeded")]
    CapacityExceeded { capacity: usize },

    /// An operation referenced a vertex that is not part of the graph.
    #[error("vertex {0} is not part of the graph")]
    MissingVertex(Vertex),

    /// An iteration (traversal cursor, component enumerator) was consumed
    /// with nothing remaining.
    #[error("iteration is exhausted")]
    Exhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GraphError::CapacityExceeded { capacity: 4 }.to_string(),
            "graph capacity of 4 vertices exceeded"
        );
        assert_eq!(
            GraphError::MissingVertex("a".into()).to_string(),
            "vertex a is not part of the graph"
        );
        assert_eq!(GraphError::Exhausted.to_string(), "iteration is exhausted");
    }
}
