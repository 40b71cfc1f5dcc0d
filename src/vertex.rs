/*!
# Vertex Representation

Vertices are identified by an immutable string label. Two vertices with equal
labels are interchangeable everywhere in this crate: equality, ordering and
hashing all go through the label.

Labels are stored behind an [`Arc<str>`] so that vertices can be cloned freely
by traversals and shortest-path bookkeeping without copying the label itself.
*/

use std::{
    fmt::{Debug, Display},
    sync::Arc,
};

/// A labelled node identity in a graph.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex(Arc<str>);

impl Vertex {
    /// Creates a vertex from its label.
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Vertex(label.into())
    }

    /// Returns the label identifying this vertex.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vertex({})", self.0)
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Vertex::new(label)
    }
}

impl From<String> for Vertex {
    fn from(label: String) -> Self {
        Vertex::new(label)
    }
}
