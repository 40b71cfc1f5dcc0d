use crate::{Cost, Edge, GraphError, Vertex};

/// Provides getters pertaining to the size of a graph.
pub trait GraphOrder {
    /// Returns the number of vertices of the graph.
    fn number_of_vertices(&self) -> usize;

    /// Returns the number of directed edges of the graph.
    fn number_of_edges(&self) -> usize;

    /// Returns *true* if the graph has no vertices (and thus no edges).
    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }
}

/// Getters for neighborhoods and edges.
///
/// Querying a vertex without recorded outgoing edges (or a vertex unknown to
/// the graph) yields an empty iterator, never an error.
pub trait AdjacencyList: GraphOrder {
    /// Returns an iterator over all vertices of the graph.
    /// Iteration order is implementation-defined.
    fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_;

    /// Returns an iterator over all directed edges of the graph.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_;

    /// Returns an iterator over the vertices reachable by one outgoing edge
    /// from `u`. Each neighbor appears once, even under parallel edges.
    fn connected(&self, u: &Vertex) -> impl Iterator<Item = &Vertex> + '_;

    /// Returns an iterator over the outgoing edges of `u`.
    fn connected_edges(&self, u: &Vertex) -> impl Iterator<Item = Edge> + '_;

    /// Returns *true* if `u` is a vertex of the graph.
    fn has_vertex(&self, u: &Vertex) -> bool {
        self.vertices().any(|v| v == u)
    }

    /// Returns the number of outgoing edges of `u`.
    fn out_degree_of(&self, u: &Vertex) -> usize {
        self.connected_edges(u).count()
    }

    /// Returns *true* if at least one edge `(u, v)` exists in the graph.
    fn has_edge(&self, u: &Vertex, v: &Vertex) -> bool {
        self.connected(u).any(|w| w == v)
    }
}

/// Provides functions to insert vertices and edges.
pub trait GraphMut {
    /// Adds a vertex to the graph. Adding a vertex twice is a no-op.
    ///
    /// Fixed-capacity representations reject insertion beyond their declared
    /// maximum with [`GraphError::CapacityExceeded`].
    fn try_add_vertex(&mut self, vertex: Vertex) -> Result<(), GraphError>;

    /// Adds all vertices in the collection.
    fn add_vertices<I>(&mut self, vertices: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = Vertex>,
    {
        for vertex in vertices {
            self.try_add_vertex(vertex)?;
        }
        Ok(())
    }

    /// Adds a directed edge to the graph.
    ///
    /// Whether the endpoints are registered as vertices is representation
    /// specific: the hash-based graph assumes they are already known, the
    /// matrix graph registers them (and may run out of capacity doing so).
    fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError>;

    /// Convenience form of [`GraphMut::add_edge`] that always registers both
    /// endpoints as vertices before inserting the edge.
    fn add_weighted_edge(
        &mut self,
        source: Vertex,
        target: Vertex,
        cost: Cost,
    ) -> Result<(), GraphError> {
        self.add_vertices([source.clone(), target.clone()])?;
        self.add_edge(Edge::new(source, target, cost))
    }
}

/// Trait for creating a new empty graph.
pub trait GraphNew {
    /// Creates an empty graph sized for `n` vertices.
    ///
    /// For the hash-based representation `n` is a reservation hint; for the
    /// matrix representation it is a hard capacity.
    fn with_capacity(n: usize) -> Self;
}

/// A super trait for creating a graph from scratch from a set of edges.
pub trait GraphFromEdges: Sized {
    /// Creates a graph sized for `n` vertices from an iterator over edges,
    /// registering every endpoint as a vertex.
    fn from_edges<I, E>(n: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>;
}

impl<G: GraphNew + GraphMut> GraphFromEdges for G {
    fn from_edges<I, E>(n: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::with_capacity(n);
        for edge in edges {
            let edge = edge.into();
            graph.add_weighted_edge(
                edge.source().clone(),
                edge.target().clone(),
                edge.cost(),
            )?;
        }
        Ok(graph)
    }
}
