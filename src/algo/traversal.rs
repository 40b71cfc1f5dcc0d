/*!
Graph traversal cursors.

Both breadth-first and depth-first search share one generic iterator,
[`TraversalSearch`], parameterized by the frontier data structure: a queue
yields BFS, a stack yields DFS. The cursor owns its visited set and frontier;
it only reads the graph.

A vertex is marked visited the moment it is discovered (pushed), so every
vertex enters the frontier at most once and is yielded at most once.
*/

use std::{collections::VecDeque, iter::FusedIterator};

use fxhash::FxHashSet;

use super::*;

/// Abstraction for the traversal frontier data structure.
///
/// The implementation determines the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait VertexSequencer {
    /// Creates a new sequencer initialized with a single vertex.
    fn init(u: Vertex) -> Self;

    /// Pushes a vertex into the frontier.
    fn push(&mut self, u: Vertex);

    /// Removes and returns the next vertex from the frontier.
    fn pop(&mut self) -> Option<Vertex>;

    /// Returns the number of vertices currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl VertexSequencer for VecDeque<Vertex> {
    fn init(u: Vertex) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Vertex) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Vertex> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl VertexSequencer for Vec<Vertex> {
    fn init(u: Vertex) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Vertex) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<Vertex> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal cursor supporting BFS and DFS variants.
///
/// The cursor is a one-shot forward sequence: it implements [`Iterator`], and
/// additionally exposes the explicit [`has_next`](TraversalSearch::has_next) /
/// [`try_next`](TraversalSearch::try_next) pair where consuming an exhausted
/// cursor is a distinct failure ([`GraphError::Exhausted`]) rather than a
/// sentinel.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: VertexSequencer,
{
    graph: &'a G,
    visited: FxHashSet<Vertex>,
    sequencer: S,
}

/// A BFS cursor, visiting vertices in breadth-first order from a start vertex.
/// Siblings at the same depth are visited in discovery order.
pub type Bfs<'a, G> = TraversalSearch<'a, G, VecDeque<Vertex>>;

/// A DFS cursor, visiting vertices in depth-first order from a start vertex.
/// Siblings pushed together are visited in reverse of insertion order.
pub type Dfs<'a, G> = TraversalSearch<'a, G, Vec<Vertex>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: VertexSequencer,
{
    /// Creates a new cursor over `graph` starting at `start`.
    ///
    /// The start vertex is yielded first, even if it has no outgoing edges or
    /// is unknown to the graph.
    pub fn new(graph: &'a G, start: Vertex) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(start.clone());
        Self {
            graph,
            visited,
            sequencer: S::init(start),
        }
    }

    /// Reports whether a next vertex is available, without consuming it.
    pub fn has_next(&self) -> bool {
        self.sequencer.cardinality() > 0
    }

    /// Consumes and returns the next vertex in traversal order.
    ///
    /// Fails with [`GraphError::Exhausted`] if nothing remains.
    pub fn try_next(&mut self) -> Result<Vertex, GraphError> {
        self.next().ok_or(GraphError::Exhausted)
    }

    /// Tries to restart the search at a yet unvisited vertex and returns
    /// *true* iff successful. Requires that the search came to a hold
    /// earlier, i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        let vertex = self
            .graph
            .vertices()
            .find(|u| !self.visited.contains(u))
            .cloned();
        match vertex {
            None => false,
            Some(x) => {
                self.visited.insert(x.clone());
                self.sequencer.push(x);
                true
            }
        }
    }

    /// Excludes a vertex from the search. It is treated as if it was already
    /// visited, i.e. no edges to or from that vertex are taken.
    ///
    /// # Warning
    /// Calling this method has no effect if the vertex is already on the
    /// frontier. It is therefore highly recommended to call it directly after
    /// the constructor.
    pub fn exclude_vertex(&mut self, u: Vertex) {
        self.visited.insert(u);
    }

    /// Excludes multiple vertices from the traversal. Functionally equivalent
    /// to repeatedly calling [`TraversalSearch::exclude_vertex`].
    pub fn exclude_vertices<I>(&mut self, us: I)
    where
        I: IntoIterator<Item = Vertex>,
    {
        for u in us {
            self.exclude_vertex(u);
        }
    }

    /// Builder form of [`TraversalSearch::exclude_vertices`].
    pub fn with_vertices_excluded<I>(mut self, us: I) -> Self
    where
        I: IntoIterator<Item = Vertex>,
    {
        self.exclude_vertices(us);
        self
    }
}

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: VertexSequencer,
{
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        for v in self.graph.connected(&u) {
            if !self.visited.contains(v) {
                self.visited.insert(v.clone());
                self.sequencer.push(v.clone());
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(
                self.graph
                    .number_of_vertices()
                    .saturating_sub(self.visited.len())
                    + self.sequencer.cardinality(),
            ),
        )
    }
}

impl<G, S> FusedIterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: VertexSequencer,
{
}

/// Provides convenient traversal methods directly on graphs.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns a cursor that traverses vertices reachable from `start` in
    /// **breadth-first search (BFS) order**.
    fn bfs(&self, start: Vertex) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Returns a cursor that traverses vertices reachable from `start` in
    /// **depth-first search (DFS) order**.
    fn dfs(&self, start: Vertex) -> Dfs<'_, Self> {
        Dfs::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
