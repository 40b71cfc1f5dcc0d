use fxhash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use super::*;

/// Inline storage for outgoing arcs; most vertices in sparse graphs carry
/// only a handful of edges.
type ArcList = SmallVec<[Edge; 2]>;

/// An unbounded, hash-based directed graph.
///
/// Vertices live in a set of their own, so a vertex can exist without any
/// edges and an edge can be recorded before its endpoints are vertices:
/// [`GraphMut::add_edge`] deliberately does *not* register endpoints (the
/// edge-object form assumes they are already known), while
/// [`GraphMut::add_weighted_edge`] does.
///
/// Parallel edges between the same ordered pair are permitted; the neighbor
/// set still reports each neighbor once.
#[derive(Clone, Default)]
pub struct AdjMap {
    vertices: FxHashSet<Vertex>,
    neighbors: FxHashMap<Vertex, FxHashSet<Vertex>>,
    outgoing: FxHashMap<Vertex, ArcList>,
    num_edges: usize,
}

impl AdjMap {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a vertex. Infallible; inserting twice is a no-op.
    pub(crate) fn insert_vertex(&mut self, vertex: Vertex) {
        self.vertices.insert(vertex);
    }

    /// Records a directed edge without touching the vertex set.
    pub(crate) fn insert_edge(&mut self, edge: Edge) {
        self.neighbors
            .entry(edge.source().clone())
            .or_default()
            .insert(edge.target().clone());
        self.outgoing
            .entry(edge.source().clone())
            .or_default()
            .push(edge);
        self.num_edges += 1;
    }
}

impl GraphNew for AdjMap {
    fn with_capacity(n: usize) -> Self {
        AdjMap {
            vertices: FxHashSet::with_capacity_and_hasher(n, Default::default()),
            neighbors: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            outgoing: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            num_edges: 0,
        }
    }
}

impl GraphOrder for AdjMap {
    fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn number_of_edges(&self) -> usize {
        self.num_edges
    }
}

impl AdjacencyList for AdjMap {
    fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.outgoing.values().flatten().cloned()
    }

    fn connected(&self, u: &Vertex) -> impl Iterator<Item = &Vertex> + '_ {
        self.neighbors.get(u).into_iter().flatten()
    }

    fn connected_edges(&self, u: &Vertex) -> impl Iterator<Item = Edge> + '_ {
        self.outgoing.get(u).into_iter().flatten().cloned()
    }

    fn has_vertex(&self, u: &Vertex) -> bool {
        self.vertices.contains(u)
    }
}

impl GraphMut for AdjMap {
    fn try_add_vertex(&mut self, vertex: Vertex) -> Result<(), GraphError> {
        self.insert_vertex(vertex);
        Ok(())
    }

    fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        self.insert_edge(edge);
        Ok(())
    }
}

/// An undirected graph on top of [`AdjMap`].
///
/// Every inserted edge is stored as two directed arcs with swapped endpoints
/// and equal cost, so [`GraphOrder::number_of_edges`] counts arcs, not
/// undirected pairs.
#[derive(Clone, Default)]
pub struct AdjMapUndir {
    graph: AdjMap,
}

impl AdjMapUndir {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphNew for AdjMapUndir {
    fn with_capacity(n: usize) -> Self {
        AdjMapUndir {
            graph: AdjMap::with_capacity(n),
        }
    }
}

macros::impl_delegated_graph_ops!(AdjMapUndir => graph);

impl GraphMut for AdjMapUndir {
    fn try_add_vertex(&mut self, vertex: Vertex) -> Result<(), GraphError> {
        self.graph.try_add_vertex(vertex)
    }

    fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        self.graph.insert_edge(edge.reversed());
        self.graph.insert_edge(edge);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn vertices_without_edges() {
        let mut graph = AdjMap::new();
        graph
            .add_vertices(["a".into(), "b".into(), "c".into()])
            .unwrap();

        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 0);
        assert!(!graph.is_empty());

        // isolated vertices have empty neighborhoods, not errors
        assert_eq!(graph.connected(&"a".into()).count(), 0);
        assert_eq!(graph.connected_edges(&"a".into()).count(), 0);
        assert_eq!(graph.out_degree_of(&"c".into()), 0);
    }

    #[test]
    fn unknown_vertex_queries_are_empty() {
        let graph = AdjMap::new();
        assert_eq!(graph.connected(&"ghost".into()).count(), 0);
        assert_eq!(graph.connected_edges(&"ghost".into()).count(), 0);
        assert!(!graph.has_vertex(&"ghost".into()));
    }

    #[test]
    fn add_edge_does_not_register_endpoints() {
        let mut graph = AdjMap::new();
        graph.add_edge(("u", "v", 1.0).into()).unwrap();

        assert_eq!(graph.number_of_vertices(), 0);
        assert_eq!(graph.number_of_edges(), 1);
        assert!(graph.has_edge(&"u".into(), &"v".into()));
    }

    #[test]
    fn add_weighted_edge_registers_endpoints() {
        let mut graph = AdjMap::new();
        graph
            .add_weighted_edge("u".into(), "v".into(), 1.0)
            .unwrap();

        assert_eq!(graph.number_of_vertices(), 2);
        assert!(graph.has_vertex(&"u".into()));
        assert!(graph.has_vertex(&"v".into()));

        let target: Vertex = "v".into();
        assert_eq!(graph.connected(&"u".into()).collect_vec(), [&target]);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut graph = AdjMap::new();
        graph
            .add_weighted_edge("u".into(), "v".into(), 1.0)
            .unwrap();
        graph
            .add_weighted_edge("u".into(), "v".into(), 7.0)
            .unwrap();

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.connected_edges(&"u".into()).count(), 2);
        // the neighbor set still reports `v` once
        assert_eq!(graph.connected(&"u".into()).count(), 1);
    }

    #[test]
    fn undirected_inserts_both_arcs() {
        let mut graph = AdjMapUndir::new();
        graph
            .add_weighted_edge("a".into(), "b".into(), 2.0)
            .unwrap();

        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.has_edge(&"a".into(), &"b".into()));
        assert!(graph.has_edge(&"b".into(), &"a".into()));
        assert_eq!(
            graph
                .connected_edges(&"b".into())
                .map(|e| e.cost())
                .collect_vec(),
            [2.0]
        );
    }

    #[test]
    fn from_edges_builds_the_full_graph() {
        let graph =
            AdjMap::from_edges(3, [("1", "2", 1.0), ("2", "3", 2.0), ("1", "3", 4.0)]).unwrap();

        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.connected(&"1".into()).count(), 2);
        assert_eq!(graph.edges().count(), 3);
    }
}
