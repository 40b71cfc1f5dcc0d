use super::*;

/// A graph built by reversing every edge of another graph.
///
/// The view is an eager snapshot: construction makes one full pass over the
/// source and materializes an owned [`AdjMap`], so later mutation of the
/// source graph is not reflected here. The view itself stays mutable through
/// the usual [`GraphMut`] contract, which writes into the owned copy.
///
/// Reversing twice yields a graph whose `connected`/`connected_edges`
/// structure matches the original, even though the underlying storage is a
/// fresh instance.
#[derive(Clone)]
pub struct Reversed {
    graph: AdjMap,
}

impl Reversed {
    /// Builds the reversed snapshot of `origin`.
    pub fn new<G: AdjacencyList>(origin: &G) -> Self {
        let mut graph = AdjMap::with_capacity(origin.number_of_vertices());
        for vertex in origin.vertices() {
            graph.insert_vertex(vertex.clone());
        }
        for vertex in origin.vertices() {
            for edge in origin.connected_edges(vertex) {
                graph.insert_edge(edge.reversed());
            }
        }

        Reversed { graph }
    }
}

macros::impl_delegated_graph_ops!(Reversed => graph);

impl GraphMut for Reversed {
    fn try_add_vertex(&mut self, vertex: Vertex) -> Result<(), GraphError> {
        self.graph.try_add_vertex(vertex)
    }

    fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        self.graph.add_edge(edge)
    }
}
