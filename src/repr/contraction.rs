use super::*;

/// A graph built by contracting two vertices of another graph into one.
///
/// The two contracted vertices are replaced by a single merged vertex whose
/// label is derived deterministically from both, every edge touching either
/// of them is rewired to the merged vertex, and edges running directly
/// between the pair are dropped so no self-loop survives the merge.
///
/// Like [`Reversed`], this is an eager snapshot over an owned [`AdjMap`].
#[derive(Clone)]
pub struct Contraction {
    graph: AdjMap,
    merged: Vertex,
}

impl Contraction {
    /// Builds the contraction of `first` and `second` in `origin`.
    ///
    /// Fails with [`GraphError::MissingVertex`] if either vertex is not part
    /// of the source graph.
    pub fn new<G: AdjacencyList>(
        origin: &G,
        first: &Vertex,
        second: &Vertex,
    ) -> Result<Self, GraphError> {
        if !origin.has_vertex(first) {
            return Err(GraphError::MissingVertex(first.clone()));
        }
        if !origin.has_vertex(second) {
            return Err(GraphError::MissingVertex(second.clone()));
        }

        let merged = Vertex::new(format!("{first} -- {second}"));
        let mut graph = AdjMap::with_capacity(origin.number_of_vertices());
        for vertex in origin.vertices() {
            if vertex != first && vertex != second {
                graph.insert_vertex(vertex.clone());
            }
        }
        graph.insert_vertex(merged.clone());

        for vertex in origin.vertices() {
            for edge in origin.connected_edges(vertex) {
                if Self::connects_pair(first, second, &edge) {
                    continue;
                }
                let source = Self::rewire(first, second, &merged, edge.source());
                let target = Self::rewire(first, second, &merged, edge.target());
                graph.insert_edge(Edge::new(source, target, edge.cost()));
            }
        }

        Ok(Contraction { graph, merged })
    }

    /// The synthetic vertex standing in for the contracted pair.
    pub fn merged_vertex(&self) -> &Vertex {
        &self.merged
    }

    /// An edge running directly between the contracted pair would become a
    /// self-loop of the merged vertex and is dropped instead.
    fn connects_pair(first: &Vertex, second: &Vertex, edge: &Edge) -> bool {
        (edge.source() == first && edge.target() == second)
            || (edge.source() == second && edge.target() == first)
    }

    fn rewire(first: &Vertex, second: &Vertex, merged: &Vertex, endpoint: &Vertex) -> Vertex {
        if endpoint == first || endpoint == second {
            merged.clone()
        } else {
            endpoint.clone()
        }
    }
}

macros::impl_delegated_graph_ops!(Contraction => graph);

impl GraphMut for Contraction {
    fn try_add_vertex(&mut self, vertex: Vertex) -> Result<(), GraphError> {
        self.graph.try_add_vertex(vertex)
    }

    fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        self.graph.add_edge(edge)
    }
}
