use fxhash::FxHashMap;

use super::*;

/// A directed graph backed by a dense adjacency matrix.
///
/// The vertex capacity is fixed at construction; inserting a vertex beyond it
/// fails with [`GraphError::CapacityExceeded`]. Unlike [`AdjMap`], both
/// edge-insertion forms register their endpoints as vertices. Parallel edges
/// between the same ordered pair are unrepresentable: a later insertion
/// overwrites the stored cost.
#[derive(Clone)]
pub struct AdjMatrix {
    indices: FxHashMap<Vertex, usize>,
    labels: Vec<Vertex>,
    cells: Vec<Option<Cost>>,
    capacity: usize,
    num_edges: usize,
}

impl AdjMatrix {
    /// Creates an empty graph accepting at most `capacity` vertices.
    pub fn new(capacity: usize) -> Self {
        AdjMatrix {
            indices: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            labels: Vec::with_capacity(capacity),
            cells: vec![None; capacity * capacity],
            capacity,
            num_edges: 0,
        }
    }

    /// Returns the maximum number of vertices this graph accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the stored cost of the edge `(u, v)`, if present.
    pub fn cost_of(&self, u: &Vertex, v: &Vertex) -> Option<Cost> {
        let row = *self.indices.get(u)?;
        let col = *self.indices.get(v)?;
        self.cells[row * self.capacity + col]
    }

    fn row(&self, u: &Vertex) -> Option<usize> {
        self.indices.get(u).copied()
    }
}

impl GraphNew for AdjMatrix {
    fn with_capacity(n: usize) -> Self {
        Self::new(n)
    }
}

impl GraphOrder for AdjMatrix {
    fn number_of_vertices(&self) -> usize {
        self.labels.len()
    }

    fn number_of_edges(&self) -> usize {
        self.num_edges
    }
}

impl AdjacencyList for AdjMatrix {
    fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.labels.iter()
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.labels.iter().enumerate().flat_map(move |(row, source)| {
            self.labels.iter().enumerate().filter_map(move |(col, target)| {
                self.cells[row * self.capacity + col]
                    .map(|cost| Edge::new(source.clone(), target.clone(), cost))
            })
        })
    }

    fn connected(&self, u: &Vertex) -> impl Iterator<Item = &Vertex> + '_ {
        self.row(u).into_iter().flat_map(move |row| {
            self.labels
                .iter()
                .enumerate()
                .filter_map(move |(col, target)| {
                    self.cells[row * self.capacity + col].map(|_| target)
                })
        })
    }

    fn connected_edges(&self, u: &Vertex) -> impl Iterator<Item = Edge> + '_ {
        let source = u.clone();
        self.row(u).into_iter().flat_map(move |row| {
            let source = source.clone();
            self.labels
                .iter()
                .enumerate()
                .filter_map(move |(col, target)| {
                    self.cells[row * self.capacity + col]
                        .map(|cost| Edge::new(source.clone(), target.clone(), cost))
                })
        })
    }

    fn has_vertex(&self, u: &Vertex) -> bool {
        self.indices.contains_key(u)
    }
}

impl GraphMut for AdjMatrix {
    fn try_add_vertex(&mut self, vertex: Vertex) -> Result<(), GraphError> {
        if self.indices.contains_key(&vertex) {
            return Ok(());
        }
        if self.labels.len() >= self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.indices.insert(vertex.clone(), self.labels.len());
        self.labels.push(vertex);
        Ok(())
    }

    /// Registers both endpoints, then stores the cost. Overwrites any edge
    /// previously recorded for the same ordered pair.
    fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        self.add_vertices([edge.source().clone(), edge.target().clone()])?;

        let row = self.indices[edge.source()];
        let col = self.indices[edge.target()];
        let cell = &mut self.cells[row * self.capacity + col];
        if cell.is_none() {
            self.num_edges += 1;
        }
        *cell = Some(edge.cost());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn rejects_vertices_beyond_capacity() {
        let mut graph = AdjMatrix::new(2);
        graph.add_vertices(["a".into(), "b".into()]).unwrap();

        assert_eq!(
            graph.try_add_vertex("c".into()),
            Err(GraphError::CapacityExceeded { capacity: 2 })
        );
        // re-adding a known vertex is still fine at full capacity
        assert_eq!(graph.try_add_vertex("a".into()), Ok(()));
        assert_eq!(graph.number_of_vertices(), 2);
    }

    #[test]
    fn edge_insertion_registers_endpoints() {
        let mut graph = AdjMatrix::new(3);
        graph.add_edge(("u", "v", 1.5).into()).unwrap();

        assert_eq!(graph.number_of_vertices(), 2);
        assert!(graph.has_edge(&"u".into(), &"v".into()));
        assert!(!graph.has_edge(&"v".into(), &"u".into()));

        // capacity overflow through edge insertion surfaces too
        let mut full = AdjMatrix::new(1);
        assert!(full.add_edge(("u", "v", 1.0).into()).is_err());
    }

    #[test]
    fn same_pair_overwrites_cost() {
        let mut graph = AdjMatrix::new(2);
        graph
            .add_weighted_edge("u".into(), "v".into(), 1.0)
            .unwrap();
        graph
            .add_weighted_edge("u".into(), "v".into(), 9.0)
            .unwrap();

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.cost_of(&"u".into(), &"v".into()), Some(9.0));
    }

    #[test]
    fn materializes_edges_and_neighborhoods() {
        let graph =
            AdjMatrix::from_edges(3, [("1", "2", 1.0), ("2", "3", 2.0), ("1", "3", 4.0)]).unwrap();

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.edges().count(), 3);
        assert_eq!(
            graph
                .connected(&"1".into())
                .map(|v| v.label())
                .sorted()
                .collect_vec(),
            ["2", "3"]
        );
        assert_eq!(graph.connected_edges(&"3".into()).count(), 0);
        assert_eq!(graph.connected(&"ghost".into()).count(), 0);
    }
}
