use std::iter::FusedIterator;

use fxhash::FxHashSet;

use super::*;

/// Kosaraju's two-pass algorithm for strongly connected components, designed
/// as an iterator that emits the vertex set of one component at a time.
///
/// Pass 1 runs eagerly at construction: an iterative depth-first search over
/// an internally built [`Reversed`] snapshot (restarting at an arbitrary
/// unvisited vertex whenever the search stalls) computes a finishing order
/// with the most recently fully-explored vertex first. Each call to `next()`
/// then runs one forward DFS over the original graph from the first vertex in
/// finishing order not yet assigned to a component, restricted to unassigned
/// vertices, and yields everything it visits as one component.
///
/// Components come out in pass-2 discovery order; the vertex order within a
/// component is unspecified (it is a set).
pub struct StronglyConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    finishing: Vec<Vertex>,
    assigned: FxHashSet<Vertex>,
    cursor: usize,
}

enum Visit {
    Enter(Vertex),
    Exit(Vertex),
}

impl<'a, G> StronglyConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    /// Construct the iterator for some graph. Pass 1 runs here.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            finishing: Self::finishing_order(&Reversed::new(graph)),
            assigned: FxHashSet::default(),
            cursor: 0,
        }
    }

    /// Explicit-stack depth-first search yielding vertices so that the most
    /// recently fully-explored one comes first. Enter frames discover a
    /// vertex and schedule its exit frame below its neighbors; exit frames
    /// record the finishing time.
    fn finishing_order(reversed: &Reversed) -> Vec<Vertex> {
        let mut order = Vec::with_capacity(reversed.number_of_vertices());
        let mut visited: FxHashSet<Vertex> = FxHashSet::default();
        let mut stack: Vec<Visit> = Vec::new();

        for root in reversed.vertices() {
            if visited.contains(root) {
                continue;
            }

            stack.push(Visit::Enter(root.clone()));
            while let Some(frame) = stack.pop() {
                match frame {
                    Visit::Enter(u) => {
                        if !visited.insert(u.clone()) {
                            continue;
                        }
                        stack.push(Visit::Exit(u.clone()));
                        for v in reversed.connected(&u) {
                            if !visited.contains(v) {
                                stack.push(Visit::Enter(v.clone()));
                            }
                        }
                    }
                    Visit::Exit(u) => order.push(u),
                }
            }
        }

        order.reverse();
        order
    }

    /// Reports whether another component is available, without computing it.
    pub fn has_next(&self) -> bool {
        self.finishing[self.cursor..]
            .iter()
            .any(|u| !self.assigned.contains(u))
    }

    /// Consumes and returns the next component.
    ///
    /// Fails with [`GraphError::Exhausted`] once every vertex is assigned.
    pub fn try_next(&mut self) -> Result<FxHashSet<Vertex>, GraphError> {
        self.next().ok_or(GraphError::Exhausted)
    }
}

impl<G> Iterator for StronglyConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = FxHashSet<Vertex>;

    /// Returns the vertex set of the next strongly connected component, or
    /// `None` once every vertex is assigned.
    fn next(&mut self) -> Option<Self::Item> {
        while self
            .finishing
            .get(self.cursor)
            .is_some_and(|u| self.assigned.contains(u))
        {
            self.cursor += 1;
        }
        let seed = self.finishing.get(self.cursor)?.clone();

        let component: FxHashSet<Vertex> = Dfs::new(self.graph, seed)
            .with_vertices_excluded(self.assigned.iter().cloned())
            .collect();
        self.assigned.extend(component.iter().cloned());

        Some(component)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.finishing.len() - self.cursor.min(self.finishing.len());
        ((remaining > 0) as usize, Some(remaining))
    }
}

impl<G> FusedIterator for StronglyConnectedComponents<'_, G> where G: AdjacencyList {}

/// Exposes component decomposition directly as a method on graphs.
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns the lazy Kosaraju iterator over the strongly connected
    /// components of the graph.
    fn strongly_connected_components(&self) -> StronglyConnectedComponents<'_, Self> {
        StronglyConnectedComponents::new(self)
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    use super::*;

    fn component_of<'a>(
        components: &'a [FxHashSet<Vertex>],
        member: &str,
    ) -> &'a FxHashSet<Vertex> {
        components
            .iter()
            .find(|c| c.contains(&member.into()))
            .unwrap()
    }

    fn labels(component: &FxHashSet<Vertex>) -> Vec<&str> {
        component.iter().map(|v| v.label()).sorted().collect_vec()
    }

    #[test]
    fn decomposes_the_triple_of_triples() {
        // three 3-cycles chained by one-way links
        let graph = AdjMap::from_edges(
            9,
            [
                ("1", "4", 1.0),
                ("4", "7", 1.0),
                ("7", "1", 1.0),
                ("3", "6", 1.0),
                ("6", "9", 1.0),
                ("9", "3", 1.0),
                ("2", "5", 1.0),
                ("5", "8", 1.0),
                ("8", "2", 1.0),
                ("1", "2", 1.0),
                ("4", "5", 1.0),
                ("7", "8", 1.0),
            ],
        )
        .unwrap();

        let components = graph.strongly_connected_components().collect_vec();
        assert_eq!(components.len(), 3);
        assert!(components.iter().all(|c| c.len() == 3));

        assert_eq!(labels(component_of(&components, "1")), ["1", "4", "7"]);
        assert_eq!(labels(component_of(&components, "3")), ["3", "6", "9"]);
        assert_eq!(labels(component_of(&components, "2")), ["2", "5", "8"]);

        // no vertex is in more than one component and the union is everything
        let union: FxHashSet<_> = components.iter().flatten().cloned().collect();
        assert_eq!(union.len(), 9);
        assert_eq!(components.iter().map(|c| c.len()).sum::<usize>(), 9);
    }

    #[test]
    fn every_tree_vertex_is_its_own_component() {
        let graph = AdjMap::from_edges(
            4,
            [("a", "b", 1.0), ("a", "c", 1.0), ("c", "d", 1.0)],
        )
        .unwrap();

        let components = graph.strongly_connected_components().collect_vec();
        assert_eq!(components.len(), 4);
        assert!(components.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn a_cycle_is_one_component() {
        let n = 50;
        let mut graph = AdjMap::new();
        for i in 0..n {
            graph
                .add_weighted_edge(
                    i.to_string().into(),
                    ((i + 1) % n).to_string().into(),
                    1.0,
                )
                .unwrap();
        }

        let mut sccs = graph.strongly_connected_components();
        assert!(sccs.has_next());
        assert_eq!(sccs.try_next().map(|c| c.len()), Ok(n));

        assert!(!sccs.has_next());
        assert_eq!(sccs.try_next(), Err(GraphError::Exhausted));
        // iteration stays exhausted
        assert!(sccs.next().is_none());
    }

    #[test]
    fn empty_graph_has_no_components() {
        let graph = AdjMap::new();
        assert_eq!(graph.strongly_connected_components().count(), 0);
    }

    #[test]
    fn components_partition_random_graphs() {
        let rng = &mut Pcg64::seed_from_u64(1234);

        for round in 0..10 {
            let n = 100usize;
            let m = n * round;

            let mut graph = AdjMap::new();
            graph.add_vertices((0..n).map(|i| i.to_string().into())).unwrap();
            for _ in 0..m {
                graph
                    .add_weighted_edge(
                        rng.random_range(0..n).to_string().into(),
                        rng.random_range(0..n).to_string().into(),
                        1.0,
                    )
                    .unwrap();
            }

            let components = graph.strongly_connected_components().collect_vec();
            assert_eq!(components.iter().map(|c| c.len()).sum::<usize>(), n);

            let union: FxHashSet<_> = components.iter().flatten().cloned().collect();
            assert_eq!(union.len(), n);
        }
    }
}
