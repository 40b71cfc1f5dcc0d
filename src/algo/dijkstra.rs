use fxhash::{FxHashMap, FxHashSet};

use super::*;
use crate::heap::{HeapNode, IndexedMinHeap};

/// Dijkstra single-source shortest paths. Assumes all edge costs are
/// non-negative; negative costs make the results unspecified (but never
/// panic).
///
/// Construction eagerly computes a precedence map from a start vertex,
/// optionally stopping as soon as a target vertex is settled. The engine
/// keeps no reference to the graph afterwards: [`cost`](Dijkstra::cost) and
/// [`path`](Dijkstra::path) answer queries by walking the precedence chain.
///
/// The frontier is driven by an [`IndexedMinHeap`] keyed by tentative
/// distance; an edge only replaces the recorded predecessor of a vertex when
/// it is strictly cheaper, so among equally cheap paths the first discovered
/// edge wins.
pub struct Dijkstra {
    start: Vertex,
    precedent: FxHashMap<Vertex, Edge>,
}

impl Dijkstra {
    /// Computes shortest paths from `start` to every reachable vertex.
    pub fn new<G: AdjacencyList>(graph: &G, start: Vertex) -> Self {
        Self::compute(graph, start, None)
    }

    /// Computes shortest paths from `start`, stopping once `target` is
    /// settled. Vertices settled before the target remain queryable.
    pub fn with_target<G: AdjacencyList>(graph: &G, start: Vertex, target: Vertex) -> Self {
        Self::compute(graph, start, Some(target))
    }

    /// The vertex all queries are answered relative to.
    pub fn start(&self) -> &Vertex {
        &self.start
    }

    /// Total cost of the shortest path from the start vertex to `vertex`.
    ///
    /// Returns `0` for the start vertex itself and [`UNREACHED`] for a vertex
    /// the search never reached.
    pub fn cost(&self, vertex: &Vertex) -> Cost {
        if !self.precedent.contains_key(vertex) {
            return if vertex == &self.start { 0.0 } else { UNREACHED };
        }

        let mut result = 0.0;
        let mut current = vertex;
        while current != &self.start {
            let edge = &self.precedent[current];
            result += edge.cost();
            current = edge.source();
        }
        result
    }

    /// The vertices forming the shortest path from the start vertex to
    /// `vertex`, both inclusive.
    ///
    /// Returns `[start]` for the start vertex itself and an empty sequence
    /// for a vertex the search never reached.
    pub fn path(&self, vertex: &Vertex) -> Vec<Vertex> {
        if !self.precedent.contains_key(vertex) {
            return if vertex == &self.start {
                vec![self.start.clone()]
            } else {
                Vec::new()
            };
        }

        let mut result = vec![vertex.clone()];
        let mut current = vertex;
        while current != &self.start {
            let edge = &self.precedent[current];
            result.push(edge.source().clone());
            current = edge.source();
        }
        result.reverse();
        result
    }

    fn compute<G: AdjacencyList>(graph: &G, start: Vertex, target: Option<Vertex>) -> Self {
        let mut precedent: FxHashMap<Vertex, Edge> = FxHashMap::default();
        let mut distance: FxHashMap<Vertex, Cost> = FxHashMap::default();
        let mut settled: FxHashSet<Vertex> = FxHashSet::default();

        // every vertex enters the heap at most once; edges may point at
        // endpoints that were never registered as vertices, so the edge count
        // bounds the discoverable vertices in that case
        let capacity = graph.number_of_vertices().max(graph.number_of_edges()) + 1;
        let mut heap = IndexedMinHeap::with_capacity(capacity);
        distance.insert(start.clone(), 0.0);
        heap.insert(HeapNode::new(start.clone(), 0.0));

        while let Some(node) = heap.pop() {
            let reached = node.key();
            let vertex = node.into_element();
            settled.insert(vertex.clone());

            if target.as_ref() == Some(&vertex) {
                break;
            }

            for edge in graph.connected_edges(&vertex) {
                let next = edge.target().clone();
                if settled.contains(&next) {
                    continue;
                }

                let alt = reached + edge.cost();
                let improved = match distance.get(&next) {
                    None => {
                        heap.insert(HeapNode::new(next.clone(), alt));
                        true
                    }
                    Some(&known) if alt < known => {
                        if let Some(entry) = heap.node_mut(&next) {
                            entry.set_key(alt);
                            heap.update(&next);
                        }
                        true
                    }
                    _ => false,
                };

                if improved {
                    distance.insert(next.clone(), alt);
                    precedent.insert(next, edge);
                }
            }
        }

        Dijkstra { start, precedent }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    use super::*;

    fn simple() -> AdjMap {
        AdjMap::from_edges(
            4,
            [
                ("1", "2", 1.0),
                ("2", "3", 2.0),
                ("1", "3", 4.0),
                ("3", "4", 3.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn prefers_the_cheaper_indirect_path() {
        let graph = simple();
        let dijkstra = Dijkstra::new(&graph, "1".into());

        // the direct edge 1 -> 3 costs 4, the detour over 2 only 3
        assert_eq!(dijkstra.cost(&"3".into()), 3.0);
        assert_eq!(
            dijkstra.path(&"3".into()),
            ["1".into(), "2".into(), "3".into()]
        );
    }

    #[test]
    fn calculates_all_reachable() {
        let graph = simple();
        let dijkstra = Dijkstra::new(&graph, "1".into());

        for (dest, cost, path_len) in [("1", 0.0, 1), ("2", 1.0, 2), ("3", 3.0, 3), ("4", 6.0, 4)]
        {
            assert_eq!(dijkstra.cost(&dest.into()), cost);
            assert_eq!(dijkstra.path(&dest.into()).len(), path_len);
        }
    }

    #[test]
    fn start_vertex_queries() {
        let graph = simple();
        let dijkstra = Dijkstra::new(&graph, "1".into());

        assert_eq!(dijkstra.start(), &"1".into());
        assert_eq!(dijkstra.cost(&"1".into()), 0.0);
        assert_eq!(dijkstra.path(&"1".into()), ["1".into()]);
    }

    #[test]
    fn unreached_vertices_use_sentinels() {
        let mut graph = simple();
        graph.add_vertices(["island".into()]).unwrap();
        let dijkstra = Dijkstra::new(&graph, "1".into());

        assert_eq!(dijkstra.cost(&"island".into()), UNREACHED);
        assert!(dijkstra.path(&"island".into()).is_empty());

        // vertices downstream of the start are unreached from elsewhere
        let from_leaf = Dijkstra::new(&graph, "4".into());
        assert_eq!(from_leaf.cost(&"1".into()), UNREACHED);
        assert!(from_leaf.path(&"1".into()).is_empty());
    }

    #[test]
    fn path_starts_at_start_and_ends_at_destination() {
        let graph = simple();
        let dijkstra = Dijkstra::new(&graph, "1".into());

        for dest in ["2", "3", "4"] {
            let path = dijkstra.path(&dest.into());
            assert_eq!(path.first(), Some(&"1".into()));
            assert_eq!(path.last(), Some(&dest.into()));
        }
    }

    #[test]
    fn stops_at_the_target() {
        let graph = simple();
        let dijkstra = Dijkstra::with_target(&graph, "1".into(), "3".into());

        assert_eq!(dijkstra.cost(&"3".into()), 3.0);
        assert_eq!(
            dijkstra.path(&"3".into()),
            ["1".into(), "2".into(), "3".into()]
        );
        // the vertex behind the target was never settled
        assert_eq!(dijkstra.cost(&"4".into()), UNREACHED);
    }

    #[test]
    fn runs_over_derived_views() {
        let reversed = Reversed::new(&simple());
        let dijkstra = Dijkstra::new(&reversed, "4".into());

        assert_eq!(dijkstra.cost(&"1".into()), 6.0);
        assert_eq!(
            dijkstra.path(&"1".into()),
            ["4".into(), "3".into(), "2".into(), "1".into()]
        );
    }

    /// Reference implementation: repeatedly scan all assigned vertices for
    /// the globally cheapest edge into an unassigned one.
    fn scan_costs<G: AdjacencyList>(graph: &G, start: &Vertex) -> FxHashMap<Vertex, Cost> {
        let mut assigned: FxHashMap<Vertex, Cost> = FxHashMap::default();
        assigned.insert(start.clone(), 0.0);

        loop {
            let mut best: Option<(Vertex, Cost)> = None;
            for (source, &known) in &assigned {
                for edge in graph.connected_edges(source) {
                    if assigned.contains_key(edge.target()) {
                        continue;
                    }
                    let alt = known + edge.cost();
                    if best.as_ref().is_none_or(|(_, cost)| alt < *cost) {
                        best = Some((edge.target().clone(), alt));
                    }
                }
            }

            match best {
                Some((vertex, cost)) => {
                    assigned.insert(vertex, cost);
                }
                None => return assigned,
            }
        }
    }

    #[test]
    fn matches_the_full_scan_reference() {
        let rng = &mut Pcg64::seed_from_u64(1234);

        for _ in 0..10 {
            let n = 30usize;
            let edges = (0..120)
                .map(|_| {
                    let u = rng.random_range(0..n).to_string();
                    let v = rng.random_range(0..n).to_string();
                    let w = rng.random_range(0..10) as Cost;
                    (u, v, w)
                })
                .collect_vec();

            let mut graph = AdjMap::new();
            graph.add_vertices(["0".into()]).unwrap();
            for (u, v, w) in &edges {
                graph
                    .add_weighted_edge(u.as_str().into(), v.as_str().into(), *w)
                    .unwrap();
            }

            let start: Vertex = "0".into();
            let dijkstra = Dijkstra::new(&graph, start.clone());
            let reference = scan_costs(&graph, &start);

            for vertex in graph.vertices() {
                let expected = reference.get(vertex).copied().unwrap_or(UNREACHED);
                assert_eq!(dijkstra.cost(vertex), expected, "vertex {vertex}");
            }
        }
    }
}
