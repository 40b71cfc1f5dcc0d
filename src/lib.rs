/*!
`wgraphs` is a graph data structure & algorithms library designed for graphs
that are
- **w**eighted : Every edge carries a real-valued cost.
- **l**abelled : Vertices are identified by string labels, not indices.
- directed : Edges have orientation; an undirected edge is modelled as two
  directed edges with swapped endpoints and equal cost.

# Representation

**Vertices** are value types ([`Vertex`]): two vertices with equal labels are
interchangeable. **Edges** ([`Edge`]) are immutable
`(source, target, cost)` triples.

### Available Representations

See the [`repr`] module for the full list of graph storage backends:

- [`AdjMap`](crate::repr::AdjMap) — unbounded hash-based adjacency
- [`AdjMapUndir`](crate::repr::AdjMapUndir) — undirected variant
- [`AdjMatrix`](crate::repr::AdjMatrix) — fixed-capacity adjacency matrix
- [`Reversed`](crate::repr::Reversed) / [`Contraction`](crate::repr::Contraction)
  — derived graphs, built eagerly as independent owned snapshots

Each representation makes different trade-offs in terms of flexibility and
lookup performance; all of them implement the capability traits of [`ops`].

# Design

Algorithms are provided as structs over any [`AdjacencyList`](ops::AdjacencyList)
implementation. Traversals ([`algo::Bfs`], [`algo::Dfs`]) and the component
decomposition ([`algo::StronglyConnectedComponents`]) are lazy iterators;
the shortest-path engine ([`algo::Dijkstra`]) computes eagerly and answers
`cost`/`path` queries afterwards. The most common entry points are also
available as methods on the graphs themselves via the [`algo::Traversal`] and
[`algo::Connectivity`] extension traits.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes the vertex/edge/error types, the graph operation
  traits, and all standard graph representations,
- [`algo`] includes the traversal cursors, shortest paths, and strongly
  connected components,
- [`heap`] includes the indexed min-heap backing the shortest-path frontier,
- [`io`] includes a reader for the plain-text ingestion format.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your
needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod heap;
pub mod io;
pub mod ops;
pub mod repr;
pub mod vertex;

pub use edge::{Cost, Edge, UNREACHED};
pub use error::GraphError;
pub use vertex::Vertex;

/// `wgraphs::prelude` includes definitions for vertices, edges and errors,
/// all basic graph operation traits as well as all implemented
/// representations.
pub mod prelude {
    pub use super::{edge::*, error::*, ops::*, repr::*, vertex::*};
}
