/*!
# Graph Representations

This module defines the concrete graph storage backends:

- [`AdjMap`] — unbounded hash-based adjacency representation, the workhorse
  for arbitrary vertex insertion and parallel edges.
- [`AdjMapUndir`] — undirected variant of [`AdjMap`] where every inserted
  edge also inserts its swapped-endpoint counterpart.
- [`AdjMatrix`] — fixed-capacity adjacency matrix without parallel edges.
- [`Reversed`] / [`Contraction`] — derived graphs built eagerly from another
  graph as independent owned snapshots.

Each representation makes different trade-offs; all of them speak the common
contract from [`ops`](crate::ops), so algorithms are written once against
[`AdjacencyList`](crate::ops::AdjacencyList) and friends.
*/

use crate::{ops::*, *};

mod adjacency;
mod contraction;
mod matrix;
mod reversed;

pub use adjacency::*;
pub use contraction::*;
pub use matrix::*;
pub use reversed::*;

pub(crate) mod macros {
    /// Derived graphs own an internal [`AdjMap`](super::AdjMap) and forward
    /// the whole query contract to it.
    macro_rules! impl_delegated_graph_ops {
        ($struct:ident => $field:ident) => {
            impl GraphOrder for $struct {
                fn number_of_vertices(&self) -> usize {
                    self.$field.number_of_vertices()
                }

                fn number_of_edges(&self) -> usize {
                    self.$field.number_of_edges()
                }
            }

            impl AdjacencyList for $struct {
                fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
                    self.$field.vertices()
                }

                fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
                    self.$field.edges()
                }

                fn connected(&self, u: &Vertex) -> impl Iterator<Item = &Vertex> + '_ {
                    self.$field.connected(u)
                }

                fn connected_edges(&self, u: &Vertex) -> impl Iterator<Item = Edge> + '_ {
                    self.$field.connected_edges(u)
                }

                fn has_vertex(&self, u: &Vertex) -> bool {
                    self.$field.has_vertex(u)
                }
            }
        };
    }

    pub(super) use impl_delegated_graph_ops;
}
