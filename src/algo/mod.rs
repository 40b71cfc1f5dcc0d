/*!
# Graph Algorithms

Classical algorithms built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module. Where
possible, algorithms are provided as **iterators**, making it easy to consume
results lazily.
*/

mod dijkstra;
mod scc;
mod traversal;

use crate::prelude::*;

pub use dijkstra::*;
pub use scc::*;
pub use traversal::*;
