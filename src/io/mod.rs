/*!
# IO

Reads graphs from the plain-text ingestion format:

- The first line is the number of vertices `n`; the vertices are auto-labelled
  `"1"` through `"n"`.
- Every subsequent non-blank line is one directed edge `start end cost`
  (whitespace-separated), inserted through the endpoint-registering edge form.

Whether the result is directed or undirected is decided by the target graph
type: reading into [`AdjMapUndir`](crate::repr::AdjMapUndir) records both
directions of every edge automatically.

There is deliberately no writer: the engine does not persist or serialize
graphs.
*/

use std::{
    fs::File,
    io::{BufRead, BufReader, Error, ErrorKind, Result},
    path::Path,
};

use crate::prelude::*;

macro_rules! io_error {
    ($kind:expr, $msg:expr) => {
        Error::new($kind, $msg)
    };
}

/// Trait for creating graphs from the plain-text format.
///
/// Implemented for every graph that can be constructed with a capacity and
/// mutated through the common contract.
pub trait TextRead: Sized {
    /// Tries to read the graph from a given reader.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation of a graph
    /// in the expected format, or if populating the graph fails (e.g. a
    /// capacity-bounded representation running out of room).
    fn try_read_text<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file.
    fn try_read_text_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_text(BufReader::new(File::open(path)?))
    }
}

impl<G> TextRead for G
where
    G: GraphNew + GraphMut,
{
    fn try_read_text<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        let header = lines
            .next()
            .ok_or_else(|| io_error!(ErrorKind::NotFound, "vertex count not found"))??;
        let count: usize = header.trim().parse().map_err(|_| {
            io_error!(
                ErrorKind::InvalidData,
                format!("invalid vertex count: {header:?}")
            )
        })?;

        let mut graph = G::with_capacity(count);
        for ordinal in 1..=count {
            graph
                .try_add_vertex(Vertex::new(ordinal.to_string()))
                .map_err(Error::other)?;
        }

        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut parts = line.split_whitespace();
            let (Some(start), Some(end), Some(cost)) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("malformed edge line: {line:?}")
                ));
            };
            let cost: Cost = cost.parse().map_err(|_| {
                io_error!(
                    ErrorKind::InvalidData,
                    format!("invalid edge cost: {line:?}")
                )
            })?;

            graph
                .add_weighted_edge(start.into(), end.into(), cost)
                .map_err(Error::other)?;
        }

        Ok(graph)
    }
}
