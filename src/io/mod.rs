/*!
# IO

Readers for the three supported textual input formats, plus a report writer.

## Input Formats

All formats are plain text with one record per line and whitespace-separated
tokens. Lines starting with the configurable comment identifier (default `#`)
are skipped by every reader.

- **EdgeList**: `m` lines `u v [w]`; the weight defaults to `1` and the node
  count is the maximum id seen.
- **AdjacencyMatrix**: `n` lines of `n` integers; the token `0` means
  "no edge", every other integer is the edge weight directly.
- **AdjacencyList**: `n` lines listing the neighbors of vertex `i + 1`;
  unweighted, a blank line is an isolated vertex.

## Traits

- [`GraphReader`] is implemented by the reader of a specific format.
- [`GraphRead`] dispatches on a [`GraphFormat`] tag and is automatically
  implemented for every graph that can be built from arcs.
- [`ReportWrite`] renders the analysis report of a loaded graph.
*/

pub mod adj_list;
pub mod edge_list;
pub mod matrix;
pub mod report;

use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::Path,
    str::FromStr,
};

use crate::{error::*, ops::*};

pub use adj_list::*;
pub use edge_list::*;
pub use matrix::*;
pub use report::*;

/// Identifier for a graph input format.
///
/// Used in [`GraphRead`] to determine the correct parser.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GraphFormat {
    /// One edge `u v [w]` per line
    EdgeList,
    /// Square matrix of integer weights, `0` meaning "no edge"
    AdjacencyMatrix,
    /// One neighborhood per line, unweighted
    AdjacencyList,
}

impl FromStr for GraphFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "edge-list" | "edgelist" => Ok(GraphFormat::EdgeList),
            "adjacency-matrix" | "matrix" => Ok(GraphFormat::AdjacencyMatrix),
            "adjacency-list" | "adjlist" => Ok(GraphFormat::AdjacencyList),
            _ => Err(GraphError::UnknownFormat(s.to_string())),
        }
    }
}

/// Trait for types that can read graphs in a specific format.
///
/// Provides a low-level method to read from any [`BufRead`] instance and a
/// convenience wrapper to read directly from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for reading graphs when only a [`GraphFormat`] tag is known.
///
/// Automatically implemented for every graph supporting [`GraphFromArcs`].
pub trait GraphRead: Sized {
    /// Reads a graph from the given reader according to the specified format.
    ///
    /// # Errors
    /// Returns an error if the input does not match the expected format.
    fn try_from_reader<R>(reader: R, format: GraphFormat) -> Result<Self>
    where
        R: BufRead;

    /// Reads a graph from raw text according to the specified format
    fn try_from_str(input: &str, format: GraphFormat) -> Result<Self> {
        Self::try_from_reader(Cursor::new(input), format)
    }

    /// Reads a graph from the given file according to the specified format
    fn try_from_file<P>(path: P, format: GraphFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl<G: GraphFromArcs> GraphRead for G {
    fn try_from_reader<R>(reader: R, format: GraphFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            GraphFormat::EdgeList => EdgeListReader::new().try_read_graph(reader),
            GraphFormat::AdjacencyMatrix => AdjacencyMatrixReader::new().try_read_graph(reader),
            GraphFormat::AdjacencyList => AdjacencyListReader::new().try_read_graph(reader),
        }
    }
}

/// Collects all non-comment lines of a reader together with their 1-based
/// line numbers. Blank-line handling is up to the individual format.
pub(crate) fn content_lines<R: BufRead>(
    reader: R,
    comment_identifier: &str,
) -> Result<Vec<(usize, String)>> {
    let mut lines = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.starts_with(comment_identifier) {
            lines.push((idx + 1, line));
        }
    }
    Ok(lines)
}

/// Shorthand for returning `Err(GraphError::InvalidLine)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond:expr, $line:expr, $($reason:tt)*) => {
        if !($cond) {
            return Err($crate::error::GraphError::InvalidLine {
                line: $line,
                reason: format!($($reason)*),
            });
        }
    };
}

/// Tries to parse a single token and returns early if it fails
macro_rules! parse_token {
    ($token:expr, $line:expr, $name:expr) => {{
        let parsed = $token.parse();
        raise_error_unless!(
            parsed.is_ok(),
            $line,
            "cannot parse {} from {:?}",
            $name,
            $token
        );

        parsed.unwrap()
    }};
}

pub(crate) use parse_token;
pub(crate) use raise_error_unless;
