//! # AdjacencyMatrix
//!
//! The AdjacencyMatrix-Format consists of `n` lines of `n` integer tokens,
//! where `n` is the number of non-blank lines. The token `0` means "no edge";
//! every other integer becomes the edge weight directly. True zero-weight
//! edges are therefore **not representable** in this format — a documented
//! limitation of the format, not of the model.
//!
//! The input is stored exactly as given: an asymmetric matrix is accepted and
//! only flagged by [`GraphModel::is_directed`](crate::model::GraphModel::is_directed).
//! Diagonal entries are dropped, since the model never stores self-loops.

use std::io::BufRead;

use super::*;
use crate::*;

/// A GraphReader for the AdjacencyMatrix-Format
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for AdjacencyMatrixReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl AdjacencyMatrixReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> AdjacencyMatrixReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G: GraphFromArcs> GraphReader<G> for AdjacencyMatrixReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let rows: Vec<(usize, String)> = content_lines(reader, &self.comment_identifier)?
            .into_iter()
            .filter(|(_, line)| !line.trim().is_empty())
            .collect();

        let n = rows.len() as NumNodes;
        let mut arcs = Vec::new();
        for (i, (lineno, line)) in rows.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            raise_error_unless!(
                tokens.len() == n as usize,
                *lineno,
                "expected {} entries per row, found {}",
                n,
                tokens.len()
            );

            for (j, token) in tokens.iter().enumerate() {
                let w: Weight = parse_token!(token, *lineno, "matrix entry");
                if w != 0 && i != j {
                    arcs.push(((i + 1) as Node, (j + 1) as Node, w));
                }
            }
        }

        Ok(G::from_arcs(n, arcs))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::GraphModel;

    fn read(input: &str) -> GraphModel {
        AdjacencyMatrixReader::new()
            .try_read_graph(input.as_bytes())
            .unwrap()
    }

    #[test]
    fn zero_means_no_edge() {
        let graph = read("0 3 0\n3 0 1\n0 1 0\n");

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.weight_of(1, 2), Some(3));
        assert_eq!(graph.weight_of(2, 3), Some(1));
        assert_eq!(graph.weight_of(1, 3), None);
        assert!(!graph.is_directed());
    }

    #[test]
    fn negative_weights_are_edges() {
        let graph = read("0 -4\n-4 0\n");
        assert_eq!(graph.weight_of(2, 1), Some(-4));
    }

    #[test]
    fn diagonal_entries_are_dropped() {
        let graph = read("9 1\n1 9\n");
        assert!(!graph.has_edge(1, 1));
        assert!(!graph.has_edge(2, 2));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn asymmetric_input_is_kept_and_flagged() {
        let graph = read("0 1\n0 0\n");

        assert!(graph.is_directed());
        assert!(graph.has_edge(1, 2));
        assert!(!graph.has_edge(2, 1));
    }

    #[test]
    fn ragged_rows_are_rejected_with_line_number() {
        let err = AdjacencyMatrixReader::new()
            .try_read_graph("0 1 0\n1 0\n0 0 0\n".as_bytes())
            .map(|_: GraphModel| ())
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidLine { line: 2, .. }));
    }

    #[test]
    fn non_integer_entries_are_rejected() {
        let err = AdjacencyMatrixReader::new()
            .try_read_graph("0 a\n1 0\n".as_bytes())
            .map(|_: GraphModel| ())
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidLine { line: 1, .. }));
    }

    #[test]
    fn empty_input_is_the_empty_graph() {
        let graph = read("");
        assert!(graph.is_empty());
    }
}
