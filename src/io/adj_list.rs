//! # AdjacencyList
//!
//! The AdjacencyList-Format consists of `n` lines, where line `i` lists the
//! neighbor ids of vertex `i + 1`. All listed neighbors get weight `1`
//! (the format is unweighted) and a blank line is an isolated vertex.
//!
//! Arcs are stored exactly as listed: if line 1 lists `2` but line 2 does not
//! list `1` back, the model ends up asymmetric and is flagged by
//! [`GraphModel::is_directed`](crate::model::GraphModel::is_directed).

use std::io::BufRead;

use super::*;
use crate::*;

/// A GraphReader for the AdjacencyList-Format
#[derive(Debug, Clone)]
pub struct AdjacencyListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for AdjacencyListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl AdjacencyListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> AdjacencyListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G: GraphFromArcs> GraphReader<G> for AdjacencyListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let lines = content_lines(reader, &self.comment_identifier)?;

        let n = lines.len() as NumNodes;
        let mut arcs = Vec::new();
        for (i, (lineno, line)) in lines.iter().enumerate() {
            let u = (i + 1) as Node;
            for token in line.split_whitespace() {
                let v: Node = parse_token!(token, *lineno, "neighbor id");
                raise_error_unless!(
                    (1..=n).contains(&v),
                    *lineno,
                    "neighbor id {} out of range 1..={}",
                    v,
                    n
                );

                if u != v {
                    arcs.push((u, v, 1));
                }
            }
        }

        Ok(G::from_arcs(n, arcs))
    }
}
