//! # EdgeList
//!
//! The EdgeList-Format consists of one edge per non-blank line, `u v [w]`,
//! with a missing weight defaulting to `1`. The node count is not declared
//! anywhere; it is inferred as the **maximum id seen** across all lines, so
//! ids below that maximum that never appear still exist as isolated nodes.

use std::io::BufRead;

use super::*;
use crate::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G: GraphFromArcs> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let lines = content_lines(reader, &self.comment_identifier)?;

        // First scan: tokenize every line and determine the node count
        let mut n: NumNodes = 0;
        let mut edges = Vec::new();
        for (lineno, line) in &lines {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }

            raise_error_unless!(
                tokens.len() == 2 || tokens.len() == 3,
                *lineno,
                "expected `u v [w]`, found {} tokens",
                tokens.len()
            );

            let u: Node = parse_token!(tokens[0], *lineno, "first endpoint");
            let v: Node = parse_token!(tokens[1], *lineno, "second endpoint");
            raise_error_unless!(u >= 1 && v >= 1, *lineno, "vertex ids are 1-based");

            let w: Weight = if tokens.len() == 3 {
                parse_token!(tokens[2], *lineno, "edge weight")
            } else {
                1
            };

            n = n.max(u).max(v);
            edges.push((u, v, w));
        }

        // Second scan: populate the model symmetrically, dropping self-loops
        Ok(G::from_arcs(
            n,
            edges
                .into_iter()
                .filter(|&(u, v, _)| u != v)
                .flat_map(|(u, v, w)| [(u, v, w), (v, u, w)]),
        ))
    }
}
