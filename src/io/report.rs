//! # Report
//!
//! Writes the one-shot plain-text analysis report of a loaded graph: the
//! adjacency matrix, the bridge list, and the cut-vertex list.
//!
//! Matrix entries render the edge weight, with `0` standing for "no edge" —
//! the matrix section is therefore re-readable through the
//! AdjacencyMatrix-Format. A stored zero-weight edge (possible via edge-list
//! input) is indistinguishable from "no edge" in this rendering; that is the
//! format's documented limitation, see [`matrix`](super::matrix).

use std::{fs::File, io::BufWriter, io::Write, path::Path};

use itertools::Itertools;

use super::*;
use crate::{algo::*, ops::AdjacencyQueries, *};

/// Trait for writing the textual analysis report of a graph.
pub trait ReportWrite {
    /// Writes the report to the given writer.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_report<W: Write>(&self, writer: W) -> Result<()>;

    /// Writes the report to a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_report_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_report(BufWriter::new(File::create(path)?))
    }
}

impl<G> ReportWrite for G
where
    G: AdjacencyQueries + Bridges + CutVertices,
{
    fn try_write_report<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "Adjacency matrix:")?;
        for u in self.vertices() {
            let row = self
                .vertices()
                .map(|v| self.weight_of(u, v).unwrap_or(0).to_string())
                .join(" ");
            writeln!(writer, "{row}")?;
        }

        writeln!(writer, "\nBridges:")?;
        writeln!(writer, "{}", self.compute_bridges().iter().join(" "))?;

        writeln!(writer, "\nCut vertices:")?;
        writeln!(writer, "{}", self.compute_cut_vertices().iter().join(" "))?;

        Ok(())
    }
}
