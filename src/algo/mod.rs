/*!
# Connectivity Analysis

DFS-based analysis of a loaded graph:
- [`Bridges`] finds all edges whose removal disconnects some pair of vertices,
- [`CutVertices`] finds all vertices whose removal increases the number of
  connected components.

Both run Tarjan's discovery-time/low-link technique, one independent pass per
concern. Each pass walks one DFS tree per connected component (roots chosen in
ascending id order) with a discovery counter that is monotone across the whole
forest. The traversal uses an explicit frame stack, so path-like graphs of any
size cannot exhaust the call stack, and all bookkeeping lives in a per-call
search struct that is discarded on return — repeated calls never observe stale
state.
*/

mod bridges;
mod cut_vertices;

use crate::{ops::*, *};

pub use bridges::*;
pub use cut_vertices::*;

/// Per-vertex DFS bookkeeping shared by both searches
#[derive(Clone, Copy, Default)]
pub(crate) struct NodeInfo {
    /// Order index at which the vertex was first visited (1-based, 0 = unset)
    discovery: Node,
    /// Smallest discovery time reachable from the vertex's subtree via at
    /// most one back-edge
    low: Node,
    /// DFS tree parent; `None` for roots
    parent: Option<Node>,
}

impl NodeInfo {
    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}

/// One entry of the explicit DFS stack: a vertex and the index of the next
/// neighbor to inspect.
#[derive(Clone, Copy)]
pub(crate) struct StackFrame {
    node: Node,
    next_neighbor: NumNodes,
}

impl StackFrame {
    fn new(node: Node) -> Self {
        Self {
            node,
            next_neighbor: 0,
        }
    }
}
