use fixedbitset::FixedBitSet;

use super::*;

/// Computes all **cut vertices** (articulation points) of an undirected
/// graph: vertices whose removal increases the number of connected components.
pub trait CutVertices {
    /// Returns the cut vertices in ascending id order. The result only
    /// depends on the graph, so repeated calls yield identical sequences.
    fn compute_cut_vertices(&self) -> Vec<Node>;
}

impl<G: AdjacencyQueries> CutVertices for G {
    fn compute_cut_vertices(&self) -> Vec<Node> {
        CutVertexSearch::new(self).compute()
    }
}

/// Call-scoped state of a single cut-vertex computation
struct CutVertexSearch<'a, G: AdjacencyQueries> {
    graph: &'a G,
    visited: FixedBitSet,
    info: Vec<NodeInfo>,
    /// Number of DFS tree children per vertex; only the root's count matters
    tree_children: Vec<NumNodes>,
    time: Node,
    cut_vertices: FixedBitSet,
}

impl<'a, G: AdjacencyQueries> CutVertexSearch<'a, G> {
    fn new(graph: &'a G) -> Self {
        let slots = graph.number_of_nodes() as usize + 1;
        Self {
            graph,
            visited: FixedBitSet::with_capacity(slots),
            info: vec![NodeInfo::default(); slots],
            tree_children: vec![0; slots],
            time: 0,
            cut_vertices: FixedBitSet::with_capacity(slots),
        }
    }

    fn compute(mut self) -> Vec<Node> {
        for u in self.graph.vertices() {
            if !self.visited.contains(u as usize) {
                self.traverse_tree(u);

                // The root splits its tree iff it has more than one child
                if self.tree_children[u as usize] > 1 {
                    self.cut_vertices.insert(u as usize);
                }
            }
        }

        self.cut_vertices.ones().map(|u| u as Node).collect()
    }

    fn discover(&mut self, u: Node, parent: Option<Node>) {
        self.visited.insert(u as usize);
        self.time += 1;
        self.info[u as usize] = NodeInfo {
            discovery: self.time,
            low: self.time,
            parent,
        };
    }

    /// Runs one DFS tree rooted at `root` over an explicit frame stack.
    ///
    /// Same discovery/low bookkeeping as the bridge search, with the
    /// root-aware accumulation rule: a non-root `p` with tree child `u` is a
    /// cut vertex iff `low[u] >= disc[p]` — note the `>=` where the bridge
    /// condition is strict, since a vertex can separate the graph even when
    /// the connecting edge lies on a cycle. Roots are handled by child count
    /// after the tree completes.
    fn traverse_tree(&mut self, root: Node) {
        self.discover(root, None);
        let mut stack = vec![StackFrame::new(root)];

        while let Some(frame) = stack.last_mut() {
            let u = frame.node;

            if frame.next_neighbor < self.graph.degree_of(u) {
                let v = self.graph.ith_neighbor(u, frame.next_neighbor);
                frame.next_neighbor += 1;

                if !self.visited.contains(v as usize) {
                    self.tree_children[u as usize] += 1;
                    self.discover(v, Some(u));
                    stack.push(StackFrame::new(v));
                } else if self.info[u as usize].parent != Some(v) {
                    let v_disc = self.info[v as usize].discovery;
                    self.info[u as usize].update_low(v_disc);
                }
            } else {
                stack.pop();

                if let Some(p) = self.info[u as usize].parent {
                    let low_u = self.info[u as usize].low;
                    self.info[p as usize].update_low(low_u);

                    if self.info[p as usize].parent.is_some()
                        && low_u >= self.info[p as usize].discovery
                    {
                        self.cut_vertices.insert(p as usize);
                    }
                }
            }
        }
    }
}
