/*!
# GraphModel

The canonical in-memory representation of a loaded graph. Conceptually this is
a square `n x n` matrix over `Option<Weight>`; we store it as one weighted
neighborhood row per vertex, sorted ascending by neighbor id, which keeps
memory proportional to the number of arcs while preserving the matrix
contracts ([`GraphModel::adjacency_matrix`] materializes the square form on
demand).

The model is built once by an ingestion path and queried read-only thereafter.
Self-loops are never stored: no ingestion path and no edge-adding method
creates an entry `(u, u)`.
*/

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{ops::*, *};

/// Weighted adjacency structure over nodes `1..=n`
#[derive(Clone, Default)]
pub struct GraphModel {
    /// `rows[u - 1]` holds the out-arcs of vertex `u`, sorted by neighbor id
    rows: Vec<Vec<(Node, Weight)>>,
    /// Number of unordered pairs `{u, v}` connected by at least one arc
    num_edges: NumEdges,
}

impl GraphModel {
    /// Creates a graph with `n` singleton nodes and no edges
    pub fn new(n: NumNodes) -> Self {
        Self {
            rows: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }

    /// Creates a graph from symmetric weighted edges: every `(u, v, w)` yields
    /// the arcs `(u, v)` and `(v, u)`, both with weight `w`.
    /// ** Panics if any id is `0` or `> n`, or if `u == v` **
    pub fn from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = (Node, Node, Weight)>,
    ) -> Self {
        let mut graph = Self::new(n);
        for (u, v, w) in edges {
            graph.add_weighted_edge(u, v, w);
        }
        graph
    }

    /// Adds the undirected edge `{u, v}` with weight `w`, overwriting a
    /// previous weight if the edge already exists.
    /// ** Panics if any id is `0` or `> n`, or if `u == v` **
    pub fn add_weighted_edge(&mut self, u: Node, v: Node, w: Weight) {
        assert!(u != v, "self-loops are not representable");
        self.set_arc(u, v, w);
        self.set_arc(v, u, w);
    }

    /// Adds the undirected edge `{u, v}` with weight `1`.
    /// ** Panics if any id is `0` or `> n`, or if `u == v` **
    pub fn add_edge(&mut self, u: Node, v: Node) {
        self.add_weighted_edge(u, v, 1);
    }

    /// Inserts or overwrites the single arc `(u, v)`.
    /// ** Panics if any id is `0` or `> n`, or if `u == v` **
    pub(crate) fn set_arc(&mut self, u: Node, v: Node, w: Weight) {
        assert!(u != v, "self-loops are not representable");
        assert!(
            v >= 1 && (v as usize) <= self.rows.len(),
            "node id out of range"
        );

        let row = &mut self.rows[(u - 1) as usize];
        match row.binary_search_by_key(&v, |&(x, _)| x) {
            Ok(pos) => row[pos].1 = w,
            Err(pos) => {
                row.insert(pos, (v, w));
                // The pair {u, v} is new unless the reverse arc already exists
                if !self.has_edge(v, u) {
                    self.num_edges += 1;
                }
            }
        }
    }

    fn row(&self, u: Node) -> &[(Node, Weight)] {
        &self.rows[(u - 1) as usize]
    }

    /// Returns the number of unordered pairs `{u, v}` connected by at least one arc
    pub fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    /// Maps every vertex `1..=n` to its ordered sequence of neighbor ids,
    /// including vertices with no neighbors at all.
    pub fn adjacency_map(&self) -> FxHashMap<Node, Vec<Node>> {
        self.vertices()
            .map(|u| (u, self.neighbors_of(u).collect_vec()))
            .collect()
    }

    /// Materializes the square `n x n` matrix snapshot. Row `i` describes
    /// vertex `i + 1`; `None` marks "no edge". The diagonal is always `None`.
    pub fn adjacency_matrix(&self) -> Vec<Vec<Option<Weight>>> {
        let n = self.rows.len();
        let mut matrix = vec![vec![None; n]; n];
        for u in self.vertices() {
            for (v, w) in self.neighbors_with_weights(u) {
                matrix[(u - 1) as usize][(v - 1) as usize] = Some(w);
            }
        }
        matrix
    }

    /// Returns *true* iff the stored arcs are not symmetric, i.e. some arc
    /// `(u, v, w)` has no matching reverse arc `(v, u, w)`.
    ///
    /// This is a diagnostic, not an enforced invariant: ingestion never
    /// rejects asymmetric input. The analysis algorithms assume symmetry and
    /// give unspecified results on graphs flagged here.
    pub fn is_directed(&self) -> bool {
        self.vertices().any(|u| {
            self.neighbors_with_weights(u)
                .any(|(v, w)| self.weight_of(v, u) != Some(w))
        })
    }
}

impl AdjacencyQueries for GraphModel {
    fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }

    fn neighbors_with_weights(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.row(u).iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.row(u).len() as NumNodes
    }

    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node {
        self.row(u)[i as usize].0
    }

    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        let row = self.row(u);
        row.binary_search_by_key(&v, |&(x, _)| x)
            .ok()
            .map(|pos| row[pos].1)
    }
}

impl GraphFromArcs for GraphModel {
    fn from_arcs(n: NumNodes, arcs: impl IntoIterator<Item = (Node, Node, Weight)>) -> Self {
        let mut graph = Self::new(n);
        for (u, v, w) in arcs {
            graph.set_arc(u, v, w);
        }
        graph
    }
}
