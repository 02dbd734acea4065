use crate::*;

/// Read-only access to a weighted adjacency structure.
///
/// Node ids are 1-based; all neighbor enumerations follow ascending neighbor id.
/// This is the complete surface the analysis algorithms consume, so anything
/// implementing it can be searched for bridges and cut vertices.
pub trait AdjacencyQueries {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns an iterator over all vertex ids `1..=n` in ascending order
    fn vertices(&self) -> impl Iterator<Item = Node> {
        1..=self.number_of_nodes()
    }

    /// Returns an iterator over `(neighbor, weight)` pairs of a given vertex
    /// in ascending neighbor order.
    /// ** Panics if `u == 0 || u > n` **
    fn neighbors_with_weights(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns an iterator over the neighbors of a given vertex in ascending order.
    /// ** Panics if `u == 0 || u > n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbors_with_weights(u).map(|(v, _)| v)
    }

    /// Returns the number of neighbors of `u`.
    /// ** Panics if `u == 0 || u > n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the ith neighbor (0-indexed) of a given vertex.
    /// ** Panics if `u == 0 || u > n || i >= deg(u)` **
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node;

    /// Returns the weight of the arc `(u, v)` or `None` if it does not exist.
    /// ** Panics if `u == 0 || u > n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns *true* if the arc `(u, v)` exists in the graph.
    /// ** Panics if `u == 0 || u > n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight_of(u, v).is_some()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// Construction seam used by every ingestion path: build a graph from a fixed
/// node count and a sequence of weighted arcs.
///
/// Arcs are directed as given; symmetric input must provide both directions.
/// A later arc for the same ordered pair overwrites the earlier weight.
pub trait GraphFromArcs: Sized {
    /// Creates a graph with nodes `1..=n` and the given arcs
    fn from_arcs(n: NumNodes, arcs: impl IntoIterator<Item = (Node, Node, Weight)>) -> Self;
}
