/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve fewer than `2^32` nodes.
Nodes carry the **1-based** ids of the input formats directly: a graph with `n`
nodes has vertices `1..=n`, and every id that appears in results (bridge
endpoints, cut vertices) is the same id that appeared in the input text.
*/

/// Nodes are numbered `1` to `n` where `n` is the number of nodes in the graph
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;
