/*!
`bridgecut` analyzes **undirected**, possibly **weighted**, possibly
**disconnected** graphs for the two classic single-point-of-failure
structures:

- **Bridges**: edges whose removal disconnects the graph,
- **Cut vertices** (articulation points): vertices whose removal increases
  the number of connected components.

Both are derived with Tarjan's discovery-time/low-link DFS technique, applied
once per concern over the same immutable model.

# Representation

Nodes keep the **1-based** ids of the input text: a graph with `n` nodes has
vertices `1..=n`, and results report the very ids that appeared in the input.
The canonical model ([`GraphModel`](model::GraphModel)) stores one sorted
weighted neighborhood per vertex and treats "no edge" as the absence of an
entry rather than a sentinel weight, so zero-weight edges are representable.
The square matrix view remains available as a snapshot for reporting.

# Ingestion

Three textual formats are normalized into the model, selected by a
[`GraphFormat`](io::GraphFormat) tag (see [`io`] for the exact line shapes):

- `edge-list` — `u v [w]` per line, node count inferred from the maximum id,
- `adjacency-matrix` — `n` rows of `n` integers, `0` meaning "no edge",
- `adjacency-list` — `n` rows of neighbor ids, unweighted.

The model is built once by a load call and queried read-only thereafter; both
analyses allocate their DFS bookkeeping per call and never share state.

# Usage

```rust
use bridgecut::{prelude::*, algo::*, io::*};

let graph = GraphModel::try_from_str("1 2\n2 3\n3 1\n3 4\n", GraphFormat::EdgeList).unwrap();

assert_eq!(graph.compute_bridges(), vec![Edge(3, 4)]);
assert_eq!(graph.compute_cut_vertices(), vec![3]);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod model;
pub mod node;
pub mod ops;

#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `bridgecut::prelude` includes the node/edge definitions, the error type,
/// the graph model and the query traits.
pub mod prelude {
    pub use super::{edge::*, error::*, model::*, node::*, ops::*};
}
