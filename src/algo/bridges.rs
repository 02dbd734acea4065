use fixedbitset::FixedBitSet;

use super::*;

/// Computes all **bridges** of an undirected graph: edges whose removal
/// increases the number of connected components.
pub trait Bridges {
    /// Returns the bridges as normalized edges `(u, v)` with `u < v`,
    /// sorted ascending. The result only depends on the graph, so repeated
    /// calls yield identical sequences.
    fn compute_bridges(&self) -> Vec<Edge>;
}

impl<G: AdjacencyQueries> Bridges for G {
    fn compute_bridges(&self) -> Vec<Edge> {
        BridgeSearch::new(self).compute()
    }
}

/// Call-scoped state of a single bridge computation
struct BridgeSearch<'a, G: AdjacencyQueries> {
    graph: &'a G,
    visited: FixedBitSet,
    info: Vec<NodeInfo>,
    time: Node,
    bridges: Vec<Edge>,
}

impl<'a, G: AdjacencyQueries> BridgeSearch<'a, G> {
    fn new(graph: &'a G) -> Self {
        let slots = graph.number_of_nodes() as usize + 1;
        Self {
            graph,
            visited: FixedBitSet::with_capacity(slots),
            info: vec![NodeInfo::default(); slots],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn compute(mut self) -> Vec<Edge> {
        for u in self.graph.vertices() {
            if !self.visited.contains(u as usize) {
                self.traverse_tree(u);
            }
        }

        self.bridges.sort_unstable();
        self.bridges
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
    /// Tree edges propagate their child's low value to the parent on frame
    /// pop; a tree edge `(p, u)` is a bridge exactly if `low[u]` stays above
    /// `disc[p]`. A back-edge only tightens `low[u]` if it does not lead to
    /// the DFS parent itself — comparing against the actual parent vertex,
    /// not just "already visited", is what keeps the tree edge from being
    /// miscounted as a cycle.
    fn traverse_tree(&mut self, root: Node) {
        self.discover(root, None);
        let mut stack = vec![StackFrame::new(root)];

        while let Some(frame) = stack.last_mut() {
            let u = frame.node;

            if frame.next_neighbor < self.graph.degree_of(u) {
                let v = self.graph.ith_neighbor(u, frame.next_neighbor);
                frame.next_neighbor += 1;

                if !self.visited.contains(v as usize) {
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

                    if low_u > self.info[p as usize].discovery {
                        self.bridges.push(Edge(p, u).normalized());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::GeneratorSubstructures, model::GraphModel, testing::*};

    #[test]
    fn every_path_edge_is_a_bridge() {
        for n in [2, 5, 10, 15] {
            let mut graph = GraphModel::new(n);
            graph.connect_path(1..=n);

            assert_eq!(
                graph.compute_bridges(),
                (1..n).map(|u| Edge(u, u + 1)).collect_vec()
            );
        }
    }

    #[test]
    fn cycles_have_no_bridges() {
        for n in [3, 4, 10] {
            let mut graph = GraphModel::new(n);
            graph.connect_cycle(1..=n);

            assert!(graph.compute_bridges().is_empty());
        }
    }

    #[test]
    fn every_star_edge_is_a_bridge() {
        let mut graph = GraphModel::new(6);
        graph.connect_star(1, 2..=6);

        assert_eq!(
            graph.compute_bridges(),
            (2..=6).map(|v| Edge(1, v)).collect_vec()
        );
    }

    #[test]
    fn bridge_between_two_triangles() {
        // Two triangles joined by the single edge (2, 4)
        let graph = model_from_edges(6, &[(1, 2), (1, 3), (3, 2), (2, 4), (4, 5), (5, 6), (6, 4)]);

        assert_eq!(graph.compute_bridges(), vec![Edge(2, 4)]);
    }

    #[test]
    fn components_are_analyzed_independently() {
        // A triangle {1,2,3} plus an isolated edge {4,5} plus singleton 6
        let graph = model_from_edges(6, &[(1, 2), (2, 3), (3, 1), (4, 5)]);

        assert_eq!(graph.compute_bridges(), vec![Edge(4, 5)]);
    }

    #[test]
    fn trivial_graphs_have_no_bridges() {
        assert!(GraphModel::new(0).compute_bridges().is_empty());
        assert!(GraphModel::new(1).compute_bridges().is_empty());
        assert!(GraphModel::new(7).compute_bridges().is_empty());
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let graph = model_from_edges(5, &[(1, 2), (2, 3), (3, 1), (3, 4), (4, 5)]);

        let first = graph.compute_bridges();
        let second = graph.compute_bridges();
        assert_eq!(first, second);
        assert_eq!(first, vec![Edge(3, 4), Edge(4, 5)]);
    }

    #[test]
    fn long_paths_do_not_overflow_the_stack() {
        let n = 200_000;
        let mut graph = GraphModel::new(n);
        graph.connect_path(1..=n);

        assert_eq!(graph.compute_bridges().len(), n as usize - 1);
    }

    #[test]
    fn cycle_edges_are_never_bridges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [5 as NumNodes, 20, 50] {
            for _ in 0..10 {
                // A Hamiltonian cycle plus random chords: every edge lies on
                // a cycle, so the graph is bridge-free
                let mut graph = GraphModel::new(n);
                graph.connect_cycle(1..=n);
                for _ in 0..n {
                    let u = rng.random_range(1..=n);
                    let v = rng.random_range(1..=n);
                    if u != v && !graph.has_edge(u, v) {
                        graph.add_edge(u, v);
                    }
                }

                assert!(graph.compute_bridges().is_empty());
            }
        }
    }

    #[test]
    fn reported_bridges_match_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [4 as NumNodes, 8, 16] {
            for _ in 0..20 {
                let graph = random_graph(rng, n, 2 * n);
                let bridges = graph.compute_bridges();
                let base = num_components(&graph, None, None);

                for u in graph.vertices() {
                    for v in graph.neighbors_of(u).filter(|&v| u < v).collect_vec() {
                        let severed = num_components(&graph, None, Some(Edge(u, v)));
                        assert_eq!(
                            severed > base,
                            bridges.contains(&Edge(u, v)),
                            "edge ({u},{v}) misclassified for n={n}"
                        );
                    }
                }
            }
        }
    }
}
