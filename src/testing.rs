//! Shared helpers for the test suite: model builders, seeded random graphs,
//! and a brute-force component counter used to cross-check the DFS results
//! against the literal definitions of "bridge" and "cut vertex".

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use rand::Rng;

use crate::{model::GraphModel, ops::*, *};

/// Builds a model with nodes `1..=n` and the given unweighted edges
pub fn model_from_edges(n: NumNodes, edges: &[(Node, Node)]) -> GraphModel {
    GraphModel::from_weighted_edges(n, edges.iter().map(|&(u, v)| (u, v, 1)))
}

/// Creates a graph with at most `m_ub` random edges on nodes `1..=n`
pub fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> GraphModel {
    let mut graph = GraphModel::new(n);
    for _ in 0..m_ub {
        let u = rng.random_range(1..=n);
        let v = rng.random_range(1..=n);
        if u != v && !graph.has_edge(u, v) {
            graph.add_edge(u, v);
        }
    }
    graph
}

/// Counts the connected components of the graph, optionally pretending that a
/// vertex or an edge has been removed. This is the definitional ground truth
/// the analysis algorithms are checked against.
pub fn num_components(
    graph: &GraphModel,
    removed_vertex: Option<Node>,
    removed_edge: Option<Edge>,
) -> usize {
    let skip_edge = removed_edge.map(|e| e.normalized());
    let mut seen = FixedBitSet::with_capacity(graph.number_of_nodes() as usize + 1);
    let mut components = 0;

    for root in graph.vertices() {
        if seen.contains(root as usize) || removed_vertex == Some(root) {
            continue;
        }
        components += 1;

        let mut queue = VecDeque::from([root]);
        seen.insert(root as usize);
        while let Some(u) = queue.pop_front() {
            for v in graph.neighbors_of(u) {
                if seen.contains(v as usize)
                    || removed_vertex == Some(v)
                    || skip_edge == Some(Edge(u, v).normalized())
                {
                    continue;
                }
                seen.insert(v as usize);
                queue.push_back(v);
            }
        }
    }

    components
}
