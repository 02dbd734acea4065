/*!
# Substructure Generators

Utility methods to connect common motifs (paths, cycles, stars) inside an
already constructed [`GraphModel`](crate::model::GraphModel). Useful when
building instances with known bridge/cut-vertex structure, e.g. for tests or
benchmarks. All generated edges have weight `1`.
*/

use itertools::Itertools;

use crate::{model::GraphModel, node::Node};

/// Trait for connecting deterministic **substructures** inside an existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are
    /// connected by edges and the last node is connected back to the first.
    ///
    /// ** Panics if fewer than three nodes are given ** (a shorter cycle would
    /// require a self-loop or a parallel edge)
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects every leaf to the center, forming a **star**
    fn connect_star<L>(&mut self, center: Node, leaves: L)
    where
        L: IntoIterator<Item = Node>;
}

impl GeneratorSubstructures for GraphModel {
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        let first = iter.next().expect("a cycle needs at least three nodes");
        let mut prev = first;
        let mut len = 1;
        for cur in iter {
            self.add_edge(prev, cur);
            prev = cur;
            len += 1;
        }
        assert!(len >= 3, "a cycle needs at least three nodes");

        self.add_edge(prev, first);
    }

    fn connect_star<L>(&mut self, center: Node, leaves: L)
    where
        L: IntoIterator<Item = Node>,
    {
        for leaf in leaves {
            self.add_edge(center, leaf);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ops::AdjacencyQueries;

    #[test]
    fn connect_path_links_consecutive_nodes() {
        let mut graph = GraphModel::new(4);
        graph.connect_path([1, 3, 2, 4]);

        assert!(graph.has_edge(1, 3));
        assert!(graph.has_edge(3, 2));
        assert!(graph.has_edge(2, 4));
        assert_eq!(graph.number_of_edges(), 3);

        let mut empty = GraphModel::new(4);
        empty.connect_path([]);
        empty.connect_path([2]);
        assert_eq!(empty.number_of_edges(), 0);
    }

    #[test]
    fn connect_cycle_closes_the_loop() {
        let mut graph = GraphModel::new(4);
        graph.connect_cycle([1, 2, 3, 4]);

        assert_eq!(graph.number_of_edges(), 4);
        assert!(graph.has_edge(4, 1));
    }

    #[test]
    #[should_panic]
    fn too_short_cycle_panics() {
        let mut graph = GraphModel::new(4);
        graph.connect_cycle([1, 2]);
    }

    #[test]
    fn connect_star_links_all_leaves_to_the_center() {
        let mut graph = GraphModel::new(5);
        graph.connect_star(1, 2..=5);

        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.degree_of(1), 4);
        for leaf in 2..=5 {
            assert_eq!(graph.degree_of(leaf), 1);
        }
    }
}
