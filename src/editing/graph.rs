//! Bipartite graphs over the unified node-id space.
//!
//! Adjacency is kept in ordered maps so every iteration over nodes or
//! neighbors is deterministic. Invariant: every edge connects a row
//! node to a column node; the builders in this crate never create
//! row-row or column-column edges.

use std::collections::{BTreeMap, BTreeSet};

use crate::instance::WeightMatrix;

/// An undirected bipartite graph: a node set plus an edge set.
///
/// Used for the sign graph derived from a weight matrix as well as for
/// the bi-transitive graphs produced by the solvers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adj: BTreeMap<usize, BTreeSet<usize>>,
    num_edges: usize,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Derives the sign graph of `weights` restricted to `nodes`:
    /// edge (row, col) iff the corresponding weight is positive.
    ///
    /// Panics if a node id is outside `0..weights.num_nodes()`.
    pub fn from_weights(weights: &WeightMatrix, nodes: &[usize]) -> Self {
        let mut graph = Graph::new();
        for &node in nodes {
            assert!(node < weights.num_nodes(), "node id {} out of range", node);
            graph.add_node(node);
        }
        for &i in nodes {
            if !weights.is_row_node(i) {
                continue;
            }
            for &k in nodes {
                if weights.is_row_node(k) {
                    continue;
                }
                if weights.node_weight(i, k) > 0.0 {
                    graph.add_edge(i, k);
                }
            }
        }
        graph
    }

    pub fn add_node(&mut self, node: usize) {
        self.adj.entry(node).or_default();
    }

    /// Inserts the edge (u, v), adding missing endpoints.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        let inserted = self.adj.entry(u).or_default().insert(v);
        self.adj.entry(v).or_default().insert(u);
        if inserted {
            self.num_edges += 1;
        }
    }

    /// Removes a node and all its incident edges.
    pub fn remove_node(&mut self, node: usize) {
        if let Some(neighbors) = self.adj.remove(&node) {
            self.num_edges -= neighbors.len();
            for neighbor in neighbors {
                if let Some(set) = self.adj.get_mut(&neighbor) {
                    set.remove(&node);
                }
            }
        }
    }

    pub fn contains_node(&self, node: usize) -> bool {
        self.adj.contains_key(&node)
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj.get(&u).map_or(false, |set| set.contains(&v))
    }

    /// Neighbors of a node in ascending id order.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj.get(&node).into_iter().flatten().copied()
    }

    /// Nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.adj.keys().copied()
    }

    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }
}

/// Decomposes a graph into its connected components.
///
/// Each component is returned as an induced subgraph. Components are
/// ordered by their smallest node id; the union of their node sets is
/// the input node set and no edge crosses two components.
pub fn connected_components(graph: &Graph) -> Vec<Graph> {
    let mut components = vec![];
    let mut visited = BTreeSet::new();

    for start in graph.nodes() {
        if visited.contains(&start) {
            continue;
        }
        let mut component = Graph::new();
        let mut stack = vec![start];
        visited.insert(start);
        while let Some(node) = stack.pop() {
            component.add_node(node);
            for neighbor in graph.neighbors(node) {
                if node < neighbor {
                    component.add_edge(node, neighbor);
                } else {
                    component.add_edge(neighbor, node);
                }
                if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }
        components.push(component);
    }

    components
}

/// True iff the bipartite graph is a bi-clique: its edge count equals
/// the product of its partition sizes.
///
/// Nodes with id below `num_rows` form the row side.
pub fn is_bi_clique(graph: &Graph, num_rows: usize) -> bool {
    let size_left = graph.nodes().filter(|&node| node < num_rows).count();
    let size_right = graph.num_nodes() - size_left;
    graph.num_edges() == size_left * size_right
}
