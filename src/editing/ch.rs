//! Constructive heuristic for rendering a component bi-transitive.
//!
//! Implements the greedy heuristic CH of de Sousa Filho et al., "New
//! heuristics for the bicluster editing problem", Annals OR 258(2),
//! 2017. Pairs of a row node and a column node are ranked once by a
//! merge score estimating the benefit of seeding a bicluster at that
//! pair; biclusters are then peeled off a shrinking copy of the
//! subgraph in rank order until no edge is left.

use std::collections::BTreeSet;

use crate::editing::graph::Graph;
use crate::editing::solver::{editing_cost, Solution, Solver, SolverParams};
use crate::instance::WeightMatrix;

/// The greedy constructive heuristic. Never claims optimality.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstructiveHeuristic;

/// Row/column pair with its merge score.
struct ScoredPair {
    row: usize,
    col: usize,
    g: f64,
}

/// Nodes at distance exactly 0 or 2: the node's side of the bipartition
/// reachable through one shared neighbor. Contains `node` itself
/// whenever it has a neighbor.
fn second_neighborhood(graph: &Graph, node: usize) -> BTreeSet<usize> {
    let mut second = BTreeSet::new();
    for neighbor in graph.neighbors(node) {
        second.extend(graph.neighbors(neighbor));
    }
    second
}

/// Scores every (row, col) pair of the subgraph and sorts descending.
///
/// The sort is stable, so equal scores keep the row-major enumeration
/// order; together with the ordered adjacency this makes the whole
/// construction deterministic.
fn rank_pairs(weights: &WeightMatrix, subgraph: &Graph, rows: &[usize], cols: &[usize]) -> Vec<ScoredPair> {
    let second_of_col: Vec<BTreeSet<usize>> = cols
        .iter()
        .map(|&k| second_neighborhood(subgraph, k))
        .collect();

    // Positive weight mass incident to each row / column of the
    // component. These are the penalty terms of the merge score.
    let pos_row_sum: Vec<f64> = rows
        .iter()
        .map(|&i| {
            cols.iter()
                .map(|&l| weights.node_weight(i, l))
                .filter(|&w| w > 0.0)
                .sum()
        })
        .collect();
    let pos_col_sum: Vec<f64> = cols
        .iter()
        .map(|&k| {
            rows.iter()
                .map(|&j| weights.node_weight(j, k))
                .filter(|&w| w > 0.0)
                .sum()
        })
        .collect();

    let mut queue = Vec::with_capacity(rows.len() * cols.len());
    for (ri, &i) in rows.iter().enumerate() {
        let second_of_row = second_neighborhood(subgraph, i);
        for (ci, &k) in cols.iter().enumerate() {
            let n2k = &second_of_col[ci];

            // Seed edge plus weight mass consistent with the predicted
            // second-order neighborhoods.
            let mut g = weights.node_weight(i, k);
            g += n2k
                .iter()
                .filter(|&&l| l != k)
                .map(|&l| weights.node_weight(i, l))
                .sum::<f64>();
            g += second_of_row
                .iter()
                .filter(|&&j| j != i)
                .map(|&j| weights.node_weight(j, k))
                .sum::<f64>();

            // Positive edges leaving the predicted neighborhoods would
            // have to be cut.
            g -= pos_row_sum[ri];
            g += n2k
                .iter()
                .map(|&l| weights.node_weight(i, l))
                .filter(|&w| w > 0.0)
                .sum::<f64>();
            g -= pos_col_sum[ci];
            g += second_of_row
                .iter()
                .map(|&j| weights.node_weight(j, k))
                .filter(|&w| w > 0.0)
                .sum::<f64>();

            queue.push(ScoredPair { row: i, col: k, g });
        }
    }

    queue.sort_by(|a, b| b.g.total_cmp(&a.g));
    queue
}

impl Solver for ConstructiveHeuristic {
    fn solve(&self, weights: &WeightMatrix, subgraph: &Graph, _params: &SolverParams) -> Solution {
        let rows: Vec<usize> = subgraph
            .nodes()
            .filter(|&node| weights.is_row_node(node))
            .collect();
        let cols: Vec<usize> = subgraph
            .nodes()
            .filter(|&node| !weights.is_row_node(node))
            .collect();

        let queue = rank_pairs(weights, subgraph, &rows, &cols);

        // Peel biclusters off a shrinking copy of the subgraph. The
        // ranked queue is scanned with a monotone cursor; entries whose
        // endpoints were swallowed by an earlier bicluster are skipped,
        // never re-scored.
        let mut bi_transitive = Graph::new();
        let mut shrinking = subgraph.clone();
        let mut is_deleted = vec![false; weights.num_nodes()];
        let mut pos = 0;
        while shrinking.num_edges() > 0 {
            while is_deleted[queue[pos].row] || is_deleted[queue[pos].col] {
                pos += 1;
            }
            let (i, k) = (queue[pos].row, queue[pos].col);

            // The bicluster spans the seed pair and both current
            // neighborhoods.
            let mut bi_cluster_rows: BTreeSet<usize> = shrinking.neighbors(k).collect();
            bi_cluster_rows.insert(i);
            let mut bi_cluster_cols: BTreeSet<usize> = shrinking.neighbors(i).collect();
            bi_cluster_cols.insert(k);

            for &j in &bi_cluster_rows {
                for &l in &bi_cluster_cols {
                    bi_transitive.add_edge(j, l);
                }
            }
            for &node in bi_cluster_rows.iter().chain(bi_cluster_cols.iter()) {
                shrinking.remove_node(node);
                is_deleted[node] = true;
            }
            pos += 1;
        }

        // Whatever survived with no edges ends up as isolated nodes.
        for node in shrinking.nodes() {
            bi_transitive.add_node(node);
        }

        let obj_val = editing_cost(weights, subgraph, &bi_transitive);
        Solution {
            subgraph: bi_transitive,
            obj_val,
            is_optimal: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::editing::graph::{connected_components, is_bi_clique};

    fn solve(weights: &WeightMatrix) -> Solution {
        let nodes: Vec<usize> = (0..weights.num_nodes()).collect();
        let subgraph = Graph::from_weights(weights, &nodes);
        ConstructiveHeuristic.solve(weights, &subgraph, &SolverParams::default())
    }

    #[test]
    fn resolves_a_path_into_one_bicluster() {
        // Sign graph is the path col1 - row0 - col0 - row1, the minimal
        // conflict. CH must merge all four nodes into one bicluster and
        // pay the single missing cell.
        let weights = WeightMatrix::new(array![[1.0, 1.0], [1.0, -1.0]]).unwrap();
        let solution = solve(&weights);

        assert_eq!(solution.obj_val, 1.0);
        assert!(!solution.is_optimal);
        assert_eq!(solution.subgraph.num_edges(), 4);
        assert!(is_bi_clique(&solution.subgraph, 2));
        assert_eq!(solution.subgraph.nodes().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn keeps_a_connected_bi_transitive_graph_unchanged() {
        let weights = WeightMatrix::new(array![[1.0, 0.5], [0.5, 1.0]]).unwrap();
        let solution = solve(&weights);

        let nodes: Vec<usize> = (0..weights.num_nodes()).collect();
        assert_eq!(solution.subgraph, Graph::from_weights(&weights, &nodes));
        assert_eq!(solution.obj_val, 0.0);
        assert!(!solution.is_optimal);
    }

    #[test]
    fn output_decomposes_into_bi_cliques() {
        let weights = WeightMatrix::new(array![
            [0.8, 0.2, -0.5, 0.1],
            [0.4, -0.3, 0.9, -0.2],
            [0.6, 0.7, 0.3, -0.9]
        ])
        .unwrap();
        let solution = solve(&weights);

        for component in connected_components(&solution.subgraph) {
            assert!(is_bi_clique(&component, 3));
        }
    }

    #[test]
    fn construction_is_deterministic() {
        let weights = WeightMatrix::new(array![
            [0.8, 0.2, -0.5, 0.1],
            [0.4, -0.3, 0.9, -0.2],
            [0.6, 0.7, 0.3, -0.9]
        ])
        .unwrap();
        let first = solve(&weights);
        let second = solve(&weights);

        assert_eq!(first.subgraph, second.subgraph);
        assert_eq!(first.obj_val.to_bits(), second.obj_val.to_bits());
    }
}
