//! The bi-cluster editing pipeline.
//!
//! A weight matrix induces a bipartite sign graph; rendering it
//! bi-transitive at minimum absolute edit weight yields a disjoint
//! bi-clustering of rows and columns. The pipeline decomposes the sign
//! graph into connected components, solves each independently with the
//! configured [`Solver`], merges the per-component bi-transitive
//! graphs and reads the final bi-clusters off the merged graph.

pub mod biclust;
pub mod ch;
pub mod generator;
pub mod graph;
pub mod solver;
pub mod xml;

use rayon::prelude::*;

pub use biclust::{BiCluster, BiClustering};
pub use ch::ConstructiveHeuristic;
pub use graph::{connected_components, is_bi_clique, Graph};
pub use solver::{editing_cost, Solution, Solver, SolverParams};

use crate::instance::WeightMatrix;

/// Solves the bi-cluster editing problem for a whole instance.
///
/// Connected components of the sign graph are independent subproblems:
/// joining two of them could only ever add positive edit weight, so
/// each is handed to the solver on its own (and in parallel, since
/// their node sets are disjoint). Components that consist of a single
/// isolated node skip the solver and become singleton bi-clusters at
/// zero cost.
///
/// The returned clustering is optimal only if every non-trivial
/// component was solved to proven optimality.
pub fn compute_bi_clusters(
    weights: &WeightMatrix,
    solver: &dyn Solver,
    params: &SolverParams,
) -> BiClustering {
    let nodes: Vec<usize> = (0..weights.num_nodes()).collect();
    let sign_graph = Graph::from_weights(weights, &nodes);
    let components = connected_components(&sign_graph);

    let solutions: Vec<Solution> = components
        .par_iter()
        .map(|component| {
            if component.num_nodes() <= 1 {
                Solution {
                    subgraph: component.clone(),
                    obj_val: 0.0,
                    is_optimal: true,
                }
            } else {
                solver.solve(weights, component, params)
            }
        })
        .collect();

    let mut obj_val = 0.0;
    let mut is_optimal = true;
    let mut merged = Graph::new();
    for solution in &solutions {
        obj_val += solution.obj_val;
        is_optimal = is_optimal && solution.is_optimal;
        for node in solution.subgraph.nodes() {
            merged.add_node(node);
            for neighbor in solution.subgraph.neighbors(node) {
                if node < neighbor {
                    merged.add_edge(node, neighbor);
                }
            }
        }
    }

    // Each component of the merged graph is one bicluster by
    // construction of the solvers.
    let mut result = BiClustering::new(weights.num_rows(), weights.num_cols(), obj_val, is_optimal);
    for component in connected_components(&merged) {
        debug_assert!(is_bi_clique(&component, weights.num_rows()));
        let rows: Vec<usize> = component
            .nodes()
            .filter(|&node| weights.is_row_node(node))
            .collect();
        let cols: Vec<usize> = component
            .nodes()
            .filter(|&node| !weights.is_row_node(node))
            .map(|node| weights.node_to_col(node))
            .collect();
        result.add_bi_cluster(BiCluster::new(rows, cols));
    }
    result
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::editing::generator::random_weights;

    fn heuristic(weights: &WeightMatrix) -> BiClustering {
        compute_bi_clusters(weights, &ConstructiveHeuristic, &SolverParams::default())
    }

    /// Rebuilds the union bi-transitive graph of a clustering.
    fn union_graph(weights: &WeightMatrix, result: &BiClustering) -> Graph {
        let mut graph = Graph::new();
        for node in 0..weights.num_nodes() {
            graph.add_node(node);
        }
        for bi_cluster in result.bi_clusters() {
            for &row in bi_cluster.rows() {
                for &col in bi_cluster.cols() {
                    graph.add_edge(row, weights.col_to_node(col));
                }
            }
        }
        graph
    }

    #[test]
    fn all_negative_matrix_yields_singletons() {
        let weights = WeightMatrix::new(array![[-1.0, -0.5], [-0.25, -2.0]]).unwrap();
        let result = heuristic(&weights);

        assert_eq!(result.bi_clusters().len(), 4);
        assert!(result.bi_clusters().iter().all(BiCluster::is_singleton));
        assert_eq!(result.obj_val(), 0.0);
        // Nothing was sent to the heuristic, so nothing spoiled optimality.
        assert!(result.is_optimal());
    }

    #[test]
    fn bi_transitive_input_is_returned_unchanged() {
        let weights = WeightMatrix::new(array![[1.0, -1.0], [-1.0, 1.0]]).unwrap();
        let result = heuristic(&weights);

        assert_eq!(result.obj_val(), 0.0);
        assert!(!result.is_optimal());
        assert_eq!(result.bi_clusters().len(), 2);
        assert_eq!(result.bi_clusters()[0], BiCluster::new(vec![0], vec![0]));
        assert_eq!(result.bi_clusters()[1], BiCluster::new(vec![1], vec![1]));
    }

    #[test]
    fn minimal_conflict_costs_the_missing_cell() {
        let weights = WeightMatrix::new(array![[1.0, 1.0], [1.0, -1.0]]).unwrap();
        let result = heuristic(&weights);

        assert_eq!(result.obj_val(), 1.0);
        assert_eq!(result.bi_clusters().len(), 1);
        assert_eq!(result.bi_clusters()[0], BiCluster::new(vec![0, 1], vec![0, 1]));
    }

    #[test]
    fn every_node_lands_in_exactly_one_bi_cluster() {
        let weights = random_weights(12, 9, 0.6, 7).unwrap();
        let result = heuristic(&weights);

        assert!(result.unclustered_rows().is_empty());
        assert!(result.unclustered_cols().is_empty());
        let total: usize = result
            .bi_clusters()
            .iter()
            .map(|b| b.rows().len() + b.cols().len())
            .sum();
        assert_eq!(total, weights.num_nodes());
    }

    #[test]
    fn union_graph_decomposes_into_bi_cliques() {
        let weights = random_weights(10, 14, 0.5, 42).unwrap();
        let result = heuristic(&weights);

        let graph = union_graph(&weights, &result);
        for component in connected_components(&graph) {
            assert!(is_bi_clique(&component, weights.num_rows()));
        }
    }

    #[test]
    fn reported_cost_matches_recomputed_cost() {
        let weights = random_weights(11, 8, 0.55, 3).unwrap();
        let result = heuristic(&weights);

        let nodes: Vec<usize> = (0..weights.num_nodes()).collect();
        let sign_graph = Graph::from_weights(&weights, &nodes);
        let recomputed = editing_cost(&weights, &sign_graph, &union_graph(&weights, &result));
        assert!((result.obj_val() - recomputed).abs() < 1e-9);
    }

    #[test]
    fn pipeline_is_deterministic() {
        let weights = random_weights(13, 10, 0.5, 99).unwrap();
        let first = heuristic(&weights);
        let second = heuristic(&weights);

        assert_eq!(first.bi_clusters(), second.bi_clusters());
        assert_eq!(first.obj_val().to_bits(), second.obj_val().to_bits());
    }
}
