//! The pluggable subproblem solver seam.
//!
//! Every solver receives one connected component of the sign graph and
//! must return a bi-transitive subgraph over the same node set, the
//! edit cost it paid, and whether the solution is provably optimal.
//! The orchestrator only ever talks to this trait; an integer-program
//! backend can be plugged in from outside the crate through it.

use crate::editing::graph::Graph;
use crate::instance::WeightMatrix;

/// Result of solving one subproblem.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Bi-transitive graph over the component's node set.
    pub subgraph: Graph,
    /// Total absolute weight of the edits that were applied.
    pub obj_val: f64,
    /// True only if the solver proved optimality.
    pub is_optimal: bool,
}

/// Solver knobs. Only exact backends look at these; the constructive
/// heuristic ignores them.
#[derive(Clone, Copy, Debug)]
pub struct SolverParams {
    /// Time limit in seconds, unlimited if not positive.
    pub time_limit: f64,
    /// Tune the model before optimizing.
    pub tune: bool,
}

impl Default for SolverParams {
    fn default() -> Self {
        SolverParams {
            time_limit: 60.0,
            tune: false,
        }
    }
}

/// A subproblem solver.
///
/// `Sync` so independent components can be dispatched on a thread pool.
pub trait Solver: Sync {
    /// Renders the connected subgraph bi-transitive.
    fn solve(&self, weights: &WeightMatrix, subgraph: &Graph, params: &SolverParams) -> Solution;
}

/// Total absolute weight of the cells whose edge presence differs
/// between `before` and `after`.
///
/// Both graphs must cover the same node set; the row/column split is
/// taken from `before`.
pub fn editing_cost(weights: &WeightMatrix, before: &Graph, after: &Graph) -> f64 {
    let mut obj_val = 0.0;
    for i in before.nodes().filter(|&node| weights.is_row_node(node)) {
        for k in before.nodes().filter(|&node| !weights.is_row_node(node)) {
            if before.has_edge(i, k) != after.has_edge(i, k) {
                obj_val += weights.node_weight(i, k).abs();
            }
        }
    }
    obj_val
}
