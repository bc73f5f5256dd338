//! biclust-edit - bi-cluster editing for weighted bipartite instances.
//!
//! Given a dense real weight matrix over rows and columns, the crate
//! partitions rows and columns into disjoint bi-clusters by editing the
//! sign-induced bipartite graph (edge present iff the weight is
//! positive) into a disjoint union of complete bipartite subgraphs at
//! minimum total absolute edit weight.
//!
//! The instance is split into the connected components of its sign
//! graph; each component is rendered bi-transitive by a pluggable
//! [`Solver`] - the built-in [`ConstructiveHeuristic`], or an exact
//! integer-program backend supplied by the caller - and the merged
//! result is read back as the final bi-cluster list.
//!
//! # Example
//!
//! ```
//! use biclust_edit::{compute_bi_clusters, ConstructiveHeuristic, SolverParams, WeightMatrix};
//! use ndarray::array;
//!
//! // A path in the sign graph: the minimal non-bi-transitive conflict.
//! let weights = WeightMatrix::new(array![[1.0, 1.0], [1.0, -1.0]]).unwrap();
//! let result = compute_bi_clusters(&weights, &ConstructiveHeuristic, &SolverParams::default());
//!
//! assert_eq!(result.bi_clusters().len(), 1);
//! assert_eq!(result.obj_val(), 1.0);
//! assert!(!result.is_optimal());
//! ```

pub mod common;
pub mod config;
pub mod editing;
pub mod error;
pub mod instance;

pub use config::{Algorithm, SolverName};
pub use editing::biclust::{BiCluster, BiClustering};
pub use editing::ch::ConstructiveHeuristic;
pub use editing::generator::random_weights;
pub use editing::graph::{connected_components, is_bi_clique, Graph};
pub use editing::solver::{editing_cost, Solution, Solver, SolverParams};
pub use editing::xml::save_bi_clusters_as_xml;
pub use editing::compute_bi_clusters;
pub use error::{Error, Result};
pub use instance::WeightMatrix;
