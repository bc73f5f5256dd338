//! Terminal output of the pipeline: the bi-cluster list.

use std::fmt;

/// One bi-cluster: a set of row ids and a set of column ids, both in
/// matrix coordinates and sorted ascending. Every row is related to
/// every column of the same bi-cluster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiCluster {
    rows: Vec<usize>,
    cols: Vec<usize>,
}

impl BiCluster {
    pub fn new(mut rows: Vec<usize>, mut cols: Vec<usize>) -> Self {
        rows.sort_unstable();
        cols.sort_unstable();
        BiCluster { rows, cols }
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn cols(&self) -> &[usize] {
        &self.cols
    }

    /// A bi-cluster is a singleton iff one of its sides is empty.
    pub fn is_singleton(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }
}

impl fmt::Display for BiCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} x {:?}", self.rows, self.cols)
    }
}

/// A disjoint bi-clustering of an instance together with the edit cost
/// that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct BiClustering {
    num_rows: usize,
    num_cols: usize,
    row_membership: Vec<Option<usize>>,
    col_membership: Vec<Option<usize>>,
    bi_clusters: Vec<BiCluster>,
    obj_val: f64,
    is_optimal: bool,
}

impl BiClustering {
    pub fn new(num_rows: usize, num_cols: usize, obj_val: f64, is_optimal: bool) -> Self {
        BiClustering {
            num_rows,
            num_cols,
            row_membership: vec![None; num_rows],
            col_membership: vec![None; num_cols],
            bi_clusters: vec![],
            obj_val,
            is_optimal,
        }
    }

    /// Appends a bi-cluster and records the membership of its nodes.
    pub fn add_bi_cluster(&mut self, bi_cluster: BiCluster) {
        let id = self.bi_clusters.len();
        for &row in bi_cluster.rows() {
            self.row_membership[row] = Some(id);
        }
        for &col in bi_cluster.cols() {
            self.col_membership[col] = Some(id);
        }
        self.bi_clusters.push(bi_cluster);
    }

    pub fn bi_clusters(&self) -> &[BiCluster] {
        &self.bi_clusters
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Total absolute weight of the edits behind this bi-clustering.
    pub fn obj_val(&self) -> f64 {
        self.obj_val
    }

    /// True iff every subproblem was solved to proven optimality.
    pub fn is_optimal(&self) -> bool {
        self.is_optimal
    }

    /// Index of the bi-cluster containing a row, if any.
    pub fn row_membership(&self, row: usize) -> Option<usize> {
        self.row_membership[row]
    }

    /// Index of the bi-cluster containing a column, if any.
    pub fn col_membership(&self, col: usize) -> Option<usize> {
        self.col_membership[col]
    }

    /// Rows not assigned to any bi-cluster.
    pub fn unclustered_rows(&self) -> Vec<usize> {
        (0..self.num_rows)
            .filter(|&row| self.row_membership[row].is_none())
            .collect()
    }

    /// Columns not assigned to any bi-cluster.
    pub fn unclustered_cols(&self) -> Vec<usize> {
        (0..self.num_cols)
            .filter(|&col| self.col_membership[col].is_none())
            .collect()
    }
}
