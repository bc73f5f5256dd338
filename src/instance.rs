//! Problem instance: a dense real weight matrix over rows and columns.
//!
//! The instance doubles as the translation table between matrix
//! coordinates and the unified node-id space used by the graphs: node
//! ids `0..num_rows` are rows, ids `num_rows..num_rows+num_cols` are
//! columns shifted by `num_rows`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ndarray::Array2;

use crate::error::{Error, Result};

/// A validated bi-cluster editing instance.
///
/// The sign of a cell encodes edge presence in the sign graph (positive
/// means present), its magnitude the cost of flipping that presence.
/// The matrix is immutable once constructed.
#[derive(Clone, Debug)]
pub struct WeightMatrix {
    weights: Array2<f64>,
}

impl WeightMatrix {
    /// Validates and wraps a weight matrix.
    ///
    /// Rejects empty matrices and non-finite cells before any graph is
    /// built from the instance.
    pub fn new(weights: Array2<f64>) -> Result<Self> {
        if weights.nrows() == 0 || weights.ncols() == 0 {
            return Err(Error::EmptyMatrix);
        }
        for ((row, col), &value) in weights.indexed_iter() {
            if !value.is_finite() {
                return Err(Error::NonFiniteWeight { row, col, value });
            }
        }
        Ok(WeightMatrix { weights })
    }

    /// Loads a dense matrix from a delimited text file.
    ///
    /// One matrix row per line, cells separated by `delimiter`. Lines
    /// starting with `#` are skipped. All rows must have the same
    /// number of cells.
    pub fn load_csv(path: impl AsRef<Path>, delimiter: &str) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut rows: Vec<Vec<f64>> = vec![];
        let mut num_cols = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            let mut cells = vec![];
            for value in line.split(delimiter) {
                let value = value.trim();
                let parsed = value.parse::<f64>().map_err(|_| Error::ParseMatrix {
                    line: index + 1,
                    reason: format!("cannot parse '{}' as a number", value),
                })?;
                cells.push(parsed);
            }
            if rows.is_empty() {
                num_cols = cells.len();
            } else if cells.len() != num_cols {
                return Err(Error::ParseMatrix {
                    line: index + 1,
                    reason: format!("expected {} cells, found {}", num_cols, cells.len()),
                });
            }
            rows.push(cells);
        }

        let num_rows = rows.len();
        if num_rows == 0 || num_cols == 0 {
            return Err(Error::EmptyMatrix);
        }
        let mut weights = Array2::zeros((num_rows, num_cols));
        for (i, cells) in rows.iter().enumerate() {
            for (j, &value) in cells.iter().enumerate() {
                weights[[i, j]] = value;
            }
        }
        WeightMatrix::new(weights)
    }

    pub fn num_rows(&self) -> usize {
        self.weights.nrows()
    }

    pub fn num_cols(&self) -> usize {
        self.weights.ncols()
    }

    /// Number of nodes in the unified id space: rows then columns.
    pub fn num_nodes(&self) -> usize {
        self.num_rows() + self.num_cols()
    }

    /// Weight of the cell at matrix coordinates.
    pub fn weight(&self, row: usize, col: usize) -> f64 {
        self.weights[[row, col]]
    }

    /// Weight of the cell addressed by a row node and a column node.
    pub fn node_weight(&self, row_node: usize, col_node: usize) -> f64 {
        self.weights[[row_node, self.node_to_col(col_node)]]
    }

    /// True iff the node id denotes a row of the instance.
    pub fn is_row_node(&self, node: usize) -> bool {
        node < self.num_rows()
    }

    /// Node id of a column.
    pub fn col_to_node(&self, col: usize) -> usize {
        self.num_rows() + col
    }

    /// Column index of a column node.
    pub fn node_to_col(&self, node: usize) -> usize {
        node - self.num_rows()
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use ndarray::array;

    use super::*;

    #[test]
    fn node_ids_partition_rows_and_cols() {
        let weights = WeightMatrix::new(array![[1.0, -1.0, 0.5], [0.0, 2.0, -3.0]]).unwrap();
        assert_eq!(weights.num_nodes(), 5);
        assert!(weights.is_row_node(0));
        assert!(weights.is_row_node(1));
        assert!(!weights.is_row_node(2));
        assert_eq!(weights.col_to_node(0), 2);
        assert_eq!(weights.node_to_col(4), 2);
        assert_eq!(weights.node_weight(1, 3), 2.0);
    }

    #[test]
    fn rejects_nan_cells() {
        let result = WeightMatrix::new(array![[1.0, f64::NAN]]);
        assert!(matches!(
            result,
            Err(Error::NonFiniteWeight { row: 0, col: 1, .. })
        ));
    }

    #[test]
    fn rejects_empty_matrix() {
        let result = WeightMatrix::new(Array2::zeros((0, 3)));
        assert!(matches!(result, Err(Error::EmptyMatrix)));
    }

    #[test]
    fn loads_delimited_matrix() {
        let path = std::env::temp_dir().join("biclust_edit_load_csv.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "# toy instance").unwrap();
        writeln!(file, "1.0 -0.5").unwrap();
        writeln!(file, "-2.0 3.0").unwrap();
        drop(file);

        let weights = WeightMatrix::load_csv(&path, " ").unwrap();
        assert_eq!(weights.num_rows(), 2);
        assert_eq!(weights.num_cols(), 2);
        assert_eq!(weights.weight(1, 1), 3.0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn reports_ragged_rows() {
        let path = std::env::temp_dir().join("biclust_edit_ragged.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "1.0 2.0").unwrap();
        writeln!(file, "3.0").unwrap();
        drop(file);

        let result = WeightMatrix::load_csv(&path, " ");
        assert!(matches!(result, Err(Error::ParseMatrix { line: 2, .. })));
        std::fs::remove_file(&path).ok();
    }
}
