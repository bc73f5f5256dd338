//! Error types for biclust-edit.

use thiserror::Error;

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported to the user of the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The weight matrix has a zero dimension.
    #[error("weight matrix must have at least one row and one column")]
    EmptyMatrix,

    /// A cell of the weight matrix is NaN or infinite.
    #[error("non-finite weight {value} at row {row}, column {col}")]
    NonFiniteWeight {
        /// Row index of the offending cell.
        row: usize,
        /// Column index of the offending cell.
        col: usize,
        /// The rejected value.
        value: f64,
    },

    /// The solver selector does not name a known algorithm.
    #[error("unknown solver name '{0}', expected 'CH'/'heuristic' or 'ILP'/'exact'")]
    UnknownSolver(String),

    /// A matrix file could not be parsed.
    #[error("invalid matrix file, line {line}: {reason}")]
    ParseMatrix {
        /// 1-based line number in the input file.
        line: usize,
        /// What went wrong on that line.
        reason: String,
    },

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
