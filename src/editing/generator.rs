//! Random instance generation.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::instance::WeightMatrix;

/// Generates a random instance whose cells are uniform in [0, 1) minus
/// `threshold`, so the expected sign-graph density shrinks as the
/// threshold grows.
///
/// The generator is seeded, identical arguments reproduce the same
/// instance.
pub fn random_weights(num_rows: usize, num_cols: usize, threshold: f64, seed: u64) -> Result<WeightMatrix> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut weights = Array2::zeros((num_rows, num_cols));
    for i in 0..num_rows {
        for j in 0..num_cols {
            weights[[i, j]] = rng.gen_range(0.0..1.0) - threshold;
        }
    }
    WeightMatrix::new(weights)
}
