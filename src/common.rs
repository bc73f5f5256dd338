use ndarray::Array2;

/// Prints a matrix with aligned, fixed-precision cells. Meant for
/// eyeballing small instances.
pub fn print_matrix(matrix: &Array2<f64>) {
    let rows = matrix.shape()[0];
    let cols = matrix.shape()[1];

    for i in 0..rows {
        for j in 0..cols {
            print!("{:>7.2}", matrix[[i, j]]);
            if j < cols - 1 {
                print!(" ");
            }
        }
        println!();
    }
}
