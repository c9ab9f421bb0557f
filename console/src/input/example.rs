use matcore::{Matrix, MatrixResult};

/// Fixed operand pair used by the demonstration path.
pub fn example_pair() -> MatrixResult<(Matrix, Matrix)> {
    let lhs = Matrix::from_rows(2, 3, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
    let rhs = Matrix::from_rows(3, 2, vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]])?;
    Ok((lhs, rhs))
}
