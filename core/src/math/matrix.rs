use crate::math::overflow::OverflowHelper;
use crate::prelude::{MatrixError, MatrixResult};
use std::fmt;
use std::ops::Mul;

/// Owned, dense, row-major grid of `f64` elements.
///
/// Both dimensions are at least one for the lifetime of an instance, and the
/// backing vector always holds exactly `rows * cols` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Builds a `rows x cols` matrix with every element set to `0.0`.
    pub fn zeros(rows: usize, cols: usize) -> MatrixResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(MatrixError::SizeOverflow { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; len],
        })
    }

    /// Builds a matrix from a grid of rows.
    ///
    /// The grid must hold exactly `rows` rows of `cols` values each; a
    /// ragged grid is rejected even when its first row has the right width.
    pub fn from_rows(rows: usize, cols: usize, values: Vec<Vec<f64>>) -> MatrixResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions { rows, cols });
        }
        if values.len() != rows || values.iter().any(|row| row.len() != cols) {
            return Err(MatrixError::ShapeMismatch { rows, cols });
        }
        let mut matrix = Self::zeros(rows, cols)?;
        for (index, row) in values.into_iter().enumerate() {
            let start = index * cols;
            matrix.data[start..start + cols].copy_from_slice(&row);
        }
        Ok(matrix)
    }

    /// Builds the `order x order` identity matrix.
    pub fn identity(order: usize) -> MatrixResult<Self> {
        let mut matrix = Self::zeros(order, order)?;
        for index in 0..order {
            matrix.data[index * order + index] = 1.0;
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Reads the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> MatrixResult<f64> {
        self.check_bounds(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Overwrites the element at `(row, col)`; the only mutation a matrix
    /// supports after construction.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> MatrixResult<()> {
        self.check_bounds(row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Formats the matrix as a dimension header followed by one
    /// tab-separated line per row. Magnitudes outside `1e-4..1e16` are
    /// written in scientific notation.
    pub fn render(&self) -> String {
        let mut out = format!("Matrix {}x{}:\n", self.rows, self.cols);
        for row in self.data.chunks(self.cols) {
            let line = row
                .iter()
                .map(|&value| Self::render_element(value))
                .collect::<Vec<_>>()
                .join("\t");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    fn render_element(value: f64) -> String {
        let magnitude = value.abs();
        if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
            format!("{value:e}")
        } else {
            value.to_string()
        }
    }

    /// Computes `lhs * rhs` through the overflow-checked triple loop.
    ///
    /// Shape and result-size problems surface directly; arithmetic overflow
    /// found inside the loop is reported as `MultiplicationFailed` carrying
    /// the original cause. Neither operand is mutated and the result is a
    /// freshly allocated matrix.
    pub fn multiply(lhs: &Matrix, rhs: &Matrix) -> MatrixResult<Matrix> {
        if lhs.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                lhs_cols: lhs.cols,
                rhs_rows: rhs.rows,
            });
        }
        if lhs.rows.checked_mul(rhs.cols).is_none() {
            return Err(MatrixError::SizeOverflow {
                rows: lhs.rows,
                cols: rhs.cols,
            });
        }

        let mut product = Matrix::zeros(lhs.rows, rhs.cols)?;
        Self::fill_product(lhs, rhs, &mut product)
            .map_err(|cause| MatrixError::MultiplicationFailed(Box::new(cause)))?;
        Ok(product)
    }

    /// Row-major `(i, j)` then ascending `k`, so the guards see the same
    /// partial sums on every run.
    fn fill_product(lhs: &Matrix, rhs: &Matrix, out: &mut Matrix) -> MatrixResult<()> {
        for i in 0..lhs.rows {
            for j in 0..rhs.cols {
                let mut sum = 0.0;
                for k in 0..lhs.cols {
                    let term = OverflowHelper::checked_product(
                        lhs.data[i * lhs.cols + k],
                        rhs.data[k * rhs.cols + j],
                    )?;
                    sum = OverflowHelper::checked_sum(sum, term)?;
                }
                out.data[i * out.cols + j] = sum;
            }
        }
        Ok(())
    }

    fn check_bounds(&self, row: usize, col: usize) -> MatrixResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Mul for &Matrix {
    type Output = MatrixResult<Matrix>;

    fn mul(self, rhs: Self) -> Self::Output {
        Matrix::multiply(self, rhs)
    }
}
