use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest row or column count a front end accepts during manual entry.
pub const DEFAULT_MAX_DIMENSION: usize = 100;

/// Largest element magnitude a front end accepts during manual entry.
pub const DEFAULT_VALUE_LIMIT: f64 = 1e100;

/// Bounds an input collaborator enforces before values reach the core.
///
/// Construction itself only rejects zero dimensions; these limits describe
/// the narrower contract the console honors while prompting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryLimits {
    pub max_rows: usize,
    pub max_cols: usize,
    pub value_limit: f64,
}

impl Default for EntryLimits {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_DIMENSION,
            max_cols: DEFAULT_MAX_DIMENSION,
            value_limit: DEFAULT_VALUE_LIMIT,
        }
    }
}

/// Which arithmetic step of the product exceeded what `f64` can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowKind {
    /// A single `A[i][k] * B[k][j]` term failed the reverse-division check.
    ElementProduct,
    /// A running-sum update moved against the sign of the added term.
    Accumulation,
}

impl fmt::Display for OverflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowKind::ElementProduct => f.write_str("element multiplication"),
            OverflowKind::Accumulation => f.write_str("summation"),
        }
    }
}

/// Common error type for matrix construction, access, and arithmetic.
#[derive(thiserror::Error, Debug)]
pub enum MatrixError {
    #[error("matrix dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("value grid does not match the declared {rows}x{cols} shape")]
    ShapeMismatch { rows: usize, cols: usize },
    #[error("index ({row}, {col}) lies outside a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("left operand has {lhs_cols} columns but right operand has {rhs_rows} rows")]
    DimensionMismatch { lhs_cols: usize, rhs_rows: usize },
    #[error("a {rows}x{cols} matrix does not fit in addressable memory")]
    SizeOverflow { rows: usize, cols: usize },
    #[error("arithmetic overflow during {0}")]
    ArithmeticOverflow(OverflowKind),
    #[error("matrix multiplication failed: {0}")]
    MultiplicationFailed(Box<MatrixError>),
}

pub type MatrixResult<T> = Result<T, MatrixError>;
