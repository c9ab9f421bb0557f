pub mod matrix;
pub mod overflow;

pub use matrix::Matrix;
pub use overflow::OverflowHelper;
