//! Dense-matrix core for the overflow-checked product console.
//!
//! The math module owns the matrix container and its guarded arithmetic,
//! the prelude carries the shared error taxonomy and input contract, and
//! telemetry provides the logging and counting used around each product.

pub mod math;
pub mod prelude;
pub mod telemetry;

pub use math::Matrix;
pub use prelude::{EntryLimits, MatrixError, MatrixResult};
