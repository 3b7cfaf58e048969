//! # Matrix Core Library
//!
//! Provides a dense `f64` matrix value type with validated construction,
//! element access and arithmetic.

// Declare modules
pub mod dense_matrix;
pub mod error;
pub mod ops;
pub mod traits;

// Re-export public types
pub use dense_matrix::DenseMatrix;
pub use error::{MatrixError, Result};
pub use ops::{checked_add, checked_multiply, checked_subtract};
pub use traits::Matrix;
