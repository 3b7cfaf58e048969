//! Operator forms of the matrix arithmetic.
//!
//! The `checked_*` functions accept possibly-absent operands, as handed over
//! by an embedding program, and validate them before delegating to the named
//! methods on [`DenseMatrix`]. The `+`, `-` and `*` operators on matrices go
//! through the same checks and yield a `Result`.

use std::ops::{Add, Mul, Sub};

use crate::dense_matrix::DenseMatrix;
use crate::error::{MatrixError, Result};
use crate::traits::Matrix;

/// Builds a matrix from an optional two-dimensional array.
///
/// # Errors
/// Returns `MatrixError::NullArgument` if `array` is `None`.
pub fn from_array(array: Option<Vec<Vec<f64>>>) -> Result<DenseMatrix> {
    let array = array.ok_or(MatrixError::NullArgument("array"))?;
    DenseMatrix::from_array(array)
}

fn require<'a>(
    lhs: Option<&'a DenseMatrix>,
    rhs: Option<&'a DenseMatrix>,
) -> Result<(&'a DenseMatrix, &'a DenseMatrix)> {
    let lhs = lhs.ok_or(MatrixError::NullArgument("lhs"))?;
    let rhs = rhs.ok_or(MatrixError::NullArgument("rhs"))?;
    Ok((lhs, rhs))
}

fn require_same_shape(op: &'static str, lhs: &DenseMatrix, rhs: &DenseMatrix) -> Result<()> {
    if lhs.cols() != rhs.cols() || lhs.rows() != rhs.rows() {
        return Err(MatrixError::ShapeError {
            op,
            lhs: lhs.dims(),
            rhs: rhs.dims(),
        });
    }
    Ok(())
}

/// `lhs + rhs` with absent operands rejected.
pub fn checked_add(lhs: Option<&DenseMatrix>, rhs: Option<&DenseMatrix>) -> Result<DenseMatrix> {
    let (lhs, rhs) = require(lhs, rhs)?;
    require_same_shape("add", lhs, rhs)?;
    DenseMatrix::add(lhs, rhs)
}

/// `lhs - rhs` with absent operands rejected.
pub fn checked_subtract(
    lhs: Option<&DenseMatrix>,
    rhs: Option<&DenseMatrix>,
) -> Result<DenseMatrix> {
    let (lhs, rhs) = require(lhs, rhs)?;
    require_same_shape("subtract", lhs, rhs)?;
    DenseMatrix::subtract(lhs, rhs)
}

/// `lhs * rhs` with absent operands rejected.
pub fn checked_multiply(
    lhs: Option<&DenseMatrix>,
    rhs: Option<&DenseMatrix>,
) -> Result<DenseMatrix> {
    let (lhs, rhs) = require(lhs, rhs)?;
    if lhs.cols() != rhs.rows() || lhs.rows() < 1 || rhs.rows() < 1 {
        return Err(MatrixError::ShapeError {
            op: "multiply",
            lhs: lhs.dims(),
            rhs: rhs.dims(),
        });
    }
    DenseMatrix::multiply(lhs, rhs)
}

impl Add<&DenseMatrix> for &DenseMatrix {
    type Output = Result<DenseMatrix>;

    fn add(self, rhs: &DenseMatrix) -> Self::Output {
        checked_add(Some(self), Some(rhs))
    }
}

impl Add<DenseMatrix> for DenseMatrix {
    type Output = Result<DenseMatrix>;

    fn add(self, rhs: DenseMatrix) -> Self::Output {
        &self + &rhs
    }
}

impl Sub<&DenseMatrix> for &DenseMatrix {
    type Output = Result<DenseMatrix>;

    fn sub(self, rhs: &DenseMatrix) -> Self::Output {
        checked_subtract(Some(self), Some(rhs))
    }
}

impl Sub<DenseMatrix> for DenseMatrix {
    type Output = Result<DenseMatrix>;

    fn sub(self, rhs: DenseMatrix) -> Self::Output {
        &self - &rhs
    }
}

impl Mul<&DenseMatrix> for &DenseMatrix {
    type Output = Result<DenseMatrix>;

    /// Matrix product in mathematical order: `self` on the left.
    fn mul(self, rhs: &DenseMatrix) -> Self::Output {
        checked_multiply(Some(self), Some(rhs))
    }
}

impl Mul<DenseMatrix> for DenseMatrix {
    type Output = Result<DenseMatrix>;

    fn mul(self, rhs: DenseMatrix) -> Self::Output {
        &self * &rhs
    }
}
