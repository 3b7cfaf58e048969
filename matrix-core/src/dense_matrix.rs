use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{MatrixError, Result};
use crate::traits::Matrix;

/// Represents a dense matrix of `f64` stored in row-major order on the CPU.
#[derive(Debug, Clone)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>, // Data stored row-major: data[row * cols + col]
}

impl DenseMatrix {
    /// Creates a `rows x cols` matrix filled with zeros.
    ///
    /// # Errors
    /// Returns `MatrixError::InvalidDimension` if either dimension is zero or
    /// the element count overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = Self::checked_len(rows, cols)?;
        Ok(Self::zeroed(rows, cols, len))
    }

    /// Creates a new DenseMatrix from raw data, assuming row-major order.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != Self::checked_len(rows, cols)? {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix from a two-dimensional array, taking ownership of the rows.
    ///
    /// The row count is the number of rows given, the column count is the
    /// length of the first row. An empty array yields a 0x0 matrix, which is
    /// only useful as a degenerate operand.
    ///
    /// # Errors
    /// Returns `MatrixError::RaggedArray` naming the first row whose length
    /// differs from the first row's.
    pub fn from_array(array: Vec<Vec<f64>>) -> Result<Self> {
        let rows = array.len();
        let cols = array.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(rows.saturating_mul(cols));
        for (row, values) in array.into_iter().enumerate() {
            if values.len() != cols {
                return Err(MatrixError::RaggedArray {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut matrix = Self::new(n, n)?;
        matrix.data.iter_mut().step_by(n + 1).for_each(|x| *x = 1.0);
        Ok(matrix)
    }

    fn checked_len(rows: usize, cols: usize) -> Result<usize> {
        if rows < 1 || cols < 1 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        rows.checked_mul(cols)
            .ok_or(MatrixError::InvalidDimension { rows, cols })
    }

    // `len` must already equal `rows * cols`.
    fn zeroed(rows: usize, cols: usize, len: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; len],
        }
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.offset(row, col))
    }

    /// Gets the element at the specified row and column.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let offset = self.check_index(row, col)?;
        Ok(self.data[offset])
    }

    /// Overwrites the element at the specified row and column.
    ///
    /// Bounds are checked the same way as for [`DenseMatrix::get`].
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let offset = self.check_index(row, col)?;
        log::trace!("set ({}, {}) = {}", row, col, value);
        self.data[offset] = value;
        Ok(())
    }

    /// Returns a slice view of the underlying data vector.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns a mutable slice view of the underlying data vector.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Returns the given row as a slice, or None if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.rows {
            let start = self.offset(row, 0);
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Copies the matrix out as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    /// Deconstructs the matrix into its row-major data and (rows, cols).
    pub fn into_vec(self) -> (Vec<f64>, (usize, usize)) {
        (self.data, (self.rows, self.cols))
    }

    /// Element-wise sum of `self` and `other`.
    pub fn add(&self, other: &DenseMatrix) -> Result<DenseMatrix> {
        self.check_same_shape("add", other)?;
        log::debug!("add {}x{} + {}x{}", self.rows, self.cols, other.rows, other.cols);
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Element-wise difference of `self` and `other`.
    pub fn subtract(&self, other: &DenseMatrix) -> Result<DenseMatrix> {
        self.check_same_shape("subtract", other)?;
        log::debug!(
            "subtract {}x{} - {}x{}",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Matrix product `self * other`, of shape `self.rows x other.cols`.
    ///
    /// # Errors
    /// Returns `MatrixError::EmptyOperand` if `other` holds no elements and
    /// `MatrixError::DimensionMismatch` if `self.cols != other.rows`.
    pub fn multiply(&self, other: &DenseMatrix) -> Result<DenseMatrix> {
        if other.data.is_empty() {
            return Err(MatrixError::EmptyOperand);
        }
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                lhs: self.dims(),
                rhs: other.dims(),
            });
        }
        log::debug!(
            "multiply {}x{} * {}x{}",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );

        let len = Self::checked_len(self.rows, other.cols)?;
        let mut result = Self::zeroed(self.rows, other.cols, len);
        for i in 0..self.rows {
            let lhs_row = &self.data[i * self.cols..(i + 1) * self.cols];
            for j in 0..other.cols {
                let mut sum = 0.0;
                for (k, a) in lhs_row.iter().enumerate() {
                    sum += a * other.data[k * other.cols + j];
                }
                result.data[i * other.cols + j] = sum;
            }
        }
        Ok(result)
    }

    fn check_same_shape(&self, op: &'static str, other: &DenseMatrix) -> Result<()> {
        if other.cols < 1 || other.cols != self.cols || self.rows < 1 || other.rows != self.rows {
            return Err(MatrixError::DimensionMismatch {
                op,
                lhs: self.dims(),
                rhs: other.dims(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &DenseMatrix, f: impl Fn(f64, f64) -> f64) -> DenseMatrix {
        DenseMatrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }
}

// Implement the generic Matrix trait
impl Matrix for DenseMatrix {
    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    // rows(), cols(), is_square() are provided by default impls in the trait
}

impl PartialEq for DenseMatrix {
    /// Shapes must match exactly; elements compare with `f64` equality.
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

impl TryFrom<Vec<Vec<f64>>> for DenseMatrix {
    type Error = MatrixError;

    fn try_from(array: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_array(array)
    }
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = f64;

    /// Indexing operator where the index is (row, column). Panics when out of range.
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        assert!(
            row < self.rows && col < self.cols,
            "Out of bounds access to a {}x{} matrix: ({}, {})",
            self.rows,
            self.cols,
            row,
            col
        );
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (row, col) = index;
        assert!(
            row < self.rows && col < self.cols,
            "Out of bounds access to a {}x{} matrix: ({}, {})",
            self.rows,
            self.cols,
            row,
            col
        );
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let start = self.offset(row, 0);
            let values: Vec<String> = self.data[start..start + self.cols]
                .iter()
                .map(|v| v.to_string())
                .collect();
            writeln!(f, "[{}]", values.join(", "))?;
        }
        Ok(())
    }
}
