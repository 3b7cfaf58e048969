use thiserror::Error;

pub type Result<T> = core::result::Result<T, MatrixError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("Missing required argument: {0}")]
    NullArgument(&'static str),

    #[error("Invalid matrix dimensions ({rows}x{cols})")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("Ragged array: row {row} has {found} elements, expected {expected}")]
    RaggedArray {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    // Raised by the named methods (`add`, `subtract`, `multiply`).
    #[error("Dimension mismatch in {}: {}x{} vs {}x{}", .op, .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    // Raised by the operator forms before delegating.
    #[error("Incompatible shapes for {}: {}x{} vs {}x{}", .op, .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    ShapeError {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("Multiplication operand has no elements")]
    EmptyOperand,
}

impl MatrixError {
    /// True for either of the two shape-incompatibility kinds.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            MatrixError::DimensionMismatch { .. } | MatrixError::ShapeError { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::MatrixError;

    #[test]
    fn test_error_messages() {
        let err = MatrixError::IndexOutOfRange {
            row: 2,
            col: 0,
            rows: 2,
            cols: 2,
        };
        assert_eq!(err.to_string(), "Index (2, 0) out of range for 2x2 matrix");

        let err = MatrixError::ShapeError {
            op: "add",
            lhs: (2, 3),
            rhs: (2, 2),
        };
        assert_eq!(err.to_string(), "Incompatible shapes for add: 2x3 vs 2x2");
        assert!(err.is_shape_mismatch());
        assert!(!MatrixError::EmptyOperand.is_shape_mismatch());
    }
}
