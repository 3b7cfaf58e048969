use std::fmt::Debug;

/// Generic trait describing the shape of a matrix.
pub trait Matrix: Debug {
    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (usize, usize);

    /// Returns the number of rows.
    fn rows(&self) -> usize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn cols(&self) -> usize {
        self.dims().1
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }

    /// Total number of stored elements.
    fn len(&self) -> usize {
        let (rows, cols) = self.dims();
        rows * cols
    }

    /// Checks if the matrix stores no elements at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
