use thiserror::Error;

/// Error type returned by matrix construction, access and arithmetic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A requested row or column count is zero, or the requested shape
    /// has more entries than can be stored
    #[error("Invalid dimension {0}: row and column counts must be positive and their product storable")]
    InvalidDimension(usize),
    /// Element access outside the matrix extents
    #[error("Index ({row}, {col}) is out of range for a {nrows}x{ncols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// Operand shapes are incompatible with the requested operation.
    /// For single operand checks `rhs` repeats `lhs`.
    #[error("Incompatible dimensions for {op}: {lhs:?} and {rhs:?}")]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Inverse requested for a matrix with (numerically) zero determinant
    #[error("Matrix is singular (determinant = {det:e})")]
    Singular { det: f64 },
}

impl MatrixError {
    pub(crate) fn mismatch(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        MatrixError::DimensionMismatch { op, lhs, rhs }
    }

    pub(crate) fn not_square(op: &'static str, size: (usize, usize)) -> Self {
        MatrixError::DimensionMismatch {
            op,
            lhs: size,
            rhs: size,
        }
    }
}
