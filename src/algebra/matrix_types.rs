/// Tolerance used for approximate matrix equality and for singularity
/// detection when computing inverses.
pub const EQUALITY_TOLERANCE: f64 = 1e-7;

/// Dense matrix of `f64` values in row-major format.
///
/// A matrix is either empty (`0 × 0`, no storage) or has strictly positive
/// row and column counts with exactly `nrows * ncols` entries.  Entry
/// `(i, j)` lives at linear position `i * ncols + j`.
///
/// Each `Matrix` owns its buffer.  Cloning makes a deep copy, and
/// [`take`](Matrix::take) moves the buffer out and leaves the source empty.
#[derive(Debug, Clone, Default)]
pub struct Matrix {
    /// number of rows
    pub(crate) m: usize,
    /// number of columns
    pub(crate) n: usize,
    /// vector of data in row major format
    pub(crate) data: Vec<f64>,
}
