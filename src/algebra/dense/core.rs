use crate::algebra::{Matrix, MatrixError, ShapedMatrix};
use std::ops::{Index, IndexMut};

fn check_dimension(dim: usize) -> Result<(), MatrixError> {
    if dim == 0 {
        return Err(MatrixError::InvalidDimension(dim));
    }
    Ok(())
}

// number of entries for an m × n buffer, rejecting shapes
// whose storage size is not representable
pub(crate) fn checked_len(m: usize, n: usize) -> Result<usize, MatrixError> {
    m.checked_mul(n)
        .filter(|&len| len <= isize::MAX as usize / std::mem::size_of::<f64>())
        .ok_or(MatrixError::InvalidDimension(usize::max(m, n)))
}

impl Matrix {
    /// Creates an empty `0 × 0` matrix.  No storage is allocated.
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Creates a zero-filled `nrows × ncols` matrix.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimension`] if either dimension is zero, or if
    /// `nrows * ncols` entries can't be stored.
    pub fn new(nrows: usize, ncols: usize) -> Result<Self, MatrixError> {
        check_dimension(nrows)?;
        check_dimension(ncols)?;
        checked_len(nrows, ncols)?;
        Ok(Self::zeros((nrows, ncols)))
    }

    // internal constructor for shapes already known to be
    // valid, including the empty shape (0,0)
    pub(crate) fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![0.0; m * n];
        Self { m, n, data }
    }

    /// Creates an `n × n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut mat = Matrix::new(n, n)?;
        for i in 0..n {
            mat[(i, i)] = 1.0;
        }
        Ok(mat)
    }

    /// Creates a matrix from a slice of equal length rows.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimension`] if there are no rows or the rows
    /// are empty, and [`MatrixError::DimensionMismatch`] if the rows are ragged.
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self, MatrixError> {
        let m = rows.len();
        check_dimension(m)?;
        let n = rows[0].len();
        check_dimension(n)?;

        let mut data = Vec::with_capacity(m * n);
        for row in rows {
            if row.len() != n {
                return Err(MatrixError::mismatch("from_rows", (1, n), (1, row.len())));
            }
            data.extend_from_slice(row);
        }
        Ok(Self { m, n, data })
    }

    /// Moves the contents out of `self`, leaving `self` empty.
    pub fn take(&mut self) -> Matrix {
        std::mem::take(self)
    }

    /// Replaces the contents of `self` with a deep copy of `other`.
    pub fn assign(&mut self, other: &Matrix) {
        self.clone_from(other);
    }

    /// Replaces the contents of `self` with those of `other`, leaving
    /// `other` empty.  The previous buffer of `self` is released.
    pub fn assign_from(&mut self, other: &mut Matrix) {
        *self = other.take();
    }

    /// Row-major view of the matrix entries
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Entries of row `row`.
    ///
    /// # Panics
    /// Panics if `row` is out of range.
    pub fn row_slice(&self, row: usize) -> &[f64] {
        assert!(
            row < self.m,
            "row {} is out of range for a {}x{} matrix",
            row,
            self.m,
            self.n
        );
        &self.data[(row * self.n)..(row + 1) * self.n]
    }

    /// Changes the number of rows.  Existing rows up to the new count are
    /// kept, and any added rows are zero filled.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimension`] if `nrows` is zero, if the new
    /// shape can't be stored, or if the matrix is empty, since resizing one
    /// extent of an empty matrix can't produce a valid shape.
    pub fn set_rows(&mut self, nrows: usize) -> Result<(), MatrixError> {
        check_dimension(nrows)?;
        check_dimension(self.n)?;

        if nrows != self.m {
            let mut data = vec![0.0; checked_len(nrows, self.n)?];
            let keep = usize::min(nrows, self.m) * self.n;
            data[..keep].copy_from_slice(&self.data[..keep]);
            self.data = data;
            self.m = nrows;
        }
        Ok(())
    }

    /// Changes the number of columns.  Existing columns up to the new count
    /// are kept in every row, and any added columns are zero filled.
    ///
    /// # Errors
    /// As for [`set_rows`](Matrix::set_rows).
    pub fn set_cols(&mut self, ncols: usize) -> Result<(), MatrixError> {
        check_dimension(ncols)?;
        check_dimension(self.m)?;

        if ncols != self.n {
            let mut data = vec![0.0; checked_len(self.m, ncols)?];
            let keep = usize::min(ncols, self.n);
            for (dst, src) in data
                .chunks_exact_mut(ncols)
                .zip(self.data.chunks_exact(self.n))
            {
                dst[..keep].copy_from_slice(&src[..keep]);
            }
            self.data = data;
            self.n = ncols;
        }
        Ok(())
    }

    pub(crate) fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 * self.n + idx.1
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.m || col >= self.n {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                nrows: self.m,
                ncols: self.n,
            });
        }
        Ok(self.index_linear((row, col)))
    }

    /// Returns the entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        let idx = self.checked_index(row, col)?;
        Ok(self.data[idx])
    }

    /// Returns a mutable reference to the entry at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64, MatrixError> {
        let idx = self.checked_index(row, col)?;
        Ok(&mut self.data[idx])
    }

    /// Overwrites the entry at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, val: f64) -> Result<(), MatrixError> {
        *self.get_mut(row, col)? = val;
        Ok(())
    }
}

impl ShapedMatrix for Matrix {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

/// # Panics
/// Panics if the index is out of range.
impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    fn index(&self, idx: (usize, usize)) -> &f64 {
        match self.checked_index(idx.0, idx.1) {
            Ok(lidx) => &self.data[lidx],
            Err(e) => panic!("{}", e),
        }
    }
}

/// # Panics
/// Panics if the index is out of range.
impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut f64 {
        match self.checked_index(idx.0, idx.1) {
            Ok(lidx) => &mut self.data[lidx],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<const M: usize, const N: usize> From<&[[f64; N]; M]> for Matrix {
    fn from(rows: &[[f64; N]; M]) -> Self {
        if M == 0 || N == 0 {
            return Matrix::new_empty();
        }
        let data = rows.iter().flatten().copied().collect();
        Self { m: M, n: N, data }
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f)?;
        for i in 0..self.m {
            write!(f, "[ ")?;
            for v in self.row_slice(i) {
                write!(f, " {:?}", v)?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)?;
        Ok(())
    }
}
