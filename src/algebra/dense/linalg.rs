#![allow(non_snake_case)]
use crate::algebra::{
    CofactorExpansion, DeterminantMethod, Matrix, MatrixError, ShapedMatrix, EQUALITY_TOLERANCE,
};
use itertools::iproduct;

impl Matrix {
    /// Returns the `ncols × nrows` transpose.  The transpose of an empty
    /// matrix is empty.
    pub fn transpose(&self) -> Matrix {
        let (m, n) = self.size();
        let mut out = Matrix::zeros((n, m));
        for (i, j) in iproduct!(0..m, 0..n) {
            out.data[j * m + i] = self.data[i * n + j];
        }
        out
    }

    /// Returns the matrix with row `row` and column `col` removed.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`] if the matrix has fewer than two
    /// rows or columns, and [`MatrixError::IndexOutOfRange`] if `row` or
    /// `col` is not a valid index.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix, MatrixError> {
        if self.nrows() < 2 || self.ncols() < 2 {
            return Err(MatrixError::not_square("minor", self.size()));
        }
        // bounds check only
        self.get(row, col)?;
        Ok(self.minor_unchecked(row, col))
    }

    // caller guarantees a shape of at least 2x2 and valid indices
    pub(crate) fn minor_unchecked(&self, row: usize, col: usize) -> Matrix {
        let (m, n) = self.size();
        let mut data = Vec::with_capacity((m - 1) * (n - 1));
        for (i, src) in self.data.chunks_exact(n).enumerate() {
            if i == row {
                continue;
            }
            data.extend_from_slice(&src[..col]);
            data.extend_from_slice(&src[col + 1..]);
        }
        Matrix {
            m: m - 1,
            n: n - 1,
            data,
        }
    }

    fn check_square(&self, op: &'static str) -> Result<(), MatrixError> {
        if self.is_empty() || !self.is_square() {
            return Err(MatrixError::not_square(op, self.size()));
        }
        Ok(())
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`] if the matrix is not square or is empty.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        self.determinant_with(&CofactorExpansion)
    }

    /// Determinant using the supplied method.
    pub fn determinant_with<D>(&self, method: &D) -> Result<f64, MatrixError>
    where
        D: DeterminantMethod + ?Sized,
    {
        self.check_square("determinant")?;
        Ok(method.det(self))
    }

    /// Matrix of cofactors, i.e. entry `(i, j)` is `(-1)^(i+j) det(minor(i, j))`.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`] unless the matrix is square and at
    /// least `2 × 2`.
    pub fn calc_complements(&self) -> Result<Matrix, MatrixError> {
        self.calc_complements_with(&CofactorExpansion)
    }

    /// Matrix of cofactors, with minor determinants computed by `method`.
    pub fn calc_complements_with<D>(&self, method: &D) -> Result<Matrix, MatrixError>
    where
        D: DeterminantMethod + ?Sized,
    {
        self.check_square("calc_complements")?;
        if self.nrows() < 2 {
            return Err(MatrixError::not_square("calc_complements", self.size()));
        }

        let mut out = Matrix::zeros(self.size());
        for (i, j) in iproduct!(0..self.nrows(), 0..self.ncols()) {
            let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            out[(i, j)] = sign * method.det(&self.minor_unchecked(i, j));
        }
        Ok(out)
    }

    /// Adjugate matrix, the transpose of the matrix of cofactors.  The
    /// adjugate of any `1 × 1` matrix is `[1]`.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`] if the matrix is not square or is empty.
    pub fn adjugate(&self) -> Result<Matrix, MatrixError> {
        self.adjugate_with(&CofactorExpansion)
    }

    pub fn adjugate_with<D>(&self, method: &D) -> Result<Matrix, MatrixError>
    where
        D: DeterminantMethod + ?Sized,
    {
        self.check_square("adjugate")?;
        if self.nrows() == 1 {
            return Ok(Matrix::from(&[[1.0]]));
        }
        Ok(self.calc_complements_with(method)?.transpose())
    }

    /// Inverse matrix, computed as `adj(A) / det(A)`.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`] if the matrix is not square or is
    /// empty, and [`MatrixError::Singular`] if `|det(A)|` is less than
    /// [`EQUALITY_TOLERANCE`].
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        self.inverse_with(&CofactorExpansion)
    }

    /// Inverse matrix, with all determinants computed by `method`.
    pub fn inverse_with<D>(&self, method: &D) -> Result<Matrix, MatrixError>
    where
        D: DeterminantMethod + ?Sized,
    {
        let det = self.determinant_with(method)?;
        if det.abs() < EQUALITY_TOLERANCE {
            return Err(MatrixError::Singular { det });
        }
        let mut out = self.adjugate_with(method)?;
        out.scale(1.0 / det);
        Ok(out)
    }
}

#[test]
fn test_transpose() {
    let A = Matrix::from(&[[1., 2., 3.], [4., 5., 6.]]);
    let At = A.transpose();
    assert_eq!(At.size(), (3, 2));
    assert_eq!(At.data(), &[1., 4., 2., 5., 3., 6.]);
    assert_eq!(At.transpose(), A);
    assert!(Matrix::new_empty().transpose().is_empty());
}

#[test]
fn test_minor() {
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [1., 2., 3.],
        [4., 5., 6.],
        [7., 8., 9.],
    ]);
    assert_eq!(A.minor(0, 0).unwrap().data(), &[5., 6., 8., 9.]);
    assert_eq!(A.minor(1, 1).unwrap().data(), &[1., 3., 7., 9.]);
    assert_eq!(A.minor(2, 0).unwrap().data(), &[2., 3., 5., 6.]);

    // rectangular sources are fine
    let B = Matrix::from(&[[1., 2., 3.], [4., 5., 6.]]);
    let M = B.minor(1, 2).unwrap();
    assert_eq!(M.size(), (1, 2));
    assert_eq!(M.data(), &[1., 2.]);

    assert!(matches!(
        A.minor(3, 0),
        Err(MatrixError::IndexOutOfRange { .. })
    ));
    assert!(matches!(
        Matrix::from(&[[1.]]).minor(0, 0),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_determinant_shape_checks() {
    assert!(Matrix::new(2, 3).unwrap().determinant().is_err());
    assert!(Matrix::new_empty().determinant().is_err());
    assert!(Matrix::from(&[[2.]]).calc_complements().is_err());
    assert!(Matrix::new(3, 2).unwrap().calc_complements().is_err());
    assert!(Matrix::new(3, 2).unwrap().inverse().is_err());
}

#[test]
fn test_calc_complements() {
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [1., 2., 3.],
        [0., 4., 2.],
        [5., 2., 1.],
    ]);
    #[rustfmt::skip]
    let C = Matrix::from(&[
        [  0.,  10., -20.],
        [  4., -14.,   8.],
        [ -8.,  -2.,   4.],
    ]);
    assert_eq!(A.calc_complements().unwrap(), C);
    assert_eq!(A.adjugate().unwrap(), C.transpose());
}

#[test]
fn test_inverse_1x1() {
    let A = Matrix::from(&[[4.]]);
    assert_eq!(A.inverse().unwrap(), Matrix::from(&[[0.25]]));
    assert!(matches!(
        Matrix::from(&[[0.]]).inverse(),
        Err(MatrixError::Singular { .. })
    ));
}
