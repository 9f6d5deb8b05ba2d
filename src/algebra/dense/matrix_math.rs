#![allow(non_snake_case)]
use crate::algebra::{Matrix, MatrixError, ShapedMatrix, EQUALITY_TOLERANCE};
use itertools::izip;
use super::core::checked_len;

impl Matrix {
    /// Approximate equality.  True when both matrices have the same shape
    /// and every pair of entries differs by less than [`EQUALITY_TOLERANCE`].
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        self.size() == other.size()
            && izip!(&self.data, &other.data).all(|(&a, &b)| (a - b).abs() < EQUALITY_TOLERANCE)
    }

    fn check_same_size(&self, op: &'static str, other: &Matrix) -> Result<(), MatrixError> {
        if self.size() != other.size() {
            return Err(MatrixError::mismatch(op, self.size(), other.size()));
        }
        Ok(())
    }

    /// Elementwise `self += other`.
    pub fn add_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        self.check_same_size("add", other)?;
        izip!(&mut self.data, &other.data).for_each(|(a, &b)| *a += b);
        Ok(())
    }

    /// Elementwise `self -= other`.
    pub fn sub_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        self.check_same_size("subtract", other)?;
        izip!(&mut self.data, &other.data).for_each(|(a, &b)| *a -= b);
        Ok(())
    }

    /// Multiplies every entry by `c`.
    pub fn scale(&mut self, c: f64) {
        self.data_mut().iter_mut().for_each(|x| *x *= c);
    }

    /// Matrix product `self = self * other`.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`] unless `self.ncols() == other.nrows()`.
    /// Neither operand is modified on failure.
    pub fn mul_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        *self = self.product(other)?;
        Ok(())
    }

    // out of place product, C = A*B
    pub(crate) fn product(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.ncols() != other.nrows() {
            return Err(MatrixError::mismatch("multiply", self.size(), other.size()));
        }

        let (m, n) = (self.nrows(), other.ncols());
        checked_len(m, n)?;
        let mut out = Matrix::zeros((m, n));
        for i in 0..m {
            let arow = self.row_slice(i);
            for j in 0..n {
                let mut acc = 0.0;
                for (p, a) in arow.iter().enumerate() {
                    acc += a * other.data[other.index_linear((p, j))];
                }
                out.data[i * n + j] = acc;
            }
        }
        Ok(out)
    }
}

#[test]
fn test_approx_eq() {
    let A = Matrix::from(&[[1., 2.], [3., 4.]]);
    let mut B = A.clone();
    assert!(A.approx_eq(&B));

    // differences below tolerance are ignored
    B[(1, 1)] += 0.5e-7;
    assert!(A.approx_eq(&B));

    B[(1, 1)] += 1e-7;
    assert!(!A.approx_eq(&B));

    // shape mismatch is inequality, never an error
    let C = Matrix::from(&[[1., 2., 0.], [3., 4., 0.]]);
    assert!(!A.approx_eq(&C));
    assert!(Matrix::new_empty().approx_eq(&Matrix::new_empty()));
}

#[test]
fn test_add_sub() {
    let mut A = Matrix::from(&[[1., 2.], [3., 4.]]);
    let B = Matrix::from(&[[10., 20.], [30., 40.]]);

    A.add_matrix(&B).unwrap();
    assert_eq!(A.data(), &[11., 22., 33., 44.]);
    A.sub_matrix(&B).unwrap();
    assert_eq!(A.data(), &[1., 2., 3., 4.]);

    // failure leaves the receiver untouched
    let C = Matrix::new(3, 2).unwrap();
    assert!(matches!(
        A.add_matrix(&C),
        Err(MatrixError::DimensionMismatch { op: "add", .. })
    ));
    assert!(A.sub_matrix(&C).is_err());
    assert_eq!(A.data(), &[1., 2., 3., 4.]);
}

#[test]
fn test_scale() {
    let mut A = Matrix::from(&[[1., -2.], [3., 0.]]);
    A.scale(-2.);
    assert_eq!(A.data(), &[-2., 4., -6., 0.]);
}

#[test]
fn test_mul_matrix() {
    #[rustfmt::skip]
    let mut A = Matrix::from(&[
        [1., 2., 3.],
        [4., 5., 6.],
    ]);
    #[rustfmt::skip]
    let B = Matrix::from(&[
        [ 7.,  8.],
        [ 9., 10.],
        [11., 12.],
    ]);

    A.mul_matrix(&B).unwrap();
    assert_eq!(A.size(), (2, 2));
    assert_eq!(A.data(), &[58., 64., 139., 154.]);

    // inner dimension mismatch
    let C = Matrix::new(3, 3).unwrap();
    assert!(A.mul_matrix(&C).is_err());
    assert_eq!(A.data(), &[58., 64., 139., 154.]);
}
