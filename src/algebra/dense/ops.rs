#![allow(non_snake_case)]
// Operator surface for Matrix.  Every operator delegates to one of
// the named methods, so both forms always agree.
//
// Binary matrix-matrix operators return Result<Matrix, MatrixError>,
// since the operand shapes may be incompatible.  Compound assignment
// operators can't return a value and panic instead.

use crate::algebra::{Matrix, MatrixError};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

impl PartialEq for Matrix {
    /// Approximate equality.  See [`Matrix::approx_eq`].
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

// copies the left operand and applies the named in-place
// method, for each owned/borrowed operand combination
macro_rules! impl_matrix_binop {
    ($Trait:ident, $fn:ident, $method:ident) => {
        impl $Trait<&Matrix> for &Matrix {
            type Output = Result<Matrix, MatrixError>;
            fn $fn(self, rhs: &Matrix) -> Self::Output {
                let mut out = self.clone();
                out.$method(rhs)?;
                Ok(out)
            }
        }

        impl $Trait<&Matrix> for Matrix {
            type Output = Result<Matrix, MatrixError>;
            fn $fn(mut self, rhs: &Matrix) -> Self::Output {
                self.$method(rhs)?;
                Ok(self)
            }
        }

        impl $Trait<Matrix> for Matrix {
            type Output = Result<Matrix, MatrixError>;
            fn $fn(self, rhs: Matrix) -> Self::Output {
                <Matrix as $Trait<&Matrix>>::$fn(self, &rhs)
            }
        }
    };
}

impl_matrix_binop!(Add, add, add_matrix);
impl_matrix_binop!(Sub, sub, sub_matrix);
impl_matrix_binop!(Mul, mul, mul_matrix);

impl Mul<f64> for &Matrix {
    type Output = Matrix;
    fn mul(self, c: f64) -> Matrix {
        let mut out = self.clone();
        out.scale(c);
        out
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;
    fn mul(mut self, c: f64) -> Matrix {
        self.scale(c);
        self
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;
    fn mul(self, A: &Matrix) -> Matrix {
        A * self
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;
    fn mul(self, A: Matrix) -> Matrix {
        A * self
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, c: f64) {
        self.scale(c);
    }
}

/// # Panics
/// Panics if the matrix dimensions differ.  Use
/// [`Matrix::add_matrix`] for a fallible version.
impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        if let Err(e) = self.add_matrix(rhs) {
            panic!("{}", e);
        }
    }
}

/// # Panics
/// Panics if the matrix dimensions differ.  Use
/// [`Matrix::sub_matrix`] for a fallible version.
impl SubAssign<&Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: &Matrix) {
        if let Err(e) = self.sub_matrix(rhs) {
            panic!("{}", e);
        }
    }
}

/// # Panics
/// Panics if the inner dimensions differ.  Use
/// [`Matrix::mul_matrix`] for a fallible version.
impl MulAssign<&Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: &Matrix) {
        if let Err(e) = self.mul_matrix(rhs) {
            panic!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::ShapedMatrix;

    fn test_matrices() -> (Matrix, Matrix) {
        let A = Matrix::from(&[[1., 2.], [4., 5.]]);
        let B = Matrix::from(&[[10., 11.], [13., 14.]]);
        (A, B)
    }

    #[test]
    fn test_binary_ops_leave_operands_unmodified() {
        let (A, B) = test_matrices();
        let (A0, B0) = (A.clone(), B.clone());

        let S = (&A + &B).unwrap();
        let D = (&A - &B).unwrap();
        let P = (&A * &B).unwrap();

        assert_eq!(S, Matrix::from(&[[11., 13.], [17., 19.]]));
        assert_eq!(D, Matrix::from(&[[-9., -9.], [-9., -9.]]));
        assert_eq!(P, Matrix::from(&[[36., 39.], [105., 114.]]));
        assert_eq!(A.data(), A0.data());
        assert_eq!(B.data(), B0.data());
    }

    #[test]
    fn test_scalar_mul_both_sides() {
        let (A, _) = test_matrices();
        let expected = Matrix::from(&[[10., 20.], [40., 50.]]);
        assert_eq!(&A * 10., expected);
        assert_eq!(10. * &A, expected);
        assert_eq!(10. * A.clone(), expected);
        assert_eq!(A.clone() * 10., expected);
    }

    #[test]
    fn test_product_order() {
        let (A, B) = test_matrices();
        let AB = (&A * &B).unwrap();
        let BA = (&B * &A).unwrap();
        assert_ne!(AB, BA);
    }

    #[test]
    fn test_binary_op_mismatch() {
        let (A, _) = test_matrices();
        let C = Matrix::new(3, 2).unwrap();
        assert!((&A + &C).is_err());
        assert!((&A - &C).is_err());
        assert!((&A * &C).is_err());
        assert!((&C * &A).is_ok());
        assert_eq!((&C * &A).unwrap().size(), (3, 2));
    }

    #[test]
    fn test_compound_assign() {
        let (A, B) = test_matrices();

        let mut S = Matrix::new(2, 2).unwrap();
        S += &A;
        assert_eq!(S, A);
        S -= &A;
        assert_eq!(S, Matrix::new(2, 2).unwrap());

        let mut P = A.clone();
        P *= &B;
        assert_eq!(P, (&A * &B).unwrap());

        let mut Q = A.clone();
        Q *= 0.5;
        assert_eq!(Q, Matrix::from(&[[0.5, 1.], [2., 2.5]]));
    }

    #[test]
    #[should_panic]
    fn test_add_assign_panics_on_mismatch() {
        let mut A = Matrix::new(2, 2).unwrap();
        A += &Matrix::new(2, 3).unwrap();
    }

    #[test]
    #[should_panic]
    fn test_mul_assign_panics_on_mismatch() {
        let mut A = Matrix::new(2, 3).unwrap();
        A *= &Matrix::new(4, 2).unwrap();
    }
}
