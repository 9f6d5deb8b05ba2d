#![allow(non_snake_case)]
use crate::algebra::{Matrix, ShapedMatrix};
use enum_dispatch::*;

/// Algorithm for computing the determinant of a square matrix.
///
/// Implementations may assume that `A` is square and nonempty.  Shape checks
/// are made by the callers in [`Matrix`].
#[enum_dispatch]
pub trait DeterminantMethod {
    fn det(&self, A: &Matrix) -> f64;

    /// short name used in reports
    fn name(&self) -> &'static str;
}

/// Laplace expansion along the first row.
///
/// ```text
/// det(A) = Σ_j (-1)^j A[0,j] det(minor(A, 0, j))
/// ```
///
/// Cost grows factorially with the matrix dimension.  Recursion depth
/// equals the dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CofactorExpansion;

impl DeterminantMethod for CofactorExpansion {
    fn det(&self, A: &Matrix) -> f64 {
        if A.nrows() == 1 {
            return A.data[0];
        }
        let mut out = 0.0;
        for (j, &a) in A.row_slice(0).iter().enumerate() {
            let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
            out += sign * a * self.det(&A.minor_unchecked(0, j));
        }
        out
    }

    fn name(&self) -> &'static str {
        "cofactor"
    }
}

/// Gaussian elimination with partial pivoting.  The determinant is the
/// product of the pivots, negated once per row exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LuDecomposition;

impl DeterminantMethod for LuDecomposition {
    fn det(&self, A: &Matrix) -> f64 {
        let n = A.nrows();
        let mut lu = A.data.clone();
        let mut det = 1.0;

        for k in 0..n {
            // largest magnitude entry on or below the diagonal
            let mut p = k;
            for i in (k + 1)..n {
                if lu[i * n + k].abs() > lu[p * n + k].abs() {
                    p = i;
                }
            }
            if lu[p * n + k] == 0.0 {
                return 0.0;
            }
            if p != k {
                for j in 0..n {
                    lu.swap(k * n + j, p * n + j);
                }
                det = -det;
            }

            let pivot = lu[k * n + k];
            det *= pivot;
            for i in (k + 1)..n {
                let f = lu[i * n + k] / pivot;
                for j in (k + 1)..n {
                    lu[i * n + j] -= f * lu[k * n + j];
                }
            }
        }
        det
    }

    fn name(&self) -> &'static str {
        "lu"
    }
}

/// Runtime selectable determinant method.
#[enum_dispatch(DeterminantMethod)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeterminantSolver {
    CofactorExpansion,
    LuDecomposition,
}

impl Default for DeterminantSolver {
    fn default() -> Self {
        CofactorExpansion.into()
    }
}
