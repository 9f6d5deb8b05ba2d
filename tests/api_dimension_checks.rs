#![allow(non_snake_case)]
use densemat::algebra::*;

// a collection of tests to ensure that operands of
// incompatible dimension won't be accepted

fn api_dim_check_data() -> (Matrix, Matrix) {
    let A = Matrix::from(&[[1., 2., 3.], [4., 5., 6.]]);
    let B = Matrix::from(&[[1., 0.], [0., 1.], [1., 1.]]);
    (A, B)
}

#[test]
fn api_dim_check_working() {
    // These operations should work because dimensions are
    // all compatible.  All following checks vary one
    // of the operands to test dimension checks

    let (A, B) = api_dim_check_data();

    assert_eq!((&A + &A).unwrap().size(), (2, 3));
    assert_eq!((&A - &A).unwrap().size(), (2, 3));
    let C = (&A * &B).unwrap();
    assert_eq!(C, Matrix::from(&[[4., 5.], [10., 11.]]));
    assert_eq!((&B * &A).unwrap().size(), (3, 3));
}

#[test]
fn api_dim_check_bad_add() {
    let (A, B) = api_dim_check_data();
    let err = (&A + &B).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            op: "add",
            lhs: (2, 3),
            rhs: (3, 2)
        }
    );
}

#[test]
fn api_dim_check_bad_sub() {
    let (mut A, B) = api_dim_check_data();
    let A0 = A.clone();
    assert!(A.sub_matrix(&B).is_err());
    // failed operations leave the receiver untouched
    assert_eq!(A.data(), A0.data());
}

#[test]
fn api_dim_check_bad_mul() {
    let (A, _) = api_dim_check_data();
    let B = Matrix::new(4, 2).unwrap();
    assert!(matches!(
        &A * &B,
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

#[test]
#[should_panic]
fn api_dim_check_bad_add_assign() {
    let (mut A, B) = api_dim_check_data();
    A += &B;
}

#[test]
#[should_panic]
fn api_dim_check_bad_mul_assign() {
    let (mut A, _) = api_dim_check_data();
    let B = A.clone();
    A *= &B;
}

#[test]
fn api_dim_check_non_square() {
    let (A, _) = api_dim_check_data();
    assert!(A.determinant().is_err());
    assert!(A.calc_complements().is_err());
    assert!(A.inverse().is_err());
    assert!(Matrix::new_empty().determinant().is_err());
    assert!(Matrix::from(&[[2.]]).calc_complements().is_err());
}

#[test]
fn api_dim_check_bad_index() {
    let (mut A, _) = api_dim_check_data();
    assert_eq!(
        A.get(2, 0),
        Err(MatrixError::IndexOutOfRange {
            row: 2,
            col: 0,
            nrows: 2,
            ncols: 3
        })
    );
    assert!(A.set(0, 3, 1.).is_err());
    assert!(A.minor(0, 3).is_err());
    assert!(Matrix::new(0, 3).is_err());
    let (r0, r1): (&[f64], &[f64]) = (&[1., 2.], &[3.]);
    assert!(Matrix::from_rows(&[r0, r1]).is_err());
}

#[test]
#[should_panic]
fn api_dim_check_bad_index_operator() {
    let (A, _) = api_dim_check_data();
    let _ = A[(0, 3)];
}
