mod core;
mod determinant;
pub use self::determinant::*;
mod linalg;
mod matrix_math;
mod ops;
