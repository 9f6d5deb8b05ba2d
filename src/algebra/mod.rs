//! Dense matrix type and linear algebra routines.
//!
//! All functionality is implemented on the owned, row-major [`Matrix`] type.
//! Fallible operations return [`MatrixError`].

mod error_types;
pub use error_types::*;
mod matrix_types;
pub use matrix_types::*;
mod matrix_traits;
pub use matrix_traits::*;
mod dense;
pub use dense::*;
