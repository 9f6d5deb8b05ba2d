//! __densemat__ is a small dense matrix library for `f64` data.
//!
//! The central type is [`Matrix`](crate::algebra::Matrix), an owned,
//! row-major `rows × cols` buffer supporting
//!
//! * construction, deep copy, move-out and in-place row / column resizing,
//! * checked element access,
//! * elementwise sums and differences, scalar scaling and matrix products,
//! * transposes, minors, determinants, cofactor matrices, adjugates and inverses.
//!
//! Determinants are computed by Laplace cofactor expansion along the first row.
//! For larger problems a partial-pivot LU back end is available through
//! [`MatrixEngine`](crate::engine::MatrixEngine), which also provides timing
//! and verbose reporting to a configurable print target.
//!
//! Matrix equality is approximate: two matrices compare equal when their
//! shapes agree and every pair of entries differs by strictly less than
//! [`EQUALITY_TOLERANCE`](crate::algebra::EQUALITY_TOLERANCE).
//!
//! ```
//! use densemat::algebra::*;
//!
//! let a = Matrix::from(&[
//!     [1., 1.], //
//!     [3., 2.], //
//! ]);
//! let inv = a.inverse().unwrap();
//! assert_eq!(inv, Matrix::from(&[[-2., 1.], [3., -1.]]));
//! assert_eq!((&a * &inv).unwrap(), Matrix::identity(2).unwrap());
//! ```
//!
//! # Features
//!
//! * `serde` (default): `Serialize` / `Deserialize` for
//!   [`EngineSettings`](crate::engine::EngineSettings).
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
pub mod engine;
pub mod io;
pub mod timers;
