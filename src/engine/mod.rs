//! Front end for timed, optionally reported matrix computations.
//!
//! The [`MatrixEngine`] wraps the expensive operations on
//! [`Matrix`](crate::algebra::Matrix) (determinant, complements and
//! inverse), selects a determinant method according to its
//! [`EngineSettings`] and records the time spent in each operation.

mod matrix_engine;
mod settings;

pub use matrix_engine::*;
pub use settings::*;
