//! Small ndarray-like types used by the exercises.
//!
//! Provides `Array2` (2D, row-major) and `Array1` (1D) containers whose
//! shape is fixed at construction, with just the operations the exercises
//! need.
pub mod matrix;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use vector::Array1;
