//! drills-core: the computations behind the `drills` console exercises.
//!
//! Each exercise is an independent module (matrix addition, three-number
//! sort, sign classification, the square/triple sequence, and the
//! smallest-index search). They share only the small container types in
//! [`math`], the line parsers in [`input`], and the [`error::DrillError`]
//! type. Nothing here touches stdin/stdout directly; the CLI crate wires
//! readers and writers to these functions.
pub mod error;
pub mod input;
pub mod math;
pub mod matrix_adder;
pub mod sequence;
pub mod sign;
pub mod smallest;
pub mod sorter;

pub use error::{DrillError, Result};
