//! Element-wise addition of two equally shaped matrices.
//!
//! Dimensions are validated before anything is allocated: negative values
//! never reach this module (see [`crate::input::parse_dimension`]) and values
//! above a caller-supplied limit are rejected, as are shapes with more than
//! [`MAX_CELLS`] cells. A zero dimension is legal and produces empty matrices.

use crate::error::{DrillError, Result};
use crate::input::parse_dimension;
use crate::math::Array2;

/// Separator printed between the two operands.
pub const PLUS_SEPARATOR: &str = "++";
/// Separator printed between the second operand and the sum.
pub const EQUALS_SEPARATOR: &str = "===";
/// Upper bound on `rows * columns`, whatever the per-dimension limit.
pub const MAX_CELLS: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub fn new(rows: usize, columns: usize, max_dimension: usize) -> Result<Self> {
        for (name, value) in [("number of rows", rows), ("number of columns", columns)] {
            if value > max_dimension {
                return Err(DrillError::invalid(format!(
                    "{} is {}, the limit is {}",
                    name, value, max_dimension
                )));
            }
        }
        match rows.checked_mul(columns) {
            Some(cells) if cells <= MAX_CELLS => Ok(Self { rows, columns }),
            _ => Err(DrillError::invalid(format!(
                "a {}x{} matrix exceeds the limit of {} cells",
                rows, columns, MAX_CELLS
            ))),
        }
    }

    /// Validate raw `rows` / `columns` text as typed by the user.
    pub fn parse(rows: &str, columns: &str, max_dimension: usize) -> Result<Self> {
        let rows = parse_dimension(rows, "number of rows")?;
        let columns = parse_dimension(columns, "number of columns")?;
        Self::new(rows, columns, max_dimension)
    }

    pub fn as_shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }
}

/// Build a matrix of `dims` from row-major values.
pub fn matrix_from_values(dims: Dimensions, values: Vec<f64>) -> Result<Array2<f64>> {
    Ok(Array2::from_shape_vec(dims.as_shape(), values)?)
}

/// Return `a + b` cell by cell.
pub fn add_matrices(a: &Array2<f64>, b: &Array2<f64>) -> Result<Array2<f64>> {
    if a.shape() != b.shape() {
        return Err(DrillError::invalid(format!(
            "cannot add a {}x{} matrix to a {}x{} matrix",
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols()
        )));
    }
    Ok(a + b)
}

/// Format both operands and their sum, separated by `++` and `===` lines.
pub fn render_report(a: &Array2<f64>, b: &Array2<f64>, sum: &Array2<f64>) -> String {
    format!(
        "{}{}\n{}{}\n{}",
        a, PLUS_SEPARATOR, b, EQUALS_SEPARATOR, sum
    )
}
