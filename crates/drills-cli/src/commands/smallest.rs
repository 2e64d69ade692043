use std::io::Write;

use anyhow::Result;
use drills_core::input::{parse_dimension, parse_integer};
use drills_core::smallest::{describe, smallest_index, DEFAULT_VALUES};

/// Report the index of the smallest value.
///
/// With no `values` the built-in array is used. `size` defaults to the
/// number of values.
pub fn run<W: Write>(values: &[String], size: Option<&str>, mut output: W) -> Result<isize> {
    let values: Vec<i64> = if values.is_empty() {
        DEFAULT_VALUES.to_vec()
    } else {
        values
            .iter()
            .map(|raw| parse_integer(raw))
            .collect::<drills_core::Result<_>>()?
    };
    let size = match size {
        Some(raw) => parse_dimension(raw, "size")?,
        None => values.len(),
    };
    log::debug!("[Drills::Smallest] Scanning {} of {:?}", size, values);

    let index = smallest_index(&values, size)
        .inspect_err(|e| log::warn!("[Drills::Smallest] Rejected input: {}", e))?;
    writeln!(output, "{}", describe(index))?;
    Ok(index)
}
