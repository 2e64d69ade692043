//! The square/triple sequence.
//!
//! Index `i` below the split maps to `i * i`, every index from the split on
//! maps to `i * 3`. The default layout is 50 values split at 25 and printed
//! 10 per row.

use crate::error::{DrillError, Result};
use crate::math::Array1;

pub const SEQUENCE_LEN: usize = 50;
pub const SPLIT_INDEX: usize = 25;
pub const ROW_WIDTH: usize = 10;
/// Longest sequence a layout may ask for.
pub const MAX_SEQUENCE_LEN: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceLayout {
    pub len: usize,
    pub split: usize,
    pub row_width: usize,
}

impl Default for SequenceLayout {
    fn default() -> Self {
        Self {
            len: SEQUENCE_LEN,
            split: SPLIT_INDEX,
            row_width: ROW_WIDTH,
        }
    }
}

impl SequenceLayout {
    pub fn validate(&self) -> Result<()> {
        if self.row_width == 0 {
            return Err(DrillError::invalid("row width must be at least 1"));
        }
        if self.len > MAX_SEQUENCE_LEN {
            return Err(DrillError::invalid(format!(
                "sequence length {} exceeds the limit of {}",
                self.len, MAX_SEQUENCE_LEN
            )));
        }
        if self.split > self.len {
            return Err(DrillError::invalid(format!(
                "split index {} is past the sequence length {}",
                self.split, self.len
            )));
        }
        Ok(())
    }

    pub fn value_at(&self, index: usize) -> f64 {
        let i = index as f64;
        if index < self.split {
            i * i
        } else {
            i * 3.0
        }
    }
}

/// Value at `index` under the default split.
pub fn value_at(index: usize) -> f64 {
    SequenceLayout::default().value_at(index)
}

/// The default 50-value sequence.
pub fn generate() -> Array1<f64> {
    let layout = SequenceLayout::default();
    (0..layout.len).map(|i| layout.value_at(i)).collect()
}

pub fn generate_with(layout: &SequenceLayout) -> Result<Array1<f64>> {
    layout.validate()?;
    Ok((0..layout.len).map(|i| layout.value_at(i)).collect())
}

/// Print `row_width` values per line, right-aligned to the widest value.
pub fn render_rows(values: &Array1<f64>, row_width: usize) -> Result<String> {
    if row_width == 0 {
        return Err(DrillError::invalid("row width must be at least 1"));
    }
    let cells = values.mapv(|v| v.to_string());
    let width = cells.iter().map(|c| c.len()).max().unwrap_or(0);

    let mut out = String::new();
    for row in cells.chunks(row_width) {
        let line = row
            .iter()
            .map(|c| format!("{:>width$}", c, width = width))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}
