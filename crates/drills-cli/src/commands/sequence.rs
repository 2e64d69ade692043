use std::io::Write;

use anyhow::Result;
use drills_core::sequence::{generate_with, render_rows, SequenceLayout};

use crate::config::DrillsConfig;

/// Print the square/triple sequence. `row_width` overrides the configured width.
pub fn run<W: Write>(config: &DrillsConfig, row_width: Option<usize>, mut output: W) -> Result<()> {
    let mut layout = SequenceLayout::from(&config.sequence);
    if let Some(width) = row_width {
        layout.row_width = width;
    }
    log::debug!("[Drills::Sequence] Layout {:?}", layout);

    let values = generate_with(&layout)?;
    output.write_all(render_rows(&values, layout.row_width)?.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_prints_five_rows_of_ten() {
        let mut out = Vec::new();
        run(&DrillsConfig::default(), None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rows: Vec<Vec<&str>> = text.lines().map(|l| l.split_whitespace().collect()).collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.len() == 10));
        assert_eq!(rows[1][0], "100");
        assert_eq!(rows[3][0], "90");
        assert_eq!(rows[4][9], "147");
    }

    #[test]
    fn row_width_override() {
        let mut out = Vec::new();
        run(&DrillsConfig::default(), Some(25), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }

    #[test]
    fn zero_row_width_is_rejected() {
        assert!(run(&DrillsConfig::default(), Some(0), Vec::new()).is_err());
    }
}
