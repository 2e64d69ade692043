use std::io::{BufRead, Write};

use anyhow::Result;
use drills_core::input::{parse_number, Prompter};
use drills_core::sorter::{format_triple, sort_in_place};

use crate::config::DrillsConfig;

/// Sort three numbers taken from `args`, or prompted for when `args` is empty.
pub fn run<R: BufRead, W: Write>(
    config: &DrillsConfig,
    args: &[String],
    input: R,
    output: W,
) -> Result<()> {
    let mut prompter = Prompter::new(input, output).show_prompts(config.show_prompts);
    let mut values = [0f64; 3];

    if args.is_empty() {
        for (i, slot) in values.iter_mut().enumerate() {
            let prompt = format!("Enter Number{}", i + 1);
            *slot = prompter
                .ask_number(&prompt, &format!("number {}", i + 1))
                .inspect_err(|e| log::warn!("[Drills::Sort] Rejected input: {}", e))?;
        }
    } else {
        anyhow::ensure!(
            args.len() == values.len(),
            "expected exactly 3 numbers, got {}",
            args.len()
        );
        for (slot, raw) in values.iter_mut().zip(args) {
            *slot = parse_number(raw)?;
        }
    }

    log::debug!("[Drills::Sort] Sorting {:?}", values);
    sort_in_place(&mut values);
    writeln!(prompter.writer(), "{}", format_triple(&values))?;
    Ok(())
}
