use std::io::{BufRead, Write};

use anyhow::Result;
use drills_core::input::Prompter;
use drills_core::math::Array2;
use drills_core::matrix_adder::{add_matrices, matrix_from_values, render_report, Dimensions};

use crate::config::DrillsConfig;

/// Read two matrices of the same shape and print them with their sum.
pub fn run<R: BufRead, W: Write>(config: &DrillsConfig, input: R, output: W) -> Result<Array2<f64>> {
    let mut prompter = Prompter::new(input, output).show_prompts(config.show_prompts);

    let dims = read_dimensions(&mut prompter, config.matrix.max_dimension)
        .inspect_err(|e| log::warn!("[Drills::Matrix] Rejected dimensions: {}", e))?;
    log::debug!("[Drills::Matrix] Reading two {}x{} matrices", dims.rows, dims.columns);

    let a = read_matrix(&mut prompter, dims, "Matrix1")?;
    let b = read_matrix(&mut prompter, dims, "Matrix2")?;
    let sum = add_matrices(&a, &b)?;

    prompter
        .writer()
        .write_all(render_report(&a, &b, &sum).as_bytes())?;
    Ok(sum)
}

fn read_dimensions<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    max_dimension: usize,
) -> drills_core::Result<Dimensions> {
    let rows = prompter.ask_dimension("Enter the number of rows: ", "number of rows")?;
    let columns = prompter.ask_dimension("Enter the number of columns: ", "number of columns")?;
    Dimensions::new(rows, columns, max_dimension)
}

fn read_matrix<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    dims: Dimensions,
    name: &str,
) -> drills_core::Result<Array2<f64>> {
    prompter.prompt(&format!("Enter values for {}", name))?;
    let mut values = Vec::new();
    for j in 0..dims.rows {
        for k in 0..dims.columns {
            let prompt = format!("Enter value for element[{},{}]", j, k);
            let what = format!("{} element [{},{}]", name, j, k);
            values.push(prompter.ask_number(&prompt, &what)?);
        }
    }
    matrix_from_values(dims, values)
}
