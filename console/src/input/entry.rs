use crate::input::prompt;
use anyhow::{Context, Result};
use matcore::prelude::EntryLimits;
use matcore::Matrix;
use std::io::{BufRead, Write};

/// Collects one matrix interactively: dimensions first, then every cell.
///
/// Dimensions are bounded by `1..=max_rows` / `1..=max_cols` and cell values
/// by the configured magnitude, so the core only ever sees validated input.
pub fn read_matrix<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    name: &str,
    limits: &EntryLimits,
) -> Result<Matrix> {
    writeln!(output, "\n=== Matrix {name} entry ===").context("writing entry header")?;

    let rows: usize = prompt::read_bounded(input, output, "Number of rows: ", 1, limits.max_rows)?;
    let cols: usize =
        prompt::read_bounded(input, output, "Number of columns: ", 1, limits.max_cols)?;

    let mut matrix = Matrix::zeros(rows, cols)?;
    writeln!(output, "Enter the elements row by row:").context("writing entry instructions")?;
    for row in 0..rows {
        writeln!(output, "Row {}:", row + 1).context("writing row label")?;
        for col in 0..cols {
            let value: f64 = prompt::read_bounded(
                input,
                output,
                &format!("Element [{}][{}]: ", row + 1, col + 1),
                -limits.value_limit,
                limits.value_limit,
            )?;
            matrix.set(row, col, value)?;
        }
    }

    Ok(matrix)
}
