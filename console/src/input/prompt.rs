use anyhow::{bail, Context, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Path chosen at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    Example,
    Manual,
}

/// Asks whether to run the built-in example or enter matrices by hand.
///
/// An answer whose first character is `e` or `E` selects the example;
/// anything else means manual entry.
pub fn read_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<EntryMode> {
    write!(
        output,
        "Use the built-in example (e) or enter matrices manually (m)? [e/m]: "
    )
    .context("writing mode prompt")?;
    output.flush().context("flushing mode prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading mode choice")?;
    if read == 0 {
        bail!("input ended before a mode was chosen");
    }
    match line.trim().chars().next() {
        Some('e') | Some('E') => Ok(EntryMode::Example),
        _ => Ok(EntryMode::Manual),
    }
}

/// Prompts until the stream yields a value of `T` inside `min..=max`.
///
/// Malformed text and out-of-range values are answered with a short error
/// line and a fresh prompt; the end of the input stream is an error.
pub fn read_bounded<T, R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    min: T,
    max: T,
) -> Result<T>
where
    T: FromStr + PartialOrd + Display,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{prompt}").context("writing prompt")?;
        output.flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("reading value")?;
        if read == 0 {
            bail!("input ended before a value was provided");
        }

        match line.trim().parse::<T>() {
            Ok(value) if value < min || value > max => {
                writeln!(output, "Error: the value must be between {min} and {max}.")
                    .context("writing range notice")?;
            }
            Ok(value) => return Ok(value),
            Err(_) => {
                writeln!(output, "Error: enter a valid number.")
                    .context("writing retry notice")?;
            }
        }
    }
}
