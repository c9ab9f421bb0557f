use clap::Parser;
use input::prompt::{self, EntryMode};
use matcore::prelude::{MatrixError, DEFAULT_MAX_DIMENSION};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use workflow::config::ConsoleConfig;
use workflow::runner::Runner;

mod input;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Interactive console for overflow-checked matrix products")]
struct Args {
    /// Run the built-in example without prompting for a mode
    #[arg(long, default_value_t = false)]
    example: bool,
    /// Load entry limits from YAML
    #[arg(long)]
    limits: Option<PathBuf>,
    /// Largest row count accepted during manual entry
    #[arg(long, default_value_t = DEFAULT_MAX_DIMENSION)]
    max_rows: usize,
    /// Largest column count accepted during manual entry
    #[arg(long, default_value_t = DEFAULT_MAX_DIMENSION)]
    max_cols: usize,
    /// Largest element magnitude accepted during manual entry
    #[arg(long, default_value = "1e100")]
    value_limit: f64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        report_failure(&err);
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match &args.limits {
        Some(path) => ConsoleConfig::load(path)?,
        None => ConsoleConfig::from_args(args.max_rows, args.max_cols, args.value_limit)?,
    };
    let limits = config.to_entry_limits();
    let runner = Runner::new();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    writeln!(output, "Matrix product console")?;
    if args.example {
        runner.run_example(&mut output)?;
    } else {
        match prompt::read_mode(&mut input, &mut output)? {
            EntryMode::Example => runner.run_example(&mut output)?,
            EntryMode::Manual => runner.run_manual(&mut input, &mut output, &limits)?,
        }
    }

    let metrics = runner.metrics();
    log::info!(
        "session complete: products={} failures={}",
        metrics.products,
        metrics.failures
    );
    Ok(())
}

/// Prints one kind-prefixed line for the failure that ended the session.
fn report_failure(err: &anyhow::Error) {
    eprintln!("{}: {err:#}", failure_prefix(err));
}

/// Classifies a session failure into the prefix its report line carries.
fn failure_prefix(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<MatrixError>() {
        Some(
            MatrixError::InvalidDimensions { .. }
            | MatrixError::ShapeMismatch { .. }
            | MatrixError::DimensionMismatch { .. },
        ) => "argument error",
        Some(MatrixError::IndexOutOfRange { .. }) => "range error",
        Some(MatrixError::SizeOverflow { .. } | MatrixError::ArithmeticOverflow(_)) => {
            "overflow error"
        }
        Some(MatrixError::MultiplicationFailed(_)) => "runtime error",
        None => "unexpected error",
    }
}
