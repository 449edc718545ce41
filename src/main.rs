use anyhow::{Context, Result};
use ball_clock::io::input::{self, RunMode};
use ball_clock::io::reporting;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Ball clock cycle calculator.
///
/// Reads ball counts (27-127), one per line, from stdin until a 0 and prints
/// how many days each clock takes to return to its starting order.
#[derive(Parser, Debug)]
#[command(name = "ball-clock", version, about, long_about = None)]
struct Cli {
    /// Only validate the input, do not run any clocks
    #[arg(long)]
    check: bool,

    /// Also write the cycle reports to this CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Log more (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Results go to stdout, so logs stay on stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let mode = if cli.check {
        RunMode::ValidateOnly
    } else {
        RunMode::Simulate
    };

    // Input length is unknown, so results are computed as lines arrive.
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let reports = input::run(stdin, &mut stdout, mode)?;
    stdout.flush().context("flushing results")?;

    if let Some(path) = &cli.csv {
        reporting::write_cycle_log(path, &reports)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
