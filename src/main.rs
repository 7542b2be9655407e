use std::io::{self, Write};
use std::process;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use clap::error::ErrorKind;

use gobench::errors::BenchError;
use gobench::executor::ShellExecutor;
use gobench::report::{self, Report};
use gobench::runner;
use gobench::types::{DEFAULT_LAUNCHER, Invocation, OutputFormat, parse_repetition};

#[derive(Parser)]
#[command(
    name = "gobench",
    version,
    about = "Time repeated runs of a program and report mean, stdev and standard error"
)]
struct Cli {
    /// Program entry point passed to the launcher
    #[arg(allow_hyphen_values = true)]
    entry: String,

    /// Number of times to run it
    #[arg(allow_hyphen_values = true)]
    repetition: String,

    /// Command placed in front of the entry
    #[arg(long, default_value = DEFAULT_LAUNCHER)]
    launcher: String,

    #[arg(long, default_value = "default")]
    format: OutputFormat,

    #[arg(long)]
    json: bool,

    /// Log per-trial details to stderr (-vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_cli() -> Result<Cli> {
    match Cli::try_parse() {
        Ok(cli) => Ok(cli),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => Err(BenchError::Usage.into()),
        },
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "gobench=warn",
        1 => "gobench=debug",
        _ => "gobench=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = parse_cli()?;
    init_logging(cli.verbose);

    let repetition = parse_repetition(&cli.repetition)?;
    let invocation = Invocation::new(&cli.launcher, &cli.entry);
    tracing::info!(command = invocation.command(), repetition, "starting experiment");

    let started_at = Utc::now();
    let sample = runner::run_trials(&invocation, repetition, &mut ShellExecutor);
    let report = Report::from_values(&sample.seconds(), repetition)?;

    let output = if cli.json {
        report::format_json(&invocation, repetition, &sample, &report, started_at)?
    } else {
        report::format_text(&invocation, repetition, &report, &cli.format)
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // Argument errors belong with the rest of the user-facing output.
        match err.downcast_ref::<BenchError>() {
            Some(BenchError::Usage | BenchError::InvalidRepetition { .. }) => println!("{}", err),
            _ => eprintln!("{}", err),
        }
        process::exit(1);
    }
}
