use std::{
    fs::{read_to_string, File},
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use abaplite::{
    interpreter::input::{BufReadSource, LineSource},
    run_source, Outcome,
};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "abaplite")]
#[command(about = "Checks and runs programs written in a small ABAP-like report language")]
struct Cli {
    /// Program to check and run
    #[arg(short, long)]
    source: PathBuf,

    /// File holding one parameter value per line (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    install_tracing();

    let cli = Cli::parse();

    let contents = read_to_string(&cli.source)
        .with_context(|| format!("failed to read {}", cli.source.display()))?;
    let file_name = source_name(&cli.source);

    let mut input: Box<dyn LineSource> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReadSource::new(BufReader::new(file)))
        }
        None => Box::new(BufReadSource::new(io::stdin().lock())),
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();

    let outcome = run_source(contents, &file_name, input.as_mut(), &mut output);
    output.flush().context("failed to flush stdout")?;

    Ok(report(&outcome))
}

/// Diagnostics name the source exactly as it was given on the command line.
fn source_name(path: &Path) -> String {
    path.display().to_string()
}

/// Prints every error of `outcome` to stderr and picks the exit code.
fn report(outcome: &Outcome) -> ExitCode {
    for error in outcome.errors() {
        debug!(name = error.get_error_name(), category = ?error.get_category(), "reporting error");
        eprintln!("{}", error);
    }

    match outcome {
        Outcome::Finished => ExitCode::SUCCESS,
        Outcome::SyntaxError(_) | Outcome::Rejected(_) => {
            info!("program was not run");
            ExitCode::from(1)
        }
        Outcome::Aborted(_) => ExitCode::from(2),
    }
}

fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
