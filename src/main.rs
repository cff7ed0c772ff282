#![forbid(unsafe_code)]
//! readmegen command line interface

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;

use readmegen::{execute_generate, GenerateOptions, ReadmeError, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(name = "readmegen")]
#[command(about = "Answer a few questions, get a formatted README.md")]
#[command(version)]
struct Cli {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Read answers from a JSON or YAML file instead of prompting
    #[arg(short, long)]
    answers: Option<PathBuf>,

    /// Render through a Handlebars template instead of the built-in layout
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Print the README to stdout instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.quiet, cli.verbose) {
        eprintln!("{} {}", style("✗").red(), e);
        return ExitCode::FAILURE;
    }

    let options = GenerateOptions {
        output: cli.output,
        answers: cli.answers,
        template: cli.template,
        stdout: cli.stdout,
    };

    match execute_generate(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(report(&e)),
    }
}

/// Print a pipeline error to stderr and return the exit status for it
fn report(err: &ReadmeError) -> u8 {
    match err {
        ReadmeError::InputAborted(reason) => {
            tracing::debug!(%reason, "prompt sequence aborted");
            eprintln!("{} Aborted", style("✗").red());
        }
        other => eprintln!("{} {}", style("✗").red(), other),
    }
    u8::try_from(err.exit_code()).unwrap_or(1)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))?;

    Ok(())
}
