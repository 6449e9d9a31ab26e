mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::commands::CommandOutput;
use crate::error::CliError;

fn main() {
    init_tracing();

    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    match commands::run(&cli)? {
        CommandOutput::Envelope(envelope) => {
            output::render(&envelope, cli.format, cli.pretty)?;

            if cli.strict && (!envelope.meta.warnings.is_empty() || !envelope.errors.is_empty()) {
                return Err(CliError::StrictModeViolation {
                    warning_count: envelope.meta.warnings.len(),
                    error_count: envelope.errors.len(),
                });
            }
        }
        CommandOutput::Text(text) => print!("{text}"),
    }

    Ok(())
}

/// Diagnostics go to stderr so stdout stays machine-readable.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
