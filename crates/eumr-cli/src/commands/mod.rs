mod evaluate;
mod report;
mod resolve;
mod sources;

use std::time::Instant;

use eumr_core::{Envelope, EnvelopeMeta, ProviderId, YahooAdapter};
use serde_json::Value;
use uuid::Uuid;

use crate::cli::{Cli, Command};
use crate::error::CliError;

const SCHEMA_VERSION: &str = "v1.0.0";

/// Rendered output of a command: a machine-readable envelope or, for the
/// compliance report, the byte-stable text artifact itself.
pub enum CommandOutput {
    Envelope(Envelope<Value>),
    Text(String),
}

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<eumr_core::EnvelopeError>,
    pub provider_chain: Vec<ProviderId>,
}

impl CommandResult {
    pub fn ok(data: Value, provider_chain: Vec<ProviderId>) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
            provider_chain,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<eumr_core::EnvelopeError>) -> Self {
        self.errors.extend(errors);
        self
    }
}

pub fn run(cli: &Cli) -> Result<CommandOutput, CliError> {
    let provider = YahooAdapter::default();
    let started = Instant::now();

    let result = match &cli.command {
        Command::Resolve(args) => resolve::run(args, cli.directory.as_deref(), &provider)?,
        Command::Evaluate(args) => evaluate::run(args, &provider)?,
        Command::Report(args) => {
            return report::run(args, &provider).map(CommandOutput::Text);
        }
        Command::Sources(args) => sources::run(args, &provider)?,
    };

    let CommandResult {
        data,
        warnings,
        errors,
        provider_chain,
    } = result;

    let mut meta = EnvelopeMeta::new(
        Uuid::new_v4().to_string(),
        SCHEMA_VERSION,
        provider_chain,
        elapsed_ms(started),
    )?;

    for warning in warnings {
        meta.push_warning(warning);
    }

    Envelope::with_errors(meta, data, errors)
        .map(CommandOutput::Envelope)
        .map_err(CliError::from)
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis().min(u128::from(u64::MAX)) as u64
}
