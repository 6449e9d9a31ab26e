use std::path::Path;

use serde::Serialize;
use serde_json::json;

use eumr_core::{
    CompanyDirectory, EnvelopeError, FinancialDataProvider, ResolveError, TickerCandidate,
    TickerResolver, TickerUniverse,
};

use crate::cli::ResolveArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ResolveResponseData {
    query: String,
    candidates: Vec<TickerCandidate>,
}

pub fn run(
    args: &ResolveArgs,
    directory_path: Option<&Path>,
    provider: &dyn FinancialDataProvider,
) -> Result<CommandResult, CliError> {
    let query = args.name.trim();
    if query.is_empty() {
        return Err(CliError::Command(String::from(
            "company name must not be empty",
        )));
    }

    let chain = vec![provider.id()];

    // Directory failures are reported in-band: the caller asked a question
    // and gets a structured answer either way.
    let directory = match load_directory(directory_path) {
        Ok(directory) => directory,
        Err(error) => {
            let data = json!({ "query": query, "candidates": [] });
            return Ok(CommandResult::ok(data, chain).with_errors(vec![EnvelopeError::new(
                "directory.unavailable",
                error.to_string(),
            )?
            .with_retryable(false)]));
        }
    };

    let universe = TickerUniverse::builtin();
    let resolver = TickerResolver::new(&directory, &universe, provider);

    match resolver.resolve(query) {
        Ok(candidates) => {
            let empty = candidates.is_empty();
            let data = serde_json::to_value(ResolveResponseData {
                query: query.to_owned(),
                candidates,
            })?;

            let result = CommandResult::ok(data, chain);
            if empty {
                Ok(result.with_warning(format!("no ticker candidates matched '{query}'")))
            } else {
                Ok(result)
            }
        }
        Err(ResolveError::Provider(error)) => {
            let data = json!({ "query": query, "candidates": [] });
            Ok(CommandResult::ok(data, chain).with_errors(vec![EnvelopeError::new(
                error.code(),
                error.message(),
            )?
            .with_source(provider.id())
            .with_retryable(error.retryable())]))
        }
    }
}

fn load_directory(
    directory_path: Option<&Path>,
) -> Result<CompanyDirectory, eumr_core::DirectoryError> {
    match directory_path {
        Some(path) => CompanyDirectory::load(path),
        None => Ok(CompanyDirectory::builtin()),
    }
}
