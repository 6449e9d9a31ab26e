use serde::Serialize;

use eumr_core::{CapabilitySet, FinancialDataProvider};

use crate::cli::SourcesArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct SourcesResponseData {
    sources: Vec<SourceEntry>,
}

#[derive(Debug, Serialize)]
struct SourceEntry {
    id: &'static str,
    endpoints: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    capabilities: Option<CapabilitySet>,
}

pub fn run(
    args: &SourcesArgs,
    provider: &dyn FinancialDataProvider,
) -> Result<CommandResult, CliError> {
    let capabilities = provider.capabilities();
    let entry = SourceEntry {
        id: provider.id().as_str(),
        endpoints: capabilities.supported_endpoints(),
        capabilities: args.verbose.then_some(capabilities),
    };

    let data = serde_json::to_value(SourcesResponseData {
        sources: vec![entry],
    })?;

    Ok(CommandResult::ok(data, vec![provider.id()]))
}
