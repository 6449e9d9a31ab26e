use eumr_core::{render_report, FinancialDataProvider};

use crate::cli::ReportArgs;
use crate::error::CliError;

use super::evaluate::evaluate_pair;

pub fn run(args: &ReportArgs, provider: &dyn FinancialDataProvider) -> Result<String, CliError> {
    let analysis = evaluate_pair(
        &args.ticker1,
        &args.ticker2,
        args.eur_usd_rate,
        provider,
    )?;

    Ok(render_report(&analysis))
}
