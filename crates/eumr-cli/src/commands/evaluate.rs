use serde::Serialize;

use eumr_core::{
    EvaluatorConfig, FinancialDataProvider, MergerAnalysis, MergerEvaluator, Ticker,
};

use crate::cli::EvaluateArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct EvaluateResponseData {
    analysis: MergerAnalysis,
    display: DisplaySummary,
}

/// Headline figures pre-formatted for terminal display.
#[derive(Debug, Serialize)]
struct DisplaySummary {
    notification_required: &'static str,
    company1_market_cap: String,
    company2_market_cap: String,
    combined_market_cap: String,
}

pub fn run(
    args: &EvaluateArgs,
    provider: &dyn FinancialDataProvider,
) -> Result<CommandResult, CliError> {
    let analysis = evaluate_pair(
        &args.ticker1,
        &args.ticker2,
        args.eur_usd_rate,
        provider,
    )?;

    let display = DisplaySummary {
        notification_required: if analysis.verdict.notification_required {
            "YES"
        } else {
            "NO"
        },
        company1_market_cap: format_market_cap(analysis.company1.profile.market_cap),
        company2_market_cap: format_market_cap(analysis.company2.profile.market_cap),
        combined_market_cap: format_market_cap(analysis.combined.market_cap_usd),
    };

    let data = serde_json::to_value(EvaluateResponseData { analysis, display })?;

    Ok(CommandResult::ok(data, vec![provider.id()]))
}

/// Shared parse-configure-evaluate path for `evaluate` and `report`.
pub(super) fn evaluate_pair(
    ticker1: &str,
    ticker2: &str,
    eur_usd_rate: Option<f64>,
    provider: &dyn FinancialDataProvider,
) -> Result<MergerAnalysis, CliError> {
    let ticker1 = Ticker::parse(ticker1)?;
    let ticker2 = Ticker::parse(ticker2)?;

    let config = match eur_usd_rate {
        Some(rate) => EvaluatorConfig::with_rate(rate)?,
        None => EvaluatorConfig::default(),
    };

    let evaluator = MergerEvaluator::new(provider, config);
    Ok(evaluator.evaluate(&ticker1, &ticker2)?)
}

/// Human-scale market cap rendering: `$2.95T`, `$241.00B`, `$52.10M`.
fn format_market_cap(value: f64) -> String {
    if value >= 1_000_000_000_000.0 {
        format!("${:.2}T", value / 1_000_000_000_000.0)
    } else if value >= 1_000_000_000.0 {
        format!("${:.2}B", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else {
        format!("${value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_market_caps() {
        assert_eq!(format_market_cap(2_950_000_000_000.0), "$2.95T");
        assert_eq!(format_market_cap(241_000_000_000.0), "$241.00B");
        assert_eq!(format_market_cap(52_100_000.0), "$52.10M");
        assert_eq!(format_market_cap(950.5), "$950.50");
    }
}
