//! CLI argument definitions for eumr.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `resolve` | Resolve a company name to ticker candidates |
//! | `evaluate` | Screen a two-party merger against the EUMR thresholds |
//! | `report` | Render the plain-text compliance report for a merger |
//! | `sources` | List data provider capabilities |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings and in-band errors as failures |
//! | `--directory` | bundled | Path to a company directory JSON document |
//!
//! # Examples
//!
//! ```bash
//! # Resolve a company name
//! eumr resolve microsoft
//!
//! # Screen a merger with pretty JSON output
//! eumr evaluate MSFT ADBE --pretty
//!
//! # Render the compliance report with a custom exchange rate
//! eumr report MSFT AAPL --eur-usd-rate 1.08
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// eumr - EU merger control screening CLI
///
/// Resolves company names to tickers, combines two companies' financial
/// data into consolidated worldwide and EU revenue figures, and checks
/// them against both EUMR notification thresholds.
#[derive(Debug, Parser)]
#[command(
    name = "eumr",
    author,
    version,
    about = "EU merger control screening CLI"
)]
pub struct Cli {
    /// Output format for results.
    ///
    /// - json: Single JSON envelope (default)
    /// - table: ASCII layout for terminal display
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and in-band errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Path to a company directory JSON document (categories ->
    /// company name -> ticker). Defaults to the bundled directory.
    #[arg(long, global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON envelope output.
    Json,
    /// ASCII layout for terminal display.
    Table,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a free-form company name to ticker candidates.
    ///
    /// Uses the company directory as a fast path, then falls back to a
    /// fuzzy scan of the bundled index constituent lists.
    ///
    /// # Examples
    ///
    ///   eumr resolve microsoft
    ///   eumr resolve "Apple Inc."
    Resolve(ResolveArgs),

    /// Screen a proposed merger against both EUMR threshold regimes.
    ///
    /// Fails with a non-zero exit code when financial data is
    /// unavailable for either ticker.
    ///
    /// # Examples
    ///
    ///   eumr evaluate MSFT ADBE
    ///   eumr evaluate MSFT AAPL --eur-usd-rate 1.08 --pretty
    Evaluate(EvaluateArgs),

    /// Render the plain-text EUMR compliance report for a merger.
    ///
    /// Output is deterministic: identical inputs produce byte-identical
    /// reports.
    ///
    /// # Examples
    ///
    ///   eumr report MSFT AAPL
    Report(ReportArgs),

    /// List registered data providers and their endpoint capabilities.
    Sources(SourcesArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Free-form company name (e.g. "microsoft", "Apple Inc.").
    pub name: String,
}

/// Arguments for the `evaluate` command.
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Ticker of the first merging party.
    pub ticker1: String,

    /// Ticker of the second merging party.
    pub ticker2: String,

    /// Fixed EUR/USD rate (USD per euro) applied when converting to EUR.
    #[arg(long, value_name = "RATE")]
    pub eur_usd_rate: Option<f64>,
}

/// Arguments for the `report` command.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Ticker of the first merging party.
    pub ticker1: String,

    /// Ticker of the second merging party.
    pub ticker2: String,

    /// Fixed EUR/USD rate (USD per euro) applied when converting to EUR.
    #[arg(long, value_name = "RATE")]
    pub eur_usd_rate: Option<f64>,
}

/// Arguments for the `sources` command.
#[derive(Debug, Args)]
pub struct SourcesArgs {
    /// Include the full capability matrix per provider.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}
