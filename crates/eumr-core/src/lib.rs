//! Core contracts for eumr.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The financial data provider trait and structured provider errors
//! - Company directory and ticker universe sources
//! - Ticker resolution, EU revenue estimation, and EUMR threshold evaluation
//! - Plain-text report rendering and the response envelope

pub mod adapters;
pub mod directory;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod estimator;
pub mod evaluator;
pub mod provider;
pub mod report;
pub mod resolver;
pub mod universe;

pub use adapters::YahooAdapter;
pub use directory::{CompanyDirectory, DirectoryError};
pub use domain::{CompanyProfile, GeoRevenue, Ticker, UtcDateTime};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{CoreError, ValidationError};
pub use estimator::{estimate_eu_revenue, EuRevenueResult, ESTIMATED_EU_SHARE, EU_REGION_KEYS};
pub use evaluator::{
    advisory_notes, CombinedMetrics, CompanyAssessment, EumrVerdict, EvaluationError,
    EvaluatorConfig, MergerAnalysis, MergerEvaluator, ThresholdSet,
};
pub use provider::{
    CapabilitySet, Endpoint, FinancialDataProvider, ProviderError, ProviderErrorKind, ProviderId,
};
pub use report::render_report;
pub use resolver::{ResolveError, TickerCandidate, TickerResolver, LEGAL_SUFFIXES};
pub use universe::{IndexList, TickerUniverse, UniverseError};
