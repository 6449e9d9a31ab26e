use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CompanyProfile, GeoRevenue, Ticker, ValidationError};

/// Canonical provider identifiers used in metadata and envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Yahoo,
}

impl ProviderId {
    pub const ALL: [Self; 1] = [Self::Yahoo];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yahoo => "yahoo",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "yahoo" => Ok(Self::Yahoo),
            other => Err(ValidationError::InvalidProvider {
                value: other.to_owned(),
            }),
        }
    }
}

/// Data endpoint type used for capability checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Profile,
    GeoRevenue,
}

impl Endpoint {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::GeoRevenue => "geo_revenue",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported endpoint matrix for a financial data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    pub profile: bool,
    pub geo_revenue: bool,
}

impl CapabilitySet {
    pub const fn new(profile: bool, geo_revenue: bool) -> Self {
        Self {
            profile,
            geo_revenue,
        }
    }

    pub const fn full() -> Self {
        Self::new(true, true)
    }

    pub const fn supports(self, endpoint: Endpoint) -> bool {
        match endpoint {
            Endpoint::Profile => self.profile,
            Endpoint::GeoRevenue => self.geo_revenue,
        }
    }

    pub fn supported_endpoints(self) -> Vec<&'static str> {
        let mut values = Vec::with_capacity(2);
        if self.profile {
            values.push("profile");
        }
        if self.geo_revenue {
            values.push("geo_revenue");
        }
        values
    }
}

/// Provider-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    NotFound,
    Unavailable,
    Timeout,
    InvalidRequest,
    Internal,
}

/// Structured provider error.
///
/// `NotFound` covers both unknown tickers and tickers with no annual
/// financial statement; consumers decide whether that is fatal (evaluation)
/// or a skip (resolver fallback scan).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    kind: ProviderErrorKind,
    message: String,
    retryable: bool,
}

impl ProviderError {
    pub fn not_found(ticker: &Ticker) -> Self {
        Self {
            kind: ProviderErrorKind::NotFound,
            message: format!("no financial data available for '{ticker}'"),
            retryable: false,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Timeout,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> ProviderErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            ProviderErrorKind::NotFound => "provider.not_found",
            ProviderErrorKind::Unavailable => "provider.unavailable",
            ProviderErrorKind::Timeout => "provider.timeout",
            ProviderErrorKind::InvalidRequest => "provider.invalid_request",
            ProviderErrorKind::Internal => "provider.internal",
        }
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for ProviderError {}

/// Financial data provider contract.
///
/// Calls are blocking, idempotent reads. Implementations backed by a network
/// service are expected to enforce a bounded per-call timeout and surface it
/// as `ProviderError::timeout`.
pub trait FinancialDataProvider: Send + Sync {
    fn id(&self) -> ProviderId;
    fn capabilities(&self) -> CapabilitySet;

    /// Company name, latest annual revenue, market cap, currency, and the
    /// geographic revenue breakdown where the provider reports one.
    fn profile(&self, ticker: &Ticker) -> Result<CompanyProfile, ProviderError>;

    /// Geographic revenue breakdown alone; `Ok(None)` when the provider has
    /// no segment data for the ticker.
    fn geo_revenue(&self, ticker: &Ticker) -> Result<Option<GeoRevenue>, ProviderError> {
        Ok(self.profile(ticker)?.geo_revenue)
    }
}
