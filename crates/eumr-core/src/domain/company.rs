use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Ticker, ValidationError};

/// Revenue broken down by geographic segment, as reported by a provider.
///
/// Region names are provider-reported labels ("Europe", "Greater China", ...);
/// no normalization is applied to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoRevenue(BTreeMap<String, f64>);

impl GeoRevenue {
    pub fn new(segments: BTreeMap<String, f64>) -> Result<Self, ValidationError> {
        for revenue in segments.values() {
            if !revenue.is_finite() {
                return Err(ValidationError::NonFiniteValue {
                    field: "geo_revenue segment",
                });
            }
            if *revenue < 0.0 {
                return Err(ValidationError::NegativeValue {
                    field: "geo_revenue segment",
                });
            }
        }

        Ok(Self(segments))
    }

    pub fn from_segments<I, K>(segments: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self::new(
            segments
                .into_iter()
                .map(|(region, revenue)| (region.into(), revenue))
                .collect(),
        )
    }

    /// Revenue reported for an exact region label, if present.
    pub fn segment(&self, region: &str) -> Option<f64> {
        self.0.get(region).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(region, revenue)| (region.as_str(), *revenue))
    }
}

/// Normalized per-company financial snapshot produced by a provider.
///
/// Immutable once constructed; all monetary amounts are in `currency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub ticker: Ticker,
    pub worldwide_revenue: f64,
    pub market_cap: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_revenue: Option<GeoRevenue>,
}

impl CompanyProfile {
    pub fn new(
        name: impl Into<String>,
        ticker: Ticker,
        worldwide_revenue: f64,
        market_cap: f64,
        currency: impl Into<String>,
        geo_revenue: Option<GeoRevenue>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyCompanyName);
        }

        validate_amount(worldwide_revenue, "worldwide_revenue")?;
        validate_amount(market_cap, "market_cap")?;

        let currency = currency.into();
        if !is_valid_currency(&currency) {
            return Err(ValidationError::InvalidCurrency { value: currency });
        }

        Ok(Self {
            name,
            ticker,
            worldwide_revenue,
            market_cap,
            currency,
            geo_revenue,
        })
    }
}

fn validate_amount(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

fn is_valid_currency(value: &str) -> bool {
    value.len() == 3 && value.chars().all(|ch| ch.is_ascii_uppercase())
}
