use crate::provider::{
    CapabilitySet, FinancialDataProvider, ProviderError, ProviderId,
};
use crate::{CompanyProfile, GeoRevenue, Ticker, ValidationError};

/// Deterministic Yahoo adapter backed by a static fundamentals catalog.
///
/// Serves a fixed snapshot of large-cap annual figures; tickers outside the
/// catalog report `provider.not_found`, which is what a live upstream
/// returns for a symbol with no annual financial statement.
#[derive(Debug, Clone, Default)]
pub struct YahooAdapter;

impl FinancialDataProvider for YahooAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Yahoo
    }

    fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::full()
    }

    fn profile(&self, ticker: &Ticker) -> Result<CompanyProfile, ProviderError> {
        let payload = yahoo_catalog()
            .into_iter()
            .find(|entry| entry.ticker == ticker.as_str())
            .ok_or_else(|| ProviderError::not_found(ticker))?;

        normalize_profile(payload)
    }
}

/// Raw catalog row in the upstream's vocabulary.
#[derive(Debug, Clone)]
struct YahooCompanyPayload {
    ticker: &'static str,
    long_name: &'static str,
    total_revenue: f64,
    market_cap: f64,
    currency: &'static str,
    geo_segments: Option<&'static [(&'static str, f64)]>,
}

fn normalize_profile(payload: YahooCompanyPayload) -> Result<CompanyProfile, ProviderError> {
    let ticker = Ticker::parse(payload.ticker).map_err(validation_to_error)?;

    let geo_revenue = payload
        .geo_segments
        .map(|segments| GeoRevenue::from_segments(segments.iter().copied()))
        .transpose()
        .map_err(validation_to_error)?;

    CompanyProfile::new(
        payload.long_name,
        ticker,
        payload.total_revenue,
        payload.market_cap,
        payload.currency,
        geo_revenue,
    )
    .map_err(validation_to_error)
}

fn validation_to_error(error: ValidationError) -> ProviderError {
    ProviderError::internal(error.to_string())
}

/// FY2023-magnitude snapshot. Geographic segments are carried only where
/// the upstream filing reports them at region granularity.
fn yahoo_catalog() -> Vec<YahooCompanyPayload> {
    const APPLE_SEGMENTS: &[(&str, f64)] = &[
        ("Americas", 162_560_000_000.0),
        ("Europe", 94_294_000_000.0),
        ("Greater China", 72_559_000_000.0),
        ("Japan", 24_257_000_000.0),
        ("Rest of Asia Pacific", 29_615_000_000.0),
    ];
    const ALPHABET_SEGMENTS: &[(&str, f64)] = &[
        ("United States", 146_286_000_000.0),
        ("EMEA", 91_038_000_000.0),
        ("APAC", 51_514_000_000.0),
        ("Other Americas", 18_320_000_000.0),
    ];
    const SAP_SEGMENTS: &[(&str, f64)] = &[
        ("EMEA", 15_147_000_000.0),
        ("Americas", 13_760_000_000.0),
        ("APJ", 5_355_000_000.0),
    ];
    const ASML_SEGMENTS: &[(&str, f64)] = &[
        ("Europe", 7_459_000_000.0),
        ("Asia", 19_012_000_000.0),
        ("United States", 3_367_000_000.0),
    ];
    // Region-only reporter with no EU-attributable label; exercises the
    // estimate fallback despite segment data being present.
    const TSMC_SEGMENTS: &[(&str, f64)] = &[
        ("Asia", 48_512_000_000.0),
        ("Americas", 20_788_000_000.0),
    ];

    vec![
        YahooCompanyPayload {
            ticker: "AAPL",
            long_name: "Apple Inc.",
            total_revenue: 383_285_000_000.0,
            market_cap: 2_950_000_000_000.0,
            currency: "USD",
            geo_segments: Some(APPLE_SEGMENTS),
        },
        YahooCompanyPayload {
            ticker: "MSFT",
            long_name: "Microsoft Corporation",
            total_revenue: 211_915_000_000.0,
            market_cap: 3_090_000_000_000.0,
            currency: "USD",
            geo_segments: None,
        },
        YahooCompanyPayload {
            ticker: "GOOGL",
            long_name: "Alphabet Inc.",
            total_revenue: 307_394_000_000.0,
            market_cap: 2_180_000_000_000.0,
            currency: "USD",
            geo_segments: Some(ALPHABET_SEGMENTS),
        },
        YahooCompanyPayload {
            ticker: "AMZN",
            long_name: "Amazon.com, Inc.",
            total_revenue: 574_785_000_000.0,
            market_cap: 1_920_000_000_000.0,
            currency: "USD",
            geo_segments: None,
        },
        YahooCompanyPayload {
            ticker: "NVDA",
            long_name: "NVIDIA Corporation",
            total_revenue: 60_922_000_000.0,
            market_cap: 3_010_000_000_000.0,
            currency: "USD",
            geo_segments: None,
        },
        YahooCompanyPayload {
            ticker: "TSLA",
            long_name: "Tesla, Inc.",
            total_revenue: 96_773_000_000.0,
            market_cap: 1_030_000_000_000.0,
            currency: "USD",
            geo_segments: None,
        },
        YahooCompanyPayload {
            ticker: "ADBE",
            long_name: "Adobe Inc.",
            total_revenue: 19_409_000_000.0,
            market_cap: 241_000_000_000.0,
            currency: "USD",
            geo_segments: None,
        },
        YahooCompanyPayload {
            ticker: "SAP",
            long_name: "SAP SE",
            total_revenue: 34_810_000_000.0,
            market_cap: 232_000_000_000.0,
            currency: "USD",
            geo_segments: Some(SAP_SEGMENTS),
        },
        YahooCompanyPayload {
            ticker: "ASML",
            long_name: "ASML Holding N.V.",
            total_revenue: 29_838_000_000.0,
            market_cap: 368_000_000_000.0,
            currency: "USD",
            geo_segments: Some(ASML_SEGMENTS),
        },
        YahooCompanyPayload {
            ticker: "TSM",
            long_name: "Taiwan Semiconductor Manufacturing Company Limited",
            total_revenue: 69_300_000_000.0,
            market_cap: 902_000_000_000.0,
            currency: "USD",
            geo_segments: Some(TSMC_SEGMENTS),
        },
        YahooCompanyPayload {
            ticker: "KO",
            long_name: "The Coca-Cola Company",
            total_revenue: 45_754_000_000.0,
            market_cap: 262_000_000_000.0,
            currency: "USD",
            geo_segments: None,
        },
        YahooCompanyPayload {
            ticker: "JPM",
            long_name: "JPMorgan Chase & Co.",
            total_revenue: 158_104_000_000.0,
            market_cap: 556_000_000_000.0,
            currency: "USD",
            geo_segments: None,
        },
        YahooCompanyPayload {
            ticker: "XOM",
            long_name: "Exxon Mobil Corporation",
            total_revenue: 344_582_000_000.0,
            market_cap: 421_000_000_000.0,
            currency: "USD",
            geo_segments: None,
        },
        YahooCompanyPayload {
            ticker: "JNJ",
            long_name: "Johnson & Johnson",
            total_revenue: 85_159_000_000.0,
            market_cap: 377_000_000_000.0,
            currency: "USD",
            geo_segments: None,
        },
        YahooCompanyPayload {
            ticker: "INTC",
            long_name: "Intel Corporation",
            total_revenue: 54_228_000_000.0,
            market_cap: 186_000_000_000.0,
            currency: "USD",
            geo_segments: None,
        },
        YahooCompanyPayload {
            ticker: "IBM",
            long_name: "International Business Machines Corporation",
            total_revenue: 61_860_000_000.0,
            market_cap: 168_000_000_000.0,
            currency: "USD",
            geo_segments: None,
        },
    ]
}
