use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::estimator::{estimate_eu_revenue, EuRevenueResult};
use crate::{CompanyProfile, FinancialDataProvider, ProviderError, Ticker, ValidationError};

/// One statutory threshold regime, in EUR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    pub combined_worldwide_eur: f64,
    pub per_company_eu_eur: f64,
}

impl ThresholdSet {
    /// EUMR Art. 1(2): €5bn combined worldwide, €250m EU turnover each.
    pub const PRIMARY: Self = Self {
        combined_worldwide_eur: 5_000_000_000.0,
        per_company_eu_eur: 250_000_000.0,
    };

    /// EUMR Art. 1(3): €2.5bn combined worldwide, €100m EU turnover each.
    /// The three-member-state distribution criterion is not assessable from
    /// region-level data and is disclosed in the advisory notes instead.
    pub const ALTERNATIVE: Self = Self {
        combined_worldwide_eur: 2_500_000_000.0,
        per_company_eu_eur: 100_000_000.0,
    };

    /// Strict comparisons: figures exactly at a threshold do not meet it.
    pub fn is_met(&self, combined_worldwide_eur: f64, eu1_eur: f64, eu2_eur: f64) -> bool {
        combined_worldwide_eur > self.combined_worldwide_eur
            && eu1_eur > self.per_company_eu_eur
            && eu2_eur > self.per_company_eu_eur
    }
}

/// Evaluator configuration: the fixed EUR/USD rate and both regimes.
///
/// The rate is USD per euro and is an approximation requiring periodic
/// update; it is never fetched live.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    pub eur_usd_rate: f64,
    pub primary: ThresholdSet,
    pub alternative: ThresholdSet,
}

impl EvaluatorConfig {
    pub const DEFAULT_EUR_USD_RATE: f64 = 1.1;

    pub fn with_rate(eur_usd_rate: f64) -> Result<Self, ValidationError> {
        if !eur_usd_rate.is_finite() || eur_usd_rate <= 0.0 {
            return Err(ValidationError::InvalidExchangeRate {
                value: eur_usd_rate.to_string(),
            });
        }

        Ok(Self {
            eur_usd_rate,
            ..Self::default()
        })
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            eur_usd_rate: Self::DEFAULT_EUR_USD_RATE,
            primary: ThresholdSet::PRIMARY,
            alternative: ThresholdSet::ALTERNATIVE,
        }
    }
}

/// One merging party: its profile and derived EU revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAssessment {
    pub profile: CompanyProfile,
    pub eu_revenue: EuRevenueResult,
}

/// Aggregate figures for the combined entity. USD figures are in the
/// provider's native currency (assumed USD); EUR figures apply the
/// configured rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombinedMetrics {
    pub worldwide_revenue_usd: f64,
    pub worldwide_revenue_eur: f64,
    pub eu_revenue_usd: f64,
    pub eu_revenue_eur: f64,
    pub market_cap_usd: f64,
}

/// Outcome of both threshold tests plus advisory caveats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EumrVerdict {
    pub primary_met: bool,
    pub alternative_met: bool,
    pub notification_required: bool,
    pub primary_thresholds: ThresholdSet,
    pub alternative_thresholds: ThresholdSet,
    pub notes: Vec<String>,
}

/// Complete merger screening result. Immutable; contains no timestamps so
/// identical inputs serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergerAnalysis {
    pub company1: CompanyAssessment,
    pub company2: CompanyAssessment,
    pub combined: CombinedMetrics,
    pub eur_usd_rate: f64,
    pub verdict: EumrVerdict,
}

/// Hard failure of a merger evaluation. A verdict computed on partial data
/// would be misleading, so any per-company acquisition failure aborts.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("financial data unavailable for '{ticker}': {reason}")]
    FinancialDataUnavailable { ticker: Ticker, reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Screens a proposed two-party merger against both EUMR regimes.
pub struct MergerEvaluator<'a> {
    provider: &'a dyn FinancialDataProvider,
    config: EvaluatorConfig,
}

impl<'a> MergerEvaluator<'a> {
    pub fn new(provider: &'a dyn FinancialDataProvider, config: EvaluatorConfig) -> Self {
        Self { provider, config }
    }

    pub const fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Fetch, estimate, aggregate, convert, and classify.
    pub fn evaluate(
        &self,
        ticker1: &Ticker,
        ticker2: &Ticker,
    ) -> Result<MergerAnalysis, EvaluationError> {
        let company1 = self.assess_company(ticker1)?;
        let company2 = self.assess_company(ticker2)?;

        let rate = self.config.eur_usd_rate;
        let worldwide_usd =
            company1.profile.worldwide_revenue + company2.profile.worldwide_revenue;
        let eu_usd = company1.eu_revenue.eu_revenue + company2.eu_revenue.eu_revenue;
        let market_cap_usd = company1.profile.market_cap + company2.profile.market_cap;

        let combined = CombinedMetrics {
            worldwide_revenue_usd: worldwide_usd,
            worldwide_revenue_eur: worldwide_usd / rate,
            eu_revenue_usd: eu_usd,
            eu_revenue_eur: eu_usd / rate,
            market_cap_usd,
        };

        let eu1_eur = company1.eu_revenue.eu_revenue / rate;
        let eu2_eur = company2.eu_revenue.eu_revenue / rate;

        let primary_met =
            self.config
                .primary
                .is_met(combined.worldwide_revenue_eur, eu1_eur, eu2_eur);
        let alternative_met =
            self.config
                .alternative
                .is_met(combined.worldwide_revenue_eur, eu1_eur, eu2_eur);

        let verdict = EumrVerdict {
            primary_met,
            alternative_met,
            notification_required: primary_met || alternative_met,
            primary_thresholds: self.config.primary,
            alternative_thresholds: self.config.alternative,
            notes: advisory_notes(rate),
        };

        Ok(MergerAnalysis {
            company1,
            company2,
            combined,
            eur_usd_rate: rate,
            verdict,
        })
    }

    fn assess_company(&self, ticker: &Ticker) -> Result<CompanyAssessment, EvaluationError> {
        let profile = self
            .provider
            .profile(ticker)
            .map_err(|error| provider_failure(ticker, error))?;

        // A breakdown fetch failure is not fatal: the estimate path covers it.
        let geo_revenue = match self.provider.geo_revenue(ticker) {
            Ok(geo) => geo,
            Err(error) => {
                tracing::debug!(
                    ticker = ticker.as_str(),
                    code = error.code(),
                    "geographic breakdown unavailable, falling back to estimate: {}",
                    error.message()
                );
                None
            }
        };

        let eu_revenue = estimate_eu_revenue(profile.worldwide_revenue, geo_revenue.as_ref());

        Ok(CompanyAssessment {
            profile,
            eu_revenue,
        })
    }
}

fn provider_failure(ticker: &Ticker, error: ProviderError) -> EvaluationError {
    EvaluationError::FinancialDataUnavailable {
        ticker: ticker.clone(),
        reason: error.to_string(),
    }
}

/// Fixed advisory caveats attached to every verdict, in render order.
pub fn advisory_notes(eur_usd_rate: f64) -> Vec<String> {
    vec![
        String::from("Analysis based on most recent annual financial data"),
        String::from("EU revenue estimates may need verification"),
        String::from("Three-member state criterion requires detailed country breakdown"),
        String::from("Exchange rates should be verified at time of transaction"),
        format!("Current EUR/USD rate used: {eur_usd_rate}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::YahooAdapter;
    use crate::GeoRevenue;

    fn ticker(value: &str) -> Ticker {
        Ticker::parse(value).expect("test ticker is valid")
    }

    struct TwoCompanyProvider {
        first: CompanyProfile,
        second: CompanyProfile,
    }

    impl TwoCompanyProvider {
        fn new(first: CompanyProfile, second: CompanyProfile) -> Self {
            Self { first, second }
        }
    }

    impl FinancialDataProvider for TwoCompanyProvider {
        fn id(&self) -> crate::ProviderId {
            crate::ProviderId::Yahoo
        }

        fn capabilities(&self) -> crate::CapabilitySet {
            crate::CapabilitySet::full()
        }

        fn profile(&self, ticker: &Ticker) -> Result<CompanyProfile, ProviderError> {
            if *ticker == self.first.ticker {
                Ok(self.first.clone())
            } else if *ticker == self.second.ticker {
                Ok(self.second.clone())
            } else {
                Err(ProviderError::not_found(ticker))
            }
        }
    }

    fn profile(symbol: &str, revenue: f64, cap: f64, geo: Option<GeoRevenue>) -> CompanyProfile {
        CompanyProfile::new(
            format!("{symbol} Holdings"),
            ticker(symbol),
            revenue,
            cap,
            "USD",
            geo,
        )
        .expect("test profile is valid")
    }

    #[test]
    fn large_merger_meets_both_thresholds() {
        // $6B + $5B worldwide, no geo data: EU estimates $1.8B and $1.5B.
        // At EUR/USD 1.1 that is ~EUR 10.0B combined, ~EUR 1.64B / 1.36B EU.
        let provider = TwoCompanyProvider::new(
            profile("AAA", 6_000_000_000.0, 50_000_000_000.0, None),
            profile("BBB", 5_000_000_000.0, 40_000_000_000.0, None),
        );
        let evaluator = MergerEvaluator::new(&provider, EvaluatorConfig::default());

        let analysis = evaluator
            .evaluate(&ticker("AAA"), &ticker("BBB"))
            .expect("evaluation should succeed");

        assert!(analysis.verdict.primary_met);
        assert!(analysis.verdict.alternative_met);
        assert!(analysis.verdict.notification_required);
        assert_eq!(analysis.combined.worldwide_revenue_usd, 11_000_000_000.0);
        assert_eq!(analysis.combined.market_cap_usd, 90_000_000_000.0);
        assert!((analysis.combined.worldwide_revenue_eur - 10_000_000_000.0).abs() < 1.0);
    }

    #[test]
    fn small_merger_meets_neither_threshold() {
        // $100M each: combined ~EUR 182M, far below both regimes.
        let provider = TwoCompanyProvider::new(
            profile("AAA", 100_000_000.0, 900_000_000.0, None),
            profile("BBB", 100_000_000.0, 800_000_000.0, None),
        );
        let evaluator = MergerEvaluator::new(&provider, EvaluatorConfig::default());

        let analysis = evaluator
            .evaluate(&ticker("AAA"), &ticker("BBB"))
            .expect("evaluation should succeed");

        assert!(!analysis.verdict.primary_met);
        assert!(!analysis.verdict.alternative_met);
        assert!(!analysis.verdict.notification_required);
    }

    #[test]
    fn verdict_invariant_holds_across_revenue_grid() {
        for revenue1 in [50e6, 500e6, 5e9, 50e9] {
            for revenue2 in [50e6, 500e6, 5e9, 50e9] {
                let provider = TwoCompanyProvider::new(
                    profile("AAA", revenue1, 1e9, None),
                    profile("BBB", revenue2, 1e9, None),
                );
                let evaluator = MergerEvaluator::new(&provider, EvaluatorConfig::default());
                let analysis = evaluator
                    .evaluate(&ticker("AAA"), &ticker("BBB"))
                    .expect("evaluation should succeed");

                assert_eq!(
                    analysis.verdict.notification_required,
                    analysis.verdict.primary_met || analysis.verdict.alternative_met
                );
            }
        }
    }

    #[test]
    fn lowering_one_party_eu_revenue_below_threshold_unsets_regime() {
        // Combined worldwide fixed comfortably above both worldwide gates;
        // party B's observed EU revenue drops below the EUR 250m gate.
        let geo_high = GeoRevenue::from_segments([("Europe", 400_000_000.0)])
            .expect("valid segments");
        let geo_low = GeoRevenue::from_segments([("Europe", 200_000_000.0)])
            .expect("valid segments");

        let make = |geo_b: GeoRevenue| {
            TwoCompanyProvider::new(
                profile("AAA", 8_000_000_000.0, 1e9, Some(geo_high.clone())),
                profile("BBB", 8_000_000_000.0, 1e9, Some(geo_b)),
            )
        };

        let passing = MergerEvaluator::new(&make(geo_high.clone()), EvaluatorConfig::default())
            .evaluate(&ticker("AAA"), &ticker("BBB"))
            .expect("evaluation should succeed");
        assert!(passing.verdict.primary_met);

        let failing = MergerEvaluator::new(&make(geo_low), EvaluatorConfig::default())
            .evaluate(&ticker("AAA"), &ticker("BBB"))
            .expect("evaluation should succeed");
        assert!(!failing.verdict.primary_met);
        // EUR 200m / 1.1 is still above the EUR 100m alternative gate.
        assert!(failing.verdict.alternative_met);
    }

    #[test]
    fn figures_exactly_at_threshold_do_not_meet_it() {
        let thresholds = ThresholdSet::PRIMARY;
        assert!(!thresholds.is_met(5_000_000_000.0, 300_000_000.0, 300_000_000.0));
        assert!(!thresholds.is_met(6_000_000_000.0, 250_000_000.0, 300_000_000.0));
        assert!(thresholds.is_met(5_000_000_001.0, 250_000_001.0, 250_000_001.0));
    }

    #[test]
    fn observed_geo_revenue_is_used_for_threshold_tests() {
        let geo = GeoRevenue::from_segments([("EMEA", 900_000_000.0)]).expect("valid segments");
        let provider = TwoCompanyProvider::new(
            profile("AAA", 4_000_000_000.0, 1e9, Some(geo)),
            profile("BBB", 4_000_000_000.0, 1e9, None),
        );
        let evaluator = MergerEvaluator::new(&provider, EvaluatorConfig::default());

        let analysis = evaluator
            .evaluate(&ticker("AAA"), &ticker("BBB"))
            .expect("evaluation should succeed");

        assert!(!analysis.company1.eu_revenue.estimated);
        assert_eq!(analysis.company1.eu_revenue.eu_revenue, 900_000_000.0);
        assert!(analysis.company2.eu_revenue.estimated);
        assert_eq!(analysis.company2.eu_revenue.eu_revenue, 1_200_000_000.0);
    }

    #[test]
    fn unknown_ticker_aborts_with_financial_data_unavailable() {
        let provider = TwoCompanyProvider::new(
            profile("AAA", 1e9, 1e9, None),
            profile("BBB", 1e9, 1e9, None),
        );
        let evaluator = MergerEvaluator::new(&provider, EvaluatorConfig::default());

        let err = evaluator
            .evaluate(&ticker("AAA"), &ticker("ZZZZ"))
            .expect_err("must fail");

        assert!(matches!(
            err,
            EvaluationError::FinancialDataUnavailable { ref ticker, .. }
                if ticker.as_str() == "ZZZZ"
        ));
    }

    #[test]
    fn custom_rate_shifts_the_verdict() {
        let provider = TwoCompanyProvider::new(
            profile("AAA", 3_000_000_000.0, 1e9, None),
            profile("BBB", 2_800_000_000.0, 1e9, None),
        );

        // At 1.1 USD/EUR the combined ~EUR 5.27bn clears the primary gate.
        let config = EvaluatorConfig::default();
        let analysis = MergerEvaluator::new(&provider, config)
            .evaluate(&ticker("AAA"), &ticker("BBB"))
            .expect("evaluation should succeed");
        assert!(analysis.verdict.primary_met);

        // A stronger dollar assumption pushes it back under EUR 5bn.
        let config = EvaluatorConfig::with_rate(1.2).expect("rate is valid");
        let analysis = MergerEvaluator::new(&provider, config)
            .evaluate(&ticker("AAA"), &ticker("BBB"))
            .expect("evaluation should succeed");
        assert!(!analysis.verdict.primary_met);
    }

    #[test]
    fn rejects_non_positive_rate() {
        assert!(EvaluatorConfig::with_rate(0.0).is_err());
        assert!(EvaluatorConfig::with_rate(-1.1).is_err());
        assert!(EvaluatorConfig::with_rate(f64::NAN).is_err());
    }

    #[test]
    fn notes_carry_the_literal_rate() {
        let notes = advisory_notes(1.1);
        assert_eq!(notes.len(), 5);
        assert_eq!(notes[4], "Current EUR/USD rate used: 1.1");
    }

    #[test]
    fn catalog_adapter_evaluation_is_deterministic() {
        let provider = YahooAdapter::default();
        let evaluator = MergerEvaluator::new(&provider, EvaluatorConfig::default());

        let first = evaluator
            .evaluate(&ticker("MSFT"), &ticker("ADBE"))
            .expect("catalog evaluation should succeed");
        let second = evaluator
            .evaluate(&ticker("MSFT"), &ticker("ADBE"))
            .expect("catalog evaluation should succeed");

        assert_eq!(first, second);
    }
}
