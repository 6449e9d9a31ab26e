use serde::{Deserialize, Serialize};

use crate::GeoRevenue;

/// Region labels accepted as EU-attributable revenue, in preference order.
pub const EU_REGION_KEYS: [&str; 3] = ["Europe", "EU", "EMEA"];

/// Share of worldwide revenue assumed EU-attributable when no geographic
/// breakdown is usable. A point-in-time policy value, not a market fact.
pub const ESTIMATED_EU_SHARE: f64 = 0.30;

/// EU-attributable revenue, with disclosure of whether it was observed from
/// segment data or estimated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EuRevenueResult {
    pub eu_revenue: f64,
    pub estimated: bool,
}

/// Derive EU revenue from a worldwide figure and an optional breakdown.
///
/// The first preferred region key present in the breakdown is trusted
/// as observed. A missing breakdown, an empty one, or one reporting only
/// non-EU regions all fall back to the fixed-share estimate, which is
/// always flagged `estimated` so downstream reporting discloses it.
pub fn estimate_eu_revenue(
    worldwide_revenue: f64,
    geo_revenue: Option<&GeoRevenue>,
) -> EuRevenueResult {
    if let Some(geo) = geo_revenue {
        if !geo.is_empty() {
            for region in EU_REGION_KEYS {
                if let Some(observed) = geo.segment(region) {
                    return EuRevenueResult {
                        eu_revenue: observed,
                        estimated: false,
                    };
                }
            }
        }
    }

    EuRevenueResult {
        eu_revenue: worldwide_revenue * ESTIMATED_EU_SHARE,
        estimated: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geo(segments: &[(&str, f64)]) -> GeoRevenue {
        GeoRevenue::from_segments(segments.iter().map(|(region, revenue)| (*region, *revenue)))
            .expect("test segments are valid")
    }

    #[test]
    fn no_breakdown_yields_fixed_share_estimate() {
        let result = estimate_eu_revenue(1_000_000.0, None);
        assert_eq!(result.eu_revenue, 300_000.0);
        assert!(result.estimated);
    }

    #[test]
    fn europe_segment_is_trusted_as_observed() {
        let breakdown = geo(&[("Europe", 120_000.0), ("Americas", 500_000.0)]);
        let result = estimate_eu_revenue(1_000_000.0, Some(&breakdown));
        assert_eq!(result.eu_revenue, 120_000.0);
        assert!(!result.estimated);
    }

    #[test]
    fn preference_order_is_europe_then_eu_then_emea() {
        let breakdown = geo(&[("EMEA", 1.0), ("EU", 2.0), ("Europe", 3.0)]);
        let result = estimate_eu_revenue(10.0, Some(&breakdown));
        assert_eq!(result.eu_revenue, 3.0);

        let breakdown = geo(&[("EMEA", 1.0), ("EU", 2.0)]);
        let result = estimate_eu_revenue(10.0, Some(&breakdown));
        assert_eq!(result.eu_revenue, 2.0);
    }

    #[test]
    fn non_matching_breakdown_falls_through_to_estimate() {
        // A breakdown reporting only non-EU regions must not be read as
        // "zero EU revenue observed".
        let breakdown = geo(&[("Asia", 700_000.0), ("Americas", 300_000.0)]);
        let result = estimate_eu_revenue(1_000_000.0, Some(&breakdown));
        assert_eq!(result.eu_revenue, 300_000.0);
        assert!(result.estimated);
    }

    #[test]
    fn empty_breakdown_falls_through_to_estimate() {
        let breakdown = geo(&[]);
        let result = estimate_eu_revenue(200.0, Some(&breakdown));
        assert_eq!(result.eu_revenue, 60.0);
        assert!(result.estimated);
    }

    #[test]
    fn region_match_is_exact_and_case_sensitive() {
        let breakdown = geo(&[("europe", 42.0)]);
        let result = estimate_eu_revenue(100.0, Some(&breakdown));
        assert!(result.estimated);
    }

    #[test]
    fn estimate_never_exceeds_worldwide_revenue() {
        for worldwide in [0.0, 1.0, 1_000_000.0, 5e12] {
            let result = estimate_eu_revenue(worldwide, None);
            assert!(result.eu_revenue <= worldwide);
        }
    }
}
