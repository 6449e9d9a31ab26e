use serde::Serialize;
use thiserror::Error;

use crate::{
    CompanyDirectory, FinancialDataProvider, ProviderError, Ticker, TickerUniverse,
};

/// Legal-entity suffixes stripped before fuzzy name matching.
///
/// Punctuated variants come before their bare forms so "Inc." is not left
/// behind as a trailing ".".
pub const LEGAL_SUFFIXES: [&str; 11] = [
    "Inc.",
    "Inc",
    "Corporation",
    "Corp.",
    "Corp",
    "Ltd.",
    "Ltd",
    "Limited",
    "LLC",
    "Co.",
    "Co",
];

/// One resolved (ticker, canonical name) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerCandidate {
    pub ticker: Ticker,
    pub name: String,
}

/// Total resolver failure. Candidate-level failures during the fallback
/// scan are skipped, never surfaced here.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("financial data provider failed during lookup: {0}")]
    Provider(#[from] ProviderError),
}

/// Maps a free-form company name to ticker candidates.
///
/// The directory fast path returns a single exact hit; otherwise the
/// resolver strips legal-entity suffixes and scans the ticker universe,
/// matching by case-insensitive bidirectional substring containment of the
/// cleaned name against each candidate's canonical name.
pub struct TickerResolver<'a> {
    directory: &'a CompanyDirectory,
    universe: &'a TickerUniverse,
    provider: &'a dyn FinancialDataProvider,
}

impl<'a> TickerResolver<'a> {
    pub fn new(
        directory: &'a CompanyDirectory,
        universe: &'a TickerUniverse,
        provider: &'a dyn FinancialDataProvider,
    ) -> Self {
        Self {
            directory,
            universe,
            provider,
        }
    }

    /// Resolve a company name to an ordered candidate list.
    ///
    /// Returns an empty list when nothing matches. Candidates appear in
    /// universe concatenation order; a ticker listed in several index
    /// segments appears once per listing.
    pub fn resolve(&self, name: &str) -> Result<Vec<TickerCandidate>, ResolveError> {
        if let Some(ticker) = self.directory.lookup(name) {
            let profile = self.provider.profile(ticker)?;
            return Ok(vec![TickerCandidate {
                ticker: ticker.clone(),
                name: profile.name,
            }]);
        }

        let cleaned = clean_company_name(name);
        if cleaned.is_empty() {
            return Ok(Vec::new());
        }

        let mut candidates = Vec::new();
        for ticker in self.universe.iter() {
            let profile = match self.provider.profile(ticker) {
                Ok(profile) => profile,
                Err(error) => {
                    tracing::debug!(
                        ticker = ticker.as_str(),
                        code = error.code(),
                        "skipping universe candidate: {}",
                        error.message()
                    );
                    continue;
                }
            };

            if names_overlap(&cleaned, &profile.name) {
                candidates.push(TickerCandidate {
                    ticker: ticker.clone(),
                    name: profile.name,
                });
            }
        }

        Ok(candidates)
    }
}

/// Trim the input and strip one trailing legal-entity suffix.
pub fn clean_company_name(name: &str) -> String {
    let trimmed = name.trim();

    for suffix in LEGAL_SUFFIXES {
        let Some(stem) = strip_suffix_ignore_case(trimmed, suffix) else {
            continue;
        };
        // Word boundary required so "Zinc" does not lose its tail.
        if stem.ends_with([' ', ',']) {
            return stem.trim_end_matches([',', ' ']).to_owned();
        }
    }

    trimmed.to_owned()
}

fn strip_suffix_ignore_case<'n>(name: &'n str, suffix: &str) -> Option<&'n str> {
    if name.len() < suffix.len() {
        return None;
    }
    let (stem, tail) = name.split_at(name.len() - suffix.len());
    tail.eq_ignore_ascii_case(suffix).then_some(stem)
}

/// Case-insensitive bidirectional substring containment.
///
/// Empty canonical names never match; the comparison would otherwise be
/// vacuously true for every query.
fn names_overlap(cleaned: &str, canonical: &str) -> bool {
    let canonical = canonical.trim().to_lowercase();
    if canonical.is_empty() {
        return false;
    }
    let cleaned = cleaned.to_lowercase();

    canonical.contains(&cleaned) || cleaned.contains(&canonical)
}
