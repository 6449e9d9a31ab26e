use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Ticker, ValidationError};

const BUILTIN_INDICES: &str = include_str!("../data/indices.json");

/// Index constituent lists a ticker universe can be assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexList {
    Dow,
    Nasdaq,
    Sp500,
}

impl IndexList {
    pub const ALL: [Self; 3] = [Self::Dow, Self::Nasdaq, Self::Sp500];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dow => "dow",
            Self::Nasdaq => "nasdaq",
            Self::Sp500 => "sp500",
        }
    }
}

impl Display for IndexList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexList {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dow" => Ok(Self::Dow),
            "nasdaq" => Ok(Self::Nasdaq),
            "sp500" => Ok(Self::Sp500),
            other => Err(ValidationError::InvalidIndexList {
                value: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while loading a ticker universe document.
#[derive(Debug, Error)]
pub enum UniverseError {
    #[error("universe document from '{origin}' is not valid: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Concatenated union of index constituent lists.
///
/// Segments are scanned in the order given at construction and tickers
/// appearing in more than one list are kept, so candidate ordering during a
/// resolver fallback scan is the plain concatenation order.
#[derive(Debug, Clone)]
pub struct TickerUniverse {
    segments: Vec<(IndexList, Vec<Ticker>)>,
}

impl TickerUniverse {
    pub fn new(segments: Vec<(IndexList, Vec<Ticker>)>) -> Self {
        Self { segments }
    }

    /// Universe bundled with the crate, in dow -> nasdaq -> sp500 order.
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_INDICES, "<builtin>")
            .expect("bundled indices.json is valid")
    }

    /// Parse an { index name -> [tickers] } JSON document.
    pub fn from_json_str(raw: &str, origin: &str) -> Result<Self, UniverseError> {
        let lists: HashMap<String, Vec<String>> =
            serde_json::from_str(raw).map_err(|source| UniverseError::Parse {
                origin: origin.to_owned(),
                source,
            })?;

        let mut segments = Vec::with_capacity(IndexList::ALL.len());
        for index in IndexList::ALL {
            let Some(raw_tickers) = lists.get(index.as_str()) else {
                continue;
            };
            let tickers = raw_tickers
                .iter()
                .map(|value| Ticker::parse(value))
                .collect::<Result<Vec<_>, _>>()?;
            segments.push((index, tickers));
        }

        Ok(Self { segments })
    }

    /// All tickers in segment order, duplicates across segments preserved.
    pub fn iter(&self) -> impl Iterator<Item = &Ticker> {
        self.segments
            .iter()
            .flat_map(|(_, tickers)| tickers.iter())
    }

    pub fn len(&self) -> usize {
        self.segments.iter().map(|(_, tickers)| tickers.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn segments(&self) -> &[(IndexList, Vec<Ticker>)] {
        &self.segments
    }
}
