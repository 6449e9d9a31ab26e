use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ValidationError;

const MAX_TICKER_LEN: usize = 12;

/// Validated exchange ticker symbol, canonicalized to ASCII uppercase.
///
/// Admits class-share and listing suffixes such as `BRK.B` or `RDS-A`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticker(String);

impl Ticker {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTicker);
        }
        if trimmed.len() > MAX_TICKER_LEN {
            return Err(ValidationError::TickerTooLong {
                len: trimmed.len(),
                max: MAX_TICKER_LEN,
            });
        }

        let canonical = trimmed.to_ascii_uppercase();
        let mut chars = canonical.char_indices();

        if let Some((_, ch)) = chars.next() {
            if !ch.is_ascii_alphabetic() {
                return Err(ValidationError::TickerInvalidStart { ch });
            }
        }

        for (index, ch) in chars {
            if !ch.is_ascii_alphanumeric() && ch != '.' && ch != '-' {
                return Err(ValidationError::TickerInvalidChar { ch, index });
            }
        }

        Ok(Self(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Serialize for Ticker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Ticker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
