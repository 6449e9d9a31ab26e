use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::{Ticker, ValidationError};

const BUILTIN_COMPANIES: &str = include_str!("../data/companies.json");

/// Errors raised while loading a company directory document.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory file '{path}' could not be read: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("directory file '{path}' is not a valid directory document: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Static mapping from lower-cased company name to ticker symbol.
///
/// The backing document groups companies by category purely for human
/// maintenance; lookups see the flattened map. Later categories win on
/// duplicate names, matching the original document's flattening order.
#[derive(Debug, Clone)]
pub struct CompanyDirectory {
    entries: HashMap<String, Ticker>,
}

impl CompanyDirectory {
    /// Directory bundled with the crate.
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_COMPANIES, "<builtin>")
            .expect("bundled companies.json is valid")
    }

    /// Load a directory document from disk.
    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_json_str(&raw, &display)
    }

    /// Parse a categories -> { company name -> ticker } JSON document.
    pub fn from_json_str(raw: &str, origin: &str) -> Result<Self, DirectoryError> {
        let categories: HashMap<String, HashMap<String, String>> = serde_json::from_str(raw)
            .map_err(|source| DirectoryError::Parse {
                path: origin.to_owned(),
                source,
            })?;

        let mut entries = HashMap::new();
        for companies in categories.into_values() {
            for (name, ticker) in companies {
                let ticker = Ticker::parse(&ticker)?;
                entries.insert(name.trim().to_lowercase(), ticker);
            }
        }

        Ok(Self { entries })
    }

    /// Case-insensitive exact-name lookup.
    pub fn lookup(&self, name: &str) -> Option<&Ticker> {
        self.entries.get(&name.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
