use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One glyph entry from the upstream `meta.json` catalog. Fields other than
/// `name` and `codepoint` (aliases, tags, author, ...) are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct IconRecord {
    /// Kebab-case icon name, e.g. `account-outline`.
    pub name: String,
    /// Hex codepoint without prefix, e.g. `f0004`.
    pub codepoint: String,
}

impl IconRecord {
    pub fn new(name: impl Into<String>, codepoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            codepoint: codepoint.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read icon catalog {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse icon catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Loads the ordered icon list from a JSON array on disk.
pub fn load_icon_catalog(path: impl AsRef<Path>) -> Result<Vec<IconRecord>, CatalogError> {
    let path_ref = path.as_ref();
    let payload = fs::read_to_string(path_ref).map_err(|source| CatalogError::Read {
        path: path_ref.to_path_buf(),
        source,
    })?;
    parse_icon_catalog(&payload).map_err(|source| CatalogError::Parse {
        path: path_ref.to_path_buf(),
        source,
    })
}

/// Parses an in-memory JSON array, preserving record order.
pub fn parse_icon_catalog(payload: &str) -> Result<Vec<IconRecord>, serde_json::Error> {
    serde_json::from_str(payload)
}
