//! Error types for the Folio catalog browser.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog errors - the collection cannot be used as loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The payload is not a JSON array of records.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share an identifier.
    #[error("Duplicate record id '{id}' at positions {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    /// A required text field is empty.
    #[error("Record at position {position} has an empty '{field}'")]
    MissingField {
        position: usize,
        field: &'static str,
    },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error reading {path:?}: {message}")]
    Io { path: PathBuf, message: String },

    /// Parse error.
    #[error("Parse error in {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// A string that is not one of the five named rarities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rarity: {0}")]
pub struct UnknownRarity(pub String);

/// A sort key or direction name that is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort name: {0}")]
pub struct UnknownSortName(pub String);
