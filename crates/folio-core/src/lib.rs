//! Core types for the Folio catalog browser.
//!
//! This crate contains the data structures shared by the engine and the CLI:
//! - Record types and the single-or-many `Tags` field
//! - Rarity and reward vocabularies
//! - The record store that fixes each record's original position
//! - Sort specification types
//! - Configuration types
//! - Error types

mod config;
mod error;
mod rarity;
mod record;
mod reward;
mod sort;
mod store;
mod tags;

pub use config::{
    config_dir, config_path, AppConfig, AppearanceConfig, CatalogConfig, DisplayConfig,
    ThemeMode, DEFAULT_CATALOG_LOCATION,
};
pub use error::{CatalogError, ConfigError, UnknownRarity, UnknownSortName};
pub use rarity::Rarity;
pub use record::{Record, RecordId, Volume};
pub use reward::{Reward, RewardKind};
pub use sort::{Field, SortDirection, SortKey, SortSpec};
pub use store::RecordStore;
pub use tags::Tags;

/// The closed gender vocabulary, in menu order.
pub const GENDERS: [&str; 4] = ["Male", "Female", "Non-binary", "Inanimate"];
