//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use folio_core::{DisplayConfig, SortDirection, SortKey, SortSpec};
use folio_engine::FilterCriteria;

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(version, about = "Browse a card catalog from the terminal")]
pub struct Args {
    /// Path to the configuration file
    #[arg(long, env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog file path or http(s) URL (overrides config file)
    #[arg(long, env = "FOLIO_CATALOG")]
    pub catalog: Option<String>,

    /// Case-insensitive text matched against card name and character
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only show this volume
    #[arg(long)]
    pub volume: Option<String>,

    /// Only show cards tagged with this book
    #[arg(long)]
    pub book: Option<String>,

    /// Only show cards tagged with this gender
    #[arg(long)]
    pub gender: Option<String>,

    /// Only show this reward type
    #[arg(long)]
    pub reward: Option<String>,

    /// Only show this rarity
    #[arg(long)]
    pub rarity: Option<String>,

    /// Sort key: a field name, `rarity` or `reward` (overrides config file)
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Open the detail display on this record id
    #[arg(long)]
    pub show: Option<String>,

    /// Page through the view from the opened record, one step at a time
    #[arg(long, default_value_t = 0, allow_negative_numbers = true, requires = "show")]
    pub step: isize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Args {
    /// Filter criteria from the filter flags.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            volume: self.volume.clone(),
            book: self.book.clone(),
            gender: self.gender.clone(),
            reward: self.reward.clone(),
            rarity: self.rarity.clone(),
        }
    }

    /// Sort from the flags, falling back to the configured default.
    pub fn sort_spec(&self, display: &DisplayConfig) -> SortSpec {
        let mut spec = match self.sort {
            Some(key) => SortSpec::ascending(key),
            None => display.sort_spec(),
        };
        if self.desc {
            spec.direction = SortDirection::Descending;
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Field;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["folio"]).unwrap();
        assert!(args.criteria().is_empty());
        assert_eq!(args.step, 0);
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(
            args.sort_spec(&DisplayConfig::default()),
            SortSpec::ascending(SortKey::Field(Field::Volume))
        );
    }

    #[test]
    fn test_filter_flags() {
        let args = Args::try_parse_from([
            "folio", "-s", "moon", "--volume", "3", "--book", "Spring", "--rarity", "Epic",
        ])
        .unwrap();
        let criteria = args.criteria();
        assert_eq!(criteria.search, "moon");
        assert_eq!(criteria.volume.as_deref(), Some("3"));
        assert_eq!(criteria.book.as_deref(), Some("Spring"));
        assert_eq!(criteria.rarity.as_deref(), Some("Epic"));
        assert!(criteria.gender.is_none());
    }

    #[test]
    fn test_sort_flags() {
        let args = Args::try_parse_from(["folio", "--sort", "card_name", "--desc"]).unwrap();
        assert_eq!(
            args.sort_spec(&DisplayConfig::default()),
            SortSpec::descending(SortKey::Field(Field::CardName))
        );

        let args = Args::try_parse_from(["folio", "--sort", "rarity"]).unwrap();
        assert_eq!(
            args.sort_spec(&DisplayConfig::default()),
            SortSpec::ascending(SortKey::Rarity)
        );
    }

    #[test]
    fn test_desc_applies_to_configured_sort() {
        let display = DisplayConfig {
            default_sort: SortKey::Reward,
            default_direction: SortDirection::Ascending,
        };
        let args = Args::try_parse_from(["folio", "--desc"]).unwrap();
        assert_eq!(args.sort_spec(&display), SortSpec::descending(SortKey::Reward));
    }

    #[test]
    fn test_unknown_sort_key_rejected() {
        assert!(Args::try_parse_from(["folio", "--sort", "colour"]).is_err());
    }

    #[test]
    fn test_step_requires_show() {
        assert!(Args::try_parse_from(["folio", "--step", "2"]).is_err());

        let args = Args::try_parse_from(["folio", "--show", "c-1", "--step", "-2"]).unwrap();
        assert_eq!(args.step, -2);
    }

    #[test]
    fn test_step_accepts_full_range() {
        let max = isize::MAX.to_string();
        let args = Args::try_parse_from(["folio", "--show", "a", "--step", max.as_str()]).unwrap();
        assert_eq!(args.step, isize::MAX);
    }
}
