//! Sort specification types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownSortName;

/// A record field compared by its own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    CardName,
    Character,
    Volume,
    Book,
    Gender,
    RewardAmount,
}

/// What the view is ordered by.
///
/// Plain fields share one comparison rule. `Rarity` and `Reward` carry their
/// own multi-level ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortKey {
    Field(Field),
    Rarity,
    Reward,
}

impl SortKey {
    /// Every key, in table column order.
    pub const ALL: [SortKey; 9] = [
        SortKey::Field(Field::Id),
        SortKey::Field(Field::CardName),
        SortKey::Field(Field::Character),
        SortKey::Field(Field::Volume),
        SortKey::Field(Field::Book),
        SortKey::Field(Field::Gender),
        SortKey::Rarity,
        SortKey::Reward,
        SortKey::Field(Field::RewardAmount),
    ];

    /// Catalog field name for this key.
    pub fn name(self) -> &'static str {
        match self {
            SortKey::Field(Field::Id) => "id",
            SortKey::Field(Field::CardName) => "cardName",
            SortKey::Field(Field::Character) => "character",
            SortKey::Field(Field::Volume) => "volume",
            SortKey::Field(Field::Book) => "book",
            SortKey::Field(Field::Gender) => "gender",
            SortKey::Field(Field::RewardAmount) => "rewardAmount",
            SortKey::Rarity => "rarity",
            SortKey::Reward => "reward",
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Field(Field::Volume)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortName;

    /// Field names are matched case-insensitively, with `_` and `-` ignored,
    /// so `cardName`, `card_name` and `card-name` are the same key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        SortKey::ALL
            .into_iter()
            .find(|key| key.name().to_lowercase() == wanted)
            .ok_or_else(|| UnknownSortName(s.to_string()))
    }
}

impl TryFrom<String> for SortKey {
    type Error = UnknownSortName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.name().to_string()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Sign applied to a comparison: +1 ascending, -1 descending.
    pub fn factor(self) -> i8 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }
}

impl FromStr for SortDirection {
    type Err = UnknownSortName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(UnknownSortName(s.to_string())),
        }
    }
}

/// A (key, direction) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    /// Header-click behaviour: the same key flips direction, a new key
    /// starts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.reversed())
        } else {
            Self::ascending(key)
        }
    }
}
