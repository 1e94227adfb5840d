//! Ranked rarity vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownRarity;

/// Rarity of a card, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// All rarities in rank order.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Rank used for ordering. Common is 0, Legendary is 4.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Rank of a raw rarity string. Unknown names rank after every named value.
    pub fn rank_of(name: &str) -> u8 {
        name.parse::<Rarity>()
            .map(Rarity::rank)
            .unwrap_or(Self::UNRANKED)
    }

    /// Rank given to absent or unrecognised rarities.
    pub const UNRANKED: u8 = Rarity::ALL.len() as u8;

    /// Display name as it appears in the catalog.
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = UnknownRarity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|rarity| rarity.as_str() == s)
            .ok_or_else(|| UnknownRarity(s.to_string()))
    }
}
