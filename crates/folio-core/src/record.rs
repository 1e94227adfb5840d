//! Record types for catalog entries.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rarity::Rarity;
use crate::reward::{Reward, RewardKind};
use crate::tags::Tags;

/// Stable record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Volume a card was released in.
///
/// The catalog stores volumes as integers, but older exports quote them
/// (`"volume": "3"`), so both shapes are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Volume(pub u32);

impl<'de> Deserialize<'de> for Volume {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Volume(n)),
            Raw::Text(s) => s
                .trim()
                .parse()
                .map(Volume)
                .map_err(|_| de::Error::custom(format!("volume is not an integer: {s:?}"))),
        }
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record is one card in the catalog.
///
/// Only `id`, `cardName` and `character` are required. Every other field may
/// be absent and each consumer defines what absence means for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Card title.
    pub card_name: String,

    /// Character pictured on the card.
    pub character: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<Volume>,

    /// Story arc(s) the card belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<Tags<String>>,

    /// One or more of Male, Female, Non-binary, Inanimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Tags<String>>,

    /// Raw rarity name. Kept as text so unrecognised names survive a reload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,

    /// Raw reward type label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Index in the source collection. Assigned once by `RecordStore`.
    #[serde(skip)]
    original_position: usize,
}

impl Record {
    /// Create a new record with required fields.
    pub fn new(
        id: impl Into<String>,
        card_name: impl Into<String>,
        character: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            card_name: card_name.into(),
            character: character.into(),
            volume: None,
            book: None,
            gender: None,
            rarity: None,
            reward: None,
            reward_amount: None,
            image: None,
            message: None,
            original_position: 0,
        }
    }

    pub fn with_volume(mut self, volume: u32) -> Self {
        self.volume = Some(Volume(volume));
        self
    }

    pub fn with_book(mut self, book: impl Into<Tags<String>>) -> Self {
        self.book = Some(book.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<Tags<String>>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    pub fn with_reward(mut self, reward: impl Into<String>, amount: f64) -> Self {
        self.reward = Some(reward.into());
        self.reward_amount = Some(amount);
        self
    }

    /// Get the record's ID as a RecordId.
    pub fn record_id(&self) -> RecordId {
        RecordId(self.id.clone())
    }

    /// Index of this record in the source collection.
    pub fn original_position(&self) -> usize {
        self.original_position
    }

    pub(crate) fn set_original_position(&mut self, position: usize) {
        self.original_position = position;
    }

    /// Rarity rank, with absent and unknown rarities after every named value.
    pub fn rarity_rank(&self) -> u8 {
        self.rarity
            .as_deref()
            .map(Rarity::rank_of)
            .unwrap_or(Rarity::UNRANKED)
    }

    /// Reward type, when one is set.
    pub fn reward_kind(&self) -> Option<RewardKind> {
        self.reward.as_deref().map(RewardKind::classify)
    }

    /// The reward, only when both its type and amount are present.
    pub fn reward_value(&self) -> Option<Reward> {
        match (self.reward_kind(), self.reward_amount) {
            (Some(kind), Some(amount)) => Some(Reward { kind, amount }),
            _ => None,
        }
    }
}
