//! Reward types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two reward currencies a card can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RewardKind {
    Cups,
    Diamonds,
}

impl RewardKind {
    /// Both kinds in display order.
    pub const ALL: [RewardKind; 2] = [RewardKind::Cups, RewardKind::Diamonds];

    /// Classify a raw reward label.
    ///
    /// `cup` and `cups` (any case) are Cups; every other label is Diamonds.
    pub fn classify(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("cups") || label.eq_ignore_ascii_case("cup") {
            RewardKind::Cups
        } else {
            RewardKind::Diamonds
        }
    }

    /// Glyph used in compact reward labels.
    pub fn glyph(self) -> &'static str {
        match self {
            RewardKind::Cups => "🏆",
            RewardKind::Diamonds => "💎",
        }
    }

    /// Catalog spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            RewardKind::Cups => "Cups",
            RewardKind::Diamonds => "Diamonds",
        }
    }
}

impl fmt::Display for RewardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reward that has both a kind and an amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reward {
    pub kind: RewardKind,
    pub amount: f64,
}

impl Reward {
    /// Kind-independent magnitude used to compare rewards across currencies.
    ///
    /// Diamonds are worth a tenth of a cup, so 20 Diamonds and 2 Cups share
    /// tier 2.
    pub fn tier(&self) -> f64 {
        match self.kind {
            RewardKind::Cups => self.amount,
            RewardKind::Diamonds => self.amount / 10.0,
        }
    }

    /// Score used when ranking rewards most-valuable-first.
    pub fn score(&self) -> f64 {
        match self.kind {
            RewardKind::Cups => self.amount,
            RewardKind::Diamonds => self.amount * 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(RewardKind::classify("Cups"), RewardKind::Cups);
        assert_eq!(RewardKind::classify("cup"), RewardKind::Cups);
        assert_eq!(RewardKind::classify("CUPS"), RewardKind::Cups);
        assert_eq!(RewardKind::classify("Diamonds"), RewardKind::Diamonds);
        assert_eq!(RewardKind::classify("gems"), RewardKind::Diamonds);
    }

    #[test]
    fn test_tier_normalizes_diamonds() {
        let cups = Reward { kind: RewardKind::Cups, amount: 2.0 };
        let diamonds = Reward { kind: RewardKind::Diamonds, amount: 20.0 };
        assert_eq!(cups.tier(), diamonds.tier());
    }

    #[test]
    fn test_score_doubles_diamonds() {
        let cups = Reward { kind: RewardKind::Cups, amount: 12.0 };
        let diamonds = Reward { kind: RewardKind::Diamonds, amount: 20.0 };
        assert_eq!(cups.score(), 12.0);
        assert_eq!(diamonds.score(), 40.0);
    }
}
