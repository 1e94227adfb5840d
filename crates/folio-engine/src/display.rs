//! Display helpers consumed by the rendering layer.

use folio_core::{Record, RewardKind};

/// Compact reward label such as `12🏆` or `20💎`.
///
/// Empty when the record has no reward type or no amount.
pub fn reward_label(record: &Record) -> String {
    match (record.reward.as_deref(), record.reward_amount) {
        (Some(reward), Some(amount)) => {
            format!("{}{}", amount, RewardKind::classify(reward).glyph())
        }
        _ => String::new(),
    }
}

/// Styling token derived from rarity: `"Super Rare"` becomes `"super-rare"`.
///
/// Empty when the record has no rarity.
pub fn rarity_class(record: &Record) -> String {
    record
        .rarity
        .as_deref()
        .map(|rarity| {
            rarity
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-")
                .to_lowercase()
        })
        .unwrap_or_default()
}

/// Human-readable size of a view.
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 card shown".to_string()
    } else {
        format!("{count} cards shown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_label() {
        let cups = Record::new("1", "A", "X").with_reward("Cups", 12.0);
        assert_eq!(reward_label(&cups), "12🏆");

        let cup = Record::new("2", "A", "X").with_reward("cup", 1.0);
        assert_eq!(reward_label(&cup), "1🏆");

        let diamonds = Record::new("3", "A", "X").with_reward("Diamonds", 20.0);
        assert_eq!(reward_label(&diamonds), "20💎");

        let fractional = Record::new("4", "A", "X").with_reward("Diamonds", 2.5);
        assert_eq!(reward_label(&fractional), "2.5💎");
    }

    #[test]
    fn test_reward_label_needs_both_parts() {
        let none = Record::new("1", "A", "X");
        assert_eq!(reward_label(&none), "");

        let mut no_amount = Record::new("2", "A", "X");
        no_amount.reward = Some("Cups".to_string());
        assert_eq!(reward_label(&no_amount), "");

        let mut no_type = Record::new("3", "A", "X");
        no_type.reward_amount = Some(5.0);
        assert_eq!(reward_label(&no_type), "");
    }

    #[test]
    fn test_rarity_class() {
        assert_eq!(rarity_class(&Record::new("1", "A", "X").with_rarity("Epic")), "epic");
        assert_eq!(
            rarity_class(&Record::new("2", "A", "X").with_rarity("Super   Rare")),
            "super-rare"
        );
        assert_eq!(rarity_class(&Record::new("3", "A", "X")), "");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 cards shown");
        assert_eq!(count_label(1), "1 card shown");
        assert_eq!(count_label(42), "42 cards shown");
    }
}
