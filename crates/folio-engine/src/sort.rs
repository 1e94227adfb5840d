//! Sort engine.
//!
//! Every ordering produced here is total: the last comparison is always the
//! record's original position, ascending, whatever the direction. Plain
//! fields flip their whole comparison with the direction. `Rarity` and
//! `Reward` apply direction level by level.

use std::cmp::Ordering;

use folio_core::{Field, Record, RewardKind, SortDirection, SortKey, SortSpec};

/// Order `records` in place according to `spec`.
pub fn sort(records: &mut [&Record], spec: SortSpec) {
    records.sort_by(|a, b| compare(spec, a, b));
}

/// Compare two records under `spec`.
pub fn compare(spec: SortSpec, a: &Record, b: &Record) -> Ordering {
    match spec.key {
        SortKey::Field(field) => compare_field(field, spec.direction, a, b),
        SortKey::Rarity => compare_rarity(spec.direction, a, b),
        SortKey::Reward => compare_reward(spec.direction, a, b),
    }
}

// =============================================================================
// Plain fields
// =============================================================================

/// Comparable value of a plain field.
#[derive(Debug)]
enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
            (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// Text is lowercased. Tag sets contribute only their first tag.
fn field_value(field: Field, record: &Record) -> Option<FieldValue> {
    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_lowercase())
    }

    match field {
        Field::Id => Some(text(&record.id)),
        Field::CardName => Some(text(&record.card_name)),
        Field::Character => Some(text(&record.character)),
        Field::Volume => record.volume.map(|v| FieldValue::Number(f64::from(v.0))),
        Field::Book => record.book.as_ref().and_then(|t| t.first()).map(|s| text(s)),
        Field::Gender => record.gender.as_ref().and_then(|t| t.first()).map(|s| text(s)),
        Field::RewardAmount => record.reward_amount.map(FieldValue::Number),
    }
}

fn compare_field(field: Field, direction: SortDirection, a: &Record, b: &Record) -> Ordering {
    let by_value = present_first(field_value(field, a), field_value(field, b), |x, y| x.compare(&y));
    directed(direction, by_value).then_with(|| by_position(a, b))
}

// =============================================================================
// Rarity
// =============================================================================

/// Rank (directed), reward tier (directed), volume ascending, reward type
/// Cups first, then position.
fn compare_rarity(direction: SortDirection, a: &Record, b: &Record) -> Ordering {
    directed(direction, a.rarity_rank().cmp(&b.rarity_rank()))
        .then_with(|| directed(direction, reward_tier(a).total_cmp(&reward_tier(b))))
        .then_with(|| by_volume(a, b))
        .then_with(|| by_reward_kind(a, b))
        .then_with(|| by_position(a, b))
}

/// A record without a reward gets a tier above every real one.
fn reward_tier(record: &Record) -> f64 {
    record
        .reward_value()
        .map(|reward| reward.tier())
        .unwrap_or(f64::INFINITY)
}

// =============================================================================
// Reward
// =============================================================================

/// Ascending and descending are separate orderings, not mirror images.
fn compare_reward(direction: SortDirection, a: &Record, b: &Record) -> Ordering {
    match direction {
        SortDirection::Ascending => by_reward_kind(a, b)
            .then_with(|| present_first(a.reward_amount, b.reward_amount, |x, y| x.total_cmp(&y)))
            .then_with(|| by_volume(a, b))
            .then_with(|| by_position(a, b)),
        SortDirection::Descending => reward_score(b)
            .total_cmp(&reward_score(a))
            .then_with(|| by_volume(a, b))
            .then_with(|| by_position(a, b)),
    }
}

/// A record without a reward scores below every real one.
fn reward_score(record: &Record) -> f64 {
    record
        .reward_value()
        .map(|reward| reward.score())
        .unwrap_or(f64::NEG_INFINITY)
}

// =============================================================================
// Shared levels
// =============================================================================

fn directed(direction: SortDirection, ordering: Ordering) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Present values in order, then absent ones.
fn present_first<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn by_volume(a: &Record, b: &Record) -> Ordering {
    present_first(a.volume, b.volume, |x, y| x.cmp(&y))
}

/// Cups, then Diamonds, then no reward.
fn by_reward_kind(a: &Record, b: &Record) -> Ordering {
    fn rank(kind: Option<RewardKind>) -> u8 {
        match kind {
            Some(RewardKind::Cups) => 0,
            Some(RewardKind::Diamonds) => 1,
            None => 2,
        }
    }
    rank(a.reward_kind()).cmp(&rank(b.reward_kind()))
}

fn by_position(a: &Record, b: &Record) -> Ordering {
    a.original_position().cmp(&b.original_position())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::RecordStore;

    fn sorted_ids(store: &RecordStore, spec: SortSpec) -> Vec<String> {
        let mut records: Vec<&Record> = store.iter().collect();
        sort(&mut records, spec);
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_text_field_is_case_insensitive() {
        let store = RecordStore::new(vec![
            Record::new("1", "banana", "X"),
            Record::new("2", "Apple", "X"),
            Record::new("3", "cherry", "X"),
        ])
        .unwrap();

        let spec = SortSpec::ascending(SortKey::Field(Field::CardName));
        assert_eq!(sorted_ids(&store, spec), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_field_ties_break_by_position_in_both_directions() {
        let store = RecordStore::new(vec![
            Record::new("1", "Same", "X").with_volume(2),
            Record::new("2", "Same", "X").with_volume(1),
            Record::new("3", "Same", "X").with_volume(2),
        ])
        .unwrap();

        let asc = SortSpec::ascending(SortKey::Field(Field::Volume));
        assert_eq!(sorted_ids(&store, asc), vec!["2", "1", "3"]);

        let desc = SortSpec::descending(SortKey::Field(Field::Volume));
        assert_eq!(sorted_ids(&store, desc), vec!["1", "3", "2"]);
    }

    #[test]
    fn test_volume_is_numeric() {
        let store = RecordStore::new(vec![
            Record::new("1", "A", "X").with_volume(10),
            Record::new("2", "B", "X").with_volume(9),
        ])
        .unwrap();

        let spec = SortSpec::ascending(SortKey::Field(Field::Volume));
        assert_eq!(sorted_ids(&store, spec), vec!["2", "1"]);
    }

    #[test]
    fn test_absent_field_flips_with_direction() {
        let store = RecordStore::new(vec![
            Record::new("1", "A", "X"),
            Record::new("2", "B", "X").with_volume(1),
            Record::new("3", "C", "X").with_volume(5),
        ])
        .unwrap();

        let asc = SortSpec::ascending(SortKey::Field(Field::Volume));
        assert_eq!(sorted_ids(&store, asc), vec!["2", "3", "1"]);

        let desc = SortSpec::descending(SortKey::Field(Field::Volume));
        assert_eq!(sorted_ids(&store, desc), vec!["1", "3", "2"]);
    }

    #[test]
    fn test_tag_set_uses_first_tag() {
        let store = RecordStore::new(vec![
            Record::new("1", "A", "X").with_book(vec!["Zeta", "Alpha"]),
            Record::new("2", "B", "X").with_book("beta"),
        ])
        .unwrap();

        let spec = SortSpec::ascending(SortKey::Field(Field::Book));
        assert_eq!(sorted_ids(&store, spec), vec!["2", "1"]);
    }

    #[test]
    fn test_rarity_reverses_tier_only_once() {
        let store = RecordStore::new(vec![
            Record::new("a", "A", "X")
                .with_rarity("Epic")
                .with_reward("Cups", 8.0)
                .with_volume(3),
            Record::new("b", "B", "X")
                .with_rarity("Epic")
                .with_reward("Diamonds", 20.0)
                .with_volume(1),
        ])
        .unwrap();

        assert_eq!(
            sorted_ids(&store, SortSpec::ascending(SortKey::Rarity)),
            vec!["b", "a"]
        );
        assert_eq!(
            sorted_ids(&store, SortSpec::descending(SortKey::Rarity)),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_rarity_rank_and_unknown() {
        let store = RecordStore::new(vec![
            Record::new("1", "A", "X").with_rarity("Legendary"),
            Record::new("2", "B", "X"),
            Record::new("3", "C", "X").with_rarity("Common"),
            Record::new("4", "D", "X").with_rarity("Mythic"),
            Record::new("5", "E", "X").with_rarity("Rare"),
        ])
        .unwrap();

        assert_eq!(
            sorted_ids(&store, SortSpec::ascending(SortKey::Rarity)),
            vec!["3", "5", "1", "2", "4"]
        );
        assert_eq!(
            sorted_ids(&store, SortSpec::descending(SortKey::Rarity)),
            vec!["2", "4", "1", "5", "3"]
        );
    }

    #[test]
    fn test_rarity_lower_levels_ignore_direction() {
        // Same rank and tier: volume ascending, then Cups before Diamonds
        let store = RecordStore::new(vec![
            Record::new("1", "A", "X")
                .with_rarity("Rare")
                .with_reward("Diamonds", 20.0)
                .with_volume(4),
            Record::new("2", "B", "X")
                .with_rarity("Rare")
                .with_reward("Diamonds", 20.0)
                .with_volume(2),
            Record::new("3", "C", "X")
                .with_rarity("Rare")
                .with_reward("Cups", 2.0)
                .with_volume(4),
        ])
        .unwrap();

        let expected = vec!["2", "3", "1"];
        assert_eq!(sorted_ids(&store, SortSpec::ascending(SortKey::Rarity)), expected);
        assert_eq!(sorted_ids(&store, SortSpec::descending(SortKey::Rarity)), expected);
    }

    #[test]
    fn test_rarity_missing_reward_has_maximal_tier() {
        let store = RecordStore::new(vec![
            Record::new("1", "A", "X").with_rarity("Rare"),
            Record::new("2", "B", "X")
                .with_rarity("Rare")
                .with_reward("Cups", 50.0),
        ])
        .unwrap();

        assert_eq!(
            sorted_ids(&store, SortSpec::ascending(SortKey::Rarity)),
            vec!["2", "1"]
        );
        assert_eq!(
            sorted_ids(&store, SortSpec::descending(SortKey::Rarity)),
            vec!["1", "2"]
        );
    }

    #[test]
    fn test_reward_ascending_groups_by_type() {
        let store = RecordStore::new(vec![
            Record::new("1", "A", "X").with_reward("Diamonds", 5.0),
            Record::new("2", "B", "X").with_reward("Cups", 12.0),
            Record::new("3", "C", "X"),
            Record::new("4", "D", "X").with_reward("Cups", 3.0),
            Record::new("5", "E", "X").with_reward("Diamonds", 40.0),
        ])
        .unwrap();

        assert_eq!(
            sorted_ids(&store, SortSpec::ascending(SortKey::Reward)),
            vec!["4", "2", "1", "5", "3"]
        );
    }

    #[test]
    fn test_reward_descending_uses_score() {
        let store = RecordStore::new(vec![
            Record::new("cups", "A", "X").with_reward("Cups", 12.0),
            Record::new("diamonds", "B", "X").with_reward("Diamonds", 20.0),
            Record::new("none", "C", "X"),
            Record::new("small", "D", "X").with_reward("Diamonds", 5.0),
        ])
        .unwrap();

        assert_eq!(
            sorted_ids(&store, SortSpec::descending(SortKey::Reward)),
            vec!["diamonds", "cups", "small", "none"]
        );
    }

    #[test]
    fn test_reward_descending_ties_use_volume_ascending() {
        let store = RecordStore::new(vec![
            Record::new("1", "A", "X").with_reward("Cups", 10.0).with_volume(3),
            Record::new("2", "B", "X").with_reward("Diamonds", 5.0).with_volume(1),
            Record::new("3", "C", "X").with_reward("Cups", 10.0).with_volume(2),
        ])
        .unwrap();

        assert_eq!(
            sorted_ids(&store, SortSpec::descending(SortKey::Reward)),
            vec!["2", "3", "1"]
        );
    }

    #[test]
    fn test_sort_is_idempotent() {
        let store = RecordStore::new(vec![
            Record::new("1", "A", "X").with_rarity("Rare").with_reward("Cups", 1.0),
            Record::new("2", "B", "X").with_rarity("Epic"),
            Record::new("3", "C", "X").with_rarity("Rare").with_reward("Diamonds", 10.0),
        ])
        .unwrap();

        for key in SortKey::ALL {
            for spec in [SortSpec::ascending(key), SortSpec::descending(key)] {
                let mut once: Vec<&Record> = store.iter().collect();
                sort(&mut once, spec);
                let mut twice = once.clone();
                sort(&mut twice, spec);
                let once: Vec<_> = once.iter().map(|r| &r.id).collect();
                let twice: Vec<_> = twice.iter().map(|r| &r.id).collect();
                assert_eq!(once, twice, "{spec:?}");
            }
        }
    }
}
