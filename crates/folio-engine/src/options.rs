//! Distinct values offered by the filter menus.

use std::collections::BTreeSet;

use folio_core::{Rarity, Record, RewardKind, Volume, GENDERS};

/// Menu entries for each dropdown criterion, derived from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub volumes: Vec<String>,
    pub books: Vec<String>,
    pub genders: Vec<String>,
    pub rewards: Vec<String>,
    pub rarities: Vec<String>,
}

impl FilterOptions {
    /// Collect the values present in `records`.
    ///
    /// Volumes ascend numerically, books are alphabetical ignoring case,
    /// genders and rarities follow their vocabulary order with unknown values
    /// appended alphabetically, and reward types list Cups before Diamonds.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut volumes = BTreeSet::<Volume>::new();
        let mut books = BTreeSet::<String>::new();
        let mut genders = BTreeSet::<String>::new();
        let mut rewards = BTreeSet::<String>::new();
        let mut rarities = BTreeSet::<String>::new();

        for record in records {
            volumes.extend(record.volume);
            if let Some(book) = &record.book {
                books.extend(book.iter().cloned());
            }
            if let Some(gender) = &record.gender {
                genders.extend(gender.iter().cloned());
            }
            rewards.extend(record.reward.clone());
            rarities.extend(record.rarity.clone());
        }

        let mut books: Vec<String> = books.into_iter().collect();
        books.sort_by_key(|book| book.to_lowercase());

        let mut rewards: Vec<String> = rewards.into_iter().collect();
        rewards.sort_by_key(|reward| RewardKind::classify(reward));

        let mut rarities: Vec<String> = rarities.into_iter().collect();
        rarities.sort_by_key(|rarity| Rarity::rank_of(rarity));

        Self {
            volumes: volumes.into_iter().map(|v| v.to_string()).collect(),
            books,
            genders: vocabulary_first(genders, &GENDERS),
            rewards,
            rarities,
        }
    }
}

/// Known values in vocabulary order, then the rest alphabetically.
fn vocabulary_first(values: BTreeSet<String>, vocabulary: &[&str]) -> Vec<String> {
    let mut ordered: Vec<String> = vocabulary
        .iter()
        .filter(|known| values.contains(**known))
        .map(|known| known.to_string())
        .collect();
    ordered.extend(
        values
            .into_iter()
            .filter(|value| !vocabulary.contains(&value.as_str())),
    );
    ordered
}
