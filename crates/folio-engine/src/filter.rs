//! Filter engine.
//!
//! Narrows a record sequence to the records that satisfy every active
//! criterion. Relative order is always preserved.

use folio_core::Record;

/// Independent, optional predicates. An empty criterion always matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against card name and character.
    pub search: String,
    pub volume: Option<String>,
    pub book: Option<String>,
    pub gender: Option<String>,
    pub reward: Option<String>,
    pub rarity: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = Some(volume.into());
        self
    }

    pub fn with_book(mut self, book: impl Into<String>) -> Self {
        self.book = Some(book.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_reward(mut self, reward: impl Into<String>) -> Self {
        self.reward = Some(reward.into());
        self
    }

    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    /// True when no criterion would exclude anything.
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none()
            && active(&self.volume).is_none()
            && active(&self.book).is_none()
            && active(&self.gender).is_none()
            && active(&self.reward).is_none()
            && active(&self.rarity).is_none()
    }

    /// Lowercased search term, or None when blank.
    fn search_term(&self) -> Option<String> {
        let term = self.search.trim();
        if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        }
    }

    /// Check one record against every active criterion.
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_with_term(record, self.search_term().as_deref())
    }

    fn matches_with_term(&self, record: &Record, term: Option<&str>) -> bool {
        if let Some(term) = term {
            if !matches_search(record, term) {
                return false;
            }
        }

        if let Some(volume) = active(&self.volume) {
            match record.volume {
                Some(v) if v.to_string() == volume => {}
                _ => return false,
            }
        }

        if let Some(book) = active(&self.book) {
            if !record.book.as_ref().is_some_and(|tags| tags.contains(book)) {
                return false;
            }
        }

        if let Some(gender) = active(&self.gender) {
            if !record.gender.as_ref().is_some_and(|tags| tags.contains(gender)) {
                return false;
            }
        }

        if let Some(reward) = active(&self.reward) {
            if record.reward.as_deref() != Some(reward) {
                return false;
            }
        }

        if let Some(rarity) = active(&self.rarity) {
            if record.rarity.as_deref() != Some(rarity) {
                return false;
            }
        }

        true
    }
}

/// A dropdown criterion is active only when it holds a non-empty value.
fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// `term` must already be lowercased.
fn matches_search(record: &Record, term: &str) -> bool {
    record.card_name.to_lowercase().contains(term) || record.character.to_lowercase().contains(term)
}

/// Keep the records that satisfy `criteria`, in their incoming order.
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let term = criteria.search_term();
    records
        .into_iter()
        .filter(|record| criteria.matches_with_term(record, term.as_deref()))
        .collect()
}
