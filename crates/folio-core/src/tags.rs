//! Single-or-many tag values.

use serde::{Deserialize, Serialize};

/// A field that holds either one tag or an ordered set of tags.
///
/// The catalog writes `"book": "Spring"` for a card in one story arc and
/// `"book": ["Spring", "Summer"]` for a card shared between arcs. Both shapes
/// deserialize into this type so callers never branch on the JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tags<T> {
    /// A single tag.
    One(T),
    /// An ordered set of tags.
    Many(Vec<T>),
}

impl<T> Tags<T> {
    /// The first tag, used as the representative value when sorting.
    pub fn first(&self) -> Option<&T> {
        match self {
            Tags::One(tag) => Some(tag),
            Tags::Many(tags) => tags.first(),
        }
    }

    /// Iterate all tags in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Tags::One(tag) => std::slice::from_ref(tag).iter(),
            Tags::Many(tags) => tags.iter(),
        }
    }

    /// Number of tags held.
    pub fn len(&self) -> usize {
        match self {
            Tags::One(_) => 1,
            Tags::Many(tags) => tags.len(),
        }
    }

    /// True only for an empty set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Tags<String> {
    /// Check whether any tag equals `value` exactly.
    pub fn contains(&self, value: &str) -> bool {
        self.iter().any(|tag| tag == value)
    }
}

impl From<String> for Tags<String> {
    fn from(tag: String) -> Self {
        Tags::One(tag)
    }
}

impl From<&str> for Tags<String> {
    fn from(tag: &str) -> Self {
        Tags::One(tag.to_string())
    }
}

impl From<Vec<String>> for Tags<String> {
    fn from(tags: Vec<String>) -> Self {
        Tags::Many(tags)
    }
}

impl From<Vec<&str>> for Tags<String> {
    fn from(tags: Vec<&str>) -> Self {
        Tags::Many(tags.into_iter().map(str::to_string).collect())
    }
}

impl<'a, T> IntoIterator for &'a Tags<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
