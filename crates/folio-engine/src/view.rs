//! The ordered, filtered record sequence currently presented.

use folio_core::{Record, RecordId, SortSpec};

use crate::filter::{filter, FilterCriteria};
use crate::sort::sort;

/// Records that pass the active criteria, in active sort order.
///
/// A view is never edited; a change of criteria or sort builds a new one.
#[derive(Debug, Clone, Default)]
pub struct View<'a> {
    records: Vec<&'a Record>,
}

impl<'a> View<'a> {
    /// Filter `records`, then sort the survivors.
    pub fn compute<I>(records: I, criteria: &FilterCriteria, spec: SortSpec) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut records = filter(records, criteria);
        sort(&mut records, spec);
        Self { records }
    }

    /// Wrap an already ordered sequence.
    pub fn from_ordered(records: Vec<&'a Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&'a Record> {
        self.records.get(index).copied()
    }

    /// Index of the record with `id`, if it is in this view.
    pub fn position_of(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
