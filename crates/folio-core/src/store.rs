//! Record store.
//!
//! Holds the loaded collection in source order. Each record's original
//! position is assigned here, exactly once, and is the final tie-break of
//! every sort.

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::record::{Record, RecordId};

/// The loaded catalog.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    index: HashMap<RecordId, usize>,
}

impl RecordStore {
    /// Build a store from records in source order.
    ///
    /// Rejects duplicate ids and records with an empty id, card name or
    /// character.
    pub fn new(records: Vec<Record>) -> Result<Self, CatalogError> {
        let mut records = records;
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter_mut().enumerate() {
            for (field, value) in [
                ("id", &record.id),
                ("cardName", &record.card_name),
                ("character", &record.character),
            ] {
                if value.trim().is_empty() {
                    return Err(CatalogError::MissingField { position, field });
                }
            }

            record.set_original_position(position);

            if let Some(first) = index.insert(record.record_id(), position) {
                return Err(CatalogError::DuplicateId {
                    id: record.id.clone(),
                    first,
                    second: position,
                });
            }
        }

        Ok(Self { records, index })
    }

    /// Parse a JSON array of records.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CatalogError> {
        let records: Vec<Record> = serde_json::from_slice(bytes)?;
        Self::new(records)
    }

    /// All records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Look up a record by id.
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
