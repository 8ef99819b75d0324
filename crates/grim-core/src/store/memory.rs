//! In-memory store for tests and embedding.

use std::collections::HashMap;

use crate::error::{StoreError, StoreResult};
use crate::record::{CharacterId, CharacterRecord};
use crate::store::SheetStore;

/// A store that keeps records in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<CharacterId, CharacterRecord>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SheetStore for MemoryStore {
    fn insert(&mut self, record: CharacterRecord) -> StoreResult<()> {
        if self.records.contains_key(&record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
        self.records.insert(record.id, record);
        Ok(())
    }

    fn get(&self, id: CharacterId) -> StoreResult<CharacterRecord> {
        self.records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&mut self, record: CharacterRecord) -> StoreResult<()> {
        let slot = self
            .records
            .get_mut(&record.id)
            .ok_or(StoreError::NotFound(record.id))?;
        *slot = record;
        Ok(())
    }

    fn list(&self) -> StoreResult<Vec<CharacterRecord>> {
        let mut records: Vec<CharacterRecord> = self.records.values().cloned().collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records)
    }

    fn remove(&mut self, id: CharacterId) -> StoreResult<CharacterRecord> {
        self.records.remove(&id).ok_or(StoreError::NotFound(id))
    }
}
