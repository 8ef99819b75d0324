//! Persistence contract for character records.
//!
//! A [`SheetStore`] keeps one record per character and treats the sheet
//! inside it as an opaque document. Implementations do no retrying; a
//! failed load or save is returned to the caller as a [`StoreError`].

pub mod dir;
pub mod memory;

pub use dir::DirStore;
pub use memory::MemoryStore;

use chrono::Utc;
use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::record::{CharacterId, CharacterRecord};

/// Storage for character records.
pub trait SheetStore {
    /// Add a new record. Fails if the ID is already taken.
    fn insert(&mut self, record: CharacterRecord) -> StoreResult<()>;

    /// Fetch a record by ID.
    fn get(&self, id: CharacterId) -> StoreResult<CharacterRecord>;

    /// Replace an existing record.
    fn update(&mut self, record: CharacterRecord) -> StoreResult<()>;

    /// All records, sorted by name.
    fn list(&self) -> StoreResult<Vec<CharacterRecord>>;

    /// Delete a record, returning it.
    fn remove(&mut self, id: CharacterId) -> StoreResult<CharacterRecord>;

    /// The raw sheet document of a character.
    fn load_sheet(&self, id: CharacterId) -> StoreResult<Value> {
        Ok(self.get(id)?.sheet_data)
    }

    /// Overwrite the sheet document of a character and bump its update time.
    fn save_sheet(&mut self, id: CharacterId, sheet: Value) -> StoreResult<()> {
        let mut record = self.get(id)?;
        record.sheet_data = sheet;
        record.updated_at = Utc::now();
        self.update(record)
    }

    /// Set or clear a character's portrait URL.
    fn set_avatar(&mut self, id: CharacterId, url: Option<String>) -> StoreResult<()> {
        let mut record = self.get(id)?;
        record.avatar_url = url;
        record.updated_at = Utc::now();
        self.update(record)
    }

    /// Find a record by full ID, case-insensitive name, or unique ID prefix.
    ///
    /// A name or prefix shared by several records is [`StoreError::Ambiguous`].
    fn resolve(&self, key: &str) -> StoreResult<CharacterRecord> {
        let key = key.trim();
        if let Ok(id) = key.parse::<CharacterId>() {
            return self.get(id);
        }

        let records = self.list()?;
        let lower = key.to_lowercase();
        let (mut matches, rest): (Vec<CharacterRecord>, Vec<CharacterRecord>) = records
            .into_iter()
            .partition(|r| r.name.to_lowercase() == lower);
        if matches.is_empty() {
            matches = rest
                .into_iter()
                .filter(|r| !key.is_empty() && r.id.to_string().starts_with(&lower))
                .collect();
        }
        match matches.len() {
            0 => Err(StoreError::NoMatch(key.to_string())),
            1 => Ok(matches.remove(0)),
            count => Err(StoreError::Ambiguous {
                key: key.to_string(),
                count,
            }),
        }
    }
}
