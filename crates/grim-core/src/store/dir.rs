//! Directory-backed store: one JSON file per character.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use crate::record::{CharacterId, CharacterRecord};
use crate::store::SheetStore;

/// A store that keeps each character as a JSON document on disk, at
/// `<root>/characters/<id>.json`.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Open (and create if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = Self { root: root.into() };
        fs::create_dir_all(store.characters_dir())?;
        tracing::debug!(root = %store.root.display(), "opened character store");
        Ok(store)
    }

    /// The directory this store was opened at.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn characters_dir(&self) -> PathBuf {
        self.root.join("characters")
    }

    fn path_for(&self, id: CharacterId) -> PathBuf {
        self.characters_dir().join(format!("{id}.json"))
    }

    fn write(&self, record: &CharacterRecord) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(record)?;
        fs::write(self.path_for(record.id), json)?;
        tracing::debug!(id = %record.id, "wrote character record");
        Ok(())
    }
}

impl SheetStore for DirStore {
    fn insert(&mut self, record: CharacterRecord) -> StoreResult<()> {
        if self.path_for(record.id).exists() {
            return Err(StoreError::DuplicateId(record.id));
        }
        self.write(&record)
    }

    fn get(&self, id: CharacterId) -> StoreResult<CharacterRecord> {
        let text = match fs::read_to_string(self.path_for(id)) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StoreError::NotFound(id)),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&text)?)
    }

    fn update(&mut self, record: CharacterRecord) -> StoreResult<()> {
        if !self.path_for(record.id).exists() {
            return Err(StoreError::NotFound(record.id));
        }
        self.write(&record)
    }

    fn list(&self) -> StoreResult<Vec<CharacterRecord>> {
        let mut records = Vec::new();
        for entry in fs::read_dir(self.characters_dir())? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let text = fs::read_to_string(&path)?;
            match serde_json::from_str::<CharacterRecord>(&text) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping malformed record");
                }
            }
        }
        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records)
    }

    fn remove(&mut self, id: CharacterId) -> StoreResult<CharacterRecord> {
        let record = self.get(id)?;
        fs::remove_file(self.path_for(id))?;
        tracing::debug!(%id, "removed character record");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn open_creates_layout() {
        let dir = TempDir::new().unwrap();
        let store = DirStore::open(dir.path().join("data")).unwrap();
        assert!(store.root().join("characters").is_dir());
    }

    #[test]
    fn records_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let record = CharacterRecord::new("Kael")
            .with_sheet(serde_json::json!({ "class_and_level": "Rogue 4" }));
        let id = record.id;
        {
            let mut store = DirStore::open(dir.path()).unwrap();
            store.insert(record.clone()).unwrap();
        }
        let store = DirStore::open(dir.path()).unwrap();
        assert_eq!(store.get(id).unwrap(), record);
        assert_eq!(store.load_sheet(id).unwrap()["class_and_level"], "Rogue 4");
    }

    #[test]
    fn get_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = DirStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.get(CharacterId::new()),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn list_skips_foreign_and_malformed_files() {
        let dir = TempDir::new().unwrap();
        let mut store = DirStore::open(dir.path()).unwrap();
        store.insert(CharacterRecord::new("Mira")).unwrap();
        fs::write(dir.path().join("characters/notes.txt"), "hello").unwrap();
        fs::write(dir.path().join("characters/broken.json"), "{ nope").unwrap();
        let records = store.list().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Mira");
    }

    #[test]
    fn save_sheet_and_remove() {
        let dir = TempDir::new().unwrap();
        let mut store = DirStore::open(dir.path()).unwrap();
        let record = CharacterRecord::new("Kael");
        let id = record.id;
        store.insert(record).unwrap();
        store
            .save_sheet(id, serde_json::json!({ "armor_class": 17 }))
            .unwrap();
        assert_eq!(store.get(id).unwrap().sheet_data["armor_class"], 17);
        store.remove(id).unwrap();
        assert!(store.list().unwrap().is_empty());
    }
}
