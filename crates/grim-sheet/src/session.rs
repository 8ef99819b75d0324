//! Editing a stored character's sheet.
//!
//! A [`SheetSession`] is what a view holds while a player works on a sheet:
//! it loads the raw document from a [`SheetStore`], normalizes and derives
//! it, runs every edit through the engine, and writes the derived sheet back
//! on an explicit save.

use grim_core::{CharacterId, CharacterRecord, SheetStore};
use serde_json::Value;

use crate::derive::derive;
use crate::edit::{ListEdit, SheetEdit, apply_field_edit, apply_list_edit};
use crate::error::{SheetError, SheetResult};
use crate::merge::normalize;
use crate::sheet::Sheet;

/// Normalize a raw stored document against the default seed and derive it.
pub fn load_sheet(raw: &Value) -> Sheet {
    derive(normalize(raw, Sheet::default()))
}

/// Create and store a new character seeded with the default sheet.
///
/// Surrounding whitespace is trimmed from `name`; a blank name is rejected.
pub fn create_character(
    store: &mut impl SheetStore,
    name: &str,
) -> SheetResult<CharacterRecord> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SheetError::BlankName);
    }
    let sheet = derive(Sheet::named(name));
    let record = CharacterRecord::new(name).with_sheet(serde_json::to_value(&sheet)?);
    store.insert(record.clone())?;
    tracing::info!(id = %record.id, name, "created character");
    Ok(record)
}

/// An open sheet with unsaved-change tracking.
#[derive(Debug, Clone)]
pub struct SheetSession {
    id: CharacterId,
    name: String,
    sheet: Sheet,
    dirty: bool,
}

impl SheetSession {
    /// Load a character's sheet from the store.
    pub fn open(store: &impl SheetStore, id: CharacterId) -> SheetResult<Self> {
        let record = store.get(id)?;
        Ok(Self::from_record(&record))
    }

    /// Start a session from an already fetched record.
    pub fn from_record(record: &CharacterRecord) -> Self {
        tracing::debug!(id = %record.id, "opening sheet");
        Self {
            id: record.id,
            name: record.name.clone(),
            sheet: load_sheet(&record.sheet_data),
            dirty: false,
        }
    }

    /// The character being edited.
    pub fn id(&self) -> CharacterId {
        self.id
    }

    /// The character's record name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current, fully derived sheet.
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// Returns true if there are edits that have not been saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Apply a single-field edit.
    pub fn apply(&mut self, edit: SheetEdit) -> &Sheet {
        self.sheet = apply_field_edit(&self.sheet, edit);
        self.dirty = true;
        &self.sheet
    }

    /// Replace one of the sheet's lists.
    pub fn replace_list(&mut self, edit: ListEdit) -> &Sheet {
        self.sheet = apply_list_edit(&self.sheet, edit);
        self.dirty = true;
        &self.sheet
    }

    /// Write the derived sheet back to the store.
    ///
    /// On failure the session keeps its edits and stays dirty, so the caller
    /// can report the error and decide whether to try again.
    pub fn save(&mut self, store: &mut impl SheetStore) -> SheetResult<()> {
        let document = serde_json::to_value(&self.sheet)?;
        store.save_sheet(self.id, document)?;
        self.dirty = false;
        tracing::debug!(id = %self.id, "saved sheet");
        Ok(())
    }
}
