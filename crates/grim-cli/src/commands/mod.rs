pub mod avatar;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod lists;
pub mod new;
pub mod set;
pub mod show;

use std::path::Path;

use grim_core::{DirStore, SheetStore};
use grim_sheet::SheetSession;

/// Open the character store under the data directory.
fn open_store(dir: &Path) -> Result<DirStore, String> {
    DirStore::open(dir).map_err(|e| format!("cannot open data directory {}: {e}", dir.display()))
}

/// Resolve a character by name, id, or id prefix and open its sheet.
fn open_session(store: &DirStore, character: &str) -> Result<SheetSession, String> {
    let record = store.resolve(character).map_err(|e| e.to_string())?;
    Ok(SheetSession::from_record(&record))
}

/// Save a session, reporting failures as CLI errors.
fn save(session: &mut SheetSession, store: &mut DirStore) -> Result<(), String> {
    session
        .save(store)
        .map_err(|e| format!("cannot save {}: {e}", session.name()))
}
