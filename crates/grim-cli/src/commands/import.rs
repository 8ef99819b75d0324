use std::fs;
use std::path::Path;

use colored::Colorize;
use grim_core::{CharacterRecord, SheetStore};
use grim_sheet::{SheetError, load_sheet};
use serde_json::Value;

pub fn run(dir: &Path, file: &Path, name: Option<&str>) -> Result<(), String> {
    let text = fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let raw: Value = serde_json::from_str(&text)
        .map_err(|e| format!("{} is not valid JSON: {e}", file.display()))?;
    if !raw.is_object() {
        return Err(format!("{} does not contain a sheet object", file.display()));
    }

    let stored_name = raw
        .get("character_name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let name = match name.map(str::trim) {
        Some("") => return Err(SheetError::BlankName.to_string()),
        Some(name) => Some(name),
        None => stored_name,
    };
    let name = name
        .map(str::to_string)
        .or_else(|| file.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "Imported Character".to_string());

    let mut sheet = load_sheet(&raw);
    if stored_name.is_none() {
        sheet.character_name = name.clone();
    }
    let document = serde_json::to_value(&sheet).map_err(|e| e.to_string())?;

    let mut store = super::open_store(dir)?;
    let record = CharacterRecord::new(name).with_sheet(document);
    store.insert(record.clone()).map_err(|e| e.to_string())?;
    tracing::info!(id = %record.id, file = %file.display(), "imported character");

    println!(
        "  {} {} ({}) from {}",
        "Imported".green().bold(),
        record.name.bold(),
        record.id.short(),
        file.display()
    );
    Ok(())
}
