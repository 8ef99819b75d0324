use std::path::Path;

use colored::Colorize;
use grim_core::SheetStore;

pub fn run(dir: &Path, character: &str) -> Result<(), String> {
    let mut store = super::open_store(dir)?;
    let record = store.resolve(character).map_err(|e| e.to_string())?;
    store.remove(record.id).map_err(|e| e.to_string())?;
    println!(
        "  {} {} ({})",
        "Deleted".red().bold(),
        record.name.bold(),
        record.id.short()
    );
    Ok(())
}
