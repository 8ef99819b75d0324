use std::path::Path;

use colored::Colorize;
use grim_core::SheetStore;

pub fn run(dir: &Path, character: &str, url: Option<&str>) -> Result<(), String> {
    let url = url.map(str::trim).filter(|u| !u.is_empty());
    let mut store = super::open_store(dir)?;
    let record = store.resolve(character).map_err(|e| e.to_string())?;
    store
        .set_avatar(record.id, url.map(str::to_string))
        .map_err(|e| format!("cannot save {}: {e}", record.name))?;

    match url {
        Some(url) => println!(
            "  {} avatar of {} to {}",
            "Set".green().bold(),
            record.name.bold(),
            url
        ),
        None => println!("  {} avatar of {}", "Cleared".yellow().bold(), record.name.bold()),
    }
    Ok(())
}
