use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use grim_core::SheetStore;
use grim_sheet::load_sheet;

pub fn run(dir: &Path) -> Result<(), String> {
    let store = super::open_store(dir)?;
    let records = store.list().map_err(|e| e.to_string())?;

    if records.is_empty() {
        println!("  No characters found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Class", "Race", "System", "Updated"]);

    for record in &records {
        let sheet = load_sheet(&record.sheet_data);
        table.add_row(vec![
            record.id.short(),
            record.name.clone(),
            sheet.class_and_level,
            sheet.race,
            record.system.to_string(),
            record.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} character{}",
        records.len(),
        if records.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
