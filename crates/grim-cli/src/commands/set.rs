use std::path::Path;

use colored::Colorize;
use grim_sheet::{SheetEdit, format_modifier};

pub fn run(dir: &Path, character: &str, path: &str, value: &str) -> Result<(), String> {
    let edit = SheetEdit::parse(path, value).map_err(|e| e.to_string())?;
    let mut store = super::open_store(dir)?;
    let mut session = super::open_session(&store, character)?;

    let sheet = session.apply(edit);
    let summary = format!(
        "proficiency {}, initiative {}",
        format_modifier(sheet.proficiency_bonus),
        format_modifier(sheet.initiative)
    );
    super::save(&mut session, &mut store)?;

    println!(
        "  {} {} on {} ({})",
        "Set".green().bold(),
        path,
        session.name().bold(),
        summary.dimmed()
    );
    Ok(())
}
