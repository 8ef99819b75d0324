use std::path::Path;

use colored::Colorize;
use grim_sheet::{SheetEdit, SheetSession, TextField, create_character};

pub fn run(dir: &Path, name: &str, class: Option<&str>) -> Result<(), String> {
    let mut store = super::open_store(dir)?;
    let record = create_character(&mut store, name).map_err(|e| e.to_string())?;

    if let Some(class) = class {
        let mut session = SheetSession::from_record(&record);
        session.apply(SheetEdit::Text(TextField::ClassAndLevel, class.to_string()));
        super::save(&mut session, &mut store)?;
    }

    println!(
        "  {} {} ({})",
        "Created".green().bold(),
        record.name.bold(),
        record.id.short()
    );
    Ok(())
}
