use std::path::Path;

use colored::Colorize;
use grim_sheet::{Attack, EquipmentItem, ListEdit, SheetSession, without_index};

use crate::EntryAction;

/// The lists the CLI edits entry by entry.
#[derive(Debug, Clone, Copy)]
pub enum List {
    Attacks,
    Equipment,
    Features,
    Languages,
}

impl List {
    fn label(self) -> &'static str {
        match self {
            Self::Attacks => "attack",
            Self::Equipment => "item",
            Self::Features => "feature",
            Self::Languages => "proficiency",
        }
    }
}

/// Convert a 1-based position from the command line to an index.
fn to_index(position: usize) -> Result<usize, String> {
    position
        .checked_sub(1)
        .ok_or_else(|| "positions start at 1".to_string())
}

/// Build the replacement list with one entry removed.
fn removal(session: &SheetSession, list: List, index: usize) -> Result<ListEdit, String> {
    let sheet = session.sheet();
    let edit = match list {
        List::Attacks => ListEdit::Attacks(without_index(
            &sheet.attacks_and_spellcasting,
            index,
            "attacks_and_spellcasting",
        )
        .map_err(|e| e.to_string())?),
        List::Equipment => ListEdit::Equipment(
            without_index(&sheet.equipment, index, "equipment").map_err(|e| e.to_string())?,
        ),
        List::Features => ListEdit::FeaturesAndTraits(
            without_index(&sheet.features_and_traits, index, "features_and_traits")
                .map_err(|e| e.to_string())?,
        ),
        List::Languages => ListEdit::OtherProficienciesAndLanguages(
            without_index(
                &sheet.other_proficiencies_and_languages,
                index,
                "other_proficiencies_and_languages",
            )
            .map_err(|e| e.to_string())?,
        ),
    };
    Ok(edit)
}

/// Open a character, replace one list, and save. Returns the character name.
fn commit(
    dir: &Path,
    character: &str,
    build: impl FnOnce(&SheetSession) -> Result<ListEdit, String>,
) -> Result<String, String> {
    let mut store = super::open_store(dir)?;
    let mut session = super::open_session(&store, character)?;
    let edit = build(&session)?;
    session.replace_list(edit);
    super::save(&mut session, &mut store)?;
    Ok(session.name().to_string())
}

pub fn add_attack(
    dir: &Path,
    character: &str,
    name: String,
    bonus: String,
    damage: String,
) -> Result<(), String> {
    let label = name.clone();
    let owner = commit(dir, character, |session| {
        let mut attacks = session.sheet().attacks_and_spellcasting.clone();
        attacks.push(Attack {
            name,
            attack_bonus: bonus,
            damage,
        });
        Ok(ListEdit::Attacks(attacks))
    })?;
    println!(
        "  {} attack {} to {}",
        "Added".green().bold(),
        label,
        owner.bold()
    );
    Ok(())
}

pub fn add_item(
    dir: &Path,
    character: &str,
    name: String,
    quantity: u32,
    weight: f64,
) -> Result<(), String> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(format!("invalid weight: {weight}"));
    }
    let label = name.clone();
    let owner = commit(dir, character, |session| {
        let mut items = session.sheet().equipment.clone();
        items.push(EquipmentItem {
            quantity,
            weight,
            ..EquipmentItem::new(name)
        });
        Ok(ListEdit::Equipment(items))
    })?;
    println!(
        "  {} {}x {} to {}",
        "Added".green().bold(),
        quantity,
        label,
        owner.bold()
    );
    Ok(())
}

pub fn entry(dir: &Path, list: List, action: EntryAction) -> Result<(), String> {
    match action {
        EntryAction::Add { character, text } => {
            let label = text.clone();
            let owner = commit(dir, &character, |session| {
                let sheet = session.sheet();
                match list {
                    List::Features => {
                        let mut entries = sheet.features_and_traits.clone();
                        entries.push(text);
                        Ok(ListEdit::FeaturesAndTraits(entries))
                    }
                    List::Languages => {
                        let mut entries = sheet.other_proficiencies_and_languages.clone();
                        entries.push(text);
                        Ok(ListEdit::OtherProficienciesAndLanguages(entries))
                    }
                    List::Attacks | List::Equipment => {
                        Err(format!("{} entries are not plain text", list.label()))
                    }
                }
            })?;
            println!(
                "  {} {} \"{}\" to {}",
                "Added".green().bold(),
                list.label(),
                label,
                owner.bold()
            );
            Ok(())
        }
        EntryAction::Remove {
            character,
            position,
        } => remove(dir, &character, list, position),
    }
}

pub fn remove(dir: &Path, character: &str, list: List, position: usize) -> Result<(), String> {
    let index = to_index(position)?;
    let owner = commit(dir, character, |session| removal(session, list, index))?;
    println!(
        "  {} {} #{} from {}",
        "Removed".yellow().bold(),
        list.label(),
        position,
        owner.bold()
    );
    Ok(())
}
