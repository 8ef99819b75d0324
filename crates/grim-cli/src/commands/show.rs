use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use grim_core::SheetStore;
use grim_sheet::{Ability, Sheet, SheetSession, Skill, format_modifier};

pub fn run(dir: &Path, character: &str, json: bool) -> Result<(), String> {
    let store = super::open_store(dir)?;
    let record = store.resolve(character).map_err(|e| e.to_string())?;
    let avatar = record.avatar_url.as_deref();
    let session = SheetSession::from_record(&record);
    let sheet = session.sheet();

    if json {
        let text = serde_json::to_string_pretty(sheet)
            .map_err(|e| format!("JSON serialization failed: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    // Header
    println!(
        "  {} [{}]",
        sheet.character_name.bold(),
        session.id().short().dimmed()
    );
    println!(
        "  {} {}, {}, {}",
        sheet.race, sheet.class_and_level, sheet.background, sheet.alignment
    );
    if !sheet.player_name.is_empty() {
        println!("  player:      {}", sheet.player_name);
    }
    println!("  xp:          {}", sheet.experience_points);
    if let Some(url) = avatar {
        println!("  avatar:      {url}");
    }
    println!();

    print_abilities(sheet);
    print_skills(sheet);
    print_combat(sheet);
    print_attacks(sheet);
    print_equipment(sheet);
    print_notes(sheet);

    Ok(())
}

fn print_abilities(sheet: &Sheet) {
    println!(
        "  {} {}  {} {}",
        "proficiency".bold(),
        format_modifier(sheet.proficiency_bonus),
        "inspiration".bold(),
        if sheet.inspiration { "yes" } else { "no" }
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Ability", "Score", "Mod", "Save"]);
    for ability in Ability::ALL {
        let save = sheet.saving_throws.get(ability);
        let marker = if save.is_proficient { "*" } else { "" };
        table.add_row(vec![
            ability.abbreviation().to_string(),
            sheet.attributes.get(ability).score.to_string(),
            format_modifier(sheet.attributes.modifier(ability)),
            format!("{}{marker}", format_modifier(save.bonus)),
        ]);
    }
    println!("{table}");
    println!();
}

fn print_skills(sheet: &Sheet) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "Skill", "Bonus"]);
    for skill in Skill::ALL {
        let entry = sheet.skill(skill);
        let marker = match (entry.is_proficient, entry.has_expertise) {
            (true, true) => "**",
            (true, false) => "*",
            (false, true) => "+",
            (false, false) => "",
        };
        table.add_row(vec![
            marker.to_string(),
            format!("{} ({})", skill.display_name(), skill.ability().abbreviation()),
            format_modifier(entry.bonus),
        ]);
    }
    println!("{table}");
    println!();
}

fn print_combat(sheet: &Sheet) {
    println!("  {}", "Combat".bold());
    println!("  armor class: {}", sheet.armor_class);
    println!("  initiative:  {}", format_modifier(sheet.initiative));
    println!("  speed:       {}", sheet.speed);
    println!(
        "  hit points:  {}/{} (+{} temp)",
        sheet.current_hit_points, sheet.hit_point_maximum, sheet.temporary_hit_points
    );
    println!("  hit dice:    {}", sheet.hit_dice);
    println!(
        "  death saves: {} success, {} failure",
        sheet.death_saves.successes, sheet.death_saves.failures
    );
    println!();
}

fn print_attacks(sheet: &Sheet) {
    if sheet.attacks_and_spellcasting.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Attack", "Bonus", "Damage"]);
    for (i, attack) in sheet.attacks_and_spellcasting.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            attack.name.clone(),
            attack.attack_bonus.clone(),
            attack.damage.clone(),
        ]);
    }
    println!("{table}");
    println!();
}

fn print_equipment(sheet: &Sheet) {
    if !sheet.equipment.is_empty() {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["#", "Item", "Qty", "Weight"]);
        for (i, item) in sheet.equipment.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                item.item.clone(),
                item.quantity.to_string(),
                item.weight.to_string(),
            ]);
        }
        println!("{table}");
        println!("  total weight: {}", sheet.total_weight());
    }
    println!(
        "  currency:    {} ({} gp total)",
        sheet.currency,
        sheet.currency.total_in_gold()
    );
    println!();
}

fn print_notes(sheet: &Sheet) {
    for (label, text) in [
        ("personality", &sheet.personality_traits),
        ("ideals", &sheet.ideals),
        ("bonds", &sheet.bonds),
        ("flaws", &sheet.flaws),
    ] {
        if !text.is_empty() {
            println!("  {label:<12} {text}");
        }
    }
    print_numbered("Features & Traits", &sheet.features_and_traits);
    print_numbered(
        "Proficiencies & Languages",
        &sheet.other_proficiencies_and_languages,
    );
}

fn print_numbered(title: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    println!();
    println!("  {}", title.bold());
    for (i, entry) in entries.iter().enumerate() {
        println!("  {:>3}. {entry}", i + 1);
    }
}
