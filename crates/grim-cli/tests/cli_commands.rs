//! Integration tests for the `grim` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn grim(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("grim").unwrap();
    cmd.env_remove("GRIM_LOG")
        .arg("--data-dir")
        .arg(data.path());
    cmd
}

/// A data directory holding one freshly created character.
fn with_character(name: &str) -> TempDir {
    let data = TempDir::new().unwrap();
    grim(&data).args(["new", name]).assert().success();
    data
}

fn sheet_json(data: &TempDir, character: &str) -> Value {
    let output = grim(data)
        .args(["show", character, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// grim new / list
// ---------------------------------------------------------------------------

#[test]
fn new_creates_character() {
    let data = TempDir::new().unwrap();
    grim(&data)
        .args(["new", "Kael Stormborn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"))
        .stdout(predicate::str::contains("Kael Stormborn"));

    let files: Vec<_> = fs::read_dir(data.path().join("characters"))
        .unwrap()
        .collect();
    assert_eq!(files.len(), 1);
}

#[test]
fn new_with_class_derives_level() {
    let data = TempDir::new().unwrap();
    grim(&data)
        .args(["new", "Vex", "--class", "Rogue 3/Wizard 2"])
        .assert()
        .success();

    let sheet = sheet_json(&data, "Vex");
    assert_eq!(sheet["class_and_level"], "Rogue 3/Wizard 2");
    assert_eq!(sheet["proficiency_bonus"], 3);
}

#[test]
fn list_shows_characters() {
    let data = with_character("Kael");
    grim(&data).args(["new", "Aria"]).assert().success();
    grim(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kael"))
        .stdout(predicate::str::contains("Aria"))
        .stdout(predicate::str::contains("Fighter 1"))
        .stdout(predicate::str::contains("2 characters"));
}

#[test]
fn list_empty_store() {
    let data = TempDir::new().unwrap();
    grim(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No characters found"));
}

#[test]
fn data_dir_from_environment() {
    let data = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("grim").unwrap();
    cmd.env("GRIM_DATA_DIR", data.path())
        .args(["new", "Kael"])
        .assert()
        .success();
    assert!(data.path().join("characters").is_dir());
}

// ---------------------------------------------------------------------------
// grim show
// ---------------------------------------------------------------------------

#[test]
fn show_prints_derived_sheet() {
    let data = with_character("Kael");
    grim(&data)
        .args(["show", "kael"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kael"))
        .stdout(predicate::str::contains("Stealth (DEX)"))
        .stdout(predicate::str::contains("Unarmed Strike"))
        .stdout(predicate::str::contains("armor class: 10"));
}

#[test]
fn show_json_has_every_skill() {
    let data = with_character("Kael");
    let sheet = sheet_json(&data, "Kael");
    let skills = sheet["skills"].as_object().unwrap();
    assert_eq!(skills.len(), 18);
    assert_eq!(sheet["skills"]["sleight_of_hand"]["bonus"], 0);
    assert_eq!(sheet["speed"], "9m");
}

#[test]
fn show_unknown_character() {
    let data = with_character("Kael");
    grim(&data)
        .args(["show", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// grim set
// ---------------------------------------------------------------------------

#[test]
fn set_score_recomputes_dependents() {
    let data = with_character("Kael");
    grim(&data)
        .args(["set", "Kael", "attributes.dexterity.score", "16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initiative +3"));

    let sheet = sheet_json(&data, "Kael");
    assert_eq!(sheet["attributes"]["dexterity"]["modifier"], 3);
    assert_eq!(sheet["initiative"], 3);
    assert_eq!(sheet["skills"]["stealth"]["bonus"], 3);
    assert_eq!(sheet["saving_throws"]["dexterity"]["bonus"], 3);
}

#[test]
fn set_skill_proficiency() {
    let data = with_character("Kael");
    grim(&data)
        .args(["set", "Kael", "skills.athletics.is_proficient", "true"])
        .assert()
        .success();
    grim(&data)
        .args(["set", "Kael", "class_and_level", "Fighter 5"])
        .assert()
        .success();

    let sheet = sheet_json(&data, "Kael");
    assert_eq!(sheet["proficiency_bonus"], 3);
    assert_eq!(sheet["skills"]["athletics"]["bonus"], 3);
}

#[test]
fn set_non_numeric_score_becomes_zero() {
    let data = with_character("Kael");
    grim(&data)
        .args(["set", "Kael", "attributes.strength.score", "abc"])
        .assert()
        .success();

    let sheet = sheet_json(&data, "Kael");
    assert_eq!(sheet["attributes"]["strength"]["score"], 0);
    assert_eq!(sheet["attributes"]["strength"]["modifier"], -5);
}

#[test]
fn set_derived_field_is_overwritten() {
    let data = with_character("Kael");
    grim(&data)
        .args(["set", "Kael", "proficiency_bonus", "9"])
        .assert()
        .success();

    let sheet = sheet_json(&data, "Kael");
    assert_eq!(sheet["proficiency_bonus"], 2);
}

#[test]
fn set_unknown_field_fails() {
    let data = with_character("Kael");
    grim(&data)
        .args(["set", "Kael", "charm", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn set_list_field_fails() {
    let data = with_character("Kael");
    grim(&data)
        .args(["set", "Kael", "equipment", "rope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a list"));
}

// ---------------------------------------------------------------------------
// list editing
// ---------------------------------------------------------------------------

#[test]
fn attack_add_and_remove() {
    let data = with_character("Kael");
    grim(&data)
        .args(["attack", "add", "Kael", "Longsword", "--bonus", "+5", "--damage", "1d8+3 slashing"])
        .assert()
        .success();

    let sheet = sheet_json(&data, "Kael");
    let attacks = sheet["attacks_and_spellcasting"].as_array().unwrap();
    assert_eq!(attacks.len(), 2);
    assert_eq!(attacks[1]["name"], "Longsword");
    assert_eq!(attacks[1]["damage"], "1d8+3 slashing");

    grim(&data)
        .args(["attack", "remove", "Kael", "1"])
        .assert()
        .success();
    let sheet = sheet_json(&data, "Kael");
    let attacks = sheet["attacks_and_spellcasting"].as_array().unwrap();
    assert_eq!(attacks.len(), 1);
    assert_eq!(attacks[0]["name"], "Longsword");
}

#[test]
fn attack_add_uses_defaults() {
    let data = with_character("Kael");
    grim(&data)
        .args(["attack", "add", "Kael", "Dagger"])
        .assert()
        .success();

    let sheet = sheet_json(&data, "Kael");
    assert_eq!(sheet["attacks_and_spellcasting"][1]["attack_bonus"], "+0");
    assert_eq!(sheet["attacks_and_spellcasting"][1]["damage"], "1d4");
}

#[test]
fn remove_out_of_range_fails() {
    let data = with_character("Kael");
    grim(&data)
        .args(["attack", "remove", "Kael", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
    grim(&data)
        .args(["item", "remove", "Kael", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positions start at 1"));
}

#[test]
fn item_add_tracks_weight() {
    let data = with_character("Kael");
    grim(&data)
        .args(["item", "add", "Kael", "Torch", "--quantity", "3", "--weight", "0.5"])
        .assert()
        .success();
    grim(&data)
        .args(["show", "Kael"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Torch"))
        .stdout(predicate::str::contains("total weight: 1.5"));
}

#[test]
fn feature_and_language_entries() {
    let data = with_character("Kael");
    grim(&data)
        .args(["feature", "add", "Kael", "Second Wind"])
        .assert()
        .success();
    grim(&data)
        .args(["language", "add", "Kael", "Common"])
        .assert()
        .success();
    grim(&data)
        .args(["language", "add", "Kael", "Dwarvish"])
        .assert()
        .success();
    grim(&data)
        .args(["language", "remove", "Kael", "1"])
        .assert()
        .success();

    let sheet = sheet_json(&data, "Kael");
    assert_eq!(sheet["features_and_traits"][0], "Second Wind");
    let languages = sheet["other_proficiencies_and_languages"].as_array().unwrap();
    assert_eq!(languages.len(), 1);
    assert_eq!(languages[0], "Dwarvish");
}

// ---------------------------------------------------------------------------
// grim import / export / delete
// ---------------------------------------------------------------------------

#[test]
fn import_partial_sheet() {
    let data = TempDir::new().unwrap();
    let file = data.path().join("old.json");
    fs::write(
        &file,
        r#"{
    "character_name": "Brom",
    "class_and_level": "Cleric 9",
    "attributes": { "wisdom": { "score": 18 } },
    "skills": { "insight": { "is_proficient": true } }
}"#,
    )
    .unwrap();

    grim(&data)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported"));

    let sheet = sheet_json(&data, "Brom");
    assert_eq!(sheet["proficiency_bonus"], 4);
    assert_eq!(sheet["skills"]["insight"]["bonus"], 8);
    assert_eq!(sheet["race"], "Human");
    assert_eq!(sheet["hit_dice"], "1d10");
}

#[test]
fn import_rejects_non_object() {
    let data = TempDir::new().unwrap();
    let file = data.path().join("list.json");
    fs::write(&file, "[1, 2, 3]").unwrap();
    grim(&data)
        .arg("import")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not contain a sheet object"));
}

#[test]
fn export_to_file() {
    let data = with_character("Kael");
    let out = data.path().join("kael.json");
    grim(&data)
        .args(["export", "Kael", "--output"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let sheet: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(sheet["character_name"], "Kael");
    assert_eq!(sheet["skills"]["perception"]["bonus"], 0);
}

#[test]
fn delete_removes_character() {
    let data = with_character("Kael");
    grim(&data)
        .args(["delete", "Kael"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));
    grim(&data)
        .args(["show", "Kael"])
        .assert()
        .failure();
}

#[test]
fn verbose_logs_to_stderr() {
    let data = with_character("Kael");
    grim(&data)
        .args(["--verbose", "set", "Kael", "inspiration", "yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("applying field edit"));
}

#[test]
fn new_rejects_blank_name() {
    let data = TempDir::new().unwrap();
    grim(&data)
        .args(["new", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be blank"));
    grim(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No characters found"));
}

#[test]
fn shared_name_is_ambiguous() {
    let data = with_character("Kael");
    grim(&data).args(["new", "kael"]).assert().success();
    grim(&data)
        .args(["delete", "Kael"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("matches 2 characters"));
    grim(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 characters"));
}

#[test]
fn avatar_set_show_and_clear() {
    let data = with_character("Kael");
    grim(&data)
        .args(["avatar", "Kael", "https://cdn.example/kael.png"])
        .assert()
        .success();
    grim(&data)
        .args(["show", "Kael"])
        .assert()
        .success()
        .stdout(predicate::str::contains("avatar:      https://cdn.example/kael.png"));

    grim(&data).args(["avatar", "Kael"]).assert().success();
    grim(&data)
        .args(["show", "Kael"])
        .assert()
        .success()
        .stdout(predicate::str::contains("avatar:").not());
}

#[test]
fn show_prints_purse_value_in_gold() {
    let data = with_character("Kael");
    grim(&data)
        .args(["set", "Kael", "currency.pp", "2"])
        .assert()
        .success();
    grim(&data)
        .args(["set", "Kael", "currency.sp", "5"])
        .assert()
        .success();
    grim(&data)
        .args(["show", "Kael"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(20.5 gp total)"));
}

#[test]
fn import_rejects_blank_name() {
    let data = TempDir::new().unwrap();
    let file = data.path().join("brom.json");
    fs::write(&file, r#"{ "character_name": "Brom" }"#).unwrap();
    grim(&data)
        .arg("import")
        .arg(&file)
        .args(["--name", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be blank"));
}
