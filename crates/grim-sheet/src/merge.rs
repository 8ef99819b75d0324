//! Merging raw stored data onto a typed sheet.
//!
//! Stored sheets are loose JSON documents. They may predate fields that
//! were added later, carry numbers as strings, or hold nulls. [`normalize`]
//! lays such a document over a default [`Sheet`] so that every field ends up
//! present and well-typed.
//!
//! Each field type decides how a raw value lands on it through its [`Merge`]
//! impl:
//!
//! - scalars (text, integers, decimals, flags) are overwritten,
//! - lists are replaced wholesale, never merged element by element,
//! - records recurse field by field, so keys missing from the patch keep
//!   their current value.

use serde_json::Value;

use crate::sheet::{
    AbilityScore, Attack, Attributes, Currency, DeathSaves, EquipmentItem, Proficiency,
    SavingThrows, Sheet, SkillMap,
};
use crate::skill::Skill;

/// A value that can absorb a raw JSON patch.
pub trait Merge {
    /// Apply `patch` on top of `self`.
    fn merge(&mut self, patch: &Value);
}

/// Lay a possibly partial raw sheet over `defaults`.
///
/// Keys absent from `partial` keep their default values. A `partial` that
/// is not a JSON object leaves the defaults untouched.
pub fn normalize(partial: &Value, defaults: Sheet) -> Sheet {
    let mut sheet = defaults;
    sheet.merge(partial);
    sheet
}

/// Parse the leading integer of a string the way form inputs are read:
/// leading whitespace and an optional sign, then digits. Anything without
/// leading digits parses as 0. Out-of-range values saturate.
pub fn parse_integer(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: i64 = 0;
    for digit in rest.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }
    if negative { -value } else { value }
}

/// Parse a checkbox-style flag. Unrecognized text reads as `false`.
pub fn parse_flag(s: &str) -> bool {
    matches!(
        s.trim().to_lowercase().as_str(),
        "true" | "yes" | "on" | "1" | "y"
    )
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Null | Value::Bool(_) => Some(0),
        Value::Number(n) => Some(
            n.as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or(0),
        ),
        Value::String(s) => Some(parse_integer(s)),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_decimal(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Null | Value::Bool(_) => 0.0,
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Array(_) | Value::Object(_) => return None,
    };
    Some(if parsed.is_finite() { parsed } else { 0.0 })
}

fn ignore(kind: &'static str, patch: &Value) {
    tracing::debug!(kind, patch = %patch, "ignoring value of the wrong shape");
}

impl Merge for String {
    fn merge(&mut self, patch: &Value) {
        match patch {
            Value::String(s) => s.clone_into(self),
            Value::Null => self.clear(),
            Value::Number(n) => *self = n.to_string(),
            Value::Bool(b) => *self = b.to_string(),
            Value::Array(_) | Value::Object(_) => ignore("text", patch),
        }
    }
}

impl Merge for i32 {
    fn merge(&mut self, patch: &Value) {
        match coerce_integer(patch) {
            Some(n) => *self = n.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            None => ignore("integer", patch),
        }
    }
}

impl Merge for u32 {
    fn merge(&mut self, patch: &Value) {
        match coerce_integer(patch) {
            Some(n) => *self = n.clamp(0, i64::from(u32::MAX)) as u32,
            None => ignore("count", patch),
        }
    }
}

impl Merge for f64 {
    fn merge(&mut self, patch: &Value) {
        match coerce_decimal(patch) {
            Some(f) => *self = f,
            None => ignore("decimal", patch),
        }
    }
}

impl Merge for bool {
    fn merge(&mut self, patch: &Value) {
        match patch {
            Value::Bool(b) => *self = *b,
            Value::Null => *self = false,
            Value::Number(n) => *self = n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => *self = parse_flag(s),
            Value::Array(_) | Value::Object(_) => ignore("flag", patch),
        }
    }
}

impl<T: Merge + Default> Merge for Vec<T> {
    fn merge(&mut self, patch: &Value) {
        match patch {
            Value::Array(items) => {
                *self = items
                    .iter()
                    .map(|raw| {
                        let mut item = T::default();
                        item.merge(raw);
                        item
                    })
                    .collect();
            }
            Value::Null => self.clear(),
            _ => ignore("list", patch),
        }
    }
}

impl Merge for SkillMap {
    fn merge(&mut self, patch: &Value) {
        match patch {
            Value::Object(entries) => {
                for (key, raw) in entries {
                    match Skill::from_key(key) {
                        Some(skill) => self.entry(skill).or_default().merge(raw),
                        None => tracing::warn!(skill = %key, "ignoring unknown skill"),
                    }
                }
            }
            Value::Null => self.clear(),
            _ => ignore("skills", patch),
        }
    }
}

/// Visit the fields of an object patch. `field` returns false for keys the
/// record does not have.
fn merge_record(record: &'static str, patch: &Value, mut field: impl FnMut(&str, &Value) -> bool) {
    let Value::Object(entries) = patch else {
        ignore(record, patch);
        return;
    };
    for (key, raw) in entries {
        if !field(key, raw) {
            tracing::debug!(record, key = %key, "ignoring unknown field");
        }
    }
}

impl Merge for AbilityScore {
    fn merge(&mut self, patch: &Value) {
        merge_record("ability score", patch, |key, raw| {
            match key {
                "score" => self.score.merge(raw),
                "modifier" => self.modifier.merge(raw),
                _ => return false,
            }
            true
        });
    }
}

impl Merge for Attributes {
    fn merge(&mut self, patch: &Value) {
        merge_record("attributes", patch, |key, raw| {
            match crate::ability::Ability::from_key(key) {
                Some(ability) if ability.key() == key => self.get_mut(ability).merge(raw),
                _ => return false,
            }
            true
        });
    }
}

impl Merge for Proficiency {
    fn merge(&mut self, patch: &Value) {
        merge_record("proficiency", patch, |key, raw| {
            match key {
                "is_proficient" => self.is_proficient.merge(raw),
                "has_expertise" => self.has_expertise.merge(raw),
                "bonus" => self.bonus.merge(raw),
                _ => return false,
            }
            true
        });
    }
}

impl Merge for SavingThrows {
    fn merge(&mut self, patch: &Value) {
        merge_record("saving throws", patch, |key, raw| {
            match crate::ability::Ability::from_key(key) {
                Some(ability) if ability.key() == key => self.get_mut(ability).merge(raw),
                _ => return false,
            }
            true
        });
    }
}

impl Merge for DeathSaves {
    fn merge(&mut self, patch: &Value) {
        merge_record("death saves", patch, |key, raw| {
            match key {
                "successes" => self.successes.merge(raw),
                "failures" => self.failures.merge(raw),
                _ => return false,
            }
            true
        });
    }
}

impl Merge for Attack {
    fn merge(&mut self, patch: &Value) {
        merge_record("attack", patch, |key, raw| {
            match key {
                "name" => self.name.merge(raw),
                "attack_bonus" => self.attack_bonus.merge(raw),
                "damage" => self.damage.merge(raw),
                _ => return false,
            }
            true
        });
    }
}

impl Merge for EquipmentItem {
    fn merge(&mut self, patch: &Value) {
        merge_record("equipment item", patch, |key, raw| {
            match key {
                "item" => self.item.merge(raw),
                "quantity" => self.quantity.merge(raw),
                "weight" => self.weight.merge(raw),
                _ => return false,
            }
            true
        });
    }
}

impl Merge for Currency {
    fn merge(&mut self, patch: &Value) {
        merge_record("currency", patch, |key, raw| {
            match crate::sheet::Denomination::from_key(key) {
                Some(d) if d.key() == key => self.get_mut(d).merge(raw),
                _ => return false,
            }
            true
        });
    }
}

impl Merge for Sheet {
    fn merge(&mut self, patch: &Value) {
        merge_record("sheet", patch, |key, raw| {
            match key {
                "character_name" => self.character_name.merge(raw),
                "class_and_level" => self.class_and_level.merge(raw),
                "race" => self.race.merge(raw),
                "background" => self.background.merge(raw),
                "alignment" => self.alignment.merge(raw),
                "player_name" => self.player_name.merge(raw),
                "experience_points" => self.experience_points.merge(raw),
                "attributes" => self.attributes.merge(raw),
                "proficiency_bonus" => self.proficiency_bonus.merge(raw),
                "inspiration" => self.inspiration.merge(raw),
                "saving_throws" => self.saving_throws.merge(raw),
                "skills" => Merge::merge(&mut self.skills, raw),
                "armor_class" => self.armor_class.merge(raw),
                "initiative" => self.initiative.merge(raw),
                "speed" => self.speed.merge(raw),
                "hit_point_maximum" => self.hit_point_maximum.merge(raw),
                "current_hit_points" => self.current_hit_points.merge(raw),
                "temporary_hit_points" => self.temporary_hit_points.merge(raw),
                "hit_dice" => self.hit_dice.merge(raw),
                "death_saves" => self.death_saves.merge(raw),
                "attacks_and_spellcasting" => self.attacks_and_spellcasting.merge(raw),
                "equipment" => self.equipment.merge(raw),
                "currency" => self.currency.merge(raw),
                "personality_traits" => self.personality_traits.merge(raw),
                "ideals" => self.ideals.merge(raw),
                "bonds" => self.bonds.merge(raw),
                "flaws" => self.flaws.merge(raw),
                "features_and_traits" => self.features_and_traits.merge(raw),
                "other_proficiencies_and_languages" => {
                    self.other_proficiencies_and_languages.merge(raw)
                }
                _ => return false,
            }
            true
        });
    }
}
