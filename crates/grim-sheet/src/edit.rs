//! Typed edits to a sheet.
//!
//! A view never mutates a sheet directly. It issues a [`SheetEdit`] for a
//! single field or a [`ListEdit`] that replaces a whole list, and receives a
//! freshly derived sheet back. Text-driven callers (forms, the CLI) can turn
//! a dotted path and raw input into a [`SheetEdit`] with [`SheetEdit::parse`].

use crate::ability::Ability;
use crate::derive::derive;
use crate::error::{SheetError, SheetResult};
use crate::merge::{parse_flag, parse_integer};
use crate::sheet::{Attack, Denomination, EquipmentItem, Sheet};
use crate::skill::Skill;

/// Free-text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    /// `character_name`
    CharacterName,
    /// `class_and_level`
    ClassAndLevel,
    /// `race`
    Race,
    /// `background`
    Background,
    /// `alignment`
    Alignment,
    /// `player_name`
    PlayerName,
    /// `speed`
    Speed,
    /// `hit_dice`
    HitDice,
    /// `personality_traits`
    PersonalityTraits,
    /// `ideals`
    Ideals,
    /// `bonds`
    Bonds,
    /// `flaws`
    Flaws,
}

impl TextField {
    const ALL: [TextField; 12] = [
        Self::CharacterName,
        Self::ClassAndLevel,
        Self::Race,
        Self::Background,
        Self::Alignment,
        Self::PlayerName,
        Self::Speed,
        Self::HitDice,
        Self::PersonalityTraits,
        Self::Ideals,
        Self::Bonds,
        Self::Flaws,
    ];

    /// The field's key in stored sheets.
    pub fn key(self) -> &'static str {
        match self {
            Self::CharacterName => "character_name",
            Self::ClassAndLevel => "class_and_level",
            Self::Race => "race",
            Self::Background => "background",
            Self::Alignment => "alignment",
            Self::PlayerName => "player_name",
            Self::Speed => "speed",
            Self::HitDice => "hit_dice",
            Self::PersonalityTraits => "personality_traits",
            Self::Ideals => "ideals",
            Self::Bonds => "bonds",
            Self::Flaws => "flaws",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    fn slot(self, sheet: &mut Sheet) -> &mut String {
        match self {
            Self::CharacterName => &mut sheet.character_name,
            Self::ClassAndLevel => &mut sheet.class_and_level,
            Self::Race => &mut sheet.race,
            Self::Background => &mut sheet.background,
            Self::Alignment => &mut sheet.alignment,
            Self::PlayerName => &mut sheet.player_name,
            Self::Speed => &mut sheet.speed,
            Self::HitDice => &mut sheet.hit_dice,
            Self::PersonalityTraits => &mut sheet.personality_traits,
            Self::Ideals => &mut sheet.ideals,
            Self::Bonds => &mut sheet.bonds,
            Self::Flaws => &mut sheet.flaws,
        }
    }
}

/// User-set combat numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vital {
    /// `armor_class`
    ArmorClass,
    /// `hit_point_maximum`
    HitPointMaximum,
    /// `current_hit_points`
    CurrentHitPoints,
    /// `temporary_hit_points`
    TemporaryHitPoints,
}

impl Vital {
    /// The field's key in stored sheets.
    pub fn key(self) -> &'static str {
        match self {
            Self::ArmorClass => "armor_class",
            Self::HitPointMaximum => "hit_point_maximum",
            Self::CurrentHitPoints => "current_hit_points",
            Self::TemporaryHitPoints => "temporary_hit_points",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        [
            Self::ArmorClass,
            Self::HitPointMaximum,
            Self::CurrentHitPoints,
            Self::TemporaryHitPoints,
        ]
        .into_iter()
        .find(|v| v.key() == key)
    }

    fn slot(self, sheet: &mut Sheet) -> &mut i32 {
        match self {
            Self::ArmorClass => &mut sheet.armor_class,
            Self::HitPointMaximum => &mut sheet.hit_point_maximum,
            Self::CurrentHitPoints => &mut sheet.current_hit_points,
            Self::TemporaryHitPoints => &mut sheet.temporary_hit_points,
        }
    }
}

/// Fields that derive recomputes. Writing one has no lasting effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedField {
    /// `attributes.<ability>.modifier`
    Modifier(Ability),
    /// `proficiency_bonus`
    ProficiencyBonus,
    /// `initiative`
    Initiative,
    /// `saving_throws.<ability>.bonus`
    SavingThrowBonus(Ability),
    /// `skills.<skill>.bonus`
    SkillBonus(Skill),
}

/// A single-field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetEdit {
    /// Set a free-text field.
    Text(TextField, String),
    /// Set experience points.
    ExperiencePoints(u32),
    /// Set a raw ability score.
    AbilityScore(Ability, i32),
    /// Toggle inspiration.
    Inspiration(bool),
    /// Toggle proficiency in a saving throw.
    SavingThrowProficiency(Ability, bool),
    /// Toggle the expertise flag on a saving throw.
    SavingThrowExpertise(Ability, bool),
    /// Toggle proficiency in a skill.
    SkillProficiency(Skill, bool),
    /// Toggle the expertise flag on a skill.
    SkillExpertise(Skill, bool),
    /// Set armor class or a hit point value.
    Vital(Vital, i32),
    /// Set the death save success tally.
    DeathSaveSuccesses(u32),
    /// Set the death save failure tally.
    DeathSaveFailures(u32),
    /// Set the coin count of one denomination.
    Currency(Denomination, u32),
    /// Write a derived field. The following derive overwrites it.
    Derived(DerivedField, i32),
}

fn integer(raw: &str) -> i32 {
    parse_integer(raw).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn count(raw: &str) -> u32 {
    parse_integer(raw).clamp(0, i64::from(u32::MAX)) as u32
}

fn ability(key: &str) -> SheetResult<Ability> {
    Ability::from_key(key).ok_or_else(|| SheetError::UnknownAbility(key.to_string()))
}

fn skill(key: &str) -> SheetResult<Skill> {
    Skill::from_key(key).ok_or_else(|| SheetError::UnknownSkill(key.to_string()))
}

const LIST_FIELDS: [&str; 4] = [
    "attacks_and_spellcasting",
    "equipment",
    "features_and_traits",
    "other_proficiencies_and_languages",
];

impl SheetEdit {
    /// Build an edit from a dotted field path and raw text input.
    ///
    /// Numeric fields read the leading integer of `raw` and fall back to 0.
    /// Flags accept true/false, yes/no, on/off and 1/0.
    pub fn parse(path: &str, raw: &str) -> SheetResult<Self> {
        let unknown = || SheetError::UnknownField(path.to_string());
        let parts: Vec<&str> = path.trim().split('.').collect();

        let edit = match parts.as_slice() {
            [key] if LIST_FIELDS.contains(key) => {
                return Err(SheetError::ListField(key.to_string()));
            }
            [key] => {
                if let Some(field) = TextField::from_key(key) {
                    Self::Text(field, raw.to_string())
                } else if let Some(vital) = Vital::from_key(key) {
                    Self::Vital(vital, integer(raw))
                } else {
                    match *key {
                        "experience_points" => Self::ExperiencePoints(count(raw)),
                        "inspiration" => Self::Inspiration(parse_flag(raw)),
                        "proficiency_bonus" => {
                            Self::Derived(DerivedField::ProficiencyBonus, integer(raw))
                        }
                        "initiative" => Self::Derived(DerivedField::Initiative, integer(raw)),
                        _ => return Err(unknown()),
                    }
                }
            }
            ["attributes", name, field] => {
                let ability = ability(name)?;
                match *field {
                    "score" => Self::AbilityScore(ability, integer(raw)),
                    "modifier" => Self::Derived(DerivedField::Modifier(ability), integer(raw)),
                    _ => return Err(unknown()),
                }
            }
            ["saving_throws", name, field] => {
                let ability = ability(name)?;
                match *field {
                    "is_proficient" => Self::SavingThrowProficiency(ability, parse_flag(raw)),
                    "has_expertise" => Self::SavingThrowExpertise(ability, parse_flag(raw)),
                    "bonus" => {
                        Self::Derived(DerivedField::SavingThrowBonus(ability), integer(raw))
                    }
                    _ => return Err(unknown()),
                }
            }
            ["skills", name, field] => {
                let skill = skill(name)?;
                match *field {
                    "is_proficient" => Self::SkillProficiency(skill, parse_flag(raw)),
                    "has_expertise" => Self::SkillExpertise(skill, parse_flag(raw)),
                    "bonus" => Self::Derived(DerivedField::SkillBonus(skill), integer(raw)),
                    _ => return Err(unknown()),
                }
            }
            ["death_saves", "successes"] => Self::DeathSaveSuccesses(count(raw)),
            ["death_saves", "failures"] => Self::DeathSaveFailures(count(raw)),
            ["currency", name] => {
                let denomination = Denomination::from_key(name)
                    .ok_or_else(|| SheetError::UnknownDenomination(name.to_string()))?;
                Self::Currency(denomination, count(raw))
            }
            _ => return Err(unknown()),
        };
        Ok(edit)
    }

    /// The dotted path of the field this edit writes.
    pub fn path(&self) -> String {
        match self {
            Self::Text(field, _) => field.key().to_string(),
            Self::ExperiencePoints(_) => "experience_points".to_string(),
            Self::AbilityScore(a, _) => format!("attributes.{}.score", a.key()),
            Self::Inspiration(_) => "inspiration".to_string(),
            Self::SavingThrowProficiency(a, _) => format!("saving_throws.{}.is_proficient", a.key()),
            Self::SavingThrowExpertise(a, _) => format!("saving_throws.{}.has_expertise", a.key()),
            Self::SkillProficiency(s, _) => format!("skills.{}.is_proficient", s.key()),
            Self::SkillExpertise(s, _) => format!("skills.{}.has_expertise", s.key()),
            Self::Vital(v, _) => v.key().to_string(),
            Self::DeathSaveSuccesses(_) => "death_saves.successes".to_string(),
            Self::DeathSaveFailures(_) => "death_saves.failures".to_string(),
            Self::Currency(d, _) => format!("currency.{}", d.key()),
            Self::Derived(field, _) => match field {
                DerivedField::Modifier(a) => format!("attributes.{}.modifier", a.key()),
                DerivedField::ProficiencyBonus => "proficiency_bonus".to_string(),
                DerivedField::Initiative => "initiative".to_string(),
                DerivedField::SavingThrowBonus(a) => format!("saving_throws.{}.bonus", a.key()),
                DerivedField::SkillBonus(s) => format!("skills.{}.bonus", s.key()),
            },
        }
    }

    fn write(self, sheet: &mut Sheet) {
        match self {
            Self::Text(field, value) => *field.slot(sheet) = value,
            Self::ExperiencePoints(xp) => sheet.experience_points = xp,
            Self::AbilityScore(ability, score) => sheet.attributes.get_mut(ability).score = score,
            Self::Inspiration(on) => sheet.inspiration = on,
            Self::SavingThrowProficiency(ability, on) => {
                sheet.saving_throws.get_mut(ability).is_proficient = on;
            }
            Self::SavingThrowExpertise(ability, on) => {
                sheet.saving_throws.get_mut(ability).has_expertise = on;
            }
            Self::SkillProficiency(skill, on) => {
                sheet.skills.entry(skill).or_default().is_proficient = on;
            }
            Self::SkillExpertise(skill, on) => {
                sheet.skills.entry(skill).or_default().has_expertise = on;
            }
            Self::Vital(vital, value) => *vital.slot(sheet) = value,
            Self::DeathSaveSuccesses(n) => sheet.death_saves.successes = n,
            Self::DeathSaveFailures(n) => sheet.death_saves.failures = n,
            Self::Currency(denomination, n) => *sheet.currency.get_mut(denomination) = n,
            Self::Derived(field, value) => match field {
                DerivedField::Modifier(a) => sheet.attributes.get_mut(a).modifier = value,
                DerivedField::ProficiencyBonus => sheet.proficiency_bonus = value,
                DerivedField::Initiative => sheet.initiative = value,
                DerivedField::SavingThrowBonus(a) => sheet.saving_throws.get_mut(a).bonus = value,
                DerivedField::SkillBonus(s) => sheet.skills.entry(s).or_default().bonus = value,
            },
        }
    }
}

/// Wholesale replacement of a list-valued field.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEdit {
    /// Replace the attacks and spells.
    Attacks(Vec<Attack>),
    /// Replace the equipment list.
    Equipment(Vec<EquipmentItem>),
    /// Replace features and traits.
    FeaturesAndTraits(Vec<String>),
    /// Replace other proficiencies and languages.
    OtherProficienciesAndLanguages(Vec<String>),
}

impl ListEdit {
    /// The key of the list this edit replaces.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Attacks(_) => "attacks_and_spellcasting",
            Self::Equipment(_) => "equipment",
            Self::FeaturesAndTraits(_) => "features_and_traits",
            Self::OtherProficienciesAndLanguages(_) => "other_proficiencies_and_languages",
        }
    }
}

/// Apply a single-field edit to a copy of `sheet` and re-derive it.
pub fn apply_field_edit(sheet: &Sheet, edit: SheetEdit) -> Sheet {
    tracing::debug!(path = %edit.path(), "applying field edit");
    let mut next = sheet.clone();
    edit.write(&mut next);
    derive(next)
}

/// Replace a list on a copy of `sheet` and re-derive it.
pub fn apply_list_edit(sheet: &Sheet, edit: ListEdit) -> Sheet {
    tracing::debug!(list = edit.key(), "applying list edit");
    let mut next = sheet.clone();
    match edit {
        ListEdit::Attacks(list) => next.attacks_and_spellcasting = list,
        ListEdit::Equipment(list) => next.equipment = list,
        ListEdit::FeaturesAndTraits(list) => next.features_and_traits = list,
        ListEdit::OtherProficienciesAndLanguages(list) => {
            next.other_proficiencies_and_languages = list;
        }
    }
    derive(next)
}

/// A copy of `list` with the entry at `index` removed.
pub fn without_index<T: Clone>(list: &[T], index: usize, name: &'static str) -> SheetResult<Vec<T>> {
    if index >= list.len() {
        return Err(SheetError::IndexOutOfRange {
            list: name,
            index,
            len: list.len(),
        });
    }
    let mut out = list.to_vec();
    out.remove(index);
    Ok(out)
}
