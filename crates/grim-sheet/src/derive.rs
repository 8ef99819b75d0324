//! Recomputing derived sheet values.
//!
//! [`derive`] is the single place derived fields are written. Whatever values
//! they held before are discarded.

use crate::ability::{Ability, ability_modifier};
use crate::sheet::Sheet;
use crate::skill::SKILL_ABILITIES;

/// Total character level: the sum of every number in the class text.
///
/// "Fighter 3/Wizard 2" is level 5. Text with no numbers counts as level 1,
/// never 0.
pub fn total_level(class_and_level: &str) -> u32 {
    let mut total: u32 = 0;
    let mut run: Option<u32> = None;
    for c in class_and_level.chars() {
        match c.to_digit(10) {
            Some(d) => {
                let current = run.unwrap_or(0);
                run = Some(current.saturating_mul(10).saturating_add(d));
            }
            None => {
                if let Some(n) = run.take() {
                    total = total.saturating_add(n);
                }
            }
        }
    }
    if let Some(n) = run {
        total = total.saturating_add(n);
    }
    if total == 0 { 1 } else { total }
}

/// Proficiency bonus for a total level: +2 at levels 1-4, rising by one
/// every four levels. Levels below 1 get +2.
pub fn proficiency_bonus(level: u32) -> i32 {
    if level < 1 {
        return 2;
    }
    ((level - 1) / 4) as i32 + 2
}

/// Recompute every derived field of `sheet`.
///
/// Order matters: level feeds the proficiency bonus, scores feed modifiers,
/// and both feed saving throws and skills. Expertise is recorded on skills
/// but does not change their bonus.
pub fn derive(mut sheet: Sheet) -> Sheet {
    let level = total_level(&sheet.class_and_level);
    sheet.proficiency_bonus = proficiency_bonus(level);
    let proficiency = sheet.proficiency_bonus;

    for ability in Ability::ALL {
        let entry = sheet.attributes.get_mut(ability);
        entry.modifier = ability_modifier(entry.score);
    }

    sheet.initiative = sheet.attributes.modifier(Ability::Dexterity);

    for ability in Ability::ALL {
        let modifier = sheet.attributes.modifier(ability);
        let save = sheet.saving_throws.get_mut(ability);
        save.bonus = modifier + if save.is_proficient { proficiency } else { 0 };
    }

    for (skill, ability) in SKILL_ABILITIES {
        let modifier = sheet.attributes.modifier(ability);
        let entry = sheet.skills.entry(skill).or_default();
        entry.bonus = modifier + if entry.is_proficient { proficiency } else { 0 };
    }

    tracing::trace!(
        level,
        proficiency,
        initiative = sheet.initiative,
        "derived sheet"
    );
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Proficiency;
    use crate::skill::Skill;

    #[test]
    fn level_sums_every_number() {
        assert_eq!(total_level("Fighter 3/Wizard 2"), 5);
        assert_eq!(total_level("Rogue 10"), 10);
        assert_eq!(total_level("Cleric 1 / Druid 1 / Monk 1"), 3);
        assert_eq!(total_level("12"), 12);
    }

    #[test]
    fn level_falls_back_to_one() {
        assert_eq!(total_level("Barbarian"), 1);
        assert_eq!(total_level(""), 1);
        assert_eq!(total_level("Wizard 0"), 1);
    }

    #[test]
    fn proficiency_table() {
        let table = [
            (1, 2),
            (4, 2),
            (5, 3),
            (8, 3),
            (9, 4),
            (12, 4),
            (13, 5),
            (16, 5),
            (17, 6),
            (20, 6),
        ];
        for (level, bonus) in table {
            assert_eq!(proficiency_bonus(level), bonus, "level {level}");
        }
        assert_eq!(proficiency_bonus(0), 2);
    }

    #[test]
    fn multiclass_proficiency() {
        let mut sheet = Sheet::default();
        sheet.class_and_level = "Fighter 3/Wizard 2".to_string();
        assert_eq!(derive(sheet).proficiency_bonus, 3);

        let mut sheet = Sheet::default();
        sheet.class_and_level = "Barbarian".to_string();
        assert_eq!(derive(sheet).proficiency_bonus, 2);
    }

    #[test]
    fn modifiers_and_initiative() {
        let mut sheet = Sheet::default();
        sheet.attributes.dexterity.score = 16;
        sheet.attributes.strength.score = 7;
        let sheet = derive(sheet);
        assert_eq!(sheet.attributes.dexterity.modifier, 3);
        assert_eq!(sheet.attributes.strength.modifier, -2);
        assert_eq!(sheet.initiative, 3);
    }

    #[test]
    fn proficient_saving_throw_adds_bonus() {
        let mut sheet = Sheet::default();
        sheet.attributes.dexterity.score = 16;
        sheet.saving_throws.dexterity.is_proficient = true;
        let sheet = derive(sheet);
        assert_eq!(sheet.saving_throws.dexterity.bonus, 5);
        assert_eq!(sheet.saving_throws.strength.bonus, 0);
    }

    #[test]
    fn unproficient_skill_uses_modifier_only() {
        let mut sheet = Sheet::default();
        sheet.attributes.wisdom.score = 8;
        let sheet = derive(sheet);
        assert_eq!(sheet.skill(Skill::Perception).bonus, -1);
        assert_eq!(sheet.skill(Skill::Insight).bonus, -1);
    }

    #[test]
    fn derive_populates_every_skill() {
        let sheet = derive(Sheet::default());
        assert_eq!(sheet.skills.len(), Skill::ALL.len());
    }

    #[test]
    fn expertise_is_kept_but_not_doubled() {
        let mut sheet = Sheet::default();
        sheet.attributes.dexterity.score = 14;
        sheet.skills.insert(
            Skill::Stealth,
            Proficiency {
                is_proficient: true,
                has_expertise: true,
                bonus: 99,
            },
        );
        let sheet = derive(sheet);
        let stealth = sheet.skill(Skill::Stealth);
        assert!(stealth.has_expertise);
        assert_eq!(stealth.bonus, 4);
    }

    #[test]
    fn stale_derived_values_are_overwritten() {
        let mut sheet = Sheet::default();
        sheet.proficiency_bonus = 9;
        sheet.initiative = 7;
        sheet.attributes.charisma.modifier = 4;
        sheet.saving_throws.wisdom.bonus = -3;
        let sheet = derive(sheet);
        assert_eq!(sheet.proficiency_bonus, 2);
        assert_eq!(sheet.initiative, 0);
        assert_eq!(sheet.attributes.charisma.modifier, 0);
        assert_eq!(sheet.saving_throws.wisdom.bonus, 0);
    }

    #[test]
    fn derive_is_idempotent() {
        let mut sheet = Sheet::default();
        sheet.class_and_level = "Paladin 9".to_string();
        sheet.attributes.constitution.score = 15;
        sheet.saving_throws.constitution.is_proficient = true;
        let once = derive(sheet);
        let twice = derive(once.clone());
        assert_eq!(once, twice);
    }
}
