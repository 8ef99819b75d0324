//! The character sheet aggregate.
//!
//! A [`Sheet`] holds both the raw values a player enters and the values
//! derived from them. Derived fields are kept on the struct so a stored
//! sheet is self-contained, but they are always recomputed by
//! [`derive`](crate::derive::derive) and never trusted on input.

pub mod inventory;

pub use inventory::{Attack, Currency, Denomination, EquipmentItem};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ability::Ability;
use crate::skill::Skill;

/// A raw ability score and its derived modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScore {
    /// Raw score, typically 1 to 30.
    pub score: i32,
    /// Derived: `floor((score - 10) / 2)`.
    pub modifier: i32,
}

impl AbilityScore {
    /// A score with a modifier of zero until the next derive.
    pub fn new(score: i32) -> Self {
        Self { score, modifier: 0 }
    }
}

impl Default for AbilityScore {
    fn default() -> Self {
        Self::new(10)
    }
}

/// The six ability scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    /// Strength score.
    pub strength: AbilityScore,
    /// Dexterity score.
    pub dexterity: AbilityScore,
    /// Constitution score.
    pub constitution: AbilityScore,
    /// Intelligence score.
    pub intelligence: AbilityScore,
    /// Wisdom score.
    pub wisdom: AbilityScore,
    /// Charisma score.
    pub charisma: AbilityScore,
}

impl Attributes {
    /// The score entry for an ability.
    pub fn get(&self, ability: Ability) -> &AbilityScore {
        match ability {
            Ability::Strength => &self.strength,
            Ability::Dexterity => &self.dexterity,
            Ability::Constitution => &self.constitution,
            Ability::Intelligence => &self.intelligence,
            Ability::Wisdom => &self.wisdom,
            Ability::Charisma => &self.charisma,
        }
    }

    /// Mutable score entry for an ability.
    pub fn get_mut(&mut self, ability: Ability) -> &mut AbilityScore {
        match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        }
    }

    /// The current modifier for an ability.
    pub fn modifier(&self, ability: Ability) -> i32 {
        self.get(ability).modifier
    }
}

/// Proficiency state of a saving throw or skill, plus its derived bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proficiency {
    /// Whether the proficiency bonus applies.
    pub is_proficient: bool,
    /// Expertise flag. Stored, but not part of the bonus calculation.
    pub has_expertise: bool,
    /// Derived: ability modifier plus proficiency bonus when proficient.
    pub bonus: i32,
}

/// One saving throw per ability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingThrows {
    /// Strength save.
    pub strength: Proficiency,
    /// Dexterity save.
    pub dexterity: Proficiency,
    /// Constitution save.
    pub constitution: Proficiency,
    /// Intelligence save.
    pub intelligence: Proficiency,
    /// Wisdom save.
    pub wisdom: Proficiency,
    /// Charisma save.
    pub charisma: Proficiency,
}

impl SavingThrows {
    /// The saving throw for an ability.
    pub fn get(&self, ability: Ability) -> &Proficiency {
        match ability {
            Ability::Strength => &self.strength,
            Ability::Dexterity => &self.dexterity,
            Ability::Constitution => &self.constitution,
            Ability::Intelligence => &self.intelligence,
            Ability::Wisdom => &self.wisdom,
            Ability::Charisma => &self.charisma,
        }
    }

    /// Mutable saving throw for an ability.
    pub fn get_mut(&mut self, ability: Ability) -> &mut Proficiency {
        match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        }
    }
}

/// Skill proficiencies keyed by skill. Populated for every skill by derive.
pub type SkillMap = BTreeMap<Skill, Proficiency>;

/// Death saving throw tallies (0 to 3 each at the table, not enforced here).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeathSaves {
    /// Successful death saves.
    pub successes: u32,
    /// Failed death saves.
    pub failures: u32,
}

/// A complete character sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sheet {
    /// Character name.
    pub character_name: String,
    /// Free text such as "Fighter 3/Wizard 2"; every number in it counts
    /// toward total level.
    pub class_and_level: String,
    /// Race or species.
    pub race: String,
    /// Background.
    pub background: String,
    /// Alignment.
    pub alignment: String,
    /// Name of the player running the character.
    pub player_name: String,
    /// Experience points.
    pub experience_points: u32,

    /// Ability scores.
    pub attributes: Attributes,
    /// Derived from total level.
    pub proficiency_bonus: i32,
    /// Inspiration flag.
    pub inspiration: bool,
    /// Saving throws, one per ability.
    pub saving_throws: SavingThrows,
    /// Skill proficiencies.
    pub skills: SkillMap,

    /// Armor class.
    pub armor_class: i32,
    /// Derived: equal to the dexterity modifier.
    pub initiative: i32,
    /// Movement speed, free text (e.g. "9m").
    pub speed: String,
    /// Hit point maximum.
    pub hit_point_maximum: i32,
    /// Current hit points. Not clamped to the maximum.
    pub current_hit_points: i32,
    /// Temporary hit points.
    pub temporary_hit_points: i32,
    /// Hit dice, free text (e.g. "1d10").
    pub hit_dice: String,
    /// Death save tallies.
    pub death_saves: DeathSaves,
    /// Attacks and spells, in display order.
    pub attacks_and_spellcasting: Vec<Attack>,

    /// Carried items, in display order.
    pub equipment: Vec<EquipmentItem>,
    /// Coin purse.
    pub currency: Currency,

    /// Personality traits.
    pub personality_traits: String,
    /// Ideals.
    pub ideals: String,
    /// Bonds.
    pub bonds: String,
    /// Flaws.
    pub flaws: String,
    /// Features and traits, one entry each.
    pub features_and_traits: Vec<String>,
    /// Other proficiencies and languages, one entry each.
    pub other_proficiencies_and_languages: Vec<String>,
}

impl Default for Sheet {
    /// The seed sheet for a newly created character: a level 1 fighter
    /// with every score at 10.
    fn default() -> Self {
        Self {
            character_name: "New Adventurer".to_string(),
            class_and_level: "Fighter 1".to_string(),
            race: "Human".to_string(),
            background: "Acolyte".to_string(),
            alignment: "Lawful Good".to_string(),
            player_name: String::new(),
            experience_points: 0,
            attributes: Attributes::default(),
            proficiency_bonus: 2,
            inspiration: false,
            saving_throws: SavingThrows::default(),
            skills: SkillMap::new(),
            armor_class: 10,
            initiative: 0,
            speed: "9m".to_string(),
            hit_point_maximum: 10,
            current_hit_points: 10,
            temporary_hit_points: 0,
            hit_dice: "1d10".to_string(),
            death_saves: DeathSaves::default(),
            attacks_and_spellcasting: vec![Attack {
                name: "Unarmed Strike".to_string(),
                attack_bonus: "+0".to_string(),
                damage: "1 bludgeoning".to_string(),
            }],
            equipment: Vec::new(),
            currency: Currency::default(),
            personality_traits: String::new(),
            ideals: String::new(),
            bonds: String::new(),
            flaws: String::new(),
            features_and_traits: Vec::new(),
            other_proficiencies_and_languages: Vec::new(),
        }
    }
}

impl Sheet {
    /// A fresh seed sheet carrying the given character name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            character_name: name.into(),
            ..Self::default()
        }
    }

    /// The skill entry for a skill, or a blank entry if none is stored yet.
    pub fn skill(&self, skill: Skill) -> Proficiency {
        self.skills.get(&skill).copied().unwrap_or_default()
    }

    /// Total weight of carried equipment (quantity times unit weight).
    pub fn total_weight(&self) -> f64 {
        self.equipment
            .iter()
            .map(|item| f64::from(item.quantity) * item.weight)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_is_level_one_fighter() {
        let sheet = Sheet::default();
        assert_eq!(sheet.class_and_level, "Fighter 1");
        assert_eq!(sheet.proficiency_bonus, 2);
        for ability in Ability::ALL {
            assert_eq!(sheet.attributes.get(ability).score, 10);
        }
        assert!(sheet.skills.is_empty());
        assert!(sheet.equipment.is_empty());
        assert_eq!(sheet.attacks_and_spellcasting.len(), 1);
    }

    #[test]
    fn default_factory_returns_independent_values() {
        let mut a = Sheet::default();
        a.attributes.strength.score = 18;
        a.equipment.push(EquipmentItem::new("Rope"));
        let b = Sheet::default();
        assert_eq!(b.attributes.strength.score, 10);
        assert!(b.equipment.is_empty());
    }

    #[test]
    fn named_keeps_seed_values() {
        let sheet = Sheet::named("Kael");
        assert_eq!(sheet.character_name, "Kael");
        assert_eq!(sheet.speed, "9m");
    }

    #[test]
    fn missing_skill_reads_as_blank() {
        let sheet = Sheet::default();
        assert_eq!(sheet.skill(Skill::Stealth), Proficiency::default());
    }

    #[test]
    fn total_weight_multiplies_quantity() {
        let mut sheet = Sheet::default();
        sheet.equipment = vec![
            EquipmentItem {
                item: "Torch".to_string(),
                quantity: 5,
                weight: 0.5,
            },
            EquipmentItem {
                item: "Longsword".to_string(),
                quantity: 1,
                weight: 1.5,
            },
        ];
        assert!((sheet.total_weight() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_skill_keys_as_snake_case() {
        let mut sheet = Sheet::default();
        sheet.skills.insert(Skill::SleightOfHand, Proficiency::default());
        let value = serde_json::to_value(&sheet).unwrap();
        assert!(value["skills"].get("sleight_of_hand").is_some());
    }
}
