//! Skills and their fixed governing abilities.

use serde::{Deserialize, Serialize};

use crate::ability::Ability;

/// A skill a character can be proficient in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    /// Dexterity: tumbling, balance, flips.
    Acrobatics,
    /// Wisdom: calming and reading animals.
    AnimalHandling,
    /// Intelligence: magical lore.
    Arcana,
    /// Strength: climbing, jumping, swimming.
    Athletics,
    /// Charisma: convincing lies.
    Deception,
    /// Intelligence: historical lore.
    History,
    /// Wisdom: reading intentions.
    Insight,
    /// Charisma: threats and coercion.
    Intimidation,
    /// Intelligence: searching for clues.
    Investigation,
    /// Wisdom: first aid and diagnosis.
    Medicine,
    /// Intelligence: terrain, plants, animals.
    Nature,
    /// Wisdom: noticing things.
    Perception,
    /// Charisma: entertaining an audience.
    Performance,
    /// Charisma: honest influence.
    Persuasion,
    /// Intelligence: deities and rites.
    Religion,
    /// Dexterity: pickpocketing and legerdemain.
    SleightOfHand,
    /// Dexterity: moving unseen.
    Stealth,
    /// Wisdom: tracking and foraging.
    Survival,
}

/// Every skill paired with the ability it is rolled with.
pub const SKILL_ABILITIES: [(Skill, Ability); 18] = [
    (Skill::Acrobatics, Ability::Dexterity),
    (Skill::AnimalHandling, Ability::Wisdom),
    (Skill::Arcana, Ability::Intelligence),
    (Skill::Athletics, Ability::Strength),
    (Skill::Deception, Ability::Charisma),
    (Skill::History, Ability::Intelligence),
    (Skill::Insight, Ability::Wisdom),
    (Skill::Intimidation, Ability::Charisma),
    (Skill::Investigation, Ability::Intelligence),
    (Skill::Medicine, Ability::Wisdom),
    (Skill::Nature, Ability::Intelligence),
    (Skill::Perception, Ability::Wisdom),
    (Skill::Performance, Ability::Charisma),
    (Skill::Persuasion, Ability::Charisma),
    (Skill::Religion, Ability::Intelligence),
    (Skill::SleightOfHand, Ability::Dexterity),
    (Skill::Stealth, Ability::Dexterity),
    (Skill::Survival, Ability::Wisdom),
];

impl Skill {
    /// All skills in alphabetical order.
    pub const ALL: [Skill; 18] = [
        Self::Acrobatics,
        Self::AnimalHandling,
        Self::Arcana,
        Self::Athletics,
        Self::Deception,
        Self::History,
        Self::Insight,
        Self::Intimidation,
        Self::Investigation,
        Self::Medicine,
        Self::Nature,
        Self::Perception,
        Self::Performance,
        Self::Persuasion,
        Self::Religion,
        Self::SleightOfHand,
        Self::Stealth,
        Self::Survival,
    ];

    /// The ability this skill is rolled with.
    pub fn ability(self) -> Ability {
        match self {
            Self::Athletics => Ability::Strength,
            Self::Acrobatics | Self::SleightOfHand | Self::Stealth => Ability::Dexterity,
            Self::Arcana | Self::History | Self::Investigation | Self::Nature | Self::Religion => {
                Ability::Intelligence
            }
            Self::AnimalHandling
            | Self::Insight
            | Self::Medicine
            | Self::Perception
            | Self::Survival => Ability::Wisdom,
            Self::Deception | Self::Intimidation | Self::Performance | Self::Persuasion => {
                Ability::Charisma
            }
        }
    }

    /// The key used for this skill in stored sheets and edit paths.
    pub fn key(self) -> &'static str {
        match self {
            Self::Acrobatics => "acrobatics",
            Self::AnimalHandling => "animal_handling",
            Self::Arcana => "arcana",
            Self::Athletics => "athletics",
            Self::Deception => "deception",
            Self::History => "history",
            Self::Insight => "insight",
            Self::Intimidation => "intimidation",
            Self::Investigation => "investigation",
            Self::Medicine => "medicine",
            Self::Nature => "nature",
            Self::Perception => "perception",
            Self::Performance => "performance",
            Self::Persuasion => "persuasion",
            Self::Religion => "religion",
            Self::SleightOfHand => "sleight_of_hand",
            Self::Stealth => "stealth",
            Self::Survival => "survival",
        }
    }

    /// Human-readable name (e.g. "Sleight of Hand").
    pub fn display_name(self) -> &'static str {
        match self {
            Self::AnimalHandling => "Animal Handling",
            Self::SleightOfHand => "Sleight of Hand",
            Self::Acrobatics => "Acrobatics",
            Self::Arcana => "Arcana",
            Self::Athletics => "Athletics",
            Self::Deception => "Deception",
            Self::History => "History",
            Self::Insight => "Insight",
            Self::Intimidation => "Intimidation",
            Self::Investigation => "Investigation",
            Self::Medicine => "Medicine",
            Self::Nature => "Nature",
            Self::Perception => "Perception",
            Self::Performance => "Performance",
            Self::Persuasion => "Persuasion",
            Self::Religion => "Religion",
            Self::Stealth => "Stealth",
            Self::Survival => "Survival",
        }
    }

    /// Parse a skill key. Case, spaces and hyphens are normalized, so
    /// "Sleight of Hand", "sleight-of-hand" and "sleight_of_hand" all match.
    pub fn from_key(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        Self::ALL.into_iter().find(|skill| skill.key() == normalized)
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
