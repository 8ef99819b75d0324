use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Unique identifier for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The first eight hex digits, enough to pick a character out of a list.
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CharacterId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// The rules system a character sheet is written for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameSystem {
    /// Fifth edition of the world's most popular fantasy RPG.
    #[default]
    Dnd5e,
}

impl fmt::Display for GameSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dnd5e => write!(f, "D&D 5e"),
        }
    }
}

/// A stored character: identity, metadata, and its raw sheet document.
///
/// `sheet_data` is kept as an opaque JSON value. It may be partial (written
/// before some field existed) and is only given shape when a sheet engine
/// normalizes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Stable identifier.
    pub id: CharacterId,
    /// Display name of the character.
    pub name: String,
    /// Rules system of the sheet.
    #[serde(default)]
    pub system: GameSystem,
    /// Portrait location, if one was uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Raw sheet document.
    #[serde(default)]
    pub sheet_data: Value,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the sheet was last saved.
    pub updated_at: DateTime<Utc>,
}

impl CharacterRecord {
    /// A new record with an empty sheet document.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CharacterId::new(),
            name: name.into(),
            system: GameSystem::default(),
            avatar_url: None,
            sheet_data: Value::Object(serde_json::Map::new()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder: set the initial sheet document.
    pub fn with_sheet(mut self, sheet_data: Value) -> Self {
        self.sheet_data = sheet_data;
        self
    }
}
