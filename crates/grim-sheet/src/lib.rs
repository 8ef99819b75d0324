//! Character sheet engine for Grimoire.
//!
//! Turns the raw values a player enters on a fifth-edition character sheet
//! into a fully consistent sheet: ability modifiers, proficiency bonus,
//! saving throws, skill bonuses and initiative. The engine is a set of pure
//! functions over [`Sheet`] values:
//!
//! - [`normalize`] lays a possibly partial stored document over a default,
//! - [`derive`] recomputes every derived field,
//! - [`apply_field_edit`] and [`apply_list_edit`] apply one edit and derive.
//!
//! [`SheetSession`] ties the engine to a [`grim_core::SheetStore`].

pub mod ability;
pub mod derive;
pub mod edit;
pub mod error;
pub mod merge;
pub mod session;
pub mod sheet;
pub mod skill;

pub use ability::{Ability, ability_modifier, format_modifier};
pub use derive::{derive, proficiency_bonus, total_level};
pub use edit::{
    DerivedField, ListEdit, SheetEdit, TextField, Vital, apply_field_edit, apply_list_edit,
    without_index,
};
pub use error::{SheetError, SheetResult};
pub use merge::{Merge, normalize};
pub use session::{SheetSession, create_character, load_sheet};
pub use sheet::{
    AbilityScore, Attack, Attributes, Currency, DeathSaves, Denomination, EquipmentItem,
    Proficiency, SavingThrows, Sheet, SkillMap,
};
pub use skill::{SKILL_ABILITIES, Skill};
