//! Error types for the sheet engine.

use grim_core::StoreError;

/// Errors raised at the edges of the sheet engine.
///
/// Derivation itself never fails; these cover callers addressing fields
/// that do not exist and failures of the store behind a session.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// A character name is empty or only whitespace.
    #[error("character name cannot be blank")]
    BlankName,

    /// An edit path does not name an editable field.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// An edit path names an ability that does not exist.
    #[error("unknown ability: {0}")]
    UnknownAbility(String),

    /// An edit path names a skill that does not exist.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// An edit path names a coin denomination that does not exist.
    #[error("unknown denomination: {0}")]
    UnknownDenomination(String),

    /// The path names a list, which must be replaced as a whole.
    #[error("'{0}' is a list; replace it with a list edit")]
    ListField(String),

    /// A list index is past the end of the list.
    #[error("index {index} out of range for {list} (length {len})")]
    IndexOutOfRange {
        /// Name of the list.
        list: &'static str,
        /// The requested index.
        index: usize,
        /// The list's length.
        len: usize,
    },

    /// The store rejected a load or save.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The sheet could not be encoded for storage.
    #[error("cannot encode sheet: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Convenience result type for sheet operations.
pub type SheetResult<T> = Result<T, SheetError>;
