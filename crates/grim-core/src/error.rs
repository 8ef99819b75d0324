use crate::record::CharacterId;

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when reading or writing character records.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record exists for the requested ID.
    #[error("character not found: {0}")]
    NotFound(CharacterId),

    /// No record matches a lookup key (ID, ID prefix, or name).
    #[error("no character matches \"{0}\"")]
    NoMatch(String),

    /// A lookup key matches more than one record.
    #[error("\"{key}\" matches {count} characters; use the id or a longer id prefix")]
    Ambiguous {
        /// The lookup key.
        key: String,
        /// How many records it matched.
        count: usize,
    },

    /// A record with the same ID already exists.
    #[error("character already exists: {0}")]
    DuplicateId(CharacterId),

    /// The backing storage could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record is not valid JSON.
    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),
}
