//! Core types for Grimoire: character records and the storage contract.
//!
//! This crate knows nothing about the rules of any game system. A
//! [`CharacterRecord`] carries its sheet as an opaque JSON document, and a
//! [`SheetStore`] loads and saves those records.

/// Error types used throughout the crate.
pub mod error;
/// Character identifiers and stored records.
pub mod record;
/// The storage trait and its in-memory and on-disk implementations.
pub mod store;

/// Re-export error types.
pub use error::{StoreError, StoreResult};
/// Re-export record types.
pub use record::{CharacterId, CharacterRecord, GameSystem};
/// Re-export store types.
pub use store::{DirStore, MemoryStore, SheetStore};
