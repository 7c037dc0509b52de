//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Request DTOs live in `moodnote_core`.

pub mod mood_note;
