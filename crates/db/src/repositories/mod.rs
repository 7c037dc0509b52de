//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod mood_note_repo;

pub use mood_note_repo::MoodNoteRepo;
