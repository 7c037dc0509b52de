pub mod mood_notes;
