//! Repository for the `mood_notes` table.
//!
//! Every statement that reads or mutates an existing row carries the
//! `user_id` predicate itself, so ownership is checked atomically with the
//! operation.

use moodnote_core::mood_note::NoteFields;
use moodnote_core::types::{DbId, Version};
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::mood_note::MoodNote;

/// Column list for mood_notes queries.
const COLUMNS: &str = "id, created_at, title, content, emoji, color, user_id, version";

/// Provides ownership-scoped CRUD operations for mood notes.
pub struct MoodNoteRepo;

impl MoodNoteRepo {
    /// Insert a new note for `user_id`, returning the row with its assigned
    /// `id`, `created_at` and `version` (always 1).
    ///
    /// The caller validates `fields` first.
    pub async fn insert(
        pool: &PgPool,
        user_id: DbId,
        fields: &NoteFields,
    ) -> Result<MoodNote, StoreError> {
        let query = format!(
            "INSERT INTO mood_notes (title, content, emoji, color, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let note = sqlx::query_as::<_, MoodNote>(&query)
            .bind(&fields.title)
            .bind(&fields.content)
            .bind(&fields.emoji)
            .bind(&fields.color)
            .bind(user_id)
            .fetch_one(pool)
            .await?;
        Ok(note)
    }

    /// List every note owned by `user_id`, newest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<MoodNote>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM mood_notes
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        let notes = sqlx::query_as::<_, MoodNote>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(notes)
    }

    /// Fetch a note by id, only if it is owned by `user_id`.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<MoodNote, StoreError> {
        if id < 1 {
            return Err(StoreError::RecordNotFound);
        }

        let query = format!("SELECT {COLUMNS} FROM mood_notes WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, MoodNote>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?
            .ok_or(StoreError::RecordNotFound)
    }

    /// Write the note's four mutable fields back and bump its version, as long
    /// as the stored version still equals `note.version`.
    ///
    /// On success `note.version` is advanced in place. Zero matching rows
    /// means another writer got there first: [`StoreError::EditConflict`].
    pub async fn update(pool: &PgPool, note: &mut MoodNote) -> Result<(), StoreError> {
        let new_version: Option<Version> = sqlx::query_scalar(
            "UPDATE mood_notes
             SET title = $1, content = $2, emoji = $3, color = $4, version = version + 1
             WHERE id = $5 AND version = $6 AND user_id = $7
             RETURNING version",
        )
        .bind(&note.title)
        .bind(&note.content)
        .bind(&note.emoji)
        .bind(&note.color)
        .bind(note.id)
        .bind(note.version)
        .bind(note.user_id)
        .fetch_optional(pool)
        .await?;

        match new_version {
            Some(version) => {
                note.version = version;
                Ok(())
            }
            None => {
                tracing::debug!(
                    note_id = note.id,
                    expected_version = note.version,
                    "Mood note update lost the version race"
                );
                Err(StoreError::EditConflict)
            }
        }
    }

    /// Delete a note owned by `user_id`. Fails with
    /// [`StoreError::RecordNotFound`] unless exactly one row was removed.
    pub async fn delete_for_user(pool: &PgPool, id: DbId, user_id: DbId) -> Result<(), StoreError> {
        if id < 1 {
            return Err(StoreError::RecordNotFound);
        }

        let result = sqlx::query("DELETE FROM mood_notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::RecordNotFound);
        }
        Ok(())
    }
}
