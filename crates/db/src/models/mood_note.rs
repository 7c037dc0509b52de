//! Mood note model.

use moodnote_core::mood_note::NoteFields;
use moodnote_core::types::{DbId, Timestamp, Version};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `mood_notes` table.
///
/// `user_id` is never serialized; ownership is implied by the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct MoodNote {
    pub id: DbId,
    pub created_at: Timestamp,
    pub title: String,
    pub content: String,
    pub emoji: String,
    pub color: String,
    #[serde(skip_serializing)]
    pub user_id: DbId,
    pub version: Version,
}

impl MoodNote {
    /// Copy out the four user-editable fields.
    pub fn fields(&self) -> NoteFields {
        NoteFields {
            title: self.title.clone(),
            content: self.content.clone(),
            emoji: self.emoji.clone(),
            color: self.color.clone(),
        }
    }

    /// Replace the four user-editable fields, leaving identity and version alone.
    pub fn set_fields(&mut self, fields: NoteFields) {
        self.title = fields.title;
        self.content = fields.content;
        self.emoji = fields.emoji;
        self.color = fields.color;
    }
}
