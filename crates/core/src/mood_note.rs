//! Mood note field rules and partial-update merging.
//!
//! The four user-editable fields of a mood note are grouped in
//! [`NoteFields`]. Every create and every merged update must pass
//! [`validate_note_fields`] before it reaches the database.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{CoreError, FieldErrors};
use crate::patch::Field;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a note title, in bytes.
pub const MAX_TITLE_BYTES: usize = 100;

/// Length of a `#RGB` color string.
pub const SHORT_COLOR_LEN: usize = 4;

/// Length of a `#RRGGBB` color string.
pub const LONG_COLOR_LEN: usize = 7;

const MSG_REQUIRED: &str = "must be provided";
const MSG_TITLE_TOO_LONG: &str = "must not be more than 100 bytes long";
const MSG_COLOR_PREFIX: &str = "must start with a #";
const MSG_COLOR_LENGTH: &str = "must be a valid hex code (e.g., #RRGGBB)";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The mutable content of a mood note.
///
/// Doubles as the create request body: all four keys are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NoteFields {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[validate(custom(function = "validate_required"))]
    pub content: String,
    #[validate(custom(function = "validate_required"))]
    pub emoji: String,
    #[validate(custom(function = "validate_color"))]
    pub color: String,
}

/// Partial update body: any subset of the four fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteFieldsPatch {
    #[serde(default)]
    pub title: Field<String>,
    #[serde(default)]
    pub content: Field<String>,
    #[serde(default)]
    pub emoji: Field<String>,
    #[serde(default)]
    pub color: Field<String>,
}

impl NoteFieldsPatch {
    /// True when the request carried none of the four fields.
    pub fn is_empty(&self) -> bool {
        !(self.title.is_present()
            || self.content.is_present()
            || self.emoji.is_present()
            || self.color.is_present())
    }

    /// Overlay the supplied fields onto `current`. Absent fields keep their
    /// stored value. The result still has to be validated.
    pub fn apply_to(self, current: NoteFields) -> NoteFields {
        NoteFields {
            title: self.title.or_keep(current.title),
            content: self.content.or_keep(current.content),
            emoji: self.emoji.or_keep(current.emoji),
            color: self.color.or_keep(current.color),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate all four fields, collecting one message per violated field.
pub fn validate_note_fields(fields: &NoteFields) -> Result<(), CoreError> {
    fields
        .validate()
        .map_err(|errors| CoreError::InvalidFields(collect_field_errors(&errors)))
}

fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, violations)| {
            violations.first().map(|violation| {
                let message = violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| violation.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}

fn rule_violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule_violation("required", MSG_REQUIRED));
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    validate_required(title)?;
    if title.len() > MAX_TITLE_BYTES {
        return Err(rule_violation("max_bytes", MSG_TITLE_TOO_LONG));
    }
    Ok(())
}

fn validate_color(color: &str) -> Result<(), ValidationError> {
    validate_required(color)?;
    if !color.starts_with('#') {
        return Err(rule_violation("color_prefix", MSG_COLOR_PREFIX));
    }
    let len = color.chars().count();
    if len != SHORT_COLOR_LEN && len != LONG_COLOR_LEN {
        return Err(rule_violation("color_length", MSG_COLOR_LENGTH));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
