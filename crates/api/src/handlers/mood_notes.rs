//! Handlers for the mood notes resource.
//!
//! Every handler is scoped to the authenticated caller: a note owned by
//! someone else is reported exactly like a note that does not exist.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use moodnote_core::mood_note::{validate_note_fields, NoteFields, NoteFieldsPatch};
use moodnote_core::types::DbId;
use moodnote_db::repositories::MoodNoteRepo;
use moodnote_db::StoreError;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Unparsable ids get the same 404 as ids that match nothing.
fn note_id(path: Result<Path<DbId>, PathRejection>) -> AppResult<DbId> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::Store(StoreError::RecordNotFound))
}

/// POST /mood-notes
///
/// Create a note owned by the caller. Responds 201 with a `Location` header.
pub async fn create_note(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<NoteFields>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    validate_note_fields(&input)?;

    let note = MoodNoteRepo::insert(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, note_id = note.id, "Mood note created");

    let location = HeaderValue::from_str(&format!("/api/v1/mood-notes/{}", note.id))
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(DataResponse { data: note }),
    ))
}

/// GET /mood-notes
///
/// List the caller's notes, newest first.
pub async fn list_notes(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let notes = MoodNoteRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: notes }))
}

/// GET /mood-notes/{id}
pub async fn get_note(
    auth: AuthUser,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = note_id(path)?;
    let note = MoodNoteRepo::find_for_user(&state.pool, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: note }))
}

/// PATCH /mood-notes/{id}
///
/// Fetch the caller's note, overlay the supplied fields, validate the merged
/// result, then write it back conditioned on the fetched version. A lost
/// race surfaces as 409 and the client should re-fetch and retry.
pub async fn update_note(
    auth: AuthUser,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<NoteFieldsPatch>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = note_id(path)?;
    let mut note = MoodNoteRepo::find_for_user(&state.pool, id, auth.user_id).await?;

    let Json(patch) = payload?;
    if patch.is_empty() {
        tracing::debug!(
            user_id = auth.user_id,
            note_id = id,
            "Empty mood note patch, only the version will change"
        );
    }
    let merged = patch.apply_to(note.fields());
    validate_note_fields(&merged)?;
    note.set_fields(merged);

    MoodNoteRepo::update(&state.pool, &mut note).await?;

    tracing::info!(
        user_id = auth.user_id,
        note_id = id,
        version = note.version,
        "Mood note updated"
    );

    Ok(Json(DataResponse { data: note }))
}

/// DELETE /mood-notes/{id}
pub async fn delete_note(
    auth: AuthUser,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = note_id(path)?;
    MoodNoteRepo::delete_for_user(&state.pool, id, auth.user_id).await?;

    tracing::info!(user_id = auth.user_id, note_id = id, "Mood note deleted");

    Ok(StatusCode::NO_CONTENT)
}
