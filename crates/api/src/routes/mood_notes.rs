//! Route definitions for mood notes.
//!
//! Mounted at `/mood-notes` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::mood_notes;
use crate::state::AppState;

/// Mood note routes.
///
/// ```text
/// GET    /          -> list_notes
/// POST   /          -> create_note
/// GET    /{id}      -> get_note
/// PATCH  /{id}      -> update_note
/// DELETE /{id}      -> delete_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(mood_notes::list_notes).post(mood_notes::create_note),
        )
        .route(
            "/{id}",
            get(mood_notes::get_note)
                .patch(mood_notes::update_note)
                .delete(mood_notes::delete_note),
        )
}
