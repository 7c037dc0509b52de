pub mod health;
pub mod mood_notes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /mood-notes          list, create (auth required)
/// /mood-notes/{id}     get, partial update, delete (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/mood-notes", mood_notes::router())
}
