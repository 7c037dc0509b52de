use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` only when the database answers and the note schema is in place.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether the `mood_notes` migration has been applied.
    pub schema_ready: bool,
    pub pool: PoolStats,
}

/// Connection pool occupancy at the time of the check.
#[derive(Serialize)]
pub struct PoolStats {
    pub size: u32,
    pub idle: usize,
    pub max_connections: u32,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = moodnote_db::health_check(&state.pool).await.is_ok();
    let schema_ready = db_healthy
        && moodnote_db::schema_ready(&state.pool)
            .await
            .unwrap_or(false);

    if !schema_ready {
        tracing::warn!(db_healthy, "Health check degraded: mood_notes schema unavailable");
    }

    let status = if schema_ready { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_ready,
        pool: PoolStats {
            size: state.pool.size(),
            idle: state.pool.num_idle(),
            max_connections: state.config.database_max_connections,
        },
    })
}

/// Mount health check routes (root level, outside `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
