//! PostgreSQL access layer for mood notes.
//!
//! - [`models`] -- row structs mapped with `sqlx::FromRow`.
//! - [`repositories`] -- zero-sized repos taking `&PgPool` per call.
//! - [`error`] -- [`StoreError`], the failure kinds repositories report.

pub mod error;
pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub use error::StoreError;

pub type DbPool = sqlx::PgPool;

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Whether the `mood_notes` table exists, i.e. migrations have been applied.
pub async fn schema_ready(pool: &DbPool) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT to_regclass('public.mood_notes') IS NOT NULL")
        .fetch_one(pool)
        .await
}

/// Apply the embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
