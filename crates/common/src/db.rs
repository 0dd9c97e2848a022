//! Database pool bootstrap for Courtside
//!
//! The pool is created once at startup and injected into domain
//! repositories; no repository reaches for ambient connection state.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub type Db = PgPool;

/// Connect to the database and verify readiness with a round-trip ping.
///
/// This is the one-time initialization gate: callers hold a ready pool
/// afterwards and never re-check per query.
pub async fn connect(database_url: &str) -> Result<Db, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    ping(&pool).await?;
    Ok(pool)
}

pub async fn ping(pool: &Db) -> Result<(), sqlx::Error> {
    let _: i32 = sqlx::query_scalar("SELECT 1").fetch_one(pool).await?;
    Ok(())
}
