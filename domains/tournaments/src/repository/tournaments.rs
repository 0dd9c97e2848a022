//! Tournament repository

use crate::domain::entities::Tournament;
use chrono::{DateTime, Utc};
use courtside_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct TournamentRepository {
    pool: PgPool,
}

impl TournamentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Tournaments starting at or after `now`, soonest first.
    pub async fn upcoming(&self, now: DateTime<Utc>) -> Result<Vec<Tournament>> {
        let tournaments = sqlx::query_as::<_, Tournament>(
            r#"
            SELECT id, academy_id, name, description, category, city, location,
                   start_date, end_date, registration_deadline, registration_fee,
                   prize_pool, max_teams, image_url, created_at, updated_at
            FROM tournaments
            WHERE start_date >= $1
            ORDER BY start_date ASC
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        Ok(tournaments)
    }

    /// All tournaments hosted by an academy, earliest first.
    pub async fn list_by_academy(&self, academy_id: Uuid) -> Result<Vec<Tournament>> {
        let tournaments = sqlx::query_as::<_, Tournament>(
            r#"
            SELECT id, academy_id, name, description, category, city, location,
                   start_date, end_date, registration_deadline, registration_fee,
                   prize_pool, max_teams, image_url, created_at, updated_at
            FROM tournaments
            WHERE academy_id = $1
            ORDER BY start_date ASC
            "#,
        )
        .bind(academy_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tournaments)
    }
}
