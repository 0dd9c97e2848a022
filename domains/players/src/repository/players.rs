//! Player repository
//!
//! Besides player CRUD this repository answers the player-scoped feed
//! queries: upcoming calendar events, recent academy updates, and the skill
//! lookup. Time-filtered queries take `now` as a parameter.

use crate::domain::entities::{AcademyUpdate, CalendarEvent, NewPlayer, Player};
use chrono::{DateTime, Months, Utc};
use courtside_common::columns::{ColumnSet, ColumnType, UpdateOutcome};
use courtside_common::Result;
use serde_json::{Map, Value};
use sqlx::PgPool;
use uuid::Uuid;

/// Updatable player columns. `dob` binds as a date; everything else as text.
const UPDATE_COLUMNS: ColumnSet = ColumnSet {
    table: "players",
    columns: &[
        ("full_name", ColumnType::Text),
        ("email", ColumnType::Text),
        ("password", ColumnType::Text),
        ("state", ColumnType::Text),
        ("city", ColumnType::Text),
        ("address", ColumnType::Text),
        ("gender", ColumnType::Text),
        ("dob", ColumnType::Date),
        ("contact_number", ColumnType::Text),
        ("skill_level", ColumnType::Text),
        ("language", ColumnType::Text),
        ("preferred_position", ColumnType::Text),
    ],
};

#[derive(Clone)]
pub struct PlayerRepository {
    pool: PgPool,
}

impl PlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Sign up a new player.
    ///
    /// Every expected column is bound explicitly; absent optional fields
    /// bind as NULL rather than being omitted from the statement.
    pub async fn create(&self, player: &NewPlayer) -> Result<Player> {
        let created = sqlx::query_as::<_, Player>(
            r#"
            INSERT INTO players (
                full_name, email, password, state, city, address, gender,
                dob, contact_number, skill_level, language, preferred_position
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, full_name, email, password, state, city, address,
                      gender, dob, contact_number, skill_level, language,
                      preferred_position, created_at, updated_at
            "#,
        )
        .bind(&player.full_name)
        .bind(&player.email)
        .bind(&player.password)
        .bind(&player.state)
        .bind(&player.city)
        .bind(&player.address)
        .bind(&player.gender)
        .bind(player.dob)
        .bind(&player.contact_number)
        .bind(&player.skill_level)
        .bind(&player.language)
        .bind(&player.preferred_position)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Find player by email. Absence is `None`, not an error.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Player>> {
        let player = sqlx::query_as::<_, Player>(
            r#"
            SELECT id, full_name, email, password, state, city, address,
                   gender, dob, contact_number, skill_level, language,
                   preferred_position, created_at, updated_at
            FROM players
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(player)
    }

    /// Find player by id. Identifier format is validated by the handler
    /// layer before this is called.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Player>> {
        let player = sqlx::query_as::<_, Player>(
            r#"
            SELECT id, full_name, email, password, state, city, address,
                   gender, dob, contact_number, skill_level, language,
                   preferred_position, created_at, updated_at
            FROM players
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(player)
    }

    /// Apply a partial update filtered through the column allow-list.
    ///
    /// Unknown keys are dropped; if nothing survives, no statement is issued
    /// and the outcome is `Noop`.
    pub async fn update(&self, id: Uuid, payload: &Map<String, Value>) -> Result<UpdateOutcome> {
        let Some(mut query) = UPDATE_COLUMNS.update_query(id, payload)? else {
            tracing::warn!(player_id = %id, "No valid fields to update");
            return Ok(UpdateOutcome::Noop);
        };

        let result = query.build().execute(&self.pool).await?;
        Ok(UpdateOutcome::Applied(result.rows_affected()))
    }

    /// Physically delete a player by id.
    pub async fn delete(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// List players at a skill level. No matches is an empty vector.
    pub async fn find_by_skill_level(&self, level: &str) -> Result<Vec<Player>> {
        let players = sqlx::query_as::<_, Player>(
            r#"
            SELECT id, full_name, email, password, state, city, address,
                   gender, dob, contact_number, skill_level, language,
                   preferred_position, created_at, updated_at
            FROM players
            WHERE skill_level = $1
            ORDER BY full_name ASC
            "#,
        )
        .bind(level)
        .fetch_all(&self.pool)
        .await?;

        Ok(players)
    }

    /// Upcoming calendar events for a player, soonest first.
    pub async fn calendar_events(
        &self,
        player_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>> {
        let events = sqlx::query_as::<_, CalendarEvent>(
            r#"
            SELECT id, player_id, title, description, location, event_date, created_at
            FROM calendar_events
            WHERE player_id = $1 AND event_date >= $2
            ORDER BY event_date ASC
            "#,
        )
        .bind(player_id)
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Academy updates published within the month before `now`, newest first.
    pub async fn academy_updates(&self, now: DateTime<Utc>) -> Result<Vec<AcademyUpdate>> {
        let since = now
            .checked_sub_months(Months::new(1))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        let updates = sqlx::query_as::<_, AcademyUpdate>(
            r#"
            SELECT id, academy_id, title, content, publish_date, created_at
            FROM academy_updates
            WHERE publish_date >= $1
            ORDER BY publish_date DESC
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(updates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_allow_list_matches_mutable_profile() {
        let names: Vec<&str> = UPDATE_COLUMNS.columns.iter().map(|(n, _)| *n).collect();
        assert!(names.contains(&"full_name"));
        assert!(names.contains(&"preferred_position"));
        assert!(!names.contains(&"id"));
        assert!(!names.contains(&"created_at"));
    }

    #[test]
    fn test_dob_is_the_only_date_column() {
        for (name, column_type) in UPDATE_COLUMNS.columns {
            if *name == "dob" {
                assert_eq!(*column_type, ColumnType::Date);
            } else {
                assert_eq!(*column_type, ColumnType::Text);
            }
        }
    }

    #[test]
    fn test_update_with_only_invalid_columns_builds_no_query() {
        let payload = json!({"Role": "admin", "credits": 999});
        let query = UPDATE_COLUMNS
            .update_query(Uuid::new_v4(), payload.as_object().unwrap())
            .unwrap();
        assert!(query.is_none());
    }

    #[test]
    fn test_update_statement_binds_dob_after_text_columns() {
        let payload = json!({"city": "Pune", "dob": "2001-07-16"});
        let query = UPDATE_COLUMNS
            .update_query(Uuid::new_v4(), payload.as_object().unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(
            query.sql(),
            "UPDATE players SET city = $1, dob = $2, updated_at = NOW() WHERE id = $3"
        );
    }
}
