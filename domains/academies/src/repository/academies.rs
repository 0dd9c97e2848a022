//! Academy repository

use crate::domain::entities::{Academy, NewAcademy};
use courtside_common::columns::{ColumnSet, ColumnType, UpdateOutcome};
use courtside_common::Result;
use serde_json::{Map, Value};
use sqlx::PgPool;
use uuid::Uuid;

/// Updatable academy columns. `is_active` is deliberately absent: lifecycle
/// changes go through `deactivate`, never through a partial update.
const UPDATE_COLUMNS: ColumnSet = ColumnSet {
    table: "academies",
    columns: &[
        ("name", ColumnType::Text),
        ("location", ColumnType::Text),
        ("city", ColumnType::Text),
        ("contact_email", ColumnType::Text),
        ("contact_phone", ColumnType::Text),
        ("description", ColumnType::Text),
        ("website_url", ColumnType::Text),
        ("specialization", ColumnType::Text),
    ],
};

#[derive(Clone)]
pub struct AcademyRepository {
    pool: PgPool,
}

impl AcademyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new academy. Optional fields bind as NULL.
    pub async fn create(&self, academy: &NewAcademy) -> Result<Academy> {
        let created = sqlx::query_as::<_, Academy>(
            r#"
            INSERT INTO academies (
                name, location, city, contact_email, contact_phone,
                description, website_url, specialization
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, location, city, contact_email, contact_phone,
                      description, website_url, specialization, is_active,
                      created_at, updated_at
            "#,
        )
        .bind(&academy.name)
        .bind(&academy.location)
        .bind(&academy.city)
        .bind(&academy.contact_email)
        .bind(&academy.contact_phone)
        .bind(&academy.description)
        .bind(&academy.website_url)
        .bind(&academy.specialization)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Find academy by contact email. Absence is `None`, not an error.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Academy>> {
        let academy = sqlx::query_as::<_, Academy>(
            r#"
            SELECT id, name, location, city, contact_email, contact_phone,
                   description, website_url, specialization, is_active,
                   created_at, updated_at
            FROM academies
            WHERE contact_email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(academy)
    }

    /// Find academy by id. Identifier format is validated by the handler
    /// layer before this is called.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Academy>> {
        let academy = sqlx::query_as::<_, Academy>(
            r#"
            SELECT id, name, location, city, contact_email, contact_phone,
                   description, website_url, specialization, is_active,
                   created_at, updated_at
            FROM academies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(academy)
    }

    /// Apply a partial update filtered through the column allow-list.
    ///
    /// Unknown keys are dropped; if nothing survives, no statement is issued
    /// and the outcome is `Noop`.
    pub async fn update(&self, id: Uuid, payload: &Map<String, Value>) -> Result<UpdateOutcome> {
        let Some(mut query) = UPDATE_COLUMNS.update_query(id, payload)? else {
            return Ok(UpdateOutcome::Noop);
        };

        let result = query.build().execute(&self.pool).await?;
        Ok(UpdateOutcome::Applied(result.rows_affected()))
    }

    /// Soft-deactivate an academy. The row is kept and stays retrievable.
    pub async fn deactivate(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE academies SET is_active = FALSE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// List academies in a city. A city with no academies is an empty vector.
    pub async fn find_by_city(&self, city: &str) -> Result<Vec<Academy>> {
        let academies = sqlx::query_as::<_, Academy>(
            r#"
            SELECT id, name, location, city, contact_email, contact_phone,
                   description, website_url, specialization, is_active,
                   created_at, updated_at
            FROM academies
            WHERE city = $1
            ORDER BY name ASC
            "#,
        )
        .bind(city)
        .fetch_all(&self.pool)
        .await?;

        Ok(academies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_allow_list_excludes_lifecycle_columns() {
        let names: Vec<&str> = UPDATE_COLUMNS.columns.iter().map(|(n, _)| *n).collect();
        assert!(!names.contains(&"id"));
        assert!(!names.contains(&"is_active"));
        assert!(!names.contains(&"created_at"));
    }

    #[test]
    fn test_update_filter_drops_lifecycle_columns() {
        // A caller cannot reactivate an academy through the update path
        let payload = json!({"is_active": true, "name": "Renamed"});
        let assignments = UPDATE_COLUMNS
            .filter(payload.as_object().unwrap())
            .unwrap();
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].0, "name");
    }

    #[test]
    fn test_update_statement_targets_academies_table() {
        let payload = json!({"city": "Mumbai"});
        let query = UPDATE_COLUMNS
            .update_query(Uuid::new_v4(), payload.as_object().unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(
            query.sql(),
            "UPDATE academies SET city = $1, updated_at = NOW() WHERE id = $2"
        );
    }
}
