//! Domain entities for the Tournaments domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tournament hosted by an academy. Read-only at this layer; rows are
/// written by the academy-facing tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tournament {
    pub id: Uuid,
    pub academy_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub city: Option<String>,
    pub location: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub registration_fee: Option<i32>,
    pub prize_pool: Option<i32>,
    pub max_teams: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_roundtrip() {
        let now = Utc::now();
        let tournament = Tournament {
            id: Uuid::new_v4(),
            academy_id: Uuid::new_v4(),
            name: "Monsoon Cup".to_string(),
            description: None,
            category: Some("U-19".to_string()),
            city: Some("Pune".to_string()),
            location: Some("Central Arena".to_string()),
            start_date: now,
            end_date: None,
            registration_deadline: None,
            registration_fee: Some(500),
            prize_pool: Some(25000),
            max_teams: Some(16),
            image_url: None,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_string(&tournament).unwrap();
        let deserialized: Tournament = serde_json::from_str(&json).unwrap();
        assert_eq!(tournament, deserialized);
    }
}
