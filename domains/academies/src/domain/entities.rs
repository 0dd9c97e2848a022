//! Domain entities for the Academies domain
//!
//! An academy registers once, maintains its profile through partial updates,
//! and is deactivated rather than removed: the row stays retrievable by id
//! with `is_active` cleared.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Academy entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Academy {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub city: Option<String>,
    /// Unique business key; lookups by email resolve against this column
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub specialization: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field set for registering a new academy. Optional fields insert as NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAcademy {
    pub name: String,
    pub location: Option<String>,
    pub city: Option<String>,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub specialization: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_roundtrip() {
        let now = Utc::now();
        let academy = Academy {
            id: Uuid::new_v4(),
            name: "Smash Badminton Academy".to_string(),
            location: Some("12 Stadium Road".to_string()),
            city: Some("Pune".to_string()),
            contact_email: "contact@smash.example".to_string(),
            contact_phone: None,
            description: None,
            website_url: Some("https://smash.example".to_string()),
            specialization: Some("Badminton".to_string()),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_string(&academy).unwrap();
        let deserialized: Academy = serde_json::from_str(&json).unwrap();

        assert_eq!(academy, deserialized);
    }
}
