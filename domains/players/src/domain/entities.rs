//! Domain entities for the Players domain
//!
//! A player signs up once and maintains their profile through partial
//! updates restricted to an allow-list of mutable columns. Deleting a player
//! removes the row. Calendar events and academy updates are read-only query
//! targets associated with a player.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Player entity
///
/// The credential is opaque at this layer: stored as received, never
/// serialized in responses, never logged.
#[derive(Clone, PartialEq, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub state: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<NaiveDate>,
    pub contact_number: Option<String>,
    pub skill_level: Option<String>,
    pub language: Option<String>,
    pub preferred_position: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("state", &self.state)
            .field("city", &self.city)
            .field("address", &self.address)
            .field("gender", &self.gender)
            .field("dob", &self.dob)
            .field("contact_number", &self.contact_number)
            .field("skill_level", &self.skill_level)
            .field("language", &self.language)
            .field("preferred_position", &self.preferred_position)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Field set for player signup.
///
/// Every column the players table carries is present here, so the insert
/// binds each one explicitly and absent optional fields land as NULL.
#[derive(Clone, PartialEq)]
pub struct NewPlayer {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub state: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<NaiveDate>,
    pub contact_number: Option<String>,
    pub skill_level: Option<String>,
    pub language: Option<String>,
    pub preferred_position: Option<String>,
}

/// Upcoming event on a player's calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub player_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// News item published by an academy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AcademyUpdate {
    pub id: Uuid,
    pub academy_id: Uuid,
    pub title: String,
    pub content: String,
    pub publish_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        let now = Utc::now();
        Player {
            id: Uuid::new_v4(),
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            password: "hunter2secret".to_string(),
            state: Some("Maharashtra".to_string()),
            city: Some("Pune".to_string()),
            address: None,
            gender: Some("F".to_string()),
            dob: NaiveDate::from_ymd_opt(2001, 7, 16),
            contact_number: None,
            skill_level: Some("Intermediate".to_string()),
            language: Some("Marathi".to_string()),
            preferred_position: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_player_debug_redacts_credential() {
        let debug = format!("{:?}", player());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2secret"));
    }

    #[test]
    fn test_calendar_event_serialization_roundtrip() {
        let now = Utc::now();
        let event = CalendarEvent {
            id: Uuid::new_v4(),
            player_id: Uuid::new_v4(),
            title: "League trials".to_string(),
            description: None,
            location: Some("Court 2".to_string()),
            event_date: now,
            created_at: now,
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: CalendarEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
