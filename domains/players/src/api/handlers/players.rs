//! Player management API handlers
//!
//! Implements player operations including:
//! - POST /v1/players - Sign up a new player
//! - GET /v1/players/{id} - Get player by id
//! - GET /v1/players/email/{email} - Get player by email
//! - PATCH /v1/players/{id} - Partially update a player
//! - DELETE /v1/players/{id} - Delete a player
//! - GET /v1/players/skill/{level} - List players by skill level
//! - GET /v1/players/{id}/calendar - Upcoming calendar events
//! - GET /v1/players/updates - Recent academy updates

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use courtside_common::columns::UpdateOutcome;
use courtside_common::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;
use validator::Validate;

use crate::api::state::PlayersState;
use crate::domain::entities::{AcademyUpdate, CalendarEvent, NewPlayer, Player};

/// Request for player signup
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterPlayerRequest {
    #[validate(length(min = 1, max = 120))]
    pub full_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    #[validate(length(max = 100))]
    pub state: Option<String>,

    #[validate(length(max = 100))]
    pub city: Option<String>,

    #[validate(length(max = 255))]
    pub address: Option<String>,

    #[validate(length(max = 20))]
    pub gender: Option<String>,

    pub dob: Option<NaiveDate>,

    #[validate(length(max = 20))]
    pub contact_number: Option<String>,

    #[validate(length(max = 50))]
    pub skill_level: Option<String>,

    #[validate(length(max = 50))]
    pub language: Option<String>,

    #[validate(length(max = 50))]
    pub preferred_position: Option<String>,
}

/// Response for player operations. The credential is never serialized.
#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
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

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            full_name: player.full_name,
            email: player.email,
            state: player.state,
            city: player.city,
            address: player.address,
            gender: player.gender,
            dob: player.dob,
            contact_number: player.contact_number,
            skill_level: player.skill_level,
            language: player.language,
            preferred_position: player.preferred_position,
            created_at: player.created_at,
            updated_at: player.updated_at,
        }
    }
}

/// Response for update operations
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub message: String,
    pub rows_affected: u64,
}

/// Response for deletion
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Parse a path identifier, rejecting anything that is not a UUID before the
/// store is touched.
fn parse_player_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| Error::Validation("Invalid UUID format".to_string()))
}

/// Sign up a new player
///
/// **POST /v1/players**
pub async fn register_player(
    State(state): State<PlayersState>,
    Json(request): Json<RegisterPlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>)> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    let new_player = NewPlayer {
        full_name: request.full_name,
        email: request.email,
        password: request.password,
        state: request.state,
        city: request.city,
        address: request.address,
        gender: request.gender,
        dob: request.dob,
        contact_number: request.contact_number,
        skill_level: request.skill_level,
        language: request.language,
        preferred_position: request.preferred_position,
    };

    let player = state.players.create(&new_player).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to register player");
        e
    })?;

    Ok((StatusCode::CREATED, Json(PlayerResponse::from(player))))
}

/// Get player by email
///
/// **GET /v1/players/email/{email}**
pub async fn get_player_by_email(
    State(state): State<PlayersState>,
    Path(email): Path<String>,
) -> Result<Json<PlayerResponse>> {
    let player = state
        .players
        .find_by_email(&email)
        .await?
        .ok_or_else(|| Error::NotFound("Player not found".to_string()))?;

    Ok(Json(PlayerResponse::from(player)))
}

/// Get player by id
///
/// **GET /v1/players/{id}**
///
/// A malformed id is rejected with 400 without querying the store.
pub async fn get_player(
    State(state): State<PlayersState>,
    Path(id): Path<String>,
) -> Result<Json<PlayerResponse>> {
    let id = parse_player_id(&id)?;

    let player = state
        .players
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Player not found".to_string()))?;

    Ok(Json(PlayerResponse::from(player)))
}

/// Partially update a player
///
/// **PATCH /v1/players/{id}**
///
/// An empty body is rejected with 400. Unknown fields are dropped by the
/// repository's allow-list; a payload where nothing survives yields a
/// zero-rows no-op, not an error.
pub async fn update_player(
    State(state): State<PlayersState>,
    Path(id): Path<String>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<Json<UpdateResponse>> {
    let id = parse_player_id(&id)?;

    if payload.is_empty() {
        return Err(Error::Validation("No data provided for update".to_string()));
    }

    let outcome = state.players.update(id, &payload).await.map_err(|e| {
        tracing::error!(error = %e, player_id = %id, "Failed to update player");
        e
    })?;

    match outcome {
        UpdateOutcome::Noop => Ok(Json(UpdateResponse {
            message: "No valid fields to update".to_string(),
            rows_affected: 0,
        })),
        UpdateOutcome::Applied(0) => Err(Error::NotFound("Player not found".to_string())),
        UpdateOutcome::Applied(n) => Ok(Json(UpdateResponse {
            message: "Player updated successfully".to_string(),
            rows_affected: n,
        })),
    }
}

/// Delete a player
///
/// **DELETE /v1/players/{id}**
///
/// Physical deletion: a subsequent lookup by id returns 404.
pub async fn delete_player(
    State(state): State<PlayersState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_player_id(&id)?;

    let rows = state.players.delete(id).await.map_err(|e| {
        tracing::error!(error = %e, player_id = %id, "Failed to delete player");
        e
    })?;

    if rows == 0 {
        return Err(Error::NotFound("Player not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Player deleted successfully".to_string(),
    }))
}

/// List players by skill level
///
/// **GET /v1/players/skill/{level}**
///
/// No matches yields an empty array, not 404.
pub async fn list_players_by_skill(
    State(state): State<PlayersState>,
    Path(level): Path<String>,
) -> Result<Json<Vec<PlayerResponse>>> {
    let players = state.players.find_by_skill_level(&level).await?;

    Ok(Json(
        players.into_iter().map(PlayerResponse::from).collect(),
    ))
}

/// Upcoming calendar events for a player
///
/// **GET /v1/players/{id}/calendar**
pub async fn player_calendar(
    State(state): State<PlayersState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CalendarEvent>>> {
    let id = parse_player_id(&id)?;

    let events = state.players.calendar_events(id, Utc::now()).await?;
    Ok(Json(events))
}

/// Academy updates published in the last month
///
/// **GET /v1/players/updates**
pub async fn recent_academy_updates(
    State(state): State<PlayersState>,
) -> Result<Json<Vec<AcademyUpdate>>> {
    let updates = state.players.academy_updates(Utc::now()).await?;
    Ok(Json(updates))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterPlayerRequest {
        RegisterPlayerRequest {
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            password: "correct-horse".to_string(),
            state: Some("Maharashtra".to_string()),
            city: Some("Pune".to_string()),
            address: None,
            gender: Some("F".to_string()),
            dob: NaiveDate::from_ymd_opt(2001, 7, 16),
            contact_number: Some("9876543210".to_string()),
            skill_level: Some("Intermediate".to_string()),
            language: Some("Marathi".to_string()),
            preferred_position: None,
        }
    }

    #[test]
    fn test_register_request_validation() {
        assert!(valid_request().validate().is_ok());

        let mut bad_email = valid_request();
        bad_email.email = "nope".to_string();
        assert!(bad_email.validate().is_err());

        let mut short_password = valid_request();
        short_password.password = "short".to_string();
        assert!(short_password.validate().is_err());

        let mut empty_name = valid_request();
        empty_name.full_name = "".to_string();
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_player_response_omits_credential() {
        let now = Utc::now();
        let player = Player {
            id: Uuid::new_v4(),
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            password: "hunter2secret".to_string(),
            state: None,
            city: None,
            address: None,
            gender: None,
            dob: None,
            contact_number: None,
            skill_level: None,
            language: None,
            preferred_position: None,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_string(&PlayerResponse::from(player)).unwrap();
        assert!(json.contains("asha@example.com"));
        assert!(!json.contains("password"));
        assert!(!json.contains("hunter2secret"));
    }

    #[test]
    fn test_parse_player_id_rejects_non_uuid() {
        assert!(parse_player_id("abc").is_err());
        assert!(matches!(
            parse_player_id("123e4567").unwrap_err(),
            Error::Validation(_)
        ));
    }

    #[test]
    fn test_parse_player_id_accepts_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_player_id(&id.to_string()).unwrap(), id);
    }
}
