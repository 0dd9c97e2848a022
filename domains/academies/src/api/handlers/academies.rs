//! Academy management API handlers
//!
//! Implements academy operations including:
//! - POST /v1/academies - Register a new academy
//! - GET /v1/academies/{id} - Get academy by id
//! - GET /v1/academies/email/{email} - Get academy by contact email
//! - PATCH /v1/academies/{id} - Partially update an academy
//! - DELETE /v1/academies/{id} - Deactivate an academy
//! - GET /v1/academies/city/{city} - List academies in a city

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use courtside_common::columns::UpdateOutcome;
use courtside_common::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;
use validator::Validate;

use crate::api::state::AcademiesState;
use crate::domain::entities::{Academy, NewAcademy};

/// Request for registering a new academy
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterAcademyRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[validate(length(max = 100))]
    pub city: Option<String>,

    #[validate(email)]
    pub contact_email: String,

    #[validate(length(max = 20))]
    pub contact_phone: Option<String>,

    pub description: Option<String>,

    #[validate(url)]
    pub website_url: Option<String>,

    #[validate(length(max = 100))]
    pub specialization: Option<String>,
}

/// Response for academy operations
#[derive(Debug, Serialize)]
pub struct AcademyResponse {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub city: Option<String>,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub specialization: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Academy> for AcademyResponse {
    fn from(academy: Academy) -> Self {
        Self {
            id: academy.id,
            name: academy.name,
            location: academy.location,
            city: academy.city,
            contact_email: academy.contact_email,
            contact_phone: academy.contact_phone,
            description: academy.description,
            website_url: academy.website_url,
            specialization: academy.specialization,
            is_active: academy.is_active,
            created_at: academy.created_at,
            updated_at: academy.updated_at,
        }
    }
}

/// Response for update operations
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub message: String,
    pub rows_affected: u64,
}

/// Response for deactivation
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Parse a path identifier, rejecting anything that is not a UUID before the
/// store is touched.
fn parse_academy_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| Error::Validation("Invalid UUID format".to_string()))
}

/// Register a new academy
///
/// **POST /v1/academies**
pub async fn register_academy(
    State(state): State<AcademiesState>,
    Json(request): Json<RegisterAcademyRequest>,
) -> Result<(StatusCode, Json<AcademyResponse>)> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    let new_academy = NewAcademy {
        name: request.name,
        location: request.location,
        city: request.city,
        contact_email: request.contact_email,
        contact_phone: request.contact_phone,
        description: request.description,
        website_url: request.website_url,
        specialization: request.specialization,
    };

    let academy = state.academies.create(&new_academy).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to register academy");
        e
    })?;

    Ok((StatusCode::CREATED, Json(AcademyResponse::from(academy))))
}

/// Get academy by contact email
///
/// **GET /v1/academies/email/{email}**
pub async fn get_academy_by_email(
    State(state): State<AcademiesState>,
    Path(email): Path<String>,
) -> Result<Json<AcademyResponse>> {
    let academy = state
        .academies
        .find_by_email(&email)
        .await?
        .ok_or_else(|| Error::NotFound("Academy not found".to_string()))?;

    Ok(Json(AcademyResponse::from(academy)))
}

/// Get academy by id
///
/// **GET /v1/academies/{id}**
///
/// A malformed id is rejected with 400 without querying the store.
pub async fn get_academy(
    State(state): State<AcademiesState>,
    Path(id): Path<String>,
) -> Result<Json<AcademyResponse>> {
    let id = parse_academy_id(&id)?;

    let academy = state
        .academies
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Academy not found".to_string()))?;

    Ok(Json(AcademyResponse::from(academy)))
}

/// Partially update an academy
///
/// **PATCH /v1/academies/{id}**
///
/// An empty body is rejected with 400 before any repository call. Unknown
/// fields are dropped by the repository's allow-list; a payload where nothing
/// survives is a no-op, not an error.
pub async fn update_academy(
    State(state): State<AcademiesState>,
    Path(id): Path<String>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<Json<UpdateResponse>> {
    let id = parse_academy_id(&id)?;

    if payload.is_empty() {
        return Err(Error::Validation("No data provided for update".to_string()));
    }

    let outcome = state.academies.update(id, &payload).await.map_err(|e| {
        tracing::error!(error = %e, academy_id = %id, "Failed to update academy");
        e
    })?;

    match outcome {
        UpdateOutcome::Noop => Ok(Json(UpdateResponse {
            message: "No valid fields to update".to_string(),
            rows_affected: 0,
        })),
        UpdateOutcome::Applied(0) => Err(Error::NotFound("Academy not found".to_string())),
        UpdateOutcome::Applied(n) => Ok(Json(UpdateResponse {
            message: "Academy updated successfully".to_string(),
            rows_affected: n,
        })),
    }
}

/// Deactivate an academy
///
/// **DELETE /v1/academies/{id}**
///
/// Soft-deactivation: the row is marked inactive and stays retrievable.
pub async fn deactivate_academy(
    State(state): State<AcademiesState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_academy_id(&id)?;

    let rows = state.academies.deactivate(id).await.map_err(|e| {
        tracing::error!(error = %e, academy_id = %id, "Failed to deactivate academy");
        e
    })?;

    if rows == 0 {
        return Err(Error::NotFound("Academy not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Academy deactivated successfully".to_string(),
    }))
}

/// List academies in a city
///
/// **GET /v1/academies/city/{city}**
///
/// A city with no academies yields an empty array, not 404.
pub async fn list_academies_by_city(
    State(state): State<AcademiesState>,
    Path(city): Path<String>,
) -> Result<Json<Vec<AcademyResponse>>> {
    let academies = state.academies.find_by_city(&city).await?;

    Ok(Json(
        academies.into_iter().map(AcademyResponse::from).collect(),
    ))
}
