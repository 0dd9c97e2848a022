//! Tournament listing API handlers
//!
//! Implements tournament listings including:
//! - GET /v1/tournaments/upcoming - Upcoming tournaments across academies
//! - GET /v1/academies/{id}/tournaments - Tournaments hosted by one academy
//!
//! Both endpoints accept optional `status` and `search` query parameters.
//! Status is derived per row at response time, never stored.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use courtside_common::{Error, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::state::TournamentsState;
use crate::domain::entities::Tournament;
use crate::domain::status::{matches_search, RegistrationStatus, TournamentStatus};

/// Query parameters for tournament listings
#[derive(Debug, Default, Deserialize)]
pub struct TournamentListQuery {
    pub status: Option<TournamentStatus>,
    pub search: Option<String>,
}

/// Tournament with its derived statuses attached
#[derive(Debug, Serialize)]
pub struct TournamentResponse {
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
    pub status: TournamentStatus,
    pub registration_status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TournamentResponse {
    fn from_tournament(tournament: Tournament, now: DateTime<Utc>) -> Self {
        let status =
            TournamentStatus::derive(tournament.start_date, tournament.end_date, now);
        let registration_status =
            RegistrationStatus::derive(tournament.registration_deadline, now);

        Self {
            id: tournament.id,
            academy_id: tournament.academy_id,
            name: tournament.name,
            description: tournament.description,
            category: tournament.category,
            city: tournament.city,
            location: tournament.location,
            start_date: tournament.start_date,
            end_date: tournament.end_date,
            registration_deadline: tournament.registration_deadline,
            registration_fee: tournament.registration_fee,
            prize_pool: tournament.prize_pool,
            max_teams: tournament.max_teams,
            image_url: tournament.image_url,
            status,
            registration_status,
            created_at: tournament.created_at,
            updated_at: tournament.updated_at,
        }
    }
}

/// Derive statuses and apply the status/search filters to fetched rows.
fn apply_filters(
    tournaments: Vec<Tournament>,
    query: &TournamentListQuery,
    now: DateTime<Utc>,
) -> Vec<TournamentResponse> {
    tournaments
        .into_iter()
        .filter(|t| match &query.search {
            Some(term) => matches_search(&t.name, t.location.as_deref(), term),
            None => true,
        })
        .map(|t| TournamentResponse::from_tournament(t, now))
        .filter(|t| match query.status {
            Some(status) => t.status == status,
            None => true,
        })
        .collect()
}

/// List upcoming tournaments
///
/// **GET /v1/tournaments/upcoming**
pub async fn upcoming_tournaments(
    State(state): State<TournamentsState>,
    Query(query): Query<TournamentListQuery>,
) -> Result<Json<Vec<TournamentResponse>>> {
    let now = Utc::now();
    let tournaments = state.tournaments.upcoming(now).await?;

    Ok(Json(apply_filters(tournaments, &query, now)))
}

/// List the tournaments hosted by one academy
///
/// **GET /v1/academies/{id}/tournaments**
pub async fn academy_tournaments(
    State(state): State<TournamentsState>,
    Path(id): Path<String>,
    Query(query): Query<TournamentListQuery>,
) -> Result<Json<Vec<TournamentResponse>>> {
    let academy_id = Uuid::parse_str(&id)
        .map_err(|_| Error::Validation("Invalid UUID format".to_string()))?;

    let now = Utc::now();
    let tournaments = state.tournaments.list_by_academy(academy_id).await?;

    Ok(Json(apply_filters(tournaments, &query, now)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn tournament(name: &str, location: Option<&str>, offset_days: i64) -> Tournament {
        let now = Utc::now();
        let start = now + Duration::days(offset_days);
        Tournament {
            id: Uuid::new_v4(),
            academy_id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            category: None,
            city: None,
            location: location.map(|l| l.to_string()),
            start_date: start,
            end_date: Some(start + Duration::days(1)),
            registration_deadline: None,
            registration_fee: None,
            prize_pool: None,
            max_teams: None,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_apply_filters_by_status() {
        let now = Utc::now();
        let rows = vec![
            tournament("Past Open", None, -10),
            tournament("Future Cup", None, 10),
        ];

        let query = TournamentListQuery {
            status: Some(TournamentStatus::Upcoming),
            search: None,
        };
        let filtered = apply_filters(rows, &query, now);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Future Cup");
    }

    #[test]
    fn test_apply_filters_by_search_term() {
        let now = Utc::now();
        let rows = vec![
            tournament("Monsoon Cup", Some("Central Arena"), 5),
            tournament("Winter Open", None, 5),
        ];

        let query = TournamentListQuery {
            status: None,
            search: Some("arena".to_string()),
        };
        let filtered = apply_filters(rows, &query, now);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Monsoon Cup");
    }

    #[test]
    fn test_apply_filters_without_query_keeps_everything() {
        let now = Utc::now();
        let rows = vec![
            tournament("Monsoon Cup", None, -5),
            tournament("Winter Open", None, 5),
        ];

        let filtered = apply_filters(rows, &TournamentListQuery::default(), now);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_response_carries_derived_statuses() {
        let now = Utc::now();
        let response =
            TournamentResponse::from_tournament(tournament("Future Cup", None, 10), now);
        assert_eq!(response.status, TournamentStatus::Upcoming);
        assert_eq!(response.registration_status, RegistrationStatus::Open);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"upcoming\""));
        assert!(json.contains("\"registration_status\":\"open\""));
    }
}
