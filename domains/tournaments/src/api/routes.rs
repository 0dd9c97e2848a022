//! Route definitions for the Tournaments domain API

use axum::{routing::get, Router};

use super::handlers::tournaments;
use super::state::TournamentsState;

/// Create all Tournaments domain API routes
pub fn routes() -> Router<TournamentsState> {
    Router::new()
        .route(
            "/v1/tournaments/upcoming",
            get(tournaments::upcoming_tournaments),
        )
        .route(
            "/v1/academies/{id}/tournaments",
            get(tournaments::academy_tournaments),
        )
}
