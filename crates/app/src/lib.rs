//! Courtside application composition root
//!
//! Composes all domain routers into a single application.

use axum::Router;
use courtside_academies::{AcademiesState, AcademyRepository};
use courtside_players::{PlayerRepository, PlayersState};
use courtside_tournaments::{TournamentRepository, TournamentsState};
use sqlx::PgPool;

/// Create the main application router with all routes and middleware
pub fn create_app(pool: PgPool) -> Router {
    let academies_state = AcademiesState {
        academies: AcademyRepository::new(pool.clone()),
    };
    let players_state = PlayersState {
        players: PlayerRepository::new(pool.clone()),
    };
    let tournaments_state = TournamentsState {
        tournaments: TournamentRepository::new(pool),
    };

    // Build router — compose domain routers with shared infrastructure routes
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Courtside API v0.1.0" }))
        .merge(courtside_academies::routes().with_state(academies_state))
        .merge(courtside_players::routes().with_state(players_state))
        .merge(courtside_tournaments::routes().with_state(tournaments_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
