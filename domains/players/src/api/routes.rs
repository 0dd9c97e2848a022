//! Route definitions for the Players domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::players;
use super::state::PlayersState;

/// Create all Players domain API routes
pub fn routes() -> Router<PlayersState> {
    Router::new()
        .route("/v1/players", post(players::register_player))
        .route(
            "/v1/players/email/{email}",
            get(players::get_player_by_email),
        )
        .route(
            "/v1/players/skill/{level}",
            get(players::list_players_by_skill),
        )
        .route("/v1/players/updates", get(players::recent_academy_updates))
        .route(
            "/v1/players/{id}",
            get(players::get_player)
                .patch(players::update_player)
                .delete(players::delete_player),
        )
        .route("/v1/players/{id}/calendar", get(players::player_calendar))
}
