//! Route definitions for the Academies domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::academies;
use super::state::AcademiesState;

/// Create all Academies domain API routes
pub fn routes() -> Router<AcademiesState> {
    Router::new()
        .route("/v1/academies", post(academies::register_academy))
        .route(
            "/v1/academies/email/{email}",
            get(academies::get_academy_by_email),
        )
        .route(
            "/v1/academies/city/{city}",
            get(academies::list_academies_by_city),
        )
        .route(
            "/v1/academies/{id}",
            get(academies::get_academy)
                .patch(academies::update_academy)
                .delete(academies::deactivate_academy),
        )
}
