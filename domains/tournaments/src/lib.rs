//! Tournaments domain: listings with derived status and text search

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::Tournament;
pub use domain::status::{matches_search, RegistrationStatus, TournamentStatus};
// Re-export repository types
pub use repository::TournamentRepository;

// Re-export API types
pub use api::routes;
pub use api::TournamentsState;
