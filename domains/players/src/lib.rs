//! Players domain: player profiles, signup, skill queries, calendar and news feeds

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{AcademyUpdate, CalendarEvent, NewPlayer, Player};
// Re-export repository types
pub use repository::PlayerRepository;

// Re-export API types
pub use api::routes;
pub use api::PlayersState;
