//! Academies domain: academy profiles, registration, lookup, deactivation

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Academy, NewAcademy};
// Re-export repository types
pub use repository::AcademyRepository;

// Re-export API types
pub use api::routes;
pub use api::AcademiesState;
