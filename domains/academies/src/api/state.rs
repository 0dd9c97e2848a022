//! Academies domain state

use crate::repository::AcademyRepository;

/// Application state for the Academies domain
#[derive(Clone)]
pub struct AcademiesState {
    pub academies: AcademyRepository,
}
