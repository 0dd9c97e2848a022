//! Tournaments domain state

use crate::repository::TournamentRepository;

/// Application state for the Tournaments domain
#[derive(Clone)]
pub struct TournamentsState {
    pub tournaments: TournamentRepository,
}
