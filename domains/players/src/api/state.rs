//! Players domain state

use crate::repository::PlayerRepository;

/// Application state for the Players domain
#[derive(Clone)]
pub struct PlayersState {
    pub players: PlayerRepository,
}
