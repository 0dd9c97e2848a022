//! Pure status derivation for tournament listings
//!
//! Status is never stored; it is derived from the tournament's dates
//! relative to a caller-supplied `now`, so listings stay correct without a
//! background job flipping rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a tournament relative to `now`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl TournamentStatus {
    /// Derive status from the tournament window. A tournament without an
    /// end date is treated as a single-day event ending when it starts.
    pub fn derive(
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        let end = end.unwrap_or(start);
        if end < now {
            TournamentStatus::Completed
        } else if start <= now {
            TournamentStatus::Ongoing
        } else {
            TournamentStatus::Upcoming
        }
    }
}

impl std::fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentStatus::Upcoming => write!(f, "upcoming"),
            TournamentStatus::Ongoing => write!(f, "ongoing"),
            TournamentStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Whether registration is still open relative to `now`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Open,
    Closed,
}

impl RegistrationStatus {
    /// No deadline means registration stays open.
    pub fn derive(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        match deadline {
            Some(deadline) if deadline > now => RegistrationStatus::Open,
            Some(_) => RegistrationStatus::Closed,
            None => RegistrationStatus::Open,
        }
    }
}

/// Case-insensitive substring match on tournament name or location.
///
/// A blank term matches everything.
pub fn matches_search(name: &str, location: Option<&str>, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    if name.to_lowercase().contains(&term) {
        return true;
    }
    location
        .map(|l| l.to_lowercase().contains(&term))
        .unwrap_or(false)
}
