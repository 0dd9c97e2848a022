//! Repository implementations for the Tournaments domain

pub mod tournaments;

pub use tournaments::TournamentRepository;
