//! Repository implementations for the Players domain

pub mod players;

pub use players::PlayerRepository;
