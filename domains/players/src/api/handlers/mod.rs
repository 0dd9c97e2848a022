//! HTTP handlers for the Players domain

pub mod players;
