//! HTTP handlers for the Tournaments domain

pub mod tournaments;
