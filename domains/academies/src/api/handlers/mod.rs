//! HTTP handlers for the Academies domain

pub mod academies;
