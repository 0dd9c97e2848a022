//! Shared utilities, configuration, and error handling for Courtside
//!
//! This crate provides common functionality used across the Courtside application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Database pool bootstrap
//! - Column allow-list machinery for dynamic update statements

pub mod columns;
pub mod config;
pub mod db;
pub mod error;

pub use columns::{ColumnSet, ColumnType, SqlValue, UpdateOutcome};
pub use config::Config;
pub use db::Db;
pub use error::{Error, Result};
