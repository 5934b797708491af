//! Shared utilities, configuration, and error handling for the job board
//!
//! This crate provides common functionality used across the application:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP rendering
//! - Database pool creation and repository errors
//! - Request extractors with client-error rejections

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::{Config, DatabaseConfig};
pub use db::{create_pool, RepositoryError};
pub use error::{Error, Result};
pub use extractors::{ApiPath, ValidatedJson};
