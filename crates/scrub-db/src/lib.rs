//! Data-source adapter for scrub
//!
//! This crate provides:
//! - Environment-variable database configuration
//! - A `users` table store over a MySQL pool
//! - The row-to-delimited-message builder feeding the redacting logger

pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use config::DbConfig;
pub use error::{DbError, Result};
pub use models::UserRow;
pub use store::UserStore;
