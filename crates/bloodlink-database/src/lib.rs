//! # bloodlink-database
//!
//! SQLite database connection management and concrete repository
//! implementations for all BloodLink entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
