//! # plage-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for all Plage entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::{create_lazy_pool, create_pool};
pub use migration::run_migrations;
