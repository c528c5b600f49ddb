//! PostgreSQL persistence adapters using Diesel with `diesel-async` and bb8.
//!
//! Repositories only translate between row structs and domain types. Row
//! structs and table definitions stay private to this module.

mod diesel_account_repository;
mod diesel_basic_error_mapping;
mod diesel_bookmark_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_account_repository::DieselAccountRepository;
pub use diesel_bookmark_repository::DieselBookmarkRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
