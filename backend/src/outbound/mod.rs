//! Outbound adapters implementing the store ports.
//!
//! - **memory**: process-local tables, the default when no database is set.
//! - **persistence**: PostgreSQL repositories using Diesel.

pub mod memory;
pub mod persistence;
