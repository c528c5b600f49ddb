//! Startup wiring for demo data seeding.

mod config;
mod startup;

pub use config::DemoDataSettings;
pub use startup::seed_demo_data_on_startup;
