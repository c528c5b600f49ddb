//! Bookmarks service entry point.

mod server;

use std::ffi::OsString;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bookmarks::demo_data::{DemoDataSettings, seed_demo_data_on_startup};
use bookmarks::inbound::http::health::HealthState;
use bookmarks::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, ServerSettings, Stores, create_server};

async fn connect_database(database_url: Option<&str>) -> std::io::Result<Option<DbPool>> {
    let Some(url) = database_url else {
        return Ok(None);
    };
    run_pending_migrations(url)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let pool = DbPool::new(PoolConfig::new(url))
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    Ok(Some(pool))
}

/// Demo data settings from the environment and config file only.
fn load_demo_data_settings() -> std::io::Result<DemoDataSettings> {
    DemoDataSettings::load_from_iter([OsString::from("bookmarks")])
        .map_err(|e| std::io::Error::other(e.to_string()))
}

/// Select the stores and seed them when demo data is enabled.
async fn prepare_stores(
    settings: &ServerSettings,
    demo_data: &DemoDataSettings,
) -> std::io::Result<Stores> {
    let pool = connect_database(settings.database_url()).await?;
    let stores = Stores::from_pool(pool);

    seed_demo_data_on_startup(
        demo_data,
        Arc::clone(&stores.accounts),
        Arc::clone(&stores.bookmarks),
    )
    .await
    .map_err(|e| std::io::Error::other(format!("demo data seeding failed: {e}")))?;
    Ok(stores)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|e| std::io::Error::other(e.to_string()))?;
    let demo_data = load_demo_data_settings()?;
    let stores = prepare_stores(&settings, &demo_data).await?;

    let bind_addr = settings.bind_addr();
    info!(host = %bind_addr.0, port = bind_addr.1, "starting bookmarks service");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, stores))?;
    server.await
}
