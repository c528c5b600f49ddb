//! Server settings and the configuration object handed to `create_server`.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use super::state_builders::Stores;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Settings loaded from CLI flags, `BOOKMARKS_*` variables or the config file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOKMARKS")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// PostgreSQL URL. The in-memory store is used when unset.
    pub database_url: Option<String>,
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host().to_owned(), self.port())
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Everything `create_server` needs beyond health state.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) stores: Stores,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: (String, u16), stores: Stores) -> Self {
        Self { bind_addr, stores }
    }
}
