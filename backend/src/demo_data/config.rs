//! Demo data configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_ENABLED: bool = true;

/// Controls the demo roster written at startup.
///
/// Read from `DEMO_DATA_*` environment variables or the config file.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DEMO_DATA")]
pub struct DemoDataSettings {
    /// Seed the demo accounts and bookmarks on startup. Unset means enabled.
    pub enabled: Option<bool>,
}

impl DemoDataSettings {
    /// Settings with seeding explicitly switched on or off.
    #[must_use]
    pub fn with_enabled(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
        }
    }

    /// Whether seeding runs, falling back to enabled.
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(DEFAULT_ENABLED)
    }
}
