use serde::Deserialize;

use stockroom_core::config::Config;
use stockroom_core::tracing::LogFormat;
use stockroom_domain::defaults::SeedDefaults;

/// Inventory service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryConfig {
    /// Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Env var: `MAX_CONNECTIONS`.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Env var: `LOG_FORMAT`.
    #[serde(default)]
    pub log_format: LogFormat,
    /// Comma-separated override of the seeded location names. Env var: `SEED_LOCATIONS`.
    #[serde(default)]
    pub seed_locations: Option<Vec<String>>,
    /// Comma-separated override of the seeded label names. Env var: `SEED_LABELS`.
    #[serde(default)]
    pub seed_labels: Option<Vec<String>>,
}

fn default_max_connections() -> u32 {
    10
}

impl Config for InventoryConfig {}

impl InventoryConfig {
    /// Built-in lists, with each configured override replacing its list.
    pub fn seed_defaults(&self) -> SeedDefaults {
        let mut defaults = SeedDefaults::default();
        if let Some(locations) = &self.seed_locations {
            defaults.locations = locations.clone();
        }
        if let Some(labels) = &self.seed_labels {
            defaults.labels = labels.clone();
        }
        defaults
    }
}
