use serde::Deserialize;

use stockroom_core::config::Config;
use stockroom_core::tracing::LogFormat;

/// Auth service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Store connection URL (PostgreSQL in production). Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Session lifetime in seconds (default 7 days). Env var: `TOKEN_TTL_SECS`.
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u32,
    /// Connection pool size (default 10). Env var: `MAX_CONNECTIONS`.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Env var: `LOG_FORMAT`.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_token_ttl_secs() -> u32 {
    7 * 24 * 60 * 60
}

fn default_max_connections() -> u32 {
    10
}

impl Config for AuthConfig {}

impl AuthConfig {
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(i64::from(self.token_ttl_secs))
    }
}
