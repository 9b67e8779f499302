//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from CLI flags and `STUDENTS_*` environment variables. Every
//! field is optional on input; the accessors below apply defaults and turn
//! raw strings into typed values.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;

use crate::domain::{SharedSecret, SharedSecretError};
use crate::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
/// Token accepted by debug builds when none is configured.
pub const DEV_AUTH_TOKEN: &str = "123";

/// Errors raised while turning settings into runtime values.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        /// Configured value.
        value: String,
        /// Parser failure.
        source: std::net::AddrParseError,
    },
    /// Release builds refuse to start without a configured token.
    #[error("STUDENTS_AUTH_TOKEN must be set")]
    MissingAuthToken,
    /// The configured token is unusable.
    #[error("invalid auth token: {0}")]
    InvalidAuthToken(#[from] SharedSecretError),
}

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STUDENTS")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without it the server keeps records in memory.
    pub database_url: Option<String>,
    /// Shared secret expected in the `Authorization` header.
    pub auth_token: Option<String>,
    /// Apply pending migrations before serving.
    pub run_migrations: Option<bool>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl AppSettings {
    /// Parsed listen address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                source,
            })
    }

    /// Whether pending migrations run at startup. Defaults to `true`.
    #[must_use]
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Pool configuration when a database is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url.as_ref().map(|url| {
            PoolConfig::new(url.as_str())
                .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE))
        })
    }

    /// Shared secret guarding mutating endpoints.
    ///
    /// Debug builds fall back to [`DEV_AUTH_TOKEN`] with a warning; release
    /// builds require an explicit token.
    pub fn shared_secret(&self) -> Result<SharedSecret, SettingsError> {
        match self.auth_token.as_deref() {
            Some(token) => Ok(SharedSecret::new(token)?),
            None if cfg!(debug_assertions) => {
                warn!("STUDENTS_AUTH_TOKEN not set; using development token");
                Ok(SharedSecret::new(DEV_AUTH_TOKEN)?)
            }
            None => Err(SettingsError::MissingAuthToken),
        }
    }
}
