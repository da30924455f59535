//! Layered deployment configuration.
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults
//! 2. `campus-issues.toml` in the working directory
//! 3. Environment variables prefixed `CAMPUS_ISSUES_`, with `__` separating
//!    sections (`CAMPUS_ISSUES_NOTIFICATIONS__ADMIN_EMAIL` sets
//!    `notifications.admin_email`)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the optional configuration file.
pub const CONFIG_FILE: &str = "campus-issues.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "CAMPUS_ISSUES_";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or did not match the expected shape.
    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    /// A field holds an unusable value.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        /// Dotted path of the field.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Email addressing and provider settings.
    #[serde(default)]
    pub notifications: NotificationConfig,
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Record store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Email addressing and provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Administrator copied on every issue event.
    pub admin_email: String,
    /// Verified sender address.
    pub sender_email: String,
    /// Regional endpoint of the email provider.
    pub region: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            admin_email: "facilities-admin@campus.example".to_owned(),
            sender_email: "issues@campus.example".to_owned(),
            region: "us-east-1".to_owned(),
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_owned(),
        }
    }
}

/// Record store settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// `PostgreSQL` URL. Records are kept in memory when unset.
    pub database_url: Option<String>,
    /// Upper bound of the connection pool.
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            max_connections: 8,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `CAMPUS_ISSUES_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "campus_issues=info".to_owned(),
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from every source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source is malformed and
    /// [`ConfigError::InvalidValue`] when a required address is blank.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment()
            .extract::<Self>()
            .map_err(|err| ConfigError::from(Box::new(err)))?
            .validated()
    }

    /// Builds the provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.notifications.admin_email.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "notifications.admin_email",
                reason: "administrator address must not be empty",
            });
        }
        if self.notifications.sender_email.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "notifications.sender_email",
                reason: "sender address must not be empty",
            });
        }
        if self.store.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "store.max_connections",
                reason: "pool needs at least one connection",
            });
        }
        Ok(self)
    }
}
