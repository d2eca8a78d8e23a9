//! Environment-driven configuration for the persistence layer.

use thiserror::Error;

/// Environment variable holding the `PostgreSQL` connection URL.
pub const DATABASE_URL_VAR: &str = "CASEWORK_DATABASE_URL";

/// Environment variable holding the maximum connection pool size.
pub const DATABASE_POOL_SIZE_VAR: &str = "CASEWORK_DATABASE_POOL_SIZE";

/// Pool size used when [`DATABASE_POOL_SIZE_VAR`] is unset.
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable was unset or blank.
    #[error("missing required environment variable {0}")]
    MissingVariable(&'static str),
    /// The pool size was not a positive integer.
    #[error("{DATABASE_POOL_SIZE_VAR} must be a positive integer, got {0:?}")]
    InvalidPoolSize(String),
}

/// Connection settings for the `PostgreSQL` project store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    database_url: String,
    pool_size: u32,
}

impl DatabaseConfig {
    /// Creates a configuration with the default pool size.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }

    /// Overrides the maximum pool size.
    #[must_use]
    pub const fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`DatabaseConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// a variable or `None` when it is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] when the database URL is unset
    /// or blank, and [`ConfigError::InvalidPoolSize`] when the pool size is
    /// not a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup(DATABASE_URL_VAR)
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingVariable(DATABASE_URL_VAR))?;
        let pool_size = match lookup(DATABASE_POOL_SIZE_VAR) {
            Some(raw) => parse_pool_size(&raw)?,
            None => DEFAULT_POOL_SIZE,
        };
        Ok(Self {
            database_url,
            pool_size,
        })
    }

    /// Returns the connection URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the maximum pool size.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|size| *size > 0)
        .ok_or_else(|| ConfigError::InvalidPoolSize(raw.to_owned()))
}
