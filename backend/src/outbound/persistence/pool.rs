//! bb8 pool of async Diesel PostgreSQL connections.
//!
//! Checkout goes through `diesel-async` directly, so repository calls never
//! block a runtime worker.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

const DEFAULT_MAX_SIZE: u32 = 10;
const DEFAULT_MIN_IDLE: u32 = 1;
const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(10);

/// Failures raised while building the pool or checking out a connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available in time, or the server refused one.
    #[error("database connection checkout failed: {message}")]
    Checkout { message: String },
    /// The pool could not be created.
    #[error("database pool could not be built: {message}")]
    Build { message: String },
}

impl PoolError {
    fn checkout(error: impl ToString) -> Self {
        Self::Checkout {
            message: error.to_string(),
        }
    }

    fn build(error: impl ToString) -> Self {
        Self::Build {
            message: error.to_string(),
        }
    }

    /// The underlying driver message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Checkout { message } | Self::Build { message } => message,
        }
    }
}

/// Pool sizing and database location.
///
/// ```
/// use std::time::Duration;
/// use dad_rental::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://localhost/dads")
///     .with_max_size(4)
///     .with_checkout_timeout(Duration::from_secs(2));
/// assert_eq!(config.max_size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    checkout_timeout: Duration,
}

impl PoolConfig {
    /// Defaults: ten connections, one kept idle, ten second checkout timeout.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_SIZE,
            min_idle: Some(DEFAULT_MIN_IDLE),
            checkout_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }

    /// Upper bound on open connections; at least one.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size.max(1);
        self.min_idle = self.min_idle.map(|idle| idle.min(self.max_size));
        self
    }

    /// How long a repository call waits for a free connection.
    #[must_use]
    pub fn with_checkout_timeout(mut self, timeout: Duration) -> Self {
        self.checkout_timeout = timeout;
        self
    }

    /// Connection string.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Upper bound on open connections.
    #[must_use]
    pub fn max_size(&self) -> u32 {
        self.max_size
    }
}

/// Shared handle to the pool. Clones share connections.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool and open the idle connections.
    ///
    /// # Errors
    /// [`PoolError::Build`] when the URL is invalid or the server is
    /// unreachable.
    pub async fn connect(config: &PoolConfig) -> Result<Self, PoolError> {
        let manager =
            AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url.as_str());
        let inner = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.checkout_timeout)
            .build(manager)
            .await
            .map_err(PoolError::build)?;
        Ok(Self { inner })
    }

    /// Check out a connection.
    ///
    /// # Errors
    /// [`PoolError::Checkout`] when none frees up within the timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner.get().await.map_err(PoolError::checkout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_are_small() {
        let config = PoolConfig::new("postgres://localhost/dads");
        assert_eq!(config.database_url(), "postgres://localhost/dads");
        assert_eq!(config.max_size(), DEFAULT_MAX_SIZE);
        assert_eq!(config.min_idle, Some(DEFAULT_MIN_IDLE));
        assert_eq!(config.checkout_timeout, DEFAULT_CHECKOUT_TIMEOUT);
    }

    #[rstest]
    #[case(0, 1, Some(1))]
    #[case(4, 4, Some(1))]
    fn max_size_is_clamped(#[case] requested: u32, #[case] max: u32, #[case] idle: Option<u32>) {
        let config = PoolConfig::new("postgres://localhost/dads").with_max_size(requested);
        assert_eq!(config.max_size(), max);
        assert_eq!(config.min_idle, idle);
    }

    #[rstest]
    fn errors_expose_driver_message() {
        let error = PoolError::checkout("timed out");
        assert_eq!(error.message(), "timed out");
        assert!(error.to_string().contains("checkout failed"));
    }
}
