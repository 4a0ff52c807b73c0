use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CLIENT_TIMEOUT_SECS, DEFAULT_RETRY_LIMIT_MS, ENV_BASE_URL,
    ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_CLIENT_TIMEOUT_SECS, ENV_RETRY_LIMIT_MS,
};
use crate::error::ConfigError;
use crate::model::retry::RetryStrategy;
use crate::utils::config::{get_env_or_none, get_env_required};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;
use url::Url;

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// OAuth2 client credentials for the commerce API
pub struct Credentials {
    /// Client identifier issued for the store
    pub client_id: String,
    /// Client secret issued for the store
    pub client_secret: String,
}

impl Credentials {
    /// Creates a new credentials pair
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the commerce REST API
    pub base_url: String,
    /// Timeout for a single HTTP attempt
    pub timeout: Duration,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_CLIENT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Main configuration for the commerce API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Retry strategy applied to every resource request
    pub retry: RetryStrategy,
}

impl Config {
    /// Creates a configuration with default endpoint, timeout and retry settings
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            rest_api: RestApiConfig::default(),
            retry: RetryStrategy::default(),
        }
    }

    /// Builds the configuration from the environment
    ///
    /// A `.env` file is loaded first when present. `EPCC_CLIENT_ID` and
    /// `EPCC_CLIENT_SECRET` are required; the base URL, request timeout and
    /// retry budget fall back to their defaults.
    ///
    /// # Errors
    /// * `ConfigError::MissingEnvVar` - If a required credential is absent or blank
    /// * `ConfigError::InvalidBaseUrl` - If the base URL is not an http(s) URL
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let client_id =
            get_env_required(ENV_CLIENT_ID).ok_or(ConfigError::MissingEnvVar(ENV_CLIENT_ID))?;
        let client_secret = get_env_required(ENV_CLIENT_SECRET)
            .ok_or(ConfigError::MissingEnvVar(ENV_CLIENT_SECRET))?;

        let base_url = get_env_or_none::<String>(ENV_BASE_URL)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        // Negative or overflowing values collapse to zero and fail validation
        let timeout = get_env_or_none::<f64>(ENV_CLIENT_TIMEOUT_SECS)
            .map(|secs| Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO))
            .unwrap_or(Duration::from_secs(DEFAULT_CLIENT_TIMEOUT_SECS));
        let limit_ms =
            get_env_or_none::<u64>(ENV_RETRY_LIMIT_MS).unwrap_or(DEFAULT_RETRY_LIMIT_MS);

        let config = Self {
            credentials: Credentials::new(client_id, client_secret),
            rest_api: RestApiConfig { base_url, timeout },
            retry: RetryStrategy::default().with_limit(Duration::from_millis(limit_ms)),
        };
        config.validate()?;
        Ok(config)
    }

    /// Overrides the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Overrides the per-request timeout
    #[must_use]
    pub fn with_client_timeout(mut self, timeout: Duration) -> Self {
        self.rest_api.timeout = timeout;
        self
    }

    /// Overrides the total retry budget
    #[must_use]
    pub fn with_retry_limit(mut self, limit: Duration) -> Self {
        self.retry = self.retry.with_limit(limit);
        self
    }

    /// Overrides the whole retry strategy
    #[must_use]
    pub fn with_retry_strategy(mut self, retry: RetryStrategy) -> Self {
        self.retry = retry;
        self
    }

    /// Per-request timeout applied by the HTTP transport
    #[must_use]
    pub fn client_timeout(&self) -> Duration {
        self.rest_api.timeout
    }

    /// Checks that the configuration can be used to build a client
    ///
    /// # Errors
    /// * `ConfigError::MissingEnvVar` - If a credential is blank
    /// * `ConfigError::InvalidBaseUrl` - If the base URL is not an http(s) URL
    /// * `ConfigError::InvalidTimeout` - If the per-request timeout is zero
    /// * `ConfigError::InvalidRetryFactor` - If the backoff factor is below 1 or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.credentials.client_id.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar(ENV_CLIENT_ID));
        }
        if self.credentials.client_secret.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar(ENV_CLIENT_SECRET));
        }
        let is_http = Url::parse(self.rest_api.base_url.trim())
            .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .unwrap_or(false);
        if !is_http {
            return Err(ConfigError::InvalidBaseUrl(self.rest_api.base_url.clone()));
        }
        if self.rest_api.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout(self.rest_api.timeout));
        }
        self.retry.validate()
    }
}
