/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the commerce API
//!
//! This module provides the client that every resource service goes through:
//! - Client-credentials authentication, storing the bearer token
//! - Request construction against the configured base URL
//! - Retry with exponential backoff on transient statuses
//! - Status to result mapping
//!
//! # Example
//! ```ignore
//! use epcc_client::client::Client;
//! use epcc_client::config::Config;
//!
//! let config = Config::from_env()?;
//! let client = Client::new(config)?;
//! client.authenticate().await?;
//!
//! let body = client.do_request(Method::GET, "/v2/currencies", None).await?;
//! ```

use crate::auth::authenticate;
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::{AppError, EpccResult, RequestError};
use crate::model::http::make_http_request;
use crate::model::retry::RetryStrategy;
use crate::utils::{is_absolute_url, join_url};
use reqwest::{Client as HttpClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Client for the commerce API
///
/// Holds the HTTP transport, the retry strategy and the bearer token. The
/// token is set by [`Client::authenticate`] and attached to every request until
/// it is replaced. It is never refreshed automatically. Cloning the client is
/// cheap and clones share the token.
#[derive(Clone)]
pub struct Client {
    http_client: HttpClient,
    config: Arc<Config>,
    token: Arc<RwLock<Option<String>>>,
}

impl Client {
    /// Creates a new client without authenticating
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to authenticate
    /// * `Err(AppError)` - If the configuration is invalid or the transport cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(config.client_timeout())
            .build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Creates a client from the environment
    ///
    /// See [`Config::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::from_env()?)
    }

    /// Exchanges the configured credentials for a bearer token and stores it
    ///
    /// On failure the previously stored token, if any, is left untouched.
    ///
    /// # Returns
    /// * `Ok(())` - If the token was obtained
    /// * `Err(AppError::Auth)` - If the exchange failed
    pub async fn authenticate(&self) -> Result<(), AppError> {
        let token = authenticate(
            &self.http_client,
            &self.config.rest_api.base_url,
            &self.config.credentials,
        )
        .await?;

        self.set_token(token).await;
        Ok(())
    }

    /// Replaces the bearer token
    pub async fn set_token(&self, token: impl Into<String>) {
        let mut guard = self.token.write().await;
        *guard = Some(token.into());
    }

    /// Returns the current bearer token, if one has been set
    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Forgets the current bearer token
    pub async fn clear_token(&self) {
        let mut guard = self.token.write().await;
        *guard = None;
    }

    /// Base URL requests are resolved against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.rest_api.base_url
    }

    /// Retry strategy applied to resource requests
    #[must_use]
    pub fn retry_strategy(&self) -> RetryStrategy {
        self.config.retry
    }

    /// Gets a reference to the configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Executes a request under the retry strategy
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API path, resolved against the base URL; absolute URLs are rejected
    /// * `body` - Optional JSON body
    ///
    /// # Returns
    /// * `Ok(Some(bytes))` - The server answered 200 or 201
    /// * `Ok(None)` - The server answered 204
    /// * `Err(AppError)` - Invalid path, transport failure, terminal status or retry timeout
    pub async fn do_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> EpccResult<Option<Vec<u8>>> {
        if is_absolute_url(path) {
            warn!("Refusing to send credentials to absolute URL {}", path);
            return Err(AppError::InvalidInput(format!(
                "path must be relative to the base url: {path}"
            )));
        }
        let url = join_url(&self.config.rest_api.base_url, path);
        let token = self.token().await.unwrap_or_default();
        let authorization = format!("Bearer {token}");

        let mut headers = vec![
            ("Accept", "application/json"),
            ("Authorization", authorization.as_str()),
        ];
        if body.is_some() {
            headers.push(("Content-Type", "application/json"));
        }

        make_http_request(
            &self.http_client,
            method,
            &url,
            headers,
            body.as_deref(),
            self.config.retry,
        )
        .await
    }

    /// Executes a request like [`Client::do_request`], bounded by a deadline
    ///
    /// # Returns
    /// * `Err(AppError::Request(RequestError::DeadlineExceeded))` - If the deadline passes first
    pub async fn do_request_until(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        deadline: Instant,
    ) -> EpccResult<Option<Vec<u8>>> {
        match tokio::time::timeout_at(deadline, self.do_request(method.clone(), path, body)).await
        {
            Ok(result) => result,
            Err(_) => {
                warn!("{} {} cancelled at deadline", method, path);
                Err(RequestError::DeadlineExceeded.into())
            }
        }
    }

    /// Sends a JSON body and decodes the JSON response
    ///
    /// Fails with `AppError::Json` when the server answers 204 where a body is
    /// expected.
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> EpccResult<T> {
        let payload = body.map(serde_json::to_vec).transpose()?;
        let response = self.do_request(method, path, payload).await?;
        self.parse_response(response)
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> EpccResult<T> {
        self.request(Method::GET, path, None::<&()>).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> EpccResult<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a PUT request
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> EpccResult<T> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a DELETE request, discarding any response body
    pub async fn delete(&self, path: &str) -> EpccResult<()> {
        self.do_request(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// Parses response
    fn parse_response<T: DeserializeOwned>(&self, response: Option<Vec<u8>>) -> EpccResult<T> {
        let bytes = response.unwrap_or_default();
        debug!("Decoding {} byte response", bytes.len());
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.rest_api.base_url)
            .field("retry", &self.config.retry)
            .finish_non_exhaustive()
    }
}
