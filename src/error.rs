/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the commerce API client
//!
//! Every failure is returned to the immediate caller. The taxonomy mirrors the
//! stages of a call:
//! - [`AuthError`] for the client-credentials exchange
//! - [`RequestError`] for resource calls that reached the server
//! - [`TransportError`] for calls that never got an HTTP status back
//! - [`ConfigError`] for invalid or missing configuration
//!
//! [`AppError`] wraps all of them and is what the client and the resource
//! services return.

use reqwest::StatusCode;
use std::fmt;
use std::time::Duration;

/// Failure of the OAuth2 client-credentials exchange
#[derive(Debug)]
pub enum AuthError {
    /// The token endpoint answered with anything other than 200
    UnexpectedStatus(StatusCode),
    /// The token endpoint answered 200 with an empty body
    EmptyBody,
    /// The token endpoint body was not the expected JSON document
    Parse(serde_json::Error),
    /// The token endpoint could not be reached
    Transport(reqwest::Error),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::UnexpectedStatus(status) => {
                write!(f, "error: unexpected status {status}")
            }
            AuthError::EmptyBody => write!(f, "authentication error"),
            AuthError::Parse(e) => write!(f, "authentication response parse error: {e}"),
            AuthError::Transport(e) => write!(f, "authentication transport error: {e}"),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Parse(e) => Some(e),
            AuthError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(e: serde_json::Error) -> Self {
        AuthError::Parse(e)
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        AuthError::Transport(e)
    }
}

/// Failure of a resource call that reached the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The server answered with a status that is neither a success nor retryable
    UnexpectedStatus(StatusCode),
    /// Every attempt within the retry budget returned a retryable status
    RetryTimeout,
    /// The caller supplied deadline elapsed before the call completed
    DeadlineExceeded,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::UnexpectedStatus(status) => {
                write!(f, "status code {} is not ok", status.as_u16())
            }
            RequestError::RetryTimeout => write!(f, "retry timeout error"),
            RequestError::DeadlineExceeded => write!(f, "deadline exceeded"),
        }
    }
}

impl std::error::Error for RequestError {}

/// Network level failure: DNS, refused connection, per-request timeout, broken body stream
#[derive(Debug)]
pub struct TransportError(pub reqwest::Error);

impl TransportError {
    /// Whether the transport gave up because the per-request timeout elapsed
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.0.is_timeout()
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport error: {}", self.0)
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Invalid or incomplete configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is absent or empty
    MissingEnvVar(&'static str),
    /// The base URL cannot be used to build request URLs
    InvalidBaseUrl(String),
    /// The per-request timeout would fail every attempt
    InvalidTimeout(Duration),
    /// The backoff factor is below 1 or not a finite number
    InvalidRetryFactor(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingEnvVar(name) => {
                write!(f, "required environment variable {name} not found")
            }
            ConfigError::InvalidBaseUrl(url) => write!(f, "invalid base url: {url}"),
            ConfigError::InvalidTimeout(timeout) => {
                write!(f, "invalid client timeout: {timeout:?}")
            }
            ConfigError::InvalidRetryFactor(factor) => {
                write!(f, "invalid retry factor: {factor}, must be a finite number >= 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Main error type returned by the client and the resource services
#[derive(Debug)]
pub enum AppError {
    /// Authentication failed
    Auth(AuthError),
    /// A resource call failed with a status or exhausted its retry budget
    Request(RequestError),
    /// The server could not be reached
    Transport(TransportError),
    /// Configuration is invalid
    Config(ConfigError),
    /// A payload could not be serialized or a response could not be decoded
    Json(serde_json::Error),
    /// Caller input was rejected before any network call
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Auth(e) => write!(f, "{e}"),
            AppError::Request(e) => write!(f, "{e}"),
            AppError::Transport(e) => write!(f, "{e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Auth(e) => Some(e),
            AppError::Request(e) => Some(e),
            AppError::Transport(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::InvalidInput(_) => None,
        }
    }
}

impl AppError {
    /// The HTTP status carried by the error, if the server answered at all
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Auth(AuthError::UnexpectedStatus(s)) => Some(*s),
            AppError::Request(RequestError::UnexpectedStatus(s)) => Some(*s),
            _ => None,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Auth(e)
    }
}

impl From<RequestError> for AppError {
    fn from(e: RequestError) -> Self {
        AppError::Request(e)
    }
}

impl From<TransportError> for AppError {
    fn from(e: TransportError) -> Self {
        AppError::Transport(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport(TransportError(e))
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

/// Result alias used across the crate
pub type EpccResult<T> = Result<T, AppError>;
