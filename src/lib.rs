//! # epcc-client
//!
//! Asynchronous client for a commerce REST API protected by OAuth2
//! client-credentials authentication.
//!
//! ## Features
//!
//! - Exchanges a client id and secret for a bearer token
//! - Attaches the token to every resource call
//! - Retries `429`, `500`, `503` and `504` with exponential backoff and full
//!   jitter, bounded by a total time budget
//! - Fails fast on any other non-success status
//! - Typed services for currencies and products
//!
//! ## Example
//!
//! ```ignore
//! use epcc_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!
//!     let client = Client::from_env()?;
//!     client.authenticate().await?;
//!
//!     let currencies = client.get_all_currencies().await?;
//!     for currency in currencies.data {
//!         info!("{} {}", currency.code, currency.format);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `EPCC_CLIENT_ID` | OAuth2 client id | required |
//! | `EPCC_CLIENT_SECRET` | OAuth2 client secret | required |
//! | `EPCC_BASE_URL` | API base URL | `https://api.example.com/` |
//! | `EPCC_CLIENT_TIMEOUT_SECS` | Per-attempt HTTP timeout, fractional seconds allowed | `10` |
//! | `EPCC_RETRY_LIMIT_TIMEOUT_MS` | Total retry budget | `30000` |
//! | `LOGLEVEL` | Tracing level | `INFO` |

/// Resource models, service interfaces and their implementations
pub mod application;

/// Client-credentials authentication
pub mod auth;

/// Client that executes every request
pub mod client;

/// Configuration
pub mod config;

/// Constants
pub mod constants;

/// Error types
pub mod error;

/// Request execution and retry models
pub mod model;

/// Commonly used types and traits
pub mod prelude;

/// Utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
