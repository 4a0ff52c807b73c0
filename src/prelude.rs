/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Prelude
//!
//! Brings the commonly used types and traits into scope with a single import.
//!
//! ```rust
//! use epcc_client::prelude::*;
//!
//! let config = Config::new(Credentials::new("client-id", "client-secret"))
//!     .with_base_url("https://api.example.com");
//! let client = Client::new(config).unwrap();
//! assert_eq!(client.base_url(), "https://api.example.com");
//! ```

// ============================================================================
// CLIENT AND CONFIGURATION
// ============================================================================

pub use crate::client::Client;
pub use crate::config::{Config, Credentials, RestApiConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::{AppError, AuthError, ConfigError, EpccResult, RequestError, TransportError};

// ============================================================================
// REQUEST EXECUTION
// ============================================================================

pub use crate::auth::authenticate;
pub use crate::model::auth::AuthResponse;
pub use crate::model::http::{RequestOutcome, StatusClass, classify, make_http_request};
pub use crate::model::retry::{RetryStrategy, RetryTimer};

// ============================================================================
// SERVICES
// ============================================================================

pub use crate::application::services::{CurrencyService, ProductService};

// ============================================================================
// MODELS
// ============================================================================

pub use crate::application::models::{
    CurrenciesData, Currency, CurrencyData, CurrencyMeta, Data, Links, Measurement, Product,
    ProductData, ProductMeta, ProductPrice, ProductRelationships, ProductStock, ProductVariation,
    ProductVariationMatrix, ProductVariationOption, ProductWeight, ProductsData, Relationship,
    RelationshipItem, RelationshipItems, Timestamps,
};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::constants::*;
pub use crate::utils::logger::setup_logger;
pub use crate::utils::url::{is_absolute_url, join_url, resource_path};

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::{Method, StatusCode};
pub use serde::{Deserialize, Serialize};
pub use tokio;
pub use tracing::{debug, error, info, warn};
