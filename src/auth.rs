/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication module for the commerce API
//!
//! Exchanges OAuth2 client credentials for a bearer token. A single attempt is
//! made per call; callers that want to retry authentication call it again.

use crate::config::Credentials;
use crate::constants::{ACCESS_TOKEN_PATH, GRANT_TYPE_CLIENT_CREDENTIALS};
use crate::error::AuthError;
use crate::model::auth::AuthResponse;
use crate::utils::join_url;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info};

/// Requests a bearer token with the client-credentials grant
///
/// Sends a form encoded `POST {base_url}/oauth/access_token` carrying
/// `client_id`, `client_secret` and `grant_type=client_credentials`.
///
/// # Arguments
/// * `http` - HTTP transport to send the request with
/// * `base_url` - Base URL of the API
/// * `credentials` - Client identifier and secret
///
/// # Returns
/// * `Ok(String)` - The access token
/// * `Err(AuthError)` - Non-200 status, empty body, malformed JSON or transport failure
pub async fn authenticate(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<String, AuthError> {
    let url = join_url(base_url, ACCESS_TOKEN_PATH);
    let form = [
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
        ("grant_type", GRANT_TYPE_CLIENT_CREDENTIALS),
    ];

    debug!("Sending token request to: {}", url);

    let response = http
        .post(&url)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .form(&form)
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        error!("Authentication failed with status {}", status);
        return Err(AuthError::UnexpectedStatus(status));
    }

    let body = response.bytes().await?;
    if body.is_empty() {
        error!("Authentication returned an empty body");
        return Err(AuthError::EmptyBody);
    }

    let auth: AuthResponse = serde_json::from_slice(&body)?;
    debug!(
        "Token type {} expires in {} seconds",
        auth.token_type, auth.expires_in
    );

    info!("authentication successful");
    Ok(auth.access_token)
}
