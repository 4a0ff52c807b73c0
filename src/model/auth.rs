use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Response of the OAuth2 client-credentials token endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AuthResponse {
    /// Expiry of the token as seconds since the Unix epoch
    #[serde(default)]
    pub expires: i64,
    /// Lifetime of the token in seconds
    #[serde(default)]
    pub expires_in: i64,
    /// Grant that issued the token
    #[serde(default)]
    pub identifier: String,
    /// Token type, usually "Bearer"
    #[serde(default)]
    pub token_type: String,
    /// Bearer token to send with every request
    pub access_token: String,
}

impl AuthResponse {
    /// Expiry of the token as a UTC timestamp, if the server sent a valid one
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        if self.expires <= 0 {
            return None;
        }
        DateTime::from_timestamp(self.expires, 0)
    }
}
