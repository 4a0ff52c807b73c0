// Common utilities for integration tests

use epcc_client::prelude::*;
use std::time::Duration;

pub const TOKEN: &str = "f64e7f07b10f710a15e4f41d670f0d7d7d4e415d";

pub const TOKEN_RESPONSE: &str = r#"{
    "expires":1598636721,
    "access_token":"f64e7f07b10f710a15e4f41d670f0d7d7d4e415d",
    "identifier":"client_credentials",
    "expires_in":3600,
    "token_type":"Bearer"
}"#;

/// Retry strategy with a deterministic schedule and a one second budget
pub fn fast_retry() -> RetryStrategy {
    RetryStrategy::new(
        Duration::from_millis(10),
        1.5,
        false,
        Duration::from_secs(1),
    )
}

/// Creates a client pointed at the mock server with the given retry strategy
pub fn client_with(url: &str, retry: RetryStrategy) -> Client {
    setup_logger();
    let config = Config::new(Credentials::new("client-id", "client-secret"))
        .with_base_url(url)
        .with_retry_strategy(retry);
    Client::new(config).expect("valid test config")
}

/// Creates a client that already holds the test token
pub async fn authorised_client(url: &str) -> Client {
    let client = client_with(url, fast_retry());
    client.set_token(TOKEN).await;
    client
}
