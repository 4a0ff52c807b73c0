use epcc_client::client::Client;
use epcc_client::config::{Config, Credentials};
use epcc_client::model::retry::RetryStrategy;
use std::time::Duration;
use tokio_test::block_on;

fn create_test_client() -> Client {
    let config = Config::new(Credentials::new("client-id", "client-secret"))
        .with_base_url("http://localhost:9999/")
        .with_retry_limit(Duration::from_millis(500));
    Client::new(config).unwrap()
}

#[test]
fn test_client_exposes_configuration() {
    let client = create_test_client();
    assert_eq!(client.base_url(), "http://localhost:9999/");
    assert_eq!(client.retry_strategy().limit, Duration::from_millis(500));
    assert_eq!(
        client.retry_strategy().initial,
        RetryStrategy::default().initial
    );
}

#[test]
fn test_token_roundtrip() {
    let client = create_test_client();
    block_on(async {
        assert!(client.token().await.is_none());
        client.set_token("token-1").await;
        assert_eq!(client.token().await.as_deref(), Some("token-1"));
    });
}

#[test]
fn test_clone_shares_token_updates() {
    let client = create_test_client();
    let other = client.clone();
    block_on(async {
        other.set_token("from-clone").await;
        assert_eq!(client.token().await.as_deref(), Some("from-clone"));
        client.clear_token().await;
        assert!(other.token().await.is_none());
    });
}
