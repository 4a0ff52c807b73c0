use crate::common::{TOKEN, TOKEN_RESPONSE, client_with, fast_retry};
use epcc_client::prelude::*;
use mockito::Matcher;

#[tokio::test]
async fn test_authenticate_stores_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/oauth/access_token")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_header("accept", "application/json")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("client_id".into(), "client-id".into()),
            Matcher::UrlEncoded("client_secret".into(), "client-secret".into()),
            Matcher::UrlEncoded("grant_type".into(), "client_credentials".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TOKEN_RESPONSE)
        .expect(1)
        .create_async()
        .await;

    let client = client_with(&server.url(), fast_retry());
    client.authenticate().await.unwrap();

    assert_eq!(client.token().await.as_deref(), Some(TOKEN));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_authenticate_invalid_credentials() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/oauth/access_token")
        .with_status(403)
        .with_body(r#"{"errors":[{"status":403,"title":"Forbidden"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_with(&server.url(), fast_retry());
    client.set_token("previous").await;

    let err = client.authenticate().await.unwrap_err();
    assert_eq!(err.to_string(), "error: unexpected status 403 Forbidden");
    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    // A failed exchange leaves the old token in place
    assert_eq!(client.token().await.as_deref(), Some("previous"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_authenticate_empty_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/oauth/access_token")
        .with_status(200)
        .create_async()
        .await;

    let client = client_with(&server.url(), fast_retry());
    let err = client.authenticate().await.unwrap_err();

    assert!(matches!(err, AppError::Auth(AuthError::EmptyBody)));
    assert_eq!(client.token().await, None);
}

#[tokio::test]
async fn test_authenticate_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/oauth/access_token")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = client_with(&server.url(), fast_retry());
    let err = client.authenticate().await.unwrap_err();

    assert!(matches!(err, AppError::Auth(AuthError::Parse(_))));
}

#[tokio::test]
async fn test_authenticate_is_not_retried() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/oauth/access_token")
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let client = client_with(&server.url(), fast_retry());
    let err = client.authenticate().await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_authenticate_unreachable_server() {
    // Port 1 is reserved and refuses connections
    let client = client_with("http://127.0.0.1:1", fast_retry());
    let err = client.authenticate().await.unwrap_err();

    assert!(matches!(err, AppError::Auth(AuthError::Transport(_))));
    assert_eq!(client.token().await, None);
}
