use epcc_client::error::{AppError, AuthError, ConfigError, RequestError};
use reqwest::StatusCode;

#[test]
fn test_auth_error_display() {
    let err = AuthError::UnexpectedStatus(StatusCode::FORBIDDEN);
    assert_eq!(err.to_string(), "error: unexpected status 403 Forbidden");

    assert_eq!(AuthError::EmptyBody.to_string(), "authentication error");
}

#[test]
fn test_request_error_display() {
    let err = RequestError::UnexpectedStatus(StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "status code 400 is not ok");

    let err = RequestError::UnexpectedStatus(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err.to_string(), "status code 422 is not ok");

    assert_eq!(RequestError::RetryTimeout.to_string(), "retry timeout error");
    assert_eq!(RequestError::DeadlineExceeded.to_string(), "deadline exceeded");
}

#[test]
fn test_app_error_wraps_without_changing_message() {
    let err: AppError = RequestError::RetryTimeout.into();
    assert_eq!(err.to_string(), "retry timeout error");

    let err: AppError = AuthError::UnexpectedStatus(StatusCode::FORBIDDEN).into();
    assert_eq!(err.to_string(), "error: unexpected status 403 Forbidden");

    let err = AppError::InvalidInput("error productID is required".to_string());
    assert_eq!(err.to_string(), "error productID is required");
}

#[test]
fn test_app_error_status() {
    let err: AppError = RequestError::UnexpectedStatus(StatusCode::NOT_FOUND).into();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

    let err: AppError = AuthError::UnexpectedStatus(StatusCode::UNAUTHORIZED).into();
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));

    let err: AppError = RequestError::RetryTimeout.into();
    assert_eq!(err.status(), None);
}

#[test]
fn test_json_error_conversion() {
    let parse = serde_json::from_slice::<serde_json::Value>(b"").unwrap_err();
    let err: AppError = parse.into();
    assert!(matches!(err, AppError::Json(_)));
    assert!(err.to_string().starts_with("json error"));
}

#[test]
fn test_config_error_conversion() {
    let err: AppError = ConfigError::MissingEnvVar("EPCC_CLIENT_ID").into();
    assert!(matches!(err, AppError::Config(_)));
    assert!(err.to_string().contains("EPCC_CLIENT_ID"));
}
