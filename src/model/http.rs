/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::{AppError, RequestError, TransportError};
use crate::model::retry::RetryStrategy;
use reqwest::{Client, Method, Response, StatusCode};
use tracing::{debug, error, warn};

/// How a response status is handled by the request loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 200 or 201, the body is returned
    Success,
    /// 204, nothing to read
    Empty,
    /// 429, 500, 503 or 504, try again in the next slot
    Retryable,
    /// Anything else, fail immediately
    Terminal,
}

/// Classifies a response status for the request loop
#[must_use]
pub fn classify(status: StatusCode) -> StatusClass {
    match status {
        StatusCode::OK | StatusCode::CREATED => StatusClass::Success,
        StatusCode::NO_CONTENT => StatusClass::Empty,
        StatusCode::TOO_MANY_REQUESTS
        | StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => StatusClass::Retryable,
        _ => StatusClass::Terminal,
    }
}

/// Result of a single attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Success with the full response body
    Success(Vec<u8>),
    /// Success without a body
    Empty,
    /// Transient failure, eligible for another attempt
    RetryableFailure(StatusCode),
    /// Failure that no retry can fix
    TerminalFailure(StatusCode),
}

impl RequestOutcome {
    /// Reads a response into an outcome, buffering the body on success
    ///
    /// # Errors
    /// * `TransportError` - If the body cannot be read
    pub async fn from_response(response: Response) -> Result<Self, TransportError> {
        let status = response.status();
        match classify(status) {
            StatusClass::Success => {
                let body = response.bytes().await.map_err(TransportError)?;
                Ok(RequestOutcome::Success(body.to_vec()))
            }
            StatusClass::Empty => Ok(RequestOutcome::Empty),
            StatusClass::Retryable => Ok(RequestOutcome::RetryableFailure(status)),
            StatusClass::Terminal => Ok(RequestOutcome::TerminalFailure(status)),
        }
    }
}

/// Sends a request under a retry strategy and maps the final status to a result
///
/// Transport failures are returned immediately and never retried. Retryable
/// statuses are attempted again until the strategy runs out of time, after
/// which the call fails with `RequestError::RetryTimeout`.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method (GET, POST, PUT, DELETE, etc.)
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional raw request body, resent on every attempt
/// * `strategy` - Backoff strategy and time budget
///
/// # Returns
///
/// * `Ok(Some(body))` - The server answered 200 or 201
/// * `Ok(None)` - The server answered 204
/// * `Err(AppError)` - Transport failure, terminal status or retry timeout
///
/// # Example
///
/// ```ignore
/// use epcc_client::model::http::make_http_request;
/// use epcc_client::model::retry::RetryStrategy;
/// use reqwest::{Client, Method};
///
/// let client = Client::new();
/// let headers = vec![("Authorization", "Bearer token")];
///
/// let body = make_http_request(
///     &client,
///     Method::GET,
///     "https://api.example.com/v2/currencies",
///     headers,
///     None,
///     RetryStrategy::default(),
/// ).await?;
/// ```
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: Option<&[u8]>,
    strategy: RetryStrategy,
) -> Result<Option<Vec<u8>>, AppError> {
    let mut timer = strategy.start();

    while let Some(delay) = timer.next_delay() {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        debug!("{} {} (attempt {})", method, url, timer.attempts());

        let mut request = client.request(method.clone(), url);
        for (name, value) in &headers {
            request = request.header(*name, *value);
        }
        if let Some(b) = body {
            request = request.body(b.to_vec());
        }

        let response = request.send().await.map_err(TransportError)?;
        let status = response.status();
        debug!("Response status: {}", status);

        match RequestOutcome::from_response(response).await? {
            RequestOutcome::Success(bytes) => return Ok(Some(bytes)),
            RequestOutcome::Empty => return Ok(None),
            RequestOutcome::RetryableFailure(status) => {
                warn!(
                    "{} {} returned {} (attempt {}, {:?} elapsed), retrying",
                    method,
                    url,
                    status,
                    timer.attempts(),
                    timer.elapsed()
                );
            }
            RequestOutcome::TerminalFailure(status) => {
                error!("{} {} failed with status {}", method, url, status);
                return Err(RequestError::UnexpectedStatus(status).into());
            }
        }
    }

    error!(
        "{} {} gave up after {} attempts in {:?}",
        method,
        url,
        timer.attempts(),
        timer.elapsed()
    );
    Err(RequestError::RetryTimeout.into())
}
