use crate::error::AppError;
use url::Url;

/// Throwaway origin used to percent-encode path segments
const SEGMENT_ORIGIN: &str = "http://localhost/";

/// Joins a base URL and a path with exactly one `/` between them
///
/// # Examples
/// ```
/// use epcc_client::utils::join_url;
/// assert_eq!(
///     join_url("https://api.example.com/", "/v2/currencies"),
///     "https://api.example.com/v2/currencies"
/// );
/// ```
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Whether `path` carries its own scheme and would leave the configured host
#[must_use]
pub fn is_absolute_url(path: &str) -> bool {
    Url::parse(path.trim()).is_ok()
}

/// Builds `{collection}/{id}` with `id` percent-encoded as a single segment
///
/// ```
/// use epcc_client::utils::resource_path;
/// assert_eq!(
///     resource_path("/v2/currencies", "a/b?x").unwrap(),
///     "/v2/currencies/a%2Fb%3Fx"
/// );
/// ```
///
/// # Errors
/// * `AppError::InvalidInput` - If `id` is blank, `.` or `..`
pub fn resource_path(collection: &str, id: &str) -> Result<String, AppError> {
    if id.trim().is_empty() || id == "." || id == ".." {
        return Err(AppError::InvalidInput(format!("invalid resource id {id:?}")));
    }

    let mut url =
        Url::parse(SEGMENT_ORIGIN).map_err(|e| AppError::InvalidInput(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| AppError::InvalidInput(format!("cannot build path for {id:?}")))?
        .clear()
        .extend(collection.split('/').filter(|s| !s.is_empty()))
        .push(id);

    Ok(url.path().to_string())
}
