/// Default base URL of the commerce API when none is configured
pub const DEFAULT_BASE_URL: &str = "https://api.example.com/";
/// Path of the OAuth2 token endpoint, relative to the base URL
pub const ACCESS_TOKEN_PATH: &str = "/oauth/access_token";
/// Grant type sent with every token request
pub const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";
/// Default per-request timeout in seconds applied by the HTTP transport
pub const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 10;
/// Default total time budget in milliseconds for retrying a single request
pub const DEFAULT_RETRY_LIMIT_MS: u64 = 30_000;
/// Delay in milliseconds before the second attempt of a request
pub const DEFAULT_RETRY_INITIAL_DELAY_MS: u64 = 10;
/// Growth factor applied to the retry delay after every attempt
pub const DEFAULT_RETRY_FACTOR: f64 = 1.5;
/// User agent string used in HTTP requests to identify this client to the API
pub const USER_AGENT: &str = concat!("epcc-client/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the OAuth2 client identifier
pub const ENV_CLIENT_ID: &str = "EPCC_CLIENT_ID";
/// Environment variable holding the OAuth2 client secret
pub const ENV_CLIENT_SECRET: &str = "EPCC_CLIENT_SECRET";
/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "EPCC_BASE_URL";
/// Environment variable overriding the per-request timeout, in seconds
pub const ENV_CLIENT_TIMEOUT_SECS: &str = "EPCC_CLIENT_TIMEOUT_SECS";
/// Environment variable overriding the retry budget, in milliseconds
pub const ENV_RETRY_LIMIT_MS: &str = "EPCC_RETRY_LIMIT_TIMEOUT_MS";
