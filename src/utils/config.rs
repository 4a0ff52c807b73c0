/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Reads and parses an optional environment variable
///
/// Unset and blank variables yield `None`. A value that does not parse is
/// logged and also yields `None`, so the caller falls back to its default.
///
/// # Arguments
/// * `env_var` - Name of the environment variable
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Display,
{
    let raw = env::var(env_var).ok()?;
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", env_var, value, e);
            None
        }
    }
}

/// Gets a required, non-blank string environment variable
///
/// Leading and trailing whitespace is trimmed. Returns `None` when the variable
/// is unset or blank so the caller can report which one is missing.
pub fn get_env_required(env_var: &str) -> Option<String> {
    get_env_or_none::<String>(env_var)
}
