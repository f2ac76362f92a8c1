/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Typed access to `T3_*` environment variables.
//!
//! A value made only of whitespace counts as unset, so a blank entry in a
//! `.env` file behaves like a missing one. Other values are passed on as is.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Value of `env_var`, `None` when unset or blank
fn read_env(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Parses `env_var`, falling back to `default` when it is unset, blank or
/// does not parse. Parse failures are logged.
///
/// # Example
///
/// ```
/// use tracking3_client::utils::config::get_env_or_default;
///
/// let timeout: u64 = get_env_or_default("T3_DOC_TIMEOUT_UNSET", 60);
/// assert_eq!(timeout, 60);
/// ```
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    T::Err: Display,
{
    get_env_or_none(env_var).unwrap_or(default)
}

/// Parses `env_var`; `None` when it is unset, blank or does not parse
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    T::Err: Display,
{
    let value = read_env(env_var)?;
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring {env_var}={value:?}: {e}");
            None
        }
    }
}

/// Reads a boolean switch such as `T3_DO_AUTO_LOGIN`.
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off` in any case.
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    let Some(value) = read_env(env_var) else {
        return default;
    };
    parse_flag(value.trim()).unwrap_or_else(|| {
        warn!("Ignoring {env_var}={value:?}: not a boolean switch");
        default
    })
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
