/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error types
//!
//! [`RequestError`] is the only failure `do_request` can produce. HTTP level
//! failures (4xx/5xx) are not errors at this layer, they come back as regular
//! envelopes.

use crate::constants::{MISSING_EMAIL_CODE, MISSING_PASSWORD_CODE, TIMEOUT_ERROR_CODE};
use thiserror::Error;

/// Transport level failure of a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// No response was received within the configured timeout
    #[error("Request exceeded timeout of {timeout_secs}")]
    Timeout {
        /// Configured timeout in seconds
        timeout_secs: u64,
    },
    /// Any other transport failure: DNS, refused connection, TLS, reset...
    #[error("{message}")]
    Connection {
        /// Native transport error code
        code: u32,
        /// Native transport error message
        message: String,
    },
}

impl RequestError {
    /// Stable code identifying the error.
    ///
    /// Timeouts always report `1592833821`, connection errors report the
    /// transport's own code.
    #[must_use]
    pub fn code(&self) -> u64 {
        match self {
            RequestError::Timeout { .. } => TIMEOUT_ERROR_CODE,
            RequestError::Connection { code, .. } => u64::from(*code),
        }
    }

    /// Returns true for [`RequestError::Timeout`]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, RequestError::Timeout { .. })
    }
}

/// Invalid configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No password was supplied
    #[error("missing password")]
    MissingPassword,
    /// No email was supplied
    #[error("missing email")]
    MissingEmail,
}

impl ConfigError {
    /// Stable code identifying the error
    #[must_use]
    pub fn code(&self) -> u64 {
        match self {
            ConfigError::MissingPassword => MISSING_PASSWORD_CODE,
            ConfigError::MissingEmail => MISSING_EMAIL_CODE,
        }
    }
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure
    #[error("request error: {0}")]
    Request(#[from] RequestError),
    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// I/O failure, e.g. while reading an attachment
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
