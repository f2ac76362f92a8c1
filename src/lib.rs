/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Tracking3 Client
//!
//! Request construction and transport layer for the Tracking3 core REST API.
//!
//! Given an HTTP method, a target URI, a [`Configuration`](application::config::Configuration),
//! an optional JSON body, an optional file attachment and optional header overrides,
//! the crate builds an authenticated request, runs it through a pluggable
//! [`Transport`](transport::Transport) and classifies the outcome.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tracking3_client::prelude::*;
//!
//! # fn main() -> Result<(), AppError> {
//! let configuration = Configuration::new("john@example.com", "s3cr37")?
//!     .with_access_token("my-access-token");
//! let mut executor = RequestExecutor::new(HttpTransport::new());
//!
//! let envelope = executor.do_request(
//!     Method::GET,
//!     "https://api.tracking3.de/v1/user/self",
//!     &configuration,
//!     None,
//!     None,
//!     None,
//! )?;
//! println!("{}: {}", envelope.status, envelope.body);
//! # Ok(())
//! # }
//! ```

/// Application level types: configuration
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Data model shared by the transport layer
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Header building, multipart encoding, classification and transports
pub mod transport;
/// Utilities: logging, environment helpers, identifiers, MIME sniffing
pub mod utils;

/// Library version, injected at build time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
