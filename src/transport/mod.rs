/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Request construction and transport
//!
//! [`RequestExecutor`](executor::RequestExecutor) glues the pieces together:
//! [`HeaderBuilder`](headers::HeaderBuilder) for the header set,
//! [`encode_multipart`](multipart::encode_multipart) when a file is attached,
//! a [`Transport`] for the I/O and [`classify`](classifier::classify) for the
//! outcome.

/// Maps transport outcomes to envelopes or typed errors
pub mod classifier;
/// Orchestrates a request from configuration to envelope
pub mod executor;
/// Default and authenticated headers
pub mod headers;
/// `reqwest` backed transport
pub mod http_transport;
/// `multipart/form-data` encoding
pub mod multipart;

use crate::model::http::{RequestBody, TransportOutcome};
use reqwest::Method;

/// Option set on a transport before execution
#[derive(Debug, Clone, PartialEq)]
pub enum TransportOption {
    /// Request method
    Method(Method),
    /// Header lines, each rendered as `Name: value`
    Headers(Vec<String>),
    /// Timeout ceiling in seconds, `0` means no timeout
    Timeout(u64),
    /// Target URI
    Url(String),
    /// Request body
    Body(RequestBody),
}

/// A single HTTP session
///
/// Options are set one by one, then the request is executed synchronously and
/// its metadata read back. `close` releases the session; a transport is not
/// meant to serve concurrent requests.
pub trait Transport {
    /// Sets a request option
    fn set_option(&mut self, option: TransportOption);

    /// Executes the request, blocking until a response arrives or the timeout
    /// elapses. Returns the raw response body, empty on failure.
    fn execute(&mut self) -> String;

    /// HTTP status of the last execution, `0` when nothing was received
    fn status(&self) -> u16;

    /// Native error code of the last execution, `0` on success
    fn error_code(&self) -> u32;

    /// Native error message of the last execution, empty on success
    fn error_message(&self) -> String;

    /// Releases the session
    fn close(&mut self);

    /// Executes the request and collects the outcome metadata
    fn perform(&mut self) -> TransportOutcome {
        let response = self.execute();
        TransportOutcome {
            response,
            status: self.status(),
            error_code: self.error_code(),
            error_message: self.error_message(),
        }
    }
}

/// Transport error codes, compatible with the libcurl code space
pub mod codes {
    /// No error
    pub const OK: u32 = 0;
    /// The URL or request was malformed
    pub const URL_MALFORMAT: u32 = 3;
    /// Could not connect to the host
    pub const COULDNT_CONNECT: u32 = 7;
    /// Operation timed out
    pub const OPERATION_TIMEDOUT: u32 = crate::constants::TRANSPORT_TIMEOUT_CODE;
    /// Too many redirects
    pub const TOO_MANY_REDIRECTS: u32 = 47;
    /// Failure sending data
    pub const SEND_ERROR: u32 = 55;
    /// Failure receiving data
    pub const RECV_ERROR: u32 = 56;
}

pub use classifier::classify;
pub use executor::{RequestExecutor, RequestHandler};
pub use headers::HeaderBuilder;
pub use http_transport::HttpTransport;
pub use multipart::{encode_multipart, flatten_fields, generate_boundary, sanitize_name};
