/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Blocking [`Transport`] backed by `reqwest`
//!
//! Errors are reported in the libcurl code space (see [`codes`]) so the
//! classifier can tell timeouts from other connection failures. Being built on
//! `reqwest::blocking`, this transport must not be driven from inside an async
//! runtime.

use crate::model::http::RequestBody;
use crate::transport::{Transport, TransportOption, codes};
use reqwest::Method;
use reqwest::blocking::Client;
use std::error::Error as StdError;
use std::time::Duration;
use tracing::{debug, trace};

/// Error code when the HTTP session cannot be created
pub const FAILED_INIT: u32 = 2;

type TransportFailure = (u32, String);

/// `reqwest` backed HTTP session
#[derive(Debug, Default)]
pub struct HttpTransport {
    method: Option<Method>,
    headers: Vec<String>,
    timeout_secs: u64,
    url: Option<String>,
    body: Option<RequestBody>,
    client: Option<Client>,
    status: u16,
    error_code: u32,
    error_message: String,
}

impl HttpTransport {
    /// Creates a transport with no options set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session is currently open
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.client.is_some()
    }

    fn open_session(&mut self) -> Result<Client, TransportFailure> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let timeout = (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs));
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| (FAILED_INIT, error_message(&e)))?;
        debug!("Opened HTTP session (timeout: {:?})", timeout);
        self.client = Some(client.clone());
        Ok(client)
    }

    fn send(&mut self) -> Result<String, TransportFailure> {
        let url = self
            .url
            .clone()
            .ok_or_else(|| (codes::URL_MALFORMAT, "No URL set".to_string()))?;
        let method = self.method.clone().unwrap_or(Method::GET);
        let client = self.open_session()?;

        let mut request = client.request(method, &url);
        for line in &self.headers {
            match parse_header_line(line) {
                Some((name, value)) => request = request.header(name, value),
                None => trace!("Skipping malformed header line: {}", line),
            }
        }
        match &self.body {
            Some(RequestBody::Json(value)) => {
                let bytes = serde_json::to_vec(value)
                    .map_err(|e| (codes::SEND_ERROR, e.to_string()))?;
                request = request.body(bytes);
            }
            Some(RequestBody::Multipart(bytes)) => request = request.body(bytes.clone()),
            None => {}
        }

        let response = request.send().map_err(map_error)?;
        self.status = response.status().as_u16();
        response.text().map_err(map_error)
    }
}

impl Transport for HttpTransport {
    fn set_option(&mut self, option: TransportOption) {
        match option {
            TransportOption::Method(method) => self.method = Some(method),
            TransportOption::Headers(headers) => self.headers = headers,
            TransportOption::Timeout(timeout_secs) => {
                if timeout_secs != self.timeout_secs {
                    self.client = None;
                }
                self.timeout_secs = timeout_secs;
            }
            TransportOption::Url(url) => self.url = Some(url),
            TransportOption::Body(body) => self.body = Some(body),
        }
    }

    fn execute(&mut self) -> String {
        self.status = 0;
        self.error_code = codes::OK;
        self.error_message.clear();

        match self.send() {
            Ok(response) => response,
            Err((code, message)) => {
                self.error_code = code;
                self.error_message = message;
                String::new()
            }
        }
    }

    fn status(&self) -> u16 {
        self.status
    }

    fn error_code(&self) -> u32 {
        self.error_code
    }

    fn error_message(&self) -> String {
        self.error_message.clone()
    }

    /// Drops the session and every option set so far. The metadata of the
    /// last execution stays readable.
    fn close(&mut self) {
        self.client = None;
        self.method = None;
        self.headers.clear();
        self.timeout_secs = 0;
        self.url = None;
        self.body = None;
    }
}

/// Splits a `Name: value` line
fn parse_header_line(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name, value.trim()))
}

fn map_error(e: reqwest::Error) -> TransportFailure {
    let code = if e.is_timeout() {
        codes::OPERATION_TIMEDOUT
    } else if e.is_connect() {
        codes::COULDNT_CONNECT
    } else if e.is_builder() {
        codes::URL_MALFORMAT
    } else if e.is_redirect() {
        codes::TOO_MANY_REDIRECTS
    } else if e.is_body() || e.is_decode() {
        codes::RECV_ERROR
    } else {
        codes::SEND_ERROR
    };
    (code, error_message(&e))
}

/// Error message including its source chain
fn error_message(e: &(dyn StdError + 'static)) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
