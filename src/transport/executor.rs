/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::Configuration;
use crate::error::RequestError;
use crate::model::headers::HeaderSet;
use crate::model::http::{FileAttachment, RequestBody, ResponseEnvelope};
use crate::transport::classifier::classify;
use crate::transport::headers::{CONTENT_TYPE, HeaderBuilder};
use crate::transport::multipart::{encode_multipart, generate_boundary, multipart_content_type};
use crate::transport::{Transport, TransportOption};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, error, warn};

/// Entry point of the request layer
///
/// Implemented by [`RequestExecutor`]; higher layers depend on the trait so
/// they can be exercised against a stub.
pub trait RequestHandler {
    /// Builds, executes and classifies a request
    ///
    /// * `body` - structured body; with a `file` it is sent as form fields,
    ///   otherwise it is handed to the transport as JSON
    /// * `file` - attachment, switches the request to `multipart/form-data`
    /// * `custom_headers` - merged over the default headers, custom values win
    ///
    /// # Errors
    ///
    /// [`RequestError::Timeout`] or [`RequestError::Connection`]; HTTP error
    /// statuses are returned as envelopes.
    fn do_request(
        &mut self,
        method: Method,
        uri: &str,
        configuration: &Configuration,
        body: Option<&Value>,
        file: Option<&FileAttachment>,
        custom_headers: Option<&HeaderSet>,
    ) -> Result<ResponseEnvelope, RequestError>;
}

/// Runs requests through a single owned [`Transport`] session
///
/// Calls take `&mut self`, so one executor never has two requests in flight.
/// The session is closed after every execution.
#[derive(Debug)]
pub struct RequestExecutor<T: Transport> {
    transport: T,
    header_builder: HeaderBuilder,
}

impl<T: Transport> RequestExecutor<T> {
    /// Creates an executor announcing the crate version
    pub fn new(transport: T) -> Self {
        Self::with_header_builder(transport, HeaderBuilder::default())
    }

    /// Creates an executor with a custom header builder
    pub fn with_header_builder(transport: T, header_builder: HeaderBuilder) -> Self {
        Self {
            transport,
            header_builder,
        }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Consumes the executor and returns the transport
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Sets method, headers, timeout, URI and body on the transport, executes
    /// it, closes it and classifies the outcome.
    ///
    /// # Errors
    ///
    /// See [`classify`].
    pub fn execute(
        &mut self,
        method: Method,
        uri: &str,
        headers: &HeaderSet,
        body: Option<RequestBody>,
        timeout_secs: u64,
    ) -> Result<ResponseEnvelope, RequestError> {
        debug!("{} {}", method, uri);

        self.transport.set_option(TransportOption::Method(method));
        self.transport
            .set_option(TransportOption::Headers(headers.to_lines()));
        self.transport
            .set_option(TransportOption::Timeout(timeout_secs));
        self.transport
            .set_option(TransportOption::Url(uri.to_string()));
        if let Some(body) = body {
            self.transport.set_option(TransportOption::Body(body));
        }

        let outcome = self.transport.perform();
        self.transport.close();
        debug!("Response status: {}", outcome.status);

        let result = classify(outcome, timeout_secs);
        match &result {
            Err(e @ RequestError::Timeout { .. }) => warn!("Request to {} timed out: {}", uri, e),
            Err(e) => error!("Request to {} failed ({}): {}", uri, e.code(), e),
            Ok(_) => {}
        }
        result
    }
}

impl<T: Transport> RequestHandler for RequestExecutor<T> {
    fn do_request(
        &mut self,
        method: Method,
        uri: &str,
        configuration: &Configuration,
        body: Option<&Value>,
        file: Option<&FileAttachment>,
        custom_headers: Option<&HeaderSet>,
    ) -> Result<ResponseEnvelope, RequestError> {
        let no_custom_headers = HeaderSet::new();
        let mut headers = self
            .header_builder
            .build(configuration, custom_headers.unwrap_or(&no_custom_headers));

        let request_body = match file {
            Some(file) => {
                let boundary = generate_boundary();
                headers.insert(CONTENT_TYPE, multipart_content_type(&boundary));
                debug!("Uploading {} as multipart", file.file_name());
                Some(RequestBody::Multipart(encode_multipart(body, file, &boundary)))
            }
            None => body
                .filter(|value| !is_empty_body(value))
                .cloned()
                .map(RequestBody::Json),
        };

        self.execute(method, uri, &headers, request_body, configuration.timeout)
    }
}

/// `null`, `{}` and `[]` are not worth sending
fn is_empty_body(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
