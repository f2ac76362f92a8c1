/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::Configuration;
use crate::constants::{JSON_CONTENT_TYPE, USER_AGENT_PREFIX};
use crate::model::headers::HeaderSet;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// `Accept` header name
pub const ACCEPT: &str = "Accept";
/// `Authorization` header name
pub const AUTHORIZATION: &str = "Authorization";
/// `Content-Type` header name
pub const CONTENT_TYPE: &str = "Content-Type";
/// `User-Agent` header name
pub const USER_AGENT: &str = "User-Agent";
/// Asks the server whether to keep its leading bracket preamble
pub const STRIP_LEADING_BRACKETS: &str = "X-Strip-Leading-Brackets";
/// Application identifier header name
pub const ID_APPLICATION: &str = "X-Id-Application";
/// API transaction identifier header name
pub const ID_API_TRANSACTION: &str = "X-Id-Api-Transaction";

/// Builds the default, authenticated header set of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBuilder {
    user_agent: String,
}

impl HeaderBuilder {
    /// Creates a builder announcing `client_version` in the User-Agent
    pub fn new(client_version: &str) -> Self {
        Self {
            user_agent: format!("{USER_AGENT_PREFIX} {client_version}"),
        }
    }

    /// User-Agent value sent with every request
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Builds the headers for `configuration`, then merges `custom_headers`
    /// over them. Custom values win on exact key collision.
    #[must_use]
    pub fn build(&self, configuration: &Configuration, custom_headers: &HeaderSet) -> HeaderSet {
        let mut headers = HeaderSet::new();
        headers.insert(ACCEPT, JSON_CONTENT_TYPE);
        headers.insert(AUTHORIZATION, authorization_value(configuration));
        headers.insert(CONTENT_TYPE, JSON_CONTENT_TYPE);
        headers.insert(USER_AGENT, self.user_agent.as_str());
        headers.insert(STRIP_LEADING_BRACKETS, "false");
        if let Some(id) = configuration.id_application() {
            headers.insert(ID_APPLICATION, id);
        }
        if let Some(id) = configuration.id_api_transaction() {
            headers.insert(ID_API_TRANSACTION, id);
        }

        headers.merge(custom_headers);
        headers
    }
}

impl Default for HeaderBuilder {
    fn default() -> Self {
        Self::new(crate::VERSION)
    }
}

/// `Authorization` value for `configuration`.
///
/// Access token first, then refresh token, then basic credentials.
#[must_use]
pub fn authorization_value(configuration: &Configuration) -> String {
    if let Some(token) = configuration.access_token() {
        return format!("Bearer {token}");
    }
    if let Some(token) = configuration.refresh_token() {
        return format!("Bearer {token}");
    }
    let credentials = format!("{}:{}", configuration.email, configuration.password);
    format!("Basic {}", STANDARD.encode(credentials))
}
