/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// Default API version used to build endpoint paths
pub const DEFAULT_API_VERSION: &str = "v1";
/// Prefix of the User-Agent string, followed by the client version
pub const USER_AGENT_PREFIX: &str = "Tracking3 Core Rust Client";
/// Media type sent in `Accept` and as default `Content-Type`
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Number of characters the server prepends to every response body.
///
/// The preamble is removed unconditionally, even though requests carry
/// `X-Strip-Leading-Brackets: false`.
pub const RESPONSE_PREAMBLE_LEN: usize = 6;
/// Dashes prepended to every generated multipart boundary
pub const BOUNDARY_PREFIX: &str = "---------------------";
/// Characters that are never allowed in multipart field names or file names
pub const DISALLOWED_NAME_CHARS: [char; 4] = ['\0', '"', '\r', '\n'];
/// Replacement for [`DISALLOWED_NAME_CHARS`]
pub const NAME_REPLACEMENT_CHAR: char = '_';
/// Transport error code reported when an operation timed out
pub const TRANSPORT_TIMEOUT_CODE: u32 = 28;
/// Stable identifying code attached to every timeout error
pub const TIMEOUT_ERROR_CODE: u64 = 1_592_833_821;
/// Error code for a configuration without password
pub const MISSING_PASSWORD_CODE: u64 = 1_592_824_383;
/// Error code for a configuration without email
pub const MISSING_EMAIL_CODE: u64 = 1_592_824_491;
