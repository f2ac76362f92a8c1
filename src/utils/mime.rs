//! Content based MIME detection
//!
//! Only the bytes are inspected. File names and caller supplied types are
//! never consulted, a renamed file keeps its real type.

/// MIME type reported for empty content
pub const EMPTY_MIME: &str = "application/x-empty";
/// MIME type reported for unrecognised UTF-8 content
pub const TEXT_MIME: &str = "text/plain";
/// MIME type reported for unrecognised binary content
pub const BINARY_MIME: &str = "application/octet-stream";

/// Sniffs the MIME type of `bytes` from their magic numbers
pub fn sniff_mime(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return EMPTY_MIME.to_string();
    }
    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type().to_string();
    }
    if std::str::from_utf8(bytes).is_ok() {
        TEXT_MIME.to_string()
    } else {
        BINARY_MIME.to_string()
    }
}
