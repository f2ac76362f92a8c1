/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Plain data exchanged between the executor and a transport

use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Result of a completed HTTP exchange, whatever the status code
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    /// HTTP status code reported by the transport
    pub status: u16,
    /// Response body without the server preamble
    pub body: String,
}

impl ResponseEnvelope {
    /// Whether the status is in the 2xx range
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parses the body as JSON
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the body is not valid JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Body handed to the transport
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Structured body, encoded by the transport
    Json(Value),
    /// Pre-encoded `multipart/form-data` bytes
    Multipart(Vec<u8>),
}

/// File uploaded along a request
///
/// The contents are read by the caller before the request is made, so a
/// missing or unreadable file never reaches the request layer. Only the base
/// name of `path` is transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    path: PathBuf,
    data: Vec<u8>,
}

impl FileAttachment {
    /// Creates an attachment from already loaded bytes
    pub fn new(path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
        }
    }

    /// Reads the whole file at `path`
    ///
    /// # Errors
    ///
    /// Propagates the I/O error when the file cannot be read.
    pub fn read(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        Ok(Self::new(path, data))
    }

    /// Reads `reader` to its end without closing it
    ///
    /// # Errors
    ///
    /// Propagates the I/O error raised by `reader`.
    pub fn from_reader<R: Read + ?Sized>(path: impl Into<PathBuf>, reader: &mut R) -> io::Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::new(path, data))
    }

    /// Path the attachment was created with
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name of the path, empty when the path has none
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File contents
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Metadata read from a transport after execution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOutcome {
    /// Raw response body, empty when nothing was received
    pub response: String,
    /// HTTP status, `0` when no response was received
    pub status: u16,
    /// Native transport error code, `0` on success
    pub error_code: u32,
    /// Native transport error message, empty on success
    pub error_message: String,
}
