/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Tracking3 Client Prelude
//!
//! The types needed for most requests in one import.
//!
//! ## Usage
//!
//! ```rust
//! use tracking3_client::prelude::*;
//!
//! let configuration = Configuration::new("john@example.com", "s3cr37").unwrap();
//! let executor = RequestExecutor::new(HttpTransport::new());
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Connection configuration
pub use crate::application::config::{Configuration, Environment};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{AppError, ConfigError, RequestError};

// ============================================================================
// MODEL
// ============================================================================

/// Headers, envelopes, bodies and attachments
pub use crate::model::headers::HeaderSet;
pub use crate::model::http::{FileAttachment, RequestBody, ResponseEnvelope, TransportOutcome};

// ============================================================================
// TRANSPORT
// ============================================================================

/// Request execution
pub use crate::transport::executor::{RequestExecutor, RequestHandler};

/// Transport trait, options and the reqwest implementation
pub use crate::transport::http_transport::HttpTransport;
pub use crate::transport::{Transport, TransportOption};

/// Building blocks
pub use crate::transport::classifier::classify;
pub use crate::transport::headers::HeaderBuilder;
pub use crate::transport::multipart::{encode_multipart, flatten_fields, generate_boundary};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use reqwest::Method;
pub use serde_json::{Value, json};
pub use tracing::{debug, error, info, warn};
