/// Module containing environment variable helpers
pub mod config;
/// Module containing utilities for handling unique identifiers
pub mod id;
/// Module containing logging utilities
pub mod logger;
/// Module containing content based MIME detection
pub mod mime;

pub use id::*;
pub use logger::*;
pub use mime::*;
