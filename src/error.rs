//! Error types for the doctable library.

use thiserror::Error;

/// Result type alias for doctable operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting tables or building requests.
#[derive(Error, Debug)]
pub enum Error {
    /// Error deserializing or serializing the document API's JSON shapes.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A requested column, identifier, or resource is absent.
    ///
    /// Recoverable: callers are expected to log and skip.
    #[error("not found: {0}")]
    NotFound(String),

    /// Table structure violates its declared dimensions or is missing
    /// positional data.
    ///
    /// Hard error: truncating or padding would corrupt the offset math used
    /// by the write path.
    #[error("malformed table: {0}")]
    MalformedTable(String),

    /// Opaque failure surfaced by the document or spreadsheet backend.
    ///
    /// The core never produces this itself; client boundaries convert
    /// backend failures into this variant. No retry logic lives here.
    #[error("service error: {0}")]
    Service(String),
}
