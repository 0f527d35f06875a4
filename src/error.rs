//! Error types for folio.

use std::io;
use std::time::Duration;

use thiserror::Error;

use crate::detect::Format;

/// Result type alias for folio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by an extraction call or a position token.
///
/// Per-page faults (a broken content stream, an unreadable image) are not
/// errors; they degrade the affected page and are reported through
/// [`ExtractionResult::faults`](crate::ExtractionResult::faults).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The declared format tag is not one of `pdf`, `txt`, `epub`.
    #[error("Unsupported format: {0:?}")]
    UnsupportedFormat(String),

    /// The format is recognized but has no extractor yet.
    #[error("Format not yet implemented: {0}")]
    FormatNotImplemented(Format),

    /// The document could not be opened at all.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// A position token does not have the `<page>:<offset>` shape.
    #[error("Malformed position: {0:?}")]
    MalformedPosition(String),

    /// A position was constructed with out-of-range components.
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    /// Error while serializing a result for transport.
    #[error("Rendering error: {0}")]
    Render(String),

    /// The extraction did not finish before the caller's deadline.
    #[error("Extraction timed out after {0:?}")]
    Timeout(Duration),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
