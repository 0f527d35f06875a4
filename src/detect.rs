//! Declared format tags and magic-byte detection.
//!
//! Extraction always trusts the declared tag. The detection helpers here are
//! diagnostics for callers that want to warn about a tag that disagrees with
//! the bytes; the dispatcher never calls them.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Local file header of a ZIP container.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// An EPUB stores its uncompressed `mimetype` entry first, so the media type
/// sits right after the 30-byte local header and the 8-byte file name.
const EPUB_MIMETYPE_OFFSET: usize = 38;
const EPUB_MIMETYPE: &[u8] = b"application/epub+zip";

/// A book format the dispatcher recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Portable Document Format
    Pdf,
    /// Flat text, one page
    Txt,
    /// EPUB container (recognized, not yet extracted)
    Epub,
}

impl Format {
    /// Every recognized format, in tag order.
    pub const ALL: [Format; 3] = [Format::Pdf, Format::Txt, Format::Epub];

    /// Parse a declared format tag.
    ///
    /// Matching is ASCII case-insensitive. Surrounding whitespace and one
    /// leading dot are ignored so a file extension can be passed as-is.
    pub fn parse(tag: &str) -> Result<Self> {
        let normalized = tag.trim();
        let normalized = normalized.strip_prefix('.').unwrap_or(normalized);

        Self::ALL
            .into_iter()
            .find(|format| format.tag().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| Error::UnsupportedFormat(tag.to_string()))
    }

    /// Derive the format from a file's extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
        Self::parse(ext)
    }

    /// Canonical lowercase tag.
    pub fn tag(self) -> &'static str {
        match self {
            Format::Pdf => "pdf",
            Format::Txt => "txt",
            Format::Epub => "epub",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Guess a format from the leading bytes of a blob.
///
/// Returns `None` when no signature matches; plain text has no signature, so
/// `None` is the expected answer for `.txt` uploads.
pub fn detect_format_from_bytes(data: &[u8]) -> Option<Format> {
    if data.starts_with(PDF_MAGIC) {
        return Some(Format::Pdf);
    }

    if data.starts_with(ZIP_MAGIC)
        && data
            .get(EPUB_MIMETYPE_OFFSET..EPUB_MIMETYPE_OFFSET + EPUB_MIMETYPE.len())
            .is_some_and(|mime| mime == EPUB_MIMETYPE)
    {
        return Some(Format::Epub);
    }

    None
}

/// Check whether bytes begin with the PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// Check whether the bytes contradict the declared format.
///
/// A blob with no recognizable signature only contradicts binary formats,
/// so undetectable bytes declared as `txt` are consistent.
pub fn format_mismatch(declared: Format, data: &[u8]) -> Option<Format> {
    match (declared, detect_format_from_bytes(data)) {
        (Format::Txt, None) => None,
        (declared, Some(found)) if found == declared => None,
        (Format::Txt, Some(found)) => Some(found),
        (_, found) => Some(found.unwrap_or(Format::Txt)),
    }
}
