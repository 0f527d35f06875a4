//! Format dispatch and the per-format extraction strategies.
//!
//! Each [`Format`] maps to exactly one [`FormatExtractor`]. The dispatcher
//! trusts the declared format and never sniffs the bytes.
//!
//! # Example
//!
//! ```
//! use folio::extract::{extract_format, ExtractOptions};
//! use folio::Format;
//!
//! let result = extract_format(b"Call me Ishmael.", Format::Txt, &ExtractOptions::default())?;
//! assert_eq!(result.pages[0].text, "Call me Ishmael.");
//! # Ok::<(), folio::Error>(())
//! ```

mod epub;
mod images;
mod options;
mod pdf;
mod text;

pub use epub::EpubExtractor;
pub use options::ExtractOptions;
pub use pdf::PdfExtractor;
pub use text::{decode_latin1, decode_text, TextExtractor};

use unicode_normalization::UnicodeNormalization;

use crate::detect::Format;
use crate::error::Result;
use crate::model::ExtractionResult;

/// A strategy that turns the bytes of one format into pages.
pub trait FormatExtractor: Send + Sync {
    /// The format this extractor handles.
    fn format(&self) -> Format;

    /// Extract every page of the document.
    ///
    /// Implementations degrade individual pages instead of failing; an
    /// error means the document as a whole could not be read.
    fn extract(&self, bytes: &[u8], options: &ExtractOptions) -> Result<ExtractionResult>;
}

/// The extractor responsible for a format.
pub fn extractor_for(format: Format) -> &'static dyn FormatExtractor {
    match format {
        Format::Pdf => &PdfExtractor,
        Format::Txt => &TextExtractor,
        Format::Epub => &EpubExtractor,
    }
}

/// Extract pages from bytes of a known format.
pub fn extract_format(
    bytes: &[u8],
    format: Format,
    options: &ExtractOptions,
) -> Result<ExtractionResult> {
    log::debug!("Extracting {} bytes as {}", bytes.len(), format);

    let mut result = extractor_for(format).extract(bytes, options)?;

    if options.normalize_unicode {
        for page in &mut result.pages {
            page.text = page.text.nfc().collect();
        }
    }

    log::debug!(
        "Extracted {} pages, {} images, {} faults",
        result.page_count(),
        result.image_count(),
        result.faults.len()
    );
    Ok(result)
}

/// Extract pages from bytes with a declared format tag.
///
/// Fails with [`Error::UnsupportedFormat`](crate::Error::UnsupportedFormat)
/// when the tag is not `pdf`, `txt` or `epub` (case-insensitive).
pub fn extract_declared(
    bytes: &[u8],
    declared_format: &str,
    options: &ExtractOptions,
) -> Result<ExtractionResult> {
    let format = Format::parse(declared_format)?;
    extract_format(bytes, format, options)
}
