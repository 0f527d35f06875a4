//! # folio
//!
//! Book content extraction for reading clients.
//!
//! folio takes the bytes of an uploaded book plus its declared format and
//! returns the book as an ordered list of pages, each with its text and
//! embedded images. A damaged page never sinks the whole book: it comes
//! back empty and the problem is recorded as a [`PageFault`].
//!
//! ## Quick Start
//!
//! ```
//! fn main() -> folio::Result<()> {
//!     let result = folio::extract(b"Chapter 1\n\nIt was a quiet town.", "txt")?;
//!
//!     assert_eq!(result.page_count(), 1);
//!     assert_eq!(result.pages[0].index, 1);
//!
//!     let position = folio::PagePosition::new(1, 11)?;
//!     assert_eq!(position.encode(), "1:11");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Formats**: PDF (text and images per page), plain text (UTF-8 with
//!   Latin-1 fallback); EPUB is recognized but not yet extracted
//! - **Partial-failure isolation**: per-page degradation instead of errors
//! - **Position tokens**: `"<page>:<offset>"` for bookmarks and progress
//! - **Parallel batches**: independent documents extracted with Rayon
//! - **Transport helpers**: JSON and data-URI page listings

pub mod assemble;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod position;
pub mod render;

#[cfg(feature = "async")]
pub mod task;

// Re-export commonly used types
pub use assemble::Extracted;
pub use detect::{detect_format_from_bytes, format_mismatch, is_pdf_bytes, Format};
pub use error::{Error, Result};
pub use extract::{ExtractOptions, FormatExtractor};
pub use model::{EmbeddedImage, ExtractionResult, FaultStage, Page, PageFault};
pub use position::{percentage_complete, PagePosition};
pub use render::{ExtractionStats, JsonFormat, PageListing};

use std::path::Path;

use rayon::prelude::*;

/// The bytes of one document and the format they were declared as.
#[derive(Debug, Clone, Copy)]
pub struct SourceDocument<'a> {
    /// Raw file contents
    pub bytes: &'a [u8],

    /// Declared format
    pub format: Format,
}

impl<'a> SourceDocument<'a> {
    /// Create a source document from a declared format tag.
    pub fn new(bytes: &'a [u8], declared_format: &str) -> Result<Self> {
        Ok(Self {
            bytes,
            format: Format::parse(declared_format)?,
        })
    }

    /// Create a source document from an already parsed format.
    pub fn with_format(bytes: &'a [u8], format: Format) -> Self {
        Self { bytes, format }
    }

    /// Extract with the given options.
    pub fn extract(&self, options: &ExtractOptions) -> Result<ExtractionResult> {
        extract::extract_format(self.bytes, self.format, options)
    }
}

/// Extract the pages of a document.
///
/// # Arguments
///
/// * `bytes` - File content
/// * `declared_format` - `pdf`, `txt` or `epub`, case-insensitive
///
/// # Example
///
/// ```
/// let result = folio::extract("Olá".as_bytes(), "TXT").unwrap();
/// assert_eq!(result.pages[0].text, "Olá");
///
/// assert!(matches!(
///     folio::extract(b"anything", "docx"),
///     Err(folio::Error::UnsupportedFormat(_))
/// ));
/// ```
pub fn extract(bytes: &[u8], declared_format: &str) -> Result<ExtractionResult> {
    extract_with_options(bytes, declared_format, &ExtractOptions::default())
}

/// Extract the pages of a document with custom options.
pub fn extract_with_options(
    bytes: &[u8],
    declared_format: &str,
    options: &ExtractOptions,
) -> Result<ExtractionResult> {
    extract::extract_declared(bytes, declared_format, options)
}

/// Extract a file, taking the format from its extension.
///
/// # Example
///
/// ```no_run
/// let result = folio::extract_file("library/moby-dick.pdf").unwrap();
/// println!("Pages: {}", result.page_count());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<ExtractionResult> {
    extract_file_with_options(path, &ExtractOptions::default())
}

/// Extract a file with custom options.
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ExtractOptions,
) -> Result<ExtractionResult> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let bytes = std::fs::read(path)?;
    extract::extract_format(&bytes, format, options)
}

/// Extract several documents in parallel.
///
/// Each document is extracted independently; results keep input order.
pub fn extract_many(
    documents: &[SourceDocument<'_>],
    options: &ExtractOptions,
) -> Vec<Result<ExtractionResult>> {
    documents
        .par_iter()
        .map(|document| document.extract(options))
        .collect()
}

/// Builder for extraction calls.
///
/// # Example
///
/// ```
/// use folio::Folio;
///
/// let result = Folio::new()
///     .text_only()
///     .with_unicode_normalization()
///     .extract(b"Plain words", "txt")?;
/// assert_eq!(result.pages[0].text, "Plain words");
/// # Ok::<(), folio::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Folio {
    options: ExtractOptions,
}

impl Folio {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip image extraction.
    pub fn text_only(mut self) -> Self {
        self.options = self.options.text_only();
        self
    }

    /// Let image magic bytes override the name-based MIME guess.
    pub fn with_sniffed_mime(mut self) -> Self {
        self.options = self.options.with_sniffed_mime(true);
        self
    }

    /// Normalize page text to Unicode NFC.
    pub fn with_unicode_normalization(mut self) -> Self {
        self.options = self.options.with_unicode_normalization(true);
        self
    }

    /// The options this builder will use.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract bytes with a declared format tag.
    pub fn extract(&self, bytes: &[u8], declared_format: &str) -> Result<ExtractionResult> {
        extract_with_options(bytes, declared_format, &self.options)
    }

    /// Extract a file, taking the format from its extension.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<ExtractionResult> {
        extract_file_with_options(path, &self.options)
    }

    /// Extract several documents in parallel.
    pub fn extract_many(&self, documents: &[SourceDocument<'_>]) -> Vec<Result<ExtractionResult>> {
        extract_many(documents, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folio_builder() {
        let folio = Folio::new().text_only().with_sniffed_mime();
        assert!(!folio.options().extract_images);
        assert!(folio.options().sniff_image_mime);
        assert!(!folio.options().normalize_unicode);
    }

    #[test]
    fn test_folio_builder_default() {
        let folio = Folio::default();
        assert!(folio.options().extract_images);
    }

    #[test]
    fn test_source_document_new() {
        let doc = SourceDocument::new(b"text", "Txt").unwrap();
        assert_eq!(doc.format, Format::Txt);
        assert!(SourceDocument::new(b"text", "rtf").is_err());
    }

    #[test]
    fn test_extract_unknown_format() {
        let result = extract(b"", "docx");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_extract_pdf_garbage_fails() {
        // Declared PDF but not a PDF: there is no page tree to degrade into.
        let result = extract(b"not a pdf", "pdf");
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_many_keeps_order() {
        let documents = [
            SourceDocument::with_format(b"one", Format::Txt),
            SourceDocument::with_format(b"", Format::Epub),
            SourceDocument::with_format(b"three", Format::Txt),
        ];
        let results = extract_many(&documents, &ExtractOptions::default());

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().pages[0].text, "one");
        assert!(matches!(results[1], Err(Error::FormatNotImplemented(_))));
        assert_eq!(results[2].as_ref().unwrap().pages[0].text, "three");
    }

    #[test]
    fn test_extract_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.TXT");
        std::fs::write(&path, "Margin notes").unwrap();

        let result = extract_file(&path).unwrap();
        assert_eq!(result.pages[0].text, "Margin notes");
    }

    #[test]
    fn test_extract_file_missing() {
        let result = extract_file("does/not/exist.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
