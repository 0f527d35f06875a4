//! PDF strategy using lopdf.
//!
//! Text and images are extracted page by page. A page whose content stream
//! or image resources cannot be read is degraded on its own; only a
//! document without a readable page tree fails the call.
//!
//! lopdf reads content streams leniently: junk bytes often parse as no
//! operations at all, giving an empty page with no fault recorded. An empty
//! `faults` list therefore does not prove that every page parsed cleanly.

use lopdf::Document as LopdfDocument;

use crate::assemble::{assemble, Extracted};
use crate::detect::Format;
use crate::error::{Error, Result};
use crate::model::ExtractionResult;

use super::images::page_images;
use super::{ExtractOptions, FormatExtractor};

/// Extractor for PDF documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl FormatExtractor for PdfExtractor {
    fn format(&self) -> Format {
        Format::Pdf
    }

    fn extract(&self, bytes: &[u8], options: &ExtractOptions) -> Result<ExtractionResult> {
        let doc = load_document(bytes)?;

        let pages = doc.get_pages();
        if pages.is_empty() {
            return Err(Error::PdfParse("document has no pages".to_string()));
        }
        log::debug!("PDF {} with {} pages", doc.version, pages.len());

        // The page tree is numbered 1..=n in document order.
        let texts = pages
            .keys()
            .map(|&page_number| page_text(&doc, page_number))
            .collect();

        let images = if options.extract_images {
            pages
                .values()
                .map(|&page_id| page_images(&doc, page_id, options))
                .collect()
        } else {
            Vec::new()
        };

        Ok(assemble(texts, images))
    }
}

/// Load a document from memory.
fn load_document(bytes: &[u8]) -> Result<LopdfDocument> {
    let doc = LopdfDocument::load_mem(bytes)?;

    if doc.is_encrypted() {
        log::warn!("Document is encrypted; page text may be unreadable");
    }

    Ok(doc)
}

/// Extract the text of one page.
fn page_text(doc: &LopdfDocument, page_number: u32) -> Extracted<String> {
    doc.extract_text(&[page_number])
        .map_err(|e| format!("Page {}: {}", page_number, e))
        .into()
}
