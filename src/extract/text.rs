//! Plain-text strategy: the whole blob is page 1.

use crate::assemble::{assemble, Extracted};
use crate::detect::Format;
use crate::error::Result;
use crate::model::ExtractionResult;

use super::{ExtractOptions, FormatExtractor};

/// Extractor for flat text files.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl FormatExtractor for TextExtractor {
    fn format(&self) -> Format {
        Format::Txt
    }

    fn extract(&self, bytes: &[u8], _options: &ExtractOptions) -> Result<ExtractionResult> {
        Ok(assemble(vec![Extracted::Ok(decode_text(bytes))], Vec::new()))
    }
}

/// Decode bytes as UTF-8, falling back to Latin-1.
///
/// Never fails: every byte has a Latin-1 representation.
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(e) => {
            log::debug!("Text is not UTF-8 ({}), decoding as Latin-1", e);
            decode_latin1(bytes)
        }
    }
}

/// Decode bytes as ISO-8859-1, one char per byte.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
