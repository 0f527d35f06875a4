//! EPUB placeholder.

use crate::detect::Format;
use crate::error::{Error, Result};
use crate::model::ExtractionResult;

use super::{ExtractOptions, FormatExtractor};

/// Extractor for EPUB containers.
///
/// The tag is recognized so callers can tell "not yet" apart from "never";
/// every call fails with [`Error::FormatNotImplemented`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EpubExtractor;

impl FormatExtractor for EpubExtractor {
    fn format(&self) -> Format {
        Format::Epub
    }

    fn extract(&self, _bytes: &[u8], _options: &ExtractOptions) -> Result<ExtractionResult> {
        Err(Error::FormatNotImplemented(Format::Epub))
    }
}
