//! JSON rendering for extraction results.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::ExtractionResult;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a result to JSON, with image data as base64 strings.
pub fn to_json(result: &ExtractionResult, format: JsonFormat) -> Result<String> {
    serialize(result, format)
}

/// Serialize any transport value in the requested layout.
pub(super) fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    json.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
