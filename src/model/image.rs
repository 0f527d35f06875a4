//! Embedded raster images.

use serde::{Deserialize, Serialize};

/// MIME type reported when nothing better is known.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// An image recovered from a page, kept in its stored (encoded) form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedImage {
    /// Best-effort MIME type (e.g., "image/png")
    pub mime_type: String,

    /// Encoded image bytes, base64 in JSON
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

impl EmbeddedImage {
    /// Create an image with an explicit MIME type.
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Create an image whose MIME type is inferred from its stored name.
    pub fn from_stored_name(data: Vec<u8>, name: Option<&str>) -> Self {
        let mime_type = name.map_or(DEFAULT_IMAGE_MIME, mime_from_name);
        Self::new(data, mime_type)
    }

    /// Size of the encoded data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// File extension matching the MIME type.
    pub fn extension(&self) -> &str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/webp" => "webp",
            _ => "jpg",
        }
    }
}

/// Infer a MIME type from a stored image name.
///
/// Only the `.png` and `.webp` suffixes are recognized (ASCII
/// case-insensitive); everything else, including names without an
/// extension, maps to [`DEFAULT_IMAGE_MIME`].
pub fn mime_from_name(name: &str) -> &'static str {
    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".webp") {
        "image/webp"
    } else {
        DEFAULT_IMAGE_MIME
    }
}

/// Detect a MIME type from magic bytes.
///
/// Recognizes the three types the reader renders: JPEG, PNG and WEBP.
pub fn detect_mime_type(data: &[u8]) -> Option<&'static str> {
    // JPEG: FF D8
    if data.starts_with(&[0xFF, 0xD8]) {
        return Some("image/jpeg");
    }

    // PNG: 89 50 4E 47
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return Some("image/png");
    }

    // WEBP: RIFF....WEBP
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some("image/webp");
    }

    None
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
