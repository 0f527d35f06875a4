//! Extraction options and configuration.

/// Options for an extraction call.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Whether to extract embedded images
    pub extract_images: bool,

    /// Let image magic bytes override the name-based MIME guess
    pub sniff_image_mime: bool,

    /// Normalize extracted text to Unicode NFC
    pub normalize_unicode: bool,
}

impl ExtractOptions {
    /// Create new extraction options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable image extraction.
    pub fn with_images(mut self, extract: bool) -> Self {
        self.extract_images = extract;
        self
    }

    /// Extract text only.
    pub fn text_only(mut self) -> Self {
        self.extract_images = false;
        self
    }

    /// Enable or disable magic-byte MIME detection for images.
    pub fn with_sniffed_mime(mut self, sniff: bool) -> Self {
        self.sniff_image_mime = sniff;
        self
    }

    /// Enable or disable NFC normalization of page text.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            extract_images: true,
            sniff_image_mime: false,
            normalize_unicode: false,
        }
    }
}
