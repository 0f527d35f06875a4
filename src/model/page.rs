//! Page-level types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::EmbeddedImage;

/// A single page of extracted content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    #[serde(rename = "page")]
    pub index: u32,

    /// Extracted text, empty when the page has none or could not be read
    pub text: String,

    /// Embedded images in resource order
    pub images: Vec<EmbeddedImage>,
}

impl Page {
    /// Create a page.
    pub fn new(index: u32, text: impl Into<String>, images: Vec<EmbeddedImage>) -> Self {
        Self {
            index,
            text: text.into(),
            images,
        }
    }

    /// Create a page with text and no images.
    pub fn text_only(index: u32, text: impl Into<String>) -> Self {
        Self::new(index, text, Vec::new())
    }

    /// Check if the page carries neither text nor images.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.images.is_empty()
    }

    /// Length of the text in characters, the unit of position offsets.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Which half of a page's extraction degraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaultStage {
    /// Text recovery from the content stream
    Text,
    /// Image enumeration
    Images,
}

impl fmt::Display for FaultStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultStage::Text => write!(f, "text"),
            FaultStage::Images => write!(f, "images"),
        }
    }
}

/// A recoverable problem that left one page with degraded content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFault {
    /// Page number (1-indexed)
    pub page: u32,

    /// Stage that failed
    pub stage: FaultStage,

    /// Human-readable cause
    pub reason: String,
}

impl fmt::Display for PageFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {} {}: {}", self.page, self.stage, self.reason)
    }
}

/// The ordered pages of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Pages with indices 1..=n
    pub pages: Vec<Page>,

    /// Per-page degradations, in page order
    #[serde(skip)]
    pub faults: Vec<PageFault>,
}

impl ExtractionResult {
    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn page(&self, index: u32) -> Option<&Page> {
        if index == 0 {
            return None;
        }
        self.pages.get((index - 1) as usize)
    }

    /// Total number of images across pages.
    pub fn image_count(&self) -> usize {
        self.pages.iter().map(|p| p.images.len()).sum()
    }

    /// Check if any page was degraded.
    pub fn is_degraded(&self) -> bool {
        !self.faults.is_empty()
    }

    /// Page numbers that recorded at least one fault, deduplicated.
    pub fn degraded_pages(&self) -> Vec<u32> {
        let mut pages: Vec<u32> = self.faults.iter().map(|f| f.page).collect();
        pages.dedup();
        pages
    }

    /// Text of every page joined by blank lines.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
