//! Summary statistics for an extraction result.

use serde::{Deserialize, Serialize};

use crate::model::ExtractionResult;

/// Counts collected from an extraction result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Total number of pages
    pub page_count: u32,

    /// Pages with neither text nor images
    pub empty_page_count: u32,

    /// Number of images across pages
    pub image_count: u32,

    /// Total size of image data in bytes
    pub image_bytes: u64,

    /// Whitespace-separated words
    pub word_count: u64,

    /// Characters of text
    pub char_count: u64,

    /// Pages that recorded a fault
    pub degraded_pages: Vec<u32>,
}

impl ExtractionStats {
    /// Collect statistics from a result.
    pub fn from_result(result: &ExtractionResult) -> Self {
        let mut stats = Self {
            page_count: result.page_count(),
            degraded_pages: result.degraded_pages(),
            ..Self::default()
        };

        for page in &result.pages {
            if page.is_empty() {
                stats.empty_page_count += 1;
            }
            stats.image_count += page.images.len() as u32;
            stats.image_bytes += page.images.iter().map(|i| i.size() as u64).sum::<u64>();
            stats.word_count += page.text.split_whitespace().count() as u64;
            stats.char_count += page.char_count() as u64;
        }

        stats
    }
}
