//! Page assembly.
//!
//! Extractors report one outcome per page and per stage. The assembler zips
//! those outcomes by page index into [`Page`] records and turns every
//! degraded outcome into empty content plus a [`PageFault`].

use std::fmt::Display;

use crate::model::{EmbeddedImage, ExtractionResult, FaultStage, Page, PageFault};

/// Outcome of extracting one stage of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted<T> {
    /// The content was recovered.
    Ok(T),
    /// The content could not be recovered; the reason is kept for diagnostics.
    Degraded(String),
}

impl<T> Extracted<T> {
    /// Check if this outcome is degraded.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Extracted::Degraded(_))
    }

    /// Unwrap into content, recording a fault for degraded outcomes.
    fn into_content(self, page: u32, stage: FaultStage, faults: &mut Vec<PageFault>) -> T
    where
        T: Default,
    {
        match self {
            Extracted::Ok(content) => content,
            Extracted::Degraded(reason) => {
                log::warn!("Degraded page {} ({}): {}", page, stage, reason);
                faults.push(PageFault {
                    page,
                    stage,
                    reason,
                });
                T::default()
            }
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for Extracted<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(content) => Extracted::Ok(content),
            Err(e) => Extracted::Degraded(e.to_string()),
        }
    }
}

/// Merge per-page text and image outcomes into an ordered result.
///
/// The text outcomes define the page count. Image outcomes are aligned by
/// position: extra ones are dropped and missing ones become empty lists.
pub fn assemble(
    texts: Vec<Extracted<String>>,
    images: Vec<Extracted<Vec<EmbeddedImage>>>,
) -> ExtractionResult {
    if images.len() > texts.len() {
        log::debug!(
            "Dropping {} image outcomes beyond page {}",
            images.len() - texts.len(),
            texts.len()
        );
    }

    let mut images = images.into_iter();
    let mut pages = Vec::with_capacity(texts.len());
    let mut faults = Vec::new();

    for (position, text) in texts.into_iter().enumerate() {
        let index = position as u32 + 1;
        let text = text.into_content(index, FaultStage::Text, &mut faults);
        let page_images = images
            .next()
            .map(|outcome| outcome.into_content(index, FaultStage::Images, &mut faults))
            .unwrap_or_default();
        pages.push(Page::new(index, text, page_images));
    }

    ExtractionResult { pages, faults }
}
