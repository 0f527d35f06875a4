//! Page listing for reading clients, with images inlined as data URIs.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{EmbeddedImage, ExtractionResult};

use super::json::serialize;
use super::JsonFormat;

/// The page listing a reader client renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageListing {
    /// Pages in reading order
    pub pages: Vec<ListedPage>,
}

/// One page of a [`PageListing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedPage {
    /// Page number (1-indexed)
    pub page: u32,

    /// Page text
    pub text: String,

    /// Images as `data:` URIs
    pub images: Vec<String>,
}

/// Encode an image as a `data:<mime>;base64,<payload>` URI.
pub fn data_uri(image: &EmbeddedImage) -> String {
    format!(
        "data:{};base64,{}",
        image.mime_type,
        STANDARD.encode(&image.data)
    )
}

/// Build the client-facing listing of a result.
pub fn to_page_listing(result: &ExtractionResult) -> PageListing {
    let pages = result
        .pages
        .iter()
        .map(|page| ListedPage {
            page: page.index,
            text: page.text.clone(),
            images: page.images.iter().map(data_uri).collect(),
        })
        .collect();

    PageListing { pages }
}

/// Render the client-facing listing as JSON.
pub fn to_listing_json(result: &ExtractionResult, format: JsonFormat) -> Result<String> {
    serialize(&to_page_listing(result), format)
}
