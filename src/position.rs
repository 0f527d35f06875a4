//! Position addressing inside an extraction result.
//!
//! Progress, bookmark and annotation records reference a point in a book by
//! an opaque token `"<page>:<offset>"`, where `offset` counts characters in
//! that page's text. The token is meaningful only against a result produced
//! from the same document version; checking that is the caller's job.
//!
//! ```
//! use folio::PagePosition;
//!
//! let position = PagePosition::new(12, 340)?;
//! assert_eq!(position.encode(), "12:340");
//! assert_eq!(PagePosition::decode("12:340")?, position);
//! # Ok::<(), folio::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::model::ExtractionResult;

/// A `(page, offset)` location. Orders by page, then offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PagePosition {
    page: u32,
    offset: u32,
}

impl PagePosition {
    /// Create a position. Pages are 1-indexed.
    pub fn new(page: u32, offset: u32) -> Result<Self> {
        if page == 0 {
            return Err(Error::InvalidPosition("page numbers start at 1".to_string()));
        }
        Ok(Self { page, offset })
    }

    /// The start of a page.
    pub fn start_of(page: u32) -> Result<Self> {
        Self::new(page, 0)
    }

    /// Page number (1-indexed).
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Character offset within the page text.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Encode as `"<page>:<offset>"`.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Decode a `"<page>:<offset>"` token.
    ///
    /// Both parts must be plain ASCII digits that fit in `u32`, and the page
    /// must be at least 1. Signs, whitespace and extra separators are
    /// rejected.
    pub fn decode(token: &str) -> Result<Self> {
        let malformed = || Error::MalformedPosition(token.to_string());

        let (page, offset) = token.split_once(':').ok_or_else(malformed)?;
        let page = parse_component(page).ok_or_else(malformed)?;
        let offset = parse_component(offset).ok_or_else(malformed)?;

        if page == 0 {
            return Err(malformed());
        }

        Ok(Self { page, offset })
    }

    /// Check that the position exists in a result.
    ///
    /// The offset may equal the page's character count (the end of the page).
    /// Extraction never calls this; it is for callers that want to reject
    /// stale positions.
    pub fn is_within(&self, result: &ExtractionResult) -> bool {
        result
            .page(self.page)
            .is_some_and(|page| self.offset as usize <= page.char_count())
    }

    /// Reading progress this position represents, in percent.
    pub fn percentage_of(&self, total_pages: u32) -> f64 {
        percentage_complete(self.page, total_pages)
    }
}

/// Reading progress for `page` out of `total_pages`, in percent.
///
/// Clamped to `0.0..=100.0`; a book without pages reports `0.0`.
pub fn percentage_complete(page: u32, total_pages: u32) -> f64 {
    if total_pages == 0 {
        return 0.0;
    }
    (f64::from(page) / f64::from(total_pages) * 100.0).clamp(0.0, 100.0)
}

fn parse_component(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl fmt::Display for PagePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.page, self.offset)
    }
}

impl FromStr for PagePosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl Serialize for PagePosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PagePosition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Self::decode(&token).map_err(serde::de::Error::custom)
    }
}
