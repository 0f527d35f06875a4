//! Caller-facing transport for extraction results.
//!
//! The extraction core returns raw image bytes; this module is where they
//! become base64 JSON or data URIs for a reading client.

mod json;
mod listing;
mod stats;

pub use json::{to_json, JsonFormat};
pub use listing::{data_uri, to_listing_json, to_page_listing, ListedPage, PageListing};
pub use stats::ExtractionStats;
