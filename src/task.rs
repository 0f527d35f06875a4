//! Async wrappers for services running on Tokio.
//!
//! Extraction is CPU-bound and synchronous, so these helpers move it onto
//! the blocking pool instead of stalling the async executor.

use std::io;
use std::time::Duration;

use crate::detect::Format;
use crate::error::{Error, Result};
use crate::extract::{extract_format, ExtractOptions};
use crate::model::ExtractionResult;

/// Extract a document on Tokio's blocking pool.
pub async fn extract_async(
    bytes: Vec<u8>,
    format: Format,
    options: ExtractOptions,
) -> Result<ExtractionResult> {
    tokio::task::spawn_blocking(move || extract_format(&bytes, format, &options))
        .await
        .map_err(|e| Error::Io(io::Error::other(e)))?
}

/// Extract a document, giving up after `limit`.
///
/// The blocking task keeps running to completion after a timeout; only the
/// caller stops waiting for it.
pub async fn extract_with_timeout(
    bytes: Vec<u8>,
    format: Format,
    options: ExtractOptions,
    limit: Duration,
) -> Result<ExtractionResult> {
    match tokio::time::timeout(limit, extract_async(bytes, format, options)).await {
        Ok(result) => result,
        Err(_) => {
            log::warn!("{} extraction exceeded {:?}", format, limit);
            Err(Error::Timeout(limit))
        }
    }
}
