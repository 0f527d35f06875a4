//! Output model of an extraction call.
//!
//! Every value here is built fresh per call and never mutated once the
//! assembler hands it back.

mod image;
mod page;

pub use image::{detect_mime_type, mime_from_name, EmbeddedImage, DEFAULT_IMAGE_MIME};
pub use page::{ExtractionResult, FaultStage, Page, PageFault};
