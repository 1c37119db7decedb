//! Per-page extraction strategies.
//!
//! Three independent strategies observe each page: native table detection
//! (via the backend), native text extraction run through the segmenter, and
//! OCR over a rasterized page image. They are not a fallback chain; every
//! strategy runs on every page and contributes (or not) on its own.

mod ocr;
mod page;
mod segment;

pub use ocr::{DisabledOcr, OcrEngine, OCR_DPI};
pub use page::extract_page;
pub use segment::segment;

#[cfg(feature = "ocr")]
pub use ocr::TesseractOcr;
