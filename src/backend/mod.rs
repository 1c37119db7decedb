//! PDF backend abstraction layer.
//!
//! Provides a trait-based interface for the three page capabilities the
//! pipeline consumes — native table extraction, native text extraction, and
//! rasterization — isolating the concrete PDF library (pdfium) from the
//! extraction logic. Tests run the full pipeline against in-memory mock
//! backends.

mod pdfium;
mod table_detector;

pub use pdfium::{bind_pdfium, PdfiumBackend};
pub use table_detector::{TableDetector, TableDetectorConfig, TextCell};

use image::DynamicImage;

use crate::error::Result;
use crate::model::Row;

/// Abstract interface for read-only access to an opened PDF document.
///
/// Pages are addressed by zero-based index. Implementations must not cache
/// state across calls in a way that breaks re-entrancy: one backend instance
/// belongs to exactly one conversion call.
pub trait PdfBackend {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Extract the structured table on a page, if the layout reports one.
    ///
    /// Returned rows are already cell-delimited; the pipeline passes them
    /// through verbatim. At most one table per page is reported.
    fn page_table(&self, index: u32) -> Result<Option<Vec<Row>>>;

    /// Extract the raw text of a page, or `None` when the page has no
    /// extractable text.
    fn page_text(&self, index: u32) -> Result<Option<String>>;

    /// Rasterize a page to an image at the given resolution.
    fn render_page(&self, index: u32, dpi: f32) -> Result<DynamicImage>;
}
