//! # pdfsheet
//!
//! PDF table, text, and OCR extraction to multi-sheet XLSX workbooks.
//!
//! Every page of the input document is observed by three independent
//! extraction strategies — native table detection, heuristic text-to-table
//! segmentation, and OCR over a rasterized page image — and each strategy's
//! rows are merged across all pages into its own worksheet (`Table Data`,
//! `Text Data`, `OCR Data`). Sheets that end up empty are omitted.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfsheet::Converter;
//!
//! fn main() -> pdfsheet::Result<()> {
//!     let converter = Converter::new()?;
//!     let workbook = converter.convert_file("report.pdf")?;
//!     std::fs::write("report.xlsx", workbook)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Three independent strategies per page**: a page can contribute to
//!   several sheets at once; none of the strategies short-circuits another
//! - **Best-effort OCR**: a failing recognizer or an unrenderable page
//!   costs that page's OCR contribution, never the whole conversion
//! - **Deterministic output**: rows appear in page order, header-less,
//!   cells positional and untyped
//! - **Mockable backend**: the pdfium and Tesseract seams are traits, so
//!   the pipeline runs in tests without native libraries

pub mod backend;
pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use backend::{PdfBackend, TableDetector, TableDetectorConfig, TextCell};
pub use convert::{extract_sheets, write_workbook, ConvertOptions, Converter};
pub use detect::{is_pdf, is_pdf_bytes, validate_header};
pub use error::{Error, Result};
pub use extract::{extract_page, segment, DisabledOcr, OcrEngine, OCR_DPI};
pub use model::{PageExtraction, Row, SheetCollection, SheetKind};
pub use render::to_xlsx;

#[cfg(feature = "ocr")]
pub use extract::TesseractOcr;

use std::io::Read;
use std::path::Path;

/// Convert a PDF file to an XLSX workbook with default options.
///
/// # Example
///
/// ```no_run
/// let workbook = pdfsheet::convert_file("document.pdf").unwrap();
/// std::fs::write("document.xlsx", workbook).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    Converter::new()?.convert_file(path)
}

/// Convert PDF bytes to an XLSX workbook with default options.
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("document.pdf").unwrap();
/// let workbook = pdfsheet::convert_bytes(&data).unwrap();
/// ```
pub fn convert_bytes(data: &[u8]) -> Result<Vec<u8>> {
    Converter::new()?.convert_bytes(data)
}

/// Convert a PDF from a reader to an XLSX workbook with default options.
pub fn convert_reader<R: Read>(reader: R) -> Result<Vec<u8>> {
    Converter::new()?.convert_reader(reader)
}

/// Builder for configured conversions.
///
/// # Example
///
/// ```no_run
/// use pdfsheet::Pdfsheet;
///
/// let workbook = Pdfsheet::new()
///     .with_ocr_language("eng+kor")
///     .with_password("secret")
///     .convert_file("encrypted.pdf")?;
/// # Ok::<(), pdfsheet::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pdfsheet {
    options: ConvertOptions,
}

impl Pdfsheet {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable the OCR strategy.
    pub fn without_ocr(mut self) -> Self {
        self.options = self.options.without_ocr();
        self
    }

    /// Set the Tesseract language code (default `"eng"`).
    pub fn with_ocr_language(mut self, language: impl Into<String>) -> Self {
        self.options = self.options.with_ocr_language(language);
        self
    }

    /// Set the document password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.options = self.options.with_password(password);
        self
    }

    /// Set table detection tuning.
    pub fn with_table_detector(mut self, config: TableDetectorConfig) -> Self {
        self.options = self.options.with_table_detector(config);
        self
    }

    /// Build the converter.
    pub fn build(self) -> Result<Converter> {
        Converter::with_options(self.options)
    }

    /// Convert a PDF file.
    pub fn convert_file<P: AsRef<Path>>(self, path: P) -> Result<Vec<u8>> {
        self.build()?.convert_file(path)
    }

    /// Convert PDF bytes.
    pub fn convert_bytes(self, data: &[u8]) -> Result<Vec<u8>> {
        self.build()?.convert_bytes(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_options() {
        let builder = Pdfsheet::new()
            .without_ocr()
            .with_ocr_language("deu")
            .with_password("pw");

        assert!(!builder.options.ocr);
        assert_eq!(builder.options.ocr_language, "deu");
        assert_eq!(builder.options.password, Some("pw".to_string()));
    }

    #[test]
    fn test_builder_default() {
        let builder = Pdfsheet::default();
        assert!(builder.options.ocr);
        assert_eq!(builder.options.ocr_language, "eng");
    }

    #[test]
    fn test_convert_bytes_rejects_non_pdf() {
        // Header validation runs before pdfium is even bound to a page, but
        // converter construction may still fail when the library is absent;
        // either way, garbage input must not produce a workbook.
        if let Ok(converter) = Converter::new() {
            let result = converter.convert_bytes(b"definitely not a pdf");
            assert!(matches!(
                result,
                Err(Error::UnknownFormat) | Err(Error::Decode(_))
            ));
        }
    }
}
