//! Document pipeline: PDF bytes in, XLSX workbook bytes out.
//!
//! The pipeline iterates pages strictly in document order, runs the three
//! extraction strategies on each page, folds the per-page results into three
//! locally-owned sheet collections, and serializes the non-empty ones. Each
//! `convert` call owns its document, accumulators, and image buffers;
//! concurrent calls share no mutable state.

use std::io::Read;
use std::path::Path;

use crate::backend::{bind_pdfium, PdfBackend, PdfiumBackend, TableDetectorConfig};
use crate::detect::validate_header;
use crate::error::{Error, Result};
use crate::extract::{extract_page, DisabledOcr, OcrEngine};
use crate::model::{SheetCollection, SheetKind};
use crate::render::to_xlsx;

#[cfg(feature = "ocr")]
use crate::extract::TesseractOcr;

/// Options for a PDF-to-workbook conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Whether to run the OCR strategy at all.
    pub ocr: bool,

    /// Tesseract language code (e.g. `"eng"`, `"eng+kor"`).
    pub ocr_language: String,

    /// Password for encrypted documents.
    pub password: Option<String>,

    /// Table detection tuning.
    pub table_detector: TableDetectorConfig,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            ocr: true,
            ocr_language: "eng".to_string(),
            password: None,
            table_detector: TableDetectorConfig::default(),
        }
    }
}

impl ConvertOptions {
    /// Create default conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable the OCR strategy; the `OCR Data` sheet will never appear.
    pub fn without_ocr(mut self) -> Self {
        self.ocr = false;
        self
    }

    /// Set the Tesseract language code.
    pub fn with_ocr_language(mut self, language: impl Into<String>) -> Self {
        self.ocr_language = language.into();
        self
    }

    /// Set the document password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set table detection tuning.
    pub fn with_table_detector(mut self, config: TableDetectorConfig) -> Self {
        self.table_detector = config;
        self
    }
}

/// Fold all pages of an opened document into the three sheet collections.
///
/// Pages are processed strictly sequentially: ordering within each
/// collection is page-ascending, and within a page, the order emitted by
/// the strategy. Per-page strategy failures have already been absorbed by
/// the extractors, so this fold cannot fail.
///
/// Returns the collections in fixed output order (table, text, OCR).
pub fn extract_sheets<B: PdfBackend + ?Sized>(
    backend: &B,
    engine: &dyn OcrEngine,
) -> [SheetCollection; 3] {
    let mut table = SheetCollection::new(SheetKind::Table);
    let mut text = SheetCollection::new(SheetKind::Text);
    let mut ocr = SheetCollection::new(SheetKind::Ocr);

    let page_count = backend.page_count();
    for index in 0..page_count {
        log::debug!("processing page {} of {page_count}", index + 1);
        let extraction = extract_page(backend, index, engine);

        if let Some(rows) = extraction.table {
            table.extend_from_page(rows);
        }
        if let Some(rows) = extraction.text {
            text.extend_from_page(rows);
        }
        if let Some(rows) = extraction.ocr {
            ocr.extend_from_page(rows);
        }
    }

    [table, text, ocr]
}

/// Serialize folded collections, attaching page context to failures.
pub fn write_workbook(sheets: &[SheetCollection], pages: u32) -> Result<Vec<u8>> {
    to_xlsx(sheets).map_err(|e| match e {
        Error::Conversion { message, .. } => Error::Conversion { pages, message },
        other => other,
    })
}

/// PDF-to-workbook converter.
///
/// Holds the pdfium binding and the OCR engine so they can be reused across
/// conversions; each `convert_*` call opens and owns its own document.
pub struct Converter {
    pdfium: pdfium_render::prelude::Pdfium,
    engine: Box<dyn OcrEngine>,
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(ConvertOptions::default())
    }

    /// Create a converter with the given options.
    ///
    /// Fails if the pdfium library cannot be bound. An OCR engine that
    /// cannot initialize (missing language data, missing native library) is
    /// downgraded to a disabled engine with a warning: OCR is best-effort
    /// and its absence must not make whole conversions impossible.
    pub fn with_options(options: ConvertOptions) -> Result<Self> {
        let pdfium = bind_pdfium()?;
        let engine = build_engine(&options);
        Ok(Self {
            pdfium,
            engine,
            options,
        })
    }

    /// Replace the OCR engine with a custom implementation.
    pub fn with_ocr_engine(mut self, engine: Box<dyn OcrEngine>) -> Self {
        self.engine = engine;
        self
    }

    /// Convert a PDF byte stream into an XLSX workbook byte buffer.
    ///
    /// Fails with a decode error if the stream is not a parseable PDF (no
    /// page is processed in that case), or with [`Error::Conversion`] if
    /// workbook serialization fails after all pages were processed. There
    /// is no partial success: the call either returns a complete (possibly
    /// sparse) workbook or an error.
    pub fn convert_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        let version = validate_header(data)?;
        log::info!("converting PDF {version}, {} bytes", data.len());

        let backend = PdfiumBackend::open_with_detector(
            &self.pdfium,
            data,
            self.options.password.as_deref(),
            self.options.table_detector.clone(),
        )?;

        let pages = backend.page_count();
        let sheets = extract_sheets(&backend, self.engine.as_ref());
        let filled = sheets.iter().filter(|s| !s.is_empty()).count();
        log::info!("processed {pages} page(s), {filled} non-empty sheet(s)");

        write_workbook(&sheets, pages)
    }

    /// Convert a PDF file into an XLSX workbook byte buffer.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<u8>> {
        let data = std::fs::read(path)?;
        self.convert_bytes(&data)
    }

    /// Convert a PDF from any reader into an XLSX workbook byte buffer.
    pub fn convert_reader<R: Read>(&self, mut reader: R) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.convert_bytes(&data)
    }
}

#[cfg(feature = "ocr")]
fn build_engine(options: &ConvertOptions) -> Box<dyn OcrEngine> {
    if !options.ocr {
        return Box::new(DisabledOcr);
    }
    match TesseractOcr::new(&options.ocr_language) {
        Ok(engine) => Box::new(engine),
        Err(e) => {
            log::warn!("OCR engine unavailable, continuing without it: {e}");
            Box::new(DisabledOcr)
        }
    }
}

#[cfg(not(feature = "ocr"))]
fn build_engine(options: &ConvertOptions) -> Box<dyn OcrEngine> {
    if options.ocr {
        log::warn!("built without the 'ocr' feature; OCR strategy disabled");
    }
    Box::new(DisabledOcr)
}
