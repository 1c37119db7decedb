//! OCR extraction: rasterize a page and recognize its text.

use image::DynamicImage;

use crate::backend::PdfBackend;
use crate::error::Result;
use crate::model::Row;

use super::segment;

/// Resolution used for page rasterization before OCR.
///
/// Fixed design constant trading recognition accuracy against processing
/// latency; not configurable per call.
pub const OCR_DPI: f32 = 300.0;

/// Character recognition over a rendered page image.
///
/// Implementations return the whole page as one raw text block; column and
/// layout reconstruction happens later in the segmenter.
pub trait OcrEngine: Send + Sync {
    /// Recognize text in an image. An image with no recognizable characters
    /// is a successful empty result, not an error.
    fn recognize(&self, image: &DynamicImage) -> Result<String>;
}

/// An [`OcrEngine`] that recognizes nothing.
///
/// Used when the `ocr` cargo feature is disabled or OCR is switched off in
/// the conversion options; every page's OCR contribution becomes absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledOcr;

impl OcrEngine for DisabledOcr {
    fn recognize(&self, _image: &DynamicImage) -> Result<String> {
        Ok(String::new())
    }
}

/// Run the OCR strategy on one page.
///
/// Renders the page at [`OCR_DPI`], recognizes its text, and segments the
/// result into rows. Best-effort by design: any rendering or recognition
/// failure is logged and converted into "no data" for this page — OCR is a
/// fallback signal and must never abort the whole document conversion.
pub fn extract<B: PdfBackend + ?Sized>(
    backend: &B,
    index: u32,
    engine: &dyn OcrEngine,
) -> Option<Vec<Row>> {
    let image = match backend.render_page(index, OCR_DPI) {
        Ok(image) => image,
        Err(e) => {
            log::warn!("OCR: render failed on page {index}: {e}");
            return None;
        }
    };

    let raw_text = match engine.recognize(&image) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("OCR: recognition failed on page {index}: {e}");
            return None;
        }
    };

    if raw_text.trim().is_empty() {
        return None;
    }

    Some(segment(&raw_text))
}

#[cfg(feature = "ocr")]
pub use tesseract::TesseractOcr;

#[cfg(feature = "ocr")]
mod tesseract {
    use std::io::Cursor;
    use std::sync::Mutex;

    use image::DynamicImage;
    use leptess::LepTess;

    use crate::error::{Error, Result};

    use super::OcrEngine;

    /// Tesseract-backed [`OcrEngine`].
    ///
    /// Holds one Tesseract instance per engine; the instance is not
    /// re-entrant, so it sits behind a mutex. One engine per concurrent
    /// conversion keeps calls lock-free in practice.
    pub struct TesseractOcr {
        inner: Mutex<LepTess>,
    }

    impl TesseractOcr {
        /// Initialize Tesseract with the given language code (e.g. `"eng"`).
        ///
        /// Fails if the language data is not installed.
        pub fn new(language: &str) -> Result<Self> {
            let inner = LepTess::new(None, language).map_err(|e| {
                Error::Ocr(format!(
                    "failed to initialize Tesseract with language '{language}': {e}"
                ))
            })?;
            Ok(Self {
                inner: Mutex::new(inner),
            })
        }
    }

    impl OcrEngine for TesseractOcr {
        fn recognize(&self, image: &DynamicImage) -> Result<String> {
            // leptess expects encoded image data.
            let mut png = Cursor::new(Vec::new());
            image
                .write_to(&mut png, image::ImageFormat::Png)
                .map_err(|e| Error::Ocr(format!("failed to encode page image: {e}")))?;

            let mut tess = self
                .inner
                .lock()
                .map_err(|_| Error::Ocr("Tesseract instance poisoned".to_string()))?;
            tess.set_image_from_mem(png.get_ref())
                .map_err(|e| Error::Ocr(format!("failed to set image: {e}")))?;
            tess.get_utf8_text()
                .map_err(|e| Error::Ocr(format!("recognition failed: {e}")))
        }
    }
}
