//! Concrete [`PdfBackend`] backed by pdfium.
//!
//! pdfium supplies all three page capabilities: positioned text fragments
//! (fed to the table detector), whole-page raw text, and rasterization.

use image::DynamicImage;
use pdfium_render::prelude::*;

use crate::error::{Error, Result};
use crate::model::Row;

use super::{PdfBackend, TableDetector, TableDetectorConfig, TextCell};

/// Bind the pdfium library.
///
/// Looks for a platform library next to the executable first, then falls
/// back to the system library.
pub fn bind_pdfium() -> Result<Pdfium> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Backend(format!("failed to bind pdfium library: {e}")))?;
    Ok(Pdfium::new(bindings))
}

/// Concrete [`PdfBackend`] over an opened `PdfDocument`.
///
/// Borrows the pdfium binding and the source bytes for the duration of one
/// conversion call; dropped when the call completes or fails.
pub struct PdfiumBackend<'a> {
    document: PdfDocument<'a>,
    detector: TableDetector,
}

impl<'a> PdfiumBackend<'a> {
    /// Open a document from an in-memory byte slice.
    ///
    /// Fails with [`Error::Decode`] if the stream is not a parseable PDF,
    /// or [`Error::Encrypted`] if a required password is missing or wrong.
    pub fn open(pdfium: &'a Pdfium, data: &'a [u8], password: Option<&str>) -> Result<Self> {
        let document = pdfium
            .load_pdf_from_byte_slice(data, password)
            .map_err(map_open_error)?;
        Ok(Self {
            document,
            detector: TableDetector::new(),
        })
    }

    /// Open with a custom table detector configuration.
    pub fn open_with_detector(
        pdfium: &'a Pdfium,
        data: &'a [u8],
        password: Option<&str>,
        config: TableDetectorConfig,
    ) -> Result<Self> {
        let mut backend = Self::open(pdfium, data, password)?;
        backend.detector = TableDetector::with_config(config);
        Ok(backend)
    }

    fn page(&self, index: u32) -> Result<PdfPage<'_>> {
        let index = u16::try_from(index)
            .map_err(|_| Error::Backend(format!("page index {index} out of range")))?;
        self.document
            .pages()
            .get(index)
            .map_err(|e| Error::Backend(format!("failed to load page {index}: {e}")))
    }

    /// Collect positioned text fragments from a page, converted from
    /// pdfium's bottom-left origin to top-left origin.
    fn text_cells(&self, page: &PdfPage<'_>) -> Result<Vec<TextCell>> {
        let page_height = page.height().value;
        let text = page
            .text()
            .map_err(|e| Error::Backend(format!("failed to read page text: {e}")))?;

        let mut cells = Vec::new();
        for segment in text.segments().iter() {
            let content = segment.text();
            let content = content.trim();
            if content.is_empty() {
                continue;
            }

            let bounds = segment.bounds();
            cells.push(TextCell {
                text: content.to_string(),
                x: bounds.left().value,
                y: page_height - bounds.top().value,
                width: bounds.right().value - bounds.left().value,
                height: bounds.top().value - bounds.bottom().value,
            });
        }

        cells.sort_by(|a, b| {
            let y_cmp = a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal);
            if y_cmp == std::cmp::Ordering::Equal {
                a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal)
            } else {
                y_cmp
            }
        });

        Ok(cells)
    }
}

impl PdfBackend for PdfiumBackend<'_> {
    fn page_count(&self) -> u32 {
        u32::from(self.document.pages().len())
    }

    fn page_table(&self, index: u32) -> Result<Option<Vec<Row>>> {
        let page = self.page(index)?;
        let cells = self.text_cells(&page)?;
        Ok(self.detector.detect(&cells))
    }

    fn page_text(&self, index: u32) -> Result<Option<String>> {
        let page = self.page(index)?;
        let text = page
            .text()
            .map_err(|e| Error::Backend(format!("failed to read page text: {e}")))?
            .all();
        if text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }

    fn render_page(&self, index: u32, dpi: f32) -> Result<DynamicImage> {
        let page = self.page(index)?;

        // PDF points are 72 per inch.
        let scale = dpi / 72.0;
        let pixel_width = (page.width().value * scale) as i32;
        let pixel_height = (page.height().value * scale) as i32;

        let bitmap = page
            .render_with_config(
                &PdfRenderConfig::new()
                    .set_target_width(pixel_width)
                    .set_target_height(pixel_height)
                    .render_form_data(true)
                    .render_annotations(true),
            )
            .map_err(|e| Error::Render(format!("failed to render page {index}: {e}")))?;

        Ok(bitmap.as_image())
    }
}

fn map_open_error(err: PdfiumError) -> Error {
    match err {
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
            Error::Encrypted
        }
        other => Error::Decode(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_open_error_password() {
        let err = map_open_error(PdfiumError::PdfiumLibraryInternalError(
            PdfiumInternalError::PasswordError,
        ));
        assert!(matches!(err, Error::Encrypted));
    }

    #[test]
    fn test_map_open_error_format() {
        let err = map_open_error(PdfiumError::PdfiumLibraryInternalError(
            PdfiumInternalError::FormatError,
        ));
        assert!(matches!(err, Error::Decode(_)));
    }
}
