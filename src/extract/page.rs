//! Page extractor: runs all three strategies on one page.

use crate::backend::PdfBackend;
use crate::model::PageExtraction;

use super::{ocr, segment, OcrEngine};

/// Run native table, native text, and OCR extraction on one page.
///
/// The three strategies are independent observations of the same page, not
/// a fallback chain: each runs unconditionally, and a page can contribute
/// rows to more than one sheet. A strategy that finds nothing contributes
/// `None` ("absent"), never an empty placeholder row.
///
/// This function cannot fail. A backend or OCR error on one strategy is
/// logged and absorbed as absence so that one bad page never discards data
/// already extracted elsewhere; silent absence and a crashed strategy look
/// the same to the caller but differ in the log.
pub fn extract_page<B: PdfBackend + ?Sized>(
    backend: &B,
    index: u32,
    engine: &dyn OcrEngine,
) -> PageExtraction {
    let table = match backend.page_table(index) {
        Ok(Some(rows)) if !rows.is_empty() => {
            log::debug!("page {index}: table with {} row(s)", rows.len());
            Some(rows)
        }
        Ok(_) => None,
        Err(e) => {
            log::warn!("page {index}: table extraction failed: {e}");
            None
        }
    };

    let text = match backend.page_text(index) {
        Ok(Some(raw)) if !raw.trim().is_empty() => {
            let rows = segment(&raw);
            log::debug!("page {index}: text segmented into {} row(s)", rows.len());
            Some(rows)
        }
        Ok(_) => None,
        Err(e) => {
            log::warn!("page {index}: text extraction failed: {e}");
            None
        }
    };

    let ocr = ocr::extract(backend, index, engine);
    if let Some(rows) = &ocr {
        log::debug!("page {index}: OCR produced {} row(s)", rows.len());
    }

    PageExtraction { table, text, ocr }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::extract::DisabledOcr;
    use crate::model::Row;
    use image::DynamicImage;

    #[derive(Default)]
    struct StubPage {
        table: Option<Vec<Row>>,
        text: Option<String>,
        ocr_text: Option<String>,
        table_err: bool,
        text_err: bool,
    }

    #[derive(Default)]
    struct StubBackend {
        pages: Vec<StubPage>,
    }

    impl PdfBackend for StubBackend {
        fn page_count(&self) -> u32 {
            self.pages.len() as u32
        }

        fn page_table(&self, index: u32) -> Result<Option<Vec<Row>>> {
            let page = &self.pages[index as usize];
            if page.table_err {
                return Err(Error::Backend("table blew up".to_string()));
            }
            Ok(page.table.clone())
        }

        fn page_text(&self, index: u32) -> Result<Option<String>> {
            let page = &self.pages[index as usize];
            if page.text_err {
                return Err(Error::Backend("text blew up".to_string()));
            }
            Ok(page.text.clone())
        }

        fn render_page(&self, _index: u32, _dpi: f32) -> Result<DynamicImage> {
            Ok(DynamicImage::new_rgb8(4, 4))
        }
    }

    struct StubOcr<'a>(&'a StubBackend);

    impl OcrEngine for StubOcr<'_> {
        fn recognize(&self, _image: &DynamicImage) -> Result<String> {
            // One-page stub: OCR text of page 0.
            Ok(self.0.pages[0].ocr_text.clone().unwrap_or_default())
        }
    }

    #[test]
    fn test_all_strategies_run_independently() {
        let backend = StubBackend {
            pages: vec![StubPage {
                table: Some(vec![Row::from(vec!["h1", "h2"])]),
                text: Some("loose  text".to_string()),
                ocr_text: Some("scanned  words".to_string()),
                ..Default::default()
            }],
        };

        let result = extract_page(&backend, 0, &StubOcr(&backend));
        assert_eq!(result.table.unwrap(), vec![Row::from(vec!["h1", "h2"])]);
        assert_eq!(result.text.unwrap(), vec![Row::from(vec!["loose", "text"])]);
        assert_eq!(
            result.ocr.unwrap(),
            vec![Row::from(vec!["scanned", "words"])]
        );
    }

    #[test]
    fn test_blank_page_contributes_nothing() {
        let backend = StubBackend {
            pages: vec![StubPage::default()],
        };
        let result = extract_page(&backend, 0, &DisabledOcr);
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_table_is_absent() {
        let backend = StubBackend {
            pages: vec![StubPage {
                table: Some(vec![]),
                ..Default::default()
            }],
        };
        let result = extract_page(&backend, 0, &DisabledOcr);
        assert!(result.table.is_none());
    }

    #[test]
    fn test_whitespace_only_text_is_absent() {
        let backend = StubBackend {
            pages: vec![StubPage {
                text: Some("  \n \n".to_string()),
                ..Default::default()
            }],
        };
        let result = extract_page(&backend, 0, &DisabledOcr);
        assert!(result.text.is_none());
    }

    #[test]
    fn test_strategy_errors_are_absorbed() {
        let backend = StubBackend {
            pages: vec![StubPage {
                table_err: true,
                text_err: true,
                ocr_text: Some("still  works".to_string()),
                ..Default::default()
            }],
        };

        let result = extract_page(&backend, 0, &StubOcr(&backend));
        assert!(result.table.is_none());
        assert!(result.text.is_none());
        // A crash in two strategies does not take the third down.
        assert_eq!(result.ocr.unwrap(), vec![Row::from(vec!["still", "works"])]);
    }
}
