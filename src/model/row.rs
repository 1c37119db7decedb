//! Row and per-page extraction types.

use serde::{Deserialize, Serialize};

/// One extracted row: an ordered sequence of cell strings.
///
/// Rows in the same collection may have different lengths; no schema is
/// enforced and no type coercion is performed — cells are always strings.
/// A missing cell is represented by an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Cell values, left to right.
    pub cells: Vec<String>,
}

impl Row {
    /// Create a row from cell strings.
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Create a single-cell row.
    pub fn single(cell: impl Into<String>) -> Self {
        Self {
            cells: vec![cell.into()],
        }
    }

    /// Number of cells in this row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells at all.
    ///
    /// Note that a one-cell row holding an empty string is not empty; it
    /// carries line-count information.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self {
        Self::new(cells)
    }
}

impl From<Vec<&str>> for Row {
    fn from(cells: Vec<&str>) -> Self {
        Self::new(cells.into_iter().map(str::to_string).collect())
    }
}

/// The result of running all three extraction strategies on one page.
///
/// `None` means the strategy contributed nothing for this page ("absent"),
/// which is distinct from `Some(vec![])` and never stands in for an empty
/// placeholder row. Absence is a normal outcome, not a failure: strategy
/// errors are absorbed before this type is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageExtraction {
    /// Rows from native table detection, cells already delimited.
    pub table: Option<Vec<Row>>,
    /// Rows from native text extraction run through the segmenter.
    pub text: Option<Vec<Row>>,
    /// Rows from OCR output run through the segmenter.
    pub ocr: Option<Vec<Row>>,
}

impl PageExtraction {
    /// True if no strategy contributed anything for this page.
    pub fn is_empty(&self) -> bool {
        self.table.is_none() && self.text.is_none() && self.ocr.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_strs() {
        let row = Row::from(vec!["Name", "Age"]);
        assert_eq!(row.cells, vec!["Name".to_string(), "Age".to_string()]);
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_single_cell_row_with_empty_string_is_not_empty() {
        let row = Row::single("");
        assert!(!row.is_empty());
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn test_page_extraction_empty() {
        let extraction = PageExtraction::default();
        assert!(extraction.is_empty());

        let extraction = PageExtraction {
            text: Some(vec![Row::single("hello")]),
            ..Default::default()
        };
        assert!(!extraction.is_empty());
    }
}
