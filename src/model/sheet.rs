//! Sheet collections: per-strategy row accumulators.

use serde::{Deserialize, Serialize};

use super::Row;

/// The three extraction strategies, in fixed output-sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SheetKind {
    /// Native table detection.
    Table,
    /// Native text extraction plus segmentation.
    Text,
    /// OCR plus segmentation.
    Ocr,
}

impl SheetKind {
    /// All kinds in the fixed workbook order.
    pub const ALL: [SheetKind; 3] = [SheetKind::Table, SheetKind::Text, SheetKind::Ocr];

    /// The exact worksheet name used in the output workbook.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            SheetKind::Table => "Table Data",
            SheetKind::Text => "Text Data",
            SheetKind::Ocr => "OCR Data",
        }
    }
}

/// All rows gathered for one strategy across an entire document.
///
/// Rows are appended in page-ascending order and, within a page, in the
/// order emitted by the strategy. The collection grows monotonically during
/// the page fold and is treated as immutable once handed to serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetCollection {
    /// Which strategy this collection belongs to.
    pub kind: SheetKind,
    /// Accumulated rows.
    pub rows: Vec<Row>,
}

impl SheetCollection {
    /// Create an empty collection for the given strategy.
    pub fn new(kind: SheetKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
        }
    }

    /// Append one page's contribution, preserving order.
    pub fn extend_from_page(&mut self, rows: Vec<Row>) {
        self.rows.extend(rows);
    }

    /// Number of accumulated rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// A collection with zero rows produces no sheet at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_names() {
        assert_eq!(SheetKind::Table.sheet_name(), "Table Data");
        assert_eq!(SheetKind::Text.sheet_name(), "Text Data");
        assert_eq!(SheetKind::Ocr.sheet_name(), "OCR Data");
    }

    #[test]
    fn test_fixed_order() {
        let names: Vec<_> = SheetKind::ALL.iter().map(|k| k.sheet_name()).collect();
        assert_eq!(names, vec!["Table Data", "Text Data", "OCR Data"]);
    }

    #[test]
    fn test_collection_json_round_trip() {
        let mut collection = SheetCollection::new(SheetKind::Ocr);
        collection.extend_from_page(vec![
            Row::from(vec!["Name", "Age"]),
            Row::from(vec!["Alice", ""]),
        ]);

        let json = serde_json::to_string(&collection).unwrap();
        let back: SheetCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, collection);
        assert_eq!(back.kind, SheetKind::Ocr);
        assert_eq!(back.rows[1].cells[1], "");
    }

    #[test]
    fn test_extend_preserves_order() {
        let mut collection = SheetCollection::new(SheetKind::Text);
        collection.extend_from_page(vec![Row::single("page1-a"), Row::single("page1-b")]);
        collection.extend_from_page(vec![Row::single("page2-a")]);

        let cells: Vec<_> = collection
            .rows
            .iter()
            .map(|r| r.cells[0].as_str())
            .collect();
        assert_eq!(cells, vec!["page1-a", "page1-b", "page2-a"]);
    }
}
