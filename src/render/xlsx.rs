//! XLSX workbook serialization.

use rust_xlsxwriter::Workbook;

use crate::error::{Error, Result};
use crate::model::SheetCollection;

/// Serialize sheet collections into an XLSX workbook byte buffer.
///
/// Each non-empty collection becomes one worksheet, in the order given.
/// Rows are written header-less and positionally: cells land in consecutive
/// columns as-is, with no padding or truncation of ragged rows, and no type
/// coercion — every cell is written as a string. Collections with zero rows
/// are skipped entirely rather than producing an empty sheet, so the
/// workbook holds between zero and three of the named sheets.
///
/// The returned buffer is a complete file, ready for transmission.
pub fn to_xlsx(sheets: &[SheetCollection]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    for collection in sheets {
        if collection.is_empty() {
            continue;
        }

        log::debug!(
            "writing sheet '{}' with {} row(s)",
            collection.kind.sheet_name(),
            collection.row_count()
        );

        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(collection.kind.sheet_name())
            .map_err(|e| workbook_error(e.to_string()))?;

        for (row_idx, row) in collection.rows.iter().enumerate() {
            let row_idx = u32::try_from(row_idx)
                .map_err(|_| workbook_error(format!("too many rows: {}", collection.row_count())))?;
            for (col_idx, cell) in row.cells.iter().enumerate() {
                let col_idx = u16::try_from(col_idx)
                    .map_err(|_| workbook_error(format!("too many columns: {}", row.len())))?;
                worksheet
                    .write_string(row_idx, col_idx, cell)
                    .map_err(|e| workbook_error(e.to_string()))?;
            }
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| workbook_error(e.to_string()))
}

fn workbook_error(message: String) -> Error {
    Error::Conversion { pages: 0, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Row, SheetKind};

    fn collection(kind: SheetKind, rows: Vec<Row>) -> SheetCollection {
        let mut c = SheetCollection::new(kind);
        c.extend_from_page(rows);
        c
    }

    #[test]
    fn test_empty_collections_produce_valid_workbook() {
        let sheets = [
            SheetCollection::new(SheetKind::Table),
            SheetCollection::new(SheetKind::Text),
            SheetCollection::new(SheetKind::Ocr),
        ];
        let bytes = to_xlsx(&sheets).unwrap();
        // XLSX is a ZIP container: PK magic.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_single_sheet_written() {
        let sheets = [
            collection(SheetKind::Table, vec![Row::from(vec!["a", "b"])]),
            SheetCollection::new(SheetKind::Text),
            SheetCollection::new(SheetKind::Ocr),
        ];
        let bytes = to_xlsx(&sheets).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_ragged_rows_accepted() {
        let sheets = [collection(
            SheetKind::Text,
            vec![
                Row::from(vec!["one"]),
                Row::from(vec!["a", "b", "c", "d"]),
                Row::single(""),
            ],
        )];
        assert!(to_xlsx(&sheets).is_ok());
    }
}
