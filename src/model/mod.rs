//! Data model for extracted tabular content.
//!
//! These types are the intermediate representation between per-page
//! extraction and workbook serialization: a [`Row`] of cell strings, the
//! per-page [`PageExtraction`] holding each strategy's optional rows, and
//! the per-strategy [`SheetCollection`] accumulated across all pages.

mod row;
mod sheet;

pub use row::{PageExtraction, Row};
pub use sheet::{SheetCollection, SheetKind};
