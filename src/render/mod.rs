//! Workbook serialization.

mod xlsx;

pub use xlsx::to_xlsx;
