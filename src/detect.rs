//! PDF format detection and validation.
//!
//! The conversion pipeline only accepts PDF input; callers that hold a raw
//! upload can use [`is_pdf_bytes`] as a cheap pre-check before paying for a
//! full decode.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// PDF magic bytes: `%PDF-`
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Minimum header length carrying the magic plus a version like `1.7`.
const MIN_HEADER_LEN: usize = PDF_MAGIC.len() + 3;

/// Check whether a byte slice starts with the PDF magic bytes.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    data.len() >= MIN_HEADER_LEN && data.starts_with(PDF_MAGIC)
}

/// Check whether a file starts with the PDF magic bytes.
///
/// Reads only the first few bytes of the file.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> Result<bool> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; MIN_HEADER_LEN];
    match reader.read_exact(&mut header) {
        Ok(()) => Ok(is_pdf_bytes(&header)),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Validate that a byte stream looks like a PDF document.
///
/// Returns the declared PDF version string (e.g. `"1.7"`) on success, or
/// [`Error::UnknownFormat`] if the magic bytes are missing.
pub fn validate_header(data: &[u8]) -> Result<String> {
    if !is_pdf_bytes(data) {
        return Err(Error::UnknownFormat);
    }
    let version = &data[PDF_MAGIC.len()..MIN_HEADER_LEN];
    Ok(String::from_utf8_lossy(version).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\ntest"));
        assert!(is_pdf_bytes(b"%PDF-2.0"));
        assert!(!is_pdf_bytes(b"Not a PDF file"));
        assert!(!is_pdf_bytes(b"%PDF"));
        assert!(!is_pdf_bytes(b""));
    }

    #[test]
    fn test_validate_header_version() {
        assert_eq!(validate_header(b"%PDF-1.7\n%binary").unwrap(), "1.7");
        assert_eq!(validate_header(b"%PDF-2.0\n").unwrap(), "2.0");
    }

    #[test]
    fn test_validate_header_rejects_garbage() {
        let result = validate_header(b"<!DOCTYPE html>");
        assert!(matches!(result, Err(Error::UnknownFormat)));

        let result = validate_header(b"");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_is_pdf_short_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.pdf");
        std::fs::write(&path, b"%PD").unwrap();
        assert!(!is_pdf(&path).unwrap());
    }
}
