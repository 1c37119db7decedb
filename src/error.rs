//! Error types for pdfsheet library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfsheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during PDF-to-workbook conversion.
///
/// Only the decode family ([`Error::UnknownFormat`], [`Error::Decode`],
/// [`Error::Encrypted`], [`Error::Backend`]) raised while opening the
/// document, plus [`Error::Io`] and [`Error::Conversion`], are terminal for
/// a conversion call. Everything that goes wrong on a single page for a
/// single extraction strategy is absorbed inside the extractors and never
/// surfaces here.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The input byte stream could not be parsed as a PDF document.
    #[error("Failed to decode PDF document: {0}")]
    Decode(String),

    /// The PDF document is encrypted and the password is missing or wrong.
    #[error("Document is encrypted")]
    Encrypted,

    /// The PDF backend library could not be initialized or driven.
    #[error("PDF backend error: {0}")]
    Backend(String),

    /// Error rasterizing a page to an image.
    #[error("Page render error: {0}")]
    Render(String),

    /// Error from the OCR engine.
    #[error("OCR error: {0}")]
    Ocr(String),

    /// Failure while assembling or serializing the output workbook.
    ///
    /// Carries the number of pages that had been processed so the caller
    /// can tell how far the conversion got. No partial workbook is ever
    /// returned.
    #[error("Workbook conversion failed after {pages} page(s): {message}")]
    Conversion {
        /// Pages processed before the failure.
        pages: u32,
        /// Underlying cause.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::Conversion {
            pages: 3,
            message: "disk full".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Workbook conversion failed after 3 page(s): disk full"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_decode_error_display() {
        let err = Error::Decode("truncated xref table".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to decode PDF document: truncated xref table"
        );
    }
}
