//! Error types for the anydoc library.

use std::io;
use thiserror::Error;

/// Result type alias for anydoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input data.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input exceeds the configured size limit.
    ///
    /// Raised before any extractor runs.
    #[error("File is {size} bytes, exceeding the {limit_mb} MB limit")]
    FileTooLarge {
        /// Actual input size in bytes.
        size: usize,
        /// Configured limit in megabytes.
        limit_mb: u32,
    },

    /// No extractor handles the file's extension.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// The selected extractor could not decode the file at all.
    ///
    /// Element-local problems inside an otherwise readable file degrade by
    /// omission instead of producing this error.
    #[error("Extraction failed for {filename}: {cause}")]
    ExtractionFailed {
        /// Name of the offending file.
        filename: String,
        /// Underlying cause reported by the extractor.
        cause: String,
    },

    /// A table row's cell count does not match its header count.
    #[error("Malformed table: row has {found} cells, expected {expected}")]
    MalformedTable {
        /// Number of header columns.
        expected: usize,
        /// Number of cells found in the offending row.
        found: usize,
    },

    /// Error during rendering (JSON, Markdown).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Error decoding a structured rendering back into a parse result.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl Error {
    /// Build an [`Error::ExtractionFailed`] from a filename and any cause.
    pub fn extraction(filename: impl Into<String>, cause: impl ToString) -> Self {
        Error::ExtractionFailed {
            filename: filename.into(),
            cause: cause.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedFormat("zzz".to_string());
        assert_eq!(err.to_string(), "Unsupported file format: zzz");

        let err = Error::FileTooLarge {
            size: 104857600,
            limit_mb: 50,
        };
        assert_eq!(
            err.to_string(),
            "File is 104857600 bytes, exceeding the 50 MB limit"
        );

        let err = Error::MalformedTable {
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "Malformed table: row has 2 cells, expected 3");
    }

    #[test]
    fn test_extraction_helper() {
        let err = Error::extraction("broken.pdf", "truncated xref");
        assert!(matches!(err, Error::ExtractionFailed { .. }));
        assert_eq!(
            err.to_string(),
            "Extraction failed for broken.pdf: truncated xref"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
