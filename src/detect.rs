//! Source format detection.
//!
//! Dispatch is extension-driven: the filename decides which extractor runs.
//! Magic-byte sniffing is available as a cross-check for callers that want
//! to validate uploads before parsing.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Closed set of source formats the pipeline can extract from.
///
/// Adding a format means adding a variant here and a matching arm in the
/// aggregator's dispatch, so the compiler flags every site that needs
/// updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// PDF documents (`.pdf`)
    Pdf,
    /// Word-processor documents (`.docx`, `.doc`)
    Docx,
    /// Spreadsheets (`.xlsx`, `.xls`, `.csv`)
    Spreadsheet,
    /// Raster images (`.png`, `.jpg`, `.jpeg`, `.gif`, `.bmp`)
    Image,
    /// Plain text and Markdown (`.txt`, `.md`, `.markdown`)
    Text,
}

impl SourceFormat {
    /// Detect the format from a filename's extension.
    ///
    /// Returns [`Error::UnsupportedFormat`] when no extractor handles the
    /// extension; the aggregator never guesses.
    pub fn from_filename(filename: &str) -> Result<Self> {
        let ext = filename
            .rsplit('.')
            .next()
            .filter(|e| *e != filename)
            .map(str::to_lowercase)
            .ok_or_else(|| Error::UnsupportedFormat(filename.to_string()))?;
        Self::from_extension(&ext).ok_or(Error::UnsupportedFormat(ext))
    }

    /// Map a lowercase extension (without dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "pdf" => Some(SourceFormat::Pdf),
            "docx" | "doc" => Some(SourceFormat::Docx),
            "xlsx" | "xls" | "csv" => Some(SourceFormat::Spreadsheet),
            "png" | "jpg" | "jpeg" | "gif" | "bmp" => Some(SourceFormat::Image),
            "txt" | "md" | "markdown" => Some(SourceFormat::Text),
            _ => None,
        }
    }

    /// Short lowercase tag used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Pdf => "pdf",
            SourceFormat::Docx => "docx",
            SourceFormat::Spreadsheet => "spreadsheet",
            SourceFormat::Image => "image",
            SourceFormat::Text => "text",
        }
    }

    /// All extensions this format accepts.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            SourceFormat::Pdf => &["pdf"],
            SourceFormat::Docx => &["docx", "doc"],
            SourceFormat::Spreadsheet => &["xlsx", "xls", "csv"],
            SourceFormat::Image => &["png", "jpg", "jpeg", "gif", "bmp"],
            SourceFormat::Text => &["txt", "md", "markdown"],
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
/// ZIP local-file header, shared by DOCX and XLSX containers.
const ZIP_MAGIC: &[u8] = &[0x50, 0x4B, 0x03, 0x04];
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47];
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const GIF_MAGIC: &[u8] = b"GIF8";
const BMP_MAGIC: &[u8] = b"BM";

/// Check whether the leading bytes are plausible for the claimed format.
///
/// Text and CSV inputs have no magic; they always pass. DOCX and XLSX share
/// the ZIP container magic, so the check cannot tell them apart — it only
/// rejects data that is definitely not a ZIP archive.
pub fn matches_magic(format: SourceFormat, data: &[u8]) -> bool {
    match format {
        SourceFormat::Pdf => data.starts_with(PDF_MAGIC),
        SourceFormat::Docx => data.starts_with(ZIP_MAGIC),
        SourceFormat::Spreadsheet => {
            // xlsx is zipped, xls is OLE, csv is bare text
            true
        }
        SourceFormat::Image => {
            data.starts_with(PNG_MAGIC)
                || data.starts_with(JPEG_MAGIC)
                || data.starts_with(GIF_MAGIC)
                || data.starts_with(BMP_MAGIC)
        }
        SourceFormat::Text => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_filename() {
        assert_eq!(
            SourceFormat::from_filename("report.pdf").unwrap(),
            SourceFormat::Pdf
        );
        assert_eq!(
            SourceFormat::from_filename("notes.MD").unwrap(),
            SourceFormat::Text
        );
        assert_eq!(
            SourceFormat::from_filename("data.xlsx").unwrap(),
            SourceFormat::Spreadsheet
        );
        assert_eq!(
            SourceFormat::from_filename("photo.JPEG").unwrap(),
            SourceFormat::Image
        );
    }

    #[test]
    fn test_from_filename_unsupported() {
        let result = SourceFormat::from_filename("archive.zzz");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_from_filename_no_extension() {
        let result = SourceFormat::from_filename("README");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_magic_pdf() {
        assert!(matches_magic(SourceFormat::Pdf, b"%PDF-1.7\n"));
        assert!(!matches_magic(SourceFormat::Pdf, b"<!DOCTYPE html>"));
    }

    #[test]
    fn test_magic_image() {
        assert!(matches_magic(SourceFormat::Image, &[0x89, 0x50, 0x4E, 0x47, 0x0D]));
        assert!(matches_magic(SourceFormat::Image, &[0xFF, 0xD8, 0xFF, 0xE0]));
        assert!(!matches_magic(SourceFormat::Image, b"plain text"));
    }

    #[test]
    fn test_magic_text_always_passes() {
        assert!(matches_magic(SourceFormat::Text, b"anything at all"));
        assert!(matches_magic(SourceFormat::Text, b""));
    }

    #[test]
    fn test_extensions_round_trip() {
        for format in [
            SourceFormat::Pdf,
            SourceFormat::Docx,
            SourceFormat::Spreadsheet,
            SourceFormat::Image,
            SourceFormat::Text,
        ] {
            for ext in format.extensions() {
                assert_eq!(SourceFormat::from_extension(ext), Some(format));
            }
        }
    }
}
