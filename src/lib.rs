//! # anydoc
//!
//! Multi-format document content extraction for Rust.
//!
//! This library ingests a document (PDF, DOCX, spreadsheet, image, or plain
//! text), extracts a uniform model of typed content elements — text blocks,
//! images, tables, equations — each with a confidence score, and renders the
//! result as lossless structured JSON or a narrative Markdown summary.
//!
//! ## Quick Start
//!
//! ```no_run
//! use anydoc::{parse_file, render, OutputFormat};
//!
//! fn main() -> anydoc::Result<()> {
//!     let result = parse_file("report.pdf")?;
//!     println!("{} elements extracted", result.statistics.total_elements);
//!
//!     let markdown = render::render(&result, OutputFormat::Markdown)?;
//!     println!("{}", markdown);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Five source formats**: PDF, DOCX, xlsx/xls/csv spreadsheets, images,
//!   plain text/Markdown
//! - **Uniform content model**: one element type across all formats, with
//!   per-element confidence scores
//! - **Dual output**: round-trippable structured JSON, readable Markdown
//! - **Synthetic fallback**: a deterministic extractor for running the full
//!   pipeline without any real backend

pub mod config;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use config::{OutputFormat, ParserBackend, ParserConfig};
pub use detect::SourceFormat;
pub use error::{Error, Result};
pub use model::{
    ColumnType, ContentElement, ElementKind, EquationElement, ImageElement, ParseResult,
    Statistics, TableElement, TextBlock, TextKind,
};
pub use parser::DocumentParser;
pub use render::JsonFormat;

use std::path::Path;

/// Parse a document from bytes with the default configuration.
///
/// The filename supplies the extension used for format dispatch.
pub fn parse_bytes(data: &[u8], filename: &str) -> Result<ParseResult> {
    DocumentParser::default().parse(data, filename)
}

/// Parse a document from bytes with a custom configuration.
pub fn parse_bytes_with_config(
    data: &[u8],
    filename: &str,
    config: ParserConfig,
) -> Result<ParseResult> {
    DocumentParser::new(config).parse(data, filename)
}

/// Parse a document file with the default configuration.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParseResult> {
    parse_file_with_config(path, ParserConfig::default())
}

/// Parse a document file with a custom configuration.
pub fn parse_file_with_config<P: AsRef<Path>>(
    path: P,
    config: ParserConfig,
) -> Result<ParseResult> {
    let path = path.as_ref();
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?
        .to_string();
    let data = std::fs::read(path)?;
    DocumentParser::new(config).parse(&data, &filename)
}

/// Builder for parsing and rendering documents.
///
/// # Example
///
/// ```no_run
/// use anydoc::{Anydoc, ParserBackend};
///
/// let markdown = Anydoc::new()
///     .with_backend(ParserBackend::Fallback)
///     .without_equations()
///     .parse_bytes(b"", "demo.txt")?
///     .to_markdown()?;
/// # Ok::<(), anydoc::Error>(())
/// ```
pub struct Anydoc {
    config: ParserConfig,
}

impl Anydoc {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Select the extraction backend.
    pub fn with_backend(mut self, backend: ParserBackend) -> Self {
        self.config = self.config.with_backend(backend);
        self
    }

    /// Drop image elements from results.
    pub fn without_images(mut self) -> Self {
        self.config = self.config.with_images(false);
        self
    }

    /// Drop table elements from results.
    pub fn without_tables(mut self) -> Self {
        self.config = self.config.with_tables(false);
        self
    }

    /// Drop equation elements from results.
    pub fn without_equations(mut self) -> Self {
        self.config = self.config.with_equations(false);
        self
    }

    /// Set the maximum accepted input size in megabytes.
    pub fn with_max_file_size_mb(mut self, mb: u32) -> Self {
        self.config = self.config.with_max_file_size_mb(mb);
        self
    }

    /// Set the output formats rendered by [`AnydocResult::render_all`].
    pub fn with_output_formats(mut self, formats: impl Into<Vec<OutputFormat>>) -> Self {
        self.config = self.config.with_output_formats(formats);
        self
    }

    /// Parse a document from bytes.
    pub fn parse_bytes(self, data: &[u8], filename: &str) -> Result<AnydocResult> {
        let output_formats = self.config.output_formats.clone();
        let result = DocumentParser::new(self.config).parse(data, filename)?;
        Ok(AnydocResult {
            result,
            output_formats,
        })
    }

    /// Parse a document file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<AnydocResult> {
        let output_formats = self.config.output_formats.clone();
        let result = parse_file_with_config(path, self.config)?;
        Ok(AnydocResult {
            result,
            output_formats,
        })
    }
}

impl Default for Anydoc {
    fn default() -> Self {
        Self::new()
    }
}

/// A parse result paired with the configured output formats.
pub struct AnydocResult {
    /// The parsed document
    pub result: ParseResult,
    output_formats: Vec<OutputFormat>,
}

impl AnydocResult {
    /// Render as structured JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.result, format)
    }

    /// Render as narrative Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.result)
    }

    /// Render every configured output format, in config order.
    pub fn render_all(&self) -> Result<Vec<(OutputFormat, String)>> {
        render::render_all(&self.result, &self.output_formats)
    }

    /// The parsed document.
    pub fn result(&self) -> &ParseResult {
        &self.result
    }
}
