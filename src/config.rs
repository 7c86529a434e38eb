//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Which extraction backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserBackend {
    /// Pick the native extractor set when available
    #[default]
    Auto,
    /// Alias accepted for compatibility with upstream configs; resolves to
    /// the native extractor set
    Mineru,
    /// Always use the deterministic synthetic extractor
    Fallback,
}

/// Output formats the caller wants rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless structured rendering
    Json,
    /// Lossy narrative rendering
    Markdown,
}

/// Configuration for a document parse.
///
/// Constructed once by the caller and consumed read-only; a config can be
/// shared across any number of [`parse`](crate::DocumentParser::parse) calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Keep image elements in the result
    pub enable_image_processing: bool,

    /// Keep table elements in the result
    pub enable_table_processing: bool,

    /// Keep equation elements in the result
    pub enable_equation_processing: bool,

    /// Extraction backend selection
    pub parser_backend: ParserBackend,

    /// Formats to render the result into
    pub output_formats: Vec<OutputFormat>,

    /// Maximum accepted input size in megabytes
    pub max_file_size_mb: u32,
}

impl ParserConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable image elements.
    pub fn with_images(mut self, enable: bool) -> Self {
        self.enable_image_processing = enable;
        self
    }

    /// Enable or disable table elements.
    pub fn with_tables(mut self, enable: bool) -> Self {
        self.enable_table_processing = enable;
        self
    }

    /// Enable or disable equation elements.
    pub fn with_equations(mut self, enable: bool) -> Self {
        self.enable_equation_processing = enable;
        self
    }

    /// Select the extraction backend.
    pub fn with_backend(mut self, backend: ParserBackend) -> Self {
        self.parser_backend = backend;
        self
    }

    /// Set the output formats to render.
    pub fn with_output_formats(mut self, formats: impl Into<Vec<OutputFormat>>) -> Self {
        self.output_formats = formats.into();
        self
    }

    /// Set the maximum accepted input size in megabytes.
    pub fn with_max_file_size_mb(mut self, mb: u32) -> Self {
        self.max_file_size_mb = mb;
        self
    }

    /// Size limit in bytes.
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb as usize * 1024 * 1024
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            enable_image_processing: true,
            enable_table_processing: true,
            enable_equation_processing: true,
            parser_backend: ParserBackend::Auto,
            output_formats: vec![OutputFormat::Json, OutputFormat::Markdown],
            max_file_size_mb: 50,
        }
    }
}
