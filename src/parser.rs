//! Content aggregation: size check, format dispatch, filtering, statistics.

use crate::config::{ParserBackend, ParserConfig};
use crate::detect::SourceFormat;
use crate::error::{Error, Result};
use crate::extract;
use crate::model::{ContentElement, ElementKind, ParseResult};

/// Resolved extraction backend.
///
/// Resolution happens once at parser construction, so the parse path never
/// consults a global availability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    /// The real format-specific extractors
    Native,
    /// The deterministic synthetic extractor
    Synthetic,
}

/// The content aggregator.
///
/// Holds a read-only config and a resolved backend; one instance can serve
/// any number of sequential or concurrent [`parse`](Self::parse) calls
/// without shared mutable state.
pub struct DocumentParser {
    config: ParserConfig,
    backend: Backend,
}

impl DocumentParser {
    /// Create a parser, resolving the backend from the config.
    pub fn new(config: ParserConfig) -> Self {
        let backend = match config.parser_backend {
            ParserBackend::Fallback => Backend::Synthetic,
            // "mineru" is accepted as an alias for the native set.
            ParserBackend::Auto | ParserBackend::Mineru => Backend::Native,
        };
        Self { config, backend }
    }

    /// The configuration this parser was built with.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one document from bytes.
    ///
    /// Steps: size check, format detection, one extractor invocation,
    /// kind filtering, statistics. Each parse is independent; nothing is
    /// cached across calls.
    pub fn parse(&self, data: &[u8], filename: &str) -> Result<ParseResult> {
        if data.len() > self.config.max_file_size_bytes() {
            return Err(Error::FileTooLarge {
                size: data.len(),
                limit_mb: self.config.max_file_size_mb,
            });
        }

        let format = SourceFormat::from_filename(filename)?;
        let extracted = self.run_extractor(format, data, filename)?;
        let retained = self.filter_elements(extracted);

        log::debug!(
            "Parsed {} ({}): {} elements retained",
            filename,
            format,
            retained.len()
        );

        Ok(ParseResult::new(filename, format, retained))
    }

    /// Dispatch to exactly one extractor.
    ///
    /// The match is exhaustive over [`SourceFormat`]; adding a format
    /// without an extractor is a compile error.
    fn run_extractor(
        &self,
        format: SourceFormat,
        data: &[u8],
        filename: &str,
    ) -> Result<Vec<ContentElement>> {
        match self.backend {
            Backend::Synthetic => extract::fallback::extract(data, filename, &self.config),
            Backend::Native => match format {
                SourceFormat::Text => extract::text::extract(data, filename, &self.config),
                SourceFormat::Spreadsheet => {
                    extract::spreadsheet::extract(data, filename, &self.config)
                }
                SourceFormat::Docx => extract::docx::extract(data, filename, &self.config),
                SourceFormat::Pdf => extract::pdf::extract(data, filename, &self.config),
                SourceFormat::Image => extract::image::extract(data, filename, &self.config),
            },
        }
    }

    /// Drop elements of disabled kinds. Text blocks are always kept.
    fn filter_elements(&self, elements: Vec<ContentElement>) -> Vec<ContentElement> {
        elements
            .into_iter()
            .filter(|e| match e.kind() {
                ElementKind::Text => true,
                ElementKind::Image => self.config.enable_image_processing,
                ElementKind::Table => self.config.enable_table_processing,
                ElementKind::Equation => self.config.enable_equation_processing,
            })
            .collect()
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}
