//! Parse result and statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ContentElement, ElementKind};
use crate::detect::SourceFormat;

/// The complete result of parsing one document.
///
/// Owned and produced solely by the aggregator; treat as immutable after
/// construction. Elements appear in extraction order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Name of the source file
    pub filename: String,

    /// Detected source format
    pub format: SourceFormat,

    /// Extracted elements, in extraction order
    pub elements: Vec<ContentElement>,

    /// Summary statistics derived from the elements
    pub statistics: Statistics,

    /// When the parse completed (RFC 3339 in serialized form)
    pub parsed_at: DateTime<Utc>,
}

impl ParseResult {
    /// Build a result, deriving statistics from the element sequence.
    pub fn new(
        filename: impl Into<String>,
        format: SourceFormat,
        elements: Vec<ContentElement>,
    ) -> Self {
        let statistics = Statistics::from_elements(&elements);
        Self {
            filename: filename.into(),
            format,
            elements,
            statistics,
            parsed_at: Utc::now(),
        }
    }

    /// All elements of one kind, in extraction order.
    pub fn elements_of_kind(&self, kind: ElementKind) -> Vec<&ContentElement> {
        self.elements.iter().filter(|e| e.kind() == kind).collect()
    }

    /// Count of elements of one kind.
    pub fn count_of(&self, kind: ElementKind) -> usize {
        self.elements.iter().filter(|e| e.kind() == kind).count()
    }

    /// Whether the result holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Summary statistics over a result's elements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of text blocks
    pub text_block_count: u32,

    /// Number of images
    pub image_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of equations
    pub equation_count: u32,

    /// Total element count across all kinds
    pub total_elements: u32,

    /// Total word count across text blocks
    pub total_words: u32,

    /// Arithmetic mean of element confidences, 0.0 when empty
    pub mean_confidence: f32,
}

impl Statistics {
    /// Derive statistics from an element sequence.
    pub fn from_elements(elements: &[ContentElement]) -> Self {
        let mut stats = Statistics::default();
        let mut confidence_sum = 0.0f64;

        for element in elements {
            match element.kind() {
                ElementKind::Text => stats.text_block_count += 1,
                ElementKind::Image => stats.image_count += 1,
                ElementKind::Table => stats.table_count += 1,
                ElementKind::Equation => stats.equation_count += 1,
            }
            stats.total_words += element.word_count();
            confidence_sum += element.confidence() as f64;
        }

        stats.total_elements = elements.len() as u32;
        if !elements.is_empty() {
            stats.mean_confidence = (confidence_sum / elements.len() as f64) as f32;
        }
        stats
    }

    /// Count for one element kind.
    pub fn count_for(&self, kind: ElementKind) -> u32 {
        match kind {
            ElementKind::Text => self.text_block_count,
            ElementKind::Image => self.image_count,
            ElementKind::Table => self.table_count,
            ElementKind::Equation => self.equation_count,
        }
    }
}
