//! Structured JSON rendering.
//!
//! The structured form is lossless: [`from_json`] reproduces the original
//! [`ParseResult`] field for field. Elements are grouped into per-kind
//! arrays, so decoding preserves the element order within each kind while
//! the interleaving across kinds follows the fixed group order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::detect::SourceFormat;
use crate::error::{Error, Result};
use crate::model::{
    ContentElement, EquationElement, ImageElement, ParseResult, Statistics, TableElement,
    TextBlock,
};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// The serialized shape of a parse result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct StructuredRecord {
    filename: String,
    format: SourceFormat,
    parsed_at: DateTime<Utc>,
    statistics: Statistics,
    text_blocks: Vec<TextBlock>,
    images: Vec<ImageElement>,
    tables: Vec<TableElement>,
    equations: Vec<EquationElement>,
}

impl From<&ParseResult> for StructuredRecord {
    fn from(result: &ParseResult) -> Self {
        let mut record = StructuredRecord {
            filename: result.filename.clone(),
            format: result.format,
            parsed_at: result.parsed_at,
            statistics: result.statistics.clone(),
            text_blocks: Vec::new(),
            images: Vec::new(),
            tables: Vec::new(),
            equations: Vec::new(),
        };
        for element in &result.elements {
            match element {
                ContentElement::TextBlock(e) => record.text_blocks.push(e.clone()),
                ContentElement::Image(e) => record.images.push(e.clone()),
                ContentElement::Table(e) => record.tables.push(e.clone()),
                ContentElement::Equation(e) => record.equations.push(e.clone()),
            }
        }
        record
    }
}

impl StructuredRecord {
    /// Reassemble a parse result. Elements come back grouped by kind, each
    /// group in its original order.
    fn into_parse_result(self) -> ParseResult {
        let mut elements = Vec::with_capacity(
            self.text_blocks.len() + self.images.len() + self.tables.len() + self.equations.len(),
        );
        elements.extend(self.text_blocks.into_iter().map(ContentElement::TextBlock));
        elements.extend(self.images.into_iter().map(ContentElement::Image));
        elements.extend(self.tables.into_iter().map(ContentElement::Table));
        elements.extend(self.equations.into_iter().map(ContentElement::Equation));

        ParseResult {
            filename: self.filename,
            format: self.format,
            elements,
            statistics: self.statistics,
            parsed_at: self.parsed_at,
        }
    }
}

/// Render a parse result as structured JSON.
pub fn to_json(result: &ParseResult, format: JsonFormat) -> Result<String> {
    let record = StructuredRecord::from(result);
    let rendered = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&record),
        JsonFormat::Compact => serde_json::to_string(&record),
    };
    rendered.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Decode a structured JSON rendering back into a parse result.
pub fn from_json(json: &str) -> Result<ParseResult> {
    let record: StructuredRecord =
        serde_json::from_str(json).map_err(|e| Error::Decode(e.to_string()))?;
    Ok(record.into_parse_result())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementKind, TextKind};

    fn sample_result() -> ParseResult {
        let elements = vec![
            ContentElement::TextBlock(TextBlock::new(
                "text_0",
                "Quarterly Report",
                TextKind::Header,
                0.99,
                0,
            )),
            ContentElement::Table(
                TableElement::new(
                    "table_0",
                    vec!["A".into(), "B".into()],
                    vec![vec!["1".into(), "2".into()]],
                    0.9,
                    1,
                )
                .unwrap(),
            ),
            ContentElement::TextBlock(TextBlock::new(
                "text_1",
                "Closing remarks follow.",
                TextKind::Paragraph,
                0.99,
                2,
            )),
        ];
        ParseResult::new("report.txt", SourceFormat::Text, elements)
    }

    #[test]
    fn test_round_trip_preserves_per_kind_order() {
        let original = sample_result();
        let json = to_json(&original, JsonFormat::Pretty).unwrap();
        let decoded = from_json(&json).unwrap();

        assert_eq!(decoded.filename, original.filename);
        assert_eq!(decoded.format, original.format);
        assert_eq!(decoded.statistics, original.statistics);
        assert_eq!(decoded.parsed_at, original.parsed_at);
        for kind in [
            ElementKind::Text,
            ElementKind::Image,
            ElementKind::Table,
            ElementKind::Equation,
        ] {
            assert_eq!(
                decoded.elements_of_kind(kind),
                original.elements_of_kind(kind)
            );
        }
    }

    #[test]
    fn test_compact_has_no_newlines() {
        let json = to_json(&sample_result(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_pretty_is_parseable_json() {
        let json = to_json(&sample_result(), JsonFormat::Pretty).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["filename"], "report.txt");
        assert_eq!(value["format"], "text");
        assert_eq!(value["text_blocks"].as_array().unwrap().len(), 2);
        assert_eq!(value["statistics"]["total_elements"], 3);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result = from_json("{not json");
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
