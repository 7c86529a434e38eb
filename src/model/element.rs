//! Content element types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The four kinds of content the pipeline extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// A block of running text
    Text,
    /// A raster image
    Image,
    /// A table with headers and rows
    Table,
    /// A mathematical expression
    Equation,
}

impl ElementKind {
    /// Short lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Table => "table",
            ElementKind::Equation => "equation",
        }
    }
}

/// Semantic subtype of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    /// Body text
    #[default]
    Paragraph,
    /// Section or document heading
    Header,
    /// Bulleted or numbered list entry
    ListItem,
    /// Figure or table caption
    Caption,
}

/// A block of extracted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Unique id within the document
    pub id: String,

    /// The text content
    pub text: String,

    /// Semantic subtype
    pub kind: TextKind,

    /// Whitespace-delimited token count, computed at construction
    pub word_count: u32,

    /// Extraction confidence in [0, 1]
    pub confidence: f32,

    /// Position hint (sequence index or page number)
    pub position: u32,
}

impl TextBlock {
    /// Create a text block, deriving the word count from the text.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        kind: TextKind,
        confidence: f32,
        position: u32,
    ) -> Self {
        let text = text.into();
        let word_count = text.split_whitespace().count() as u32;
        Self {
            id: id.into(),
            text,
            kind,
            word_count,
            confidence,
            position,
        }
    }
}

/// An extracted image with its recognition output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    /// Unique id within the document
    pub id: String,

    /// Caption text, possibly empty
    pub caption: String,

    /// Text recovered by optical recognition, empty when none was found
    pub recognized_text: String,

    /// Format-specific metadata (dimensions, encoding, ...).
    /// BTreeMap keeps serialized output deterministic.
    pub metadata: BTreeMap<String, String>,

    /// Extraction confidence in [0, 1]
    pub confidence: f32,

    /// Position hint (sequence index or page number)
    pub position: u32,
}

/// An extracted table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableElement {
    /// Unique id within the document
    pub id: String,

    /// Column headers
    pub headers: Vec<String>,

    /// Data rows; every row has exactly `headers.len()` cells
    pub rows: Vec<Vec<String>>,

    /// Inferred per-column data types, if inference ran
    pub data_types: Option<Vec<ColumnType>>,

    /// Extraction confidence in [0, 1]
    pub confidence: f32,

    /// Position hint (sequence index or sheet number)
    pub position: u32,
}

impl TableElement {
    /// Create a table, enforcing the row-width invariant.
    ///
    /// Returns [`Error::MalformedTable`] when any row's cell count differs
    /// from the header count. Rows are never padded or truncated.
    pub fn new(
        id: impl Into<String>,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        confidence: f32,
        position: u32,
    ) -> Result<Self> {
        let expected = headers.len();
        for row in &rows {
            if row.len() != expected {
                return Err(Error::MalformedTable {
                    expected,
                    found: row.len(),
                });
            }
        }
        Ok(Self {
            id: id.into(),
            headers,
            rows,
            data_types: None,
            confidence,
            position,
        })
    }

    /// Infer per-column data types from the cell contents and return self.
    pub fn with_inferred_types(mut self) -> Self {
        self.data_types = Some(infer_column_types(&self.headers, &self.rows));
        self
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Inferred data type of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// All non-empty cells parse as integers
    Integer,
    /// All non-empty cells parse as numbers
    Number,
    /// All non-empty cells are true/false
    Boolean,
    /// Anything else
    Text,
}

/// Infer one [`ColumnType`] per column. Empty cells are ignored; a column
/// with no non-empty cells is Text.
fn infer_column_types(headers: &[String], rows: &[Vec<String>]) -> Vec<ColumnType> {
    (0..headers.len())
        .map(|col| {
            let cells: Vec<&str> = rows
                .iter()
                .map(|r| r[col].trim())
                .filter(|c| !c.is_empty())
                .collect();
            if cells.is_empty() {
                ColumnType::Text
            } else if cells.iter().all(|c| c.parse::<i64>().is_ok()) {
                ColumnType::Integer
            } else if cells.iter().all(|c| c.parse::<f64>().is_ok()) {
                ColumnType::Number
            } else if cells
                .iter()
                .all(|c| c.eq_ignore_ascii_case("true") || c.eq_ignore_ascii_case("false"))
            {
                ColumnType::Boolean
            } else {
                ColumnType::Text
            }
        })
        .collect()
}

/// An extracted equation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationElement {
    /// Unique id within the document
    pub id: String,

    /// Raw or LaTeX-like source of the expression
    pub latex: String,

    /// Identified variable names, in order of first appearance
    pub variables: Vec<String>,

    /// Surrounding text window
    pub context: String,

    /// Extraction confidence in [0, 1]
    pub confidence: f32,

    /// Position hint (sequence index or page number)
    pub position: u32,
}

/// One extracted content unit: the tagged union over all element kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentElement {
    /// A block of text
    TextBlock(TextBlock),
    /// An image
    Image(ImageElement),
    /// A table
    Table(TableElement),
    /// An equation
    Equation(EquationElement),
}

impl ContentElement {
    /// The element's kind tag.
    pub fn kind(&self) -> ElementKind {
        match self {
            ContentElement::TextBlock(_) => ElementKind::Text,
            ContentElement::Image(_) => ElementKind::Image,
            ContentElement::Table(_) => ElementKind::Table,
            ContentElement::Equation(_) => ElementKind::Equation,
        }
    }

    /// The element's unique id.
    pub fn id(&self) -> &str {
        match self {
            ContentElement::TextBlock(e) => &e.id,
            ContentElement::Image(e) => &e.id,
            ContentElement::Table(e) => &e.id,
            ContentElement::Equation(e) => &e.id,
        }
    }

    /// The element's confidence score.
    pub fn confidence(&self) -> f32 {
        match self {
            ContentElement::TextBlock(e) => e.confidence,
            ContentElement::Image(e) => e.confidence,
            ContentElement::Table(e) => e.confidence,
            ContentElement::Equation(e) => e.confidence,
        }
    }

    /// The element's position hint.
    pub fn position(&self) -> u32 {
        match self {
            ContentElement::TextBlock(e) => e.position,
            ContentElement::Image(e) => e.position,
            ContentElement::Table(e) => e.position,
            ContentElement::Equation(e) => e.position,
        }
    }

    /// Word count for text blocks, 0 for other kinds.
    pub fn word_count(&self) -> u32 {
        match self {
            ContentElement::TextBlock(e) => e.word_count,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_block_word_count() {
        let block = TextBlock::new("text_0", "First paragraph.", TextKind::Paragraph, 0.99, 0);
        assert_eq!(block.word_count, 2);

        let block = TextBlock::new("text_1", "Title", TextKind::Header, 0.99, 1);
        assert_eq!(block.word_count, 1);

        let block = TextBlock::new("text_2", "   ", TextKind::Paragraph, 0.99, 2);
        assert_eq!(block.word_count, 0);
    }

    #[test]
    fn test_table_row_width_enforced() {
        let result = TableElement::new(
            "table_0",
            vec!["A".into(), "B".into()],
            vec![vec!["1".into(), "2".into()], vec!["3".into()]],
            0.9,
            0,
        );
        assert!(matches!(
            result,
            Err(Error::MalformedTable {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_table_valid() {
        let table = TableElement::new(
            "table_0",
            vec!["A".into(), "B".into()],
            vec![
                vec!["1".into(), "x".into()],
                vec!["2".into(), "y".into()],
            ],
            0.9,
            0,
        )
        .unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_column_type_inference() {
        let table = TableElement::new(
            "table_0",
            vec!["n".into(), "x".into(), "flag".into(), "name".into()],
            vec![
                vec!["1".into(), "1.5".into(), "true".into(), "alice".into()],
                vec!["2".into(), "2.25".into(), "false".into(), "bob".into()],
            ],
            0.9,
            0,
        )
        .unwrap()
        .with_inferred_types();

        assert_eq!(
            table.data_types,
            Some(vec![
                ColumnType::Integer,
                ColumnType::Number,
                ColumnType::Boolean,
                ColumnType::Text,
            ])
        );
    }

    #[test]
    fn test_element_accessors() {
        let element = ContentElement::TextBlock(TextBlock::new(
            "text_0",
            "hello world",
            TextKind::Paragraph,
            0.95,
            3,
        ));
        assert_eq!(element.kind(), ElementKind::Text);
        assert_eq!(element.id(), "text_0");
        assert_eq!(element.confidence(), 0.95);
        assert_eq!(element.position(), 3);
        assert_eq!(element.word_count(), 2);
    }

    #[test]
    fn test_element_serde_tag() {
        let element = ContentElement::Equation(EquationElement {
            id: "eq_0".into(),
            latex: "E = mc^2".into(),
            variables: vec!["E".into(), "m".into(), "c".into()],
            context: String::new(),
            confidence: 0.7,
            position: 0,
        });
        let json = serde_json::to_string(&element).unwrap();
        assert!(json.contains("\"kind\":\"equation\""));

        let back: ContentElement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, element);
    }
}
