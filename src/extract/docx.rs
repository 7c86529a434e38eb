//! Word-processor document extractor (docx).
//!
//! One text block per paragraph, with the subtype taken from the paragraph
//! style when one is set (Heading*/Title styles map to Header) and inferred
//! from the text otherwise. Embedded tables become table elements.

use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, TableCellContent, TableChild,
    TableRowChild,
};

use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::model::{ContentElement, TableElement, TextBlock, TextKind};

use super::classify_block;

/// Paragraph confidence: styled containers parse cleanly.
const PARAGRAPH_CONFIDENCE: f32 = 0.97;
/// Table confidence: cell boundaries are explicit but merges are lossy.
const TABLE_CONFIDENCE: f32 = 0.92;

/// Extract content elements from DOCX bytes.
pub fn extract(
    data: &[u8],
    filename: &str,
    _config: &ParserConfig,
) -> Result<Vec<ContentElement>> {
    let docx = docx_rs::read_docx(data).map_err(|e| Error::extraction(filename, e))?;

    let mut elements = Vec::new();
    let mut text_index = 0u32;
    let mut table_index = 0u32;

    for (position, child) in docx.document.children.into_iter().enumerate() {
        match child {
            DocumentChild::Paragraph(paragraph) => {
                let text = paragraph_text(&paragraph);
                if text.trim().is_empty() {
                    continue;
                }
                let kind = style_kind(&paragraph).unwrap_or_else(|| classify_block(&text));
                elements.push(ContentElement::TextBlock(TextBlock::new(
                    format!("text_{}", text_index),
                    text.trim(),
                    kind,
                    PARAGRAPH_CONFIDENCE,
                    position as u32,
                )));
                text_index += 1;
            }
            DocumentChild::Table(table) => {
                let grid = table_grid(&table);
                if grid.is_empty() {
                    continue;
                }
                let mut rows = grid;
                let headers = rows.remove(0);
                let table = TableElement::new(
                    format!("table_{}", table_index),
                    headers,
                    rows,
                    TABLE_CONFIDENCE,
                    position as u32,
                )?
                .with_inferred_types();
                elements.push(ContentElement::Table(table));
                table_index += 1;
            }
            _ => {}
        }
    }

    Ok(elements)
}

/// Concatenated run text of a paragraph.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }
    text
}

/// Map a paragraph style id to a text kind, if one is set.
fn style_kind(paragraph: &Paragraph) -> Option<TextKind> {
    let style = paragraph.property.style.as_ref()?;
    let val = style.val.to_lowercase();
    if val.starts_with("heading") || val == "title" || val == "subtitle" {
        Some(TextKind::Header)
    } else if val.starts_with("list") {
        Some(TextKind::ListItem)
    } else if val.contains("caption") {
        Some(TextKind::Caption)
    } else {
        None
    }
}

/// Flatten a docx table into a grid of cell strings.
///
/// Merged cells are lossy here: each declared cell contributes one grid
/// entry, so a row with merges can come up short and surface as
/// [`Error::MalformedTable`] (crate::error::Error::MalformedTable) upstream.
fn table_grid(table: &docx_rs::Table) -> Vec<Vec<String>> {
    let mut grid = Vec::new();
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        let mut cells = Vec::new();
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            let mut cell_text = String::new();
            for content in &cell.children {
                if let TableCellContent::Paragraph(p) = content {
                    if !cell_text.is_empty() {
                        cell_text.push(' ');
                    }
                    cell_text.push_str(paragraph_text(p).trim());
                }
            }
            cells.push(cell_text);
        }
        if !cells.is_empty() {
            grid.push(cells);
        }
    }
    grid
}
