//! Narrative Markdown rendering.
//!
//! Lossy by design: a heading, the statistics summary, then one section
//! per element kind with confidence-band labels. Long table bodies are
//! truncated past a fixed row threshold.

use crate::error::Result;
use crate::model::{
    ContentElement, EquationElement, ImageElement, ParseResult, TableElement, TextBlock,
};

use super::confidence_band;

/// Table rows shown before the narrative rendering truncates the body.
const TABLE_ROW_LIMIT: usize = 10;

/// Render a parse result as narrative Markdown.
pub fn to_markdown(result: &ParseResult) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("# Parsing Results: {}\n\n", result.filename));
    out.push_str(&format!(
        "Source format: {} | Parsed at: {}\n\n",
        result.format,
        result.parsed_at.to_rfc3339()
    ));

    render_statistics(&mut out, result);

    let text_blocks: Vec<&TextBlock> = result
        .elements
        .iter()
        .filter_map(|e| match e {
            ContentElement::TextBlock(b) => Some(b),
            _ => None,
        })
        .collect();
    let images: Vec<&ImageElement> = result
        .elements
        .iter()
        .filter_map(|e| match e {
            ContentElement::Image(i) => Some(i),
            _ => None,
        })
        .collect();
    let tables: Vec<&TableElement> = result
        .elements
        .iter()
        .filter_map(|e| match e {
            ContentElement::Table(t) => Some(t),
            _ => None,
        })
        .collect();
    let equations: Vec<&EquationElement> = result
        .elements
        .iter()
        .filter_map(|e| match e {
            ContentElement::Equation(q) => Some(q),
            _ => None,
        })
        .collect();

    if !text_blocks.is_empty() {
        out.push_str("## Text Content\n\n");
        for (i, block) in text_blocks.iter().enumerate() {
            render_text_block(&mut out, i + 1, block);
        }
    }

    if !images.is_empty() {
        out.push_str("## Images\n\n");
        for (i, img) in images.iter().enumerate() {
            render_image(&mut out, i + 1, img);
        }
    }

    if !tables.is_empty() {
        out.push_str("## Tables\n\n");
        for (i, table) in tables.iter().enumerate() {
            render_table(&mut out, i + 1, table);
        }
    }

    if !equations.is_empty() {
        out.push_str("## Equations\n\n");
        for (i, eq) in equations.iter().enumerate() {
            render_equation(&mut out, i + 1, eq);
        }
    }

    Ok(out.trim_end().to_string() + "\n")
}

fn render_statistics(out: &mut String, result: &ParseResult) {
    let stats = &result.statistics;
    out.push_str("## Statistics\n\n");
    out.push_str(&format!("- Total Text Blocks: {}\n", stats.text_block_count));
    out.push_str(&format!("- Total Images: {}\n", stats.image_count));
    out.push_str(&format!("- Total Tables: {}\n", stats.table_count));
    out.push_str(&format!("- Total Equations: {}\n", stats.equation_count));
    out.push_str(&format!("- Total Elements: {}\n", stats.total_elements));
    out.push_str(&format!("- Total Words: {}\n", stats.total_words));
    out.push_str(&format!(
        "- Average Confidence: {:.2} ({})\n\n",
        stats.mean_confidence,
        confidence_band(stats.mean_confidence)
    ));
}

fn render_text_block(out: &mut String, index: usize, block: &TextBlock) {
    out.push_str(&format!("### Text Block {} ({:?})\n\n", index, block.kind));
    out.push_str(&format!(
        "Words: {} | Confidence: {:.2} ({})\n\n",
        block.word_count,
        block.confidence,
        confidence_band(block.confidence)
    ));
    out.push_str(&format!("> {}\n\n", block.text.replace('\n', "\n> ")));
}

fn render_image(out: &mut String, index: usize, img: &ImageElement) {
    out.push_str(&format!("### Image {}\n\n", index));
    if !img.caption.is_empty() {
        out.push_str(&format!("Caption: {}\n\n", img.caption));
    }
    out.push_str(&format!(
        "Confidence: {:.2} ({})\n\n",
        img.confidence,
        confidence_band(img.confidence)
    ));
    if !img.recognized_text.is_empty() {
        out.push_str(&format!("Recognized text: {}\n\n", img.recognized_text));
    }
    if !img.metadata.is_empty() {
        for (key, value) in &img.metadata {
            out.push_str(&format!("- {}: {}\n", key, value));
        }
        out.push('\n');
    }
}

fn render_table(out: &mut String, index: usize, table: &TableElement) {
    out.push_str(&format!("### Table {}\n\n", index));
    out.push_str(&format!(
        "{} rows x {} columns | Confidence: {:.2} ({})\n\n",
        table.row_count(),
        table.column_count(),
        table.confidence,
        confidence_band(table.confidence)
    ));

    out.push_str(&format!("| {} |\n", table.headers.join(" | ")));
    out.push_str(&format!("|{}\n", "---|".repeat(table.headers.len())));
    for row in table.rows.iter().take(TABLE_ROW_LIMIT) {
        out.push_str(&format!("| {} |\n", row.join(" | ")));
    }
    if table.rows.len() > TABLE_ROW_LIMIT {
        out.push_str(&format!(
            "\n_... {} more rows not shown_\n",
            table.rows.len() - TABLE_ROW_LIMIT
        ));
    }
    out.push('\n');
}

fn render_equation(out: &mut String, index: usize, eq: &EquationElement) {
    out.push_str(&format!("### Equation {}\n\n", index));
    out.push_str(&format!(
        "Confidence: {:.2} ({})\n\n",
        eq.confidence,
        confidence_band(eq.confidence)
    ));
    out.push_str(&format!("LaTeX: `{}`\n\n", eq.latex));
    if !eq.variables.is_empty() {
        out.push_str(&format!("Variables: {}\n\n", eq.variables.join(", ")));
    }
    if !eq.context.is_empty() {
        out.push_str(&format!("Context: {}\n\n", eq.context));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::SourceFormat;
    use crate::model::TextKind;

    #[test]
    fn test_statistics_section() {
        let elements = vec![
            ContentElement::TextBlock(TextBlock::new("text_0", "Title", TextKind::Header, 0.99, 0)),
            ContentElement::TextBlock(TextBlock::new(
                "text_1",
                "First paragraph.",
                TextKind::Paragraph,
                0.99,
                1,
            )),
            ContentElement::TextBlock(TextBlock::new(
                "text_2",
                "Second paragraph.",
                TextKind::Paragraph,
                0.99,
                2,
            )),
        ];
        let result = ParseResult::new("note.txt", SourceFormat::Text, elements);
        let markdown = to_markdown(&result).unwrap();

        assert!(markdown.contains("# Parsing Results: note.txt"));
        assert!(markdown.contains("Total Text Blocks: 3"));
        assert!(markdown.contains("Total Elements: 3"));
        assert!(markdown.contains("Total Words: 5"));
    }

    #[test]
    fn test_table_truncation() {
        let rows: Vec<Vec<String>> = (0..15)
            .map(|i| vec![i.to_string(), (i * 2).to_string()])
            .collect();
        let table = TableElement::new(
            "table_0",
            vec!["n".into(), "double".into()],
            rows,
            0.9,
            0,
        )
        .unwrap();
        let result = ParseResult::new(
            "big.csv",
            SourceFormat::Spreadsheet,
            vec![ContentElement::Table(table)],
        );
        let markdown = to_markdown(&result).unwrap();

        assert!(markdown.contains("| n | double |"));
        assert!(markdown.contains("_... 5 more rows not shown_"));
        // Row 14 is past the threshold
        assert!(!markdown.contains("| 14 | 28 |"));
    }

    #[test]
    fn test_confidence_band_labels_present() {
        let elements = vec![ContentElement::TextBlock(TextBlock::new(
            "text_0",
            "Low certainty block",
            TextKind::Paragraph,
            0.42,
            0,
        ))];
        let result = ParseResult::new("scan.txt", SourceFormat::Text, elements);
        let markdown = to_markdown(&result).unwrap();
        assert!(markdown.contains("Confidence: 0.42 (low)"));
    }

    #[test]
    fn test_empty_result_renders_header_and_stats_only() {
        let result = ParseResult::new("empty.txt", SourceFormat::Text, Vec::new());
        let markdown = to_markdown(&result).unwrap();
        assert!(markdown.contains("Total Elements: 0"));
        assert!(!markdown.contains("## Text Content"));
        assert!(markdown.contains("Average Confidence: 0.00"));
    }
}
