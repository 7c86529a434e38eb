//! Plain text and Markdown extractor.
//!
//! Deterministic input: confidence is a fixed high constant.

use crate::config::ParserConfig;
use crate::error::Result;
use crate::model::{ContentElement, TextBlock, TextKind};

use super::{classify_block, split_blocks, strip_marker};

/// Fixed confidence for deterministic text input.
const TEXT_CONFIDENCE: f32 = 0.99;

/// Extract text blocks from plain text or Markdown bytes.
///
/// Blocks are paragraphs separated by blank lines; markdown header and list
/// markers select the corresponding subtype. A Markdown list becomes one
/// ListItem block per line.
pub fn extract(
    data: &[u8],
    _filename: &str,
    _config: &ParserConfig,
) -> Result<Vec<ContentElement>> {
    let content = String::from_utf8_lossy(data);
    let mut elements = Vec::new();

    for block in split_blocks(&content) {
        let kind = classify_block(block);
        if kind == TextKind::ListItem && block.contains('\n') {
            // A run of list lines splits into one element per item.
            for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
                push_block(&mut elements, line, classify_block(line));
            }
        } else {
            push_block(&mut elements, block, kind);
        }
    }

    Ok(elements)
}

fn push_block(elements: &mut Vec<ContentElement>, raw: &str, kind: TextKind) {
    let position = elements.len() as u32;
    let id = format!("text_{}", position);
    let text = match kind {
        TextKind::Header | TextKind::ListItem => strip_marker(raw),
        _ => raw,
    };
    elements.push(ContentElement::TextBlock(TextBlock::new(
        id,
        text,
        kind,
        TEXT_CONFIDENCE,
        position,
    )));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;

    fn extract_str(input: &str) -> Vec<ContentElement> {
        extract(input.as_bytes(), "note.txt", &ParserConfig::default()).unwrap()
    }

    #[test]
    fn test_three_paragraph_scenario() {
        let elements = extract_str("Title\n\nFirst paragraph.\n\nSecond paragraph.");
        assert_eq!(elements.len(), 3);
        assert!(elements.iter().all(|e| e.kind() == ElementKind::Text));

        let blocks: Vec<&TextBlock> = elements
            .iter()
            .map(|e| match e {
                ContentElement::TextBlock(b) => b,
                _ => unreachable!(),
            })
            .collect();

        assert_eq!(blocks[0].kind, TextKind::Header);
        assert_eq!(
            blocks.iter().map(|b| b.word_count).collect::<Vec<_>>(),
            vec![1, 2, 2]
        );
    }

    #[test]
    fn test_markdown_headers_and_lists() {
        let elements = extract_str("# Heading\n\n- first\n- second\n\nBody text follows here.");
        let kinds: Vec<TextKind> = elements
            .iter()
            .map(|e| match e {
                ContentElement::TextBlock(b) => b.kind,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                TextKind::Header,
                TextKind::ListItem,
                TextKind::ListItem,
                TextKind::Paragraph
            ]
        );
    }

    #[test]
    fn test_marker_stripped() {
        let elements = extract_str("## Section Two");
        match &elements[0] {
            ContentElement::TextBlock(b) => assert_eq!(b.text, "Section Two"),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_fixed_confidence_and_unique_ids() {
        let elements = extract_str("One block.\n\nAnother block.");
        assert!(elements.iter().all(|e| e.confidence() == TEXT_CONFIDENCE));
        assert_eq!(elements[0].id(), "text_0");
        assert_eq!(elements[1].id(), "text_1");
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_str("").is_empty());
        assert!(extract_str("\n\n\n").is_empty());
    }
}
