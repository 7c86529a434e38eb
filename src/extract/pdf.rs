//! PDF extractor.
//!
//! Text comes from pdf-extract; images are detected opportunistically by
//! scanning the lopdf object table for image XObjects; equations are a
//! best-effort regex pass over the text blocks. Layout inference is
//! uncertain, so tables, images, and equations carry lower confidence than
//! text.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::model::{ContentElement, EquationElement, ImageElement, TextBlock};

use super::{classify_block, split_blocks};

const TEXT_CONFIDENCE: f32 = 0.95;
const IMAGE_CONFIDENCE: f32 = 0.85;
const EQUATION_CONFIDENCE: f32 = 0.70;

/// Longest context window stored with an equation.
const EQUATION_CONTEXT_CHARS: usize = 160;

/// Extract content elements from PDF bytes.
///
/// A file that cannot be decoded at all fails with
/// [`Error::ExtractionFailed`]; unreadable embedded objects are skipped
/// individually.
pub fn extract(data: &[u8], filename: &str, config: &ParserConfig) -> Result<Vec<ContentElement>> {
    let text =
        pdf_extract::extract_text_from_mem(data).map_err(|e| Error::extraction(filename, e))?;

    let mut elements = Vec::new();
    let blocks = split_blocks(&text);

    for block in &blocks {
        let position = elements.len() as u32;
        elements.push(ContentElement::TextBlock(TextBlock::new(
            format!("text_{}", position),
            *block,
            classify_block(block),
            TEXT_CONFIDENCE,
            position,
        )));
    }

    if config.enable_equation_processing {
        for (block_index, block) in blocks.iter().enumerate() {
            scan_equations(block, block_index as u32, &mut elements);
        }
    }

    if config.enable_image_processing {
        scan_images(data, &mut elements);
    }

    Ok(elements)
}

fn equation_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Inline TeX math, or a bare assignment like "E = mc^2".
    RE.get_or_init(|| {
        Regex::new(r"\$([^$\n]+)\$|(?m)^\s*([A-Za-z]\w{0,8}\s*=\s*[^=\n]{1,80})\s*$").unwrap()
    })
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z]+").unwrap())
}

/// Names that are operators, not variables.
const FUNCTION_NAMES: &[&str] = &[
    "sin", "cos", "tan", "log", "ln", "exp", "sqrt", "frac", "sum", "int", "lim",
];

/// Identify variable names in an equation, in order of first appearance.
///
/// Adjacent letters like "mc" are implicit products, so every letter of a
/// non-function token counts as its own variable.
fn equation_variables(latex: &str) -> Vec<String> {
    let mut variables = Vec::new();
    for token in token_regex().find_iter(latex) {
        let token = token.as_str();
        if FUNCTION_NAMES.contains(&token) {
            continue;
        }
        for c in token.chars() {
            let name = c.to_string();
            if !variables.contains(&name) {
                variables.push(name);
            }
        }
    }
    variables
}

/// Find equation candidates in one text block.
fn scan_equations(block: &str, block_position: u32, elements: &mut Vec<ContentElement>) {
    for capture in equation_regex().captures_iter(block) {
        let latex = capture
            .get(1)
            .or_else(|| capture.get(2))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        if latex.is_empty() {
            continue;
        }

        let variables = equation_variables(&latex);
        let context: String = block.chars().take(EQUATION_CONTEXT_CHARS).collect();
        let id = format!("equation_{}", count_kind(elements, "equation"));
        elements.push(ContentElement::Equation(EquationElement {
            id,
            latex,
            variables,
            context,
            confidence: EQUATION_CONFIDENCE,
            position: block_position,
        }));
    }
}

/// Scan the PDF object table for image XObjects.
///
/// Failure to load the document here only costs the image elements; the
/// text extraction above already succeeded.
fn scan_images(data: &[u8], elements: &mut Vec<ContentElement>) {
    let doc = match lopdf::Document::load_mem(data) {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("Image scan skipped, lopdf could not load document: {}", e);
            return;
        }
    };

    let mut image_index = 0u32;
    for object in doc.objects.values() {
        let lopdf::Object::Stream(stream) = object else {
            continue;
        };
        let is_image = stream
            .dict
            .get(b"Subtype")
            .and_then(|o| o.as_name())
            .map(|n| n == b"Image")
            .unwrap_or(false);
        if !is_image {
            continue;
        }

        let mut metadata = std::collections::BTreeMap::new();
        if let Ok(width) = stream.dict.get(b"Width").and_then(|o| o.as_i64()) {
            metadata.insert("width".to_string(), width.to_string());
        }
        if let Ok(height) = stream.dict.get(b"Height").and_then(|o| o.as_i64()) {
            metadata.insert("height".to_string(), height.to_string());
        }
        if let Ok(filter) = stream.dict.get(b"Filter").and_then(|o| o.as_name()) {
            metadata.insert(
                "filter".to_string(),
                String::from_utf8_lossy(filter).to_string(),
            );
        }

        elements.push(ContentElement::Image(ImageElement {
            id: format!("image_{}", image_index),
            caption: String::new(),
            recognized_text: String::new(),
            metadata,
            confidence: IMAGE_CONFIDENCE,
            position: image_index,
        }));
        image_index += 1;
    }
}

fn count_kind(elements: &[ContentElement], prefix: &str) -> usize {
    elements
        .iter()
        .filter(|e| e.id().starts_with(prefix))
        .count()
}
