//! Format-specific content extractors.
//!
//! One module per source format, plus a deterministic synthetic fallback.
//! Every extractor exposes the same contract:
//!
//! ```ignore
//! fn extract(data: &[u8], filename: &str, config: &ParserConfig)
//!     -> Result<Vec<ContentElement>>
//! ```
//!
//! Extractors are stateless and independent; the aggregator selects exactly
//! one per parse via an exhaustive match over [`SourceFormat`]
//! (crate::detect::SourceFormat). Extractors report everything they find —
//! dropping disabled kinds is the aggregator's job.

pub mod docx;
pub mod fallback;
pub mod image;
pub mod pdf;
pub mod spreadsheet;
pub mod text;

use crate::model::TextKind;

/// Split raw text into logical blocks separated by blank lines.
pub(crate) fn split_blocks(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .collect()
}

/// Caption keywords, matched case-insensitively against short blocks.
const CAPTION_KEYWORDS: &[&str] = &["table", "figure", "chart", "graph"];

/// Classify a text block into its semantic subtype.
///
/// Rules, in order: markdown header marker; list marker; short block naming
/// a figure or table; short single line shaped like a heading; paragraph.
pub(crate) fn classify_block(text: &str) -> TextKind {
    let trimmed = text.trim();

    if trimmed.starts_with('#') {
        return TextKind::Header;
    }
    if has_list_marker(trimmed) {
        return TextKind::ListItem;
    }

    let word_count = trimmed.split_whitespace().count();
    if word_count < 15 {
        let lower = trimmed.to_lowercase();
        if CAPTION_KEYWORDS.iter().any(|k| lower.contains(k)) {
            return TextKind::Caption;
        }
    }
    if looks_like_heading(trimmed, word_count) {
        return TextKind::Header;
    }

    TextKind::Paragraph
}

fn has_list_marker(text: &str) -> bool {
    if text.starts_with("- ") || text.starts_with("* ") || text.starts_with("\u{2022} ") {
        return true;
    }
    // Numbered lists: "1. ", "2. ", ...
    let mut chars = text.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(d), Some('.'), Some(' ')) if d.is_ascii_digit()
    )
}

/// A short single line with no terminal punctuation, starting uppercase.
fn looks_like_heading(text: &str, word_count: usize) -> bool {
    if text.contains('\n') || word_count == 0 || word_count > 8 {
        return false;
    }
    if text.ends_with(['.', '!', '?', ':', ';', ',']) {
        return false;
    }
    text.chars()
        .find(|c| c.is_alphabetic())
        .is_some_and(|c| c.is_uppercase())
}

/// Strip markdown header/list markers for storage.
pub(crate) fn strip_marker(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.starts_with('#') {
        return trimmed.trim_start_matches('#').trim_start();
    }
    for marker in ["- ", "* ", "\u{2022} "] {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            return rest;
        }
    }
    trimmed
}
