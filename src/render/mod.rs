//! Output rendering for parse results.
//!
//! Two renderings of the same model: a lossless structured JSON record
//! (round-trippable via [`from_json`]) and a lossy narrative Markdown
//! summary for human readers.

mod json;
mod markdown;

pub use json::{from_json, to_json, JsonFormat};
pub use markdown::to_markdown;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::model::ParseResult;

/// Render a parse result into one output format.
pub fn render(result: &ParseResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(result, JsonFormat::Pretty),
        OutputFormat::Markdown => to_markdown(result),
    }
}

/// Render every format the config asks for, in config order.
pub fn render_all(
    result: &ParseResult,
    formats: &[OutputFormat],
) -> Result<Vec<(OutputFormat, String)>> {
    formats
        .iter()
        .map(|&format| Ok((format, render(result, format)?)))
        .collect()
}

/// Confidence band label used by the narrative rendering.
pub fn confidence_band(confidence: f32) -> &'static str {
    if confidence >= 0.9 {
        "high"
    } else if confidence >= 0.7 {
        "good"
    } else if confidence >= 0.5 {
        "medium"
    } else {
        "low"
    }
}
