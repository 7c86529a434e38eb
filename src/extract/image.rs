//! Image extractor.
//!
//! Always emits exactly one image element. Recognition is pluggable: when
//! no recognizer is wired in, the recognized text stays empty and the
//! element carries a neutral confidence. A recognizer failure is never an
//! error, only an empty result.

use std::collections::BTreeMap;

use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::model::{ContentElement, ImageElement};

/// Confidence when no recognition certainty is available.
const NEUTRAL_CONFIDENCE: f32 = 0.75;

/// Optical text recognition hook: returns recognized text and a certainty
/// score, or `None` when recognition produced nothing usable.
pub type Recognizer<'a> = &'a dyn Fn(&[u8]) -> Option<(String, f32)>;

/// Extract the single image element from image bytes.
pub fn extract(
    data: &[u8],
    filename: &str,
    _config: &ParserConfig,
) -> Result<Vec<ContentElement>> {
    extract_with_recognizer(data, filename, None)
}

/// Extract with an optional recognition step.
pub fn extract_with_recognizer(
    data: &[u8],
    filename: &str,
    recognizer: Option<Recognizer<'_>>,
) -> Result<Vec<ContentElement>> {
    let format = image::guess_format(data).map_err(|e| Error::extraction(filename, e))?;

    let mut metadata = BTreeMap::new();
    metadata.insert("format".to_string(), format.to_mime_type().to_string());

    match image::load_from_memory(data) {
        Ok(img) => {
            metadata.insert("width".to_string(), img.width().to_string());
            metadata.insert("height".to_string(), img.height().to_string());
        }
        Err(e) => {
            // Header was recognizable, pixel data was not. Keep what we have.
            log::warn!("Could not decode image dimensions for {}: {}", filename, e);
        }
    }

    let (recognized_text, confidence) = match recognizer.and_then(|r| r(data)) {
        Some((text, certainty)) => (text, certainty.clamp(0.0, 1.0)),
        None => (String::new(), NEUTRAL_CONFIDENCE),
    };

    Ok(vec![ContentElement::Image(ImageElement {
        id: "image_0".to_string(),
        caption: filename.to_string(),
        recognized_text,
        metadata,
        confidence,
        position: 0,
    })])
}
