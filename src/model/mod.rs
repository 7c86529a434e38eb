//! Content model types.
//!
//! This module defines the uniform intermediate representation that bridges
//! format-specific extraction and output rendering. Every extractor produces
//! the same element types regardless of source format.

mod element;
mod result;

pub use element::{
    ColumnType, ContentElement, ElementKind, EquationElement, ImageElement, TableElement,
    TextBlock, TextKind,
};
pub use result::{ParseResult, Statistics};
