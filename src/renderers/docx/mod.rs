//! Word-processing document output
//!
//! The pipeline talks to a [`DocumentSink`]; [`DocxDocument`] is the
//! implementation that writes an Office Open XML `.docx` package.
//!
//! ## Modules
//!
//! - `document`: in-memory block list and packaging
//! - `xml`: WordprocessingML serialization of the body
//! - `parts`: the fixed package parts (content types, relationships, styles, properties)

pub mod document;
pub mod parts;
pub mod xml;

pub use document::DocxDocument;

use super::inline::{GlossRun, InlineRun};
use super::table_layout::RenderedTable;
use crate::errors::StorageError;
use std::path::Path;

/// Paragraph style of a body paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Normal,
    Heading,
}

impl ParagraphStyle {
    /// Style id in `word/styles.xml`
    pub fn style_id(self) -> &'static str {
        match self {
            ParagraphStyle::Normal => "Normal",
            ParagraphStyle::Heading => "Heading1",
        }
    }
}

/// A run of uniformly formatted text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub italic: bool,
    pub small_caps: bool,
}

impl TextRun {
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }
}

impl From<&InlineRun> for TextRun {
    fn from(run: &InlineRun) -> Self {
        Self {
            text: run.text.clone(),
            italic: run.italic,
            small_caps: false,
        }
    }
}

impl From<&GlossRun> for TextRun {
    fn from(run: &GlossRun) -> Self {
        Self {
            text: run.typeset_text(),
            italic: false,
            small_caps: run.small_caps,
        }
    }
}

/// Destination of the paper-mode document
///
/// A document is built once per request and saved once.
pub trait DocumentSink {
    fn add_paragraph(&mut self, style: ParagraphStyle, runs: Vec<TextRun>);

    fn add_table(&mut self, table: &RenderedTable);

    fn save(&self, path: &Path) -> Result<(), StorageError>;
}
