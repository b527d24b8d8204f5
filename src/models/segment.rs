//! Classified spans of a submitted document

use serde::{Deserialize, Serialize};

/// One segment of the input text, in document order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Empty line, rendered as a line break
    Blank,

    /// Ordinary paragraph text
    Paragraph(String),

    /// Short unpunctuated line promoted to a section header
    Header(String),

    /// Numbered example: `(x1) source text` with an optional translation
    Example {
        /// `x` or `x` followed by digits
        id: String,
        source: String,
        translation: Option<String>,
    },
}

impl Segment {
    pub fn is_example(&self) -> bool {
        matches!(self, Segment::Example { .. })
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Segment::Blank)
    }
}
