//! Data model for the glossing pipeline
//!
//! Tokens, analyzer output, selected display units and document segments.
//! Everything here is created per request and dropped once the outputs are
//! rendered.

pub mod token;
pub mod analysis;
pub mod segment;

// Re-export commonly used types
pub use token::{Token, TokenKind};
pub use analysis::{Analysis, DisplayUnit, STEM_PLACEHOLDER};
pub use segment::Segment;
