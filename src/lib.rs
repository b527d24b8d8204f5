//! Interlinear Glosser
//!
//! Turns text with numbered linguistic examples into interlinear glosses:
//! an HTML preview and a `.docx` document with aligned word/gloss tables.
//! Morphological analysis itself is delegated to per-language analyzers
//! registered in a [`LanguageRegistry`].

pub mod errors;
pub mod config;
pub mod models;
pub mod text;
pub mod registry;
pub mod selection;
pub mod structure;
pub mod renderers;
pub mod api;

// Re-export commonly used types
pub use api::{Glosser, PaperOutput, SentenceAnalyses, DEFAULT_SCHEME};
pub use config::{GlosserConfig, LanguageProfile, LayoutSettings, RuleSet};
pub use errors::{GlossError, StorageError};
pub use models::{Analysis, DisplayUnit, Segment, Token, TokenKind};
pub use registry::{LanguageEntry, LanguageRegistry, LexiconAnalyzer, MorphAnalyzer};
