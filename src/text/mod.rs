//! Text preparation
//!
//! Cleaning and tokenizing user input before it reaches the analyzer, and
//! whole-text punctuation normalization for paper mode.
//!
//! ## Modules
//!
//! - `sanitize`: character stripping, truncation, word/non-word tokenization
//! - `punctuation`: directional quotes, dash disambiguation, ellipsis

pub mod sanitize;
pub mod punctuation;

// Re-exports for convenience
pub use sanitize::{sanitize, strip_markup_chars, tokenize, prepare_sentence, word_texts, MAX_INPUT_CHARS};
pub use punctuation::{normalize_punctuation, normalize_quotes, normalize_dashes};
