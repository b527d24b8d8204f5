//! Tokens produced by the sanitizer

use serde::{Deserialize, Serialize};

/// Whether a token is sent to the analyzer
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Letters, digits, underscore, with inner apostrophes/hyphens
    Word,
    /// Punctuation and anything else that is not a word
    Punct,
}

/// A contiguous span of the cleaned input
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token text with surrounding whitespace stripped
    pub text: String,

    pub kind: TokenKind,

    /// Whitespace separated this token from the previous one in the source
    pub space_before: bool,
}

impl Token {
    pub fn word(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: TokenKind::Word,
            space_before: false,
        }
    }

    pub fn punct(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: TokenKind::Punct,
            space_before: false,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}
