//! Sanitizer and tokenizer
//!
//! Input is cleaned of `<`, `>` and `&` (the HTML renderers do not escape
//! prepared markup a second time), truncated, and split into alternating word
//! and non-word runs. Whitespace-only runs are dropped; the whitespace they
//! carried survives as `Token::space_before` on the following token.

use crate::models::{Token, TokenKind};
use lazy_static::lazy_static;
use regex::Regex;

/// Longest input accepted by the sentence entry points, in characters
pub const MAX_INPUT_CHARS: usize = 2048;

lazy_static! {
    // Words may carry inner apostrophes or hyphens: `don't`, `nu-ke`.
    static ref WORD_OR_GAP: Regex =
        Regex::new(r"\w+(?:['’-]\w+)*|\W+").expect("token pattern compiles");
    static ref WORD_START: Regex = Regex::new(r"^\w").expect("word pattern compiles");
}

/// Remove the characters that could open markup in the rendered HTML
pub fn strip_markup_chars(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '<' | '>' | '&')).collect()
}

/// Strip markup characters, then keep at most `max_chars` characters
pub fn sanitize(text: &str, max_chars: usize) -> String {
    strip_markup_chars(text).chars().take(max_chars).collect()
}

/// Split cleaned text into word and non-word tokens
///
/// # Examples
/// - "nu, ke." -> ["nu", ",", "ke", "."]
/// - "don't go" -> ["don't", "go"]
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pending_space = false;

    for m in WORD_OR_GAP.find_iter(text.trim()) {
        let raw = m.as_str();
        let stripped = raw.trim();
        if stripped.is_empty() {
            pending_space = true;
            continue;
        }

        let kind = if WORD_START.is_match(raw) {
            TokenKind::Word
        } else {
            TokenKind::Punct
        };
        let leading_space = raw.len() != raw.trim_start().len();

        tokens.push(Token {
            text: stripped.to_string(),
            kind,
            space_before: pending_space || leading_space,
        });
        pending_space = raw.len() != raw.trim_end().len();
    }

    tokens
}

/// Sanitize and tokenize a sentence in one step
pub fn prepare_sentence(text: &str, max_chars: usize) -> Vec<Token> {
    tokenize(&sanitize(text, max_chars))
}

/// The texts of the word tokens, in order, as sent to the analyzer
pub fn word_texts(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| t.is_word())
        .map(|t| t.text.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_strips_angle_brackets_and_ampersand() {
        assert_eq!(sanitize("<script>a&b</script>", MAX_INPUT_CHARS), "scriptab/script");
    }

    #[test]
    fn test_truncates_after_stripping() {
        let input = format!("<<{}", "a".repeat(3000));
        let cleaned = sanitize(&input, MAX_INPUT_CHARS);
        assert_eq!(cleaned.chars().count(), MAX_INPUT_CHARS);
        assert!(cleaned.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let cleaned = sanitize(&"ӧ".repeat(3000), 10);
        assert_eq!(cleaned, "ӧ".repeat(10));
    }

    #[test]
    fn test_tokenize_words_and_punctuation() {
        let tokens = tokenize("nu, ke.");
        assert_eq!(texts(&tokens), vec!["nu", ",", "ke", "."]);
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].kind, TokenKind::Punct);
        assert!(tokens[2].space_before);
        assert!(!tokens[3].space_before);
    }

    #[test]
    fn test_tokenize_inner_apostrophe_and_hyphen() {
        let tokens = tokenize("don't nu-ke");
        assert_eq!(texts(&tokens), vec!["don't", "nu-ke"]);
        assert!(tokens.iter().all(|t| t.is_word()));
    }

    #[test]
    fn test_tokenize_drops_whitespace_tokens() {
        let tokens = tokenize("  mon   tone  ");
        assert_eq!(texts(&tokens), vec!["mon", "tone"]);
        assert!(tokens[1].space_before);
    }

    #[test]
    fn test_tokenize_cyrillic() {
        let tokens = tokenize("Мон тонэ яратӥсько!");
        assert_eq!(texts(&tokens), vec!["Мон", "тонэ", "яратӥсько", "!"]);
    }

    #[test]
    fn test_word_texts_skips_punctuation() {
        let tokens = tokenize("(a) b.");
        assert_eq!(word_texts(&tokens), vec!["a", "b"]);
    }
}
