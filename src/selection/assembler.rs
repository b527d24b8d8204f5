//! Display unit assembly
//!
//! Walks the tokens of one example in order and produces one `DisplayUnit`
//! per surviving word:
//!
//! - closing punctuation (closing brackets and quotes, sentence punctuation,
//!   hyphen, slash) is appended to the previous unit
//! - opening punctuation (opening brackets and quotes, `*`, `#`) is held and
//!   prefixed onto the next unit
//! - an enclitic is joined to the previous unit with `=` on both lines, unless
//!   punctuation stands between them
//!
//! Punctuation never forms a unit of its own unless the example has no words.

use super::ranking::choose;
use crate::errors::GlossError;
use crate::models::{Analysis, DisplayUnit, Token};
use crate::registry::LanguageRules;

/// Marks clitic boundaries on both lines
pub const CLITIC_BOUNDARY: char = '=';

/// Characters that attach to the following word
pub const OPENING_PUNCT: &[char] = &['(', '[', '{', '“', '‘', '«', '„', '*', '#'];

/// Characters that attach tightly to the preceding word
pub const CLOSING_PUNCT: &[char] = &[
    ')', ']', '}', '”', '’', '»', '.', ',', ';', ':', '!', '?', '…', '-', '/', '%',
];

/// Incremental builder of the display units of one example
pub struct UnitAssembler<'a> {
    rules: &'a LanguageRules,
    translit: Box<dyn Fn(&str) -> String + 'a>,
    units: Vec<DisplayUnit>,
    /// Opening punctuation waiting for the next word
    prefix: String,
    /// The prefix ends with free-standing punctuation that keeps its space
    prefix_spaced: bool,
    /// Whitespace separates the prefix from the previous unit
    prefix_gap: bool,
    /// Punctuation was attached since the last word; blocks clitic merge
    blocked: bool,
}

impl<'a> UnitAssembler<'a> {
    pub fn new(rules: &'a LanguageRules) -> Self {
        Self {
            rules,
            translit: Box::new(|s: &str| s.to_string()),
            units: Vec::new(),
            prefix: String::new(),
            prefix_spaced: false,
            prefix_gap: false,
            blocked: false,
        }
    }

    /// Transliterate the word part of every wordform
    pub fn with_translit<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + 'a,
    {
        self.translit = Box::new(f);
        self
    }

    /// Add a word token with its candidate analyses
    pub fn push_word(&mut self, token: &Token, analyses: &[Analysis]) {
        let choice = choose(&token.text, analyses);
        let wordform = (self.translit)(&choice.wordform);

        if self.prefix.is_empty() && !self.blocked && self.rules.is_enclitic(&token.text) {
            if let Some(last) = self.units.last_mut() {
                if !last.is_bare_punctuation() {
                    last.wordform.push(CLITIC_BOUNDARY);
                    last.wordform.push_str(&wordform);
                    last.gloss.push(CLITIC_BOUNDARY);
                    last.gloss.push_str(&choice.gloss);
                    return;
                }
            }
        }

        let mut display = std::mem::take(&mut self.prefix);
        if self.prefix_spaced && token.space_before && !display.is_empty() {
            display.push(' ');
        }
        display.push_str(&wordform);
        self.prefix_spaced = false;
        self.prefix_gap = false;
        self.blocked = false;
        self.units.push(DisplayUnit {
            wordform: display,
            gloss: choice.gloss,
        });
    }

    /// Add a punctuation token
    pub fn push_punct(&mut self, token: &Token) {
        for (i, piece) in token.text.split_whitespace().enumerate() {
            let spaced = i > 0 || token.space_before;
            let (head, tail) = split_opening_tail(piece);

            if !head.is_empty() {
                self.attach(head, spaced);
            }
            if !tail.is_empty() {
                if self.prefix.is_empty() {
                    self.prefix_gap = spaced && head.is_empty();
                }
                self.prefix.push_str(tail);
                self.prefix_spaced = false;
            }
        }
    }

    fn attach(&mut self, piece: &str, spaced: bool) {
        let tight = piece.starts_with(|c: char| CLOSING_PUNCT.contains(&c));

        if self.prefix.is_empty() {
            if let Some(last) = self.units.last_mut() {
                if spaced && !tight {
                    last.wordform.push(' ');
                }
                last.wordform.push_str(piece);
                self.blocked = true;
                return;
            }
        }

        // Nothing to attach to yet: hold it for the next word.
        if !self.prefix.is_empty() && spaced {
            self.prefix.push(' ');
        }
        self.prefix.push_str(piece);
        self.prefix_spaced = true;
    }

    pub fn finish(mut self) -> Vec<DisplayUnit> {
        if !self.prefix.is_empty() {
            let prefix = std::mem::take(&mut self.prefix);
            match self.units.last_mut() {
                Some(last) => {
                    if self.prefix_gap {
                        last.wordform.push(' ');
                    }
                    last.wordform.push_str(&prefix);
                }
                None => self.units.push(DisplayUnit::new(&prefix, "")),
            }
        }
        self.units
    }
}

/// Split a punctuation piece into the part closing the previous word and the
/// trailing run of opening characters: `.(` -> (`.`, `(`)
fn split_opening_tail(piece: &str) -> (&str, &str) {
    let split = piece
        .char_indices()
        .rev()
        .take_while(|(_, c)| OPENING_PUNCT.contains(c))
        .last()
        .map(|(i, _)| i)
        .unwrap_or(piece.len());
    piece.split_at(split)
}

/// Assemble display units from tokens and the analyzer's per-word output
pub fn assemble<F>(
    tokens: &[Token],
    analyses: &[Vec<Analysis>],
    rules: &LanguageRules,
    translit: F,
) -> Result<Vec<DisplayUnit>, GlossError>
where
    F: Fn(&str) -> String,
{
    let word_count = tokens.iter().filter(|t| t.is_word()).count();
    if word_count != analyses.len() {
        return Err(GlossError::Analyzer(format!(
            "{} analysis lists for {} words",
            analyses.len(),
            word_count
        )));
    }

    let mut assembler = UnitAssembler::new(rules).with_translit(translit);
    let mut candidates = analyses.iter();
    for token in tokens {
        if token.is_word() {
            let list = candidates.next().map(|l| l.as_slice()).unwrap_or(&[]);
            assembler.push_word(token, list);
        } else {
            assembler.push_punct(token);
        }
    }
    Ok(assembler.finish())
}
