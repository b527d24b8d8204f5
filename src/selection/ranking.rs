//! Gloss ranking under ambiguity
//!
//! Each field of the candidate analyses is deduplicated on its own and ranked
//! with a total order, so the same candidates always produce the same choice
//! no matter what order the analyzer returned them in.
//!
//! - glosses: fewer morpheme boundaries, then shorter, then lexical
//! - glossed wordforms: fewer boundaries, then shorter longest morpheme, then lexical
//! - translations: longer first, then lexical
//!
//! The wordform is ranked among the candidates that carry the chosen gloss,
//! which keeps the two lines segmented the same way.

use crate::models::{Analysis, STEM_PLACEHOLDER};
use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Characters separating morphemes (`-`) and clitics (`=`)
pub const MORPHEME_BOUNDARIES: &[char] = &['-', '='];

/// Joins the words of a multi-word translation inside a gloss
pub const TRANSLATION_DELIMITER: &str = ".";

lazy_static! {
    static ref TRANSLATION_SEPARATORS: Regex =
        Regex::new(r"[\s,;()]+").expect("separator pattern compiles");
}

/// The wordform/gloss pair chosen for one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossChoice {
    pub wordform: String,
    pub gloss: String,
}

pub fn boundary_count(s: &str) -> usize {
    s.chars().filter(|c| MORPHEME_BOUNDARIES.contains(c)).count()
}

/// Length in characters of the longest morpheme
pub fn longest_segment(s: &str) -> usize {
    s.split(|c| MORPHEME_BOUNDARIES.contains(&c))
        .map(|m| m.chars().count())
        .max()
        .unwrap_or(0)
}

/// Non-empty values, deduplicated and in lexical order
fn distinct<'a, I: Iterator<Item = &'a str>>(values: I) -> Vec<&'a str> {
    values
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn best_gloss<'a>(glosses: &[&'a str]) -> Option<&'a str> {
    glosses
        .iter()
        .copied()
        .min_by_key(|g| (boundary_count(g), g.chars().count(), *g))
}

pub fn best_wordform<'a>(wordforms: &[&'a str]) -> Option<&'a str> {
    wordforms
        .iter()
        .copied()
        .min_by_key(|w| (boundary_count(w), longest_segment(w), *w))
}

pub fn best_translation<'a>(translations: &[&'a str]) -> Option<&'a str> {
    translations
        .iter()
        .copied()
        .min_by_key(|t| (Reverse(t.chars().count()), *t))
}

/// `go away (of time)` -> `go.away.of.time`
pub fn normalize_translation(translation: &str) -> String {
    TRANSLATION_SEPARATORS
        .replace_all(translation.trim(), TRANSLATION_DELIMITER)
        .trim_matches(|c| TRANSLATION_DELIMITER.contains(c))
        .to_string()
}

/// Capitalize `wordform` when the surface token is capitalized and the
/// analyzer returned a lowercased form of it
fn match_case(surface: &str, wordform: &str) -> String {
    let (Some(s), Some(w)) = (surface.chars().next(), wordform.chars().next()) else {
        return wordform.to_string();
    };
    if s.is_uppercase() && w.is_lowercase() && s.to_lowercase().eq(w.to_lowercase()) {
        let rest: String = wordform.chars().skip(1).collect();
        format!("{}{}", s, rest)
    } else {
        wordform.to_string()
    }
}

/// Pick the displayed wordform and gloss for one token
///
/// A token with no usable analysis keeps the analyzer's surface form (or the
/// token itself) and gets the stem placeholder as its gloss.
pub fn choose(surface: &str, analyses: &[Analysis]) -> GlossChoice {
    let glosses = distinct(analyses.iter().map(|a| a.gloss.as_str()));
    let gloss = best_gloss(&glosses);

    let aligned: Vec<&Analysis> = match gloss {
        Some(g) => analyses.iter().filter(|a| a.gloss.trim() == g).collect(),
        None => analyses.iter().collect(),
    };
    let wordforms = distinct(aligned.iter().map(|a| a.glossed_wordform.as_str()));
    let wordform = best_wordform(&wordforms);

    let raw_surface = analyses
        .iter()
        .map(|a| a.wordform.as_str())
        .find(|w| !w.trim().is_empty())
        .unwrap_or(surface);

    if gloss.is_none() && wordform.is_none() {
        return GlossChoice {
            wordform: raw_surface.to_string(),
            gloss: STEM_PLACEHOLDER.to_string(),
        };
    }

    if glosses.len() > 1 || wordforms.len() > 1 {
        log::debug!(
            "'{}': {} glosses, {} wordforms, chose {:?}/{:?}",
            surface,
            glosses.len(),
            wordforms.len(),
            wordform,
            gloss
        );
    }

    let mut gloss = gloss.unwrap_or(STEM_PLACEHOLDER).to_string();
    let translations = distinct(analyses.iter().filter_map(|a| a.translation.as_deref()));
    if let Some(translation) = best_translation(&translations) {
        let translation = normalize_translation(translation);
        if !translation.is_empty() {
            gloss = gloss.replace(STEM_PLACEHOLDER, &translation);
        }
    }

    GlossChoice {
        wordform: match_case(surface, wordform.unwrap_or(raw_surface)),
        gloss,
    }
}
