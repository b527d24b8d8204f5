//! Inline run splitting
//!
//! Both renderers share these pure splitters so that italics and small caps
//! come out the same in HTML and in the document.

use regex::Regex;
use serde::Serialize;

/// A span of paragraph text; italic spans are embedded foreign words
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineRun {
    pub text: String,
    pub italic: bool,
}

impl InlineRun {
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            italic: false,
        }
    }

    pub fn italic(text: &str) -> Self {
        Self {
            text: text.to_string(),
            italic: true,
        }
    }
}

/// A span of gloss text; small-caps spans are grammatical abbreviations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossRun {
    pub text: String,
    pub small_caps: bool,
}

impl GlossRun {
    /// Text as it should be typeset: abbreviations are lowercased so that the
    /// small-caps style has lowercase letters to shrink
    pub fn typeset_text(&self) -> String {
        if self.small_caps {
            self.text.to_lowercase()
        } else {
            self.text.clone()
        }
    }
}

/// Split paragraph text on the embedded-word pattern, transliterating matches
pub fn split_embedded<F>(text: &str, pattern: Option<&Regex>, translit: F) -> Vec<InlineRun>
where
    F: Fn(&str) -> String,
{
    let Some(re) = pattern else {
        return vec![InlineRun::plain(text)];
    };

    let mut runs = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            runs.push(InlineRun::plain(&text[last..m.start()]));
        }
        runs.push(InlineRun::italic(&translit(m.as_str())));
        last = m.end();
    }
    if last < text.len() {
        runs.push(InlineRun::plain(&text[last..]));
    }
    runs
}

/// Split a gloss into abbreviation and ordinary runs
///
/// Without a pattern the gloss is a single ordinary run.
pub fn split_gloss(gloss: &str, pattern: Option<&Regex>) -> Vec<GlossRun> {
    if gloss.is_empty() {
        return Vec::new();
    }
    let Some(re) = pattern else {
        return vec![GlossRun {
            text: gloss.to_string(),
            small_caps: false,
        }];
    };

    let mut runs = Vec::new();
    let mut last = 0;
    for m in re.find_iter(gloss) {
        if m.start() > last {
            runs.push(GlossRun {
                text: gloss[last..m.start()].to_string(),
                small_caps: false,
            });
        }
        runs.push(GlossRun {
            text: m.as_str().to_string(),
            small_caps: true,
        });
        last = m.end();
    }
    if last < gloss.len() {
        runs.push(GlossRun {
            text: gloss[last..].to_string(),
            small_caps: false,
        });
    }
    runs
}

/// Estimated printed width of a gloss; each abbreviation counts as
/// `abbreviation_width` characters
pub fn gloss_width(gloss: &str, pattern: Option<&Regex>, abbreviation_width: usize) -> usize {
    split_gloss(gloss.trim(), pattern)
        .iter()
        .map(|run| {
            if run.small_caps {
                abbreviation_width
            } else {
                run.text.chars().count()
            }
        })
        .sum()
}
