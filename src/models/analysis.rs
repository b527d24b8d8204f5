//! Analyzer output and the units selected from it

use serde::{Deserialize, Serialize};

/// Gloss used for the lexical stem, replaced by a translation when one is known
pub const STEM_PLACEHOLDER: &str = "STEM";

/// One candidate parse of a word token, as returned by a morphological analyzer
///
/// Field names follow the analyzers' JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Analysis {
    /// Surface form of the token
    #[serde(rename = "wf")]
    pub wordform: String,

    /// Surface form split into morphemes, e.g. `kyl-ė`
    #[serde(rename = "wfGlossed", default)]
    pub glossed_wordform: String,

    /// Morpheme-by-morpheme gloss aligned with `glossed_wordform`, e.g. `STEM-PST`
    #[serde(default)]
    pub gloss: String,

    #[serde(default)]
    pub lemma: String,

    /// Grammatical tags, comma separated
    #[serde(default)]
    pub gramm: String,

    /// Lexical translation of the lemma
    #[serde(
        rename = "trans_en",
        alias = "translation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub translation: Option<String>,
}

impl Analysis {
    /// Create an analysis with a segmented wordform and gloss
    pub fn new(wordform: &str, glossed_wordform: &str, gloss: &str) -> Self {
        Self {
            wordform: wordform.to_string(),
            glossed_wordform: glossed_wordform.to_string(),
            gloss: gloss.to_string(),
            ..Default::default()
        }
    }

    pub fn with_lemma(mut self, lemma: &str) -> Self {
        self.lemma = lemma.to_string();
        self
    }

    pub fn with_gramm(mut self, gramm: &str) -> Self {
        self.gramm = gramm.to_string();
        self
    }

    pub fn with_translation(mut self, translation: &str) -> Self {
        self.translation = Some(translation.to_string());
        self
    }
}

/// The single word/gloss pair shown for one token
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayUnit {
    /// Displayed wordform, including attached punctuation and clitics
    pub wordform: String,

    /// Displayed gloss, empty for bare punctuation
    pub gloss: String,
}

impl DisplayUnit {
    pub fn new(wordform: &str, gloss: &str) -> Self {
        Self {
            wordform: wordform.to_string(),
            gloss: gloss.to_string(),
        }
    }

    /// True when the wordform holds no letters or digits (punctuation, `[...]`)
    pub fn is_bare_punctuation(&self) -> bool {
        !self.wordform.chars().any(|c| c.is_alphanumeric())
    }
}
