//! Language capability registry
//!
//! Maps a language code to its analyzer, its compiled rules and its
//! transliteration schemes. The registry is built once at startup and only
//! read afterwards, so it is shared behind an `Arc` without locking.

pub mod lexicon;
pub mod translit;

pub use lexicon::LexiconAnalyzer;
pub use translit::{CharTable, TranslitFn, TranslitMap};

use crate::config::{GlosserConfig, LanguageProfile, RuleSet};
use crate::errors::GlossError;
use crate::models::Analysis;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// External morphological analyzer for one language
///
/// Must return exactly one candidate list per input token, in the same order.
/// Unanalyzable tokens get an empty list.
pub trait MorphAnalyzer: Send + Sync {
    fn analyze_words(
        &self,
        tokens: &[String],
        disambiguate: bool,
    ) -> Result<Vec<Vec<Analysis>>, GlossError>;
}

/// Compiled language-specific rules; `None` disables a rule
#[derive(Debug, Clone, Default)]
pub struct LanguageRules {
    pub enclitic: Option<Regex>,
    pub gloss_abbreviation: Option<Regex>,
    pub embedded_word: Option<Regex>,
}

impl LanguageRules {
    pub fn compile(rules: &RuleSet) -> Result<Self, GlossError> {
        Ok(Self {
            enclitic: compile_rule("enclitic", rules.enclitic.as_deref())?,
            gloss_abbreviation: compile_rule("gloss_abbreviation", rules.gloss_abbreviation.as_deref())?,
            embedded_word: compile_rule("embedded_word", rules.embedded_word.as_deref())?,
        })
    }

    pub fn is_enclitic(&self, wordform: &str) -> bool {
        self.enclitic
            .as_ref()
            .map_or(false, |re| re.is_match(wordform))
    }
}

fn compile_rule(kind: &str, source: Option<&str>) -> Result<Option<Regex>, GlossError> {
    match source {
        None => Ok(None),
        Some(pattern) => Regex::new(pattern).map(Some).map_err(|e| {
            GlossError::Configuration(format!("invalid {} pattern '{}': {}", kind, pattern, e))
        }),
    }
}

/// Everything the pipeline needs to know about one language
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
    pub disambiguate: bool,
    pub analyzer: Arc<dyn MorphAnalyzer>,
    pub rules: LanguageRules,
    pub translit: TranslitMap,
    pub example_scheme: Option<String>,
    pub embedded_scheme: Option<String>,
}

impl LanguageEntry {
    /// Run the analyzer once over a batch of tokens and check its contract
    pub fn analyze(&self, tokens: &[String]) -> Result<Vec<Vec<Analysis>>, GlossError> {
        if tokens.is_empty() {
            return Ok(Vec::new());
        }
        let result = self.analyzer.analyze_words(tokens, self.disambiguate)?;
        if result.len() != tokens.len() {
            return Err(GlossError::Analyzer(format!(
                "{} analyzer returned {} lists for {} tokens",
                self.code,
                result.len(),
                tokens.len()
            )));
        }
        Ok(result)
    }

    /// Transliterate an example wordform with the configured example scheme
    pub fn example_translit(&self, text: &str) -> String {
        self.translit.apply_opt(self.example_scheme.as_deref(), text)
    }

    /// Transliterate an embedded paragraph word with the IPA-equivalent scheme
    pub fn embedded_translit(&self, text: &str) -> String {
        self.translit.apply_opt(self.embedded_scheme.as_deref(), text)
    }
}

impl fmt::Debug for LanguageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageEntry")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("disambiguate", &self.disambiguate)
            .field("rules", &self.rules)
            .field("translit", &self.translit)
            .finish()
    }
}

/// Immutable language code -> capability table
#[derive(Debug, Default)]
pub struct LanguageRegistry {
    entries: BTreeMap<String, LanguageEntry>,
}

impl LanguageRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build from configuration, asking `provider` for each language's analyzer
    ///
    /// Configured languages without an analyzer are skipped.
    pub fn from_config<P>(config: &GlosserConfig, mut provider: P) -> Result<Self, GlossError>
    where
        P: FnMut(&str) -> Option<Arc<dyn MorphAnalyzer>>,
    {
        let mut builder = RegistryBuilder::new();
        for (code, profile) in &config.languages {
            match provider(code) {
                Some(analyzer) => builder = builder.register(code, profile, analyzer)?,
                None => log::warn!("No analyzer supplied for '{}', language disabled", code),
            }
        }
        Ok(builder.build())
    }

    /// Capability lookup; unknown codes fail before any processing
    pub fn capability_for(&self, code: &str) -> Result<&LanguageEntry, GlossError> {
        self.entries
            .get(code)
            .ok_or_else(|| GlossError::unknown_language(code))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// `(code, display name)` pairs sorted by code
    pub fn languages(&self) -> Vec<(&str, &str)> {
        self.entries
            .values()
            .map(|e| (e.code.as_str(), e.name.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`LanguageRegistry`]
#[derive(Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<String, LanguageEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a language; rule patterns are compiled here
    pub fn register(
        mut self,
        code: &str,
        profile: &LanguageProfile,
        analyzer: Arc<dyn MorphAnalyzer>,
    ) -> Result<Self, GlossError> {
        let translit = TranslitMap::from_tables(&profile.transliterations);
        for scheme in [&profile.example_scheme, &profile.embedded_scheme].into_iter().flatten() {
            if !translit.contains(scheme) {
                log::warn!("Language '{}' references unknown scheme '{}'", code, scheme);
            }
        }

        let entry = LanguageEntry {
            code: code.to_string(),
            name: if profile.name.is_empty() {
                code.to_string()
            } else {
                profile.name.clone()
            },
            disambiguate: profile.disambiguate,
            analyzer,
            rules: LanguageRules::compile(&profile.rules)?,
            translit,
            example_scheme: profile.example_scheme.clone(),
            embedded_scheme: profile.embedded_scheme.clone(),
        };
        self.entries.insert(code.to_string(), entry);
        Ok(self)
    }

    /// Add a code-defined transliteration scheme to an already registered language
    pub fn scheme<F>(mut self, code: &str, scheme: &str, f: F) -> Result<Self, GlossError>
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let entry = self
            .entries
            .get_mut(code)
            .ok_or_else(|| GlossError::unknown_language(code))?;
        entry.translit.insert(scheme, f);
        Ok(self)
    }

    pub fn build(self) -> LanguageRegistry {
        log::info!("Language registry built with {} languages", self.entries.len());
        LanguageRegistry {
            entries: self.entries,
        }
    }
}
