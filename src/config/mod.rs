//! Configuration for the glossing pipeline
//!
//! `default.yaml` is embedded into the crate so that the documented defaults
//! and runtime behavior stay in sync. Deployments layer their own YAML file on
//! top by loading it with [`GlosserConfig::from_yaml_file`]; missing keys fall
//! back to the same defaults.

use crate::errors::GlossError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const DEFAULT_YAML: &str = include_str!("default.yaml");

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlosserConfig {
    /// Well-known location the paper document is written to
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Directory whose `<name>.mustache` files replace the embedded templates
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,

    #[serde(default)]
    pub layout: LayoutSettings,

    #[serde(default)]
    pub document: DocumentSettings,

    /// Language code -> profile
    #[serde(default)]
    pub languages: BTreeMap<String, LanguageProfile>,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("generated/paper.docx")
}

/// Layout budgets for segmentation and table balancing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Wordform characters that fit on one table row
    pub word_chars_per_row: usize,

    /// Gloss characters that fit on one table row
    pub gloss_chars_per_row: usize,

    /// Width counted for each collapsed abbreviation run in a gloss
    pub abbreviation_width: usize,

    /// Longest line (trimmed, in characters) that may become a header
    pub header_max_chars: usize,

    /// Lines starting with one of these are captions, never headers
    pub caption_keywords: Vec<String>,

    /// Sentence inputs are truncated to this many characters
    pub max_input_chars: usize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            word_chars_per_row: 56,
            gloss_chars_per_row: 76,
            abbreviation_width: 3,
            header_max_chars: 80,
            caption_keywords: ["Table", "Figure", "Fig.", "Таблица", "Рисунок", "Рис."]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_input_chars: crate::text::MAX_INPUT_CHARS,
        }
    }
}

/// Typography of the generated document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    pub font: String,
    pub font_size_pt: u32,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            font: "Times New Roman".to_string(),
            font_size_pt: 12,
        }
    }
}

/// Per-language settings, turned into a registry entry at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageProfile {
    /// Display name for language menus
    pub name: String,

    /// Ask the analyzer to disambiguate (static, never user controlled)
    #[serde(default)]
    pub disambiguate: bool,

    #[serde(default)]
    pub rules: RuleSet,

    /// Scheme name -> character table
    #[serde(default)]
    pub transliterations: BTreeMap<String, BTreeMap<String, String>>,

    /// Scheme applied to example wordforms in paper mode
    #[serde(default)]
    pub example_scheme: Option<String>,

    /// IPA-equivalent scheme applied to embedded words in paragraphs
    #[serde(default)]
    pub embedded_scheme: Option<String>,
}

/// Regex sources for the language-specific rules; absent rules are disabled
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    /// Full-token pattern for enclitics merged onto the previous word
    #[serde(default)]
    pub enclitic: Option<String>,

    /// Gloss runs typeset in small caps
    #[serde(default)]
    pub gloss_abbreviation: Option<String>,

    /// Object-language words embedded in paragraph prose
    #[serde(default)]
    pub embedded_word: Option<String>,
}

impl GlosserConfig {
    /// The embedded defaults
    pub fn default_config() -> Result<Self, GlossError> {
        Self::from_yaml_str(DEFAULT_YAML)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, GlossError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| GlossError::Configuration(format!("invalid configuration: {}", e)))
    }

    /// Load a user configuration file
    pub fn from_yaml_file(path: &Path) -> Result<Self, GlossError> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            GlossError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        log::info!("Loading configuration from {}", path.display());
        Self::from_yaml_str(&yaml)
    }

    pub fn language(&self, code: &str) -> Option<&LanguageProfile> {
        self.languages.get(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = GlosserConfig::default_config().unwrap();
        assert_eq!(config.output_path, PathBuf::from("generated/paper.docx"));
        assert_eq!(config.layout.word_chars_per_row, 56);
        assert_eq!(config.layout.gloss_chars_per_row, 76);
        assert_eq!(config.languages.len(), 10);
    }

    #[test]
    fn test_default_disambiguation_languages() {
        let config = GlosserConfig::default_config().unwrap();
        let disamb: Vec<&str> = config
            .languages
            .iter()
            .filter(|(_, p)| p.disambiguate)
            .map(|(code, _)| code.as_str())
            .collect();
        assert_eq!(disamb, vec!["albanian", "beserman", "eastern_armenian", "udmurt"]);
    }

    #[test]
    fn test_udmurt_profile_has_schemes() {
        let config = GlosserConfig::default_config().unwrap();
        let udmurt = config.language("udmurt").unwrap();
        assert_eq!(udmurt.example_scheme.as_deref(), Some("latin"));
        assert_eq!(udmurt.transliterations["ipa"]["ӝ"], "dʒ");
        assert!(udmurt.rules.enclitic.is_some());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = GlosserConfig::from_yaml_str("output_path: out/x.docx\n").unwrap();
        assert_eq!(config.output_path, PathBuf::from("out/x.docx"));
        assert_eq!(config.layout.header_max_chars, 80);
        assert_eq!(config.document.font_size_pt, 12);
        assert!(config.languages.is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_configuration_error() {
        let err = GlosserConfig::from_yaml_str("layout: [1, 2").unwrap_err();
        assert!(matches!(err, GlossError::Configuration(_)));
    }
}
