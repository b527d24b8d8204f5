//! Glossing entry points
//!
//! [`Glosser`] ties the registry, the configuration and the template store
//! together and exposes the operations the web layer calls.
//!
//! # Module Structure
//!
//! - `paper`: `render_paper`, the paper-mode pipeline with its document side effect
//! - `sentence`: `render_sentence` and `render_sentence_html`, the word-level view

pub mod paper;
pub mod sentence;

pub use paper::PaperOutput;
pub use sentence::{SentenceAnalyses, DEFAULT_SCHEME};

use crate::config::GlosserConfig;
use crate::errors::{GlossError, Result};
use crate::registry::{LanguageEntry, LanguageRegistry};
use crate::renderers::TemplateStore;
use std::sync::Arc;

/// Request handler over a shared, read-only language registry
pub struct Glosser {
    registry: Arc<LanguageRegistry>,
    config: GlosserConfig,
    templates: TemplateStore,
}

impl Glosser {
    pub fn new(registry: Arc<LanguageRegistry>, config: GlosserConfig) -> Self {
        let templates = TemplateStore::with_dir(config.templates_dir.as_deref());
        Self {
            registry,
            config,
            templates,
        }
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn config(&self) -> &GlosserConfig {
        &self.config
    }

    /// `(code, display name)` pairs for the language menu
    pub fn languages(&self) -> Vec<(&str, &str)> {
        self.registry.languages()
    }

    fn entry(&self, language: &str) -> Result<&LanguageEntry> {
        self.registry.capability_for(language)
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Reject input with nothing to analyze
pub(crate) fn validate_input(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(GlossError::Validation(
            "input text is empty or whitespace-only".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input() {
        assert!(validate_input("Mon").is_ok());
        assert!(matches!(validate_input(""), Err(GlossError::Validation(_))));
        assert!(matches!(validate_input(" \n\t "), Err(GlossError::Validation(_))));
    }

    #[test]
    fn test_glosser_lists_registered_languages() {
        let config = GlosserConfig::default_config().unwrap();
        let registry = LanguageRegistry::from_config(&config, |code| {
            (code == "erzya").then(|| {
                Arc::new(crate::registry::LexiconAnalyzer::new())
                    as Arc<dyn crate::registry::MorphAnalyzer>
            })
        })
        .unwrap();
        let glosser = Glosser::new(Arc::new(registry), config);
        assert_eq!(glosser.languages(), vec![("erzya", "Erzya")]);
    }
}
