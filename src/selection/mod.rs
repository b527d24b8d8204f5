//! Analysis selection
//!
//! Turns the analyzer's candidate lists into one displayed word/gloss pair per
//! word, with punctuation and clitics folded in.
//!
//! ## Modules
//!
//! - `ranking`: deterministic choice among ambiguous analyses
//! - `assembler`: punctuation attachment and clitic merge

pub mod ranking;
pub mod assembler;

pub use ranking::{choose, GlossChoice};
pub use assembler::{assemble, UnitAssembler};

use crate::errors::GlossError;
use crate::models::DisplayUnit;
use crate::registry::LanguageEntry;
use crate::text::{normalize_quotes, sanitize, tokenize, word_texts};

/// Select the display units of one example sentence
///
/// The analyzer is called once for the whole example so that its own
/// disambiguation sees the full context.
pub fn select_units(
    entry: &LanguageEntry,
    source: &str,
    max_chars: usize,
) -> Result<Vec<DisplayUnit>, GlossError> {
    let cleaned = normalize_quotes(&sanitize(source, max_chars));
    let tokens = tokenize(&cleaned);
    let words = word_texts(&tokens);
    let analyses = entry.analyze(&words)?;
    assemble(&tokens, &analyses, &entry.rules, |s| entry.example_translit(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LanguageProfile, RuleSet};
    use crate::models::Analysis;
    use crate::registry::{LanguageRegistry, LexiconAnalyzer};
    use std::sync::Arc;

    #[test]
    fn test_select_units_end_to_end() {
        let lexicon = LexiconAnalyzer::new()
            .with("nu", Analysis::new("nu", "nu", "STEM").with_translation("carry"))
            .with("ke", Analysis::new("ke", "ke", "if"));
        let profile = LanguageProfile {
            name: "Beserman".to_string(),
            rules: RuleSet {
                enclitic: Some("^ke$".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let registry = LanguageRegistry::builder()
            .register("beserman", &profile, Arc::new(lexicon))
            .unwrap()
            .build();
        let entry = registry.capability_for("beserman").unwrap();

        let units = select_units(entry, "\"Nu ke.\"", 2048).unwrap();
        assert_eq!(units, vec![DisplayUnit::new("“Nu=ke.”", "carry=if")]);
    }
}
