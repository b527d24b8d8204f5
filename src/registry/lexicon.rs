//! Dictionary-backed analyzer
//!
//! Looks each token up in a wordform -> analyses table loaded from JSON.
//! Useful for fixed corpora, demos and tests; real deployments plug their own
//! [`MorphAnalyzer`] into the registry.

use super::MorphAnalyzer;
use crate::errors::GlossError;
use crate::models::Analysis;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct LexiconAnalyzer {
    /// Lowercased wordform -> candidate analyses
    entries: HashMap<String, Vec<Analysis>>,
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `{ "wordform": [analysis, ...], ... }`
    pub fn from_json(json: &str) -> Result<Self, GlossError> {
        let raw: HashMap<String, Vec<Analysis>> = serde_json::from_str(json)
            .map_err(|e| GlossError::Configuration(format!("invalid lexicon: {}", e)))?;
        let mut lexicon = Self::new();
        for (wordform, analyses) in raw {
            for analysis in analyses {
                lexicon.insert(&wordform, analysis);
            }
        }
        Ok(lexicon)
    }

    /// Add one candidate analysis for `wordform`
    pub fn insert(&mut self, wordform: &str, analysis: Analysis) {
        self.entries
            .entry(wordform.to_lowercase())
            .or_default()
            .push(analysis);
    }

    pub fn with(mut self, wordform: &str, analysis: Analysis) -> Self {
        self.insert(wordform, analysis);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MorphAnalyzer for LexiconAnalyzer {
    fn analyze_words(
        &self,
        tokens: &[String],
        disambiguate: bool,
    ) -> Result<Vec<Vec<Analysis>>, GlossError> {
        Ok(tokens
            .iter()
            .map(|token| {
                let candidates = self
                    .entries
                    .get(&token.to_lowercase())
                    .map(|analyses| analyses.as_slice())
                    .unwrap_or(&[]);
                let keep = if disambiguate {
                    candidates.len().min(1)
                } else {
                    candidates.len()
                };
                candidates[..keep]
                    .iter()
                    .map(|a| Analysis {
                        wordform: token.clone(),
                        ..a.clone()
                    })
                    .collect()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_one_list_per_token() {
        let lexicon = LexiconAnalyzer::new().with("nu", Analysis::new("nu", "nu", "STEM"));
        let result = lexicon.analyze_words(&words(&["nu", "zzz", "Nu"]), false).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].len(), 1);
        assert!(result[1].is_empty());
        assert_eq!(result[2][0].wordform, "Nu");
    }

    #[test]
    fn test_disambiguate_keeps_first() {
        let lexicon = LexiconAnalyzer::new()
            .with("ke", Analysis::new("ke", "ke", "if"))
            .with("ke", Analysis::new("ke", "ke", "PTCL"));
        let all = lexicon.analyze_words(&words(&["ke"]), false).unwrap();
        let one = lexicon.analyze_words(&words(&["ke"]), true).unwrap();
        assert_eq!(all[0].len(), 2);
        assert_eq!(one[0].len(), 1);
        assert_eq!(one[0][0].gloss, "if");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"Mon": [{"wf": "mon", "wfGlossed": "mon", "gloss": "I", "lemma": "mon"}]}"#;
        let lexicon = LexiconAnalyzer::from_json(json).unwrap();
        assert_eq!(lexicon.len(), 1);
        let result = lexicon.analyze_words(&words(&["mon"]), false).unwrap();
        assert_eq!(result[0][0].gloss, "I");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            LexiconAnalyzer::from_json("[1, 2]"),
            Err(GlossError::Configuration(_))
        ));
    }
}
