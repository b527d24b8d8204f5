//! Word-level analysis of one sentence
//!
//! The sentence is sanitized, truncated and tokenized, and the analyzer is
//! called once for all of its words. The result is keyed by transliteration
//! scheme: `"default"` holds the analyzer output as is, every configured
//! scheme a copy with `wf`, `lemma` and `wfGlossed` transliterated.

use super::{validate_input, Glosser};
use crate::errors::Result;
use crate::models::Analysis;
use crate::registry::LanguageEntry;
use crate::renderers::{SentenceView, WordView, ANALYSIS_TEMPLATE};
use crate::text::{prepare_sentence, word_texts};
use std::collections::BTreeMap;

/// Key of the untransliterated analyses
pub const DEFAULT_SCHEME: &str = "default";

/// Scheme name -> one candidate list per word
pub type SentenceAnalyses = BTreeMap<String, Vec<Vec<Analysis>>>;

impl Glosser {
    /// Analyze a sentence and return the candidates under every scheme
    pub fn render_sentence(&self, language: &str, sentence: &str) -> Result<SentenceAnalyses> {
        let entry = self.entry(language)?;
        let (_, analyses) = self.analyze_sentence(entry, sentence)?;

        let mut result = SentenceAnalyses::new();
        for scheme in entry.translit.schemes() {
            if scheme == DEFAULT_SCHEME {
                continue;
            }
            let converted = analyses
                .iter()
                .map(|candidates| {
                    candidates
                        .iter()
                        .map(|a| transliterate_analysis(entry, scheme, a))
                        .collect()
                })
                .collect();
            result.insert(scheme.to_string(), converted);
        }
        result.insert(DEFAULT_SCHEME.to_string(), analyses);
        Ok(result)
    }

    /// Render the `analysis` template for a sentence
    pub fn render_sentence_html(&self, language: &str, sentence: &str) -> Result<String> {
        let entry = self.entry(language)?;
        let (words, analyses) = self.analyze_sentence(entry, sentence)?;

        let view = SentenceView {
            language: entry.code.clone(),
            language_name: entry.name.clone(),
            words: words
                .iter()
                .zip(&analyses)
                .map(|(word, candidates)| WordView::new(word, candidates))
                .collect(),
        };
        self.templates.render(ANALYSIS_TEMPLATE, &view)
    }

    fn analyze_sentence(
        &self,
        entry: &LanguageEntry,
        sentence: &str,
    ) -> Result<(Vec<String>, Vec<Vec<Analysis>>)> {
        validate_input(sentence)?;
        let tokens = prepare_sentence(sentence, self.config.layout.max_input_chars);
        let words = word_texts(&tokens);
        let analyses = entry.analyze(&words)?;
        log::info!(
            "Analyzed sentence in {}: {} words, {} with analyses",
            entry.code,
            words.len(),
            analyses.iter().filter(|a| !a.is_empty()).count()
        );
        Ok((words, analyses))
    }
}

fn transliterate_analysis(entry: &LanguageEntry, scheme: &str, analysis: &Analysis) -> Analysis {
    Analysis {
        wordform: entry.translit.apply(scheme, &analysis.wordform),
        lemma: entry.translit.apply(scheme, &analysis.lemma),
        glossed_wordform: entry.translit.apply(scheme, &analysis.glossed_wordform),
        ..analysis.clone()
    }
}
