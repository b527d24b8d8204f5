use interlinear_glosser::{
    Analysis, GlossError, Glosser, GlosserConfig, LanguageRegistry, MorphAnalyzer,
    DEFAULT_SCHEME,
};
use std::sync::Arc;

/// Analyzer that glosses every token as itself
struct EchoAnalyzer;

impl MorphAnalyzer for EchoAnalyzer {
    fn analyze_words(
        &self,
        tokens: &[String],
        _disambiguate: bool,
    ) -> Result<Vec<Vec<Analysis>>, GlossError> {
        Ok(tokens
            .iter()
            .map(|t| vec![Analysis::new(t, t, "X").with_lemma(&t.to_lowercase())])
            .collect())
    }
}

fn glosser() -> Glosser {
    let config = GlosserConfig::default_config().unwrap();
    let registry = LanguageRegistry::from_config(&config, |code| {
        matches!(code, "udmurt" | "albanian").then(|| Arc::new(EchoAnalyzer) as Arc<dyn MorphAnalyzer>)
    })
    .unwrap();
    Glosser::new(Arc::new(registry), config)
}

#[test]
fn test_render_sentence_is_idempotent() {
    let glosser = glosser();
    let first = glosser.render_sentence("udmurt", "Мон тонэ яратӥсько.").unwrap();
    let second = glosser.render_sentence("udmurt", "Мон тонэ яратӥсько.").unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_schemes_transliterate_wordforms() {
    let result = glosser().render_sentence("udmurt", "Мон тонэ").unwrap();
    assert_eq!(result[DEFAULT_SCHEME][0][0].wordform, "Мон");
    assert_eq!(result["latin"][0][0].wordform, "Mon");
    assert_eq!(result["latin"][1][0].lemma, "tone");
    // glosses are never transliterated
    assert_eq!(result["latin"][0][0].gloss, "X");
}

#[test]
fn test_language_without_schemes_has_default_only() {
    let result = glosser().render_sentence("albanian", "Unë të dua").unwrap();
    assert_eq!(result.keys().collect::<Vec<_>>(), vec![DEFAULT_SCHEME]);
    assert_eq!(result[DEFAULT_SCHEME].len(), 3);
}

#[test]
fn test_angle_brackets_are_stripped() {
    let result = glosser()
        .render_sentence("albanian", "<script>alert</script>")
        .unwrap();
    for candidates in &result[DEFAULT_SCHEME] {
        for analysis in candidates {
            assert!(!analysis.wordform.contains('<'));
            assert!(!analysis.wordform.contains('>'));
        }
    }
    let html = glosser()
        .render_sentence_html("albanian", "<script>alert</script>")
        .unwrap();
    assert!(!html.contains("<script"));
}

#[test]
fn test_long_input_is_truncated() {
    // 4000 characters, 2000 one-letter words; 2048 characters keep 1024 of them
    let sentence = "a ".repeat(2000);
    let result = glosser().render_sentence("albanian", &sentence).unwrap();
    assert_eq!(result[DEFAULT_SCHEME].len(), 1024);
}

#[test]
fn test_errors() {
    let glosser = glosser();
    assert!(matches!(
        glosser.render_sentence("klingon", "a"),
        Err(GlossError::Configuration(_))
    ));
    assert!(matches!(
        glosser.render_sentence("albanian", "   "),
        Err(GlossError::Validation(_))
    ));
    assert!(matches!(
        glosser.render_sentence_html("klingon", "a"),
        Err(GlossError::Configuration(_))
    ));
}
