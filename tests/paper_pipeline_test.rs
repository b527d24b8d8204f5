use interlinear_glosser::{
    Analysis, GlossError, Glosser, GlosserConfig, LanguageRegistry, LexiconAnalyzer,
    MorphAnalyzer, StorageError,
};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

const PAPER: &str = "Additive particles\n\
The particle no follows its host.\n\
(x) Mon no kylį.\n\
'I heard, too.'\n\
\n\
(x7)\tMon kylį.\t'I heard.'\n\
Table 1 shows the forms.";

fn beserman_lexicon() -> LexiconAnalyzer {
    LexiconAnalyzer::new()
        .with("mon", Analysis::new("mon", "mon", "I"))
        .with("no", Analysis::new("no", "no", "ADD"))
        .with(
            "kylį",
            Analysis::new("kylį", "kyl-į", "STEM-PST").with_translation("hear"),
        )
}

fn glosser(output: &Path) -> Glosser {
    let mut config = GlosserConfig::default_config().unwrap();
    config.output_path = output.to_path_buf();
    let registry = LanguageRegistry::from_config(&config, |code| {
        (code == "beserman").then(|| Arc::new(beserman_lexicon()) as Arc<dyn MorphAnalyzer>)
    })
    .unwrap();
    Glosser::new(Arc::new(registry), config)
}

fn document_xml(path: &Path) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

#[test]
fn test_paper_writes_document_and_html() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out").join("paper.docx");
    let result = glosser(&output).render_paper("beserman", PAPER).unwrap();

    assert!(result.is_complete());
    assert_eq!(result.document.as_ref().unwrap(), &output);
    assert!(result.html.contains("Mon=no"));
    assert!(result.html.contains("(7)"));

    let xml = document_xml(&output);
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let tables = doc
        .descendants()
        .filter(|n| n.tag_name().name() == "tbl")
        .count();
    assert_eq!(tables, 2);

    let texts: Vec<&str> = doc
        .descendants()
        .filter(|n| n.tag_name().name() == "t")
        .filter_map(|n| n.text())
        .collect();
    assert!(texts.contains(&"Mon=no"));
    assert!(texts.contains(&"(1)"));
    assert!(texts.contains(&"(7)"));
    assert!(texts.contains(&"‘I heard.’"));
    // abbreviations are lowercased and set in small caps
    assert!(texts.contains(&"pst"));
    assert!(doc.descendants().any(|n| n.tag_name().name() == "smallCaps"));
    assert!(doc.descendants().any(|n| n.tag_name().name() == "gridSpan"));
}

#[test]
fn test_html_survives_failed_document_write() {
    let blocker = tempfile::NamedTempFile::new().unwrap();
    let output = blocker.path().join("paper.docx");
    let result = glosser(&output).render_paper("beserman", PAPER).unwrap();

    assert!(!result.html.is_empty());
    assert!(result.html.contains("Mon=no"));
    assert!(matches!(result.document, Err(StorageError::Io { .. })));
}

#[test]
fn test_unknown_language_and_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("paper.docx");
    let glosser = glosser(&output);

    assert!(matches!(
        glosser.render_paper("klingon", PAPER),
        Err(GlossError::Configuration(_))
    ));
    assert!(matches!(
        glosser.render_paper("beserman", "  \n "),
        Err(GlossError::Validation(_))
    ));
    assert!(!output.exists());
}

#[test]
fn test_malformed_numbering_stays_prose() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("paper.docx");
    let result = glosser(&output)
        .render_paper("beserman", "(1a) Mon kylį.")
        .unwrap();

    assert!(result.html.contains("paper-paragraph"));
    assert!(!result.html.contains("class=\"example\""));
    assert!(!document_xml(&output).contains("<w:tbl>"));
}

#[test]
fn test_markup_never_reaches_html() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("paper.docx");
    let result = glosser(&output)
        .render_paper("beserman", "Intro <script>alert(1)</script>.\n(x) <b>Mon</b> kylį.")
        .unwrap();

    assert!(!result.html.contains("<script"));
    assert!(!result.html.contains("<b>"));
}

#[test]
fn test_rendering_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let glosser = glosser(&dir.path().join("paper.docx"));
    let first = glosser.render_paper("beserman", PAPER).unwrap();
    let second = glosser.render_paper("beserman", PAPER).unwrap();
    assert_eq!(first.html, second.html);
}
