//! HTML preview rendering
//!
//! Builds the view model the `paper` and `analysis` templates consume. The
//! markup produced here is limited to `<i>`, `<br>` and the small-caps span;
//! user text reaching it has already lost its `<`, `>` and `&`.

use super::inline::{GlossRun, InlineRun};
use crate::models::{Analysis, DisplayUnit};
use serde::Serialize;

/// CSS class used for gloss abbreviations
pub const SMALL_CAPS_CLASS: &str = "sc";

/// Paragraph runs as HTML, embedded words in italics and newlines as `<br>`
pub fn paragraph_html(runs: &[InlineRun]) -> String {
    let mut html = String::new();
    for run in runs {
        let text = run.text.replace('\n', "<br>");
        if run.italic {
            html.push_str("<i>");
            html.push_str(&text);
            html.push_str("</i>");
        } else {
            html.push_str(&text);
        }
    }
    html
}

/// Gloss runs as HTML, abbreviations wrapped in a small-caps span
pub fn gloss_html(runs: &[GlossRun]) -> String {
    runs.iter()
        .map(|run| {
            if run.small_caps {
                format!(
                    "<span class=\"{}\">{}</span>",
                    SMALL_CAPS_CLASS,
                    run.typeset_text()
                )
            } else {
                run.text.clone()
            }
        })
        .collect()
}

/// One aligned word/gloss column of an example
#[derive(Debug, Clone, Serialize)]
pub struct UnitView {
    pub wordform: String,
    pub gloss_html: String,
}

/// Interlinear example as shown in the preview
#[derive(Debug, Clone, Serialize)]
pub struct ExampleView {
    pub number: u32,
    /// `(3)`
    pub label: String,
    pub units: Vec<UnitView>,
    /// Columns covered by the translation row
    pub span: usize,
    pub translation: String,
    pub has_translation: bool,
}

impl ExampleView {
    pub fn new(number: u32, label: &str, units: Vec<UnitView>, translation: Option<&str>) -> Self {
        let translation = translation.unwrap_or_default().to_string();
        Self {
            number,
            label: label.to_string(),
            span: units.len().max(1),
            has_translation: !translation.is_empty(),
            units,
            translation,
        }
    }
}

/// One block of the paper preview; exactly one flag is set
#[derive(Debug, Clone, Default, Serialize)]
pub struct BlockView {
    pub is_blank: bool,
    pub is_header: bool,
    pub is_paragraph: bool,
    pub is_example: bool,
    /// Prepared markup for headers and paragraphs
    pub html: String,
    pub example: Vec<ExampleView>,
}

impl BlockView {
    pub fn blank() -> Self {
        Self {
            is_blank: true,
            ..Default::default()
        }
    }

    pub fn header(runs: &[InlineRun]) -> Self {
        Self {
            is_header: true,
            html: paragraph_html(runs),
            ..Default::default()
        }
    }

    pub fn paragraph(runs: &[InlineRun]) -> Self {
        Self {
            is_paragraph: true,
            html: paragraph_html(runs),
            ..Default::default()
        }
    }

    pub fn example(view: ExampleView) -> Self {
        Self {
            is_example: true,
            example: vec![view],
            ..Default::default()
        }
    }
}

/// Data of the `paper` template
#[derive(Debug, Clone, Serialize)]
pub struct PaperView {
    pub language: String,
    pub language_name: String,
    pub blocks: Vec<BlockView>,
}

/// One candidate analysis in the word-level view
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisView {
    pub lemma: String,
    pub gramm: String,
    pub glossed_wordform: String,
    pub gloss: String,
    pub translation: String,
    pub has_translation: bool,
}

impl From<&Analysis> for AnalysisView {
    fn from(analysis: &Analysis) -> Self {
        Self {
            lemma: analysis.lemma.clone(),
            gramm: analysis.gramm.clone(),
            glossed_wordform: analysis.glossed_wordform.clone(),
            gloss: analysis.gloss.clone(),
            translation: analysis.translation.clone().unwrap_or_default(),
            has_translation: analysis.translation.is_some(),
        }
    }
}

/// One token of the word-level view with all of its candidates
#[derive(Debug, Clone, Serialize)]
pub struct WordView {
    pub wordform: String,
    pub analyses: Vec<AnalysisView>,
    pub has_analyses: bool,
}

impl WordView {
    pub fn new(wordform: &str, analyses: &[Analysis]) -> Self {
        Self {
            wordform: wordform.to_string(),
            analyses: analyses.iter().map(AnalysisView::from).collect(),
            has_analyses: !analyses.is_empty(),
        }
    }
}

/// Data of the `analysis` template
#[derive(Debug, Clone, Serialize)]
pub struct SentenceView {
    pub language: String,
    pub language_name: String,
    pub words: Vec<WordView>,
}

/// Convenience for building the unit columns of an example
pub fn unit_views<F>(units: &[DisplayUnit], runs_for: F) -> Vec<UnitView>
where
    F: Fn(&DisplayUnit) -> Vec<GlossRun>,
{
    units
        .iter()
        .map(|unit| UnitView {
            wordform: unit.wordform.clone(),
            gloss_html: gloss_html(&runs_for(unit)),
        })
        .collect()
}
