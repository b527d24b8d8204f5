//! Paper-mode pipeline
//!
//! Markup characters are stripped and punctuation normalized over the whole
//! text, the text is segmented, and every segment is fed to both outputs: the
//! HTML preview blocks and the document sink. The document is saved last; a
//! failed save does not take the HTML down with it.

use super::{validate_input, Glosser};
use crate::errors::{Result, StorageError};
use crate::models::Segment;
use crate::registry::LanguageEntry;
use crate::renderers::html::unit_views;
use crate::renderers::{
    gloss_runs, layout_table, split_embedded, BlockView, DocumentSink, DocxDocument, ExampleView,
    InlineRun, PaperView, ParagraphStyle, TextRun, PAPER_TEMPLATE,
};
use crate::selection::select_units;
use crate::structure::{ExampleNumbering, Segmenter};
use crate::text::{normalize_punctuation, strip_markup_chars};
use std::path::PathBuf;

/// Result of a paper-mode request
///
/// `html` is always present; `document` carries the outcome of the document
/// write so that callers can report it separately.
#[derive(Debug)]
pub struct PaperOutput {
    pub html: String,
    pub document: std::result::Result<PathBuf, StorageError>,
}

impl PaperOutput {
    /// True when the document was written as well
    pub fn is_complete(&self) -> bool {
        self.document.is_ok()
    }
}

impl Glosser {
    /// Render a paper: HTML preview plus a `.docx` written to the configured
    /// output path
    pub fn render_paper(&self, language: &str, text: &str) -> Result<PaperOutput> {
        let mut document = DocxDocument::new(&self.config.document);
        let html = self.compose_paper(language, text, &mut document)?;

        let path = self.config.output_path.clone();
        let document = match document.save(&path) {
            Ok(()) => Ok(path),
            Err(err) => {
                log::error!("Document not written, returning HTML only: {}", err);
                Err(err)
            }
        };
        Ok(PaperOutput { html, document })
    }

    /// Run the pipeline into any document sink and return the HTML preview
    ///
    /// The sink is filled but not saved.
    pub fn compose_paper(
        &self,
        language: &str,
        text: &str,
        sink: &mut dyn DocumentSink,
    ) -> Result<String> {
        let entry = self.entry(language)?;
        validate_input(text)?;
        let cleaned = strip_markup_chars(text);
        validate_input(&cleaned)?;

        let layout = &self.config.layout;
        let normalized = normalize_punctuation(&cleaned);
        let segments = Segmenter::new(layout)
            .with_embedded_pattern(entry.rules.embedded_word.as_ref())
            .segment(&normalized);

        let mut numbering = ExampleNumbering::new();
        let mut blocks = Vec::with_capacity(segments.len());

        for segment in &segments {
            match segment {
                Segment::Blank => {
                    sink.add_paragraph(ParagraphStyle::Normal, Vec::new());
                    blocks.push(BlockView::blank());
                }
                Segment::Header(line) => {
                    let runs = inline_runs(entry, line);
                    sink.add_paragraph(ParagraphStyle::Heading, text_runs(&runs));
                    blocks.push(BlockView::header(&runs));
                }
                Segment::Paragraph(line) => {
                    let runs = inline_runs(entry, line);
                    sink.add_paragraph(ParagraphStyle::Normal, text_runs(&runs));
                    blocks.push(BlockView::paragraph(&runs));
                }
                Segment::Example {
                    id,
                    source,
                    translation,
                } => {
                    let units = select_units(entry, source, layout.max_input_chars)?;
                    let number = numbering.next(id);
                    let label = ExampleNumbering::label(number);

                    let table = layout_table(
                        &units,
                        translation.as_deref(),
                        &label,
                        layout,
                        &entry.rules,
                    );
                    sink.add_table(&table);

                    let views = unit_views(&units, |unit| gloss_runs(unit, &entry.rules));
                    blocks.push(BlockView::example(ExampleView::new(
                        number,
                        &label,
                        views,
                        translation.as_deref(),
                    )));
                }
            }
        }

        log::info!(
            "Rendered paper in {}: {} segments, {} examples",
            entry.code,
            segments.len(),
            segments.iter().filter(|s| s.is_example()).count()
        );

        let view = PaperView {
            language: entry.code.clone(),
            language_name: entry.name.clone(),
            blocks,
        };
        self.templates.render(PAPER_TEMPLATE, &view)
    }
}

fn inline_runs(entry: &LanguageEntry, line: &str) -> Vec<InlineRun> {
    split_embedded(line, entry.rules.embedded_word.as_ref(), |word| {
        entry.embedded_translit(word)
    })
}

fn text_runs(runs: &[InlineRun]) -> Vec<TextRun> {
    runs.iter().map(TextRun::from).collect()
}
