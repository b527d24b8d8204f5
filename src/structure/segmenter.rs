//! Document segmenter
//!
//! Scans the text line by line. A line opening with `(x)` or `(xN)` followed
//! by text is an example; its translation is either the text after a tab on
//! the same line or the next line, when that line is non-blank, is not an
//! example itself and has the same indentation. Everything else is a blank
//! line, a paragraph, or a paragraph promoted to a header.
//!
//! Malformed numbering never raises: the line is kept as a paragraph.
//!
//! # Examples
//! - "(x1)\tkarta\ttranslation" -> Example { id: "x1", source: "karta", translation: "translation" }
//! - "(x) Mon tone.\n'I ... you.'" -> Example with the second line as translation
//! - "(1a) text" -> Paragraph

use crate::config::LayoutSettings;
use crate::models::Segment;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EXAMPLE_HEAD: Regex =
        Regex::new(r"^([ \t]*)\((x\d*)\)[ \t]+(.*)$").expect("example pattern compiles");
}

/// Characters that end a sentence; a line ending in one is never a header
const SENTENCE_FINAL: &[char] = &['.', '!', '?', ':', ';', ',', '…'];

/// A parsed example line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleLine<'a> {
    pub indent: &'a str,
    pub id: &'a str,
    pub source: &'a str,
    /// Tab-separated translation on the same line
    pub translation: Option<&'a str>,
}

/// Parse `(id) source[\ttranslation]`; `None` when the line is not an example
pub fn parse_example_line(line: &str) -> Option<ExampleLine<'_>> {
    let caps = EXAMPLE_HEAD.captures(line)?;
    let indent = caps.get(1).map_or("", |m| m.as_str());
    let id = caps.get(2)?.as_str();
    let rest = caps.get(3)?.as_str();

    let (source, translation) = match rest.split_once('\t') {
        Some((source, translation)) if !translation.trim().is_empty() => {
            (source.trim(), Some(translation.trim()))
        }
        _ => (rest.trim(), None),
    };

    if source.is_empty() {
        return None;
    }

    Some(ExampleLine {
        indent,
        id,
        source,
        translation,
    })
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// Line classifier for paper-mode input
pub struct Segmenter<'a> {
    header_max_chars: usize,
    caption_keywords: &'a [String],
    /// Embedded-word pattern; more than one match keeps a line from being a header
    embedded_word: Option<&'a Regex>,
}

impl<'a> Segmenter<'a> {
    pub fn new(layout: &'a LayoutSettings) -> Self {
        Self {
            header_max_chars: layout.header_max_chars,
            caption_keywords: &layout.caption_keywords,
            embedded_word: None,
        }
    }

    pub fn with_embedded_pattern(mut self, pattern: Option<&'a Regex>) -> Self {
        self.embedded_word = pattern;
        self
    }

    /// Split normalized text into segments in document order
    pub fn segment(&self, text: &str) -> Vec<Segment> {
        let lines: Vec<&str> = text.lines().collect();
        let mut segments = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];
            i += 1;

            if line.trim().is_empty() {
                segments.push(Segment::Blank);
                continue;
            }

            if let Some(example) = parse_example_line(line) {
                let mut translation = example.translation.map(str::to_string);
                if translation.is_none() {
                    if let Some(next) = lines.get(i) {
                        if is_translation_line(next, example.indent) {
                            translation = Some(next.trim().to_string());
                            i += 1;
                        }
                    }
                }
                segments.push(Segment::Example {
                    id: example.id.to_string(),
                    source: example.source.to_string(),
                    translation,
                });
                continue;
            }

            let trimmed = line.trim();
            if self.is_header(trimmed) {
                segments.push(Segment::Header(trimmed.to_string()));
            } else {
                segments.push(Segment::Paragraph(trimmed.to_string()));
            }
        }

        let example_count = segments.iter().filter(|s| s.is_example()).count();
        log::debug!(
            "Segmented {} lines into {} segments ({} examples)",
            lines.len(),
            segments.len(),
            example_count
        );

        space_example_runs(segments)
    }

    /// Short, unpunctuated, not a caption, at most one embedded span
    pub fn is_header(&self, line: &str) -> bool {
        let line = line.trim();
        let len = line.chars().count();
        if len == 0 || len > self.header_max_chars {
            return false;
        }
        if line.ends_with(SENTENCE_FINAL) {
            return false;
        }
        if self
            .caption_keywords
            .iter()
            .any(|keyword| line.starts_with(keyword.as_str()))
        {
            return false;
        }
        match self.embedded_word {
            Some(re) => re.find_iter(line).count() <= 1,
            None => true,
        }
    }
}

fn is_translation_line(line: &str, example_indent: &str) -> bool {
    !line.trim().is_empty()
        && parse_example_line(line).is_none()
        && leading_whitespace(line) == example_indent
}

/// Insert a blank spacer before and after every run of examples that touches
/// a non-blank segment
fn space_example_runs(segments: Vec<Segment>) -> Vec<Segment> {
    let mut spaced: Vec<Segment> = Vec::with_capacity(segments.len());
    let count = segments.len();

    for (i, segment) in segments.iter().enumerate() {
        let starts_run = segment.is_example() && i > 0 && !segments[i - 1].is_example();
        if starts_run && !segments[i - 1].is_blank() {
            spaced.push(Segment::Blank);
        }

        spaced.push(segment.clone());

        let ends_run = segment.is_example() && i + 1 < count && !segments[i + 1].is_example();
        if ends_run && !segments[i + 1].is_blank() {
            spaced.push(Segment::Blank);
        }
    }

    spaced
}
