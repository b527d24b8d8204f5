//! WordprocessingML body serialization
//!
//! Writes `word/document.xml` with quick-xml. Text goes through `BytesText`,
//! so it is escaped here and nowhere else.

use super::document::Block;
use super::parts::WORDML_NS;
use super::{ParagraphStyle, TextRun};
use crate::errors::StorageError;
use crate::renderers::table_layout::{CellContent, RenderedTable, TableCell};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

/// A4 with 2 cm margins, in twentieths of a point
const PAGE_WIDTH: &str = "11906";
const PAGE_HEIGHT: &str = "16838";
const PAGE_MARGIN: &str = "1134";

struct BodyWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl BodyWriter {
    fn new() -> Self {
        Self {
            writer: Writer::new(Cursor::new(Vec::new())),
        }
    }

    fn event(&mut self, event: Event<'_>) -> Result<(), StorageError> {
        self.writer
            .write_event(event)
            .map_err(StorageError::serialization)
    }

    fn start(&mut self, tag: &str) -> Result<(), StorageError> {
        self.event(Event::Start(BytesStart::new(tag)))
    }

    fn start_with(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Result<(), StorageError> {
        self.event(Event::Start(
            BytesStart::new(tag).with_attributes(attrs.iter().copied()),
        ))
    }

    fn empty(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Result<(), StorageError> {
        self.event(Event::Empty(
            BytesStart::new(tag).with_attributes(attrs.iter().copied()),
        ))
    }

    fn end(&mut self, tag: &str) -> Result<(), StorageError> {
        self.event(Event::End(BytesEnd::new(tag)))
    }

    fn text(&mut self, text: &str) -> Result<(), StorageError> {
        self.event(Event::Text(BytesText::new(text)))
    }

    fn finish(self) -> Vec<u8> {
        self.writer.into_inner().into_inner()
    }

    fn run(&mut self, run: &TextRun) -> Result<(), StorageError> {
        if run.text.is_empty() {
            return Ok(());
        }
        self.start("w:r")?;
        if run.italic || run.small_caps {
            self.start("w:rPr")?;
            if run.italic {
                self.empty("w:i", &[])?;
            }
            if run.small_caps {
                self.empty("w:smallCaps", &[])?;
            }
            self.end("w:rPr")?;
        }
        self.start_with("w:t", &[("xml:space", "preserve")])?;
        self.text(&run.text)?;
        self.end("w:t")?;
        self.end("w:r")
    }

    fn paragraph(&mut self, style: ParagraphStyle, runs: &[TextRun]) -> Result<(), StorageError> {
        self.start("w:p")?;
        if style != ParagraphStyle::Normal {
            self.start("w:pPr")?;
            self.empty("w:pStyle", &[("w:val", style.style_id())])?;
            self.end("w:pPr")?;
        }
        for run in runs {
            self.run(run)?;
        }
        self.end("w:p")
    }

    fn cell(&mut self, cell: Option<&TableCell>) -> Result<(), StorageError> {
        self.start("w:tc")?;
        self.start("w:tcPr")?;
        self.empty("w:tcW", &[("w:w", "0"), ("w:type", "auto")])?;
        if let Some(cell) = cell.filter(|c| c.span > 1) {
            let span = cell.span.to_string();
            self.empty("w:gridSpan", &[("w:val", span.as_str())])?;
        }
        self.end("w:tcPr")?;
        let runs = cell.map(|c| cell_runs(&c.content)).unwrap_or_default();
        self.paragraph(ParagraphStyle::Normal, &runs)?;
        self.end("w:tc")
    }

    fn table(&mut self, table: &RenderedTable) -> Result<(), StorageError> {
        self.start("w:tbl")?;
        self.start("w:tblPr")?;
        self.empty("w:tblW", &[("w:w", "0"), ("w:type", "auto")])?;
        self.empty("w:tblLayout", &[("w:type", "autofit")])?;
        self.end("w:tblPr")?;

        self.start("w:tblGrid")?;
        for _ in 0..table.cols {
            self.empty("w:gridCol", &[])?;
        }
        self.end("w:tblGrid")?;

        for row in 0..table.rows {
            self.start("w:tr")?;
            let mut col = 0;
            while col < table.cols {
                let cell = table.cell(row, col);
                self.cell(cell)?;
                col += cell.map_or(1, |c| c.span.max(1));
            }
            self.end("w:tr")?;
        }
        self.end("w:tbl")
    }

    fn section(&mut self) -> Result<(), StorageError> {
        self.start("w:sectPr")?;
        self.empty("w:pgSz", &[("w:w", PAGE_WIDTH), ("w:h", PAGE_HEIGHT)])?;
        self.empty(
            "w:pgMar",
            &[
                ("w:top", PAGE_MARGIN),
                ("w:right", PAGE_MARGIN),
                ("w:bottom", PAGE_MARGIN),
                ("w:left", PAGE_MARGIN),
                ("w:header", "709"),
                ("w:footer", "709"),
                ("w:gutter", "0"),
            ],
        )?;
        self.end("w:sectPr")
    }
}

fn cell_runs(content: &CellContent) -> Vec<TextRun> {
    match content {
        CellContent::Number(text) | CellContent::Word(text) | CellContent::Translation(text) => {
            vec![TextRun::plain(text)]
        }
        CellContent::Gloss(runs) => runs.iter().map(TextRun::from).collect(),
    }
}

/// Serialize body blocks as `word/document.xml`
///
/// A table directly followed by another table, or closing the body, gets an
/// empty paragraph after it; otherwise Word joins adjacent tables into one.
pub fn document_xml(blocks: &[Block]) -> Result<Vec<u8>, StorageError> {
    let mut w = BodyWriter::new();
    w.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    w.start_with("w:document", &[("xmlns:w", WORDML_NS)])?;
    w.start("w:body")?;

    for (i, block) in blocks.iter().enumerate() {
        match block {
            Block::Paragraph { style, runs } => w.paragraph(*style, runs)?,
            Block::Table(table) => {
                w.table(table)?;
                let next_is_paragraph = matches!(blocks.get(i + 1), Some(Block::Paragraph { .. }));
                if !next_is_paragraph {
                    w.paragraph(ParagraphStyle::Normal, &[])?;
                }
            }
        }
    }

    w.section()?;
    w.end("w:body")?;
    w.end("w:document")?;
    Ok(w.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutSettings;
    use crate::models::DisplayUnit;
    use crate::registry::LanguageRules;
    use crate::renderers::table_layout::layout_table;

    fn parse(bytes: &[u8]) -> String {
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_paragraph_runs_and_escaping() {
        let blocks = vec![Block::Paragraph {
            style: ParagraphStyle::Heading,
            runs: vec![
                TextRun::plain("Tom & Jerry "),
                TextRun {
                    text: "no".to_string(),
                    italic: true,
                    small_caps: false,
                },
            ],
        }];
        let xml = parse(&document_xml(&blocks).unwrap());
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let texts: Vec<&str> = doc
            .descendants()
            .filter(|n| n.tag_name().name() == "t")
            .filter_map(|n| n.text())
            .collect();
        assert_eq!(texts, vec!["Tom & Jerry ", "no"]);
        assert!(doc.descendants().any(|n| n.tag_name().name() == "i"));
        assert!(xml.contains(r#"<w:pStyle w:val="Heading1"/>"#));
    }

    #[test]
    fn test_table_rows_and_merge() {
        let units = vec![DisplayUnit::new("Mon", "I"), DisplayUnit::new("kylį.", "hear-PST")];
        let table = layout_table(
            &units,
            Some("‘I heard.’"),
            "(1)",
            &LayoutSettings::default(),
            &LanguageRules::default(),
        );
        let xml = parse(&document_xml(&[Block::Table(table)]).unwrap());
        let doc = roxmltree::Document::parse(&xml).unwrap();

        let rows: Vec<_> = doc
            .descendants()
            .filter(|n| n.tag_name().name() == "tr")
            .collect();
        assert_eq!(rows.len(), 3);
        let cells_per_row: Vec<usize> = rows
            .iter()
            .map(|r| r.children().filter(|n| n.tag_name().name() == "tc").count())
            .collect();
        // the translation row merges columns 1 and 2
        assert_eq!(cells_per_row, vec![3, 3, 2]);
        assert!(xml.contains(r#"<w:gridSpan w:val="2"/>"#));
        // trailing table is followed by a paragraph before sectPr
        assert!(xml.contains("</w:tbl><w:p></w:p><w:sectPr>"));
    }
}
