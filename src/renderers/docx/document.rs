//! In-memory `.docx` document
//!
//! Blocks are collected while segments are processed and serialized in one
//! go by `save`. Saving to a path that another request is writing at the same
//! time is last-writer-wins; nothing here locks the output location.

use super::parts::{self, CONTENT_TYPES_PATH, CORE_PATH, DOCUMENT_PATH, DOCUMENT_RELS_PATH, RELS_PATH, STYLES_PATH};
use super::xml::document_xml;
use super::{DocumentSink, ParagraphStyle, TextRun};
use crate::config::DocumentSettings;
use crate::errors::StorageError;
use crate::renderers::table_layout::RenderedTable;
use chrono::Utc;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A top-level body element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph {
        style: ParagraphStyle,
        runs: Vec<TextRun>,
    },
    Table(RenderedTable),
}

#[derive(Debug, Clone, Default)]
pub struct DocxDocument {
    settings: DocumentSettings,
    blocks: Vec<Block>,
}

impl DocxDocument {
    pub fn new(settings: &DocumentSettings) -> Self {
        Self {
            settings: settings.clone(),
            blocks: Vec::new(),
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn table_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Table(_)))
            .count()
    }

    /// The complete package as `(part name, bytes)` pairs
    pub fn package_parts(&self) -> Result<Vec<(&'static str, Vec<u8>)>, StorageError> {
        Ok(vec![
            (CONTENT_TYPES_PATH, parts::CONTENT_TYPES.as_bytes().to_vec()),
            (RELS_PATH, parts::RELS.as_bytes().to_vec()),
            (DOCUMENT_PATH, document_xml(&self.blocks)?),
            (DOCUMENT_RELS_PATH, parts::DOCUMENT_RELS.as_bytes().to_vec()),
            (STYLES_PATH, parts::styles(&self.settings).into_bytes()),
            (CORE_PATH, parts::core_properties(Utc::now()).into_bytes()),
        ])
    }
}

impl DocumentSink for DocxDocument {
    fn add_paragraph(&mut self, style: ParagraphStyle, runs: Vec<TextRun>) {
        self.blocks.push(Block::Paragraph { style, runs });
    }

    fn add_table(&mut self, table: &RenderedTable) {
        self.blocks.push(Block::Table(table.clone()));
    }

    fn save(&self, path: &Path) -> Result<(), StorageError> {
        // Serialize first so a failure leaves any previous file untouched.
        let package = self.package_parts()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| StorageError::io(parent, err))?;
        }
        let file = File::create(path).map_err(|err| StorageError::io(path, err))?;
        let mut writer = ZipWriter::new(BufWriter::new(file));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, bytes) in &package {
            writer
                .start_file(*name, options)
                .map_err(StorageError::serialization)?;
            writer
                .write_all(bytes)
                .map_err(|err| StorageError::io(path, err))?;
        }

        let mut inner = writer.finish().map_err(StorageError::serialization)?;
        inner.flush().map_err(|err| StorageError::io(path, err))?;

        log::info!(
            "Saved document with {} blocks ({} tables) to {}",
            self.blocks.len(),
            self.table_count(),
            path.display()
        );
        Ok(())
    }
}
