//! Renderers for the glossing pipeline
//!
//! Layout is computed once as plain data (inline runs, `RenderedTable`) and
//! then handed to two independent outputs: the HTML preview and the
//! word-processing document.

pub mod inline;
pub mod table_layout;
pub mod html;
pub mod templates;
pub mod docx;

// Re-export commonly used types
pub use inline::{split_embedded, split_gloss, gloss_width, GlossRun, InlineRun};
pub use table_layout::{gloss_runs, layout_table, CellContent, RenderedTable, TableCell};
pub use html::{BlockView, ExampleView, PaperView, SentenceView, WordView};
pub use templates::{TemplateStore, ANALYSIS_TEMPLATE, PAPER_TEMPLATE};
pub use docx::{DocumentSink, DocxDocument, ParagraphStyle, TextRun};
