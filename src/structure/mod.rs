//! Document structure
//!
//! Splits a submitted paper into blank lines, paragraphs, headers and
//! numbered examples. Stateless: every call works on the text it is given.
//!
//! ## Modules
//!
//! - `segmenter`: line classification and example/translation pairing
//! - `numbering`: display numbers for example ids

pub mod segmenter;
pub mod numbering;

// Re-exports for convenience
pub use segmenter::{Segmenter, parse_example_line, ExampleLine};
pub use numbering::ExampleNumbering;
