//! Interlinear table layout
//!
//! Pure layout stage: turns the display units of one example into a grid of
//! cells. The document sink only copies the grid out, it never decides where
//! anything goes.
//!
//! Grid shape for `n` units:
//! - logical rows: `max(word_chars / 56, gloss_chars / 76) + 1`
//! - columns: `1 + ceil(n / rows)`, column 0 holding the example number
//! - physical rows: a word row and a gloss row per logical row, then one
//!   translation row merged from column 1 to the last used column

use super::inline::{gloss_width, split_gloss, GlossRun};
use crate::config::LayoutSettings;
use crate::models::DisplayUnit;
use crate::registry::LanguageRules;
use serde::Serialize;
use std::collections::BTreeMap;

/// Content of one table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CellContent {
    /// Example number label, `(1)`
    Number(String),
    Word(String),
    Gloss(Vec<GlossRun>),
    Translation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCell {
    pub content: CellContent,
    /// Number of grid columns the cell covers
    pub span: usize,
}

/// Cell grid of one example keyed by `(row, column)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTable {
    /// Physical rows, translation row included
    pub rows: usize,
    pub cols: usize,
    pub cells: BTreeMap<(usize, usize), TableCell>,
}

impl RenderedTable {
    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.cells.get(&(row, col))
    }

    /// Number of word/gloss row pairs
    pub fn logical_rows(&self) -> usize {
        (self.rows - 1) / 2
    }

    pub fn translation_row(&self) -> usize {
        self.rows - 1
    }

    /// Display units per logical row
    pub fn unit_columns(&self) -> usize {
        self.cols - 1
    }
}

/// Printed width estimate of a unit sequence: `(word chars, gloss chars)`
pub fn estimate_width(
    units: &[DisplayUnit],
    layout: &LayoutSettings,
    rules: &LanguageRules,
) -> (usize, usize) {
    let words = units.iter().map(|u| u.wordform.trim().chars().count()).sum();
    let glosses = units
        .iter()
        .map(|u| {
            gloss_width(
                &u.gloss,
                rules.gloss_abbreviation.as_ref(),
                layout.abbreviation_width,
            )
        })
        .sum();
    (words, glosses)
}

/// Lay out one example as an interlinear table
pub fn layout_table(
    units: &[DisplayUnit],
    translation: Option<&str>,
    number_label: &str,
    layout: &LayoutSettings,
    rules: &LanguageRules,
) -> RenderedTable {
    let (word_chars, gloss_chars) = estimate_width(units, layout, rules);
    let budget_rows = (word_chars / layout.word_chars_per_row.max(1))
        .max(gloss_chars / layout.gloss_chars_per_row.max(1))
        + 1;

    let unit_count = units.len().max(1);
    let unit_cols = (unit_count + budget_rows - 1) / budget_rows;
    let cols = unit_cols + 1;
    // Trailing logical rows may stay empty when the budget overshoots.
    let rows = 2 * budget_rows + 1;

    log::debug!(
        "Example {}: {} units, {}/{} chars -> {} rows x {} columns",
        number_label,
        units.len(),
        word_chars,
        gloss_chars,
        budget_rows,
        cols
    );

    let mut cells = BTreeMap::new();
    cells.insert(
        (0, 0),
        TableCell {
            content: CellContent::Number(number_label.to_string()),
            span: 1,
        },
    );

    for (i, unit) in units.iter().enumerate() {
        let row = 2 * (i / unit_cols);
        let col = 1 + i % unit_cols;
        let gloss = gloss_runs(unit, rules);
        cells.insert(
            (row, col),
            TableCell {
                content: CellContent::Word(unit.wordform.clone()),
                span: 1,
            },
        );
        cells.insert(
            (row + 1, col),
            TableCell {
                content: CellContent::Gloss(gloss),
                span: 1,
            },
        );
    }

    let last_used = units.len().clamp(1, unit_cols);
    cells.insert(
        (rows - 1, 1),
        TableCell {
            content: CellContent::Translation(translation.unwrap_or_default().to_string()),
            span: last_used,
        },
    );

    RenderedTable { rows, cols, cells }
}

/// Gloss runs of one unit; bare punctuation gets no small caps
pub fn gloss_runs(unit: &DisplayUnit, rules: &LanguageRules) -> Vec<GlossRun> {
    if unit.is_bare_punctuation() {
        plain_gloss(&unit.gloss)
    } else {
        split_gloss(&unit.gloss, rules.gloss_abbreviation.as_ref())
    }
}

fn plain_gloss(gloss: &str) -> Vec<GlossRun> {
    if gloss.is_empty() {
        Vec::new()
    } else {
        vec![GlossRun {
            text: gloss.to_string(),
            small_caps: false,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleSet;

    fn leipzig_rules() -> LanguageRules {
        LanguageRules::compile(&RuleSet {
            gloss_abbreviation: Some(r"\b[A-Z0-9]+(?:\.[A-Z0-9]+)*\b".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    fn short_units(n: usize) -> Vec<DisplayUnit> {
        (0..n).map(|i| DisplayUnit::new(&format!("w{}", i), "NOM")).collect()
    }

    #[test]
    fn test_ten_short_units_fit_one_row() {
        let table = layout_table(
            &short_units(10),
            Some("translation"),
            "(1)",
            &LayoutSettings::default(),
            &leipzig_rules(),
        );
        assert_eq!(table.logical_rows(), 1);
        assert_eq!(table.cols, 11);
        assert_eq!(table.rows, 3);
        assert_eq!(
            table.cell(0, 0).unwrap().content,
            CellContent::Number("(1)".to_string())
        );
        assert_eq!(
            table.cell(0, 10).unwrap().content,
            CellContent::Word("w9".to_string())
        );
    }

    #[test]
    fn test_translation_spans_used_columns() {
        let table = layout_table(
            &short_units(3),
            Some("‘I hear.’"),
            "(2)",
            &LayoutSettings::default(),
            &LanguageRules::default(),
        );
        let cell = table.cell(table.translation_row(), 1).unwrap();
        assert_eq!(cell.span, 3);
        assert_eq!(cell.content, CellContent::Translation("‘I hear.’".to_string()));
    }

    #[test]
    fn test_long_example_wraps() {
        let units: Vec<DisplayUnit> = (0..12)
            .map(|_| DisplayUnit::new("tolonyaskem", "yesterday"))
            .collect();
        let table = layout_table(&units, None, "(3)", &LayoutSettings::default(), &LanguageRules::default());
        // 132 word chars and 108 gloss chars -> 3 logical rows of 4 units
        assert_eq!(table.logical_rows(), 3);
        assert_eq!(table.cols, 5);
        assert_eq!(
            table.cell(4, 4).unwrap().content,
            CellContent::Word("tolonyaskem".to_string())
        );
        assert_eq!(table.cell(table.translation_row(), 1).unwrap().span, 4);
    }

    #[test]
    fn test_budget_rows_kept_when_units_run_out() {
        let units: Vec<DisplayUnit> = (0..4)
            .map(|_| DisplayUnit::new("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "x"))
            .collect();
        // 120 word chars -> 3 budget rows of 2 units; the third row stays empty
        let table = layout_table(&units, None, "(4)", &LayoutSettings::default(), &LanguageRules::default());
        assert_eq!(table.unit_columns(), 2);
        assert_eq!(table.logical_rows(), 3);
        assert_eq!(table.rows, 7);
        assert!(table.cell(2, 2).is_some());
        assert!(table.cell(4, 1).is_none());
        assert!(table.cell(6, 1).is_some());
    }

    #[test]
    fn test_gloss_runs_small_caps_except_bare_punctuation() {
        let units = vec![
            DisplayUnit::new("kylė", "hear-PST"),
            DisplayUnit::new("[…]", "NOM"),
        ];
        let table = layout_table(&units, None, "(5)", &LayoutSettings::default(), &leipzig_rules());
        match &table.cell(1, 1).unwrap().content {
            CellContent::Gloss(runs) => {
                assert_eq!(runs.len(), 2);
                assert!(runs[1].small_caps);
            }
            other => panic!("unexpected cell {:?}", other),
        }
        match &table.cell(1, 2).unwrap().content {
            CellContent::Gloss(runs) => assert!(runs.iter().all(|r| !r.small_caps)),
            other => panic!("unexpected cell {:?}", other),
        }
    }

    #[test]
    fn test_abbreviations_count_as_fixed_width() {
        let units = vec![DisplayUnit::new("a", "1SG.NOM-ACC.PL")];
        let (_, gloss) = estimate_width(&units, &LayoutSettings::default(), &leipzig_rules());
        assert_eq!(gloss, 7);
    }
}
