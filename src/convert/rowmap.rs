//! Bounded copying of source table rows into a fixed template grid.
//!
//! The milestone field renders as an HTML table whose row count varies per
//! record; the destination grid was sized once by the template designer.
//! Mapping never resizes the grid: rows that do not fit are dropped.

use super::writer::SlideWriter;
use crate::common::report::Signal;
use crate::html::{HtmlElement, Tag};
use crate::slide::{Table, TableCell};

/// Source columns that survive the copy, in destination order. Source
/// columns 1 and 3 are visual separators in the rendered field.
const SOURCE_COLUMNS: [usize; 3] = [0, 2, 4];

impl SlideWriter {
    /// Copy source data rows into the grid.
    ///
    /// Row 0 of `rows` is the source header and is always skipped. The
    /// destination row index equals the source row index — the grid's own
    /// row 0 stays the template header. Rows past the grid capacity are
    /// dropped and reported once as an [`Signal::Overflow`]; a source with
    /// no data rows leaves the grid untouched and reports
    /// [`Signal::EmptySource`].
    pub fn map_table_rows(&mut self, rows: &[&HtmlElement], grid: &mut Table) {
        if rows.len() <= 1 {
            self.record(Signal::EmptySource);
            return;
        }

        let last_row = grid.row_count().saturating_sub(1);
        let mut dropped = 0usize;

        for (index, row) in rows.iter().enumerate().skip(1) {
            if index > last_row {
                dropped += 1;
                continue;
            }
            let cells: Vec<&HtmlElement> = row.child_elements().collect();
            for (destination, source) in SOURCE_COLUMNS.iter().enumerate() {
                let Some(value) = cells.get(*source) else {
                    continue;
                };
                if let Some(cell) = grid.cell_mut(index, destination) {
                    overwrite_cell_text(cell, &value.text());
                }
            }
        }

        if dropped > 0 {
            self.record(Signal::Overflow { dropped });
        }
    }
}

/// Overwrite the cell's single pre-formatted run in place.
fn overwrite_cell_text(cell: &mut TableCell, text: &str) {
    let Some(paragraph) = cell.body_mut().first_paragraph_mut() else {
        return;
    };
    paragraph.retain_first_run();
    if let Some(run) = paragraph.first_run_mut() {
        run.set_text(text);
    }
}

/// Collect the `tr` rows of the first table found under `root`, whether
/// they sit directly under the table or inside `thead`/`tbody`.
pub fn collect_rows(root: &HtmlElement) -> Vec<&HtmlElement> {
    let table = if root.tag() == Tag::Table {
        Some(root)
    } else {
        root.find_first(Tag::Table)
    };
    let Some(table) = table else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    for child in table.child_elements() {
        match child.tag() {
            Tag::Tr => rows.push(child),
            Tag::TBody | Tag::THead => {
                rows.extend(child.child_elements().filter(|element| element.tag() == Tag::Tr));
            },
            _ => {},
        }
    }
    rows
}
