//! Fixed-size table grid backed by pre-formatted cells.
//!
//! A template table never grows: its row and column counts are decided by
//! the template designer, and rows beyond that capacity do not exist. The
//! observed milestone grid is 18 rows (1 header + 17 data rows) by 3
//! columns.

use super::text::{TextBody, TextRun};

/// One cell of a template table, holding its own pre-formatted body.
#[derive(Debug, Clone, Default)]
pub struct TableCell {
    body: TextBody,
}

impl TableCell {
    /// Create a cell around an existing body.
    pub fn new(body: TextBody) -> Self {
        Self { body }
    }

    /// Create a cell seeded with one paragraph holding `run`.
    pub fn seeded(run: TextRun) -> Self {
        Self {
            body: TextBody::seeded(run),
        }
    }

    /// The cell's text body.
    pub fn body(&self) -> &TextBody {
        &self.body
    }

    /// Mutable access to the cell's text body.
    pub fn body_mut(&mut self) -> &mut TextBody {
        &mut self.body
    }

    /// Concatenated cell text.
    pub fn text(&self) -> String {
        self.body.text()
    }
}

/// A fixed-size grid of pre-formatted cells.
#[derive(Debug, Clone)]
pub struct Table {
    columns: usize,
    rows: Vec<Vec<TableCell>>,
}

impl Table {
    /// Build a `rows` × `columns` grid, every cell seeded with a clone of
    /// `seed` so it satisfies the pre-formatted slot contract.
    pub fn seeded(rows: usize, columns: usize, seed: &TextRun) -> Self {
        let rows = (0..rows)
            .map(|_| (0..columns).map(|_| TableCell::seeded(seed.clone())).collect())
            .collect();
        Self { columns, rows }
    }

    /// Number of rows in the grid.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the grid.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Cell at (`row`, `column`), or `None` past the fixed capacity.
    pub fn cell(&self, row: usize, column: usize) -> Option<&TableCell> {
        self.rows.get(row)?.get(column)
    }

    /// Mutable cell at (`row`, `column`), or `None` past the fixed capacity.
    pub fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut TableCell> {
        self.rows.get_mut(row)?.get_mut(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_has_fixed_capacity() {
        let table = Table::seeded(18, 3, &TextRun::plain(""));
        assert_eq!(table.row_count(), 18);
        assert_eq!(table.column_count(), 3);
        assert!(table.cell(17, 2).is_some());
        assert!(table.cell(18, 0).is_none());
        assert!(table.cell(0, 3).is_none());
    }

    #[test]
    fn test_seeded_cells_satisfy_slot_contract() {
        let table = Table::seeded(2, 2, &TextRun::plain("seed"));
        let cell = table.cell(1, 1).unwrap();
        assert_eq!(cell.body().len(), 1);
        assert_eq!(cell.text(), "seed");
    }
}
