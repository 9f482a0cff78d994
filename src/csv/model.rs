//! CSV data model types
//!
//! A `Table` is an ordered list of rows; row 0 is the header.

use serde::Serialize;

/// A single row of trimmed cells
pub type Row = Vec<String>;

/// Parsed CSV grid
///
/// Rows are kept exactly as the tokenizer produced them, so rows may be
/// ragged. Nothing downstream assumes a rectangular grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Create a table from already tokenized rows
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// All rows, header included
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consume the table, returning its rows
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Header row (row 0), if the table has any rows
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Data rows (everything after the header)
    pub fn body(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row length
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Get cell value, or empty string if out of bounds
    pub fn get(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Position of a cell in the grid
///
/// Row 0 is the header row; body rows follow in table order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_rows(vec![
            vec!["Name".into(), "Score".into()],
            vec!["A".into(), "1".into(), "extra".into()],
            vec!["B".into()],
        ])
    }

    #[test]
    fn test_header_and_body() {
        let table = sample();
        assert_eq!(table.header().unwrap()[0], "Name");
        assert_eq!(table.body().len(), 2);
    }

    #[test]
    fn test_empty_table_has_no_body() {
        let table = Table::default();
        assert!(table.header().is_none());
        assert!(table.body().is_empty());
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let table = sample();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.get(2, 1), "");
        assert_eq!(table.get(1, 2), "extra");
    }
}
