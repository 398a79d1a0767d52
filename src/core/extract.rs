//! Column extraction

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::format::trim_blank;

/// Options for turning one table column into a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableToListOptions {
    /// 0-based column to read. Clamped to the last column that exists.
    /// Default: 0
    pub column_index: usize,

    /// Trim each cell before the empty check and output
    /// Default: true
    pub trim_cells: bool,

    /// Skip cells that are empty (after trimming, when enabled)
    /// Default: true
    pub ignore_empty: bool,
}

impl Default for TableToListOptions {
    fn default() -> Self {
        Self {
            column_index: 0,
            trim_cells: true,
            ignore_empty: true,
        }
    }
}

impl TableToListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep every cell exactly as tokenized: no trimming, no skipping
    pub fn raw() -> Self {
        Self {
            column_index: 0,
            trim_cells: false,
            ignore_empty: false,
        }
    }

    pub fn with_column(mut self, column_index: usize) -> Self {
        self.column_index = column_index;
        self
    }

    pub fn with_trim(mut self, trim_cells: bool) -> Self {
        self.trim_cells = trim_cells;
        self
    }

    pub fn with_ignore_empty(mut self, ignore_empty: bool) -> Self {
        self.ignore_empty = ignore_empty;
        self
    }
}

/// Items pulled out of one column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnExtraction {
    /// Kept values, in row order
    pub items: Vec<String>,
    /// Cells dropped because they were empty
    pub skipped_empty_count: usize,
    /// Column actually read after clamping
    pub column_index: usize,
}

/// `requested` clamped to `[0, max_columns - 1]`
pub fn effective_column(requested: usize, max_columns: usize) -> usize {
    requested.min(max_columns.saturating_sub(1))
}

/// Project one column of `rows` into a list.
///
/// Rows shorter than the column contribute an empty cell. Order is kept;
/// nothing is deduplicated.
pub fn extract_column(
    rows: &[Vec<String>],
    max_columns: usize,
    options: &TableToListOptions,
) -> ColumnExtraction {
    let column_index = effective_column(options.column_index, max_columns);

    let (items, skipped_empty_count) = rows.iter().fold(
        (Vec::with_capacity(rows.len()), 0usize),
        |(mut items, skipped), row| {
            let cell = row.get(column_index).map(String::as_str).unwrap_or("");
            let value = if options.trim_cells { trim_blank(cell) } else { cell };

            if options.ignore_empty && value.is_empty() {
                (items, skipped + 1)
            } else {
                items.push(value.to_string());
                (items, skipped)
            }
        },
    );

    ColumnExtraction {
        items,
        skipped_empty_count,
        column_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&[&str]]) -> Vec<Vec<String>> {
        lines
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_default_options() {
        let opts = TableToListOptions::default();
        assert_eq!(opts.column_index, 0);
        assert!(opts.trim_cells);
        assert!(opts.ignore_empty);
    }

    #[test]
    fn test_raw_preset() {
        let opts = TableToListOptions::raw();
        assert!(!opts.trim_cells);
        assert!(!opts.ignore_empty);
    }

    #[test]
    fn test_effective_column_clamps() {
        assert_eq!(effective_column(0, 0), 0);
        assert_eq!(effective_column(5, 0), 0);
        assert_eq!(effective_column(99, 2), 1);
        assert_eq!(effective_column(1, 3), 1);
    }

    #[test]
    fn test_extract_with_clamp() {
        let table = rows(&[&["a", "b"], &["c", "d"]]);
        let result = extract_column(&table, 2, &TableToListOptions::new().with_column(99));
        assert_eq!(result.items, vec!["b", "d"]);
        assert_eq!(result.column_index, 1);
    }

    #[test]
    fn test_ragged_row_reads_as_empty() {
        let table = rows(&[&["a", "b"], &["c"]]);
        let opts = TableToListOptions::new().with_column(1).with_ignore_empty(false);
        let result = extract_column(&table, 2, &opts);
        assert_eq!(result.items, vec!["b", ""]);
        assert_eq!(result.skipped_empty_count, 0);
    }

    #[test]
    fn test_ignore_empty_counts_skips() {
        let table = rows(&[&["a", "", "c"], &["", "", ""]]);
        let result = extract_column(&table, 3, &TableToListOptions::new().with_column(1));
        assert!(result.items.is_empty());
        assert_eq!(result.skipped_empty_count, 2);
    }

    #[test]
    fn test_whitespace_cell_kept_without_trim() {
        let table = rows(&[&["  "], &[" x "]]);
        let opts = TableToListOptions::new().with_trim(false);
        let result = extract_column(&table, 1, &opts);
        assert_eq!(result.items, vec!["  ", " x "]);

        let result = extract_column(&table, 1, &TableToListOptions::new());
        assert_eq!(result.items, vec!["x"]);
        assert_eq!(result.skipped_empty_count, 1);
    }

    #[test]
    fn test_trim_strips_stray_bom() {
        let table = rows(&[&["\u{FEFF}"], &["\u{FEFF} y"]]);
        let result = extract_column(&table, 1, &TableToListOptions::new());
        assert_eq!(result.items, vec!["y"]);
        assert_eq!(result.skipped_empty_count, 1);
    }

    #[test]
    fn test_order_and_duplicates_kept() {
        let table = rows(&[&["b"], &["a"], &["b"]]);
        let result = extract_column(&table, 1, &TableToListOptions::new());
        assert_eq!(result.items, vec!["b", "a", "b"]);
    }
}
