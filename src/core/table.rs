//! Parse pipeline: normalize, detect, tokenize, extract
//!
//! Every call builds its result from scratch. A [`TableParser`] only holds
//! the HTML reader, so one parser can be shared across threads and called
//! repeatedly.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::extract::{extract_column, TableToListOptions};
use super::format::{detect_format, normalize_input, TableFormat};
use super::html::HtmlTableReader;
use super::tokenize::{max_columns, tokenize};
use crate::utils::error::ListWarning;

/// Rows of cells recovered from raw text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ParsedTable {
    /// Rows in document order. Rows may differ in length.
    pub rows: Vec<Vec<String>>,
    /// Format chosen by detection
    pub detected_format: TableFormat,
    /// Largest cell count over all rows
    pub max_columns: usize,
}

impl ParsedTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row, which is usually a header
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Every cell of one column, with missing cells read as `""`
    pub fn column(&self, index: usize) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
            .collect()
    }
}

/// Summary of one table-to-list run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TableToListResult {
    /// Extracted items joined with `\n`
    pub output: String,
    pub detected_format: TableFormat,
    /// Rows in the parsed table
    pub total_rows: usize,
    /// Items kept in `output`
    pub extracted_count: usize,
    /// Cells dropped for being empty
    pub skipped_empty_count: usize,
    /// Column actually read, after clamping
    pub column_index: usize,
    /// Non-fatal notes; these never change `output`
    pub warnings: Vec<ListWarning>,
}

impl TableToListResult {
    /// Whether the input had content but nothing came out of it.
    ///
    /// This is a signal for the caller to suggest another column or split
    /// mode, not an error.
    pub fn is_empty_result(&self) -> bool {
        self.warnings.contains(&ListWarning::NoItemsFound)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Table parser bound to an HTML reader
pub struct TableParser {
    reader: Box<dyn HtmlTableReader>,
}

impl TableParser {
    pub fn new(reader: impl HtmlTableReader + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Whether markup can be parsed as an HTML table
    pub fn html_available(&self) -> bool {
        self.reader.is_available()
    }

    /// Detect the format of `raw` without tokenizing it
    pub fn detect(&self, raw: &str) -> TableFormat {
        detect_format(&normalize_input(raw), self.html_available())
    }

    /// Parse arbitrary text into rows of cells. Never fails.
    pub fn parse(&self, raw: &str) -> ParsedTable {
        let normalized = normalize_input(raw);
        let format = detect_format(&normalized, self.html_available());
        self.parse_normalized(&normalized, format)
    }

    /// Parse `raw` with a caller-chosen format instead of detecting one.
    ///
    /// Forcing `Html` without an available reader yields an empty table.
    pub fn parse_as(&self, raw: &str, format: TableFormat) -> ParsedTable {
        self.parse_normalized(&normalize_input(raw), format)
    }

    fn parse_normalized(&self, normalized: &str, format: TableFormat) -> ParsedTable {
        let rows = tokenize(normalized, format, self.reader.as_ref());
        let max_columns = max_columns(&rows);

        tracing::debug!(
            format = format.as_str(),
            rows = rows.len(),
            max_columns,
            "parsed table input"
        );

        ParsedTable {
            rows,
            detected_format: format,
            max_columns,
        }
    }

    /// Parse `raw` and flatten one column into newline-separated text
    pub fn table_to_list(&self, raw: &str, options: &TableToListOptions) -> TableToListResult {
        let normalized = normalize_input(raw);
        let format = detect_format(&normalized, self.html_available());
        let table = self.parse_normalized(&normalized, format);
        list_from_table(&table, normalized.is_empty(), options)
    }

    /// Same as [`TableParser::table_to_list`] with a forced format
    pub fn table_to_list_as(
        &self,
        raw: &str,
        format: TableFormat,
        options: &TableToListOptions,
    ) -> TableToListResult {
        let normalized = normalize_input(raw);
        let table = self.parse_normalized(&normalized, format);
        list_from_table(&table, normalized.is_empty(), options)
    }
}

impl Default for TableParser {
    #[cfg(feature = "html")]
    fn default() -> Self {
        Self::new(super::html::ScraperTableReader)
    }

    #[cfg(not(feature = "html"))]
    fn default() -> Self {
        Self::new(super::html::NoopHtmlTableReader)
    }
}

fn list_from_table(
    table: &ParsedTable,
    input_blank: bool,
    options: &TableToListOptions,
) -> TableToListResult {
    let extraction = extract_column(&table.rows, table.max_columns, options);

    let mut warnings = Vec::new();
    if table.detected_format == TableFormat::Html && table.is_empty() {
        tracing::warn!("html input produced no table rows");
        warnings.push(ListWarning::HtmlTableMissing);
    }
    if table.max_columns > 0 && extraction.column_index < options.column_index {
        warnings.push(ListWarning::ColumnClamped {
            requested: options.column_index,
            effective: extraction.column_index,
        });
    }
    if !input_blank && extraction.items.is_empty() {
        warnings.push(ListWarning::NoItemsFound);
    }

    TableToListResult {
        output: extraction.items.join("\n"),
        detected_format: table.detected_format,
        total_rows: table.row_count(),
        extracted_count: extraction.items.len(),
        skipped_empty_count: extraction.skipped_empty_count,
        column_index: extraction.column_index,
        warnings,
    }
}

/// Parse arbitrary text into a table with the default HTML reader
pub fn parse_table_input(raw: &str) -> ParsedTable {
    TableParser::default().parse(raw)
}

/// Flatten one column of arbitrary text into a newline-separated list
pub fn table_to_list(raw: &str, options: &TableToListOptions) -> TableToListResult {
    TableParser::default().table_to_list(raw, options)
}
