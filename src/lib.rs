//! # tablist
//!
//! Best-effort table parser that turns pasted tabular text into a flat list.
//!
//! ## Features
//!
//! - **Format Detection**: HTML tables, TSV, CSV, or whitespace-separated text
//! - **Quote-Aware Splitting**: quoted delimiters and `""` escapes in CSV/TSV
//! - **Pluggable HTML**: HTML tables are read through an injectable reader
//! - **Never Fails**: unreadable input degrades to an empty table
//! - **WASM Support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Column to List
//!
//! ```rust
//! use tablist::{table_to_list, TableFormat, TableToListOptions};
//!
//! let result = table_to_list("name,age\nAlice,30\nBob,25", &TableToListOptions::default());
//! assert_eq!(result.output, "name\nAlice\nBob");
//! assert_eq!(result.detected_format, TableFormat::Csv);
//! assert_eq!(result.extracted_count, 3);
//! ```
//!
//! ### Parsing Only
//!
//! ```rust
//! use tablist::parse_table_input;
//!
//! let table = parse_table_input("a b\nc   d");
//! assert_eq!(table.rows, vec![vec!["a", "b"], vec!["c", "d"]]);
//! ```
//!
//! ### Custom HTML Reader
//!
//! ```rust
//! use tablist::{MemoryHtmlTableReader, TableParser, TableToListOptions};
//!
//! let html = "<table><tr><td>x</td></tr></table>";
//! let reader = MemoryHtmlTableReader::new().with_table(html, vec![vec!["x".to_string()]]);
//! let parser = TableParser::new(reader);
//! assert_eq!(parser.table_to_list(html, &TableToListOptions::default()).output, "x");
//! ```

/// Core parsing modules
pub mod core;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the pipeline
pub use core::extract::{effective_column, extract_column, ColumnExtraction, TableToListOptions};
pub use core::format::{normalize_input, TableFormat};
pub use core::html::{HtmlTableReader, MemoryHtmlTableReader, NoopHtmlTableReader};
pub use core::table::{parse_table_input, table_to_list, ParsedTable, TableParser, TableToListResult};
pub use core::tokenize::{parse_csv_line, parse_delimited_line};

#[cfg(feature = "html")]
pub use core::html::ScraperTableReader;

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{ListWarning, TableError, TableResult};

/// Detect the format of raw input with the default HTML reader
///
/// The input is normalized first (BOM, line endings, outer whitespace).
pub fn detect_format(input: &str) -> TableFormat {
    TableParser::default().detect(input)
}
