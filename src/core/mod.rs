//! Core parsing modules
//!
//! This module contains the table-to-list pipeline:
//! - `format`: input normalization and format detection
//! - `html`: the pluggable HTML table reader
//! - `tokenize`: row tokenizers for HTML, CSV/TSV and plain text
//! - `extract`: column extraction
//! - `table`: the parser that ties the stages together

pub mod extract;
pub mod format;
pub mod html;
pub mod table;
pub mod tokenize;

pub use extract::{effective_column, extract_column, ColumnExtraction, TableToListOptions};
pub use format::{detect_format, is_blank, normalize_input, trim_blank, TableFormat};
pub use html::{HtmlTableReader, MemoryHtmlTableReader, NoopHtmlTableReader};
pub use table::{parse_table_input, table_to_list, ParsedTable, TableParser, TableToListResult};
pub use tokenize::{parse_csv_line, parse_delimited_line};

#[cfg(feature = "html")]
pub use html::ScraperTableReader;
