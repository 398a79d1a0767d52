//! Row tokenizing
//!
//! Three strategies, picked by [`TableFormat`]:
//!
//! - HTML: delegated to an [`HtmlTableReader`]
//! - CSV/TSV: one row per line, each line split by a quote-aware scanner
//! - unknown: one row per line, each line split on whitespace runs
//!
//! The delimited and whitespace strategies never drop a line. A blank line
//! becomes a row holding a single empty cell.

use super::format::{is_blank, trim_blank, TableFormat};
use super::html::HtmlTableReader;

/// Split one line of delimited text into cells.
///
/// A `"` toggles quoted mode and is consumed. Inside quotes the delimiter is
/// literal and `""` yields one literal `"`. A quote opens quoted mode
/// wherever it appears, not only at the start of a field.
///
/// There is no multi-line support: the caller splits on `\n` first, so an
/// unterminated quote simply runs to the end of its line.
///
/// ```rust
/// use tablist::core::tokenize::parse_delimited_line;
///
/// assert_eq!(parse_delimited_line("a\t\"b\tc\"", '\t'), vec!["a", "b\tc"]);
/// ```
pub fn parse_delimited_line(line: &str, delimiter: char) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                current.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if ch == delimiter && !in_quotes {
            cells.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    cells.push(current);
    cells
}

/// Comma-separated form of [`parse_delimited_line`]
pub fn parse_csv_line(line: &str) -> Vec<String> {
    parse_delimited_line(line, ',')
}

/// One row per `\n`-separated line, split on `delimiter`
pub fn tokenize_delimited(input: &str, delimiter: char) -> Vec<Vec<String>> {
    input
        .split('\n')
        .map(|line| parse_delimited_line(line, delimiter))
        .collect()
}

/// One row per line, split on whitespace runs
pub fn tokenize_whitespace(input: &str) -> Vec<Vec<String>> {
    input
        .split('\n')
        .map(|line| {
            let trimmed = trim_blank(line);
            if trimmed.is_empty() {
                vec![String::new()]
            } else {
                trimmed
                    .split(is_blank)
                    .filter(|token| !token.is_empty())
                    .map(str::to_string)
                    .collect()
            }
        })
        .collect()
}

/// Produce rows for normalized input in the given format.
///
/// Empty input always yields no rows. The HTML branch yields no rows when
/// the reader finds no table.
pub fn tokenize(input: &str, format: TableFormat, reader: &dyn HtmlTableReader) -> Vec<Vec<String>> {
    if input.is_empty() {
        return Vec::new();
    }

    match format {
        TableFormat::Html => match reader.read_rows(input) {
            Some(rows) => rows,
            None => {
                tracing::debug!("no readable <table> in html input, yielding zero rows");
                Vec::new()
            }
        },
        TableFormat::Tsv => tokenize_delimited(input, '\t'),
        TableFormat::Csv => tokenize_delimited(input, ','),
        TableFormat::Unknown => tokenize_whitespace(input),
    }
}

/// Largest cell count over all rows, 0 for no rows
pub fn max_columns(rows: &[Vec<String>]) -> usize {
    rows.iter().map(Vec::len).max().unwrap_or(0)
}
