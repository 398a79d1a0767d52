//! HTML table reading
//!
//! The HTML branch of the tokenizer does not parse markup itself. It asks an
//! [`HtmlTableReader`] for the rows of the first `<table>` in the input, so
//! the rest of the pipeline can run without an HTML engine.
//!
//! Implementations:
//! - `ScraperTableReader`: html5ever-backed reader from the `scraper` crate
//!   (feature `html`)
//! - `MemoryHtmlTableReader`: canned rows keyed by input (testing, hosts that
//!   parse HTML elsewhere)
//! - `NoopHtmlTableReader`: no HTML capability at all

use std::collections::HashMap;

/// Capability for pulling rows of cells out of an HTML table.
pub trait HtmlTableReader: Send + Sync {
    /// Whether this reader can parse HTML at all.
    ///
    /// Detection only picks the `html` format when this returns `true`.
    fn is_available(&self) -> bool {
        true
    }

    /// Rows of the first `<table>` element, in document order.
    ///
    /// Returns `None` when there is no table or the markup cannot be read.
    /// Each cell's text has whitespace runs collapsed to one space and is
    /// trimmed. Rows without any `<th>`/`<td>` cell are left out.
    fn read_rows(&self, html: &str) -> Option<Vec<Vec<String>>>;
}

/// Collapse internal whitespace runs to a single space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reader for environments with no HTML capability
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHtmlTableReader;

impl HtmlTableReader for NoopHtmlTableReader {
    fn is_available(&self) -> bool {
        false
    }

    fn read_rows(&self, _html: &str) -> Option<Vec<Vec<String>>> {
        None
    }
}

/// Reader backed by a fixed map of input to rows
#[derive(Debug, Clone, Default)]
pub struct MemoryHtmlTableReader {
    tables: HashMap<String, Vec<Vec<String>>>,
}

impl MemoryHtmlTableReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rows to return for `html`.
    ///
    /// The key is matched against the normalized input, so leading BOMs,
    /// `\r\n` endings and outer whitespace should already be gone.
    pub fn add_table(&mut self, html: impl Into<String>, rows: Vec<Vec<String>>) {
        self.tables.insert(html.into(), rows);
    }

    pub fn with_table(mut self, html: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        self.add_table(html, rows);
        self
    }
}

impl HtmlTableReader for MemoryHtmlTableReader {
    fn read_rows(&self, html: &str) -> Option<Vec<Vec<String>>> {
        self.tables.get(html).map(|rows| {
            rows.iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| collapse_whitespace(cell))
                        .collect::<Vec<String>>()
                })
                .filter(|row| !row.is_empty())
                .collect()
        })
    }
}

#[cfg(feature = "html")]
pub use scraper_reader::ScraperTableReader;

#[cfg(feature = "html")]
mod scraper_reader {
    use super::{collapse_whitespace, HtmlTableReader};
    use scraper::{ElementRef, Html, Selector};

    /// Reader that parses markup with `scraper` (html5ever)
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ScraperTableReader;

    impl ScraperTableReader {
        pub fn new() -> Self {
            Self
        }
    }

    impl HtmlTableReader for ScraperTableReader {
        fn read_rows(&self, html: &str) -> Option<Vec<Vec<String>>> {
            let table_selector = Selector::parse("table").ok()?;
            let row_selector = Selector::parse("tr").ok()?;

            let document = Html::parse_document(html);
            let table = document.select(&table_selector).next()?;

            let rows = table
                .select(&row_selector)
                .map(row_cells)
                .filter(|cells| !cells.is_empty())
                .collect();
            Some(rows)
        }
    }

    /// Text of the direct `<th>`/`<td>` children of a row
    fn row_cells(row: ElementRef<'_>) -> Vec<String> {
        row.children()
            .filter_map(ElementRef::wrap)
            .filter(|child| matches!(child.value().name(), "th" | "td"))
            .map(|cell| collapse_whitespace(&cell.text().collect::<String>()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b  c "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_noop_reader_unavailable() {
        let reader = NoopHtmlTableReader;
        assert!(!reader.is_available());
        assert!(reader.read_rows("<table><tr><td>x</td></tr></table>").is_none());
    }

    #[test]
    fn test_memory_reader_returns_canned_rows() {
        let reader = MemoryHtmlTableReader::new().with_table(
            "<table/>",
            vec![
                vec!["  a  b ".to_string(), "c".to_string()],
                vec![],
            ],
        );
        assert!(reader.is_available());
        assert_eq!(
            reader.read_rows("<table/>"),
            Some(vec![vec!["a b".to_string(), "c".to_string()]])
        );
        assert!(reader.read_rows("<p>").is_none());
    }

    #[cfg(feature = "html")]
    mod scraper_tests {
        use super::super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reads_first_table_only() {
            let html = "<table><tr><th>Name</th><th>Age</th></tr>\
                        <tr><td>Alice</td><td>30</td></tr></table>\
                        <table><tr><td>other</td></tr></table>";
            let rows = ScraperTableReader.read_rows(html).unwrap();
            assert_eq!(
                rows,
                vec![
                    vec!["Name".to_string(), "Age".to_string()],
                    vec!["Alice".to_string(), "30".to_string()],
                ]
            );
        }

        #[test]
        fn test_collapses_cell_whitespace() {
            let html = "<table><tr><td>\n  New\n   York </td><td><b>big</b> apple</td></tr></table>";
            let rows = ScraperTableReader.read_rows(html).unwrap();
            assert_eq!(rows, vec![vec!["New York".to_string(), "big apple".to_string()]]);
        }

        #[test]
        fn test_skips_rows_without_cells() {
            let html = "<table><tr></tr><tr><td>x</td></tr></table>";
            let rows = ScraperTableReader.read_rows(html).unwrap();
            assert_eq!(rows, vec![vec!["x".to_string()]]);
        }

        #[test]
        fn test_no_table_is_none() {
            assert!(ScraperTableReader.read_rows("<div><tr>x</tr></div>").is_none());
        }
    }
}
