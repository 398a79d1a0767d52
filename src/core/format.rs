//! Input normalization and table format detection
//!
//! Detection is a fixed precedence check, not a score: the first rule that
//! matches wins.
//!
//! 1. `<table` and `<tr` both present (case-insensitive) and an HTML reader
//!    is available: [`TableFormat::Html`]
//! 2. a tab character: [`TableFormat::Tsv`]
//! 3. a comma: [`TableFormat::Csv`]
//! 4. anything else: [`TableFormat::Unknown`] (whitespace-separated tokens)

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::error::TableError;

lazy_static! {
    static ref TABLE_TAG: Regex = Regex::new(r"(?i)<table").unwrap();
    static ref ROW_TAG: Regex = Regex::new(r"(?i)<tr").unwrap();
}

/// The format a parse was carried out with.
///
/// Chosen once per parse and never revised afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TableFormat {
    /// An HTML `<table>` element
    Html,
    /// Tab-separated values
    Tsv,
    /// Comma-separated values
    Csv,
    /// Unstructured text, split on whitespace
    #[default]
    Unknown,
}

impl TableFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableFormat::Html => "html",
            TableFormat::Tsv => "tsv",
            TableFormat::Csv => "csv",
            TableFormat::Unknown => "unknown",
        }
    }

    /// Field delimiter for the delimited formats
    pub fn delimiter(&self) -> Option<char> {
        match self {
            TableFormat::Tsv => Some('\t'),
            TableFormat::Csv => Some(','),
            TableFormat::Html | TableFormat::Unknown => None,
        }
    }

    pub fn is_delimited(&self) -> bool {
        self.delimiter().is_some()
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableFormat {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(TableFormat::Html),
            "tsv" => Ok(TableFormat::Tsv),
            "csv" => Ok(TableFormat::Csv),
            "unknown" | "text" | "whitespace" => Ok(TableFormat::Unknown),
            other => Err(TableError::invalid_option(
                "format",
                format!("unknown table format '{}'", other),
            )),
        }
    }
}

/// Normalize raw input before detection and tokenizing.
///
/// Strips one leading byte-order mark, folds `\r\n` and lone `\r` into
/// `\n`, then trims surrounding blanks.
pub fn normalize_input(raw: &str) -> String {
    let without_bom = raw.strip_prefix('\u{FEFF}').unwrap_or(raw);
    trim_blank(&without_bom.replace("\r\n", "\n").replace('\r', "\n")).to_string()
}

/// Unicode whitespace plus U+FEFF, which pasted text often carries
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// `str::trim` that also strips stray byte-order marks
pub fn trim_blank(s: &str) -> &str {
    s.trim_matches(is_blank)
}

/// Classify normalized input.
///
/// `html_available` says whether an HTML reader can handle the `html`
/// branch. Without one, markup falls through to the tab/comma checks.
pub fn detect_format(normalized: &str, html_available: bool) -> TableFormat {
    if normalized.is_empty() {
        return TableFormat::Unknown;
    }

    if html_available && looks_like_html_table(normalized) {
        TableFormat::Html
    } else if normalized.contains('\t') {
        TableFormat::Tsv
    } else if normalized.contains(',') {
        TableFormat::Csv
    } else {
        TableFormat::Unknown
    }
}

/// Substring check only; malformed markup still counts.
pub fn looks_like_html_table(input: &str) -> bool {
    TABLE_TAG.is_match(input) && ROW_TAG.is_match(input)
}
