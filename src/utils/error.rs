//! Error handling for tablist
//!
//! Parsing itself never fails: unreadable input degrades to an empty table.
//! `TableError` covers the surfaces around the parser (file IO, option
//! parsing, serialization), and `ListWarning` carries the non-fatal notes a
//! list extraction can produce.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error type for the CLI and binding layers
#[derive(Debug, Clone)]
pub enum TableError {
    /// IO error (reading input, writing output)
    Io { message: String },
    /// An option value that is out of range or unrecognized
    InvalidOption { name: String, message: String },
    /// Serializing a result failed
    Serialization { message: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io { message } => write!(f, "IO error: {}", message),
            TableError::InvalidOption { name, message } => {
                write!(f, "Invalid option '{}': {}", name, message)
            }
            TableError::Serialization { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type for the CLI and binding layers
pub type TableResult<T> = Result<T, TableError>;

impl TableError {
    pub fn invalid_option(name: impl Into<String>, message: impl Into<String>) -> Self {
        TableError::InvalidOption {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Non-fatal notes attached to a list extraction
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
pub enum ListWarning {
    /// The requested column does not exist; the last one was read instead
    ColumnClamped { requested: usize, effective: usize },
    /// Input was not empty but no item survived extraction
    NoItemsFound,
    /// Input looked like an HTML table but no rows could be read from it
    HtmlTableMissing,
}

impl ListWarning {
    /// Hint for the person looking at the result
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ListWarning::ColumnClamped { .. } => None,
            ListWarning::NoItemsFound => Some("try a different column or split mode"),
            ListWarning::HtmlTableMissing => Some("check that the markup contains <tr> rows"),
        }
    }
}

impl fmt::Display for ListWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListWarning::ColumnClamped {
                requested,
                effective,
            } => write!(
                f,
                "column {} does not exist, read column {} instead",
                requested + 1,
                effective + 1
            )?,
            ListWarning::NoItemsFound => write!(f, "no items found")?,
            ListWarning::HtmlTableMissing => write!(f, "no rows found in HTML table")?,
        }
        if let Some(sug) = self.suggestion() {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}
