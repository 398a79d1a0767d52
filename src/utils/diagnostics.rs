//! Table input diagnostics
//!
//! A lint pass over raw input that points out where the best-effort parser
//! is likely to surprise someone:
//!
//! - Quoted fields left open at the end of a line (multi-line values are
//!   not supported, so the line break ends the field)
//! - Quotes opening in the middle of a field
//! - Rows with fewer or more cells than the widest row
//!
//! Diagnostics never change how input is parsed.
//!
//! ## Example
//!
//! ```rust
//! use tablist::diagnostics::check_table;
//!
//! let result = check_table("name,quote\nAda,\"unfinished");
//! assert_eq!(result.warnings, 1);
//! ```

use std::fmt;

use crate::core::format::{normalize_input, TableFormat};
use crate::core::table::{ParsedTable, TableParser};

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - parsed cells may not be what the author meant
    Warning,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Line number in the normalized input (1-indexed)
    pub line: Option<usize>,
    /// Character column (1-indexed)
    pub column: Option<usize>,
    /// Relevant source text
    pub source_text: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: None,
            column: None,
            source_text: None,
            suggestion: None,
        }
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;

        match (self.line, self.column) {
            (Some(line), Some(col)) => write!(f, "\n  --> line {}:{}", line, col)?,
            (Some(line), None) => write!(f, "\n  --> line {}", line)?,
            _ => {}
        }

        if let Some(ref source) = self.source_text {
            write!(f, "\n  |\n  | {}", source)?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Check result with summary
#[derive(Debug, Default)]
pub struct CheckResult {
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,
    /// Number of warnings
    pub warnings: usize,
    /// Number of info messages
    pub infos: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings > 0
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.warnings > 0 {
            parts.push(plural(self.warnings, "warning"));
        }
        if self.infos > 0 {
            parts.push(plural(self.infos, "note"));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

/// Check table input using the default parser
pub fn check_table(input: &str) -> CheckResult {
    check_table_with(&TableParser::default(), input)
}

/// Check table input using the given parser's HTML capability
pub fn check_table_with(parser: &TableParser, input: &str) -> CheckResult {
    let mut result = CheckResult::new();
    let normalized = normalize_input(input);
    if normalized.is_empty() {
        return result;
    }

    let table = parser.parse(input);

    if let Some(delimiter) = table.detected_format.delimiter() {
        for (idx, line) in normalized.split('\n').enumerate() {
            check_quotes(line, idx + 1, delimiter, &mut result);
        }
    }

    if table.detected_format == TableFormat::Html && table.is_empty() {
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Warning,
                "input looks like an HTML table but no rows could be read",
            )
            .with_suggestion("Make sure the <table> contains <tr> rows with <td> or <th> cells"),
        );
    }

    check_ragged_rows(&table, &mut result);

    result.add(Diagnostic::new(
        DiagnosticLevel::Info,
        format!(
            "detected {} input: {}, {}",
            table.detected_format,
            plural(table.row_count(), "row"),
            plural(table.max_columns, "column")
        ),
    ));

    result
}

/// Walk one delimited line the way the tokenizer does, noting odd quotes
fn check_quotes(line: &str, line_no: usize, delimiter: char, result: &mut CheckResult) {
    let mut in_quotes = false;
    let mut field_has_text = false;
    let mut open_col = 0;
    let mut mid_field_reported = false;
    let mut chars = line.chars().enumerate().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch == '"' {
            if in_quotes && chars.peek().map(|&(_, next)| next) == Some('"') {
                chars.next();
                field_has_text = true;
            } else if in_quotes {
                in_quotes = false;
            } else {
                if field_has_text && !mid_field_reported {
                    result.add(
                        Diagnostic::new(
                            DiagnosticLevel::Warning,
                            "quote opens in the middle of a field",
                        )
                        .with_location(line_no, idx + 1)
                        .with_source(line)
                        .with_suggestion(
                            "The quote is dropped and starts a quoted run; delimiters up to the next quote are kept as text",
                        ),
                    );
                    mid_field_reported = true;
                }
                in_quotes = true;
                open_col = idx + 1;
            }
        } else if ch == delimiter && !in_quotes {
            field_has_text = false;
        } else {
            field_has_text = true;
        }
    }

    if in_quotes {
        result.add(
            Diagnostic::new(DiagnosticLevel::Warning, "quoted field is not closed")
                .with_location(line_no, open_col)
                .with_source(line)
                .with_suggestion(
                    "Quoted values cannot span lines; the rest of the line is read as one cell",
                ),
        );
    }
}

fn check_ragged_rows(table: &ParsedTable, result: &mut CheckResult) {
    let mut ragged = table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.len() != table.max_columns);

    if let Some((first_idx, first_row)) = ragged.next() {
        let count = 1 + ragged.count();
        let mut diag = Diagnostic::new(
            DiagnosticLevel::Info,
            format!(
                "{} of {} do not have {} (first has {})",
                plural(count, "row"),
                table.row_count(),
                plural(table.max_columns, "cell"),
                first_row.len()
            ),
        )
        .with_suggestion("Missing cells are read as empty values");

        // Row numbers only line up with input lines for line-based formats
        if table.detected_format != TableFormat::Html {
            diag = diag.with_line(first_idx + 1);
        }
        result.add(diag);
    }
}

/// Format check results for terminal output
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    if use_color {
        if result.has_warnings() {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", result.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}
