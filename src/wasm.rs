//! WASM bindings for tablist
//!
//! This module provides JavaScript-accessible functions for the table-to-list
//! pipeline. HTML input is read with the same `scraper` reader as native
//! builds, so no DOM access is needed from Rust.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{TableFormat, TableParser, TableToListOptions, TableToListResult};

/// Table-to-list options as sent from JavaScript.
///
/// Every field is optional; missing ones take the library defaults.
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableToListJsOptions {
    /// 0-based column to extract
    #[serde(default)]
    pub column_index: usize,
    /// Trim cells before output
    #[serde(default = "default_true")]
    pub trim_cells: bool,
    /// Drop empty cells
    #[serde(default = "default_true")]
    pub ignore_empty: bool,
    /// Force a format ("html", "tsv", "csv", "unknown") instead of detecting
    #[serde(default)]
    pub format: Option<String>,
}

#[cfg(feature = "wasm")]
impl Default for TableToListJsOptions {
    fn default() -> Self {
        Self {
            column_index: 0,
            trim_cells: true,
            ignore_empty: true,
            format: None,
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

/// Result envelope handed back to JavaScript
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    /// Whether the call succeeded
    pub success: bool,
    /// Error message if it did not
    pub error: Option<String>,
    /// The extraction summary
    pub result: Option<TableToListResult>,
    /// Warnings rendered for display
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Parse text into `{ rows, detectedFormat, maxColumns }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "parseTableInput")]
pub fn parse_table_input_wasm(input: &str) -> JsValue {
    let table = TableParser::default().parse(input);
    to_js(&table)
}

/// Extract one column of `input` as a newline-separated list
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "tableToList")]
pub fn table_to_list_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: TableToListJsOptions = if options.is_undefined() || options.is_null() {
        TableToListJsOptions::default()
    } else {
        match serde_wasm_bindgen::from_value(options) {
            Ok(opts) => opts,
            Err(e) => return to_js(&failure(format!("Invalid options: {}", e))),
        }
    };

    let forced = match opts.format.as_deref().map(str::parse::<TableFormat>) {
        None => None,
        Some(Ok(format)) => Some(format),
        Some(Err(e)) => return to_js(&failure(e.to_string())),
    };

    let list_opts = TableToListOptions {
        column_index: opts.column_index,
        trim_cells: opts.trim_cells,
        ignore_empty: opts.ignore_empty,
    };

    let parser = TableParser::default();
    let result = match forced {
        Some(format) => parser.table_to_list_as(input, format, &list_opts),
        None => parser.table_to_list(input, &list_opts),
    };

    let response = ListResponse {
        success: true,
        error: None,
        warnings: result.warnings.iter().map(ToString::to_string).collect(),
        result: Some(result),
    };
    to_js(&response)
}

/// Detect input format ("html", "tsv", "csv" or "unknown")
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "detectFormat")]
pub fn detect_format_wasm(input: &str) -> String {
    crate::detect_format(input).to_string()
}

/// Check table input for quoting problems and ragged rows
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkTable")]
pub fn check_table_wasm(input: &str) -> JsValue {
    use crate::diagnostics::DiagnosticLevel;

    let result = crate::diagnostics::check_table(input);

    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for d in &result.diagnostics {
        let text = match d.line {
            Some(line) => format!("line {}: {}", line, d.message),
            None => d.message.clone(),
        };
        match d.level {
            DiagnosticLevel::Warning => warnings.push(text),
            DiagnosticLevel::Info => infos.push(text),
        }
    }

    let summary = CheckSummary {
        warnings,
        infos,
        summary: result.summary(),
    };
    to_js(&summary)
}

/// Summary of table check results
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct CheckSummary {
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    pub summary: String,
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(feature = "wasm")]
fn failure(message: String) -> ListResponse {
    ListResponse {
        success: false,
        error: Some(message),
        result: None,
        warnings: vec![],
    }
}

#[cfg(feature = "wasm")]
fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| JsValue::from_str(&e.to_string()))
}
