//! Python bindings for tablist via PyO3.
//!
//! Exposes `parse_table_input`, `table_to_list` and `detect_format`, returning
//! plain dicts shaped like the JavaScript bindings.

use ::tablist::{ParsedTable, TableError, TableFormat, TableParser, TableToListOptions};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Package version, kept in sync with Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn to_py_err(e: TableError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn parse_format(format: Option<&str>) -> PyResult<Option<TableFormat>> {
    format
        .map(|name| name.parse::<TableFormat>().map_err(to_py_err))
        .transpose()
}

fn table_to_dict<'py>(py: Python<'py>, table: &ParsedTable) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("rows", table.rows.clone())?;
    dict.set_item("detected_format", table.detected_format.as_str())?;
    dict.set_item("max_columns", table.max_columns)?;
    Ok(dict)
}

/// Parse text into rows of cells.
#[pyfunction]
#[pyo3(signature = (text, format=None))]
fn parse_table_input<'py>(
    py: Python<'py>,
    text: &str,
    format: Option<&str>,
) -> PyResult<Bound<'py, PyDict>> {
    let parser = TableParser::default();
    let table = match parse_format(format)? {
        Some(format) => parser.parse_as(text, format),
        None => parser.parse(text),
    };
    table_to_dict(py, &table)
}

/// Extract one column as a newline-separated list.
#[pyfunction]
#[pyo3(signature = (text, column_index=0, trim_cells=true, ignore_empty=true, format=None))]
fn table_to_list<'py>(
    py: Python<'py>,
    text: &str,
    column_index: usize,
    trim_cells: bool,
    ignore_empty: bool,
    format: Option<&str>,
) -> PyResult<Bound<'py, PyDict>> {
    let options = TableToListOptions {
        column_index,
        trim_cells,
        ignore_empty,
    };
    let parser = TableParser::default();
    let result = match parse_format(format)? {
        Some(format) => parser.table_to_list_as(text, format, &options),
        None => parser.table_to_list(text, &options),
    };

    let warnings: Vec<String> = result.warnings.iter().map(ToString::to_string).collect();
    let dict = PyDict::new(py);
    dict.set_item("output", &result.output)?;
    dict.set_item("detected_format", result.detected_format.as_str())?;
    dict.set_item("total_rows", result.total_rows)?;
    dict.set_item("extracted_count", result.extracted_count)?;
    dict.set_item("skipped_empty_count", result.skipped_empty_count)?;
    dict.set_item("column_index", result.column_index)?;
    dict.set_item("warnings", warnings)?;
    Ok(dict)
}

/// Detect the input format: "html", "tsv", "csv" or "unknown".
#[pyfunction]
fn detect_format(text: &str) -> &'static str {
    ::tablist::detect_format(text).as_str()
}

/// The Python module definition.
#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", VERSION)?;
    m.add_function(wrap_pyfunction!(parse_table_input, m)?)?;
    m.add_function(wrap_pyfunction!(table_to_list, m)?)?;
    m.add_function(wrap_pyfunction!(detect_format, m)?)?;
    Ok(())
}
