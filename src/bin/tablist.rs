//! tablist CLI - pull one column out of pasted tabular text

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use tablist::{
    diagnostics::{check_table_with, format_diagnostics},
    ParsedTable, TableError, TableFormat, TableParser, TableResult, TableToListOptions,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tablist")]
#[command(version)]
#[command(about = "tablist - turn a column of CSV, TSV, HTML or plain-text tables into a list", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Column to extract, counting from 1
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    column: u64,

    /// Keep surrounding whitespace in cells
    #[arg(long)]
    no_trim: bool,

    /// Keep empty cells as blank lines
    #[arg(long)]
    keep_empty: bool,

    /// Input format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Auto)]
    format: FormatArg,

    /// Detect and print the input format without extracting
    #[arg(long)]
    detect: bool,

    /// Print the full result as JSON instead of the list
    #[arg(long)]
    json: bool,

    /// Quiet mode: suppress warnings on stderr
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Check table input for quoting problems and ragged rows
    Check {
        /// Input file to check
        input: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Show the detected format and a preview of each column
    Columns {
        /// Input file path
        input: Option<String>,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Auto-detect from content
    Auto,
    /// HTML <table> markup
    Html,
    /// Tab-separated values
    Tsv,
    /// Comma-separated values
    Csv,
    /// Whitespace-separated text
    Text,
}

#[cfg(feature = "cli")]
impl FormatArg {
    fn forced(self) -> Option<TableFormat> {
        match self {
            FormatArg::Auto => None,
            FormatArg::Html => Some(TableFormat::Html),
            FormatArg::Tsv => Some(TableFormat::Tsv),
            FormatArg::Csv => Some(TableFormat::Csv),
            FormatArg::Text => Some(TableFormat::Unknown),
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> TableResult<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(TableError::from),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> TableResult<()> {
    let parser = TableParser::default();

    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(&parser, cmd);
    }

    if matches!(cli.format, FormatArg::Html) && !parser.html_available() {
        return Err(TableError::invalid_option(
            "format",
            "html input needs the `html` feature",
        ));
    }

    let input = read_input(cli.input_file.as_deref())?;

    if cli.detect {
        let format = cli.format.forced().unwrap_or_else(|| parser.detect(&input));
        println!("{}", format);
        return Ok(());
    }

    let options = TableToListOptions {
        column_index: (cli.column - 1) as usize,
        trim_cells: !cli.no_trim,
        ignore_empty: !cli.keep_empty,
    };

    let result = match cli.format.forced() {
        Some(format) => parser.table_to_list_as(&input, format, &options),
        None => parser.table_to_list(&input, &options),
    };
    tracing::debug!(
        format = result.detected_format.as_str(),
        extracted = result.extracted_count,
        skipped = result.skipped_empty_count,
        "extracted column {}",
        result.column_index + 1
    );

    if !cli.quiet {
        for warning in &result.warnings {
            eprintln!("⚠ {}", warning);
        }
    }

    let rendered = if cli.json {
        serde_json::to_string_pretty(&result)?
    } else {
        result.output.clone()
    };

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", rendered)?;
            if !cli.quiet {
                eprintln!(
                    "✓ {} item(s) written to: {}",
                    result.extracted_count, path
                );
            }
        }
        None => {
            if !rendered.is_empty() {
                println!("{}", rendered);
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn handle_subcommand(parser: &TableParser, cmd: Commands) -> TableResult<()> {
    match cmd {
        Commands::Check { input, no_color } => {
            let content = read_input(input.as_deref())?;
            let result = check_table_with(parser, &content);
            println!("{}", format_diagnostics(&result, !no_color));
        }

        Commands::Columns { input } => {
            let content = read_input(input.as_deref())?;
            let table = parser.parse(&content);
            print!("{}", describe_columns(&table));
        }

        Commands::Info => {
            println!("tablist - best-effort table to list converter");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Input formats (first match wins):");
            if parser.html_available() {
                println!("  ✓ HTML <table> markup");
            } else {
                println!("  ✗ HTML <table> markup (built without the `html` feature)");
            }
            println!("  ✓ Tab-separated values");
            println!("  ✓ Comma-separated values (quoted fields, \"\" escapes)");
            println!("  ✓ Whitespace-separated text");
            println!();
        }
    }

    Ok(())
}

/// Detected format, then each header cell with up to two body values
#[cfg(feature = "cli")]
fn describe_columns(table: &ParsedTable) -> String {
    let mut out = format!(
        "format: {}\nrows: {}\ncolumns: {}\n",
        table.detected_format,
        table.row_count(),
        table.max_columns
    );
    let header = table.header().unwrap_or(&[]);

    for index in 0..table.max_columns {
        let name = header.get(index).map(|cell| cell.trim()).unwrap_or("");
        let samples: Vec<&str> = table
            .column(index)
            .into_iter()
            .skip(1)
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .take(2)
            .collect();

        let name = if name.is_empty() { "-" } else { name };
        if samples.is_empty() {
            out.push_str(&format!("  {}: {}\n", index + 1, name));
        } else {
            out.push_str(&format!("  {}: {} ({})\n", index + 1, name, samples.join(", ")));
        }
    }

    out
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tablist --features cli");
    eprintln!("  tablist [OPTIONS] [INPUT_FILE]");
}
