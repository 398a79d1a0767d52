//! Integration tests for the tablist table-to-list pipeline

use tablist::{
    detect_format, parse_csv_line, parse_table_input, table_to_list, ListWarning,
    MemoryHtmlTableReader, NoopHtmlTableReader, TableFormat, TableParser, TableToListOptions,
};

fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

// ============================================================================
// Format detection
// ============================================================================

mod detection {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tab_wins_over_comma() {
        assert_eq!(detect_format("a\tb,c\nd\te,f"), TableFormat::Tsv);
        assert_eq!(parse_table_input("a\tb,c").detected_format, TableFormat::Tsv);
    }

    #[test]
    fn test_whitespace_only_is_unknown() {
        let table = parse_table_input("\u{FEFF}\r\n  \t\r\n");
        assert_eq!(table.detected_format, TableFormat::Unknown);
        assert!(table.rows.is_empty());
        assert_eq!(table.max_columns, 0);
    }

    #[test]
    fn test_same_input_same_format() {
        let input = "x,y\n1,2";
        assert_eq!(detect_format(input), detect_format(input));
    }
}

// ============================================================================
// Delimited input
// ============================================================================

mod delimited {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quoted_comma() {
        assert_eq!(parse_csv_line(r#"a,"b,c",d"#), strings(&["a", "b,c", "d"]));
    }

    #[test]
    fn test_quote_doubling() {
        assert_eq!(
            parse_csv_line(r#""He said ""hi""""#),
            strings(&[r#"He said "hi""#])
        );
    }

    #[test]
    fn test_row_count_matches_line_count() {
        let inputs = ["a,b\n\nc,d\n,\ne", "a\tb\n\n\nc", "x,\"y\nz\",w"];
        for input in inputs {
            let table = parse_table_input(input);
            assert!(table.detected_format.is_delimited());
            assert_eq!(table.rows.len(), input.split('\n').count(), "input: {:?}", input);
        }
    }

    #[test]
    fn test_crlf_input() {
        let table = parse_table_input("a,b\r\nc,d\r\n");
        assert_eq!(table.rows, vec![strings(&["a", "b"]), strings(&["c", "d"])]);
    }

    #[test]
    fn test_ragged_rows() {
        let table = parse_table_input("a,b,c\nd,e\nf");
        assert_eq!(table.max_columns, 3);
        let result = table_to_list(
            "a,b,c\nd,e\nf",
            &TableToListOptions::new().with_column(2).with_ignore_empty(false),
        );
        assert_eq!(result.output, "c\n\n");
        assert_eq!(result.extracted_count, 3);
    }
}

// ============================================================================
// Whitespace fallback
// ============================================================================

mod whitespace {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_on_runs() {
        let table = parse_table_input("a b\nc   d");
        assert_eq!(table.rows, vec![strings(&["a", "b"]), strings(&["c", "d"])]);
        assert_eq!(table.detected_format, TableFormat::Unknown);
        assert_eq!(table.max_columns, 2);
    }

    #[test]
    fn test_blank_line_kept() {
        let table = parse_table_input("one two\n\nthree");
        assert_eq!(
            table.rows,
            vec![strings(&["one", "two"]), strings(&[""]), strings(&["three"])]
        );
    }
}

// ============================================================================
// HTML input
// ============================================================================

mod html {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    #[cfg(feature = "html")]
    fn test_simple_table() {
        let table = parse_table_input("<table><tr><td>x</td><td>y</td></tr></table>");
        assert_eq!(table.rows, vec![strings(&["x", "y"])]);
        assert_eq!(table.detected_format, TableFormat::Html);
        assert_eq!(table.max_columns, 2);
    }

    #[test]
    #[cfg(feature = "html")]
    fn test_header_and_body() {
        let html = r#"
            <table>
              <thead><tr><th>City</th><th>Country</th></tr></thead>
              <tbody>
                <tr><td>  Paris </td><td>France</td></tr>
                <tr><td>Buenos
                    Aires</td><td>Argentina</td></tr>
              </tbody>
            </table>"#;
        let result = table_to_list(html, &TableToListOptions::default());
        assert_eq!(result.detected_format, TableFormat::Html);
        assert_eq!(result.output, "City\nParis\nBuenos Aires");
        assert_eq!(result.total_rows, 3);
    }

    #[test]
    #[cfg(feature = "html")]
    fn test_table_without_rows_degrades() {
        let result = table_to_list("<table><tr>", &TableToListOptions::default());
        assert_eq!(result.detected_format, TableFormat::Html);
        assert_eq!(result.total_rows, 0);
        assert_eq!(result.output, "");
        assert!(result.is_empty_result());
    }

    #[test]
    fn test_injected_reader() {
        let html = "<table><tr><td>x</td></tr></table>";
        let reader = MemoryHtmlTableReader::new()
            .with_table(html, vec![strings(&["a", "b"]), strings(&["c", "d"])]);
        let parser = TableParser::new(reader);
        let result = parser.table_to_list(html, &TableToListOptions::new().with_column(1));
        assert_eq!(result.output, "b\nd");
    }

    #[test]
    fn test_no_html_capability() {
        let parser = TableParser::new(NoopHtmlTableReader);
        let table = parser.parse("<table><tr><td>a,b</td></tr></table>");
        assert_eq!(table.detected_format, TableFormat::Csv);
    }
}

// ============================================================================
// Table to list
// ============================================================================

mod to_list {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_end_to_end() {
        let result = table_to_list(
            "name,age\nAlice,30\nBob,25",
            &TableToListOptions {
                column_index: 0,
                trim_cells: true,
                ignore_empty: true,
            },
        );
        assert_eq!(result.output, "name\nAlice\nBob");
        assert_eq!(result.detected_format, TableFormat::Csv);
        assert_eq!(result.total_rows, 3);
        assert_eq!(result.extracted_count, 3);
        assert_eq!(result.skipped_empty_count, 0);
    }

    #[test]
    fn test_column_clamp() {
        let result = table_to_list("a,b\nc,d", &TableToListOptions::new().with_column(99));
        assert_eq!(result.output, "b\nd");
        assert_eq!(result.column_index, 1);
        assert!(matches!(
            result.warnings.as_slice(),
            [ListWarning::ColumnClamped {
                requested: 99,
                effective: 1
            }]
        ));
    }

    #[test]
    fn test_empty_cells_skipped() {
        let result = table_to_list(
            "a,,c\n,,\n",
            &TableToListOptions::new().with_column(1).with_ignore_empty(true),
        );
        assert_eq!(result.skipped_empty_count, 2);
        assert_eq!(result.extracted_count, 0);
        assert!(result.is_empty_result());
    }

    #[test]
    fn test_trim_off_keeps_spaces() {
        let result = table_to_list(" a , b \n c , d ", &TableToListOptions::raw());
        assert_eq!(result.output, "a \n c ");
    }

    #[test]
    fn test_deterministic() {
        let input = "<table><tr><td>1</td></tr></table>\nx,y";
        let opts = TableToListOptions::default();
        assert_eq!(table_to_list(input, &opts), table_to_list(input, &opts));
    }

    #[test]
    fn test_parser_shared_across_threads() {
        let parser = std::sync::Arc::new(TableParser::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let parser = parser.clone();
                std::thread::spawn(move || {
                    let input = format!("k,v\nrow{},{}", i, i * 10);
                    parser
                        .table_to_list(&input, &TableToListOptions::new().with_column(1))
                        .output
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("v\n{}", i * 10));
        }
    }
}
