//! Delimited-text parsing for spreadsheet exports.
//!
//! RFC-4180-style rules: a field wrapped in double quotes may contain commas
//! and line breaks literally, and a doubled quote inside a quoted field
//! decodes to one literal quote. Both `\n` and `\r\n` are accepted. Cells are
//! trimmed, and a trailing partial row at end of input is flushed rather than
//! dropped.

/// Parse raw CSV text into rows of trimmed string cells.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                // escaped quote
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                _ => cell.push(ch),
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            ',' => {
                row.push(cell.trim().to_string());
                cell.clear();
            }
            '\n' | '\r' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if !cell.is_empty() || !row.is_empty() {
                    row.push(cell.trim().to_string());
                    cell.clear();
                    rows.push(std::mem::take(&mut row));
                }
            }
            _ => cell.push(ch),
        }
    }

    // flush the last cell/row
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell.trim().to_string());
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_fields_with_commas() {
        let rows = parse_csv("a,\"b,c\",d\n1,2,3");
        assert_eq!(
            rows,
            vec![vec!["a", "b,c", "d"], vec!["1", "2", "3"]]
        );
    }

    #[test]
    fn doubled_quote_decodes_to_literal_quote() {
        let rows = parse_csv("\"He said \"\"hi\"\"\",x");
        assert_eq!(rows, vec![vec!["He said \"hi\"", "x"]]);
    }

    #[test]
    fn quoted_fields_may_contain_line_breaks() {
        let rows = parse_csv("a,\"line one\nline two\",b");
        assert_eq!(rows, vec![vec!["a", "line one\nline two", "b"]]);
    }

    #[test]
    fn accepts_crlf_line_breaks() {
        let rows = parse_csv("a,b\r\nc,d\r\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn trailing_partial_row_is_flushed() {
        let rows = parse_csv("a,b\nc,d");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["c", "d"]);
    }

    #[test]
    fn cells_are_trimmed() {
        let rows = parse_csv(" a , b \n");
        assert_eq!(rows, vec![vec!["a", "b"]]);
    }

    #[test]
    fn empty_input_produces_zero_rows() {
        assert!(parse_csv("").is_empty());
        assert!(parse_csv("\n\n").is_empty());
    }
}
