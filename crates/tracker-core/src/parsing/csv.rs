//! Minimal CSV tokenizer for spreadsheet exports.
//!
//! Handles quoted fields with embedded commas/newlines and the `""`
//! escape. Never errors: unbalanced quotes degrade by carrying the last
//! quote state to the end of input, which is the accepted behavior for
//! malformed exports.

/// Tokenize raw delimited text into rows of string fields.
///
/// `\r` is stripped outright (not a separator), and trailing content
/// without a final newline is still emitted as the last row.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            // Doubled quote decodes to a literal quote, wherever it appears.
            '"' if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            '\n' if !in_quotes => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            '\r' => {}
            ',' if !in_quotes => row.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Serialize rows back to CSV text, quoting fields that contain a comma,
/// quote, or newline. Inverse of [`parse_csv`] for well-formed input.
pub fn write_csv(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for (j, field) in row.iter().enumerate() {
            if j > 0 {
                out.push(',');
            }
            if field.contains(',') || field.contains('"') || field.contains('\n') {
                out.push('"');
                out.push_str(&field.replace('"', "\"\""));
                out.push('"');
            } else {
                out.push_str(field);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &str) -> Vec<Vec<String>> {
        parse_csv(text)
    }

    #[test]
    fn test_simple_rows() {
        assert_eq!(
            rows("a,b,c\nd,e,f"),
            vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]
        );
    }

    #[test]
    fn test_quoted_comma_is_literal() {
        assert_eq!(rows("\"a,b\",c"), vec![vec!["a,b", "c"]]);
    }

    #[test]
    fn test_quoted_newline_is_literal() {
        assert_eq!(rows("\"line one\nline two\",x"), vec![vec!["line one\nline two", "x"]]);
    }

    #[test]
    fn test_doubled_quote_escape() {
        assert_eq!(rows("\"say \"\"hi\"\"\""), vec![vec!["say \"hi\""]]);
    }

    #[test]
    fn test_crlf_stripped() {
        assert_eq!(rows("a,b\r\nc,d\r\n"), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_trailing_row_without_newline() {
        assert_eq!(rows("a,b\nc"), vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn test_trailing_newline_emits_no_empty_row() {
        assert_eq!(rows("a,b\n"), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_short_and_long_rows_accepted() {
        assert_eq!(rows("a\nb,c,d"), vec![vec!["a"], vec!["b", "c", "d"]]);
    }

    #[test]
    fn test_unbalanced_quote_never_panics() {
        // Rest of input is swallowed into one field; wrong but graceful.
        let out = rows("\"never closed,x\ny");
        assert_eq!(out, vec![vec!["never closed,x\ny"]]);
    }

    #[test]
    fn test_round_trip() {
        let original = vec![
            vec!["Name".to_string(), "Message".to_string()],
            vec!["Doe, Jane".to_string(), "said \"hi\"\nand left".to_string()],
            vec!["plain".to_string(), "".to_string()],
        ];
        assert_eq!(parse_csv(&write_csv(&original)), original);
    }
}
