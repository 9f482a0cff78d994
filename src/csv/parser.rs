//! CSV tokenizing
//!
//! `tokenize` is a lenient single-pass scanner that never fails: stray quotes,
//! ragged rows and blank lines all degrade to best-effort rows. `parse_strict`
//! goes through the csv crate for RFC 4180 input and reports malformed data.

use super::model::{Row, Table};
use std::io::Cursor;

/// Error type for strict CSV parsing
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "CSV parse error at line {}: {}", line, self.message),
            None => write!(f, "CSV parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Tokenize CSV text into rows of trimmed cells
///
/// - `"` toggles quoting; `""` inside quotes is a literal quote
/// - `,` outside quotes ends a cell
/// - `\n` or `\r` outside quotes ends a row; terminators that would produce
///   an empty row are skipped, so CRLF and blank lines emit nothing
/// - an unterminated quote is closed at end of input
pub fn tokenize(text: &str) -> Table {
    let mut rows: Vec<Row> = Vec::new();
    let mut row: Row = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(cell.trim().to_string());
                cell.clear();
            }
            '\n' | '\r' if !in_quotes => {
                if !row.is_empty() || !cell.is_empty() {
                    row.push(cell.trim().to_string());
                    rows.push(std::mem::take(&mut row));
                }
                cell.clear();
            }
            _ => cell.push(ch),
        }
    }

    if !row.is_empty() || !cell.is_empty() {
        row.push(cell.trim().to_string());
        rows.push(row);
    }

    tracing::trace!(rows = rows.len(), "tokenized csv");
    Table::from_rows(rows)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    AfterQuote,
}

/// Check RFC 4180 quoting rules, reporting the line of the first violation
///
/// - a quote may only open a field as its first character
/// - a closing quote may only be followed by whitespace, `,` or a line end
/// - every opened quote must be closed
fn check_quoting(content: &str) -> Result<(), ParseError> {
    let mut state = QuoteState::FieldStart;
    let mut line = 1;
    let mut quote_line = 1;

    let mut chars = content.chars().peekable();
    while let Some(ch) = chars.next() {
        let is_newline = ch == '\n' || (ch == '\r' && chars.peek() != Some(&'\n'));

        match (state, ch) {
            (QuoteState::Quoted, '"') => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                } else {
                    state = QuoteState::AfterQuote;
                }
            }
            (QuoteState::Quoted, _) => {}
            (_, ',') => state = QuoteState::FieldStart,
            (_, '\n' | '\r') => state = QuoteState::FieldStart,
            (QuoteState::FieldStart, '"') => {
                state = QuoteState::Quoted;
                quote_line = line;
            }
            (QuoteState::Unquoted, '"') => {
                return Err(ParseError {
                    message: "quote inside an unquoted field".to_string(),
                    line: Some(line),
                });
            }
            (QuoteState::FieldStart | QuoteState::Unquoted, _) => state = QuoteState::Unquoted,
            (QuoteState::AfterQuote, ' ' | '\t') => {}
            (QuoteState::AfterQuote, c) => {
                return Err(ParseError {
                    message: format!("unexpected {:?} after closing quote", c),
                    line: Some(line),
                });
            }
        }

        if is_newline {
            line += 1;
        }
    }

    if state == QuoteState::Quoted {
        return Err(ParseError {
            message: "unterminated quoted field".to_string(),
            line: Some(quote_line),
        });
    }
    Ok(())
}

/// Parse RFC 4180 CSV content, failing on malformed records
///
/// Quoting is checked first, so a stray quote, text after a closing quote or
/// an unterminated field is an error rather than a best-effort cell. Rows may
/// have differing lengths and every field is trimmed, matching the shape
/// `tokenize` produces for well-formed input.
pub fn parse_strict(content: &str) -> Result<Table, ParseError> {
    check_quoting(content)?;

    let cursor = Cursor::new(content.as_bytes());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(cursor);

    let mut rows: Vec<Row> = Vec::new();

    for result in reader.records() {
        match result {
            Ok(record) => {
                if record.len() == 1 && record.get(0) == Some("") {
                    continue;
                }
                rows.push(record.iter().map(|s| s.to_string()).collect());
            }
            Err(e) => {
                let line = e.position().map(|p| p.line() as usize);
                return Err(ParseError {
                    message: e.to_string(),
                    line,
                });
            }
        }
    }

    Ok(Table::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &str) -> Vec<Vec<String>> {
        tokenize(text).into_rows()
    }

    #[test]
    fn test_tokenize_simple() {
        let table = tokenize("a,b,c\n1,2,3\n");
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), "a");
        assert_eq!(table.get(1, 2), "3");
    }

    #[test]
    fn test_tokenize_quoted_delimiter() {
        assert_eq!(rows(r#"a,"b,c",d"#), vec![vec!["a", "b,c", "d"]]);
    }

    #[test]
    fn test_tokenize_escaped_quote() {
        assert_eq!(rows(r#""a""b""#), vec![vec![r#"a"b"#]]);
    }

    #[test]
    fn test_tokenize_quoted_newline() {
        assert_eq!(rows("\"line1\nline2\",x"), vec![vec!["line1\nline2", "x"]]);
    }

    #[test]
    fn test_tokenize_skips_blank_lines_and_crlf() {
        assert_eq!(
            rows("a,b\r\n\r\nc,d"),
            vec![vec!["a", "b"], vec!["c", "d"]]
        );
    }

    #[test]
    fn test_tokenize_trims_cells() {
        assert_eq!(rows("  a ,\tb  \n"), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_tokenize_no_trailing_newline() {
        assert_eq!(rows("a\nb"), vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\r\n").is_empty());
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        assert_eq!(rows("a,\"b,c\nd"), vec![vec!["a", "b,c\nd"]]);
    }

    #[test]
    fn test_tokenize_trailing_comma_keeps_empty_cell() {
        assert_eq!(rows("a,\n"), vec![vec!["a", ""]]);
    }

    #[test]
    fn test_tokenize_ragged_rows() {
        assert_eq!(rows("a,b,c\n1,2\n"), vec![vec!["a", "b", "c"], vec!["1", "2"]]);
    }

    #[test]
    fn test_parse_strict_matches_tokenize_on_clean_input() {
        let content = "Name,Value\n\"x, y\",\"say \"\"hi\"\"\"\n\nplain, 2\n";
        let strict = parse_strict(content).unwrap();
        assert_eq!(strict, tokenize(content));
    }

    #[test]
    fn test_parse_strict_rejects_quote_inside_field() {
        let err = parse_strict("Name,Value\nab\"c,d\n").unwrap_err();
        assert_eq!(err.line, Some(2));
        assert!(parse_strict("a, \"b\"\n").is_err());

        // The lenient scanner toggles quoting anywhere
        assert_eq!(rows("ab\"c,d"), vec![vec!["abc,d"]]);
    }

    #[test]
    fn test_parse_strict_rejects_text_after_closing_quote() {
        let err = parse_strict("a,\"b\"x,c\n").unwrap_err();
        assert_eq!(err.line, Some(1));
        assert!(err.message.contains("after closing quote"));
    }

    #[test]
    fn test_parse_strict_rejects_unterminated_quote() {
        let err = parse_strict("h\r\nok\r\na,\"b\nc").unwrap_err();
        assert_eq!(err.line, Some(3));
        assert_eq!(err.message, "unterminated quoted field");
        assert!(parse_strict("\"unterminated").is_err());
    }

    #[test]
    fn test_parse_strict_allows_padding_after_quotes() {
        let strict = parse_strict("a,\"b, c\" ,d\n").unwrap();
        assert_eq!(strict.into_rows(), vec![vec!["a", "b, c", "d"]]);
    }

    #[test]
    fn test_parse_strict_counts_quoted_newlines() {
        let err = parse_strict("\"x\ny\",1\nbad\"\n").unwrap_err();
        assert_eq!(err.line, Some(3));
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError {
            message: "boom".into(),
            line: Some(3),
        };
        assert_eq!(err.to_string(), "CSV parse error at line 3: boom");
    }
}
