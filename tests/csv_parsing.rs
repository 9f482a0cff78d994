//! Tokenizer and notes index tests

mod common;

use common::{sample_notes, DATA_CSV};
use compare_table::csv::{parse_strict, tokenize};
use compare_table::notes::NotesMap;

fn serialize(rows: &[Vec<&str>], terminator: &str) -> String {
    rows.iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join(terminator)
}

// ========================================================================
// Tokenizer
// ========================================================================

#[test]
fn test_serialized_grid_round_trips() {
    let grids: Vec<Vec<Vec<&str>>> = vec![
        vec![vec!["a"]],
        vec![vec!["Feature", "Basic", "Pro"], vec!["Storage", "5 GB", "1 TB|good"]],
        vec![vec!["x", "", "z"], vec!["1"], vec!["1", "2", "3", "4"]],
    ];

    for grid in grids {
        for terminator in ["\n", "\r\n", "\r"] {
            let text = serialize(&grid, terminator);
            assert_eq!(tokenize(&text).into_rows(), grid, "terminator {:?}", terminator);
        }
    }
}

#[test]
fn test_quoted_delimiter_survives() {
    assert_eq!(tokenize(r#"a,"b,c",d"#).into_rows(), vec![vec!["a", "b,c", "d"]]);
}

#[test]
fn test_escaped_quote_survives() {
    assert_eq!(tokenize(r#""a""b""#).into_rows(), vec![vec![r#"a"b"#]]);
}

#[test]
fn test_blank_lines_do_not_emit_rows() {
    assert_eq!(
        tokenize("a,b\r\n\r\nc,d").into_rows(),
        vec![vec!["a", "b"], vec!["c", "d"]]
    );
    assert_eq!(tokenize("\n\na\n\n").into_rows(), vec![vec!["a"]]);
}

#[test]
fn test_sample_data_shape() {
    let table = tokenize(DATA_CSV);
    assert_eq!(table.row_count(), 4);
    assert_eq!(table.header().unwrap(), &vec!["Feature", "Basic", "Pro"]);
    assert_eq!(table.get(3, 2), "$9, monthly[2]");
}

#[test]
fn test_strict_rejects_what_lenient_recovers() {
    let malformed = [
        ("a,\"b\nc", 1),
        ("a,\"b\"x,c\n", 1),
        ("\"unterminated", 1),
        ("ok\na\"b\"\"c,d", 2),
    ];

    for (text, line) in malformed {
        let err = parse_strict(text).unwrap_err();
        assert_eq!(err.line, Some(line), "input {:?}", text);
        assert!(!tokenize(text).is_empty());
    }
}

#[test]
fn test_strict_rejects_sample_data() {
    // `"$9, monthly"[2]` has text after the closing quote
    let err = parse_strict(DATA_CSV).unwrap_err();
    assert_eq!(err.line, Some(4));
}

#[test]
fn test_strict_agrees_on_well_formed_input() {
    let content = "Feature,Basic\n\"Storage, total\",5 GB\r\nSupport,\"say \"\"hi\"\"\"\n";
    assert_eq!(parse_strict(content).unwrap(), tokenize(content));
}

// ========================================================================
// Notes index
// ========================================================================

#[test]
fn test_sample_notes() {
    let notes = sample_notes();
    assert_eq!(notes.len(), 4);
    assert_eq!(notes.get("3"), Some("Business days only"));
    assert_eq!(notes.sorted_ids(), vec!["1", "2", "3", "10"]);
}

#[test]
fn test_notes_tolerate_malformed_rows() {
    let notes = NotesMap::parse("id,note\n5\n6,six,extra\n\"7\n");
    assert_eq!(notes.get("5"), Some(""));
    assert_eq!(notes.get("6"), Some("six"));
    assert!(notes.contains("7"));
}
