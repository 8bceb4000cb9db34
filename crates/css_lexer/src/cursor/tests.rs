use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

/// Helper: drain every character the cursor will hand out.
fn drain(cursor: &mut Cursor) -> String {
    let mut out = String::new();
    while !cursor.is_eof() {
        out.push(cursor.current());
        cursor.advance();
    }
    out
}

// === Basic Navigation ===

#[test]
fn current_returns_first_character() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), 'a');
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.current(), 'b');
    assert_eq!(cursor.peek(), 'c');
}

#[test]
fn peek_does_not_consume() {
    let cursor = Cursor::new("ab");
    assert_eq!(cursor.peek(), 'b');
    assert_eq!(cursor.current(), 'a');
}

#[test]
fn empty_source_is_eof_immediately() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), '\0');
    assert_eq!(cursor.peek(), '\0');
}

#[test]
fn advance_past_end_stays_at_eof() {
    let mut cursor = Cursor::new("x");
    cursor.advance();
    assert!(cursor.is_eof());
    cursor.advance();
    assert!(cursor.is_eof());
}

#[test]
fn multibyte_characters_come_through_whole() {
    let mut cursor = Cursor::new("über");
    assert_eq!(cursor.current(), 'ü');
    cursor.advance();
    assert_eq!(cursor.current(), 'b');
}

// === Position Tracking ===

#[test]
fn advance_tracks_line_and_column() {
    let mut cursor = Cursor::new("ab\ncd");
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.position().line, 1);
    assert_eq!(cursor.position().column, 2);
    cursor.advance(); // consume '\n'
    assert_eq!(cursor.position().line, 2);
    assert_eq!(cursor.position().column, 0);
}

#[test]
fn crlf_advances_one_line() {
    let mut cursor = Cursor::new("a\r\nb");
    cursor.advance(); // 'a'
    cursor.advance(); // '\r'
    cursor.advance(); // '\n'
    assert_eq!(cursor.current(), 'b');
    assert_eq!(cursor.position().line, 2);
    assert_eq!(cursor.position().column, 0);
}

#[test]
fn advance_untracked_leaves_position_alone() {
    let mut cursor = Cursor::new("a\nb");
    cursor.advance(); // 'a'
    let before = cursor.position();
    cursor.advance_untracked(); // '\n' swallowed silently
    assert_eq!(cursor.current(), 'b');
    assert_eq!(cursor.position(), before);
}

// === Push-Back ===

#[test]
fn push_back_replays_text_before_the_stream() {
    let mut cursor = Cursor::new("XY");
    cursor.push_back("ab");
    assert_eq!(drain(&mut cursor), "abXY");
}

#[test]
fn push_back_restores_the_current_character() {
    let mut cursor = Cursor::new("abcX");
    cursor.advance();
    cursor.advance();
    cursor.advance(); // at 'X'
    cursor.push_back("abc");
    assert_eq!(drain(&mut cursor), "abcX");
}

#[test]
fn push_back_at_eof_revives_the_cursor() {
    let mut cursor = Cursor::new("a");
    cursor.advance();
    assert!(cursor.is_eof());
    cursor.push_back("zz");
    assert!(!cursor.is_eof());
    assert_eq!(drain(&mut cursor), "zz");
}

#[test]
fn push_back_rolls_the_column_back() {
    let mut cursor = Cursor::new("abcdef");
    for _ in 0..4 {
        cursor.advance();
    }
    assert_eq!(cursor.position().column, 4);
    cursor.push_back("cd");
    assert_eq!(cursor.position().column, 2);
}

#[test]
fn push_back_char_restores_one_character() {
    let mut cursor = Cursor::new("ab");
    cursor.advance(); // at 'b'
    cursor.push_back_char('a');
    assert_eq!(cursor.position().column, 0);
    assert_eq!(drain(&mut cursor), "ab");
}

#[test]
fn push_back_of_empty_text_is_a_no_op() {
    let mut cursor = Cursor::new("ab");
    cursor.push_back("");
    assert_eq!(cursor.current(), 'a');
    assert_eq!(cursor.position().column, 0);
}

// === Case-Insensitive Matching ===

#[test]
fn try_match_consumes_and_preserves_case() {
    let mut cursor = Cursor::new("URL(rest");
    let mut out = String::new();
    assert!(cursor.try_match_ignore_case("url(", &mut out));
    assert_eq!(out, "URL(");
    assert_eq!(cursor.current(), 'r');
}

#[test]
fn try_match_failure_restores_the_cursor() {
    let mut cursor = Cursor::new("urgent");
    let mut out = String::new();
    assert!(!cursor.try_match_ignore_case("url(", &mut out));
    assert_eq!(out, "");
    assert_eq!(drain(&mut cursor), "urgent");
}

#[test]
fn try_match_fails_cleanly_at_eof() {
    let mut cursor = Cursor::new("im");
    let mut out = String::new();
    assert!(!cursor.try_match_ignore_case("important", &mut out));
    assert_eq!(drain(&mut cursor), "im");
}

#[test]
fn try_match_through_pushed_back_text() {
    let mut cursor = Cursor::new("PORTANT!");
    cursor.push_back("IM");
    let mut out = String::new();
    assert!(cursor.try_match_ignore_case("important", &mut out));
    assert_eq!(out, "IMPORTANT");
    assert_eq!(cursor.current(), '!');
}

// === Properties ===

proptest! {
    /// Consuming a prefix and pushing it back must replay the original
    /// character sequence exactly.
    #[test]
    fn push_back_round_trip(source in "[ -~]{0,40}", take in 0usize..40) {
        let mut cursor = Cursor::new(source.as_str());
        let mut consumed = String::new();
        for _ in 0..take.min(source.chars().count()) {
            consumed.push(cursor.current());
            cursor.advance();
        }
        if !consumed.is_empty() {
            cursor.push_back(&consumed);
        }
        prop_assert_eq!(drain(&mut cursor), source);
    }

    /// A failed match never changes what the cursor will hand out.
    #[test]
    fn failed_match_is_invisible(source in "[a-z]{1,20}") {
        let mut cursor = Cursor::new(source.as_str());
        let mut out = String::new();
        // 'url(' can never fully match a letters-only source.
        let matched = cursor.try_match_ignore_case("url(", &mut out);
        prop_assert!(!matched);
        prop_assert_eq!(drain(&mut cursor), source);
    }
}
