//! Unit tests for the lexer module.
//!
//! This module contains tests for the cursor and the tokenizer including:
//! - Whitespace skipping and column tracking
//! - Line and buffer end detection
//! - Token length limits
//! - Keyword lookup

use super::{
    cursor::Cursor,
    lexer::{next_token, peek_token},
    tokens::{Keyword, Token, TokenError, TOKEN_LEN_MAX},
};
use crate::Position;

#[test]
fn test_cursor_starts_at_line_one() {
    let cursor = Cursor::new(b"machine foo\n");

    assert_eq!(cursor.position(), Position::new(1, 0));
    assert_eq!(cursor.at(), Some(b'm'));
}

#[test]
fn test_skip_spaces_counts_columns() {
    let mut cursor = Cursor::new(b" \t  login");
    cursor.skip_spaces();

    assert_eq!(cursor.column(), 4);
    assert_eq!(cursor.at(), Some(b'l'));
}

#[test]
fn test_skip_spaces_stops_at_newline() {
    let mut cursor = Cursor::new(b"   \nnext");
    cursor.skip_spaces();

    assert_eq!(cursor.column(), 3);
    assert!(cursor.at_eol());
    assert!(!cursor.at_eof());
}

#[test]
fn test_eol_at_end_of_buffer() {
    let mut cursor = Cursor::new(b"x");
    cursor.advance_n(1);

    assert!(cursor.at_eol());
    assert!(cursor.at_eof());
}

#[test]
fn test_skip_line_resets_column() {
    let mut cursor = Cursor::new(b"machine foo\nlogin bar\n");
    cursor.advance_n(7);
    cursor.skip_line();

    assert_eq!(cursor.position(), Position::new(2, 0));
    assert_eq!(cursor.at(), Some(b'l'));
}

#[test]
fn test_skip_line_without_terminator() {
    let mut cursor = Cursor::new(b"machine foo");
    cursor.skip_line();

    assert_eq!(cursor.line(), 2);
    assert!(cursor.at_eof());
}

#[test]
fn test_nul_ends_buffer() {
    let mut cursor = Cursor::new(b"machine\0 foo\n");
    cursor.advance_n(7);

    assert!(cursor.at_eof());
    assert_eq!(cursor.remainder(), b"");
}

#[test]
fn test_next_token() {
    let mut cursor = Cursor::new(b"machine foo.example");

    let token = next_token(&mut cursor).unwrap();
    assert_eq!(token, "machine");
    assert_eq!(cursor.column(), 7);

    cursor.skip_spaces();
    let token = next_token(&mut cursor).unwrap();
    assert_eq!(token, "foo.example");
    assert_eq!(cursor.column(), 19);
    assert!(cursor.at_eof());
}

#[test]
fn test_token_stops_at_tab_and_newline() {
    let mut cursor = Cursor::new(b"a\tb\nc");

    assert_eq!(next_token(&mut cursor).unwrap(), "a");
    cursor.skip_spaces();
    assert_eq!(next_token(&mut cursor).unwrap(), "b");
    assert!(cursor.at_eol());
}

#[test]
fn test_quotes_do_not_group() {
    let mut cursor = Cursor::new(br#""my secret""#);

    assert_eq!(next_token(&mut cursor).unwrap(), "\"my");
    cursor.skip_spaces();
    assert_eq!(next_token(&mut cursor).unwrap(), "secret\"");
}

#[test]
fn test_longest_token_is_accepted() {
    let text = vec![b'x'; TOKEN_LEN_MAX];
    let mut cursor = Cursor::new(&text);

    let token = next_token(&mut cursor).unwrap();
    assert_eq!(token.len(), TOKEN_LEN_MAX);
    assert_eq!(token.as_bytes(), &text[..]);
}

#[test]
fn test_too_long_token_is_consumed() {
    let mut text = vec![b'x'; TOKEN_LEN_MAX + 1];
    text.extend_from_slice(b" next");
    let mut cursor = Cursor::new(&text);

    assert_eq!(
        next_token(&mut cursor),
        Err(TokenError::TooLong {
            length: TOKEN_LEN_MAX + 1
        })
    );
    assert_eq!(cursor.column(), (TOKEN_LEN_MAX + 1) as u32);

    cursor.skip_spaces();
    assert_eq!(next_token(&mut cursor).unwrap(), "next");
}

#[test]
fn test_empty_token() {
    let mut cursor = Cursor::new(b"\n");

    assert_eq!(next_token(&mut cursor), Err(TokenError::Empty));
    assert_eq!(cursor.column(), 0);
}

#[test]
fn test_raw_bytes_are_kept() {
    let mut cursor = Cursor::new(b"p\xffss word");

    let token = next_token(&mut cursor).unwrap();
    assert_eq!(token.as_bytes(), b"p\xffss");
    assert_eq!(token.as_str(), None);
}

#[test]
fn test_peek_token_leaves_cursor() {
    let cursor = Cursor::new(b"macdef init\n");

    let (token, ahead) = peek_token(&cursor);
    assert_eq!(token.unwrap(), "macdef");
    assert_eq!(ahead.column(), 6);
    assert_eq!(cursor.column(), 0);
}

#[test]
fn test_keyword_lookup() {
    let cases = [
        ("default", Some(Keyword::Default)),
        ("machine", Some(Keyword::Machine)),
        ("host", Some(Keyword::Machine)),
        ("login", Some(Keyword::Login)),
        ("user", Some(Keyword::Login)),
        ("account", Some(Keyword::Login)),
        ("password", Some(Keyword::Password)),
        ("force", Some(Keyword::Force)),
        ("port", Some(Keyword::Port)),
        ("protocol", Some(Keyword::Port)),
        ("macdef", None),
        ("Machine", None),
        ("passwd", None),
    ];

    for (text, expected) in cases {
        let token = Token::new(text.as_bytes()).unwrap();
        assert_eq!(Keyword::lookup(&token), expected, "keyword {}", text);
    }
}

#[test]
fn test_token_new_rejects_overflow() {
    let bytes = vec![b'a'; 200];

    assert_eq!(Token::new(&bytes), Err(TokenError::TooLong { length: 200 }));
    assert!(Token::new(b"").unwrap().is_empty());
}
