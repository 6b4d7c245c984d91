#![allow(clippy::module_inception)]

//! Parser for credential files in the `authinfo`/`netrc` format.
//!
//! The heart of the crate is [`parser::parser::parse`], a single-pass state
//! machine that walks an in-memory buffer and reports one decoded
//! [`parser::record::Record`] (or one [`errors::errors::ParseError`]) at a time
//! to caller supplied handlers. Locating and reading the file lives in
//! [`discovery`], and [`query`] builds host lookups on top of the parser.

use std::fmt::Display;

use crate::errors::errors::ParseError;

pub mod discovery;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod query;

extern crate regex;

/// A location in the parsed text: 1-based line, 0-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the given 1-based line, without its terminator.
pub fn get_line_at_position(text: &[u8], line: u32) -> Option<String> {
    if line == 0 {
        return None;
    }

    text.split(|b| *b == b'\n')
        .nth(line as usize - 1)
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
}


/// Renders a syntax error against the text it was found in.
///
/// ```text
/// Error: Expected a value (MissingValue)
/// -> .authinfo:2:17
///   |
/// 2 | machine b login
///   | ---------------^
/// ```
pub fn render_error(error: &ParseError, text: &[u8], file: &str) -> String {
    let position = error.get_position();
    let line_text = get_line_at_position(text, position.line).unwrap_or_default();

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    out.push_str(&format!(
        "Error: {} ({})\n",
        error.kind.message(),
        error.get_error_name()
    ));
    out.push_str(&format!("-> {}:{}\n", file, position));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
