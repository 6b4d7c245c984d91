//! Read cursor over the text buffer.
//!
//! The cursor never consumes a line terminator except through
//! [`Cursor::skip_line`], which is also the only place the line counter
//! moves. A NUL byte ends the buffer just like the end of the slice does.

use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::Position;

lazy_static! {
    static ref SPACES: Regex = Regex::new(r"^[ \t]*").unwrap();
}

#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a [u8],
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a [u8]) -> Cursor<'a> {
        let text = match text.iter().position(|b| *b == 0) {
            Some(end) => &text[..end],
            None => text,
        };

        Cursor {
            text,
            pos: 0,
            line: 1,
            column: 0,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// The byte under the cursor, `None` at the end of the buffer.
    pub fn at(&self) -> Option<u8> {
        self.text.get(self.pos).copied()
    }

    pub fn remainder(&self) -> &'a [u8] {
        &self.text[self.pos..]
    }

    /// Moves forward within the current line.
    pub fn advance_n(&mut self, n: usize) {
        let n = n.min(self.text.len() - self.pos);
        self.pos += n;
        self.column += n as u32;
    }

    pub fn skip_spaces(&mut self) {
        let span = SPACES.find(self.remainder()).map_or(0, |m| m.end());
        self.advance_n(span);
    }

    /// True on a line terminator or at the end of the buffer.
    pub fn at_eol(&self) -> bool {
        matches!(self.at(), None | Some(b'\n'))
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Moves past the rest of the current line, terminator included.
    pub fn skip_line(&mut self) {
        let span = self
            .remainder()
            .iter()
            .position(|b| *b == b'\n')
            .map_or(self.text.len() - self.pos, |n| n + 1);

        self.pos += span;
        self.line += 1;
        self.column = 0;
    }
}
