use lazy_static::lazy_static;
use regex::bytes::Regex;
use tracing::trace;

use super::{
    cursor::Cursor,
    tokens::{Token, TokenError},
};

lazy_static! {
    // Quotes are ordinary bytes: a quoted value containing whitespace is split.
    static ref TOKEN: Regex = Regex::new(r"(?-u)^[^ \t\n]*").unwrap();
}

/// Reads the token under the cursor.
///
/// The cursor must already be past any leading whitespace. It is moved past
/// the whole run of non-blank bytes even when the run is too long to be kept,
/// so a rejected token is still consumed.
pub fn next_token(cursor: &mut Cursor) -> Result<Token, TokenError> {
    let length = TOKEN.find(cursor.remainder()).map_or(0, |m| m.end());
    let result = Token::new(&cursor.remainder()[..length]);

    cursor.advance_n(length);

    if length == 0 {
        return Err(TokenError::Empty);
    }

    match &result {
        Ok(token) => trace!("Read {} byte token ending at {}", token.len(), cursor.position()),
        Err(error) => trace!("Rejected token ending at {}: {}", cursor.position(), error),
    }

    result
}

/// Reads the token under the cursor without moving it. Returns the token
/// together with a cursor positioned right after it.
pub fn peek_token<'a>(cursor: &Cursor<'a>) -> (Result<Token, TokenError>, Cursor<'a>) {
    let mut ahead = *cursor;
    let token = next_token(&mut ahead);
    (token, ahead)
}
