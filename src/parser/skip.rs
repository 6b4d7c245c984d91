//! Skipping of lines that carry no record: comments and macro definitions.

use tracing::trace;

use crate::lexer::{cursor::Cursor, lexer::peek_token, tokens::MACDEF};

/// Skips the current line when its first non-blank byte is `#`.
pub fn skip_comment(cursor: &mut Cursor) -> bool {
    if cursor.at() != Some(b'#') {
        return false;
    }

    trace!("Skipping comment at line {}", cursor.line());
    cursor.skip_line();
    true
}

/// Skips a `macdef` block.
///
/// The block ends at the first line whose very first byte is a newline. A
/// line holding only blanks does not end it. The cursor is left on the
/// terminating empty line, or at the end of the buffer.
pub fn skip_macdef(cursor: &mut Cursor) -> bool {
    match peek_token(cursor) {
        (Ok(token), ahead) if token.as_bytes() == MACDEF => {
            let start_line = cursor.line();
            *cursor = ahead;

            loop {
                cursor.skip_line();
                if cursor.at_eof() || cursor.at() == Some(b'\n') {
                    break;
                }
            }

            trace!("Skipped macdef on lines {}-{}", start_line, cursor.line());
            true
        }
        _ => false,
    }
}
