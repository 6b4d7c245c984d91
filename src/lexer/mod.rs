//! Lexical analysis for authinfo text.
//!
//! This module contains the pieces the parser drives to walk a buffer:
//!
//! - [`cursor::Cursor`], which advances over the text while tracking line and
//!   column for diagnostics
//! - [`lexer::next_token`], which cuts whitespace-delimited tokens into a
//!   bounded buffer
//! - the keyword table and the bounded [`tokens::Token`] type

pub mod cursor;
pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
