//! Error types for both halves of the crate.
//!
//! - Syntax errors reported by the parser ([`errors::ParseErrorKind`],
//!   [`errors::ParseError`]). None of them abort a parse on their own.
//! - Discovery and I/O failures ([`errors::AuthinfoError`]), which are fatal
//!   to the step that produced them.
//! - Code to string conversions that accept raw numeric codes and never fail.

pub mod errors;
