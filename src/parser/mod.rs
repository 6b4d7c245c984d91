//! Parser module for decoding authinfo records.
//!
//! This module contains the state machine that turns a text buffer into
//! records. It walks the buffer once, line by line, and hands every decoded
//! record and every syntax error to a caller supplied handler as soon as it
//! is found:
//!
//! - Record assembly and keyword legality (`parser`)
//! - Comment and macro definition skipping (`skip`)
//! - The record data model (`record`)
//! - The handler interface and early termination (`handler`)

pub mod handler;
pub mod parser;
pub mod record;
pub mod skip;
