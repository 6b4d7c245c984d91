//! Credential lookup on top of the parser.

pub mod query;

#[cfg(test)]
mod tests;
