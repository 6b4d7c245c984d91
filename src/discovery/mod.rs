//! Locating and reading the credentials file.
//!
//! The search covers the home directory first and the system configuration
//! directory second, trying the `authinfo` name before the `netrc` one in
//! each. Reading loads the whole file into memory, bounded by a caller
//! supplied capacity.

pub mod discovery;
