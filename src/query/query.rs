use tracing::debug;

use crate::{
    errors::errors::ParseError,
    lexer::tokens::Token,
    parser::{
        handler::{Control, FnHandler},
        parser::parse_with,
        record::{Host, Record},
    },
};

/// Looks up the first record that applies to a host, user and protocol.
///
/// An unset criterion matches anything. A record without a user or protocol
/// matches any requested user or protocol, and the `default` entry matches
/// any host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub host: Option<String>,
    pub user: Option<String>,
    pub protocol: Option<String>,
}

impl Query {
    pub fn new() -> Self {
        Query::default()
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        let host_matches = match (&self.host, &record.host) {
            (None, _) | (_, Some(Host::Default)) => true,
            (Some(wanted), Some(Host::Named(token))) => token.as_bytes() == wanted.as_bytes(),
            (Some(_), None) => false,
        };

        host_matches
            && optional_matches(&self.user, &record.user)
            && optional_matches(&self.protocol, &record.protocol)
    }

    /// Returns the first matching record, or the first syntax error found
    /// before one.
    pub fn find(&self, text: &[u8]) -> Result<Option<Record>, ParseError> {
        let mut found = None;
        let mut failure = None;

        let mut handler = FnHandler {
            on_record: |record: &Record| {
                if self.matches(record) {
                    found = Some(record.clone());
                    return Control::Stop;
                }
                Control::Continue
            },
            on_error: |error: ParseError| {
                failure = Some(error);
                Control::Stop
            },
        };
        parse_with(text, &mut handler);

        match failure {
            Some(error) => Err(error),
            None => Ok(found),
        }
    }

    /// Like [`Query::find`], but skips over syntax errors.
    pub fn find_lenient(&self, text: &[u8]) -> Option<Record> {
        let mut found = None;

        let mut handler = FnHandler {
            on_record: |record: &Record| {
                if self.matches(record) {
                    found = Some(record.clone());
                    return Control::Stop;
                }
                Control::Continue
            },
            on_error: |error: ParseError| {
                debug!("Ignoring {}", error);
                Control::Continue
            },
        };
        parse_with(text, &mut handler);

        found
    }
}

fn optional_matches(wanted: &Option<String>, value: &Option<Token>) -> bool {
    match (wanted, value) {
        (Some(wanted), Some(value)) => value.as_bytes() == wanted.as_bytes(),
        _ => true,
    }
}
