use std::{fmt::Display, io};

use thiserror::Error;

use crate::Position;

/// A malformed construct found while parsing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: Position,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: Position) -> Self {
        ParseError { kind, position }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match self.kind {
            ParseErrorKind::MissingHost => "MissingHost",
            ParseErrorKind::MissingValue => "MissingValue",
            ParseErrorKind::ValueTooLong => "ValueTooLong",
            ParseErrorKind::BadValue => "BadValue",
            ParseErrorKind::BadKeyword => "BadKeyword",
            ParseErrorKind::DuplicatedKeyword => "DuplicatedKeyword",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self.kind {
            ParseErrorKind::MissingHost => ErrorTip::Suggestion(String::from(
                "Add `machine <host>` or `default` to the entry",
            )),
            ParseErrorKind::MissingValue => ErrorTip::Suggestion(String::from(
                "Every keyword except `default` must be followed by a value on the same line",
            )),
            ParseErrorKind::ValueTooLong => ErrorTip::Suggestion(format!(
                "Values are limited to {} bytes",
                crate::lexer::tokens::TOKEN_LEN_MAX
            )),
            ParseErrorKind::BadValue => {
                ErrorTip::Suggestion(String::from("`force` only accepts the value `yes`"))
            }
            ParseErrorKind::BadKeyword => ErrorTip::None,
            ParseErrorKind::DuplicatedKeyword => ErrorTip::Suggestion(String::from(
                "The first value on the line is kept; remove the repeated keyword",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// The kinds of syntax error the parser reports. The discriminants are
/// stable and accepted by [`parse_strerror`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ParseErrorKind {
    #[error("host not specified")]
    MissingHost = 0,
    #[error("expected a value")]
    MissingValue = 1,
    #[error("value is too long")]
    ValueTooLong = 2,
    #[error("invalid value")]
    BadValue = 3,
    #[error("unknown keyword used")]
    BadKeyword = 4,
    #[error("duplicate or synonymous keyword")]
    DuplicatedKeyword = 5,
}

impl ParseErrorKind {
    pub const ALL: [ParseErrorKind; 6] = [
        ParseErrorKind::MissingHost,
        ParseErrorKind::MissingValue,
        ParseErrorKind::ValueTooLong,
        ParseErrorKind::BadValue,
        ParseErrorKind::BadKeyword,
        ParseErrorKind::DuplicatedKeyword,
    ];

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn message(self) -> &'static str {
        match self {
            ParseErrorKind::MissingHost => "Host not specified",
            ParseErrorKind::MissingValue => "Expected a value",
            ParseErrorKind::ValueTooLong => "Value is too long",
            ParseErrorKind::BadValue => "Invalid value",
            ParseErrorKind::BadKeyword => "Unknown keyword used",
            ParseErrorKind::DuplicatedKeyword => "Duplicate or synonymous keyword",
        }
    }
}

/// Converts a raw parse error code into a human-readable string.
pub fn parse_strerror(code: u32) -> &'static str {
    match ParseErrorKind::from_code(code) {
        Some(kind) => kind.message(),
        None => "Unknown",
    }
}

/// Outcome codes of the discovery and read steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ResultCode {
    Ok = 0,
    AccessDenied = 1,
    NotFound = 2,
    OutOfMemory = 3,
    TooBig = 4,
    Unknown = 5,
}

impl ResultCode {
    pub const ALL: [ResultCode; 6] = [
        ResultCode::Ok,
        ResultCode::AccessDenied,
        ResultCode::NotFound,
        ResultCode::OutOfMemory,
        ResultCode::TooBig,
        ResultCode::Unknown,
    ];

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn message(self) -> &'static str {
        match self {
            ResultCode::Ok => "Success",
            ResultCode::AccessDenied => "Permission denied",
            ResultCode::NotFound => "File or directory not found",
            ResultCode::OutOfMemory => "Could not allocate memory",
            ResultCode::TooBig => "Authinfo file is too big",
            ResultCode::Unknown => "Unknown error happened",
        }
    }
}

/// Converts a raw result code into a human-readable string.
pub fn strerror(code: u32) -> &'static str {
    match ResultCode::from_code(code) {
        Some(result) => result.message(),
        None => "Got unexpected status code",
    }
}

/// Failure of locating or reading a credentials file.
#[derive(Error, Debug)]
pub enum AuthinfoError {
    #[error("permission denied")]
    AccessDenied,
    #[error("file or directory not found")]
    NotFound,
    #[error("could not allocate memory")]
    OutOfMemory,
    #[error("authinfo file is too big (limit is {limit} bytes)")]
    TooBig { limit: usize },
    #[error("unknown error happened: {0}")]
    Unknown(#[source] io::Error),
}

impl AuthinfoError {
    pub fn code(&self) -> ResultCode {
        match self {
            AuthinfoError::AccessDenied => ResultCode::AccessDenied,
            AuthinfoError::NotFound => ResultCode::NotFound,
            AuthinfoError::OutOfMemory => ResultCode::OutOfMemory,
            AuthinfoError::TooBig { .. } => ResultCode::TooBig,
            AuthinfoError::Unknown(_) => ResultCode::Unknown,
        }
    }
}

impl From<io::Error> for AuthinfoError {
    fn from(error: io::Error) -> Self {
        match error.raw_os_error() {
            Some(libc::EACCES) => return AuthinfoError::AccessDenied,
            Some(libc::ENOENT) | Some(libc::ENOTDIR) | Some(libc::ELOOP) => {
                return AuthinfoError::NotFound
            }
            Some(libc::ENOMEM) => return AuthinfoError::OutOfMemory,
            _ => {}
        }

        match error.kind() {
            io::ErrorKind::PermissionDenied => AuthinfoError::AccessDenied,
            io::ErrorKind::NotFound => AuthinfoError::NotFound,
            io::ErrorKind::OutOfMemory => AuthinfoError::OutOfMemory,
            _ => AuthinfoError::Unknown(error),
        }
    }
}
