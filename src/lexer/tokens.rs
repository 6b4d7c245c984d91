use lazy_static::lazy_static;
use std::{borrow::Cow, collections::HashMap, fmt::Display};

use thiserror::Error;

/// Size of a token buffer, counting the slot the terminator used to occupy.
pub const TOKEN_SIZE_MAX: usize = 128;
/// Longest accepted token, in bytes.
pub const TOKEN_LEN_MAX: usize = TOKEN_SIZE_MAX - 1;

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static [u8], Keyword> = {
        let mut map: HashMap<&'static [u8], Keyword> = HashMap::new();
        map.insert(b"default", Keyword::Default);
        map.insert(b"machine", Keyword::Machine);
        map.insert(b"host", Keyword::Machine);
        map.insert(b"login", Keyword::Login);
        map.insert(b"user", Keyword::Login);
        map.insert(b"account", Keyword::Login);
        map.insert(b"password", Keyword::Password);
        map.insert(b"force", Keyword::Force);
        map.insert(b"port", Keyword::Port);
        map.insert(b"protocol", Keyword::Port);
        map
    };
}

/// Keyword that starts a macro definition block.
pub const MACDEF: &[u8] = b"macdef";
/// The only value `force` accepts.
pub const FORCE_YES: &[u8] = b"yes";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Default,
    /// `machine` or `host`
    Machine,
    /// `login`, `user` or `account`
    Login,
    Password,
    Force,
    /// `port` or `protocol`
    Port,
}

impl Keyword {
    pub fn lookup(token: &Token) -> Option<Keyword> {
        KEYWORD_LOOKUP.get(token.as_bytes()).copied()
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Keyword::Default => "default",
            Keyword::Machine => "machine",
            Keyword::Login => "login",
            Keyword::Password => "password",
            Keyword::Force => "force",
            Keyword::Port => "port",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("token of {length} bytes exceeds the 127 byte limit")]
    TooLong { length: usize },
    #[error("no token before the end of the line")]
    Empty,
}

/// A token stored inline in a fixed-size buffer.
///
/// Construction fails instead of truncating when the input does not fit.
#[derive(Clone, Copy)]
pub struct Token {
    bytes: [u8; TOKEN_LEN_MAX],
    len: u8,
}

impl Token {
    pub fn new(bytes: &[u8]) -> Result<Token, TokenError> {
        if bytes.len() > TOKEN_LEN_MAX {
            return Err(TokenError::TooLong {
                length: bytes.len(),
            });
        }

        let mut token = Token::empty();
        token.bytes[..bytes.len()].copy_from_slice(bytes);
        token.len = bytes.len() as u8;
        Ok(token)
    }

    pub fn empty() -> Token {
        Token {
            bytes: [0; TOKEN_LEN_MAX],
            len: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// The token as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Token {
    fn default() -> Self {
        Token::empty()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Token {}

impl PartialEq<[u8]> for Token {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl AsRef<[u8]> for Token {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({:?})", self.to_string_lossy())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}
