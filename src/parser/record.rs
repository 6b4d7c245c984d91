use std::fmt::Display;

use crate::lexer::tokens::Token;

/// The record slots a keyword can fill.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Field {
    Host,
    Protocol,
    User,
    Password,
    Force,
}

/// The host of a record. `Default` is the match-any entry introduced by the
/// `default` keyword; a record without any host is never reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    Default,
    Named(Token),
}

impl Host {
    /// The host name, empty for the default entry.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Host::Default => b"",
            Host::Named(token) => token.as_bytes(),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Host::Default)
    }
}

impl Display for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Host::Default => write!(f, "default"),
            Host::Named(token) => write!(f, "{}", token),
        }
    }
}

/// One decoded entry.
///
/// Records handed to a handler are borrowed from the parser and are reset
/// when the next line starts; clone one to keep it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub host: Option<Host>,
    pub protocol: Option<Token>,
    pub user: Option<Token>,
    pub password: Option<Token>,
    pub force: bool,
}

impl Record {
    pub fn is_set(&self, field: Field) -> bool {
        match field {
            Field::Host => self.host.is_some(),
            Field::Protocol => self.protocol.is_some(),
            Field::User => self.user.is_some(),
            Field::Password => self.password.is_some(),
            Field::Force => self.force,
        }
    }

    /// Stores a value unless the field already holds one. Returns whether the
    /// value was stored.
    pub fn assign(&mut self, field: Field, token: Token) -> bool {
        if self.is_set(field) {
            return false;
        }

        match field {
            Field::Host => self.host = Some(Host::Named(token)),
            Field::Protocol => self.protocol = Some(token),
            Field::User => self.user = Some(token),
            Field::Password => self.password = Some(token),
            Field::Force => self.force = true,
        }
        true
    }

    pub fn is_default(&self) -> bool {
        self.host.is_some_and(|host| host.is_default())
    }
}

impl Record {
    /// Renders every field as `name=value`, with `-` for unset fields. The
    /// password is masked unless `show_password` is set.
    pub fn render(&self, show_password: bool) -> String {
        fn or_dash<T: Display>(value: &Option<T>) -> String {
            value.as_ref().map_or_else(|| String::from("-"), |v| v.to_string())
        }

        let password = match &self.password {
            Some(password) if show_password => password.to_string(),
            Some(_) => String::from("***"),
            None => String::from("-"),
        };

        format!(
            "host={} protocol={} user={} password={} force={}",
            or_dash(&self.host),
            or_dash(&self.protocol),
            or_dash(&self.user),
            password,
            if self.force { "yes" } else { "no" }
        )
    }
}

/// Renders the record with the password masked.
impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(false))
    }
}
