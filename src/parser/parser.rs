//! The record state machine.
//!
//! One [`Parser`] walks one buffer. Every loop iteration skips blanks, then
//! either handles a line end or consumes exactly one token (or one skipped
//! line) according to the current [`ParseState`]. Malformed input is reported
//! and parsing resumes at the next keyword, the next line, or the end of a
//! macro block. Only the handler can stop a parse early.

use std::fmt::Display;

use tracing::trace;

use crate::{
    errors::errors::{ParseError, ParseErrorKind},
    lexer::{
        cursor::Cursor,
        lexer::next_token,
        tokens::{Keyword, TokenError, FORCE_YES},
    },
    Position,
};

use super::{
    handler::{Control, FnHandler, ParseHandler, Parsed},
    record::{Field, Host, Record},
    skip::{skip_comment, skip_macdef},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    #[default]
    LineStart,
    WaitingNextPair,
    WaitingHost,
    WaitingProtocol,
    WaitingUser,
    WaitingPassword,
    WaitingForce,
    LineEnd,
}

impl ParseState {
    fn waiting_for(field: Field) -> ParseState {
        match field {
            Field::Host => ParseState::WaitingHost,
            Field::Protocol => ParseState::WaitingProtocol,
            Field::User => ParseState::WaitingUser,
            Field::Password => ParseState::WaitingPassword,
            Field::Force => ParseState::WaitingForce,
        }
    }
}

impl Display for ParseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ParseState::LineStart => "LINE_START",
            ParseState::WaitingNextPair => "WAITING_NEXT_PAIR",
            ParseState::WaitingHost => "WAITING_HOST",
            ParseState::WaitingProtocol => "WAITING_PROTOCOL",
            ParseState::WaitingUser => "WAITING_USER",
            ParseState::WaitingPassword => "WAITING_PASSWORD",
            ParseState::WaitingForce => "WAITING_FORCE",
            ParseState::LineEnd => "LINE_END",
        };
        write!(f, "{}", name)
    }
}

/// The field a value keyword fills. `default` fills the host directly and
/// has no value of its own.
fn keyword_field(keyword: Keyword) -> Option<Field> {
    match keyword {
        Keyword::Default => None,
        Keyword::Machine => Some(Field::Host),
        Keyword::Login => Some(Field::User),
        Keyword::Password => Some(Field::Password),
        Keyword::Force => Some(Field::Force),
        Keyword::Port => Some(Field::Protocol),
    }
}

/// Parsing state for one buffer: the cursor, the current state and the
/// record being assembled for the current line.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    state: ParseState,
    record: Record,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Parser {
            cursor: Cursor::new(text),
            state: ParseState::LineStart,
            record: Record::default(),
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Runs until the end of the buffer or until the handler asks to stop.
    pub fn run<H: ParseHandler + ?Sized>(&mut self, handler: &mut H) {
        while let Control::Continue = self.step(handler) {}
    }

    fn step<H: ParseHandler + ?Sized>(&mut self, handler: &mut H) -> Control {
        self.cursor.skip_spaces();
        let token_position = self.cursor.position();

        trace!("State: {} at {}", self.state, token_position);

        if self.cursor.at_eol() {
            trace!("Encountered EOL at {}", token_position);

            match self.state {
                ParseState::LineStart => {
                    if self.cursor.at_eof() {
                        trace!("Encountered EOF at {}", token_position);
                        return Control::Stop;
                    }

                    trace!("Skipping empty line {}", token_position.line);
                    self.cursor.skip_line();
                    return Control::Continue;
                }
                ParseState::WaitingNextPair | ParseState::LineEnd => {
                    self.state = ParseState::LineEnd;
                }
                _ => {
                    self.state = ParseState::LineEnd;
                    if self
                        .report_error(handler, ParseErrorKind::MissingValue, token_position)
                        .is_stop()
                    {
                        return Control::Stop;
                    }
                }
            }
        }

        match self.state {
            ParseState::LineStart => {
                self.start_line();
                Control::Continue
            }
            ParseState::LineEnd => self.finish_line(handler),
            ParseState::WaitingNextPair => self.read_keyword(handler, token_position),
            ParseState::WaitingHost => self.read_value(handler, Field::Host, token_position),
            ParseState::WaitingProtocol => {
                self.read_value(handler, Field::Protocol, token_position)
            }
            ParseState::WaitingUser => self.read_value(handler, Field::User, token_position),
            ParseState::WaitingPassword => {
                self.read_value(handler, Field::Password, token_position)
            }
            ParseState::WaitingForce => self.read_value(handler, Field::Force, token_position),
        }
    }

    fn start_line(&mut self) {
        self.record = Record::default();

        if !skip_comment(&mut self.cursor) && !skip_macdef(&mut self.cursor) {
            self.state = ParseState::WaitingNextPair;
        }
    }

    fn finish_line<H: ParseHandler + ?Sized>(&mut self, handler: &mut H) -> Control {
        let line_start = Position::new(self.cursor.line(), 0);

        let control = if self.record.host.is_some() {
            self.report_record(handler)
        } else {
            self.report_error(handler, ParseErrorKind::MissingHost, line_start)
        };

        self.cursor.skip_line();
        self.state = ParseState::LineStart;
        control
    }

    fn read_keyword<H: ParseHandler + ?Sized>(
        &mut self,
        handler: &mut H,
        token_position: Position,
    ) -> Control {
        let keyword = match next_token(&mut self.cursor) {
            Ok(token) => match Keyword::lookup(&token) {
                Some(keyword) => keyword,
                None => {
                    trace!("Unknown {} byte keyword at {}", token.len(), token_position);
                    return self.report_error(handler, ParseErrorKind::BadKeyword, token_position);
                }
            },
            Err(_) => {
                return self.report_error(handler, ParseErrorKind::BadKeyword, token_position)
            }
        };

        let duplicate = match keyword_field(keyword) {
            Some(field) => {
                self.state = ParseState::waiting_for(field);
                self.record.is_set(field)
            }
            None => {
                let duplicate = self.record.host.is_some();
                self.record.host.get_or_insert(Host::Default);
                duplicate
            }
        };

        if duplicate {
            return self.report_error(handler, ParseErrorKind::DuplicatedKeyword, token_position);
        }

        Control::Continue
    }

    fn read_value<H: ParseHandler + ?Sized>(
        &mut self,
        handler: &mut H,
        field: Field,
        token_position: Position,
    ) -> Control {
        self.state = ParseState::WaitingNextPair;

        let token = match next_token(&mut self.cursor) {
            Ok(token) => token,
            Err(TokenError::TooLong { .. }) => {
                return self.report_error(handler, ParseErrorKind::ValueTooLong, token_position)
            }
            Err(TokenError::Empty) => {
                return self.report_error(handler, ParseErrorKind::MissingValue, token_position)
            }
        };

        if field == Field::Force {
            if token.as_bytes() != FORCE_YES {
                return self.report_error(handler, ParseErrorKind::BadValue, token_position);
            }
            self.record.force = true;
        } else if self.record.assign(field, token) {
            if field == Field::Password {
                trace!("Set {:?} to *** at {}", field, token_position);
            } else {
                trace!("Set {:?} to {} at {}", field, token, token_position);
            }
        }

        Control::Continue
    }

    fn report_record<H: ParseHandler + ?Sized>(&self, handler: &mut H) -> Control {
        let control = handler.record(&self.record);
        trace!(
            "Reported an entry: {} => {}",
            self.record,
            if control.is_stop() { "stopping" } else { "continuing" }
        );
        control
    }

    fn report_error<H: ParseHandler + ?Sized>(
        &self,
        handler: &mut H,
        kind: ParseErrorKind,
        position: Position,
    ) -> Control {
        let control = handler.error(ParseError::new(kind, position));
        trace!(
            "Reported an error: {} ({}) => {}",
            kind.message(),
            position,
            if control.is_stop() { "stopping" } else { "continuing" }
        );
        control
    }
}

/// Parses `text`, calling `on_record` for every complete record and
/// `on_error` for every malformed construct. Either closure stops the parse
/// by returning [`Control::Stop`].
pub fn parse<R, E>(text: &[u8], on_record: R, on_error: E)
where
    R: FnMut(&Record) -> Control,
    E: FnMut(ParseError) -> Control,
{
    let mut handler = FnHandler {
        on_record,
        on_error,
    };
    parse_with(text, &mut handler);
}

pub fn parse_with<H: ParseHandler + ?Sized>(text: &[u8], handler: &mut H) {
    Parser::new(text).run(handler);
}

/// Parses the whole buffer and keeps copies of all records and errors.
pub fn collect(text: &[u8]) -> Parsed {
    let mut parsed = Parsed::default();
    parse_with(text, &mut parsed);
    parsed
}
