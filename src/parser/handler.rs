use crate::errors::errors::ParseError;

use super::record::Record;

/// What a handler asks the parser to do after it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    Continue,
    Stop,
}

impl Control {
    pub fn is_stop(self) -> bool {
        self == Control::Stop
    }
}

/// `true` means stop.
impl From<bool> for Control {
    fn from(stop: bool) -> Self {
        if stop {
            Control::Stop
        } else {
            Control::Continue
        }
    }
}

/// Receives the parser's output in document order.
///
/// Calls are sequential and each record or error is delivered once. The
/// parser checks the returned [`Control`] right after every call and returns
/// without reading further when it is [`Control::Stop`].
pub trait ParseHandler {
    fn record(&mut self, record: &Record) -> Control;
    fn error(&mut self, error: ParseError) -> Control;
}

/// Adapts a pair of closures to [`ParseHandler`].
pub struct FnHandler<R, E> {
    pub on_record: R,
    pub on_error: E,
}

impl<R, E> ParseHandler for FnHandler<R, E>
where
    R: FnMut(&Record) -> Control,
    E: FnMut(ParseError) -> Control,
{
    fn record(&mut self, record: &Record) -> Control {
        (self.on_record)(record)
    }

    fn error(&mut self, error: ParseError) -> Control {
        (self.on_error)(error)
    }
}

/// Everything a lenient parse produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    pub records: Vec<Record>,
    pub errors: Vec<ParseError>,
}

impl ParseHandler for Parsed {
    fn record(&mut self, record: &Record) -> Control {
        self.records.push(record.clone());
        Control::Continue
    }

    fn error(&mut self, error: ParseError) -> Control {
        self.errors.push(error);
        Control::Continue
    }
}
