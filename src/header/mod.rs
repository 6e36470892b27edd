//! Parse one header field: `NAME ':' [OWS] VALUE [OWS] CR LF`.
//!
//! A request head holds any number of fields followed by an empty line. The
//! [`HeaderParser`] recognizes exactly one field; callers reset it between
//! fields and detect the empty line themselves.

mod state;

pub use state::State;

use bytes::Buf;
use log::trace;

use crate::limits::{self, Limits};
use crate::parser::{self, Grammar, Scanner, COLON, CR, HTAB, LF, SP};
use crate::{ParseError, Parser};

fn is_ows(byte: u8) -> bool {
    byte == SP || byte == HTAB
}

/// Strip trailing spaces and tabs.
///
/// Other whitespace, such as a line feed, is kept.
///
/// ```
/// use h1_head::trim_trailing_ows;
///
/// assert_eq!(trim_trailing_ows(b"text/html \t "), b"text/html");
/// assert_eq!(trim_trailing_ows(b" \t"), b"");
/// ```
pub fn trim_trailing_ows(value: &[u8]) -> &[u8] {
    match value.iter().rposition(|byte| !is_ows(*byte)) {
        Some(last) => &value[..=last],
        None => &[],
    }
}

/// Incremental parser for a single header field.
#[derive(Debug)]
pub struct HeaderParser {
    max_name_len: usize,
    max_value_len: usize,
    scanner: Scanner,
    state: State,
    name: Option<String>,
    value: Option<String>,
    /// Whitespace seen after the value filled up to its limit. It is only
    /// counted: either it trails and is trimmed, or the next byte overflows.
    overflow_ows: usize,
}

impl HeaderParser {
    /// Create a parser without length limits.
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Create a parser enforcing `limits.header_name()` and
    /// `limits.header_value()`.
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            max_name_len: limits.header_name(),
            max_value_len: limits.header_value(),
            scanner: Scanner::new(),
            state: State::ParsingName,
            name: None,
            value: None,
            overflow_ows: 0,
        }
    }

    /// The current stage.
    pub fn state(&self) -> State {
        self.state
    }

    /// Bytes consumed since construction or the last reset.
    pub fn offset(&self) -> usize {
        self.scanner.offset()
    }

    /// Bytes consumed over the parser's whole life, across resets.
    pub fn consumed(&self) -> u64 {
        self.scanner.consumed()
    }

    /// The field name, once the colon has been read.
    pub fn name(&self) -> Result<Option<&str>, ParseError> {
        parser::ensure_valid(self)?;
        Ok(self.name.as_deref())
    }

    /// The field value, without surrounding whitespace, once complete.
    pub fn value(&self) -> Result<Option<&str>, ParseError> {
        parser::ensure_valid(self)?;
        Ok(self.value.as_deref())
    }

    /// Name and value together, once the field is done.
    pub fn field(&self) -> Result<Option<(&str, &str)>, ParseError> {
        parser::ensure_valid(self)?;
        if !self.is_done() {
            return Ok(None);
        }
        Ok(self.name.as_deref().zip(self.value.as_deref()))
    }

    fn unexpected(&self, what: &str) -> ParseError {
        ParseError::malformed(
            self.scanner.offset(),
            format!("{} {}", what, self.state.describe()),
        )
    }

    fn value_too_long(&self) -> ParseError {
        ParseError::ValueTooLong {
            offset: self.scanner.offset(),
            limit: self.max_value_len,
        }
    }

    fn push_value(&mut self, byte: u8) -> Result<(), ParseError> {
        if self.overflow_ows > 0 {
            return Err(self.value_too_long());
        }
        let len = self.scanner.push(byte);
        if limits::exceeds(self.max_value_len, len) {
            return Err(self.value_too_long());
        }
        Ok(())
    }

    /// Interior whitespace is kept, but it only counts toward the limit once
    /// a later byte proves it is not trailing.
    fn hold_whitespace(&mut self, byte: u8) {
        let len = self.scanner.token().len() + 1;
        if limits::exceeds(self.max_value_len, len) {
            self.overflow_ows += 1;
        } else {
            self.scanner.push(byte);
        }
    }

    fn on_whitespace(&mut self, byte: u8) -> Result<(), ParseError> {
        match self.state {
            State::ParsingValue if self.scanner.is_empty() => Ok(()),
            State::ParsingValue => {
                self.hold_whitespace(byte);
                Ok(())
            }
            _ if byte == SP => Err(self.unexpected("unexpected space")),
            _ => Err(self.unexpected("unexpected tab")),
        }
    }

    fn on_colon(&mut self) -> Result<(), ParseError> {
        if self.state != State::ParsingName {
            return Err(self.unexpected("unexpected colon"));
        }
        if self.scanner.is_empty() {
            return Err(self.unexpected("empty header field name"));
        }

        self.name = Some(self.scanner.take_string("header field name")?);
        self.state = self.state.next();
        Ok(())
    }

    fn on_carriage_return(&mut self) -> Result<(), ParseError> {
        if self.state != State::ParsingValue {
            return Err(self.unexpected("unexpected carriage return"));
        }
        if self.scanner.is_empty() {
            return Err(self.unexpected("empty header field value"));
        }

        let value = parser::decode(
            trim_trailing_ows(self.scanner.token()),
            self.scanner.offset(),
            "header field value",
        )?;
        self.value = Some(value);
        self.scanner.clear();
        self.overflow_ows = 0;
        self.state = self.state.next();
        Ok(())
    }

    fn on_line_feed(&mut self) -> Result<(), ParseError> {
        if self.state != State::AwaitingLineFeed {
            return Err(self.unexpected("unexpected line feed"));
        }

        self.state = self.state.next();
        trace!("parsed header field {:?}: {:?}", self.name, self.value);
        Ok(())
    }

    fn on_token_byte(&mut self, byte: u8) -> Result<(), ParseError> {
        match self.state {
            State::ParsingName => {
                let len = self.scanner.push(byte);
                if limits::exceeds(self.max_name_len, len) {
                    return Err(ParseError::NameTooLong {
                        offset: self.scanner.offset(),
                        limit: self.max_name_len,
                    });
                }
                Ok(())
            }
            State::ParsingValue => self.push_value(byte),
            State::AwaitingLineFeed | State::Done | State::Error => {
                let what = format!("unexpected character '{}'", (byte as char).escape_default());
                Err(self.unexpected(&what))
            }
        }
    }
}

impl Default for HeaderParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Grammar for HeaderParser {
    const NAME: &'static str = "HeaderParser";

    fn scanner(&mut self) -> &mut Scanner {
        &mut self.scanner
    }

    fn latch(&mut self) {
        self.state = State::Error;
    }

    fn step(&mut self, byte: u8) -> Result<(), ParseError> {
        match byte {
            SP | HTAB => self.on_whitespace(byte),
            COLON => self.on_colon(),
            CR => self.on_carriage_return(),
            LF => self.on_line_feed(),
            _ => self.on_token_byte(byte),
        }
    }
}

impl Parser for HeaderParser {
    fn offer<B: Buf>(&mut self, buf: &mut B) -> Result<(), ParseError> {
        parser::drive(self, buf)
    }

    fn is_valid(&self) -> bool {
        self.state != State::Error
    }

    fn is_done(&self) -> bool {
        self.state == State::Done
    }

    fn reset(&mut self) {
        trace!("resetting {} from {:?}", Self::NAME, self.state);
        self.state = State::ParsingName;
        self.scanner.restart();
        self.name = None;
        self.value = None;
        self.overflow_ows = 0;
    }
}
