//! Parse the request line: `METHOD SP TARGET SP VERSION CR LF`.

mod state;

pub use state::State;

use bytes::Buf;
use log::trace;

use crate::limits::{self, Limits};
use crate::parser::{self, Grammar, Scanner, CR, LF, SP};
use crate::{Method, ParseError, Parser, Version};

/// Incremental parser for the first line of a request.
///
/// One instance is meant to be kept per connection and [`reset`](Parser::reset)
/// between requests; the token buffer is reused.
#[derive(Debug)]
pub struct RequestLineParser {
    max_target_len: usize,
    scanner: Scanner,
    state: State,
    method: Option<Method>,
    target: Option<String>,
    version: Option<Version>,
}

impl RequestLineParser {
    /// Create a parser without a request target limit.
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Create a parser enforcing `limits.request_target()`.
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            max_target_len: limits.request_target(),
            scanner: Scanner::new(),
            state: State::ParsingMethod,
            method: None,
            target: None,
            version: None,
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

    /// The request method, once the method token is complete.
    pub fn method(&self) -> Result<Option<Method>, ParseError> {
        parser::ensure_valid(self)?;
        Ok(self.method)
    }

    /// The request target, once it is complete.
    pub fn target(&self) -> Result<Option<&str>, ParseError> {
        parser::ensure_valid(self)?;
        Ok(self.target.as_deref())
    }

    /// The protocol version, once it is complete.
    pub fn version(&self) -> Result<Option<Version>, ParseError> {
        parser::ensure_valid(self)?;
        Ok(self.version)
    }

    fn unexpected(&self, what: &str) -> ParseError {
        ParseError::malformed(
            self.scanner.offset(),
            format!("{} {}", what, self.state.describe()),
        )
    }

    fn unsupported_method(&self) -> ParseError {
        ParseError::UnsupportedMethod {
            offset: self.scanner.offset(),
            method: self.scanner.lossy(),
        }
    }

    fn unsupported_version(&self) -> ParseError {
        ParseError::UnsupportedVersion {
            offset: self.scanner.offset(),
            version: self.scanner.lossy(),
        }
    }

    fn on_space(&mut self) -> Result<(), ParseError> {
        match self.state {
            State::ParsingMethod => {
                if self.scanner.is_empty() {
                    return Err(self.unexpected("empty method"));
                }
                let method = Method::from_bytes(self.scanner.token())
                    .ok_or_else(|| self.unsupported_method())?;
                self.method = Some(method);
                self.scanner.clear();
            }
            State::ParsingTarget => {
                if self.scanner.is_empty() {
                    return Err(self.unexpected("empty request target"));
                }
                self.target = Some(self.scanner.take_string("request target")?);
            }
            _ => return Err(self.unexpected("unexpected space")),
        }

        self.state = self.state.next();
        Ok(())
    }

    fn on_carriage_return(&mut self) -> Result<(), ParseError> {
        if self.state != State::ParsingVersion {
            return Err(self.unexpected("unexpected carriage return"));
        }

        let version =
            Version::from_bytes(self.scanner.token()).ok_or_else(|| self.unsupported_version())?;
        self.version = Some(version);
        self.scanner.clear();
        self.state = self.state.next();
        Ok(())
    }

    fn on_line_feed(&mut self) -> Result<(), ParseError> {
        if self.state != State::AwaitingLineFeed {
            return Err(self.unexpected("unexpected line feed"));
        }

        self.state = self.state.next();
        trace!(
            "parsed request line {:?} {:?} {:?}",
            self.method,
            self.target,
            self.version
        );
        Ok(())
    }

    fn on_token_byte(&mut self, byte: u8) -> Result<(), ParseError> {
        match self.state {
            State::ParsingMethod => {
                if self.scanner.push(byte) > Method::MAX_LEN {
                    return Err(self.unsupported_method());
                }
            }
            State::ParsingTarget => {
                let len = self.scanner.push(byte);
                if limits::exceeds(self.max_target_len, len) {
                    return Err(ParseError::TargetTooLong {
                        offset: self.scanner.offset(),
                        limit: self.max_target_len,
                    });
                }
            }
            State::ParsingVersion => {
                if self.scanner.push(byte) > Version::MAX_LEN {
                    return Err(self.unsupported_version());
                }
            }
            State::AwaitingLineFeed | State::Done | State::Error => {
                let what = format!("unexpected character '{}'", (byte as char).escape_default());
                return Err(self.unexpected(&what));
            }
        }
        Ok(())
    }
}

impl Default for RequestLineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Grammar for RequestLineParser {
    const NAME: &'static str = "RequestLineParser";

    fn scanner(&mut self) -> &mut Scanner {
        &mut self.scanner
    }

    fn latch(&mut self) {
        self.state = State::Error;
    }

    fn step(&mut self, byte: u8) -> Result<(), ParseError> {
        match byte {
            SP => self.on_space(),
            CR => self.on_carriage_return(),
            LF => self.on_line_feed(),
            _ => self.on_token_byte(byte),
        }
    }
}

impl Parser for RequestLineParser {
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
        self.state = State::ParsingMethod;
        self.scanner.restart();
        self.method = None;
        self.target = None;
        self.version = None;
    }
}
