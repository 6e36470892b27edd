//! The contract shared by both parsers, and the bookkeeping they have in common.

use bytes::{Buf, BufMut, BytesMut};
use log::debug;

use crate::ParseError;

/// Initial accumulator capacity; retained across resets.
const TOKEN_CAPACITY: usize = 256;

pub(crate) const SP: u8 = b' ';
pub(crate) const HTAB: u8 = b'\t';
pub(crate) const CR: u8 = b'\r';
pub(crate) const LF: u8 = b'\n';
pub(crate) const COLON: u8 = b':';

/// An incremental parser for one grammar unit of an HTTP/1.x request head.
///
/// Bytes may arrive split at any point. Each call to [`offer`](Parser::offer)
/// consumes what it can and returns as soon as either the grammar unit is
/// complete or the buffer runs dry; the next call resumes where the last one
/// stopped.
///
/// # Example
///
/// ```
/// use h1_head::{Parser, RequestLineParser};
///
/// let mut parser = RequestLineParser::new();
///
/// let mut first: &[u8] = b"GET /ind";
/// parser.offer(&mut first)?;
/// assert!(!parser.is_done());
///
/// let mut second: &[u8] = b"ex.html HTTP/1.1\r\nHost: example.com\r\n";
/// parser.offer(&mut second)?;
/// assert!(parser.is_done());
/// assert_eq!(parser.target()?, Some("/index.html"));
///
/// // the header block is left for the next parser
/// assert_eq!(second, &b"Host: example.com\r\n"[..]);
/// # Ok::<(), h1_head::ParseError>(())
/// ```
pub trait Parser {
    /// Consume bytes from the front of `buf` until the grammar unit is
    /// complete or `buf` is exhausted.
    ///
    /// Bytes after a completed unit stay in `buf`. Offering to a parser that
    /// is already done consumes nothing. Offering to a parser in its error
    /// state fails with [`ParseError::InvalidParser`] and consumes nothing.
    ///
    /// On any other failure the offending byte has been consumed and the
    /// parser is latched in its error state until [`reset`](Parser::reset).
    fn offer<B: Buf>(&mut self, buf: &mut B) -> Result<(), ParseError>;

    /// `true` unless the parser is latched in its error state.
    fn is_valid(&self) -> bool;

    /// `true` once the whole grammar unit has been recognized.
    fn is_done(&self) -> bool;

    /// Return to the initial state, dropping any partial token and output.
    fn reset(&mut self);
}

/// Per-byte stepping implemented by each grammar.
pub(crate) trait Grammar: Parser {
    /// Type name used in diagnostics.
    const NAME: &'static str;

    fn scanner(&mut self) -> &mut Scanner;

    /// Enter the error state.
    fn latch(&mut self);

    /// Feed one byte. The scanner's offset still points at `byte`.
    fn step(&mut self, byte: u8) -> Result<(), ParseError>;
}

/// Runs the shared `offer` loop: latch check, per-byte stepping, offset
/// accounting, and latching on failure.
pub(crate) fn drive<G, B>(grammar: &mut G, buf: &mut B) -> Result<(), ParseError>
where
    G: Grammar,
    B: Buf,
{
    ensure_valid(grammar)?;

    while buf.has_remaining() && !grammar.is_done() {
        let byte = buf.get_u8();
        let stepped = grammar.step(byte);
        grammar.scanner().advance();

        if let Err(err) = stepped {
            grammar.latch();
            debug!("{} rejected input: {}", G::NAME, err);
            return Err(err);
        }
    }

    Ok(())
}

pub(crate) fn ensure_valid<G: Grammar>(grammar: &G) -> Result<(), ParseError> {
    if grammar.is_valid() {
        Ok(())
    } else {
        Err(ParseError::InvalidParser { parser: G::NAME })
    }
}

/// Token accumulator plus offset bookkeeping.
#[derive(Debug)]
pub(crate) struct Scanner {
    token: BytesMut,
    /// Bytes consumed over the scanner's whole life.
    consumed: u64,
    /// Bytes consumed since the current grammar unit started.
    offset: usize,
}

impl Scanner {
    pub(crate) fn new() -> Self {
        Self {
            token: BytesMut::with_capacity(TOKEN_CAPACITY),
            consumed: 0,
            offset: 0,
        }
    }

    /// Offset of the byte being processed, relative to the current unit.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn consumed(&self) -> u64 {
        self.consumed
    }

    fn advance(&mut self) {
        self.consumed += 1;
        self.offset += 1;
    }

    /// Append a byte and return the new token length.
    pub(crate) fn push(&mut self, byte: u8) -> usize {
        self.token.put_u8(byte);
        self.token.len()
    }

    pub(crate) fn token(&self) -> &[u8] {
        &self.token
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.token.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.token.clear();
    }

    /// The token so far, for error payloads.
    pub(crate) fn lossy(&self) -> String {
        String::from_utf8_lossy(&self.token).into_owned()
    }

    /// Decode the token as UTF-8 and clear it.
    pub(crate) fn take_string(&mut self, what: &str) -> Result<String, ParseError> {
        let token = decode(&self.token, self.offset(), what);
        self.token.clear();
        token
    }

    /// Start a new grammar unit. `consumed` keeps counting.
    pub(crate) fn restart(&mut self) {
        self.token.clear();
        self.offset = 0;
    }
}

pub(crate) fn decode(bytes: &[u8], offset: usize, what: &str) -> Result<String, ParseError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|_| ParseError::malformed(offset, format!("{} is not valid UTF-8", what)))
}
