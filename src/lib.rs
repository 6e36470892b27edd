//! Incremental HTTP/1.x request head lexer.
//!
//! Two parsers turn raw bytes, delivered in arbitrarily sized and arbitrarily
//! split chunks, into the pieces of a request head:
//!
//! - [`RequestLineParser`] reads `METHOD SP TARGET SP VERSION CRLF`.
//! - [`HeaderParser`] reads one `NAME: VALUE CRLF` field at a time.
//!
//! Both implement [`Parser`]: offer bytes as they arrive, check
//! [`is_done`](Parser::is_done), read the result, [`reset`](Parser::reset) and
//! go again. Neither blocks nor performs I/O; feeding them from a socket is
//! left to the connection layer.
//!
//! ```txt
//!   bytes ──> RequestLineParser ──> method, target, version
//!     │
//!     └────> HeaderParser (reset per field) ──> name, value
//!                   ... until the empty line
//! ```
//!
//! Malformed or oversized input is reported as a [`ParseError`] carrying the
//! offset of the offending byte and the response status to answer with.
//!
//! # Example
//!
//! ```
//! use h1_head::{HeaderParser, Limits, Method, Parser, RequestLineParser};
//!
//! let limits = Limits::recommended();
//! let mut line = RequestLineParser::with_limits(limits);
//! let mut header = HeaderParser::with_limits(limits);
//!
//! let mut buf: &[u8] = b"GET /hello HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\n\r\n";
//!
//! line.offer(&mut buf)?;
//! assert_eq!(line.method()?, Some(Method::Get));
//!
//! let mut fields = Vec::new();
//! while !buf.starts_with(b"\r\n") {
//!     header.offer(&mut buf)?;
//!     if let Some((name, value)) = header.field()? {
//!         fields.push((name.to_owned(), value.to_owned()));
//!     }
//!     header.reset();
//! }
//!
//! assert_eq!(fields.len(), 2);
//! assert_eq!(fields[1], ("Accept".to_owned(), "*/*".to_owned()));
//! # Ok::<(), h1_head::ParseError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations, nonstandard_style, rust_2018_idioms)]
#![warn(missing_docs, unreachable_pub)]

mod error;
mod limits;
mod method;
mod parser;
mod version;

pub mod header;
pub mod request_line;

pub use error::ParseError;
pub use header::{trim_trailing_ows, HeaderParser};
pub use limits::Limits;
pub use method::{Method, UnknownMethod};
pub use parser::Parser;
pub use request_line::RequestLineParser;
pub use version::{UnknownVersion, Version};
