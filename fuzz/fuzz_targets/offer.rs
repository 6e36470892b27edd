#![no_main]
use libfuzzer_sys::fuzz_target;

use bytes::Buf;
use h1_head::{HeaderParser, Limits, Parser, RequestLineParser};

/// The first input byte picks a chunk size, the rest is fed to the parsers
/// the way a connection would: request line first, then fields until the
/// empty line or an error.
fuzz_target!(|data: &[u8]| {
    let (size, mut input) = match data.split_first() {
        Some((size, rest)) => (usize::from(*size).max(1), rest),
        None => return,
    };

    let limits = Limits::new()
        .max_request_target_length(64)
        .max_header_name_length(32)
        .max_header_value_length(64);
    let mut line = RequestLineParser::with_limits(limits);
    let mut header = HeaderParser::with_limits(limits);

    while !line.is_done() && input.has_remaining() {
        let take = size.min(input.len());
        let mut chunk = &input[..take];
        let before = chunk.len();
        match line.offer(&mut chunk) {
            Ok(()) => input.advance(before - chunk.len()),
            Err(err) => {
                assert!(!line.is_valid());
                assert!(err.offset().is_some());
                assert!(line.offer(&mut chunk).unwrap_err().is_invalid_parser());
                return;
            }
        }
    }

    while line.is_done() && input.has_remaining() {
        if header.offset() == 0 && input.starts_with(b"\r\n") {
            break;
        }
        let take = size.min(input.len());
        let mut chunk = &input[..take];
        let before = chunk.len();
        if header.offer(&mut chunk).is_err() {
            assert!(!header.is_valid());
            header.reset();
            assert!(header.is_valid());
            return;
        }
        input.advance(before - chunk.len());

        if let Some((name, value)) = header.field().unwrap() {
            assert!(!name.is_empty() && name.len() <= 32);
            assert!(!value.is_empty() && value.len() <= 64);
            assert!(!value.ends_with(' ') && !value.starts_with(' '));
            header.reset();
        }
    }
});
