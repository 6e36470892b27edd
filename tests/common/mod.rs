use h1_head::{ParseError, Parser};

/// Feed `input` to `parser` in chunks of `size` bytes, stopping once it is
/// done. Returns the outcome and how many bytes the parser consumed.
pub fn offer_in_chunks<P: Parser>(
    parser: &mut P,
    input: &[u8],
    size: usize,
) -> (Result<(), ParseError>, usize) {
    let mut consumed = 0;
    for chunk in input.chunks(size) {
        let mut buf = chunk;
        let result = parser.offer(&mut buf);
        consumed += chunk.len() - buf.len();
        if result.is_err() || parser.is_done() {
            return (result, consumed);
        }
    }
    (Ok(()), consumed)
}

/// Feed `input` split in two at `at`.
pub fn offer_split<P: Parser>(
    parser: &mut P,
    input: &[u8],
    at: usize,
) -> Result<(), ParseError> {
    let (head, tail) = input.split_at(at);
    let mut head = head;
    parser.offer(&mut head)?;
    let mut tail = tail;
    parser.offer(&mut tail)
}
