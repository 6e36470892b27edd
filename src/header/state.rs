/// Stages of the header field grammar `NAME ':' [OWS] VALUE [OWS] CR LF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Reading the field name.
    ParsingName,
    /// Reading the field value, leading whitespace skipped.
    ParsingValue,
    /// Saw the carriage return, expecting the line feed.
    AwaitingLineFeed,
    /// The field is complete.
    Done,
    /// A failure was reported; only a reset leaves this state.
    Error,
}

impl State {
    /// The next stage on the happy path. Terminal stages lead to `Error`.
    pub fn next(self) -> State {
        match self {
            State::ParsingName => State::ParsingValue,
            State::ParsingValue => State::AwaitingLineFeed,
            State::AwaitingLineFeed => State::Done,
            State::Done | State::Error => State::Error,
        }
    }

    /// Where the parser is, phrased to follow a failure description.
    pub fn describe(self) -> &'static str {
        match self {
            State::ParsingName => "while parsing a header field name",
            State::ParsingValue => "while parsing a header field value",
            State::AwaitingLineFeed => "after parsing the carriage return",
            State::Done => "after parsing the final line feed",
            State::Error => "after an error occurred",
        }
    }
}
