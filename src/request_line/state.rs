/// Stages of the request-line grammar `METHOD SP TARGET SP VERSION CR LF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Reading the method token.
    ParsingMethod,
    /// Reading the request target.
    ParsingTarget,
    /// Reading the protocol version.
    ParsingVersion,
    /// Saw the carriage return, expecting the line feed.
    AwaitingLineFeed,
    /// The request line is complete.
    Done,
    /// A failure was reported; only a reset leaves this state.
    Error,
}

impl State {
    /// The next stage on the happy path. Terminal stages lead to `Error`.
    pub fn next(self) -> State {
        match self {
            State::ParsingMethod => State::ParsingTarget,
            State::ParsingTarget => State::ParsingVersion,
            State::ParsingVersion => State::AwaitingLineFeed,
            State::AwaitingLineFeed => State::Done,
            State::Done | State::Error => State::Error,
        }
    }

    /// Where the parser is, phrased to follow a failure description.
    pub fn describe(self) -> &'static str {
        match self {
            State::ParsingMethod => "while parsing the HTTP method",
            State::ParsingTarget => "while parsing the HTTP request target",
            State::ParsingVersion => "while parsing the HTTP version",
            State::AwaitingLineFeed => "after parsing the carriage return",
            State::Done => "after parsing the final line feed",
            State::Error => "after an error occurred",
        }
    }
}
