use http_types::StatusCode;

/// Failures reported by the request-line and header-field parsers.
///
/// Every variant except [`ParseError::InvalidParser`] describes bad input and
/// carries the offset of the byte that triggered it, counted from the start
/// of the current grammar unit. The parser that produced the error has
/// already latched into its error state and must be reset before reuse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input does not follow the grammar.
    #[error("malformed request head at offset {offset}: {reason}")]
    Malformed {
        /// Offset of the offending byte.
        offset: usize,
        /// What was wrong, and at which stage.
        reason: String,
    },

    /// The method token is not one of [`Method::ALL`](crate::Method::ALL).
    ///
    /// Scanning stops once the token is longer than
    /// [`Method::MAX_LEN`](crate::Method::MAX_LEN), so `method` holds at most
    /// `MAX_LEN + 1` bytes.
    #[error("unsupported HTTP method {method:?} at offset {offset}")]
    UnsupportedMethod {
        /// Offset of the offending byte.
        offset: usize,
        /// The method text read so far.
        method: String,
    },

    /// The version token is not one of [`Version::ALL`](crate::Version::ALL).
    #[error("unsupported HTTP version {version:?} at offset {offset}")]
    UnsupportedVersion {
        /// Offset of the offending byte.
        offset: usize,
        /// The version text read so far.
        version: String,
    },

    /// The request target exceeded the configured limit.
    #[error("request target longer than the maximum of {limit} bytes")]
    TargetTooLong {
        /// Offset of the first byte past the limit.
        offset: usize,
        /// The configured maximum.
        limit: usize,
    },

    /// A header field name exceeded the configured limit.
    #[error("header field name longer than the maximum of {limit} bytes")]
    NameTooLong {
        /// Offset of the first byte past the limit.
        offset: usize,
        /// The configured maximum.
        limit: usize,
    },

    /// A header field value exceeded the configured limit.
    #[error("header field value longer than the maximum of {limit} bytes")]
    ValueTooLong {
        /// Offset of the first byte past the limit.
        offset: usize,
        /// The configured maximum.
        limit: usize,
    },

    /// The parser was used while latched in its error state.
    ///
    /// This is a bug in the caller, not in the input: call `reset` first.
    #[error("{parser} used after a failure without being reset")]
    InvalidParser {
        /// Name of the parser type.
        parser: &'static str,
    },
}

impl ParseError {
    /// Offset of the byte that triggered the failure, if the failure came
    /// from the input.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::Malformed { offset, .. }
            | ParseError::UnsupportedMethod { offset, .. }
            | ParseError::UnsupportedVersion { offset, .. }
            | ParseError::TargetTooLong { offset, .. }
            | ParseError::NameTooLong { offset, .. }
            | ParseError::ValueTooLong { offset, .. } => Some(*offset),
            ParseError::InvalidParser { .. } => None,
        }
    }

    /// Whether this reports misuse of a parser rather than bad input.
    pub fn is_invalid_parser(&self) -> bool {
        matches!(self, ParseError::InvalidParser { .. })
    }

    /// The response status a server should answer this failure with.
    pub fn status(&self) -> StatusCode {
        match self {
            ParseError::Malformed { .. } => StatusCode::BadRequest,
            ParseError::UnsupportedMethod { .. } => StatusCode::NotImplemented,
            ParseError::UnsupportedVersion { .. } => StatusCode::HttpVersionNotSupported,
            ParseError::TargetTooLong { .. } => StatusCode::UriTooLong,
            ParseError::NameTooLong { .. } | ParseError::ValueTooLong { .. } => {
                StatusCode::RequestHeaderFieldsTooLarge
            }
            ParseError::InvalidParser { .. } => StatusCode::InternalServerError,
        }
    }

    pub(crate) fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        ParseError::Malformed {
            offset,
            reason: reason.into(),
        }
    }
}
