use std::fmt;
use std::str::FromStr;

/// The request methods the request-line parser recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `HEAD`
    Head,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `CONNECT`
    Connect,
    /// `OPTIONS`
    Options,
    /// `TRACE`
    Trace,
    /// `PATCH`
    Patch,
}

impl Method {
    /// Every recognized method, in declaration order.
    pub const ALL: [Method; 9] = [
        Method::Get,
        Method::Head,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Connect,
        Method::Options,
        Method::Trace,
        Method::Patch,
    ];

    /// Length of the longest canonical method string.
    ///
    /// A method token that grows past this can never match and is rejected
    /// without scanning further.
    pub const MAX_LEN: usize = max_len(&Method::ALL);

    /// The canonical wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Connect => "CONNECT",
            Method::Options => "OPTIONS",
            Method::Trace => "TRACE",
            Method::Patch => "PATCH",
        }
    }

    /// Look up a method by its exact, case-sensitive wire representation.
    pub fn from_bytes(bytes: &[u8]) -> Option<Method> {
        Method::ALL
            .iter()
            .copied()
            .find(|method| method.as_str().as_bytes() == bytes)
    }
}

const fn max_len(methods: &[Method]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < methods.len() {
        let len = methods[i].as_str().len();
        if len > max {
            max = len;
        }
        i += 1;
    }
    max
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a recognized method.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized HTTP method {0:?}")]
pub struct UnknownMethod(String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::from_bytes(s.as_bytes()).ok_or_else(|| UnknownMethod(s.to_owned()))
    }
}

impl From<Method> for http_types::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http_types::Method::Get,
            Method::Head => http_types::Method::Head,
            Method::Post => http_types::Method::Post,
            Method::Put => http_types::Method::Put,
            Method::Delete => http_types::Method::Delete,
            Method::Connect => http_types::Method::Connect,
            Method::Options => http_types::Method::Options,
            Method::Trace => http_types::Method::Trace,
            Method::Patch => http_types::Method::Patch,
        }
    }
}
