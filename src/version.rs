use std::fmt;
use std::str::FromStr;

/// The protocol versions the request-line parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Version {
    /// `HTTP/1.0`
    Http1_0,
    /// `HTTP/1.1`
    Http1_1,
}

impl Version {
    /// Every recognized version, oldest first.
    pub const ALL: [Version; 2] = [Version::Http1_0, Version::Http1_1];

    /// Length of the longest canonical version string.
    pub const MAX_LEN: usize = max_len(&Version::ALL);

    /// The canonical wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Version::Http1_0 => "HTTP/1.0",
            Version::Http1_1 => "HTTP/1.1",
        }
    }

    /// Look up a version by its exact wire representation.
    pub fn from_bytes(bytes: &[u8]) -> Option<Version> {
        Version::ALL
            .iter()
            .copied()
            .find(|version| version.as_str().as_bytes() == bytes)
    }
}

const fn max_len(versions: &[Version]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < versions.len() {
        let len = versions[i].as_str().len();
        if len > max {
            max = len;
        }
        i += 1;
    }
    max
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a supported protocol version.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported HTTP version {0:?}")]
pub struct UnknownVersion(String);

impl FromStr for Version {
    type Err = UnknownVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::from_bytes(s.as_bytes()).ok_or_else(|| UnknownVersion(s.to_owned()))
    }
}

impl From<Version> for http_types::Version {
    fn from(version: Version) -> Self {
        match version {
            Version::Http1_0 => http_types::Version::Http1_0,
            Version::Http1_1 => http_types::Version::Http1_1,
        }
    }
}
