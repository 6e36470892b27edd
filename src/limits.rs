/// Size limits applied by the parsers.
///
/// A limit of `0` means unlimited, which is also the default for every field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    request_target: usize,
    header_name: usize,
    header_value: usize,
}

impl Limits {
    /// No limits at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits in line with the sizes RFC 9112 expects servers to handle.
    pub fn recommended() -> Self {
        Self {
            request_target: 8000,
            header_name: 256,
            header_value: 8192,
        }
    }

    /// Set the maximum request target length in bytes.
    pub fn max_request_target_length(mut self, len: usize) -> Self {
        self.request_target = len;
        self
    }

    /// Set the maximum header field name length in bytes.
    pub fn max_header_name_length(mut self, len: usize) -> Self {
        self.header_name = len;
        self
    }

    /// Set the maximum header field value length in bytes, leading
    /// whitespace excluded.
    pub fn max_header_value_length(mut self, len: usize) -> Self {
        self.header_value = len;
        self
    }

    /// The maximum request target length, `0` if unlimited.
    pub fn request_target(&self) -> usize {
        self.request_target
    }

    /// The maximum header field name length, `0` if unlimited.
    pub fn header_name(&self) -> usize {
        self.header_name
    }

    /// The maximum header field value length, `0` if unlimited.
    pub fn header_value(&self) -> usize {
        self.header_value
    }
}

/// Whether `len` bytes break `limit`, where `0` disables the check.
pub(crate) fn exceeds(limit: usize, len: usize) -> bool {
    limit > 0 && len > limit
}
