use crate::compat::String;
use crate::types::SchemeType;

/// Scan state a URI parser exposes to in-parse normalizers.
///
/// Positions and offsets count bytes. Offsets passed to [`byte_at`] are
/// relative to [`position`]; the position passed to [`put`] is absolute.
///
/// [`byte_at`]: ParseCursor::byte_at
/// [`position`]: ParseCursor::position
/// [`put`]: ParseCursor::put
pub trait ParseCursor {
    /// Absolute position of the scan in the input buffer
    fn position(&self) -> usize;

    /// Number of bytes left from the current position
    fn remaining(&self) -> usize;

    /// Check that at least `n` bytes are left from the current position
    fn has_at_least(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    /// Read the byte `offset` bytes past the current position
    fn byte_at(&self, offset: usize) -> Option<u8>;

    /// Overwrite the byte at absolute `position`. Never changes the length.
    fn put(&mut self, position: usize, byte: u8);

    fn has_authority(&self) -> bool;

    fn set_has_authority(&mut self, has_authority: bool);

    /// Advance the scan position by `n` bytes
    fn increment_offset(&mut self, n: usize);

    /// Declared scheme, or `None` while it is not yet known
    fn scheme_type(&self) -> Option<SchemeType>;
}

/// Parse state over an owned input buffer, scoped to a single parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    buffer: String,
    position: usize,
    has_authority: bool,
    scheme_type: Option<SchemeType>,
}

impl ParserState {
    /// Create a state positioned at the start of `input`, scheme unknown
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            buffer: input.into(),
            ..Self::default()
        }
    }

    /// Builder-style setter for the declared scheme
    #[must_use]
    pub fn with_scheme_type(mut self, scheme_type: Option<SchemeType>) -> Self {
        self.scheme_type = scheme_type;
        self
    }

    pub fn set_scheme_type(&mut self, scheme_type: Option<SchemeType>) {
        self.scheme_type = scheme_type;
    }

    /// The unconsumed input
    pub fn rest(&self) -> &str {
        self.buffer.get(self.position..).unwrap_or("")
    }

    /// The whole input buffer, including consumed bytes
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl ParseCursor for ParserState {
    fn position(&self) -> usize {
        self.position
    }

    fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    fn byte_at(&self, offset: usize) -> Option<u8> {
        let index = self.position.checked_add(offset)?;
        self.buffer.as_bytes().get(index).copied()
    }

    /// Only ASCII-for-ASCII replacement is performed, which keeps the buffer
    /// valid UTF-8 and its length unchanged. Anything else is ignored.
    fn put(&mut self, position: usize, byte: u8) {
        if !byte.is_ascii() || !self.buffer.as_bytes().get(position).is_some_and(u8::is_ascii) {
            tracing::debug!(position, "ignoring invalid buffer write");
            return;
        }

        let mut utf8 = [0u8; 4];
        let replacement = char::from(byte).encode_utf8(&mut utf8);
        self.buffer.replace_range(position..=position, replacement);
    }

    fn has_authority(&self) -> bool {
        self.has_authority
    }

    fn set_has_authority(&mut self, has_authority: bool) {
        self.has_authority = has_authority;
    }

    fn increment_offset(&mut self, n: usize) {
        self.position = self.position.saturating_add(n).min(self.buffer.len());
    }

    fn scheme_type(&self) -> Option<SchemeType> {
        self.scheme_type
    }
}
