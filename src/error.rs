/// Errors reported by the reference URI driver.
///
/// The normalization rules themselves are total and never fail; only
/// tokenizing the normalized string can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty after the pre-parse normalizers ran
    EmptyInput,
    /// Port is not a decimal number in `0..=65535`
    InvalidPort,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::EmptyInput => "Empty input",
            Self::InvalidPort => "Invalid port",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URI parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
