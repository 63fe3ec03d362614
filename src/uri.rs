use crate::compat::String;
use crate::error::{ParseError, Result};
use crate::parser::UriParser;
use crate::types::SchemeType;
use crate::uri_components::UriComponents;

/// A normalized URI stored in a single buffer
///
/// Components are offsets into the serialized string, so every getter is a
/// zero-copy slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uri {
    pub(crate) buffer: String,
    pub(crate) components: UriComponents,
    pub(crate) scheme_type: Option<SchemeType>,
}

impl Uri {
    /// Parse with the default browser-mimicking normalizers
    ///
    /// # Examples
    ///
    /// ```
    /// use mimic_uri::Uri;
    ///
    /// let uri = Uri::parse("file:///C|/Windows").unwrap();
    /// assert_eq!(uri.as_str(), "file:///C:/Windows");
    /// assert_eq!(uri.path(), "/C:/Windows");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty after trimming or the port is invalid.
    pub fn parse(input: &str) -> Result<Self> {
        UriParser::default().parse(input)
    }

    /// Get a component by range (zero-copy)
    fn get_component(&self, start: u32, end: u32) -> &str {
        self.buffer.get(start as usize..end as usize).unwrap_or("")
    }

    fn buffer_len(&self) -> u32 {
        self.buffer.len() as u32
    }

    /// The serialized URI
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// The scheme without its ":", as written in the input
    pub fn scheme(&self) -> Option<&str> {
        let end = self.components.protocol_end;
        (end > 0).then(|| self.get_component(0, end - 1))
    }

    /// Scheme classification, `None` for a scheme-less reference
    pub fn scheme_type(&self) -> Option<SchemeType> {
        self.scheme_type
    }

    /// Whether the serialized URI carries a "//" authority
    pub fn has_authority(&self) -> bool {
        self.components.has_authority()
    }

    pub fn userinfo(&self) -> Option<&str> {
        self.components
            .userinfo_range()
            .map(|(start, end)| self.get_component(start, end))
    }

    /// Host, `Some("")` for an empty authority such as `file:///path`
    pub fn host(&self) -> Option<&str> {
        self.has_authority()
            .then(|| self.get_component(self.components.host_start, self.components.host_end))
    }

    pub fn port(&self) -> Option<u16> {
        self.components.port
    }

    pub fn path(&self) -> &str {
        let end = self.components.pathname_end(self.buffer_len());
        self.get_component(self.components.pathname_start, end)
    }

    /// Query without the leading "?"
    pub fn query(&self) -> Option<&str> {
        let start = self.components.search_start?;
        let end = self.components.hash_start.unwrap_or(self.buffer_len());
        Some(self.get_component(start + 1, end))
    }

    /// Fragment without the leading "#"
    pub fn fragment(&self) -> Option<&str> {
        let start = self.components.hash_start?;
        Some(self.get_component(start + 1, self.buffer_len()))
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl core::fmt::Display for Uri {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.buffer)
    }
}

impl core::str::FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.buffer
    }
}
