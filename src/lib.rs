//! Browser-style lenient normalization of malformed URI strings.
//!
//! Web browsers accept URIs that a strict RFC 3986 parser would reject or
//! misread: stray whitespace, `\` in place of `/`, too many slashes before
//! the host, `C|` drive letters and `localhost` hosts in `file:` URIs. This
//! crate reproduces those recoveries as [`Normalizer`] hooks that a URI
//! parser calls at well-defined extension points, and ships a small
//! [`UriParser`] that drives them.
//!
//! ```
//! assert_eq!(
//!     mimic_uri::normalize(" file:///C|/Windows ").unwrap(),
//!     "file:///C:/Windows"
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod cursor;
mod error;
mod helpers;
mod mimic_browser;
mod normalizer;
mod parser;
mod scheme;
mod types;
mod uri;
mod uri_components;

// Public API
pub use cursor::{ParseCursor, ParserState};
pub use error::{ParseError, Result};
pub use mimic_browser::{MimicBrowser, is_windows_drive_letter};
pub use normalizer::{Example, Normalizer, RuleDescription};
pub use parser::UriParser;
pub use types::SchemeType;
pub use uri::Uri;

/// Trim control characters and stray TAB/CR/LF from a raw URI string.
///
/// This is the pre-parse rule of [`MimicBrowser`] on its own. The result
/// borrows from `input` unless internal characters had to be removed.
pub fn trim(input: &str) -> compat::Cow<'_, str> {
    helpers::trim_control_and_space(input)
}

/// Parse with the default normalizers and return the serialized URI.
///
/// # Errors
///
/// Returns an error if the input is empty after trimming or the port is invalid.
pub fn normalize(input: &str) -> Result<compat::String> {
    Uri::parse(input).map(Uri::into_string)
}
