mod authority;

use authority::{authority_end, parse_port, split_host_port, split_userinfo};

use crate::compat::{Box, Cow, String, Vec};
use crate::cursor::{ParseCursor, ParserState};
use crate::error::{ParseError, Result};
use crate::helpers::{split_at_query_or_fragment, split_fragment};
use crate::mimic_browser::MimicBrowser;
use crate::normalizer::{Normalizer, RuleDescription};
use crate::scheme::{get_scheme_type, scheme_end};
use crate::types::SchemeType;
use crate::uri::Uri;
use crate::uri_components::UriComponents;

/// Reference URI tokenizer that drives registered normalizers.
///
/// Splits input into scheme, authority, path, query and fragment, calling
/// each normalizer's hooks at their extension points. The parser adds no
/// normalization of its own beyond serializing the components: an empty
/// authority for `file:` URIs and a leading "/" on paths that need one.
///
/// # Examples
///
/// ```
/// use mimic_uri::{MimicBrowser, UriParser};
///
/// let parser = UriParser::new().with_normalizer(MimicBrowser);
/// let uri = parser.parse("http:\\\\example.com/").unwrap();
/// assert_eq!(uri.as_str(), "http://example.com/");
/// ```
pub struct UriParser {
    normalizers: Vec<Box<dyn Normalizer>>,
}

impl Default for UriParser {
    /// Parser with the browser-mimicking normalizer registered
    fn default() -> Self {
        Self::new().with_normalizer(MimicBrowser)
    }
}

impl core::fmt::Debug for UriParser {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UriParser")
            .field("normalizers", &self.normalizers.len())
            .finish()
    }
}

impl UriParser {
    /// Parser with no normalizers registered
    pub fn new() -> Self {
        Self {
            normalizers: Vec::new(),
        }
    }

    /// Register a normalizer; hooks run in registration order
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: impl Normalizer + 'static) -> Self {
        self.normalizers.push(Box::new(normalizer));
        self
    }

    /// Rules applied by every registered normalizer
    pub fn descriptions(&self) -> impl Iterator<Item = &'static RuleDescription> + '_ {
        self.normalizers
            .iter()
            .flat_map(|normalizer| normalizer.descriptions())
    }

    /// Run every pre-parse hook over the raw input
    pub fn normalize<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.normalizers
            .iter()
            .fold(Cow::Borrowed(input), |uri, normalizer| match uri {
                Cow::Borrowed(borrowed) => normalizer.normalize(borrowed),
                Cow::Owned(owned) => Cow::Owned(normalizer.normalize(&owned).into_owned()),
            })
    }

    fn normalize_host<'h>(&self, cursor: &dyn ParseCursor, host: &'h str) -> Cow<'h, str> {
        self.normalizers
            .iter()
            .fold(Cow::Borrowed(host), |host, normalizer| match host {
                Cow::Borrowed(borrowed) => normalizer.pre_parse_host(cursor, borrowed),
                Cow::Owned(owned) => {
                    Cow::Owned(normalizer.pre_parse_host(cursor, &owned).into_owned())
                }
            })
    }

    /// Parse and normalize a URI string
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty after the pre-parse hooks ran,
    /// or if the authority carries a port that is not a number in `0..=65535`.
    pub fn parse(&self, input: &str) -> Result<Uri> {
        let input = self.normalize(input);
        if input.is_empty() {
            tracing::debug!("input is empty after pre-parse normalization");
            return Err(ParseError::EmptyInput);
        }

        // Room for an inserted "//" and "/"
        let mut buffer = String::with_capacity(input.len() + 3);
        let mut components = UriComponents::new();
        let mut state = ParserState::new(input.into_owned());

        if let Some(end) = scheme_end(state.rest()) {
            let scheme = &state.rest()[..end];
            let scheme_type = get_scheme_type(scheme);
            buffer.push_str(scheme);
            buffer.push(':');
            state.set_scheme_type(Some(scheme_type));
            state.increment_offset(end + 1);
        }
        components.protocol_end = buffer.len() as u32;

        for normalizer in &self.normalizers {
            normalizer.pre_parse_authority(&mut state);
        }

        let scheme_type = state.scheme_type();
        let is_file = scheme_type.is_some_and(SchemeType::is_file);
        let special = scheme_type.is_some_and(SchemeType::is_special);
        let has_authority = state.has_authority();

        if has_authority || is_file {
            buffer.push_str("//");
        }
        components.host_start = buffer.len() as u32;
        components.host_end = components.host_start;

        if has_authority {
            let end = self.parse_authority(&state, &mut buffer, &mut components, special)?;
            state.increment_offset(end);
        }

        let (path, rest) = split_at_query_or_fragment(state.rest());
        components.pathname_start = buffer.len() as u32;
        let needs_leading_slash = is_file || (special && has_authority);
        if needs_leading_slash && !path.starts_with(['/', '\\']) {
            buffer.push('/');
        }
        buffer.push_str(path);

        let (query, fragment) = split_fragment(rest);
        if let Some(query) = query.strip_prefix('?') {
            components.search_start = Some(buffer.len() as u32);
            buffer.push('?');
            buffer.push_str(query);
        }
        if let Some(fragment) = fragment {
            components.hash_start = Some(buffer.len() as u32);
            buffer.push('#');
            buffer.push_str(fragment);
        }

        Ok(Uri {
            buffer,
            components,
            scheme_type,
        })
    }

    /// Copy userinfo, host and port to `buffer`, running the host hooks.
    /// Returns the length of the authority in the unconsumed input.
    fn parse_authority(
        &self,
        state: &ParserState,
        buffer: &mut String,
        components: &mut UriComponents,
        special: bool,
    ) -> Result<usize> {
        let rest = state.rest();
        let end = authority_end(rest, special);
        let (userinfo, host_port) = split_userinfo(&rest[..end]);

        if let Some(userinfo) = userinfo {
            buffer.push_str(userinfo);
            buffer.push('@');
        }

        let (host, port) = split_host_port(host_port);
        let host = self.normalize_host(state, host);
        components.host_start = buffer.len() as u32;
        buffer.push_str(&host);
        components.host_end = buffer.len() as u32;

        if let Some(port) = port {
            if !port.is_empty() {
                let Some(number) = parse_port(port) else {
                    tracing::debug!(port, "rejecting invalid port");
                    return Err(ParseError::InvalidPort);
                };
                components.port = Some(number);
            }
            buffer.push(':');
            buffer.push_str(port);
        }

        Ok(end)
    }
}
