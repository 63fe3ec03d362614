use crate::compat::Cow;
use crate::cursor::ParseCursor;

/// A literal input/output pair documenting a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub uri: &'static str,
    pub normalized_uri: &'static str,
}

/// Human-readable description of a normalization rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDescription {
    pub name: &'static str,
    pub description: &'static str,
    pub examples: &'static [Example],
}

/// Hooks a URI parser invokes on registered normalizers.
///
/// Every hook has a pass-through default, so a normalizer implements only
/// the hooks it needs. The parser calls, in registration order:
///
/// 1. [`normalize`] once on the raw input, before tokenizing;
/// 2. [`pre_parse_authority`] right before it would scan an authority;
/// 3. [`pre_parse_host`] on the extracted host.
///
/// [`normalize`]: Normalizer::normalize
/// [`pre_parse_authority`]: Normalizer::pre_parse_authority
/// [`pre_parse_host`]: Normalizer::pre_parse_host
pub trait Normalizer: Send + Sync {
    /// Pre-parse hook over the whole input string
    fn normalize<'a>(&self, uri: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(uri)
    }

    /// In-parse hook, may adjust the authority flag and scan offset
    fn pre_parse_authority(&self, _cursor: &mut dyn ParseCursor) {}

    /// In-parse hook, may substitute the extracted host
    fn pre_parse_host<'a>(&self, _cursor: &dyn ParseCursor, host: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(host)
    }

    /// Rules this normalizer applies
    fn descriptions(&self) -> &'static [RuleDescription] {
        &[]
    }
}
