//! Lenient normalization rules that mimic how web browsers recover from
//! malformed input.

use crate::character_sets::{is_alpha, is_slash};
use crate::compat::Cow;
use crate::cursor::ParseCursor;
use crate::helpers::trim_control_and_space;
use crate::normalizer::{Example, Normalizer, RuleDescription};
use crate::types::SchemeType;

const RULES: &[RuleDescription] = &[
    RuleDescription {
        name: "Trim",
        description: "Remove leading and trailing control characters and space. \
                      Remove stray TAB/CR/LF.",
        examples: &[
            Example {
                uri: " http://www.example.com",
                normalized_uri: "http://www.example.com/",
            },
            Example {
                uri: "http://www.\texample.com",
                normalized_uri: "http://www.example.com/",
            },
        ],
    },
    RuleDescription {
        name: "Normalize start of authority",
        description: "Skip or normalize erroneous slashes at start of authority. \
                      Handle windows drive letters at start of path.",
        examples: &[
            Example {
                uri: "foo:///example.com/",
                normalized_uri: "foo:///example.com/",
            },
            Example {
                uri: "http:\\\\example.com/",
                normalized_uri: "http://example.com/",
            },
            Example {
                uri: "file:///C|path",
                normalized_uri: "file:///C:path",
            },
            Example {
                uri: "file:/C:path",
                normalized_uri: "file:///C:path",
            },
        ],
    },
    RuleDescription {
        name: "Remove localhost for file scheme",
        description: "Remove the string 'localhost' from authority if scheme is 'file'.",
        examples: &[
            Example {
                uri: "file://localhost/path",
                normalized_uri: "file:///path",
            },
            Example {
                uri: "http://localhost/path",
                normalized_uri: "http://localhost/path",
            },
        ],
    },
];

/// Browser-mimicking normalizer.
///
/// Trims control characters, repairs slashes and backslashes in front of an
/// authority, fixes Windows drive letters in `file:` URIs and drops the
/// `localhost` host of `file:` URIs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MimicBrowser;

impl MimicBrowser {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for MimicBrowser {
    fn normalize<'a>(&self, uri: &'a str) -> Cow<'a, str> {
        let trimmed = trim_control_and_space(uri);
        if trimmed.len() != uri.len() {
            tracing::trace!(
                removed = uri.len() - trimmed.len(),
                "trimmed control characters"
            );
        }
        trimmed
    }

    fn pre_parse_authority(&self, cursor: &mut dyn ParseCursor) {
        if cursor.has_authority() || !cursor.has_at_least(1) {
            return;
        }

        let leading_slash_count = count_leading_slashes(cursor);
        let scheme_type = cursor.scheme_type();

        if scheme_type == Some(SchemeType::File) {
            match leading_slash_count {
                0 | 1 => {
                    cursor.set_has_authority(false);
                    is_windows_drive_letter(cursor, 0);
                }
                2 => {
                    cursor.set_has_authority(true);
                    cursor.increment_offset(2);
                    is_windows_drive_letter(cursor, 0);
                }
                _ => {
                    // Leave exactly one slash for the path
                    cursor.set_has_authority(true);
                    cursor.increment_offset(leading_slash_count - 1);
                    is_windows_drive_letter(cursor, 1);
                }
            }
        } else if scheme_type.is_none() && is_windows_drive_letter(cursor, leading_slash_count) {
            cursor.increment_offset(leading_slash_count.saturating_sub(1));
            cursor.set_has_authority(leading_slash_count >= 2);
        } else if leading_slash_count >= 2 {
            cursor.set_has_authority(true);
            cursor.increment_offset(2);
        }

        tracing::trace!(
            leading_slash_count,
            has_authority = cursor.has_authority(),
            position = cursor.position(),
            "normalized start of authority"
        );
    }

    fn pre_parse_host<'a>(&self, cursor: &dyn ParseCursor, host: &'a str) -> Cow<'a, str> {
        if cursor.scheme_type() == Some(SchemeType::File) && host == "localhost" {
            tracing::trace!("removed localhost from file URI");
            return Cow::Borrowed("");
        }
        Cow::Borrowed(host)
    }

    fn descriptions(&self) -> &'static [RuleDescription] {
        RULES
    }
}

/// Count consecutive `/` or `\` from the current position
fn count_leading_slashes(cursor: &dyn ParseCursor) -> usize {
    (0..cursor.remaining())
        .take_while(|&i| cursor.byte_at(i).is_some_and(is_slash))
        .count()
}

/// Check for and normalize a Windows drive letter.
///
/// The bytes at `offset` (relative to the cursor position) form a drive
/// letter if the first is an ASCII letter and the second is `:` or `|`. A `|`
/// is rewritten to `:` in the underlying buffer. The cursor never moves.
pub fn is_windows_drive_letter<C: ParseCursor + ?Sized>(cursor: &mut C, offset: usize) -> bool {
    if !cursor.has_at_least(offset.saturating_add(2)) {
        return false;
    }
    let (Some(letter), Some(separator)) = (cursor.byte_at(offset), cursor.byte_at(offset + 1))
    else {
        return false;
    };
    if !is_alpha(letter) {
        return false;
    }

    match separator {
        b':' => true,
        b'|' => {
            let position = cursor.position() + offset + 1;
            cursor.put(position, b':');
            tracing::trace!(position, "rewrote drive letter separator");
            true
        }
        _ => false,
    }
}
