use crate::character_sets::{is_ascii_tab_or_newline, is_c0_control_or_space};
use crate::compat::{Cow, String};

/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Trim leading/trailing C0 controls and space, then drop every internal
/// tab, CR and LF.
///
/// Returns `Cow::Borrowed` unless internal bytes had to be removed. When
/// nothing was trimmed the borrowed slice is the input itself (same pointer,
/// same length), so callers can detect an untouched input cheaply.
pub fn trim_control_and_space(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();

    let start = bytes
        .iter()
        .position(|&b| !is_c0_control_or_space(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| !is_c0_control_or_space(b))
        .map_or(start, |pos| pos + 1);

    let trimmed = &input[start..end];
    if !has_tabs_or_newline(trimmed) {
        return Cow::Borrowed(trimmed);
    }

    Cow::Owned(
        trimmed
            .chars()
            .filter(|&c| !is_ascii_tab_or_newline(c))
            .collect::<String>(),
    )
}

/// Split `input` at the first `?` or `#`.
/// Returns (`before`, `rest`) where `rest` starts with the delimiter.
pub fn split_at_query_or_fragment(input: &str) -> (&str, &str) {
    memchr::memchr2(b'?', b'#', input.as_bytes()).map_or((input, ""), |pos| input.split_at(pos))
}

/// Split `input` at the first `#`.
/// Returns (`before`, `fragment_without_hash`).
pub fn split_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}
