use crate::character_sets::{is_alpha, is_scheme_byte};
use crate::types::SchemeType;

/// Get the scheme type from a scheme string.
/// Schemes are case-insensitive, so `FILE` and `File` classify as `file`.
/// Filters by length + first byte before the full comparison.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();

    match (bytes.len(), bytes.first().map(u8::to_ascii_lowercase)) {
        (2, Some(b'w')) if bytes.eq_ignore_ascii_case(b"ws") => SchemeType::Ws,
        (3, Some(b'w')) if bytes.eq_ignore_ascii_case(b"wss") => SchemeType::Wss,
        (3, Some(b'f')) if bytes.eq_ignore_ascii_case(b"ftp") => SchemeType::Ftp,
        (4, Some(b'h')) if bytes.eq_ignore_ascii_case(b"http") => SchemeType::Http,
        (4, Some(b'f')) if bytes.eq_ignore_ascii_case(b"file") => SchemeType::File,
        (5, Some(b'h')) if bytes.eq_ignore_ascii_case(b"https") => SchemeType::Https,
        _ => SchemeType::NotSpecial,
    }
}

/// Find the length of a leading `scheme` followed by `:`.
///
/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`. Returns the index of
/// the `:`. A single letter before `:` is a Windows drive letter, not a
/// scheme, so `C:path` yields `None`.
pub fn scheme_end(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    if !is_alpha(*bytes.first()?) {
        return None;
    }

    let end = bytes
        .iter()
        .position(|&b| !is_scheme_byte(b))
        .unwrap_or(bytes.len());

    (end > 1 && bytes.get(end) == Some(&b':')).then_some(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_type() {
        assert_eq!(get_scheme_type("http"), SchemeType::Http);
        assert_eq!(get_scheme_type("https"), SchemeType::Https);
        assert_eq!(get_scheme_type("ftp"), SchemeType::Ftp);
        assert_eq!(get_scheme_type("file"), SchemeType::File);
        assert_eq!(get_scheme_type("FILE"), SchemeType::File);
        assert_eq!(get_scheme_type("Http"), SchemeType::Http);
        assert_eq!(get_scheme_type("files"), SchemeType::NotSpecial);
        assert_eq!(get_scheme_type("custom"), SchemeType::NotSpecial);
        assert_eq!(get_scheme_type(""), SchemeType::NotSpecial);
    }

    #[test]
    fn test_scheme_end() {
        assert_eq!(scheme_end("http://example.com"), Some(4));
        assert_eq!(scheme_end("svn+ssh://host"), Some(7));
        assert_eq!(scheme_end("foo:///example.com/"), Some(3));
        assert_eq!(scheme_end("mailto:a@b"), Some(6));

        // Drive letters are not schemes
        assert_eq!(scheme_end("C:path"), None);
        assert_eq!(scheme_end("C|path"), None);

        // No colon, or bad first byte
        assert_eq!(scheme_end("example.com/path"), None);
        assert_eq!(scheme_end("//host/path"), None);
        assert_eq!(scheme_end("1http://x"), None);
        assert_eq!(scheme_end("ht tp://x"), None);
        assert_eq!(scheme_end(""), None);
    }
}
