use crate::character_sets::ends_authority;

/// Find the end of the authority component in `input`
pub fn authority_end(input: &str, special: bool) -> usize {
    input
        .bytes()
        .position(|b| ends_authority(b, special))
        .unwrap_or(input.len())
}

/// Split authority into userinfo (before the last "@") and host:port.
pub fn split_userinfo(authority: &str) -> (Option<&str>, &str) {
    match memchr::memrchr(b'@', authority.as_bytes()) {
        Some(at) => (Some(&authority[..at]), &authority[at + 1..]),
        None => (None, authority),
    }
}

/// Split host string into hostname and optional port parts.
/// A bracketed IPv6 literal only has a port after its closing "]".
pub fn split_host_port(host: &str) -> (&str, Option<&str>) {
    if host.starts_with('[') {
        if let Some(bracket_end) = host.find(']') {
            let port = host[bracket_end + 1..].strip_prefix(':');
            return (&host[..=bracket_end], port);
        }
        return (host, None);
    }

    match host.rfind(':') {
        Some(colon_pos) => (&host[..colon_pos], Some(&host[colon_pos + 1..])),
        None => (host, None),
    }
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}
