/// URI component offsets into a single serialized buffer
///
/// Buffer layout: `file://user@host:8080/C:/dir?query#frag`
/// - `protocol_end`: 5 (end of "file:")
/// - `host_start`: 12 (start of "host", after "//user@")
/// - `host_end`: 16 (end of "host", before ":")
/// - port: Some(8080)
/// - `pathname_start`: 21 (start of `/C:/dir`, after `:8080`)
/// - `search_start`: Some(28) (the "?")
/// - `hash_start`: Some(34) (the "#")
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UriComponents {
    pub protocol_end: u32,
    pub host_start: u32,
    pub host_end: u32,
    pub port: Option<u16>,
    pub pathname_start: u32,
    pub search_start: Option<u32>,
    pub hash_start: Option<u32>,
}

impl UriComponents {
    /// Create a new `UriComponents` with all offsets at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffer holds a "//" authority marker after the scheme
    pub fn has_authority(&self) -> bool {
        self.host_start > self.protocol_end
    }

    /// Userinfo range (without the "@"), if the authority carries one
    pub fn userinfo_range(&self) -> Option<(u32, u32)> {
        if !self.has_authority() {
            return None;
        }
        let start = self.protocol_end + 2;
        (self.host_start > start).then(|| (start, self.host_start - 1))
    }

    /// End of the pathname (start of search or hash, or end of buffer)
    pub fn pathname_end(&self, buf_len: u32) -> u32 {
        self.search_start.or(self.hash_start).unwrap_or(buf_len)
    }
}
