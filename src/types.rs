/// URI scheme types
///
/// A parse state carries `Option<SchemeType>`: `None` until the scheme has
/// been classified (or when the input is a scheme-less reference).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    File,
    #[default]
    NotSpecial,
}

impl SchemeType {
    /// Check if this is a special scheme
    pub fn is_special(self) -> bool {
        self != Self::NotSpecial
    }

    /// Check if this is the `file` scheme
    pub fn is_file(self) -> bool {
        self == Self::File
    }
}
