/// Check if a character is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// Check if a byte is a C0 control or space (`0x00..=0x20`).
/// Such bytes are always single-byte characters in UTF-8.
pub fn is_c0_control_or_space(b: u8) -> bool {
    b <= b' '
}

/// Check if a byte is `/` or `\`
pub fn is_slash(b: u8) -> bool {
    matches!(b, b'/' | b'\\')
}

/// The 52 ASCII letters, built once at compile time
const ALPHA_TABLE: [bool; 256] = {
    let mut table = [false; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = true;
        i += 1;
    }

    table
};

/// Check if a byte is an ASCII letter
pub fn is_alpha(b: u8) -> bool {
    ALPHA_TABLE[b as usize]
}

/// Bytes allowed after the first letter of a scheme: ALPHA / DIGIT / + - .
const SCHEME_CHAR_TABLE: [bool; 256] = {
    let mut table = ALPHA_TABLE;

    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = true;
        i += 1;
    }
    table[b'+' as usize] = true;
    table[b'-' as usize] = true;
    table[b'.' as usize] = true;

    table
};

/// Check if a byte may appear in a scheme
pub fn is_scheme_byte(b: u8) -> bool {
    SCHEME_CHAR_TABLE[b as usize]
}

/// Authority terminator classification
/// Returns: 0=part of authority, 1=always ends authority, 2=ends authority for special schemes
const AUTHORITY_END_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    table[b'/' as usize] = 1;
    table[b'?' as usize] = 1;
    table[b'#' as usize] = 1;

    // Browsers read `\` as `/` in special schemes
    table[b'\\' as usize] = 2;

    table
};

/// Check if a byte terminates the authority component
pub fn ends_authority(b: u8, special: bool) -> bool {
    match AUTHORITY_END_TABLE[b as usize] {
        1 => true,
        2 => special,
        _ => false,
    }
}
