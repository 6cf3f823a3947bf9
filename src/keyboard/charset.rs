//! The fixed printable ASCII character set probed by the reporter

/// Every printable ASCII character, in probe order.
///
/// Digits, lowercase letters, uppercase letters, the 32 ASCII punctuation
/// characters, then the whitespace characters (space, tab, newline,
/// carriage return, vertical tab, form feed).
pub const PRINTABLE: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    " \t\n\r\x0b\x0c",
);

/// Number of characters in [`PRINTABLE`]
pub const PRINTABLE_LEN: usize = 100;

/// Iterate the printable set in probe order
pub fn printable_chars() -> impl Iterator<Item = char> {
    PRINTABLE.chars()
}
