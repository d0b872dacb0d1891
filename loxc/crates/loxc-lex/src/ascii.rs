//! ASCII character classification for the scanner.
//!
//! Lox source is classified byte by byte. Anything outside these classes,
//! including every byte of a multi-byte UTF-8 sequence, is an unexpected
//! character.

/// Checks if a byte is a decimal digit.
///
/// # Examples
///
/// ```
/// use loxc_lex::ascii::is_digit;
///
/// assert!(is_digit(b'7'));
/// assert!(!is_digit(b'x'));
/// ```
#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Checks if a byte can start an identifier: an ASCII letter or `_`.
///
/// # Examples
///
/// ```
/// use loxc_lex::ascii::is_alpha;
///
/// assert!(is_alpha(b'a'));
/// assert!(is_alpha(b'_'));
/// assert!(!is_alpha(b'1'));
/// ```
#[inline]
pub const fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Checks if a byte can continue an identifier.
#[inline]
pub const fn is_alpha_numeric(b: u8) -> bool {
    is_alpha(b) || is_digit(b)
}

/// Checks if a byte is whitespace that is skipped without touching the line
/// counter (space, carriage return, tab).
#[inline]
pub const fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\r' | b'\t')
}
