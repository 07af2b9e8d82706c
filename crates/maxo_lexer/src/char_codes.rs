//! Character classes used by the state handlers.

/// Check if a character separates words.
///
/// This is the Unicode `White_Space` property, so line terminators
/// (`\n`, `\r`, U+2028, U+2029) count as whitespace too.
#[inline]
pub fn is_white_space(ch: char) -> bool {
    ch.is_whitespace()
}
